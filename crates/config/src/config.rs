use std::fmt;
use std::str::FromStr;

use relative_path::RelativePathBuf;

use super::*;

/// Everything the generator needs to know about a site.
///
/// Built once when the generator starts and read-only afterwards.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Config {
    pub title: String,
    pub url: String,
    pub source_directory: RelativePathBuf,
    pub output_directory: RelativePathBuf,
    pub lang: LocaleTag,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage_post_intro_type: Option<HomepagePostIntroType>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Translations::is_empty")]
    pub translations: Translations,
    #[serde(skip)]
    pub formatters: Formatters,
}

impl Config {
    pub fn from_yaml_str(content: &str) -> Result<Config> {
        serde_yaml::from_str(content)
            .map_err(|e| Status::new("Failed to parse config").with_source(e))
    }

    /// Labels for the site's own language.
    pub fn labels(&self) -> &Labels {
        self.translations.labels_for(&self.lang)
    }

    /// Check the values the generator relies on.
    ///
    /// This does not touch the filesystem; whether `source_directory` exists is
    /// decided when the generator runs.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Status::new("Site title is empty"));
        }

        let url = url::Url::parse(&self.url).map_err(|e| {
            Status::new("Invalid site url")
                .with_source(e)
                .context_with(|c| c.insert("url", self.url.clone()))
        })?;
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(Status::new("Site url must be absolute")
                .context_with(|c| c.insert("url", self.url.clone())));
        }

        let source = self.source_directory.normalize();
        let output = self.output_directory.normalize();
        if source.as_str().is_empty() {
            return Err(Status::new("Source directory must be below the project root")
                .context_with(|c| c.insert("sourceDirectory", self.source_directory.to_string())));
        }
        if output.as_str().is_empty() {
            return Err(Status::new("Output directory must be below the project root")
                .context_with(|c| c.insert("outputDirectory", self.output_directory.to_string())));
        }
        if source == output {
            return Err(
                Status::new("Source and output directories are the same").context_with(|c| {
                    c.insert("sourceDirectory", self.source_directory.to_string())
                        .insert("outputDirectory", self.output_directory.to_string())
                }),
            );
        }

        if !self.translations.is_empty() && self.translations.get(&self.lang).is_none() {
            return Err(Status::new("No translations for the site language")
                .context_with(|c| c.insert("lang", self.lang.to_string())));
        }

        #[cfg(not(feature = "unstable"))]
        if self.homepage_post_intro_type == Some(HomepagePostIntroType::Unknown) {
            return Err(Status::new("Unsupported homepagePostIntroType"));
        }

        log::debug!("Config for `{}` is valid", self.title);
        Ok(())
    }
}

impl FromStr for Config {
    type Err = Status;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_yaml_str(s)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", converted.trim_end())
    }
}

/// Which text the homepage shows under each post title.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub enum HomepagePostIntroType {
    /// The post's `description` metadata
    Description,
    /// Leading content of the post body
    #[default]
    Excerpt,
    None,
    #[cfg(not(feature = "unstable"))]
    #[doc(hidden)]
    #[serde(other)]
    Unknown,
}

impl HomepagePostIntroType {
    pub fn as_str(self) -> &'static str {
        match self {
            HomepagePostIntroType::Description => "description",
            HomepagePostIntroType::Excerpt => "excerpt",
            HomepagePostIntroType::None => "none",
            #[cfg(not(feature = "unstable"))]
            HomepagePostIntroType::Unknown => "",
        }
    }
}
