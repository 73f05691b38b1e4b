use std::fmt;
use std::str::FromStr;

use crate::Result;
use crate::Status;

static LOCALE_TAG: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
    regex::Regex::new(r"^([A-Za-z]{2,3})(?:-([A-Za-z]{4}))?(?:-([A-Za-z]{2}|[0-9]{3}))?$")
        .unwrap()
});

/// A language tag such as `pt-BR`, normalized to its canonical casing.
///
/// Only the language, script and region subtags are recognized.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocaleTag {
    tag: String,
    language_len: usize,
}

impl LocaleTag {
    pub fn parse<S: AsRef<str>>(tag: S) -> Result<Self> {
        Self::parse_str(tag.as_ref())
    }

    fn parse_str(tag: &str) -> Result<Self> {
        let caps = LOCALE_TAG.captures(tag).ok_or_else(|| {
            Status::new("Invalid locale tag").context_with(|c| c.insert("Tag", tag.to_owned()))
        })?;

        let language = caps
            .get(1)
            .expect("unconditional capture")
            .as_str()
            .to_ascii_lowercase();
        let language_len = language.len();
        let mut normalized = language;
        if let Some(script) = caps.get(2) {
            let script = script.as_str();
            normalized.push('-');
            normalized.push_str(&script[..1].to_ascii_uppercase());
            normalized.push_str(&script[1..].to_ascii_lowercase());
        }
        if let Some(region) = caps.get(3) {
            normalized.push('-');
            normalized.push_str(&region.as_str().to_ascii_uppercase());
        }

        Ok(Self {
            tag: normalized,
            language_len,
        })
    }

    /// Primary language subtag, e.g. `pt` for `pt-BR`
    pub fn language(&self) -> &str {
        &self.tag[..self.language_len]
    }

    pub fn as_str(&self) -> &str {
        &self.tag
    }
}

impl FromStr for LocaleTag {
    type Err = Status;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tag.fmt(f)
    }
}

impl AsRef<str> for LocaleTag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl serde::Serialize for LocaleTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

struct LocaleTagVisitor;

impl serde::de::Visitor<'_> for LocaleTagVisitor {
    type Value = LocaleTag;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a locale tag such as `pt-BR`")
    }

    fn visit_str<E>(self, value: &str) -> Result<LocaleTag, E>
    where
        E: serde::de::Error,
    {
        LocaleTag::parse(value)
            .map_err(|_| E::custom(format!("Invalid locale tag '{value}', must be like `ll-RR`")))
    }
}

impl<'de> serde::de::Deserialize<'de> for LocaleTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_str(LocaleTagVisitor)
    }
}
