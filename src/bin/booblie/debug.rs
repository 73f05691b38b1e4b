use booblie::config::{LabelKey, LocaleTag};

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints the site config
    Config,

    /// Checks the site config
    Validate,

    /// Prints the UI labels for a locale
    Labels {
        /// Locale to resolve [default: the site language]
        #[arg(long)]
        locale: Option<String>,
    },

    /// Runs the date formatter on each `YYYY-MM-DD` argument
    Date {
        #[arg(required = true)]
        dates: Vec<String>,

        /// Fail on malformed dates instead of printing `Invalid Date`
        #[arg(long)]
        strict: bool,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let site = booblie::site();
        match self {
            Self::Config => {
                println!("{site}");
            }
            Self::Validate => {
                site.validate()?;
                println!("{}: config is valid", site.title);
            }
            Self::Labels { locale } => {
                let lang = match locale {
                    Some(locale) => LocaleTag::parse(locale)?,
                    None => site.lang.clone(),
                };
                let labels = site.translations.labels_for(&lang);
                for key in LabelKey::ALL {
                    println!("{key}: {}", labels.get(key));
                }
            }
            Self::Date { dates, strict } => {
                for date in dates {
                    let formatted = if *strict {
                        booblie::try_format_added_on(date)?
                    } else {
                        site.formatters.format_date(date)
                    };
                    println!("{formatted}");
                }
            }
        }

        Ok(())
    }
}
