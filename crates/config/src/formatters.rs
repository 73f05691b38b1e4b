use std::fmt;

/// Renders an ISO calendar date (`YYYY-MM-DD`) for display.
///
/// Hooks have no way to report failure; they are expected to produce some text for
/// any input.
pub type DateFormatter = fn(&str) -> String;

/// Formatting hooks handed to the generator's rendering paths.
#[derive(Clone, Copy, Default)]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Formatters {
    pub date: Option<DateFormatter>,
}

impl Formatters {
    pub fn with_date(date: DateFormatter) -> Self {
        Self { date: Some(date) }
    }

    /// Run the date hook, passing the date through untouched when none is set.
    pub fn format_date(&self, iso_date: &str) -> String {
        match self.date {
            Some(date) => date(iso_date),
            None => iso_date.to_owned(),
        }
    }
}

impl fmt::Debug for Formatters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatters")
            .field("date", &self.date.map(|_| "<fn>"))
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn shout(d: &str) -> String {
        d.to_uppercase()
    }

    #[test]
    fn format_date_without_hook() {
        assert_eq!(Formatters::default().format_date("2023-01-15"), "2023-01-15");
    }

    #[test]
    fn format_date_with_hook() {
        let formatters = Formatters::with_date(shout);
        assert_eq!(formatters.format_date("abc"), "ABC");
    }

    #[test]
    fn debug_hides_fn_address() {
        let formatters = Formatters::with_date(shout);
        assert_eq!(
            format!("{formatters:?}"),
            r#"Formatters { date: Some("<fn>") }"#
        );
    }
}
