use booblie_config::LocaleTag;
use booblie_config::Result;
use booblie_config::date::{self, IsoDate};

const ADDED_ON: &str = "Adicionada em ";
const INVALID_DATE: &str = "Invalid Date";

static PT_BR: once_cell::sync::Lazy<LocaleTag> =
    once_cell::sync::Lazy::new(|| LocaleTag::parse("pt-BR").expect("valid locale tag"));

/// Date hook for recipe pages: `2023-01-15` becomes `Adicionada em 15 de janeiro de 2023`.
///
/// Malformed input is rendered as `Adicionada em Invalid Date` rather than failing.
pub fn format_added_on(iso_date: &str) -> String {
    try_format_added_on(iso_date).unwrap_or_else(|e| {
        log::warn!("Cannot format date `{iso_date}`: {e}");
        format!("{ADDED_ON}{INVALID_DATE}")
    })
}

pub fn try_format_added_on(iso_date: &str) -> Result<String> {
    let date = IsoDate::parse(iso_date)?;
    Ok(format!("{ADDED_ON}{}", date::long_date(date, &PT_BR)))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn format_mid_month() {
        assert_eq!(
            format_added_on("2023-01-15"),
            "Adicionada em 15 de janeiro de 2023"
        );
    }

    #[test]
    fn format_first_of_month() {
        assert_eq!(
            format_added_on("2023-12-01"),
            "Adicionada em 1 de dezembro de 2023"
        );
        assert_eq!(
            format_added_on("2024-03-01"),
            "Adicionada em 1 de março de 2024"
        );
    }

    #[test]
    fn format_is_repeatable() {
        assert_eq!(format_added_on("2022-07-04"), format_added_on("2022-07-04"));
    }

    #[test]
    fn format_valid_dates_have_prefix() {
        for (year, month, day) in [(1999, 12, 31), (2000, 2, 29), (2024, 6, 30), (2031, 11, 9)] {
            let iso = format!("{year:04}-{month:02}-{day:02}");
            let formatted = format_added_on(&iso);
            let rest = formatted.strip_prefix(ADDED_ON).unwrap();
            assert!(!rest.is_empty());
            assert_ne!(rest, INVALID_DATE, "{iso}");
        }
    }

    #[test]
    fn format_invalid_date_marker() {
        assert_eq!(format_added_on("2023-13-40"), "Adicionada em Invalid Date");
        assert_eq!(format_added_on("ontem"), "Adicionada em Invalid Date");
    }

    #[test]
    fn try_format_reports_invalid_date() {
        assert!(try_format_added_on("2023-13-40").is_err());
        assert!(try_format_added_on("2023-02-30").is_err());
        assert_eq!(
            try_format_added_on("2023-01-15").unwrap(),
            "Adicionada em 15 de janeiro de 2023"
        );
    }
}
