//! Calendar dates as written in post metadata (`YYYY-MM-DD`) and their long-form rendering.

use std::fmt;

use crate::LocaleTag;
use crate::Result;
use crate::Status;

const PT_MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// A calendar day with no time-of-day or offset attached.
///
/// Rendering never passes through an instant, so no timezone can move the day.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate(time::Date);

impl IsoDate {
    pub fn from_calendar_date(year: i32, month: u8, day: u8) -> Result<Self> {
        let month = time::Month::try_from(month).map_err(|e| {
            Status::new("Invalid month")
                .with_source(e)
                .context_with(|c| c.insert("Month", month.to_string()))
        })?;
        let date = time::Date::from_calendar_date(year, month, day).map_err(|e| {
            Status::new("Invalid day of month")
                .with_source(e)
                .context_with(|c| c.insert("Day", day.to_string()))
        })?;
        Ok(Self(date))
    }

    /// Parse `YYYY-MM-DD`, with the month 1-indexed.
    pub fn parse<S: AsRef<str>>(d: S) -> Result<Self> {
        Self::parse_str(d.as_ref())
    }

    fn parse_str(d: &str) -> Result<Self> {
        let mut parts = d.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(Status::new("Invalid date, must be `YYYY-MM-DD`")
                .context_with(|c| c.insert("Date", d.to_owned())));
        };

        let year: i32 = parse_component(d, "year", year)?;
        let month: u8 = parse_component(d, "month", month)?;
        let day: u8 = parse_component(d, "day", day)?;
        Self::from_calendar_date(year, month, day)
            .map_err(|e| e.context_with(|c| c.insert("Date", d.to_owned())))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-indexed month
    pub fn month(&self) -> u8 {
        u8::from(self.0.month())
    }

    pub fn day(&self) -> u8 {
        self.0.day()
    }
}

fn parse_component<T: std::str::FromStr>(date: &str, name: &'static str, value: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e| {
        Status::new("Invalid date component")
            .with_source(e)
            .context_with(|c| {
                c.insert("Component", name.to_owned())
                    .insert("Date", date.to_owned())
            })
    })
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}

impl From<time::Date> for IsoDate {
    fn from(v: time::Date) -> Self {
        IsoDate(v)
    }
}

impl From<IsoDate> for time::Date {
    fn from(v: IsoDate) -> Self {
        v.0
    }
}

/// Spell out a date the way `lang` writes it in long form: numeric day, full month
/// name and numeric year.
///
/// Portuguese gets `15 de janeiro de 2023`; every other language is rendered in
/// English as `January 15, 2023`.
pub fn long_date(date: IsoDate, lang: &LocaleTag) -> String {
    match lang.language() {
        "pt" => format!(
            "{} de {} de {}",
            date.day(),
            PT_MONTHS[usize::from(date.month() - 1)],
            date.year()
        ),
        _ => format!("{} {}, {}", date.0.month(), date.day(), date.year()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn pt_br() -> LocaleTag {
        LocaleTag::parse("pt-BR").unwrap()
    }

    #[test]
    fn parse_two_digit_fields() {
        let date = IsoDate::parse("2023-01-15").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2023, 1, 15));
    }

    #[test]
    fn parse_single_digit_fields() {
        let date = IsoDate::parse("2024-3-1").unwrap();
        assert_eq!(date, IsoDate::parse("2024-03-01").unwrap());
    }

    #[test]
    fn parse_leap_day() {
        assert!(IsoDate::parse("2024-02-29").is_ok());
        assert!(IsoDate::parse("2023-02-29").is_err());
    }

    #[test]
    fn parse_out_of_range_month() {
        assert!(IsoDate::parse("2023-13-01").is_err());
        assert!(IsoDate::parse("2023-00-01").is_err());
    }

    #[test]
    fn parse_out_of_range_day() {
        assert!(IsoDate::parse("2023-04-31").is_err());
        assert!(IsoDate::parse("2023-13-40").is_err());
    }

    #[test]
    fn parse_wrong_shape() {
        assert!(IsoDate::parse("").is_err());
        assert!(IsoDate::parse("2023-01").is_err());
        assert!(IsoDate::parse("2023-01-15-01").is_err());
        assert!(IsoDate::parse("2023/01/15").is_err());
        assert!(IsoDate::parse("yyyy-mm-dd").is_err());
    }

    #[test]
    fn display_pads() {
        let date = IsoDate::parse("2024-3-1").unwrap();
        assert_eq!(date.to_string(), "2024-03-01");
    }

    #[test]
    fn long_date_portuguese() {
        let date = IsoDate::parse("2023-01-15").unwrap();
        assert_eq!(long_date(date, &pt_br()), "15 de janeiro de 2023");
    }

    #[test]
    fn long_date_portuguese_no_padding() {
        let date = IsoDate::parse("2023-12-01").unwrap();
        assert_eq!(long_date(date, &pt_br()), "1 de dezembro de 2023");
    }

    #[test]
    fn long_date_first_of_month_stays_put() {
        let date = IsoDate::parse("2024-03-01").unwrap();
        assert_eq!(long_date(date, &pt_br()), "1 de março de 2024");
    }

    #[test]
    fn long_date_every_month() {
        for (month, name) in (1..=12).zip(PT_MONTHS) {
            let date = IsoDate::from_calendar_date(2022, month, 1).unwrap();
            assert_eq!(long_date(date, &pt_br()), format!("1 de {name} de 2022"));
        }
    }

    #[test]
    fn long_date_english() {
        let date = IsoDate::parse("2023-01-15").unwrap();
        let en = LocaleTag::parse("en-US").unwrap();
        assert_eq!(long_date(date, &en), "January 15, 2023");
    }
}
