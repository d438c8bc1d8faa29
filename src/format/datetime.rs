//! strftime-style formatting for the chrono date and time types.
//!
//! The format string is a chrono strftime pattern such as `"%Y-%m-%d"`. An
//! empty pattern renders the value with `Display`. The context is not used:
//! chrono patterns carry no separators of their own.

use std::fmt::{Display, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use super::{FormatContext, Formattable, Render};
use crate::error::{Error, Result};

fn parse_pattern(pattern: &str) -> Result<Vec<Item<'_>>> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(Error::InvalidFormat {
            format: pattern.to_owned(),
            reason: "invalid strftime pattern",
        });
    }
    Ok(items)
}

/// Writes an already-delayed chrono rendering, turning a formatting failure
/// (a field the value does not have, such as `%H` on a date) into an error.
fn render(pattern: &str, delayed: impl Display) -> Result<String> {
    let mut output = String::new();
    write!(output, "{delayed}").map_err(|_| Error::InvalidFormat {
        format: pattern.to_owned(),
        reason: "pattern uses fields the value does not have",
    })?;
    Ok(output)
}

macro_rules! impl_formattable_for_naive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Formattable for $ty {
                fn format_with(&self, format: &str, _context: &FormatContext) -> Result<String> {
                    if format.is_empty() {
                        return Ok(self.to_string());
                    }
                    let items = parse_pattern(format)?;
                    render(format, self.format_with_items(items.into_iter()))
                }
            }

            impl Render for $ty {
                fn as_formattable(&self) -> Option<&dyn Formattable> {
                    Some(self)
                }
            }
        )*
    };
}

impl_formattable_for_naive!(NaiveDate, NaiveDateTime, NaiveTime);

impl<Tz> Formattable for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn format_with(&self, format: &str, _context: &FormatContext) -> Result<String> {
        if format.is_empty() {
            return Ok(self.to_string());
        }
        let items = parse_pattern(format)?;
        render(format, self.format_with_items(items.into_iter()))
    }
}

impl<Tz> Render for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn as_formattable(&self) -> Option<&dyn Formattable> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::to_formatted_string;
    use chrono::{FixedOffset, Utc};
    use rstest::rstest;

    fn new_year() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
    }

    #[rstest]
    fn empty_pattern_is_display() {
        assert_eq!(to_formatted_string(&new_year(), "", None).unwrap(), new_year().to_string());
        assert_eq!(to_formatted_string(&new_year(), "", None).unwrap(), "2020-01-01");
    }

    #[rstest]
    #[case("%Y", "2020")]
    #[case("%d/%m/%Y", "01/01/2020")]
    #[case("%A", "Wednesday")]
    fn date_patterns(#[case] pattern: &str, #[case] expected: &str) {
        assert_eq!(to_formatted_string(&new_year(), pattern, None).unwrap(), expected);
    }

    #[rstest]
    fn date_time_and_time() {
        let moment = new_year().and_hms_opt(13, 5, 9).unwrap();
        assert_eq!(to_formatted_string(&moment, "%Y-%m-%dT%H:%M:%S", None).unwrap(), "2020-01-01T13:05:09");
        assert_eq!(to_formatted_string(&moment.time(), "%H%M", None).unwrap(), "1305");
    }

    #[rstest]
    fn zoned_date_time() {
        let utc = Utc.with_ymd_and_hms(2006, 6, 6, 6, 6, 6).unwrap();
        assert_eq!(to_formatted_string(&utc, "%Y %z", None).unwrap(), "2006 +0000");

        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = utc.with_timezone(&offset);
        assert_eq!(to_formatted_string(&local, "%H:%M %:z", None).unwrap(), "08:06 +02:00");
    }

    #[rstest]
    fn invalid_pattern_is_rejected() {
        let error = to_formatted_string(&new_year(), "%Q", None).unwrap_err();
        assert!(matches!(error, Error::InvalidFormat { .. }));
    }

    #[rstest]
    fn time_fields_on_a_date_are_rejected() {
        let error = to_formatted_string(&new_year(), "%H", None).unwrap_err();
        assert!(error.is_invalid_argument());
    }

    #[rstest]
    fn context_is_ignored() {
        let context = FormatContext::new("other").with_decimal_separator(",");
        assert_eq!(to_formatted_string(&new_year(), "%Y", Some(&context)).unwrap(), "2020");
    }
}
