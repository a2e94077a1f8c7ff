use serde::{ser::Error as _, Serializer};
use time::{macros::format_description, Date};

use crate::error::{Error, Result};

/// Renders a date as the `YYYY-MM-DD` path segment used by effective-date
/// routes.
pub(crate) fn date_segment(date: Date) -> Result<String> {
    date.format(&format_description!("[year]-[month]-[day]"))
        .map_err(|_| Error::InvalidEndpoint)
}

// The PayRun.io API expects calendar dates as plain `YYYY-MM-DD` strings and
// booleans as the literal strings "true"/"false" in request bodies. These
// helpers are applied with `serialize_with` on optional model fields, so the
// `None` arms only exist for completeness.

/// Serializes an optional `time::Date` as a `YYYY-MM-DD` wire string.
pub fn date_string<S>(date: &Option<Date>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => {
            let formatted = date
                .format(&format_description!("[year]-[month]-[day]"))
                .map_err(S::Error::custom)?;
            serializer.serialize_str(&formatted)
        }
        None => serializer.serialize_none(),
    }
}

/// Serializes an optional `bool` as the wire string `"true"` or `"false"`.
pub fn bool_string<S>(value: &Option<bool>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(true) => serializer.serialize_str("true"),
        Some(false) => serializer.serialize_str("false"),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use time::macros::date;

    #[derive(Serialize)]
    struct Probe {
        #[serde(serialize_with = "super::date_string")]
        date: Option<time::Date>,
        #[serde(serialize_with = "super::bool_string")]
        flag: Option<bool>,
    }

    #[test]
    fn dates_and_booleans_render_as_wire_strings() {
        let probe = Probe {
            date: Some(date!(2024 - 04 - 06)),
            flag: Some(false),
        };
        let value = serde_json::to_value(&probe).unwrap();
        assert_eq!(value["date"], "2024-04-06");
        assert_eq!(value["flag"], "false");
    }
}
