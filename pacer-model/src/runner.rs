use chrono::{DateTime, Utc};

use crate::ids::RunnerID;
use crate::time::TimeOfDay;

/// Raw participant entry as submitted by the entry form.
///
/// Start and end times are kept as the submitted text; the derivation step
/// parses them and computes the finish time before anything is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct NewRunner {
    pub name: String,
    pub bib_number: String,
    pub city: String,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "string_set::deserialize"))]
    pub categories: Vec<String>,
    pub start_time: String,
    pub end_time: String,
    pub did_finish: bool,
    pub medal_received: bool,
    pub certificate_received: bool,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "string_set::deserialize"))]
    pub sponsors: Vec<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "string_set::deserialize"))]
    pub refreshment_stalls: Vec<String>,
}

/// One participant's stored entry.
///
/// `categories`, `sponsors` and `refreshment_stalls` are sets for analytics
/// purposes; insertion order and duplicates are preserved exactly as
/// submitted. `finish_time` is attached once at ingestion and is never
/// recomputed. It can be negative when the end time is earlier in the day
/// than the start time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RunnerRecord {
    pub id: RunnerID,
    pub name: String,
    pub bib_number: String,
    pub city: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub categories: Vec<String>,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub did_finish: bool,
    pub medal_received: bool,
    pub certificate_received: bool,
    /// Elapsed minutes between start and end.
    #[cfg_attr(feature = "serde", serde(default))]
    pub finish_time: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sponsors: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub refreshment_stalls: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Split a comma-separated form value into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accepts a JSON list of strings, a single comma-separated string, or null.
#[cfg(feature = "serde")]
mod string_set {
    use serde::de::{self, Deserializer, SeqAccess, Visitor};
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StringSetVisitor)
    }

    struct StringSetVisitor;

    impl<'de> Visitor<'de> for StringSetVisitor {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a list of strings or a comma-separated string")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(super::split_list(value))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(StringSetVisitor)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(value) = seq.next_element::<String>()? {
                values.push(value);
            }
            Ok(values)
        }
    }
}
