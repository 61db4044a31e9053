use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::Value;
use std::fmt;

/// The per-episode stream quality map exactly as the anime API sends it: resolution labels such
/// as `"720p"` mapped to stream URLs, in the order the API listed them.
///
/// Decoding is lenient. A missing, `null` or non-object value becomes an empty map, and entries
/// whose value isn't a string are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawStreamMap {
    entries: Vec<(String, String)>,
}

impl RawStreamMap {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, u)| (l.as_str(), u.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L, U> FromIterator<(L, U)> for RawStreamMap
where
    L: Into<String>,
    U: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (L, U)>>(iter: T) -> Self {
        RawStreamMap {
            entries: iter.into_iter().map(|(l, u)| (l.into(), u.into())).collect(),
        }
    }
}

struct RawStreamMapVisitor;

impl<'de> Visitor<'de> for RawStreamMapVisitor {
    type Value = RawStreamMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of resolution labels to stream URLs")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::new();
        while let Some((label, value)) = map.next_entry::<String, Value>()? {
            if let Value::String(url) = value {
                entries.push((label, url));
            }
        }
        Ok(RawStreamMap { entries })
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RawStreamMap::default())
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(RawStreamMap::default())
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(RawStreamMap::default())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RawStreamMapVisitor)
    }

    fn visit_str<E>(self, _v: &str) -> Result<Self::Value, E> {
        Ok(RawStreamMap::default())
    }

    fn visit_bool<E>(self, _v: bool) -> Result<Self::Value, E> {
        Ok(RawStreamMap::default())
    }

    fn visit_i64<E>(self, _v: i64) -> Result<Self::Value, E> {
        Ok(RawStreamMap::default())
    }

    fn visit_u64<E>(self, _v: u64) -> Result<Self::Value, E> {
        Ok(RawStreamMap::default())
    }

    fn visit_f64<E>(self, _v: f64) -> Result<Self::Value, E> {
        Ok(RawStreamMap::default())
    }
}

impl<'de> Deserialize<'de> for RawStreamMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RawStreamMapVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deserialize_keeps_api_order_and_drops_non_string_values() {
        // Arrange
        let input = r#"{ "720p": "B", "1080p": "A", "360p": null, "480p": 3 }"#;

        // Act
        let actual: RawStreamMap = serde_json::from_str(input).unwrap();

        // Assert
        let pairs: Vec<(&str, &str)> = actual.iter().collect();
        assert_eq!(vec![("720p", "B"), ("1080p", "A")], pairs);
    }

    #[test]
    fn deserialize_returns_empty_given_null_or_array() {
        // Act
        let from_null: RawStreamMap = serde_json::from_str("null").unwrap();
        let from_array: RawStreamMap = serde_json::from_str(r#"["720p"]"#).unwrap();

        // Assert
        assert!(from_null.is_empty());
        assert!(from_array.is_empty());
    }

    #[test]
    fn deserialize_keeps_api_order_when_decoded_through_value() {
        // Arrange
        let input: Value =
            serde_json::from_str(r#"{ "720p": "B", "1080p": "A", "360p": "C" }"#).unwrap();

        // Act
        let actual: RawStreamMap = serde_json::from_value(input).unwrap();

        // Assert
        let labels: Vec<&str> = actual.iter().map(|(l, _)| l).collect();
        assert_eq!(vec!["720p", "1080p", "360p"], labels);
    }
}
