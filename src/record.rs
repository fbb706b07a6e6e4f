//! Record types shared by the loader, normalizer and aggregators.

/// A single data row as read from the source file, keyed by header.
///
/// Fields are kept in header order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: Vec<(String, String)>,
}

impl RawRecord {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Returns the value stored under exactly `key`. The last of duplicate
    /// headers wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .rfind(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A normalized field value.
///
/// `Missing` marks a numeric field whose text was empty or could not be
/// parsed. It is never produced for plain text columns, so an empty text
/// cell stays `Text("")`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    Missing,
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

/// A row after key/value trimming and numeric coercion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanRecord {
    fields: Vec<(String, Value)>,
}

impl CleanRecord {
    pub fn new(fields: Vec<(String, Value)>) -> Self {
        Self { fields }
    }

    /// The last of duplicate headers wins.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().rfind(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Non-empty text stored under `key`.
    ///
    /// Absent keys, `Missing`, numbers and empty strings all yield `None`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(Value::as_text)
            .filter(|s| !s.is_empty())
    }

    /// Numeric value stored under `key`, if the field was coerced successfully.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_number)
    }

    /// Header keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for CleanRecord {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
