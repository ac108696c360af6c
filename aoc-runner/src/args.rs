//! Extra positional and keyword arguments forwarded to part callables

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A literal value given on the command line
///
/// Parsing never fails: text that is not an integer, float or boolean
/// is kept as a string.
#[derive(Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl Value {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }
}

impl FromStr for Value {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(v) = trimmed.parse::<i64>() {
            return Ok(Value::Int(v));
        }
        // `nan`, `inf` and `infinity` stay words
        if trimmed.bytes().any(|b| b.is_ascii_digit())
            && let Ok(v) = trimmed.parse::<f64>()
        {
            return Ok(Value::Float(v));
        }
        Ok(match trimmed {
            "true" | "True" => Value::Bool(true),
            "false" | "False" => Value::Bool(false),
            _ => Value::Str(s.to_string()),
        })
    }
}

// Debug doubles as the textual representation shown in log lines
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{:?}", v),
            Value::Float(v) => write!(f, "{:?}", v),
            Value::Bool(v) => write!(f, "{:?}", v),
            Value::Str(v) => write!(f, "{:?}", v),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

/// Positional arguments passed after the input handle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments(Vec<Value>);

impl Arguments {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.0.iter()
    }
}

impl FromIterator<Value> for Arguments {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Keyword arguments, ordered by key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kwargs(BTreeMap<String, Value>);

impl Kwargs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Kwargs {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_inference() {
        assert_eq!("42".parse::<Value>().unwrap(), Value::Int(42));
        assert_eq!("-3".parse::<Value>().unwrap(), Value::Int(-3));
        assert_eq!("2.5".parse::<Value>().unwrap(), Value::Float(2.5));
        assert_eq!("true".parse::<Value>().unwrap(), Value::Bool(true));
        assert_eq!("False".parse::<Value>().unwrap(), Value::Bool(false));
        assert_eq!(
            "sample".parse::<Value>().unwrap(),
            Value::Str("sample".to_string())
        );
    }

    #[test]
    fn test_float_words_stay_strings() {
        for word in ["nan", "NaN", "inf", "-inf", "infinity", "Infinity"] {
            assert_eq!(word.parse::<Value>().unwrap(), Value::Str(word.to_string()));
        }
        assert_eq!("1e3".parse::<Value>().unwrap(), Value::Float(1000.0));
        assert_eq!(".5".parse::<Value>().unwrap(), Value::Float(0.5));
    }

    #[test]
    fn test_value_debug_is_literal() {
        assert_eq!(format!("{:?}", Value::Int(7)), "7");
        assert_eq!(format!("{:?}", Value::Str("a".into())), "\"a\"");
    }

    #[test]
    fn test_kwargs_ordered_by_key() {
        let kwargs: Kwargs = [("b", Value::Int(2)), ("a", Value::Int(1))]
            .into_iter()
            .collect();
        let keys: Vec<&str> = kwargs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
