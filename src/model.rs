use std::fmt;

use serde_json::Value;

/// Display units, each 1024 times the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Bytes,
    KB,
    MB,
    GB,
    TB,
    PB,
    EB,
    ZB,
    YB,
}

impl Unit {
    pub const ALL: [Unit; 9] = [
        Unit::Bytes,
        Unit::KB,
        Unit::MB,
        Unit::GB,
        Unit::TB,
        Unit::PB,
        Unit::EB,
        Unit::ZB,
        Unit::YB,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Bytes => "Bytes",
            Unit::KB => "KB",
            Unit::MB => "MB",
            Unit::GB => "GB",
            Unit::TB => "TB",
            Unit::PB => "PB",
            Unit::EB => "EB",
            Unit::ZB => "ZB",
            Unit::YB => "YB",
        }
    }

    /// Position in [`Unit::ALL`], which is also the power of 1024.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One input to the class-name composer.
///
/// Mirrors what UI code passes around: plain strings, numbers, nested lists,
/// `class -> enabled` maps, and values that should simply be skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassValue {
    Str(String),
    Num(i64),
    List(Vec<ClassValue>),
    Map(Vec<(String, bool)>),
    Skip,
}

impl ClassValue {
    /// Convert a JSON value using JavaScript truthiness. `null`, booleans, `0`
    /// and `""` contribute nothing; object keys are kept when their value is
    /// truthy.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null | Value::Bool(_) => ClassValue::Skip,
            Value::String(s) => ClassValue::Str(s.clone()),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ClassValue::Num(i),
                // `1.0` and `1e2` name the classes `1` and `100`.
                None => match n.as_f64() {
                    Some(f) if is_truthy(value) => ClassValue::Str(f.to_string()),
                    _ => ClassValue::Skip,
                },
            },
            Value::Array(items) => {
                ClassValue::List(items.iter().map(ClassValue::from_json).collect())
            }
            Value::Object(map) => ClassValue::Map(
                map.iter().map(|(key, enabled)| (key.clone(), is_truthy(enabled))).collect(),
            ),
        }
    }

    /// True when the value contributes nothing to the joined string.
    pub fn is_falsy(&self) -> bool {
        match self {
            ClassValue::Str(s) => s.is_empty(),
            ClassValue::Num(n) => *n == 0,
            ClassValue::Skip => true,
            ClassValue::List(_) | ClassValue::Map(_) => false,
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        ClassValue::Str(value.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        ClassValue::Str(value)
    }
}

impl From<&String> for ClassValue {
    fn from(value: &String) -> Self {
        ClassValue::Str(value.clone())
    }
}

/// Booleans never name a class, so both `true` and `false` are skipped.
impl From<bool> for ClassValue {
    fn from(_: bool) -> Self {
        ClassValue::Skip
    }
}

impl From<i32> for ClassValue {
    fn from(value: i32) -> Self {
        ClassValue::Num(i64::from(value))
    }
}

impl From<i64> for ClassValue {
    fn from(value: i64) -> Self {
        ClassValue::Num(value)
    }
}

impl From<u32> for ClassValue {
    fn from(value: u32) -> Self {
        ClassValue::Num(i64::from(value))
    }
}

impl From<(&str, bool)> for ClassValue {
    fn from((class, enabled): (&str, bool)) -> Self {
        ClassValue::Map(vec![(class.to_string(), enabled)])
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::Skip, Into::into)
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(values: Vec<T>) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(values: [T; N]) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unit_table_is_ordered_by_power() {
        for (index, unit) in Unit::ALL.iter().enumerate() {
            assert_eq!(unit.index(), index);
        }
        assert_eq!(Unit::Bytes.to_string(), "Bytes");
        assert_eq!(Unit::YB.to_string(), "YB");
    }

    #[test]
    fn json_values_follow_js_truthiness() {
        let value = json!(["a", null, false, true, 0, 7, 1.5, "", {"b": 1, "c": 0, "d": "", "e": []}]);
        assert_eq!(
            ClassValue::from_json(&value),
            ClassValue::List(vec![
                ClassValue::Str("a".into()),
                ClassValue::Skip,
                ClassValue::Skip,
                ClassValue::Skip,
                ClassValue::Num(0),
                ClassValue::Num(7),
                ClassValue::Str("1.5".into()),
                ClassValue::Str(String::new()),
                ClassValue::Map(vec![
                    ("b".into(), true),
                    ("c".into(), false),
                    ("d".into(), false),
                    ("e".into(), true),
                ]),
            ])
        );
    }

    #[test]
    fn float_json_numbers_use_shortest_spelling() {
        let value: Value = serde_json::from_str("[1.0, 1e2, 0.25, -2.50, 0.0]").unwrap();
        assert_eq!(
            ClassValue::from_json(&value),
            ClassValue::List(vec![
                ClassValue::Str("1".into()),
                ClassValue::Str("100".into()),
                ClassValue::Str("0.25".into()),
                ClassValue::Str("-2.5".into()),
                ClassValue::Skip,
            ])
        );
    }

    #[test]
    fn option_and_tuple_conversions() {
        assert_eq!(ClassValue::from(None::<&str>), ClassValue::Skip);
        assert_eq!(ClassValue::from(Some("x")), ClassValue::Str("x".into()));
        assert_eq!(ClassValue::from(("x", false)), ClassValue::Map(vec![("x".into(), false)]));
        assert!(ClassValue::from(false).is_falsy());
        assert!(ClassValue::from(0_i64).is_falsy());
        assert!(!ClassValue::from(vec!["a"]).is_falsy());
    }
}
