use crate::error::{Error, Result};

use aws_sdk_dynamodb::{primitives, types};
use std::fmt;

/// Key component.
///
/// ```rust
/// use dynamodb_query::common::key;
///
/// let key = key::Key {
///     name: "id".to_string(),
///     value: key::KeyValue::String("1".to_string()),
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Key<T> {
    /// The attribute name of the key.
    pub name: String,
    /// The value of the key.
    pub value: T,
}

/// Scalar type of a key attribute, as declared in the table's attribute definitions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarType {
    /// `S`
    String,
    /// `N`
    Number,
    /// `B`
    Binary,
}

impl TryFrom<&types::ScalarAttributeType> for ScalarType {
    type Error = Error;

    fn try_from(scalar_type: &types::ScalarAttributeType) -> Result<Self> {
        match scalar_type {
            types::ScalarAttributeType::S => Ok(Self::String),
            types::ScalarAttributeType::N => Ok(Self::Number),
            types::ScalarAttributeType::B => Ok(Self::Binary),
            other => Err(Error::UnsupportedScalarType(other.as_str().to_string())),
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "S",
            Self::Number => "N",
            Self::Binary => "B",
        };
        f.write_str(name)
    }
}

/// Typed key value collected from the operator.
///
/// Numbers keep the literal text they were entered with, so values wider than
/// a 64-bit float reach the store unchanged.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyValue {
    /// String value.
    String(String),
    /// Numeric value, as its validated literal.
    Number(String),
    /// Binary value.
    Binary(Vec<u8>),
    /// Explicit null, produced for empty input when empty values are converted.
    Null,
}

impl Default for KeyValue {
    fn default() -> Self {
        Self::String(String::new())
    }
}

impl KeyValue {
    /// Coerce raw operator input into a value of the given scalar type.
    ///
    /// Numeric input is parsed on a best-effort basis: surrounding whitespace is
    /// dropped and any finite literal is accepted. Non-numeric input fails.
    /// With `convert_empty_values`, empty input becomes [`KeyValue::Null`].
    ///
    /// ```rust
    /// use dynamodb_query::common::key::{KeyValue, ScalarType};
    ///
    /// let value = KeyValue::coerce(" 100 ", ScalarType::Number, false).unwrap();
    /// assert_eq!(value, KeyValue::Number("100".to_string()));
    /// ```
    pub fn coerce(raw: &str, scalar_type: ScalarType, convert_empty_values: bool) -> Result<Self> {
        if raw.is_empty() && convert_empty_values {
            return Ok(Self::Null);
        }
        match scalar_type {
            ScalarType::String => Ok(Self::String(raw.to_string())),
            ScalarType::Binary => Ok(Self::Binary(raw.as_bytes().to_vec())),
            ScalarType::Number => {
                let literal = raw.trim();
                match literal.parse::<f64>() {
                    Ok(number) if number.is_finite() => Ok(Self::Number(literal.to_string())),
                    _ => Err(Error::InvalidNumber(raw.to_string())),
                }
            }
        }
    }
}

impl From<KeyValue> for types::AttributeValue {
    fn from(value: KeyValue) -> Self {
        match value {
            KeyValue::String(value) => Self::S(value),
            KeyValue::Number(value) => Self::N(value),
            KeyValue::Binary(value) => Self::B(primitives::Blob::new(value)),
            KeyValue::Null => Self::Null(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::string("cust#1", ScalarType::String, KeyValue::String("cust#1".to_string()))]
    #[case::string_keeps_whitespace(" a ", ScalarType::String, KeyValue::String(" a ".to_string()))]
    #[case::string_that_looks_numeric("42", ScalarType::String, KeyValue::String("42".to_string()))]
    #[case::integer("100", ScalarType::Number, KeyValue::Number("100".to_string()))]
    #[case::trimmed(" 7 ", ScalarType::Number, KeyValue::Number("7".to_string()))]
    #[case::negative_decimal("-1.5", ScalarType::Number, KeyValue::Number("-1.5".to_string()))]
    #[case::exponent("1e3", ScalarType::Number, KeyValue::Number("1e3".to_string()))]
    #[case::binary("ab", ScalarType::Binary, KeyValue::Binary(vec![b'a', b'b']))]
    fn test_coerce(#[case] raw: &str, #[case] scalar_type: ScalarType, #[case] expected: KeyValue) {
        let actual = KeyValue::coerce(raw, scalar_type, false).unwrap();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::word("abc")]
    #[case::empty("")]
    #[case::not_a_number("NaN")]
    #[case::infinite("inf")]
    fn test_coerce_invalid_number(#[case] raw: &str) {
        let actual = KeyValue::coerce(raw, ScalarType::Number, false);
        assert!(matches!(actual, Err(Error::InvalidNumber(input)) if input == raw));
    }

    #[rstest]
    #[case::string(ScalarType::String)]
    #[case::number(ScalarType::Number)]
    #[case::binary(ScalarType::Binary)]
    fn test_coerce_converts_empty_values(#[case] scalar_type: ScalarType) {
        let actual = KeyValue::coerce("", scalar_type, true).unwrap();
        assert_eq!(actual, KeyValue::Null);
    }

    #[rstest]
    #[case("0", 0.0)]
    #[case("100", 100.0)]
    #[case("-2.25", -2.25)]
    #[case("1e3", 1000.0)]
    fn test_coerced_number_equals_parsed_value(#[case] raw: &str, #[case] expected: f64) {
        let KeyValue::Number(literal) = KeyValue::coerce(raw, ScalarType::Number, false).unwrap() else {
            panic!("`{raw}` did not coerce to a number");
        };
        assert_eq!(literal.parse::<f64>().ok(), Some(expected));
    }

    #[rstest]
    #[case::string(KeyValue::String("a".to_string()), types::AttributeValue::S("a".to_string()))]
    #[case::number(KeyValue::Number("10".to_string()), types::AttributeValue::N("10".to_string()))]
    #[case::binary(
        KeyValue::Binary(vec![1, 2]),
        types::AttributeValue::B(primitives::Blob::new(vec![1, 2]))
    )]
    #[case::null(KeyValue::Null, types::AttributeValue::Null(true))]
    fn test_key_value_to_attribute_value(
        #[case] value: KeyValue,
        #[case] expected: types::AttributeValue,
    ) {
        let actual: types::AttributeValue = value.into();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_scalar_type_from_attribute_type() {
        let actual = ScalarType::try_from(&types::ScalarAttributeType::N).unwrap();
        assert_eq!(actual, ScalarType::Number);
        let actual = ScalarType::try_from(&types::ScalarAttributeType::from("X"));
        assert!(matches!(actual, Err(Error::UnsupportedScalarType(name)) if name == "X"));
    }
}
