/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Value types for enum dictionaries.
//!
//! This module provides:
//! - [`DictKey`]: Normalized lookup key (the stringified raw value)
//! - [`DictValue`]: Raw enum value as declared by the generator
//! - [`FieldValue`]: Typed value of an entry's extension field
//!
//! ## Key normalization
//!
//! Dictionaries are indexed by the *display form* of a value: `1`, `1u64` and
//! `"1"` all normalize to the key `"1"` and therefore address the same entry.
//! This mirrors how generated front-end code compares values and is relied on
//! by callers that receive raw values as strings (query parameters, form
//! fields) while the enum itself is numeric.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// Normalized dictionary lookup key.
///
/// Wraps the stringified form of a raw enum value. Any integer, string or
/// [`DictValue`] converts into a key, so lookups accept whichever form the
/// caller happens to hold.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct DictKey(String);

impl DictKey {
    /// Creates a key from an already stringified value.
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the key and returns the inner string.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Borrow<str> for DictKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DictKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DictKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DictKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for DictKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&String> for DictKey {
    fn from(key: &String) -> Self {
        Self(key.clone())
    }
}

impl From<&DictKey> for DictKey {
    fn from(key: &DictKey) -> Self {
        key.clone()
    }
}

impl From<&DictValue> for DictKey {
    fn from(value: &DictValue) -> Self {
        value.key()
    }
}

impl From<DictValue> for DictKey {
    fn from(value: DictValue) -> Self {
        match value {
            DictValue::String(s) => Self(s),
            other => other.key(),
        }
    }
}

macro_rules! impl_key_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for DictKey {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

impl_key_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Raw value of an enum member.
///
/// Generated enums are either integer- or string-backed, so the raw value is
/// one of those two shapes. Unsigned values that do not fit an `i64` keep
/// their own variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DictValue {
    /// Signed integer value.
    Int(i64),
    /// Unsigned integer value above `i64::MAX`.
    UInt(u64),
    /// String value.
    String(String),
}

impl DictValue {
    /// Returns the normalized lookup key for this value.
    #[must_use]
    pub fn key(&self) -> DictKey {
        DictKey(self.to_string())
    }

    /// Returns true if this is an integer value.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::UInt(_))
    }

    /// Returns the value as an i64, if it is a signed integer.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a u64, if it is a non-negative integer.
    #[must_use]
    pub const fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Int(v) if *v >= 0 => Some(*v as u64),
            Self::UInt(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a string, if it is a String variant.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value widened to `i128`, used for ordering.
    #[must_use]
    pub(crate) const fn as_i128(&self) -> Option<i128> {
        match self {
            Self::Int(v) => Some(*v as i128),
            Self::UInt(v) => Some(*v as i128),
            Self::String(_) => None,
        }
    }

    /// Compares two integer values numerically.
    ///
    /// Returns `None` when either side is a string: string-backed enums have
    /// no natural order and keep their declaration order.
    #[must_use]
    pub fn numeric_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.as_i128()?.cmp(&other.as_i128()?))
    }
}

impl fmt::Display for DictValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::UInt(v) => write!(f, "{}", v),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<i64> for DictValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for DictValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for DictValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for DictValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::UInt(value), Self::Int)
    }
}

impl From<&str> for DictValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for DictValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl Serialize for DictValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::UInt(v) => serializer.serialize_u64(*v),
            Self::String(s) => serializer.serialize_str(s),
        }
    }
}

struct DictValueVisitor;

impl Visitor<'_> for DictValueVisitor {
    type Value = DictValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<DictValue, E> {
        Ok(DictValue::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<DictValue, E> {
        Ok(DictValue::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<DictValue, E> {
        Ok(DictValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<DictValue, E> {
        Ok(DictValue::String(v))
    }
}

impl<'de> Deserialize<'de> for DictValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DictValueVisitor)
    }
}

/// Value of an extension field on a dictionary entry.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// String value.
    String(String),
    /// Integer value.
    Int(i64),
    /// Unsigned integer value above `i64::MAX`.
    UInt(u64),
    /// Decimal/float value.
    Decimal(Decimal),
    /// Boolean value.
    Bool(bool),
}

impl FieldValue {
    /// Returns the value as a string, if it is a String variant.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an i64, if it is an Int variant.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a u64, if it is a non-negative integer.
    #[must_use]
    pub const fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Int(v) if *v >= 0 => Some(*v as u64),
            Self::UInt(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a Decimal, if it is numeric.
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(v) => Some(*v),
            Self::Int(v) => Some(Decimal::from(*v)),
            Self::UInt(v) => Some(Decimal::from(*v)),
            _ => None,
        }
    }

    /// Returns the value as a bool, if it is a Bool variant.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{}", s),
            Self::Int(v) => write!(f, "{}", v),
            Self::UInt(v) => write!(f, "{}", v),
            Self::Decimal(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::UInt(value), Self::Int)
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(s) => serializer.serialize_str(s),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::UInt(v) => serializer.serialize_u64(*v),
            Self::Decimal(v) => match v.to_f64() {
                Some(f) => serializer.serialize_f64(f),
                None => serializer.serialize_str(&v.to_string()),
            },
            Self::Bool(v) => serializer.serialize_bool(*v),
        }
    }
}

struct FieldValueVisitor;

impl Visitor<'_> for FieldValueVisitor {
    type Value = FieldValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number or boolean")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<FieldValue, E> {
        Ok(FieldValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FieldValue, E> {
        Ok(FieldValue::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FieldValue, E> {
        Ok(FieldValue::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<FieldValue, E> {
        Decimal::try_from(v)
            .map(FieldValue::Decimal)
            .map_err(|e| E::custom(format!("failed to parse {} as decimal: {}", v, e)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FieldValue, E> {
        Ok(FieldValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<FieldValue, E> {
        Ok(FieldValue::String(v))
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FieldValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_key_numeric_and_string_collide() {
        assert_eq!(DictKey::from(1), DictKey::from("1"));
        assert_eq!(DictKey::from(1u64), DictKey::from(String::from("1")));
        assert_eq!(DictKey::from(-3i64).as_str(), "-3");
        assert_ne!(DictKey::from(1), DictKey::from("01"));
    }

    #[test]
    fn test_key_from_dict_value() {
        assert_eq!(DictKey::from(&DictValue::Int(7)).as_str(), "7");
        assert_eq!(DictKey::from(DictValue::from("on")).as_str(), "on");
        assert_eq!(DictKey::from(DictValue::from(u64::MAX)).as_str(), "18446744073709551615");
    }

    #[test]
    fn test_dict_value_from_u64() {
        assert_eq!(DictValue::from(5u64), DictValue::Int(5));
        assert_eq!(DictValue::from(u64::MAX), DictValue::UInt(u64::MAX));
    }

    #[test]
    fn test_dict_value_accessors() {
        let v = DictValue::Int(3);
        assert!(v.is_numeric());
        assert_eq!(v.as_i64(), Some(3));
        assert_eq!(v.as_u64(), Some(3));
        assert_eq!(v.as_str(), None);

        let s = DictValue::from("draft");
        assert!(!s.is_numeric());
        assert_eq!(s.as_str(), Some("draft"));
        assert_eq!(DictValue::Int(-1).as_u64(), None);
    }

    #[test]
    fn test_dict_value_numeric_cmp() {
        assert_eq!(
            DictValue::Int(-1).numeric_cmp(&DictValue::UInt(u64::MAX)),
            Some(Ordering::Less)
        );
        assert_eq!(DictValue::Int(2).numeric_cmp(&DictValue::from("1")), None);
    }

    #[test]
    fn test_dict_value_json() {
        let v: DictValue = serde_json::from_str("1").unwrap();
        assert_eq!(v, DictValue::Int(1));
        let v: DictValue = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(v, DictValue::from("1"));
        assert!(serde_json::from_str::<DictValue>("1.5").is_err());
        assert!(serde_json::from_str::<DictValue>("true").is_err());
        assert_eq!(serde_json::to_string(&DictValue::Int(4)).unwrap(), "4");
    }

    #[test]
    fn test_field_value_json() {
        let v: FieldValue = serde_json::from_str("true").unwrap();
        assert_eq!(v.as_bool(), Some(true));
        let v: FieldValue = serde_json::from_str("2.5").unwrap();
        assert_eq!(v.as_decimal(), Some(Decimal::new(25, 1)));
        let v: FieldValue = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(v.as_str(), Some("red"));
        assert!(serde_json::from_str::<FieldValue>("[1]").is_err());
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::from("test").to_string(), "test");
        assert_eq!(FieldValue::Int(42).to_string(), "42");
        assert_eq!(FieldValue::Bool(false).to_string(), "false");
        assert_eq!(FieldValue::Decimal(Decimal::new(125, 2)).to_string(), "1.25");
    }
}
