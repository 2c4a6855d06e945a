//! Converted values and the traits mapping them back onto Rust types.

use super::field::FieldType;
use crate::error::WriteError;

/// A property value after conversion to its declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i32),
    Float(f32),
    Double(f64),
    Bool(bool),
    /// The matched member name of an enumeration.
    Enum(String),
    List(Vec<Value>),
}

impl Value {
    /// Short name of the variant, for mismatch messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::Bool(_) => "bool",
            Value::Enum(_) => "enum",
            Value::List(_) => "list",
        }
    }

    /// Convert an `Enum` value into the Rust enumeration `E`.
    pub fn into_enum<E: ConfigEnum>(self) -> Result<E, WriteError> {
        match self {
            Value::Enum(member) => E::from_member(&member)
                .ok_or_else(|| WriteError::Rejected(format!("{member} is not a member of {}", E::NAME))),
            other => Err(mismatch("enum", &other)),
        }
    }

    /// Convert a `List` value element by element.
    pub fn into_list<T: FromValue>(self) -> Result<Vec<T>, WriteError> {
        match self {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(mismatch("list", &other)),
        }
    }
}

fn mismatch(expected: &'static str, actual: &Value) -> WriteError {
    WriteError::TypeMismatch {
        expected,
        actual: actual.kind(),
    }
}

/// A unit-only Rust enum usable as an enumeration field.
///
/// Implement it with [`config_enum!`](crate::config_enum).
pub trait ConfigEnum: Sized {
    const NAME: &'static str;
    const MEMBERS: &'static [&'static str];

    fn from_member(member: &str) -> Option<Self>;
}

/// Rust types that can receive a converted value.
///
/// `field_type` is what the [`configurable!`](crate::configurable) macro
/// declares for a field of this type.
pub trait FromValue: Sized {
    fn field_type() -> FieldType;

    fn from_value(value: Value) -> Result<Self, WriteError>;
}

macro_rules! scalar_from_value {
    ($ty:ty, $field_type:expr, $expected:literal, $($variant:ident)|+) => {
        impl FromValue for $ty {
            fn field_type() -> FieldType {
                $field_type
            }

            fn from_value(value: Value) -> Result<Self, WriteError> {
                match value {
                    $(Value::$variant(v) => Ok(v.into()),)+
                    other => Err(mismatch($expected, &other)),
                }
            }
        }
    };
}

scalar_from_value!(String, FieldType::Text, "text", Text);
scalar_from_value!(i32, FieldType::Int, "int", Int);
scalar_from_value!(i64, FieldType::Int, "int", Int);
scalar_from_value!(f32, FieldType::Float, "float", Float);
scalar_from_value!(f64, FieldType::Double, "double", Double | Float);
scalar_from_value!(bool, FieldType::Bool, "bool", Bool);

impl<T: FromValue> FromValue for Vec<T> {
    fn field_type() -> FieldType {
        FieldType::list(T::field_type())
    }

    fn from_value(value: Value) -> Result<Self, WriteError> {
        value.into_list()
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn field_type() -> FieldType {
        T::field_type()
    }

    fn from_value(value: Value) -> Result<Self, WriteError> {
        T::from_value(value).map(Some)
    }
}

/// Implement [`ConfigEnum`] and [`FromValue`] for a unit-only enum.
///
/// ```
/// #[derive(Debug, PartialEq)]
/// enum Mode { Fast, Safe }
/// propbind_config::config_enum!(Mode { Fast, Safe });
///
/// use propbind_config::{ConfigEnum, Value};
/// assert_eq!(Mode::MEMBERS, &["Fast", "Safe"]);
/// assert_eq!(Value::Enum("Safe".into()).into_enum::<Mode>(), Ok(Mode::Safe));
/// ```
#[macro_export]
macro_rules! config_enum {
    ($enum:ident { $($member:ident),+ $(,)? }) => {
        impl $crate::ConfigEnum for $enum {
            const NAME: &'static str = ::std::stringify!($enum);
            const MEMBERS: &'static [&'static str] = &[$(::std::stringify!($member)),+];

            fn from_member(member: &str) -> ::std::option::Option<Self> {
                match member {
                    $(::std::stringify!($member) => ::std::option::Option::Some($enum::$member),)+
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl $crate::FromValue for $enum {
            fn field_type() -> $crate::FieldType {
                $crate::FieldType::of_enum::<$enum>()
            }

            fn from_value(value: $crate::Value) -> ::std::result::Result<Self, $crate::WriteError> {
                value.into_enum()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum PropertyEnum {
        Prop1,
        Prop2,
    }

    crate::config_enum!(PropertyEnum { Prop1, Prop2 });

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(String::from_value(Value::Text("a".into())), Ok("a".to_string()));
        assert_eq!(i32::from_value(Value::Int(5)), Ok(5));
        assert_eq!(i64::from_value(Value::Int(-5)), Ok(-5));
        assert_eq!(f64::from_value(Value::Float(4.0)), Ok(4.0));
        assert_eq!(bool::from_value(Value::Bool(true)), Ok(true));
    }

    #[test]
    fn test_mismatch_reports_kinds() {
        assert_eq!(
            i32::from_value(Value::Text("5".into())),
            Err(WriteError::TypeMismatch {
                expected: "int",
                actual: "text"
            })
        );
    }

    #[test]
    fn test_list_and_option() {
        let list = Value::List(vec![Value::Int(5), Value::Int(55), Value::Int(555)]);
        assert_eq!(Vec::<i32>::from_value(list), Ok(vec![5, 55, 555]));
        assert_eq!(Option::<bool>::from_value(Value::Bool(false)), Ok(Some(false)));
        assert_eq!(
            Vec::<i32>::field_type(),
            FieldType::list(FieldType::Int)
        );
    }

    #[test]
    fn test_config_enum_macro() {
        assert_eq!(PropertyEnum::NAME, "PropertyEnum");
        assert_eq!(PropertyEnum::MEMBERS, &["Prop1", "Prop2"]);
        assert_eq!(
            PropertyEnum::from_value(Value::Enum("Prop2".into())),
            Ok(PropertyEnum::Prop2)
        );
        assert!(PropertyEnum::from_value(Value::Enum("prop2".into())).is_err());
        assert_eq!(
            PropertyEnum::field_type(),
            FieldType::enumeration("PropertyEnum", ["Prop1", "Prop2"])
        );
    }
}
