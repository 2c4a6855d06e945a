//! String to typed value conversion.

use std::num::ParseFloatError;
use std::str::FromStr;

use super::field::{FieldDescriptor, FieldType};
use super::value::Value;
use crate::constants::LIST_SEPARATOR;
use crate::error::{ConfigError, ConversionFailure};

/// Convert `raw` to the declared type of `field`.
///
/// `property` is only used to label conversion errors.
pub(crate) fn convert(field: &FieldDescriptor, property: &str, raw: &str) -> Result<Value, ConfigError> {
    let field_type = field.field_type();
    if !field_type.is_supported() {
        return Err(unsupported(field, field_type));
    }

    match field_type {
        FieldType::List(element) => raw
            .split(LIST_SEPARATOR)
            .map(str::trim)
            .map(|item| convert_scalar(field, property, element, item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        scalar => convert_scalar(field, property, scalar, raw),
    }
}

fn convert_scalar(
    field: &FieldDescriptor,
    property: &str,
    field_type: &FieldType,
    raw: &str,
) -> Result<Value, ConfigError> {
    let failed = |reason: ConversionFailure| ConfigError::Conversion {
        property: property.to_string(),
        reason,
    };

    match field_type {
        FieldType::Text => Ok(Value::Text(raw.to_string())),
        FieldType::Int => raw
            .parse::<i32>()
            .map(Value::Int)
            .map_err(|e| failed(e.into())),
        FieldType::Float => parse_decimal::<f32>(raw)
            .map(Value::Float)
            .map_err(failed),
        FieldType::Double => parse_decimal::<f64>(raw)
            .map(Value::Double)
            .map_err(failed),
        // Anything but a case-insensitive "true" is false.
        FieldType::Bool => Ok(Value::Bool(raw.eq_ignore_ascii_case("true"))),
        FieldType::Enum { name, members } => {
            if members.iter().any(|member| member == raw) {
                Ok(Value::Enum(raw.to_string()))
            } else {
                Err(failed(ConversionFailure::NoEnumMember {
                    enum_name: name.clone(),
                }))
            }
        }
        FieldType::List(_) | FieldType::Other(_) => Err(unsupported(field, field_type)),
    }
}

/// Parse decimal or scientific notation, ignoring surrounding whitespace.
///
/// Non-finite values are only accepted as `Infinity` or `NaN`, optionally
/// signed. Other spellings such as `inf` or `nan` are rejected.
fn parse_decimal<T>(raw: &str) -> Result<T, ConversionFailure>
where
    T: FromStr<Err = ParseFloatError>,
{
    let text = raw.trim();
    let value = text.parse::<T>()?;
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) && !matches!(unsigned, "Infinity" | "NaN") {
        return Err(ConversionFailure::NonDecimalFloat);
    }
    Ok(value)
}

fn unsupported(field: &FieldDescriptor, field_type: &FieldType) -> ConfigError {
    ConfigError::UnsupportedType {
        field: field.name().to_string(),
        type_name: field_type.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert_as(field_type: FieldType, raw: &str) -> Result<Value, ConfigError> {
        let field = FieldDescriptor::new("setting", "SETTING", field_type);
        convert(&field, "SETTING", raw)
    }

    #[test]
    fn test_text_is_verbatim() {
        assert_eq!(
            convert_as(FieldType::Text, "  spaced  ").unwrap(),
            Value::Text("  spaced  ".to_string())
        );
    }

    #[test]
    fn test_int_parses_signed_decimal() {
        assert_eq!(convert_as(FieldType::Int, "5").unwrap(), Value::Int(5));
        assert_eq!(convert_as(FieldType::Int, "-42").unwrap(), Value::Int(-42));
        assert_eq!(convert_as(FieldType::Int, "+7").unwrap(), Value::Int(7));
    }

    #[test]
    fn test_int_rejects_malformed_and_overflow() {
        for raw in ["five", "5.0", " 5", "2147483648", ""] {
            let err = convert_as(FieldType::Int, raw).unwrap_err();
            assert!(
                matches!(
                    err,
                    ConfigError::Conversion {
                        reason: ConversionFailure::Integer(_),
                        ..
                    }
                ),
                "{raw:?} should fail as an integer"
            );
        }
    }

    #[test]
    fn test_floats_accept_decimal_and_scientific() {
        assert_eq!(convert_as(FieldType::Float, "4.0").unwrap(), Value::Float(4.0));
        assert_eq!(convert_as(FieldType::Double, "5e0").unwrap(), Value::Double(5.0));
        assert_eq!(convert_as(FieldType::Double, " 7.5 ").unwrap(), Value::Double(7.5));
        assert!(matches!(
            convert_as(FieldType::Double, "seven"),
            Err(ConfigError::Conversion {
                reason: ConversionFailure::Float(_),
                ..
            })
        ));
    }

    #[test]
    fn test_non_finite_floats_use_java_style_names() {
        assert_eq!(
            convert_as(FieldType::Double, "Infinity").unwrap(),
            Value::Double(f64::INFINITY)
        );
        assert_eq!(
            convert_as(FieldType::Float, "-Infinity").unwrap(),
            Value::Float(f32::NEG_INFINITY)
        );
        assert!(matches!(
            convert_as(FieldType::Double, " NaN "),
            Ok(Value::Double(v)) if v.is_nan()
        ));
        // Overflow still saturates to infinity.
        assert_eq!(
            convert_as(FieldType::Double, "1e999").unwrap(),
            Value::Double(f64::INFINITY)
        );

        for raw in ["inf", "-inf", "infinity", "INFINITY", "nan", "+NAN"] {
            let err = convert_as(FieldType::Float, raw).unwrap_err();
            assert!(
                matches!(
                    err,
                    ConfigError::Conversion {
                        reason: ConversionFailure::NonDecimalFloat,
                        ..
                    }
                ),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_bool_is_lenient() {
        assert_eq!(convert_as(FieldType::Bool, "TRUE").unwrap(), Value::Bool(true));
        assert_eq!(convert_as(FieldType::Bool, "false").unwrap(), Value::Bool(false));
        assert_eq!(convert_as(FieldType::Bool, "yes").unwrap(), Value::Bool(false));
        assert_eq!(convert_as(FieldType::Bool, "").unwrap(), Value::Bool(false));
    }

    #[test]
    fn test_enum_matches_case_sensitively() {
        let mode = FieldType::enumeration("PropertyEnum", ["PROP1", "PROP2"]);
        assert_eq!(
            convert_as(mode.clone(), "PROP1").unwrap(),
            Value::Enum("PROP1".to_string())
        );
        let err = convert_as(mode, "prop1").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Conversion {
                reason: ConversionFailure::NoEnumMember { ref enum_name },
                ..
            } if enum_name == "PropertyEnum"
        ));
    }

    #[test]
    fn test_list_splits_trims_and_keeps_order() {
        assert_eq!(
            convert_as(FieldType::list(FieldType::Int), "5, 55, 555").unwrap(),
            Value::List(vec![Value::Int(5), Value::Int(55), Value::Int(555)])
        );
        assert_eq!(
            convert_as(FieldType::list(FieldType::Text), "a,,b ,").unwrap(),
            Value::List(vec![
                Value::Text("a".into()),
                Value::Text(String::new()),
                Value::Text("b".into()),
                Value::Text(String::new()),
            ])
        );
    }

    #[test]
    fn test_empty_list_value_yields_one_empty_element() {
        assert_eq!(
            convert_as(FieldType::list(FieldType::Text), "").unwrap(),
            Value::List(vec![Value::Text(String::new())])
        );
        assert!(matches!(
            convert_as(FieldType::list(FieldType::Int), ""),
            Err(ConfigError::Conversion { .. })
        ));
    }

    #[test]
    fn test_unsupported_types() {
        let err = convert_as(FieldType::Other("PrintWriter".into()), "x").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnsupportedType { ref field, ref type_name }
                if field == "setting" && type_name == "PrintWriter"
        ));

        let nested = FieldType::list(FieldType::list(FieldType::Int));
        assert!(matches!(
            convert_as(nested, "1,2"),
            Err(ConfigError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_conversion_error_does_not_echo_value() {
        let err = convert_as(FieldType::Int, "hunter2").unwrap_err();
        assert!(!err.to_string().contains("hunter2"));
        assert!(err.to_string().contains("SETTING"));
    }
}
