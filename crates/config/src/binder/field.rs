//! Field descriptors and declared field types.

use std::fmt;
use std::str::FromStr;

/// Declared type of a bindable field.
///
/// `Other` names a type with no conversion; a `List` whose element is not a
/// scalar is equally unsupported. Both are rejected at bind time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Int,
    Float,
    Double,
    Bool,
    Enum { name: String, members: Vec<String> },
    List(Box<FieldType>),
    Other(String),
}

impl FieldType {
    /// A list of `element`.
    pub fn list(element: FieldType) -> Self {
        FieldType::List(Box::new(element))
    }

    /// An enumeration called `name` with the given member names.
    pub fn enumeration<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldType::Enum {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// The enumeration type of a `ConfigEnum`.
    pub fn of_enum<E: super::ConfigEnum>() -> Self {
        Self::enumeration(E::NAME, E::MEMBERS.iter().copied())
    }

    /// True for types convertible from a single property value.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, FieldType::List(_) | FieldType::Other(_))
    }

    /// True if a value can be converted to this type at all.
    pub fn is_supported(&self) -> bool {
        match self {
            FieldType::List(element) => element.is_scalar(),
            other => other.is_scalar(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Text => write!(f, "text"),
            FieldType::Int => write!(f, "int"),
            FieldType::Float => write!(f, "float"),
            FieldType::Double => write!(f, "double"),
            FieldType::Bool => write!(f, "bool"),
            FieldType::Enum { name, .. } => write!(f, "enum {name}"),
            FieldType::List(element) => write!(f, "list<{element}>"),
            FieldType::Other(name) => write!(f, "{name}"),
        }
    }
}

/// Parses the textual type syntax used on the command line.
///
/// `text|string`, `int|integer`, `float`, `double`, `bool|boolean`,
/// `enum(A|B|C)`, `list<T>`. Any other word becomes `Other(word)`.
impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty type".to_string());
        }

        if let Some(inner) = s.strip_prefix("list<").and_then(|r| r.strip_suffix('>')) {
            return Ok(FieldType::list(inner.parse()?));
        }

        if let Some(inner) = s.strip_prefix("enum(").and_then(|r| r.strip_suffix(')')) {
            let members: Vec<String> = inner
                .split('|')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .collect();
            if members.is_empty() {
                return Err(format!("enum without members: {s}"));
            }
            return Ok(FieldType::Enum {
                name: "enum".to_string(),
                members,
            });
        }

        Ok(match s.to_ascii_lowercase().as_str() {
            "text" | "string" => FieldType::Text,
            "int" | "integer" => FieldType::Int,
            "float" => FieldType::Float,
            "double" => FieldType::Double,
            "bool" | "boolean" => FieldType::Bool,
            _ => FieldType::Other(s.to_string()),
        })
    }
}

/// One bindable target field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    property: String,
    field_type: FieldType,
}

impl FieldDescriptor {
    /// Describe field `name`, bound to `property`, of type `field_type`.
    ///
    /// An empty `property` marks the field as intentionally unbound.
    pub fn new(name: impl Into<String>, property: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            property: property.into(),
            field_type,
        }
    }

    /// The field's own name, used by writers to locate it.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared property name, or `None` if it is empty.
    pub fn property(&self) -> Option<&str> {
        Some(self.property.as_str()).filter(|p| !p.is_empty())
    }

    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_scalar_type_names() {
        assert_eq!("int".parse::<FieldType>().unwrap(), FieldType::Int);
        assert_eq!("Integer".parse::<FieldType>().unwrap(), FieldType::Int);
        assert_eq!("string".parse::<FieldType>().unwrap(), FieldType::Text);
        assert_eq!("boolean".parse::<FieldType>().unwrap(), FieldType::Bool);
        assert_eq!("double".parse::<FieldType>().unwrap(), FieldType::Double);
    }

    #[test]
    fn test_parses_list_and_enum() {
        assert_eq!(
            "list<int>".parse::<FieldType>().unwrap(),
            FieldType::list(FieldType::Int)
        );
        assert_eq!(
            "enum(PROP1|PROP2)".parse::<FieldType>().unwrap(),
            FieldType::enumeration("enum", ["PROP1", "PROP2"])
        );
        assert!("enum()".parse::<FieldType>().is_err());
    }

    #[test]
    fn test_unknown_type_name_is_other() {
        let parsed: FieldType = "PrintWriter".parse().unwrap();
        assert_eq!(parsed, FieldType::Other("PrintWriter".to_string()));
        assert!(!parsed.is_supported());
    }

    #[test]
    fn test_nested_list_is_unsupported() {
        let nested: FieldType = "list<list<int>>".parse().unwrap();
        assert!(!nested.is_supported());
        assert!(FieldType::list(FieldType::Bool).is_supported());
        assert_eq!(nested.to_string(), "list<list<int>>");
    }

    #[test]
    fn test_empty_property_is_unnamed() {
        let field = FieldDescriptor::new("unnamed_setting", "", FieldType::Text);
        assert_eq!(field.property(), None);
        let named = FieldDescriptor::new("int_setting", "INT_SETTING", FieldType::Int);
        assert_eq!(named.property(), Some("INT_SETTING"));
    }
}
