use std::fmt;
use thiserror::Error;

/// Why a type or field name was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidNameReason {
    /// The name is the empty string.
    Empty,
    /// The name holds a character outside `[A-Za-z0-9_]`.
    IllegalCharacter(char),
    /// The name is made of underscores alone.
    OnlyUnderscores,
    /// The name starts with a digit.
    LeadingDigit,
    /// The name is a reserved keyword.
    Keyword,
    /// The field name appears more than once.
    Duplicate,
}

/// A type name or field name can not be used to build a record type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid name '{name}': {reason}")]
pub struct InvalidNameError {
    pub name: String,
    pub reason: InvalidNameReason,
}

impl InvalidNameError {
    pub(crate) fn new(name: impl Into<String>, reason: InvalidNameReason) -> Self {
        Self {
            name: name.into(),
            reason,
        }
    }
}

impl fmt::Display for InvalidNameReason {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidNameReason::Empty => write!(fmt, "names must not be empty"),
            InvalidNameReason::IllegalCharacter(c) => write!(
                fmt,
                "illegal character {:?}, only alphanumeric characters and underscores are allowed",
                c
            ),
            InvalidNameReason::OnlyUnderscores => {
                write!(fmt, "names must not consist only of underscores")
            }
            InvalidNameReason::LeadingDigit => write!(fmt, "names must not start with a digit"),
            InvalidNameReason::Keyword => write!(fmt, "names must not be a reserved keyword"),
            InvalidNameReason::Duplicate => write!(fmt, "field names must be unique"),
        }
    }
}

/// A field name that the record type does not declare.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{type_name} has no field named '{field}'")]
pub struct UnknownFieldError {
    pub type_name: String,
    pub field: String,
}

/// Arguments that could not be bound to the fields of a record type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("{type_name} takes {expected} positional arguments but {given} were given")]
    TooManyPositional {
        type_name: String,
        expected: usize,
        given: usize,
    },
    #[error("{type_name} got an unexpected keyword argument '{keyword}'")]
    UnexpectedKeyword { type_name: String, keyword: String },
    #[error("{type_name} got multiple values for argument '{field}'")]
    MultipleValues { type_name: String, field: String },
    #[error("{type_name} missing required arguments: {}", .fields.join(", "))]
    Missing {
        type_name: String,
        fields: Vec<String>,
    },
}

/// Any error produced by the named tuple factory or its record types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    InvalidName(#[from] InvalidNameError),
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),
    #[error(transparent)]
    Bind(#[from] BindError),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn invalid_name_message() {
        let e = InvalidNameError::new("a b", InvalidNameReason::IllegalCharacter(' '));

        assert_eq!(
            "invalid name 'a b': illegal character ' ', only alphanumeric characters and underscores are allowed",
            e.to_string()
        );
    }

    #[test]
    fn missing_message_lists_fields() {
        let e = BindError::Missing {
            type_name: "Point".to_string(),
            fields: vec!["x".to_string(), "y".to_string()],
        };

        assert_eq!("Point missing required arguments: x, y", e.to_string());
    }

    #[test]
    fn errors_convert_into_crate_error() {
        let e: Error = UnknownFieldError {
            type_name: "Point".to_string(),
            field: "z".to_string(),
        }
        .into();

        assert_eq!("Point has no field named 'z'", e.to_string());
    }
}
