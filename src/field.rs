use crate::error::{InvalidNameError, InvalidNameReason};
use std::collections::HashSet;

/// An accessor for one field of a `RecordType`. It is obtained from
/// [`RecordType::field`] and holds the field's position, so reading
/// it from a record is plain indexing.
///
/// Fields are small and `Copy`, and can be kept around for as long as
/// needed. While the type system allows it, using a `Field` with a
/// record of a type other than the one that produced it will read
/// whatever value sits at the same position (or nothing, if that
/// record is shorter).
///
/// [`RecordType::field`]: struct.RecordType.html#method.field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    pub(crate) index: usize,
}

impl Field {
    /// The position of the field within its record type.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Anything that can describe the ordered field names of a record type.
///
/// A single string is split on whitespace and commas, so `"x y"`,
/// `"x,y"` and `"x, y"` all name the same two fields. Sequences of
/// strings are taken as they are, one name per element.
///
/// # Examples
///
/// ```
/// use named_collections::FieldNames;
///
/// assert_eq!(vec!["x", "y"], "x, y".into_field_names());
/// assert_eq!(vec!["x", "y"], ["x", "y"].into_field_names());
/// ```
pub trait FieldNames {
    fn into_field_names(self) -> Vec<String>;
}

impl FieldNames for &str {
    fn into_field_names(self) -> Vec<String> {
        self.replace(',', " ")
            .split_whitespace()
            .map(String::from)
            .collect()
    }
}

impl FieldNames for String {
    fn into_field_names(self) -> Vec<String> {
        self.as_str().into_field_names()
    }
}

impl FieldNames for &String {
    fn into_field_names(self) -> Vec<String> {
        self.as_str().into_field_names()
    }
}

impl FieldNames for Vec<String> {
    fn into_field_names(self) -> Vec<String> {
        self
    }
}

impl FieldNames for Vec<&str> {
    fn into_field_names(self) -> Vec<String> {
        self.into_iter().map(String::from).collect()
    }
}

impl FieldNames for &[&str] {
    fn into_field_names(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl FieldNames for &[String] {
    fn into_field_names(self) -> Vec<String> {
        self.to_vec()
    }
}

impl<const N: usize> FieldNames for [&str; N] {
    fn into_field_names(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

// Strict and reserved keywords of the 2018 edition.
const KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
    "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use",
    "where", "while", "async", "await", "dyn", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
];

/// Checks that `name` could name a type or a field.
pub(crate) fn validate_name(name: &str) -> Result<(), InvalidNameError> {
    let reason = if name.is_empty() {
        Some(InvalidNameReason::Empty)
    } else if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        Some(InvalidNameReason::IllegalCharacter(c))
    } else if name.chars().all(|c| c == '_') {
        Some(InvalidNameReason::OnlyUnderscores)
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        Some(InvalidNameReason::LeadingDigit)
    } else if KEYWORDS.contains(&name) {
        Some(InvalidNameReason::Keyword)
    } else {
        None
    };

    match reason {
        Some(reason) => Err(InvalidNameError::new(name, reason)),
        None => Ok(()),
    }
}

/// Validates the type name and every field name, then rejects
/// repeated field names. The first problem found is reported.
pub(crate) fn validate_names(type_name: &str, fields: &[String]) -> Result<(), InvalidNameError> {
    validate_name(type_name)?;

    let mut seen = HashSet::with_capacity(fields.len());
    for field in fields {
        validate_name(field)?;
        if !seen.insert(field.as_str()) {
            return Err(InvalidNameError::new(
                field.as_str(),
                InvalidNameReason::Duplicate,
            ));
        }
    }

    Ok(())
}
