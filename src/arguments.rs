use crate::error::BindError;
use crate::record_type::RecordType;

/// The arguments of a call to [`RecordType::call`]: positional values
/// first, then values bound by field name.
///
/// # Examples
///
/// ```
/// use named_collections::{create, Arguments};
///
/// let point = create("Point", "x y", false).unwrap();
/// let p = point.call(Arguments::new().positional(11).keyword("y", 22)).unwrap();
///
/// assert_eq!(p, [11, 22]);
/// ```
///
/// [`RecordType::call`]: struct.RecordType.html#method.call
#[derive(Debug, Clone, PartialEq)]
pub struct Arguments<T> {
    positional: Vec<T>,
    keywords: Vec<(String, T)>,
}

impl<T> Default for Arguments<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arguments<T> {
    /// An empty argument list.
    pub fn new() -> Self {
        Self {
            positional: Vec::new(),
            keywords: Vec::new(),
        }
    }

    /// Append a positional argument.
    pub fn positional(mut self, value: T) -> Self {
        self.positional.push(value);
        self
    }

    /// Append a keyword argument.
    pub fn keyword(mut self, name: impl Into<String>, value: T) -> Self {
        self.keywords.push((name.into(), value));
        self
    }

    /// Binds the arguments to the fields of `type_`, following the usual
    /// call rules: positional values fill fields in order, keywords
    /// fill the named field, and every field must end up with exactly
    /// one value.
    pub(crate) fn bind(self, type_: &RecordType) -> Result<Vec<T>, BindError> {
        let arity = type_.arity();

        if self.positional.len() > arity {
            return Err(BindError::TooManyPositional {
                type_name: type_.name().to_string(),
                expected: arity,
                given: self.positional.len(),
            });
        }

        let mut slots: Vec<Option<T>> = Vec::with_capacity(arity);
        slots.extend(self.positional.into_iter().map(Some));
        slots.resize_with(arity, || None);

        for (name, value) in self.keywords {
            let ix = match type_.index_of(&name) {
                Some(ix) => ix,
                None => {
                    return Err(BindError::UnexpectedKeyword {
                        type_name: type_.name().to_string(),
                        keyword: name,
                    })
                }
            };

            if slots[ix].is_some() {
                return Err(BindError::MultipleValues {
                    type_name: type_.name().to_string(),
                    field: name,
                });
            }
            slots[ix] = Some(value);
        }

        if slots.iter().any(Option::is_none) {
            let fields = slots
                .iter()
                .zip(type_.fields())
                .filter(|(slot, _)| slot.is_none())
                .map(|(_, name)| name.clone())
                .collect();

            return Err(BindError::Missing {
                type_name: type_.name().to_string(),
                fields,
            });
        }

        Ok(slots.into_iter().flatten().collect())
    }
}
