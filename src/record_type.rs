use crate::arguments::Arguments;
use crate::error::{BindError, InvalidNameError, UnknownFieldError};
use crate::field::{validate_names, Field, FieldNames};
use crate::record::Record;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Returns a new record type named `type_name` whose records hold one
/// value per field of `fields`, in order.
///
/// `fields` is either a string of names separated by whitespace
/// and/or commas, or a sequence of names (see [`FieldNames`]). When
/// `verbose` is set the definition of the new type is printed to
/// standard output before it is returned.
///
/// # Examples
///
/// ```
/// use named_collections::{create, Arguments};
///
/// let point = create("Point", "x y", false).unwrap();
/// let p = point.call(Arguments::new().positional(11).keyword("y", 22)).unwrap();
///
/// assert_eq!(33, p[0] + p[1]);
/// assert_eq!(33, p.attr("x").unwrap() + p.attr("y").unwrap());
/// assert_eq!("Point(x=11, y=22)", format!("{:?}", p));
///
/// let [x, y] = p.clone().into_array::<2>().unwrap();
/// assert_eq!((11, 22), (x, y));
///
/// assert_eq!("Point(x=100, y=22)", format!("{:?}", p.replace("x", 100).unwrap()));
/// ```
///
/// Names must be identifiers, and field names must be unique.
///
/// ```
/// use named_collections::create;
///
/// assert!(create("Bad Name!", "a b", false).is_err());
/// assert!(create("T", "a a", false).is_err());
/// ```
///
/// [`FieldNames`]: trait.FieldNames.html
pub fn create(
    type_name: &str,
    fields: impl FieldNames,
    verbose: bool,
) -> Result<RecordType, InvalidNameError> {
    let type_ = RecordType::new(type_name, fields)?;

    if verbose {
        println!("{}", type_.definition());
    }

    Ok(type_)
}

/// Returns a copy of `record` in which `field` holds `value`. The
/// original record is left as it was.
///
/// # Examples
///
/// ```
/// use named_collections::{create, replace_field};
///
/// let point = create("Point", "x y", false).unwrap();
/// let p = point.make(vec![1, 2]).unwrap();
/// let q = replace_field(&p, "x", 100).unwrap();
///
/// assert_eq!(q, [100, 2]);
/// assert_eq!(p, [1, 2]);
/// ```
pub fn replace_field<T: Clone>(
    record: &Record<T>,
    field: &str,
    value: T,
) -> Result<Record<T>, UnknownFieldError> {
    record.replace(field, value)
}

/// A record type produced by [`create`]. It is a cheap handle: clones
/// share the same definition.
///
/// Record types are nominal. Two handles compare equal only when they
/// come from the same call to [`create`] (or are clones of one
/// another); use [`is_equivalent`] to compare shapes.
///
/// [`create`]: fn.create.html
/// [`is_equivalent`]: #method.is_equivalent
#[derive(Clone)]
pub struct RecordType(Arc<RecordTypeInner>);

struct RecordTypeInner {
    name: String,
    fields: Box<[String]>,
    // Field name to position, filled once when the type is built.
    indices: HashMap<String, usize>,
}

impl RecordType {
    /// Builds a record type without printing its definition. This is
    /// `create(type_name, fields, false)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::RecordType;
    ///
    /// let t = RecordType::new("Point", "x, y").unwrap();
    /// assert_eq!(&["x", "y"], t.fields());
    /// ```
    pub fn new(type_name: &str, fields: impl FieldNames) -> Result<RecordType, InvalidNameError> {
        let fields = fields.into_field_names();

        if let Err(e) = validate_names(type_name, &fields) {
            tracing::debug!(type_name, name = %e.name, reason = %e.reason, "rejected record type");
            return Err(e);
        }

        let indices = fields
            .iter()
            .enumerate()
            .map(|(ix, name)| (name.clone(), ix))
            .collect();

        tracing::debug!(type_name, arity = fields.len(), "created record type");

        Ok(RecordType(Arc::new(RecordTypeInner {
            name: type_name.to_string(),
            fields: fields.into_boxed_slice(),
            indices,
        })))
    }

    /// The name of the type.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The field names, in declaration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::create;
    /// use std::collections::HashMap;
    ///
    /// let t = create("Point", "x y", false).unwrap();
    /// let p = t.make(vec![11, 22]).unwrap();
    /// let d: HashMap<_, _> = t.fields().iter().zip(p.iter()).collect();
    ///
    /// assert_eq!(&11, d[&"x".to_string()]);
    /// ```
    pub fn fields(&self) -> &[String] {
        &self.0.fields
    }

    /// The number of fields, and so the length of every record of this
    /// type.
    pub fn arity(&self) -> usize {
        self.0.fields.len()
    }

    /// The position of `field`, if the type declares it.
    pub fn index_of(&self, field: &str) -> Option<usize> {
        self.0.indices.get(field).copied()
    }

    /// Resolves `field` to an accessor that reads it from records of
    /// this type by position.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::create;
    ///
    /// let t = create("Point", "x y", false).unwrap();
    /// let y = t.field("y").unwrap();
    /// let p = t.make(vec![1, 2]).unwrap();
    ///
    /// assert_eq!(2, p[y]);
    /// assert!(t.field("z").is_err());
    /// ```
    pub fn field(&self, field: &str) -> Result<Field, UnknownFieldError> {
        self.index_of(field)
            .map(|index| Field { index })
            .ok_or_else(|| self.unknown_field(field))
    }

    /// Builds a record from named and positional arguments.
    pub fn call<T>(&self, arguments: Arguments<T>) -> Result<Record<T>, BindError> {
        let values = arguments.bind(self)?;
        Ok(Record::new_unchecked(self.clone(), values))
    }

    /// Builds a record from exactly `arity()` positional values.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::create;
    ///
    /// let t = create("Point", "x y", false).unwrap();
    ///
    /// assert!(t.make(vec![1, 2]).is_ok());
    /// assert!(t.make(vec![1]).is_err());
    /// assert!(t.make(vec![1, 2, 3]).is_err());
    /// ```
    pub fn make<T, I: IntoIterator<Item = T>>(&self, values: I) -> Result<Record<T>, BindError> {
        let values: Vec<T> = values.into_iter().collect();

        if values.len() > self.arity() {
            return Err(BindError::TooManyPositional {
                type_name: self.name().to_string(),
                expected: self.arity(),
                given: values.len(),
            });
        }

        if values.len() < self.arity() {
            return Err(BindError::Missing {
                type_name: self.name().to_string(),
                fields: self.fields()[values.len()..].to_vec(),
            });
        }

        Ok(Record::new_unchecked(self.clone(), values))
    }

    /// True when `other` has the same name and the same fields in the
    /// same order.
    pub fn is_equivalent(&self, other: &RecordType) -> bool {
        self.name() == other.name() && self.fields() == other.fields()
    }

    /// The text describing this type that `create` prints in verbose
    /// mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::create;
    ///
    /// let t = create("Point", "x y", false).unwrap();
    ///
    /// assert_eq!(
    ///     "record Point(x, y) {\n    fields: [\"x\", \"y\"]\n    x => 0\n    y => 1\n}",
    ///     t.definition()
    /// );
    /// ```
    pub fn definition(&self) -> String {
        let accessors: String = self
            .fields()
            .iter()
            .enumerate()
            .map(|(ix, name)| format!("    {} => {}\n", name, ix))
            .collect();

        format!(
            "record {} {{\n    fields: {:?}\n{}}}",
            self,
            self.fields(),
            accessors
        )
    }

    pub(crate) fn unknown_field(&self, field: &str) -> UnknownFieldError {
        UnknownFieldError {
            type_name: self.name().to_string(),
            field: field.to_string(),
        }
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &RecordType) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for RecordType {}

impl fmt::Display for RecordType {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}({})", self.name(), self.fields().join(", "))
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("RecordType")
            .field("name", &self.name())
            .field("fields", &self.fields())
            .finish()
    }
}

#[derive(Serialize, Deserialize)]
struct RecordTypeRepr {
    name: String,
    fields: Vec<String>,
}

impl Serialize for RecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RecordTypeRepr {
            name: self.name().to_string(),
            fields: self.fields().to_vec(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RecordType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = RecordTypeRepr::deserialize(deserializer)?;
        RecordType::new(&repr.name, repr.fields).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn field_specs_produce_equivalent_types() {
        let a = create("Point", "x y", false).unwrap();
        let b = create("Point", vec!["x", "y"], false).unwrap();
        let c = create("Point", "x,y", false).unwrap();

        assert!(a.is_equivalent(&b));
        assert!(a.is_equivalent(&c));
        assert_eq!(2, a.arity());
        assert_eq!(2, c.arity());
    }

    #[test]
    fn types_are_nominal() {
        let a = create("Point", "x y", false).unwrap();
        let b = create("Point", "x y", false).unwrap();

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn bad_names_are_rejected() {
        use crate::error::InvalidNameReason;

        let e = create("Bad Name!", "a b", false).unwrap_err();
        assert_eq!(InvalidNameReason::IllegalCharacter(' '), e.reason);

        let e = create("T", "a a", false).unwrap_err();
        assert_eq!(InvalidNameReason::Duplicate, e.reason);

        let e = create("T", vec!["a", "b c"], false).unwrap_err();
        assert_eq!("b c", e.name);

        let e = create("_", "x", false).unwrap_err();
        assert_eq!(InvalidNameReason::OnlyUnderscores, e.reason);
    }

    #[test]
    fn zero_fields() {
        let t = create("Empty", "", false).unwrap();
        let r = t.make(Vec::<u8>::new()).unwrap();

        assert_eq!(0, t.arity());
        assert!(r.is_empty());
        assert_eq!("Empty()", format!("{:?}", r));
    }

    #[test]
    fn definition_of_empty_type() {
        let t = create("Empty", "", false).unwrap();

        assert_eq!("record Empty() {\n    fields: []\n}", t.definition());
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn types_and_records_are_send_and_sync() {
        assert_send_sync::<RecordType>();
        assert_send_sync::<Record<i32>>();
    }

    #[test]
    fn types_cross_threads() {
        let shared = create("Point", "x y", false).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    let own = create("Pair", "left right", false).unwrap();
                    (shared.make(vec![i, i + 1]).unwrap(), own.make(vec![i, i]).unwrap())
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let (p, q) = handle.join().unwrap();
            let i = i as i32;

            assert_eq!(p, [i, i + 1]);
            assert_eq!(&shared, p.type_());
            assert_eq!(q, [i, i]);
            assert_eq!("Pair", q.type_().name());
        }
    }

    #[test]
    fn display_is_signature() {
        let t = create("TestResults", "failed attempted", false).unwrap();

        assert_eq!("TestResults(failed, attempted)", t.to_string());
    }

    #[test]
    fn verbose_returns_the_same_type() {
        let t = create("Point", "x, y", true).unwrap();

        assert_eq!(&["x", "y"], t.fields());
    }

    #[test]
    fn field_resolves_index() {
        let t = create("T", "a b c", false).unwrap();

        assert_eq!(2, t.field("c").unwrap().index());
        assert_eq!(
            UnknownFieldError {
                type_name: "T".to_string(),
                field: "d".to_string(),
            },
            t.field("d").unwrap_err()
        );
    }

    #[test]
    fn make_reports_missing_tail() {
        let t = create("T", "a b c", false).unwrap();

        assert_eq!(
            BindError::Missing {
                type_name: "T".to_string(),
                fields: vec!["b".to_string(), "c".to_string()],
            },
            t.make(vec![1]).unwrap_err()
        );
    }

    #[test]
    fn serde_round_trip() {
        let t = create("Point", "x y", false).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        let u: RecordType = serde_json::from_str(&json).unwrap();

        assert_eq!(r#"{"name":"Point","fields":["x","y"]}"#, json);
        assert!(t.is_equivalent(&u));
    }

    #[test]
    fn deserializing_bad_names_fails() {
        let r: Result<RecordType, _> =
            serde_json::from_str(r#"{"name":"Point","fields":["x","x"]}"#);

        assert!(r.is_err());
    }
}
