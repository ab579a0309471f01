use crate::error::UnknownFieldError;
use crate::field::Field;
use crate::record_type::RecordType;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::convert::TryInto;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

/// An instance of a `RecordType`: a fixed number of values, one per
/// field, in field order.
///
/// A record behaves like an immutable slice. It can be indexed,
/// iterated and unpacked, and it compares, orders and hashes by its
/// values alone, so records compare equal to slices, vectors and arrays
/// holding the same values. Fields can also be read by name.
///
/// # Examples
///
/// ```
/// use named_collections::create;
///
/// let point = create("Point", "x y", false).unwrap();
/// let p = point.make(vec![11, 22]).unwrap();
///
/// assert_eq!(Ok(&11), p.attr("x"));
/// assert_eq!(p, vec![11, 22]);
///
/// if let [x, y] = p.as_slice() {
///     assert_eq!(33, x + y);
/// }
/// ```
#[derive(Clone)]
pub struct Record<T> {
    type_: RecordType,
    values: Box<[T]>,
}

impl<T> Record<T> {
    // Callers guarantee `values.len() == type_.arity()`.
    pub(crate) fn new_unchecked(type_: RecordType, values: Vec<T>) -> Record<T> {
        debug_assert_eq!(type_.arity(), values.len());

        Record {
            type_,
            values: values.into_boxed_slice(),
        }
    }

    /// The type this record was built from.
    pub fn type_(&self) -> &RecordType {
        &self.type_
    }

    /// The number of values, which is the arity of the record's type.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for records of a type without fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value at position `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// The value of the field `field` refers to.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::create;
    ///
    /// let point = create("Point", "x y", false).unwrap();
    /// let x = point.field("x").unwrap();
    ///
    /// let points = vec![
    ///     point.make(vec![1, 2]).unwrap(),
    ///     point.make(vec![3, 4]).unwrap(),
    /// ];
    ///
    /// let xs: Vec<&i32> = points.iter().filter_map(|p| p.get_field(x)).collect();
    /// assert_eq!(vec![&1, &3], xs);
    /// ```
    pub fn get_field(&self, field: Field) -> Option<&T> {
        self.values.get(field.index)
    }

    /// Looks the value of a field up by name.
    pub fn attr(&self, field: &str) -> Result<&T, UnknownFieldError> {
        self.type_
            .index_of(field)
            .map(|ix| &self.values[ix])
            .ok_or_else(|| self.type_.unknown_field(field))
    }

    /// The values, in field order.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// An iterator over the values, in field order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Pairs of field name and value, in field order.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::create;
    /// use std::collections::BTreeMap;
    ///
    /// let point = create("Point", "x y", false).unwrap();
    /// let p = point.make(vec![11, 22]).unwrap();
    /// let d: BTreeMap<&str, &i32> = p.items().collect();
    ///
    /// assert_eq!(&11, d["x"]);
    /// assert_eq!(&22, d["y"]);
    /// ```
    pub fn items(&self) -> impl Iterator<Item = (&str, &T)> {
        self.type_
            .fields()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    /// Consumes the record, returning its values.
    pub fn into_vec(self) -> Vec<T> {
        self.values.into_vec()
    }

    /// Unpacks the record into exactly `N` values. A record of a
    /// different length is handed back unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::create;
    ///
    /// let t = create("T", "a b c", false).unwrap();
    /// let r = t.make(vec!['a', 'b', 'c']).unwrap();
    ///
    /// let [a, b, c] = r.clone().into_array::<3>().unwrap();
    /// assert_eq!(('a', 'b', 'c'), (a, b, c));
    ///
    /// assert!(r.into_array::<2>().is_err());
    /// ```
    pub fn into_array<const N: usize>(self) -> Result<[T; N], Record<T>> {
        let Record { type_, values } = self;

        values
            .into_vec()
            .try_into()
            .map_err(|values: Vec<T>| Record::new_unchecked(type_, values))
    }

    /// Returns a new record equal to this one except that `field` holds
    /// `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::create;
    ///
    /// let point = create("Point", "x y", false).unwrap();
    /// let p = point.make(vec![11, 22]).unwrap();
    ///
    /// assert_eq!(p.replace("x", 100).unwrap(), [100, 22]);
    /// assert!(p.replace("z", 100).is_err());
    /// ```
    pub fn replace(&self, field: &str, value: T) -> Result<Record<T>, UnknownFieldError>
    where
        T: Clone,
    {
        let ix = self
            .type_
            .index_of(field)
            .ok_or_else(|| self.type_.unknown_field(field))?;

        let mut values = self.values.to_vec();
        values[ix] = value;

        Ok(Record::new_unchecked(self.type_.clone(), values))
    }
}

impl<T> fmt::Debug for Record<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}(", self.type_.name())?;
        for (ix, (name, value)) in self.items().enumerate() {
            if ix > 0 {
                write!(fmt, ", ")?;
            }
            write!(fmt, "{}={:?}", name, value)?;
        }
        write!(fmt, ")")
    }
}

impl<T> Index<usize> for Record<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

/// Panics when the field is out of range for this record, which can
/// only happen with a `Field` from another record type.
impl<T> Index<Field> for Record<T> {
    type Output = T;

    fn index(&self, field: Field) -> &T {
        &self.values[field.index]
    }
}

impl<T> AsRef<[T]> for Record<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

impl<T> From<Record<T>> for Vec<T> {
    fn from(record: Record<T>) -> Vec<T> {
        record.into_vec()
    }
}

impl<T> IntoIterator for Record<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'r, T> IntoIterator for &'r Record<T> {
    type Item = &'r T;
    type IntoIter = std::slice::Iter<'r, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T, U> PartialEq<Record<U>> for Record<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Record<U>) -> bool {
        self.values[..] == other.values[..]
    }
}

impl<T: Eq> Eq for Record<T> {}

impl<T, U> PartialEq<[U]> for Record<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.values[..] == other[..]
    }
}

impl<T, U> PartialEq<Vec<U>> for Record<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.values[..] == other[..]
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for Record<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.values[..] == other[..]
    }
}

impl<T: PartialOrd> PartialOrd for Record<T> {
    fn partial_cmp(&self, other: &Record<T>) -> Option<Ordering> {
        self.values[..].partial_cmp(&other.values[..])
    }
}

impl<T: PartialOrd> PartialOrd<[T]> for Record<T> {
    fn partial_cmp(&self, other: &[T]) -> Option<Ordering> {
        self.values[..].partial_cmp(other)
    }
}

impl<T: PartialOrd> PartialOrd<Vec<T>> for Record<T> {
    fn partial_cmp(&self, other: &Vec<T>) -> Option<Ordering> {
        self.values[..].partial_cmp(&other[..])
    }
}

impl<T: PartialOrd, const N: usize> PartialOrd<[T; N]> for Record<T> {
    fn partial_cmp(&self, other: &[T; N]) -> Option<Ordering> {
        self.values[..].partial_cmp(&other[..])
    }
}

impl<T: Ord> Ord for Record<T> {
    fn cmp(&self, other: &Record<T>) -> Ordering {
        self.values[..].cmp(&other.values[..])
    }
}

impl<T: Hash> Hash for Record<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values[..].hash(state)
    }
}

#[derive(Serialize)]
struct RecordRef<'r, T> {
    #[serde(rename = "type")]
    type_: &'r str,
    fields: &'r [String],
    values: &'r [T],
}

#[derive(Deserialize)]
struct RecordRepr<T> {
    #[serde(rename = "type")]
    type_: String,
    fields: Vec<String>,
    values: Vec<T>,
}

impl<T: Serialize> Serialize for Record<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RecordRef {
            type_: self.type_.name(),
            fields: self.type_.fields(),
            values: &self.values,
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Record<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = RecordRepr::<T>::deserialize(deserializer)?;
        let type_ = RecordType::new(&repr.type_, repr.fields).map_err(D::Error::custom)?;

        type_.make(repr.values).map_err(D::Error::custom)
    }
}
