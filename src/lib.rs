//! Named tuples whose shape is decided at runtime, together with a
//! double-ended queue and a map with default values.
//!
//! [`create`] takes a type name and a list of field names and returns a
//! [`RecordType`]. Records of that type behave like fixed-length,
//! immutable sequences that can also be read field by field:
//!
//! ```
//! use named_collections::{create, Arguments};
//!
//! let point = create("Point", "x y", false).unwrap();
//! let p = point.call(Arguments::new().positional(11).keyword("y", 22)).unwrap();
//!
//! assert_eq!(p, [11, 22]);
//! assert_eq!(Ok(&22), p.attr("y"));
//! assert_eq!("Point(x=11, y=22)", format!("{:?}", p));
//! ```
//!
//! Every failure has its own error type; they all convert into
//! [`Error`], so a caller can use `?` throughout:
//!
//! ```
//! use named_collections::{create, Arguments, Error};
//!
//! fn main() -> Result<(), Error> {
//!     let results = create("TestResults", "failed, attempted", false)?;
//!     let r = results.call(Arguments::new().keyword("attempted", 7).keyword("failed", 0))?;
//!     let r = r.replace("failed", 1)?;
//!
//!     assert_eq!("TestResults(failed=1, attempted=7)", format!("{:?}", r));
//!     assert!(results.call(Arguments::new().positional(0)).is_err());
//!     Ok(())
//! }
//! ```
//!
//! When the fields are known at compile time, [`named_tuple!`] declares
//! an ordinary struct with the same conveniences.
//!
//! [`create`]: fn.create.html
//! [`RecordType`]: struct.RecordType.html
//! [`Error`]: enum.Error.html
//! [`named_tuple!`]: macro.named_tuple.html

#[macro_use]
mod macros;

mod arguments;
mod default_map;
mod deque;
mod error;
mod field;
mod iterators;
mod record;
mod record_type;

pub use crate::arguments::Arguments;
pub use crate::default_map::DefaultMap;
pub use crate::deque::Deque;
pub use crate::error::{BindError, Error, InvalidNameError, InvalidNameReason, UnknownFieldError};
pub use crate::field::{Field, FieldNames};
pub use crate::iterators::{Drain, IntoIter, Iter, IterMut};
pub use crate::record::Record;
pub use crate::record_type::{create, replace_field, RecordType};
