/// Declares a named tuple type at compile time.
///
/// This is the static counterpart of [`create`]: the field set is
/// fixed in the source, and every field is a typed struct field, so
/// reading one by name is an ordinary field access. The generated type
/// gets:
///
/// * `new(..)`, taking the fields in declaration order (a struct
///   literal works for construction by name);
/// * `FIELDS` and `ARITY` constants;
/// * `into_tuple()` and `From<(..)>` to unpack into and pack from a
///   tuple in field order;
/// * a `Debug` implementation printing `Name(field=value, ..)`, which
///   requires every field type to implement `Debug`.
///
/// Attributes, including derives and doc comments, are passed through.
/// Derived `PartialEq` and `PartialOrd` compare fields in declaration
/// order, which matches comparing the tuples.
///
/// # Examples
///
/// ```
/// use named_collections::named_tuple;
///
/// named_tuple! {
///     #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
///     pub struct Point { x: i32, y: i32 }
/// }
///
/// let p = Point::new(11, 22);
///
/// assert_eq!(33, p.x + p.y);
/// assert_eq!(p, Point { y: 22, x: 11 });
/// assert_eq!(&["x", "y"], Point::FIELDS);
/// assert_eq!(2, Point::ARITY);
/// assert_eq!("Point(x=11, y=22)", format!("{:?}", p));
///
/// let (x, y) = p.into_tuple();
/// assert_eq!(p, Point::from((x, y)));
///
/// let q = Point { x: 100, ..p };
/// assert_eq!("Point(x=100, y=22)", format!("{:?}", q));
/// ```
///
/// [`create`]: fn.create.html
#[macro_export]
macro_rules! named_tuple {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident { $($field:ident : $ty:ty),* $(,)? }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(pub $field: $ty,)*
        }

        #[allow(dead_code)]
        impl $name {
            /// The field names, in declaration order.
            pub const FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];

            /// The number of fields.
            pub const ARITY: usize = Self::FIELDS.len();

            /// Builds a value from its fields, in declaration order.
            #[allow(clippy::too_many_arguments)]
            pub fn new($($field: $ty),*) -> Self {
                Self { $($field),* }
            }

            /// Unpacks the value into a tuple, in declaration order.
            pub fn into_tuple(self) -> ($($ty,)*) {
                ($(self.$field,)*)
            }
        }

        impl ::std::convert::From<($($ty,)*)> for $name {
            fn from(($($field,)*): ($($ty,)*)) -> Self {
                Self { $($field),* }
            }
        }

        impl ::std::fmt::Debug for $name {
            #[allow(unused_assignments, unused_mut, unused_variables)]
            fn fmt(&self, fmt: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut separator = "";
                fmt.write_str(stringify!($name))?;
                fmt.write_str("(")?;
                $(
                    ::std::write!(fmt, "{}{}={:?}", separator, stringify!($field), self.$field)?;
                    separator = ", ";
                )*
                fmt.write_str(")")
            }
        }
    };
}

#[cfg(test)]
mod test {
    named_tuple! {
        #[derive(Clone, PartialEq, PartialOrd)]
        struct TestResults { failed: u32, attempted: u32 }
    }

    named_tuple! {
        #[derive(Clone, PartialEq)]
        struct Labelled { name: String, weight: f64, }
    }

    named_tuple! {
        #[derive(Clone, Copy, PartialEq)]
        struct Unit {}
    }

    named_tuple! {
        #[derive(PartialEq, serde::Serialize, serde::Deserialize)]
        struct Stored { id: u64, tags: Vec<String> }
    }

    #[test]
    fn positional_and_named_construction_agree() {
        assert_eq!(
            TestResults::new(0, 7),
            TestResults {
                attempted: 7,
                failed: 0
            }
        );
    }

    #[test]
    fn constants() {
        assert_eq!(&["failed", "attempted"], TestResults::FIELDS);
        assert_eq!(2, TestResults::ARITY);
        assert_eq!(0, Unit::ARITY);
        assert!(Unit::FIELDS.is_empty());
    }

    #[test]
    fn debug_format() {
        assert_eq!(
            "TestResults(failed=0, attempted=7)",
            format!("{:?}", TestResults::new(0, 7))
        );
        assert_eq!(
            r#"Labelled(name="a", weight=1.5)"#,
            format!("{:?}", Labelled::new("a".to_string(), 1.5))
        );
        assert_eq!("Unit()", format!("{:?}", Unit::new()));
    }

    #[test]
    fn ordering_follows_declaration_order() {
        assert!(TestResults::new(0, 9) < TestResults::new(1, 0));
        assert!(TestResults::new(1, 0) < TestResults::new(1, 1));
    }

    #[test]
    fn tuple_conversions() {
        let t = Labelled::from(("b".to_string(), 2.0));
        let (name, weight) = t.clone().into_tuple();

        assert_eq!("b", name);
        assert_eq!(2.0, weight);
        assert_eq!(t, Labelled::from((name, weight)));
    }

    #[test]
    fn derives_pass_through() {
        let s = Stored::new(1, vec!["a".to_string()]);
        let json = serde_json::to_string(&s).unwrap();
        let back: Stored = serde_json::from_str(&json).unwrap();

        assert!(s == back);
        assert_eq!(r#"{"id":1,"tags":["a"]}"#, json);
    }
}
