//! Schema-driven comparison capability.
//!
//! Response contracts are fixed, so every response type declares its own
//! field list once. The differ walks two values of the same type through
//! those declarations instead of introspecting them at runtime.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// A response graph node that can be compared field by field.
pub trait Comparable {
    /// Short type name, used as the root path label and to render a nested
    /// object that is present on one side only
    fn type_name(&self) -> &'static str;

    /// Declared fields in a stable order
    fn fields(&self) -> Vec<Field<'_>>;
}

/// One declared field of a [`Comparable`] value.
pub struct Field<'a> {
    pub name: &'static str,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: FieldValue<'a>) -> Self {
        Self { name, value }
    }
}

/// Shape of a declared field's value.
pub enum FieldValue<'a> {
    /// A leaf value in its natural string form
    Scalar(Option<String>),
    /// A nested record, possibly absent
    Object(Option<&'a dyn Comparable>),
    /// An ordered list of nested records
    Records(Vec<&'a dyn Comparable>),
    /// An ordered list of leaf values
    Scalars(Vec<Option<String>>),
}

impl<'a> FieldValue<'a> {
    pub fn scalar<T: ToScalar + ?Sized>(value: &T) -> Self {
        FieldValue::Scalar(value.to_scalar())
    }

    pub fn object<T: Comparable + 'a>(value: Option<&'a T>) -> Self {
        FieldValue::Object(value.map(|v| v as &dyn Comparable))
    }

    pub fn records<T: Comparable + 'a>(values: &'a [T]) -> Self {
        FieldValue::Records(values.iter().map(|v| v as &dyn Comparable).collect())
    }

    pub fn scalars<T: ToScalar>(values: &[T]) -> Self {
        FieldValue::Scalars(values.iter().map(ToScalar::to_scalar).collect())
    }

    /// Render the whole field as a single cell value
    pub(crate) fn summary(&self) -> Option<String> {
        match self {
            FieldValue::Scalar(value) => value.clone(),
            FieldValue::Object(value) => value.map(|v| v.type_name().to_string()),
            FieldValue::Records(values) => Some(format!("[{} records]", values.len())),
            FieldValue::Scalars(values) => Some(format!("[{} values]", values.len())),
        }
    }
}

/// Conversion of a leaf value into its natural string form.
///
/// `None` stays absent; an empty string stays `Some("")`.
pub trait ToScalar {
    fn to_scalar(&self) -> Option<String>;
}

impl ToScalar for String {
    fn to_scalar(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl ToScalar for str {
    fn to_scalar(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl<T: ToScalar> ToScalar for Option<T> {
    fn to_scalar(&self) -> Option<String> {
        self.as_ref().and_then(ToScalar::to_scalar)
    }
}

impl ToScalar for DateTime<Utc> {
    fn to_scalar(&self) -> Option<String> {
        Some(self.to_rfc3339())
    }
}

macro_rules! display_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToScalar for $ty {
                fn to_scalar(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

display_scalar!(bool, i32, i64, u32, u64, f64, NaiveDate, NaiveDateTime);

/// Implement [`Comparable`] for a struct from a declared field list.
///
/// Each entry is `<kind> <field>` where kind is one of `scalar`, `object`
/// (an `Option<T: Comparable>`), `records` (a `Vec<T: Comparable>`) or
/// `scalars` (a `Vec<T: ToScalar>`). Field order is report order. A field
/// may carry a wire label (`scalar file_number as "fileNumber"`); otherwise
/// the Rust field name is used in paths.
///
/// ```
/// use crosscheck_core::impl_comparable;
///
/// struct Party {
///     name: Option<String>,
/// }
///
/// struct Appearance {
///     appearance_id: String,
///     parties: Vec<Party>,
/// }
///
/// impl_comparable!(Party { scalar name });
/// impl_comparable!(Appearance {
///     scalar appearance_id as "appearanceId",
///     records parties,
/// });
/// ```
#[macro_export]
macro_rules! impl_comparable {
    (@value scalar, $value:expr) => {
        $crate::diff::FieldValue::scalar(&$value)
    };
    (@value object, $value:expr) => {
        $crate::diff::FieldValue::object($value.as_ref())
    };
    (@value records, $value:expr) => {
        $crate::diff::FieldValue::records(&$value)
    };
    (@value scalars, $value:expr) => {
        $crate::diff::FieldValue::scalars(&$value)
    };
    (@label $field:ident) => {
        stringify!($field)
    };
    (@label $field:ident $label:literal) => {
        $label
    };
    ($ty:ident { $($kind:ident $field:ident $(as $label:literal)?),* $(,)? }) => {
        impl $crate::diff::Comparable for $ty {
            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::diff::Field<'_>> {
                vec![
                    $(
                        $crate::diff::Field::new(
                            $crate::impl_comparable!(@label $field $($label)?),
                            $crate::impl_comparable!(@value $kind, self.$field),
                        ),
                    )*
                ]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Leaf {
        code: Option<String>,
    }

    struct Node {
        id: i64,
        leaf: Option<Leaf>,
        leaves: Vec<Leaf>,
        tags: Vec<String>,
    }

    crate::impl_comparable!(Leaf { scalar code });
    crate::impl_comparable!(Node {
        scalar id as "nodeId",
        object leaf,
        records leaves,
        scalars tags,
    });

    #[test]
    fn test_generated_fields_follow_declaration_order() {
        let node = Node {
            id: 7,
            leaf: None,
            leaves: vec![Leaf { code: None }],
            tags: vec!["a".to_string()],
        };

        let names: Vec<&str> = node.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["nodeId", "leaf", "leaves", "tags"]);
        assert_eq!(node.type_name(), "Node");
    }

    #[test]
    fn test_scalar_conversion_keeps_absent_and_blank_apart() {
        assert_eq!(None::<String>.to_scalar(), None);
        assert_eq!(Some(String::new()).to_scalar(), Some(String::new()));
        assert_eq!(42i64.to_scalar(), Some("42".to_string()));
        assert_eq!(true.to_scalar(), Some("true".to_string()));
    }

    #[test]
    fn test_timestamp_scalar_is_rfc3339() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(ts.to_scalar(), Some("2024-03-01T09:30:00+00:00".to_string()));
    }

    #[test]
    fn test_field_summary() {
        let leaf = Leaf { code: None };
        assert_eq!(FieldValue::object(Some(&leaf)).summary(), Some("Leaf".to_string()));
        assert_eq!(FieldValue::object::<Leaf>(None).summary(), None);
        assert_eq!(
            FieldValue::records(&[Leaf { code: None }]).summary(),
            Some("[1 records]".to_string())
        );
    }
}
