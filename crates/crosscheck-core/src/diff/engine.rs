//! Structural differ.
//!
//! The core entry point is [`StructuralDiffer::compare`], which walks two
//! optional [`Comparable`] graphs in lockstep and returns every raw
//! difference as a [`ChangeRecord`]. No filtering happens here.

use crate::diff::comparable::{Comparable, FieldValue};
use crate::diff::model::{ChangeKind, ChangeRecord};

/// Walks two response graphs of the same declared shape.
#[derive(Debug, Clone)]
pub struct StructuralDiffer {
    root: String,
}

impl StructuralDiffer {
    /// Create a differ whose paths start with `root`
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    /// Root label used as the first path segment
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Compare two optional responses.
    ///
    /// - both present: field-by-field walk
    /// - one present: a single `ValueChanged` at the root path
    /// - both absent: no records (the caller reports that condition itself)
    pub fn compare(
        &self,
        left: Option<&dyn Comparable>,
        right: Option<&dyn Comparable>,
    ) -> Vec<ChangeRecord> {
        let mut out = Vec::new();
        self.walk_optional(&self.root, left, right, &mut out);
        out
    }

    /// Typed convenience over [`compare`](Self::compare)
    pub fn compare_responses<R: Comparable>(
        &self,
        left: Option<&R>,
        right: Option<&R>,
    ) -> Vec<ChangeRecord> {
        self.compare(
            left.map(|r| r as &dyn Comparable),
            right.map(|r| r as &dyn Comparable),
        )
    }

    fn walk_optional(
        &self,
        path: &str,
        left: Option<&dyn Comparable>,
        right: Option<&dyn Comparable>,
        out: &mut Vec<ChangeRecord>,
    ) {
        match (left, right) {
            (Some(l), Some(r)) => self.walk_object(path, l, r, out),
            (None, None) => {}
            (l, r) => out.push(ChangeRecord::value_changed(
                path,
                l.map(|v| v.type_name().to_string()),
                r.map(|v| v.type_name().to_string()),
            )),
        }
    }

    fn walk_object(
        &self,
        path: &str,
        left: &dyn Comparable,
        right: &dyn Comparable,
        out: &mut Vec<ChangeRecord>,
    ) {
        if left.type_name() != right.type_name() {
            out.push(ChangeRecord::value_changed(
                path,
                Some(left.type_name().to_string()),
                Some(right.type_name().to_string()),
            ));
            return;
        }

        let right_fields = right.fields();
        for (index, lf) in left.fields().iter().enumerate() {
            let field_path = format!("{}.{}", path, lf.name);
            // Same type means same declaration order; fall back to a name
            // lookup only if an implementation is not positional.
            let rf = right_fields
                .get(index)
                .filter(|rf| rf.name == lf.name)
                .or_else(|| right_fields.iter().find(|rf| rf.name == lf.name));
            match rf {
                Some(rf) => self.walk_field(&field_path, &lf.value, &rf.value, out),
                None => out.push(ChangeRecord::value_changed(
                    field_path,
                    lf.value.summary(),
                    None,
                )),
            }
        }
    }

    fn walk_field(
        &self,
        path: &str,
        left: &FieldValue<'_>,
        right: &FieldValue<'_>,
        out: &mut Vec<ChangeRecord>,
    ) {
        match (left, right) {
            (FieldValue::Scalar(l), FieldValue::Scalar(r)) => {
                if l != r {
                    out.push(ChangeRecord::value_changed(path, l.clone(), r.clone()));
                }
            }
            (FieldValue::Object(l), FieldValue::Object(r)) => {
                self.walk_optional(path, *l, *r, out);
            }
            (FieldValue::Records(l), FieldValue::Records(r)) => {
                for (index, (le, re)) in l.iter().zip(r.iter()).enumerate() {
                    self.walk_object(&format!("{}[{}]", path, index), *le, *re, out);
                }
                for (index, le) in l.iter().enumerate().skip(r.len()) {
                    out.push(ChangeRecord::new(
                        format!("{}[{}]", path, index),
                        ChangeKind::ElementRemoved,
                        Some(le.type_name().to_string()),
                        None,
                    ));
                }
                for (index, re) in r.iter().enumerate().skip(l.len()) {
                    out.push(ChangeRecord::new(
                        format!("{}[{}]", path, index),
                        ChangeKind::ElementAdded,
                        None,
                        Some(re.type_name().to_string()),
                    ));
                }
            }
            (FieldValue::Scalars(l), FieldValue::Scalars(r)) => {
                for (index, (le, re)) in l.iter().zip(r.iter()).enumerate() {
                    if le != re {
                        out.push(ChangeRecord::new(
                            format!("{}[{}]", path, index),
                            ChangeKind::ElementChanged,
                            le.clone(),
                            re.clone(),
                        ));
                    }
                }
                for (index, le) in l.iter().enumerate().skip(r.len()) {
                    out.push(ChangeRecord::new(
                        format!("{}[{}]", path, index),
                        ChangeKind::ElementRemoved,
                        le.clone(),
                        None,
                    ));
                }
                for (index, re) in r.iter().enumerate().skip(l.len()) {
                    out.push(ChangeRecord::new(
                        format!("{}[{}]", path, index),
                        ChangeKind::ElementAdded,
                        None,
                        re.clone(),
                    ));
                }
            }
            (l, r) => {
                let (ls, rs) = (l.summary(), r.summary());
                if ls != rs {
                    out.push(ChangeRecord::value_changed(path, ls, rs));
                }
            }
        }
    }
}

impl Default for StructuralDiffer {
    fn default() -> Self {
        Self::new("root")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Count {
        code: Option<String>,
        plea: Option<String>,
    }

    struct FileContent {
        name: Option<String>,
        note: Option<String>,
        counts: Vec<Count>,
        flags: Vec<String>,
        primary: Option<Count>,
    }

    crate::impl_comparable!(Count { scalar code, scalar plea });
    crate::impl_comparable!(FileContent {
        scalar name,
        scalar note,
        records counts,
        scalars flags,
        object primary,
    });

    fn count(code: &str, plea: Option<&str>) -> Count {
        Count {
            code: Some(code.to_string()),
            plea: plea.map(str::to_string),
        }
    }

    fn content(name: &str) -> FileContent {
        FileContent {
            name: Some(name.to_string()),
            note: None,
            counts: vec![count("C1", Some("G"))],
            flags: vec!["a".to_string()],
            primary: None,
        }
    }

    #[test]
    fn test_identical_graphs_yield_no_records() {
        let a = content("alpha");
        let b = content("alpha");
        assert!(StructuralDiffer::default()
            .compare_responses(Some(&a), Some(&b))
            .is_empty());
    }

    #[test]
    fn test_scalar_difference_path() {
        let a = content("alpha");
        let b = content("beta");
        let records = StructuralDiffer::default().compare_responses(Some(&a), Some(&b));

        assert_eq!(
            records,
            vec![ChangeRecord::value_changed(
                "root.name",
                Some("alpha".to_string()),
                Some("beta".to_string())
            )]
        );
    }

    #[test]
    fn test_nested_record_in_list_is_value_change() {
        let a = content("x");
        let mut b = content("x");
        b.counts[0].plea = Some("NG".to_string());

        let records = StructuralDiffer::default().compare_responses(Some(&a), Some(&b));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "root.counts[0].plea");
        assert_eq!(records[0].kind, ChangeKind::ValueChanged);
    }

    #[test]
    fn test_list_length_differences_are_positioned() {
        let a = content("x");
        let mut b = content("x");
        b.counts.push(count("C2", None));
        b.flags.clear();

        let records = StructuralDiffer::default().compare_responses(Some(&a), Some(&b));
        let kinds: Vec<(&str, ChangeKind)> =
            records.iter().map(|r| (r.path.as_str(), r.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                ("root.counts[1]", ChangeKind::ElementAdded),
                ("root.flags[0]", ChangeKind::ElementRemoved),
            ]
        );
    }

    #[test]
    fn test_scalar_list_element_change() {
        let a = content("x");
        let mut b = content("x");
        b.flags[0] = "b".to_string();

        let records = StructuralDiffer::default().compare_responses(Some(&a), Some(&b));
        assert_eq!(
            records,
            vec![ChangeRecord::new(
                "root.flags[0]",
                ChangeKind::ElementChanged,
                Some("a".to_string()),
                Some("b".to_string())
            )]
        );
    }

    #[test]
    fn test_object_present_on_one_side() {
        let a = content("x");
        let mut b = content("x");
        b.primary = Some(count("C9", None));

        let records = StructuralDiffer::default().compare_responses(Some(&a), Some(&b));
        assert_eq!(
            records,
            vec![ChangeRecord::value_changed(
                "root.primary",
                None,
                Some("Count".to_string())
            )]
        );
    }

    #[test]
    fn test_root_absent_on_one_side() {
        let b = content("x");
        let records = StructuralDiffer::new("FileContent").compare_responses(None, Some(&b));
        assert_eq!(
            records,
            vec![ChangeRecord::value_changed(
                "FileContent",
                None,
                Some("FileContent".to_string())
            )]
        );
    }

    #[test]
    fn test_both_absent_yields_nothing() {
        let records = StructuralDiffer::default().compare_responses::<FileContent>(None, None);
        assert!(records.is_empty());
    }

    #[test]
    fn test_absent_versus_blank_is_reported() {
        let a = content("x");
        let mut b = content("x");
        b.note = Some(String::new());

        let records = StructuralDiffer::default().compare_responses(Some(&a), Some(&b));
        assert_eq!(
            records,
            vec![ChangeRecord::value_changed("root.note", None, Some(String::new()))]
        );
    }
}
