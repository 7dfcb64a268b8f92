//! Noise suppression policy.
//!
//! The two backends serialize the same logical data differently: one emits
//! null where the other emits an empty string, and repeated elements come
//! back in no reliable order. [`DiffFilter`] drops those raw records so only
//! field-level regressions reach the report.

use serde::Deserialize;

use crate::diff::model::{ChangeKind, ChangeRecord};

/// Which absent/blank pairings count as noise.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NullBlankRule {
    /// Left absent and right blank is noise; the reverse is material
    #[default]
    LeftNullRightBlank,
    /// Either side absent with the other blank is noise
    Symmetric,
    /// Absent and blank are always different
    Off,
}

/// Decides which raw change records are material.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DiffFilter {
    pub null_blank: NullBlankRule,
    /// Drop every list-positioned record
    pub suppress_list_changes: bool,
}

impl Default for DiffFilter {
    fn default() -> Self {
        Self {
            null_blank: NullBlankRule::LeftNullRightBlank,
            suppress_list_changes: true,
        }
    }
}

impl DiffFilter {
    pub fn new(null_blank: NullBlankRule, suppress_list_changes: bool) -> Self {
        Self {
            null_blank,
            suppress_list_changes,
        }
    }

    /// True if `record` is a serialization artifact rather than a difference
    pub fn is_noise(&self, record: &ChangeRecord) -> bool {
        if record.kind.is_list_positioned() {
            return self.suppress_list_changes;
        }
        if record.kind != ChangeKind::ValueChanged {
            return false;
        }

        let left = record.left.as_deref();
        let right = record.right.as_deref();
        match self.null_blank {
            NullBlankRule::Off => false,
            NullBlankRule::LeftNullRightBlank => left.is_none() && is_blank(right),
            NullBlankRule::Symmetric => {
                (left.is_none() && is_blank(right)) || (right.is_none() && is_blank(left))
            }
        }
    }

    /// Keep only material records, preserving order
    pub fn apply(&self, records: Vec<ChangeRecord>) -> Vec<ChangeRecord> {
        records.into_iter().filter(|r| !self.is_noise(r)).collect()
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map(|v| v.trim().is_empty()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changed(left: Option<&str>, right: Option<&str>) -> ChangeRecord {
        ChangeRecord::value_changed(
            "root.note",
            left.map(str::to_string),
            right.map(str::to_string),
        )
    }

    #[test]
    fn test_left_null_right_blank_is_noise() {
        let filter = DiffFilter::default();
        assert!(filter.is_noise(&changed(None, Some(""))));
        assert!(filter.is_noise(&changed(None, Some("   "))));
    }

    #[test]
    fn test_default_rule_is_directional() {
        let filter = DiffFilter::default();
        assert!(!filter.is_noise(&changed(Some(""), None)));
        assert!(!filter.is_noise(&changed(None, Some("x"))));
        assert!(!filter.is_noise(&changed(Some(""), Some("x"))));
    }

    #[test]
    fn test_symmetric_rule() {
        let filter = DiffFilter::new(NullBlankRule::Symmetric, true);
        assert!(filter.is_noise(&changed(None, Some(""))));
        assert!(filter.is_noise(&changed(Some(" "), None)));
        assert!(!filter.is_noise(&changed(None, Some("x"))));
    }

    #[test]
    fn test_off_rule_keeps_null_blank() {
        let filter = DiffFilter::new(NullBlankRule::Off, true);
        assert!(!filter.is_noise(&changed(None, Some(""))));
    }

    #[test]
    fn test_list_records_follow_switch() {
        let added = ChangeRecord::new(
            "root.counts[2]",
            ChangeKind::ElementAdded,
            None,
            Some("Count".into()),
        );
        assert!(DiffFilter::default().is_noise(&added));
        assert!(!DiffFilter::new(NullBlankRule::LeftNullRightBlank, false).is_noise(&added));
    }

    #[test]
    fn test_apply_preserves_order() {
        let records = vec![
            changed(Some("a"), Some("b")),
            changed(None, Some("")),
            ChangeRecord::value_changed("root.name", Some("x".into()), Some("y".into())),
        ];
        let kept = DiffFilter::default().apply(records);
        let paths: Vec<&str> = kept.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["root.note", "root.name"]);
    }

    #[test]
    fn test_deserialize_partial_table() {
        let filter: DiffFilter = serde_json::from_str(r#"{"null_blank":"symmetric"}"#)
            .expect("filter config should parse");
        assert_eq!(filter.null_blank, NullBlankRule::Symmetric);
        assert!(filter.suppress_list_changes);
    }
}
