//! Change record types.

use serde::{Deserialize, Serialize};

/// Kind of structural difference found at a path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// A scalar field, or the presence of a nested object, differs
    ValueChanged,
    /// The right-hand list has an element the left-hand list does not
    ElementAdded,
    /// The left-hand list has an element the right-hand list does not
    ElementRemoved,
    /// Two scalar list elements at the same position differ
    ElementChanged,
}

impl ChangeKind {
    /// True for differences reported by a list container about its elements
    pub fn is_list_positioned(&self) -> bool {
        matches!(
            self,
            ChangeKind::ElementAdded | ChangeKind::ElementRemoved | ChangeKind::ElementChanged
        )
    }
}

/// One difference between the left and right response at a given path.
///
/// `None` means the value was absent; `Some("")` means it was present but
/// empty. The two are never conflated here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeRecord {
    /// Locator such as `CourtListResponse.courtFiles[0].fileNumber`
    pub path: String,
    pub kind: ChangeKind,
    /// Value in the left (first-invoked) response
    pub left: Option<String>,
    /// Value in the right response
    pub right: Option<String>,
}

impl ChangeRecord {
    pub fn new(
        path: impl Into<String>,
        kind: ChangeKind,
        left: Option<String>,
        right: Option<String>,
    ) -> Self {
        Self {
            path: path.into(),
            kind,
            left,
            right,
        }
    }

    /// Shorthand for a `ValueChanged` record
    pub fn value_changed(
        path: impl Into<String>,
        left: Option<String>,
        right: Option<String>,
    ) -> Self {
        Self::new(path, ChangeKind::ValueChanged, left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_positioned_kinds() {
        assert!(!ChangeKind::ValueChanged.is_list_positioned());
        assert!(ChangeKind::ElementAdded.is_list_positioned());
        assert!(ChangeKind::ElementRemoved.is_list_positioned());
        assert!(ChangeKind::ElementChanged.is_list_positioned());
    }

    #[test]
    fn test_absent_and_blank_are_distinct() {
        let absent = ChangeRecord::value_changed("root.note", None, Some("x".into()));
        let blank = ChangeRecord::value_changed("root.note", Some(String::new()), Some("x".into()));
        assert_ne!(absent, blank);
    }
}
