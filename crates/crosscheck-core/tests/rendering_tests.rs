#![allow(clippy::unwrap_used, clippy::expect_used)]

use crosscheck_core::diff::ChangeRecord;
use crosscheck_core::report::{Justify, ReportRenderer};
use proptest::prelude::*;

fn change(path: &str, left: Option<&str>, right: Option<&str>) -> ChangeRecord {
    ChangeRecord::value_changed(path, left.map(str::to_string), right.map(str::to_string))
}

#[test]
fn test_zero_rows_is_a_pass() {
    assert!(ReportRenderer::default().render(&[]).is_none());
}

#[test]
fn test_one_row_matches_documented_layout() {
    let table = ReportRenderer::default()
        .render(&[change("root.name", Some("alpha"), Some("beta"))])
        .unwrap();

    let rendered = table.to_string();
    let expected = "\
==========================================
|  Property | API Response | WM Response |
| root.name |        alpha |        beta |
==========================================
";
    assert_eq!(rendered, expected);
}

#[test]
fn test_many_rows_with_asymmetric_widths() {
    let changes = vec![
        change(
            "CourtListResponse.courtFiles[0].fileNumber",
            Some("12345-1"),
            None,
        ),
        change("CourtListResponse.status", Some("1"), Some("Y")),
        change(
            "CourtListResponse.courtFiles[1].accused",
            None,
            Some("A very long accused full name as returned by WM"),
        ),
    ];
    let table = ReportRenderer::default().render(&changes).unwrap();

    assert_eq!(table.row_count(), 3);
    assert_eq!(table.column_widths, vec![42, 12, 47]);

    let width = table.lines[0].len();
    assert_eq!(width, 42 + 12 + 47 + 10);
    for line in &table.lines {
        assert_eq!(line.len(), width, "misaligned line: {}", line);
    }
    assert!(table.lines[2].ends_with(&format!("| {:>47} |", "null")));
}

#[test]
fn test_custom_labels_and_left_justification() {
    let renderer = ReportRenderer::new("Legacy", "New").with_justify(Justify::Left);
    let table = renderer
        .render(&[change("root.id", Some("1"), Some("2"))])
        .unwrap();

    assert_eq!(
        table.lines[1],
        "| Property | Legacy Response | New Response |"
    );
    assert_eq!(
        table.lines[2],
        "| root.id  | 1               | 2            |"
    );
}

#[test]
fn test_rendering_is_byte_identical() {
    let changes = vec![
        change("root.a", Some("x"), Some("y")),
        change("root.b", None, Some("z")),
    ];
    let renderer = ReportRenderer::default();
    let first = renderer.render(&changes).unwrap().to_string();
    for _ in 0..10 {
        assert_eq!(renderer.render(&changes).unwrap().to_string(), first);
    }
}

fn arb_cell() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), r"[a-z0-9 .\[\]]{0,30}".prop_map(Some)]
}

proptest! {
    #[test]
    fn column_width_is_max_cell_length(
        rows in prop::collection::vec((r"root(\.[a-z]{1,10}){1,4}", arb_cell(), arb_cell()), 1..12)
    ) {
        let changes: Vec<ChangeRecord> = rows
            .iter()
            .map(|(p, l, r)| ChangeRecord::value_changed(p.clone(), l.clone(), r.clone()))
            .collect();
        let table = ReportRenderer::default().render(&changes).unwrap();

        let cell_len = |v: &Option<String>| v.as_deref().unwrap_or("null").chars().count();
        let expected = vec![
            rows.iter().map(|(p, _, _)| p.len()).max().unwrap().max("Property".len()),
            rows.iter().map(|(_, l, _)| cell_len(l)).max().unwrap().max("API Response".len()),
            rows.iter().map(|(_, _, r)| cell_len(r)).max().unwrap().max("WM Response".len()),
        ];
        prop_assert_eq!(&table.column_widths, &expected);

        let width: usize = expected.iter().sum::<usize>() + 10;
        for line in &table.lines {
            prop_assert_eq!(line.chars().count(), width);
        }
    }
}
