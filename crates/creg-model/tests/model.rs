//! Integration tests for the measure-then-pad contract.

use creg_model::{FieldWidths, ProjectRecord, TextField, sort_by_issued};

fn record(project_id: &str, name: &str, issued: i32) -> ProjectRecord {
    ProjectRecord {
        project_id: project_id.to_string(),
        name: name.to_string(),
        issued,
        ..ProjectRecord::default()
    }
}

#[test]
fn widths_are_final_only_after_every_record_is_observed() {
    let records = vec![
        record("1", "Short", 100),
        record("22", "LongerName", 50),
        record("3", "Mid", 75),
    ];

    let mut widths = FieldWidths::new();
    for rec in &records {
        widths.observe(rec);
    }

    // The maximum comes from the second record even though the first was
    // observed earlier.
    assert_eq!(widths.get(TextField::Name), "LongerName".len());
    assert_eq!(widths.get(TextField::ProjectId), 2);
}

#[test]
fn padded_records_share_identical_per_field_lengths() {
    let mut records = vec![
        record("1", "Short", 100),
        record("22", "LongerName", 50),
        record("3", "", 75),
    ];

    let mut widths = FieldWidths::new();
    for rec in &records {
        widths.observe(rec);
    }
    for rec in &mut records {
        widths.pad(rec);
    }

    for field in TextField::ALL {
        let width = widths.get(field);
        for rec in &records {
            assert_eq!(rec.text(field).len(), width, "field {}", field.label());
        }
    }
}

#[test]
fn pad_then_sort_keeps_padded_values_intact() {
    let mut records = vec![record("1", "Short", 100), record("22", "LongerName", 50)];

    let mut widths = FieldWidths::new();
    for rec in &records {
        widths.observe(rec);
    }
    for rec in &mut records {
        widths.pad(rec);
    }
    sort_by_issued(&mut records);

    assert_eq!(records[0].issued, 50);
    assert_eq!(records[0].name, "LongerName");
    assert_eq!(records[1].name, "Short     ");
}
