// tests/merge.rs
use leo_sched::cols;
use leo_sched::config::options::JoinKind;
use leo_sched::error::LoadError;
use leo_sched::merge::{fmt_id, merge_payroll, parse_id};
use leo_sched::store::DataSet;

const PAYROLL_HDR: [&str; 6] = [
    "UM ID", "Job Title", "Appointment Start Date", "FTE", "Department Name", "Deduction",
];

fn payroll() -> DataSet {
    DataSet::new(
        PAYROLL_HDR.iter().map(|s| s.to_string()).collect(),
        vec![
            cols!["11111111", "Lecturer I", "2020-01-01", "1", "Math", "UM"],
            cols!["22222222.0", "Lecturer II", "2019-09-01", "0.5", "Physics", "UM"],
            cols!["22222222", "Lecturer III", "2021-01-01", "0.5", "Physics", "UM"],
            cols!["n/a", "Ghost", "", "", "", ""],
        ],
    )
}

fn schedule() -> DataSet {
    DataSet::new(
        cols!["Subject", "Class Instr ID"],
        vec![
            cols!["MATH", "11111111"],
            cols!["PHYS", " 22222222 "],
            cols!["CHEM", "33333333"],
            cols!["ENGL", ""],
        ],
    )
}

#[test]
fn ids_parse_leniently() {
    assert_eq!(parse_id(" 42 "), Some(42.0));
    assert_eq!(parse_id("42.0"), Some(42.0));
    assert_eq!(parse_id(""), None);
    assert_eq!(parse_id("abc"), None);
    assert_eq!(parse_id("NaN"), None);
    assert_eq!(fmt_id(12345678.0), "12345678");
}

#[test]
fn left_join_keeps_unmatched_and_fans_out_duplicates() {
    let out = merge_payroll(schedule(), &payroll(), JoinKind::Left).unwrap();

    // MATH x1, PHYS x2 (two payroll rows), CHEM unmatched; ENGL has no id
    assert_eq!(out.row_count(), 4);
    let subj = out.col("Subject").unwrap();
    let title = out.col("Job Title").unwrap();
    let um = out.col("UM ID").unwrap();
    let instr = out.col("Class Instr ID").unwrap();

    let got: Vec<(&str, &str)> = out.rows.iter().map(|r| (r[subj].as_str(), r[title].as_str())).collect();
    assert_eq!(got, vec![
        ("MATH", "Lecturer I"),
        ("PHYS", "Lecturer II"),
        ("PHYS", "Lecturer III"),
        ("CHEM", ""),
    ]);

    // ids normalised on both sides of the join
    assert_eq!(out.rows[1][instr], "22222222");
    assert_eq!(out.rows[1][um], "22222222");
    assert_eq!(out.rows[3][um], "");
}

#[test]
fn inner_join_drops_unmatched_rows_and_instr_id() {
    let out = merge_payroll(schedule(), &payroll(), JoinKind::Inner).unwrap();
    assert_eq!(out.row_count(), 3);
    assert_eq!(out.col("Class Instr ID"), None);
    assert!(out.col("UM ID").is_some());
    assert!(out.rows.iter().all(|r| r.len() == out.header_count()));
}

#[test]
fn existing_payroll_columns_are_reused() {
    let sched = DataSet::new(
        cols!["Class Instr ID", "Job Title"],
        vec![cols!["11111111", "stale"], cols!["99", "stale"]],
    );
    let out = merge_payroll(sched, &payroll(), JoinKind::Left).unwrap();

    let titles = out.headers.iter().filter(|h| *h == "Job Title").count();
    assert_eq!(titles, 1);
    let t = out.col("Job Title").unwrap();
    assert_eq!(out.rows[0][t], "Lecturer I");
    assert_eq!(out.rows[1][t], "");
}

#[test]
fn missing_join_column_is_an_error() {
    let sched = DataSet::new(cols!["Subject"], vec![cols!["MATH"]]);
    let err = merge_payroll(sched, &payroll(), JoinKind::Left).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn { ref column, .. } if column == "Class Instr ID"));

    let bad_payroll = DataSet::new(cols!["UM ID"], vec![cols!["1"]]);
    let err = merge_payroll(schedule(), &bad_payroll, JoinKind::Left).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn { .. }));
}
