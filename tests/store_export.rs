// tests/store_export.rs
//
// DataSet parsing/stacking and the CSV/TSV writers.

use std::fs;

use leo_sched::cols;
use leo_sched::config::options::{ExportFormat, ExportOptions};
use leo_sched::core::sanitize::file_stem;
use leo_sched::file;
use leo_sched::store::DataSet;

#[test]
fn csv_parse_trims_headers_and_squares_rows() {
    let text = " Subject ,Facility ID,Mon\nMATH,1234 EH,Y\nPHYS,\"UC, 101\"\nCHEM,X,Y,extra\n";
    let ds = DataSet::from_csv_str(text, "test").unwrap();
    assert_eq!(ds.headers, cols!["Subject", "Facility ID", "Mon"]);
    assert_eq!(ds.row_count(), 3);
    assert_eq!(ds.rows[1], cols!["PHYS", "UC, 101", ""]);
    assert_eq!(ds.rows[2], cols!["CHEM", "X", "Y"]);
    assert_eq!(ds.cell(1, ds.col("Facility ID")), "UC, 101");
    assert_eq!(ds.cell(9, Some(0)), "");
    assert_eq!(ds.cell(0, None), "");
}

#[test]
fn concat_aligns_columns_by_name() {
    let a = DataSet::new(cols!["Subject", "Mon"], vec![cols!["MATH", "Y"]]);
    let b = DataSet::new(cols!["Tues", "Subject"], vec![cols!["Y", "PHYS"]]);
    let ds = DataSet::concat(vec![a, b]);

    assert_eq!(ds.headers, cols!["Subject", "Mon", "Tues"]);
    assert_eq!(ds.rows, vec![cols!["MATH", "Y", ""], cols!["PHYS", "", "Y"]]);
}

#[test]
fn column_edits() {
    let mut ds = DataSet::new(cols!["A", "B"], vec![cols!["1", "2"], cols!["3", "4"]]);
    ds.fill_column("Campus", "Flint");
    ds.set_column("A", cols!["x", "y"]);
    ds.drop_column("B");
    assert_eq!(ds.headers, cols!["A", "Campus"]);
    assert_eq!(ds.rows, vec![cols!["x", "Flint"], cols!["y", "Flint"]]);
    assert!(ds.require_col("B", "test").is_err());
}

#[test]
fn file_stems_are_path_safe() {
    assert_eq!(file_stem("Monday_Ann Arbor_ALL_schedule"), "Monday_Ann_Arbor_ALL_schedule");
    assert_eq!(file_stem("a  /  b"), "a_b");
    assert_eq!(file_stem("::"), "schedule");
}

#[test]
fn export_path_follows_format_unless_extension_typed() {
    let mut export = ExportOptions::default();
    assert!(export.out_path().ends_with("schedule.csv"));

    export.format = ExportFormat::Tsv;
    assert!(export.out_path().ends_with("schedule.tsv"));

    export.set_file_stem("Monday_ALL_ALL_schedule");
    assert!(export.out_path().ends_with("Monday_ALL_ALL_schedule.tsv"));

    export.set_path("reports/mine.txt");
    export.format = ExportFormat::Csv;
    assert!(export.out_path().ends_with("mine.txt"));
    assert!(export.dir().ends_with("reports"));
}

#[test]
fn export_string_matches_format_and_header_flag() {
    let headers = cols!["Subject", "Facility ID"];
    let rows = vec![cols!["MATH", "1234 EH"], cols!["PHYS", "UC, 101"]];

    let mut export = ExportOptions::default();
    let csv = file::to_export_string(&export, &headers, &rows);
    assert_eq!(csv, "Subject,Facility ID\nMATH,1234 EH\nPHYS,\"UC, 101\"\n");

    export.format = ExportFormat::Tsv;
    export.include_headers = false;
    let tsv = file::to_export_string(&export, &headers, &rows);
    assert_eq!(tsv, "MATH\t1234 EH\nPHYS\tUC, 101\n");
}

#[test]
fn export_writes_file_and_creates_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let target = tmp.path().join("nested").join("out.csv");

    let mut export = ExportOptions::default();
    export.set_path(target.to_str().unwrap());

    let headers = cols!["Subject"];
    let rows = vec![cols!["MATH"], cols!["PHYS"]];
    let written = file::write_export_single(&export, &headers, &rows).unwrap();

    assert_eq!(written, target);
    assert_eq!(fs::read_to_string(&written).unwrap(), "Subject\nMATH\nPHYS\n");

    // overwrite, not append
    file::write_export_single(&export, &headers, &rows[..1]).unwrap();
    assert_eq!(fs::read_to_string(&written).unwrap(), "Subject\nMATH\n");
}

#[test]
fn export_refuses_file_as_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let mut export = ExportOptions::default();
    export.set_path(blocker.join("out.csv").to_str().unwrap());
    assert!(file::write_export_single(&export, &cols!["A"], &[]).is_err());
}
