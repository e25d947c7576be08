// tests/filter_view.rs
//
// Day/campus/building/subject cascade, display projection, titles.

use leo_sched::cols;
use leo_sched::config::options::{CampusField, Choice, Day, FilterOptions};
use leo_sched::filter::{self, OptionCount};
use leo_sched::store::DataSet;
use leo_sched::view::{self, format_clock, parse_clock, Projection, TableView};

fn table() -> DataSet {
    DataSet::new(
        cols!["Subject", "Campus", "BldgPrediction", "CampusPrediction", "Mon", "Tues", "Meeting Time Start", "Class Nbr"],
        vec![
            cols!["MATH", "Ann Arbor", "EH", "Ann Arbor", "Y", "", "10:00 AM", "1"],
            cols!["PHYS", "Ann Arbor", "EH", "Ann Arbor", "M", "T", "1:30 PM", "2"],
            cols!["CHEM", "Ann Arbor", "CHEM", "Ann Arbor", "Y", "", "13:05", "3"],
            cols!["ENGL", "Dearborn", "UC", "Dearborn", "", "Y", "", "4"],
            cols!["MATH", "Flint", "", "", "N", "Y", "garbage", "5"],
            cols!["HIST", "Flint", "MSB", "Flint", "M", "", "8:00", "6"],
        ],
    )
}

fn oc(value: &str, count: usize) -> OptionCount {
    OptionCount { value: value.into(), count }
}

#[test]
fn day_indicator_accepts_y_or_own_code() {
    assert!(Day::Monday.is_active("Y"));
    assert!(Day::Monday.is_active(" y "));
    assert!(Day::Monday.is_active("M"));
    assert!(!Day::Monday.is_active("T"));
    assert!(!Day::Monday.is_active("MW"));
    assert!(!Day::Monday.is_active(""));
    assert!(Day::Thursday.is_active("R"));
    assert!(Day::Sunday.is_active("U"));
    assert!(!Day::Tuesday.is_active("N"));
}

#[test]
fn day_parses_names_and_columns() {
    assert_eq!(Day::parse("monday"), Some(Day::Monday));
    assert_eq!(Day::parse("Thurs"), Some(Day::Thursday));
    assert_eq!(Day::parse(" SUN "), Some(Day::Sunday));
    assert_eq!(Day::parse("Someday"), None);
}

#[test]
fn choice_parses_all_sentinel() {
    assert_eq!(Choice::parse("ALL"), Choice::All);
    assert_eq!(Choice::parse("all"), Choice::All);
    assert_eq!(Choice::parse(""), Choice::All);
    assert_eq!(Choice::parse(" EH "), Choice::Only("EH".into()));
}

#[test]
fn day_only_lists_every_campus_with_counts() {
    let ds = table();
    let out = filter::apply(&ds, &FilterOptions::default());

    assert_eq!(out.row_ix, vec![0, 1, 2, 5]);
    assert_eq!(out.day_total, 4);
    assert_eq!(out.campuses, vec![oc("Ann Arbor", 3), oc("Flint", 1)]);
    // blank prediction cells never become options
    assert_eq!(out.buildings, vec![oc("CHEM", 1), oc("EH", 2), oc("MSB", 1)]);
    assert_eq!(out.subjects.len(), 4);
    assert_eq!(out.campuses[0].label(), "Ann Arbor (3)");
}

#[test]
fn cascade_narrows_lists_below_each_picker() {
    let ds = table();
    let opts = FilterOptions {
        campus: Choice::Only("Ann Arbor".into()),
        building: Choice::Only("EH".into()),
        ..Default::default()
    };
    let out = filter::apply(&ds, &opts);

    assert_eq!(out.row_ix, vec![0, 1]);
    // campus list is computed before the campus pick
    assert_eq!(out.campuses.len(), 2);
    // building list only has Ann Arbor buildings
    assert_eq!(out.buildings, vec![oc("CHEM", 1), oc("EH", 2)]);
    assert_eq!(out.subjects, vec![oc("MATH", 1), oc("PHYS", 1)]);
}

#[test]
fn campus_can_follow_predicted_column() {
    let ds = table();
    let opts = FilterOptions {
        day: Day::Tuesday,
        campus_field: CampusField::Predicted,
        ..Default::default()
    };
    let out = filter::apply(&ds, &opts);
    assert_eq!(out.row_ix, vec![1, 3, 4]);
    assert_eq!(out.campuses, vec![oc("Ann Arbor", 1), oc("Dearborn", 1)]);
}

#[test]
fn missing_day_column_means_no_rows() {
    let ds = table();
    let opts = FilterOptions { day: Day::Friday, ..Default::default() };
    let out = filter::apply(&ds, &opts);
    assert!(out.is_empty());
    assert!(out.campuses.is_empty());
}

#[test]
fn stale_choices_fall_back_to_all() {
    let ds = table();
    let mut opts = FilterOptions {
        day: Day::Tuesday,
        campus: Choice::Only("Ann Arbor".into()),
        building: Choice::Only("CHEM".into()),
        subject: Choice::Only("CHEM".into()),
        ..Default::default()
    };
    let out = filter::apply_resetting(&ds, &mut opts);

    // Ann Arbor still meets Tuesday (PHYS in EH), CHEM does not
    assert_eq!(opts.campus, Choice::Only("Ann Arbor".into()));
    assert_eq!(opts.building, Choice::All);
    assert_eq!(opts.subject, Choice::All);
    assert_eq!(out.row_ix, vec![1]);
}

/* ---------------- View ---------------- */

#[test]
fn clock_formats() {
    assert_eq!(parse_clock("10:00 AM"), Some((10, 0)));
    assert_eq!(parse_clock("12:15 AM"), Some((0, 15)));
    assert_eq!(parse_clock("12:15 PM"), Some((12, 15)));
    assert_eq!(parse_clock("1:30:00 PM"), Some((13, 30)));
    assert_eq!(parse_clock("1:30PM"), Some((13, 30)));
    assert_eq!(parse_clock("2025-01-08 08:05:00"), Some((8, 5)));
    assert_eq!(parse_clock("1/8/2025 10:00AM"), Some((10, 0)));
    assert_eq!(parse_clock("2025-01-08T10:00:00"), Some((10, 0)));
    assert_eq!(parse_clock("2025-01-08T14:45:30Z"), Some((14, 45)));
    assert_eq!(parse_clock("2025-01-08T1:15 PM"), Some((13, 15)));
    assert_eq!(parse_clock("25:00"), None);
    assert_eq!(parse_clock("13:00 PM"), None);
    assert_eq!(parse_clock("TBA"), None);

    assert_eq!(format_clock("9:05 am"), "09:05");
    assert_eq!(format_clock(""), "");
}

#[test]
fn projection_uses_display_order_and_blanks_missing_columns() {
    let ds = table();
    let proj = Projection::display(&ds, true);

    let h = proj.headers();
    assert_eq!(h[0], "Meeting Time Start");
    assert_eq!(h[3], "BldgPrediction");
    assert!(!h.iter().any(|c| c == "Class Nbr"));

    let tv = TableView::new(&ds, vec![1, 4]);
    let (headers, rows) = proj.project(&tv);
    assert_eq!(headers.len(), proj.width());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "13:30");
    assert_eq!(rows[1][0], "");
    // "Meeting Time End" is absent from the table
    assert_eq!(rows[0][1], "");
    assert_eq!(rows[0][3], "EH");
}

#[test]
fn projection_can_hide_predictions() {
    let ds = table();
    let proj = Projection::display(&ds, false);
    assert!(!proj.headers().iter().any(|c| c.ends_with("Prediction")));
    assert!(proj.headers().iter().any(|c| c == "Campus"));
}

#[test]
fn table_view_borrows_rows_by_index() {
    let ds = table();
    let tv = TableView::new(&ds, vec![5, 0]);
    assert_eq!(tv.len(), 2);
    assert_eq!(tv.row(0).map(|r| r[0].as_str()), Some("HIST"));
    assert_eq!(tv.row(2), None);
    assert_eq!(tv.row(1).map(|r| r[0].as_str()), Some("MATH"));
    assert!(std::ptr::eq(tv.dataset(), &ds));
    assert!(TableView::new(&ds, Vec::new()).is_empty());
}

#[test]
fn title_and_download_name_follow_pickers() {
    let mut opts = FilterOptions::default();
    assert_eq!(view::title(&opts), "Schedule for Monday");
    assert_eq!(view::download_stem(&opts), "Monday_ALL_ALL_schedule");

    opts.day = Day::Wednesday;
    opts.campus = Choice::Only("Ann Arbor".into());
    opts.building = Choice::Only("EH".into());
    opts.subject = Choice::Only("MATH".into());
    assert_eq!(view::title(&opts), "Schedule for Wednesday - Ann Arbor - EH - MATH");
    assert_eq!(view::download_stem(&opts), "Wednesday_Ann_Arbor_EH_schedule");
}

#[test]
fn download_name_drops_path_characters() {
    let opts = FilterOptions {
        building: Choice::Only("A/B: C".into()),
        ..Default::default()
    };
    assert_eq!(view::download_stem(&opts), "Monday_ALL_AB_C_schedule");
}
