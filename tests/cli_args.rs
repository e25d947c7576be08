// tests/cli_args.rs
use leo_sched::cli::{parse_args, write_option_list, CliParams, Command, ListKind};
use leo_sched::config::options::{
    CampusField, Choice, Day, ExportFormat, FallbackSlot, JoinKind, Source, TieBreak,
};
use leo_sched::filter::OptionCount;

fn parse(args: &[&str]) -> CliParams {
    match parse_args(args.iter().map(|s| s.to_string())).unwrap() {
        Command::Run(p) => p,
        Command::Help => panic!("unexpected help"),
    }
}

#[test]
fn no_args_is_defaults() {
    assert_eq!(parse(&[]), CliParams::default());
}

#[test]
fn filters_and_output_flags() {
    let p = parse(&[
        "-d", "wed", "-c", "Ann Arbor", "-b", "EH", "-s", "ALL",
        "--campus-field", "predicted", "--format", "tsv", "--no-headers",
        "--no-predictions", "-o", "out/mine.tsv",
    ]);
    let f = &p.options.filter;
    assert_eq!(f.day, Day::Wednesday);
    assert_eq!(f.campus, Choice::Only("Ann Arbor".into()));
    assert_eq!(f.building, Choice::Only("EH".into()));
    assert_eq!(f.subject, Choice::All);
    assert_eq!(f.campus_field, CampusField::Predicted);
    assert_eq!(p.options.export.format, ExportFormat::Tsv);
    assert!(!p.options.export.include_headers);
    assert!(!p.show_predictions);
    assert_eq!(p.out.as_deref(), Some("out/mine.tsv"));
}

#[test]
fn matching_and_join_flags() {
    let p = parse(&["--fallback", "building", "--tie-break", "lexical", "--join", "inner"]);
    assert_eq!(p.options.matching.fallback, FallbackSlot::Building);
    assert_eq!(p.options.matching.tie_break, TieBreak::Lexical);
    assert_eq!(p.options.merge.join, JoinKind::Inner);
}

#[test]
fn first_schedule_flag_replaces_defaults() {
    let p = parse(&[
        "--schedule", "Flint=data/flint.csv",
        "--schedule", "Dearborn=https://example.org/d.csv",
        "--buildings", "b.json",
    ]);
    let s = &p.options.sources;
    assert_eq!(s.schedules.len(), 2);
    assert_eq!(s.schedules[0].0, "Flint");
    assert!(matches!(s.schedules[1].1, Source::Url(_)));
    assert!(matches!(s.buildings, Source::Path(_)));
}

#[test]
fn list_and_stdout() {
    let p = parse(&["--list", "buildings", "--stdout"]);
    assert_eq!(p.list, Some(ListKind::Buildings));
    assert!(p.to_stdout);
}

#[test]
fn help_wins() {
    let cmd = parse_args(["-d", "Mon", "--help"].map(String::from)).unwrap();
    assert_eq!(cmd, Command::Help);
}

#[test]
fn bad_input_is_reported() {
    for bad in [
        vec!["--bogus"],
        vec!["-d"],
        vec!["-d", "Someday"],
        vec!["--schedule", "no-equals"],
        vec!["--schedule", "=x.csv"],
        vec!["--format", "xlsx"],
        vec!["--join", "outer"],
    ] {
        let res = parse_args(bad.iter().map(|s| s.to_string()));
        assert!(res.is_err(), "{bad:?} should fail");
    }
}

#[test]
fn list_output_quotes_values_with_commas() {
    let list = vec![
        OptionCount { value: "Hall, East".into(), count: 3 },
        OptionCount { value: "EH".into(), count: 12 },
    ];
    let mut buf = Vec::new();
    write_option_list(&mut buf, &list).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "\"Hall, East\",3\nEH,12\n");
}

#[test]
fn empty_list_writes_nothing() {
    let mut buf = Vec::new();
    write_option_list(&mut buf, &[]).unwrap();
    assert!(buf.is_empty());
}
