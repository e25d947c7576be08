// src/cli.rs
use std::{env, error::Error, io::{self, Write}};

use crate::config::options::{
    AppOptions, CampusField, Choice, Day, ExportFormat, FallbackSlot, JoinKind, Source, TieBreak,
};
use crate::{file, filter::{self, OptionCount}, pipeline, progress::StderrProgress, view};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Campuses,
    Buildings,
    Subjects,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliParams {
    pub options: AppOptions,
    pub list: Option<ListKind>,
    /// `-o` text as typed; `None` means "derive from the filters"
    pub out: Option<String>,
    pub to_stdout: bool,
    pub show_predictions: bool,
}

impl Default for CliParams {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            list: None,
            out: None,
            to_stdout: false,
            show_predictions: true,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(CliParams),
}

pub fn run() -> Result<(), Box<dyn Error>> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", include_str!("cli_help.txt"));
            Ok(())
        }
        Command::Run(params) => execute(&params),
    }
}

/// `--list` output: one `value,count` CSV record per option, no header.
pub fn write_option_list<W: Write>(w: W, list: &[OptionCount]) -> Result<(), csv::Error> {
    let rows: Vec<Vec<String>> = list.iter().map(|o| vec![o.value.clone(), o.count.to_string()]).collect();
    file::write_table(w, &[], &rows, false, b',')
}

pub fn execute(params: &CliParams) -> Result<(), Box<dyn Error>> {
    let opts = &params.options;
    logf!("CLI: run filter={:?}", opts.filter);

    let mut prog = StderrProgress::default();
    let session = pipeline::load_session(opts, Some(&mut prog))?;
    for (campus, why) in &session.skipped {
        eprintln!("Warning: skipped {campus} schedule: {why}");
    }
    eprintln!(
        "Predicted buildings for {} of {} rows",
        session.stats.matched, session.stats.rows
    );

    let data = &session.data;
    let out = filter::apply(data, &opts.filter);

    if let Some(kind) = params.list {
        let list = match kind {
            ListKind::Campuses => &out.campuses,
            ListKind::Buildings => &out.buildings,
            ListKind::Subjects => &out.subjects,
        };
        write_option_list(io::stdout().lock(), list)?;
        return Ok(());
    }

    let proj = view::Projection::display(data, params.show_predictions);
    let table = view::TableView::new(data, out.row_ix.clone());
    let (headers, rows) = proj.project(&table);

    if params.to_stdout {
        let stdout = io::stdout();
        file::write_table(
            stdout.lock(),
            &headers,
            &rows,
            opts.export.include_headers,
            opts.export.format.delim(),
        )?;
        eprintln!("{}", view::title(&opts.filter));
        eprintln!("Total classes shown: {}", rows.len());
        return Ok(());
    }

    let mut export = opts.export.clone();
    match &params.out {
        Some(text) => export.set_path(text),
        None => export.set_file_stem(&view::download_stem(&opts.filter)),
    }
    let path = file::write_export_single(&export, &headers, &rows)?;

    println!("{}", view::title(&opts.filter));
    println!("Total classes shown: {}", rows.len());
    println!("Wrote {}", path.display());
    Ok(())
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, Box<dyn Error>> {
    args.next().ok_or_else(|| format!("Missing value for {flag}").into())
}

pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = CliParams::default();
    let mut custom_schedules = false;
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        let opts = &mut params.options;
        match a.as_str() {
            "--buildings" => opts.sources.buildings = Source::parse(&value(&mut args, &a)?),
            "--monthly" => opts.sources.monthly = Source::parse(&value(&mut args, &a)?),
            "--schedule" => {
                let v = value(&mut args, &a)?;
                let (campus, src) = v
                    .split_once('=')
                    .ok_or_else(|| format!("Expected <campus>=<src>, got: {v}"))?;
                let campus = campus.trim();
                if campus.is_empty() {
                    return Err(format!("Missing campus in --schedule {v}").into());
                }
                if !custom_schedules {
                    opts.sources.schedules.clear();
                    custom_schedules = true;
                }
                opts.sources.schedules.push((s!(campus), Source::parse(src)));
            }
            "--fallback" => {
                let v = value(&mut args, &a)?;
                opts.matching.fallback = match v.to_ascii_lowercase().as_str() {
                    "room" => FallbackSlot::Room,
                    "building" => FallbackSlot::Building,
                    other => return Err(format!("Unknown fallback: {other}").into()),
                };
            }
            "--tie-break" => {
                let v = value(&mut args, &a)?;
                opts.matching.tie_break = match v.to_ascii_lowercase().as_str() {
                    "order" => TieBreak::DirectoryOrder,
                    "lexical" => TieBreak::Lexical,
                    other => return Err(format!("Unknown tie-break: {other}").into()),
                };
            }
            "--join" => {
                let v = value(&mut args, &a)?;
                opts.merge.join = match v.to_ascii_lowercase().as_str() {
                    "left" => JoinKind::Left,
                    "inner" => JoinKind::Inner,
                    other => return Err(format!("Unknown join: {other}").into()),
                };
            }
            "-d" | "--day" => {
                let v = value(&mut args, &a)?;
                opts.filter.day = Day::parse(&v).ok_or_else(|| format!("Unknown day: {v}"))?;
            }
            "-c" | "--campus" => opts.filter.campus = Choice::parse(&value(&mut args, &a)?),
            "--campus-field" => {
                let v = value(&mut args, &a)?;
                opts.filter.campus_field = match v.to_ascii_lowercase().as_str() {
                    "source" => CampusField::Source,
                    "predicted" => CampusField::Predicted,
                    other => return Err(format!("Unknown campus field: {other}").into()),
                };
            }
            "-b" | "--building" => opts.filter.building = Choice::parse(&value(&mut args, &a)?),
            "-s" | "--subject" => opts.filter.subject = Choice::parse(&value(&mut args, &a)?),
            "--list" => {
                let v = value(&mut args, &a)?;
                params.list = Some(match v.to_ascii_lowercase().as_str() {
                    "campuses" => ListKind::Campuses,
                    "buildings" => ListKind::Buildings,
                    "subjects" => ListKind::Subjects,
                    other => return Err(format!("Unknown list: {other}").into()),
                });
            }
            "-o" | "--out" => params.out = Some(value(&mut args, &a)?),
            "--format" => {
                let v = value(&mut args, &a)?;
                opts.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {other}").into()),
                };
            }
            "--no-headers" => opts.export.include_headers = false,
            "--no-predictions" => params.show_predictions = false,
            "--stdout" => params.to_stdout = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }

    Ok(Command::Run(params))
}
