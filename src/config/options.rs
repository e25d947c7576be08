// src/config/options.rs
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub sources: SourceOptions,
    pub matching: MatchOptions,
    pub merge: MergeOptions,
    pub filter: FilterOptions,
    pub export: ExportOptions,
}

/* ---------------- Sources ---------------- */

/// Where a table comes from. Anything starting with `http://` or `https://`
/// is fetched; everything else is read from disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    Path(PathBuf),
}

impl Source {
    pub fn parse(text: &str) -> Self {
        let t = text.trim();
        let lc = t.to_ascii_lowercase();
        if lc.starts_with("http://") || lc.starts_with("https://") {
            Source::Url(s!(t))
        } else {
            Source::Path(PathBuf::from(t))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(u) => write!(f, "{u}"),
            Source::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub buildings: Source,
    pub monthly: Source,
    /// (campus label, schedule table)
    pub schedules: Vec<(String, Source)>,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            buildings: Source::Url(s!(BUILDINGS_URL)),
            monthly: Source::Url(s!(MONTHLY_URL)),
            schedules: DEFAULT_SCHEDULES
                .iter()
                .map(|(campus, path)| (s!(*campus), Source::Path(PathBuf::from(path))))
                .collect(),
        }
    }
}

/* ---------------- Matching ---------------- */

/// Which output slot receives the raw facility text when no building key matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FallbackSlot {
    /// `(facility, "", "")`
    #[default]
    Room,
    /// `("", facility, "")`
    Building,
}

/// How equal-length candidate keys are ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// First key in directory (source document) order.
    #[default]
    DirectoryOrder,
    /// Smallest key by byte order; independent of source ordering.
    Lexical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MatchOptions {
    pub fallback: FallbackSlot,
    pub tie_break: TieBreak,
}

/* ---------------- Payroll merge ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum JoinKind {
    /// Keep schedule rows without a payroll match (payroll fields empty).
    #[default]
    Left,
    /// Drop unmatched schedule rows and the `Class Instr ID` column.
    Inner,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MergeOptions {
    pub join: JoinKind,
}

/* ---------------- Filtering ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Day {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday, Day::Tuesday, Day::Wednesday, Day::Thursday,
        Day::Friday, Day::Saturday, Day::Sunday,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Day::Monday    => "Monday",
            Day::Tuesday   => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday  => "Thursday",
            Day::Friday    => "Friday",
            Day::Saturday  => "Saturday",
            Day::Sunday    => "Sunday",
        }
    }

    /// Indicator column in the schedule tables.
    pub fn column(self) -> &'static str {
        match self {
            Day::Monday    => "Mon",
            Day::Tuesday   => "Tues",
            Day::Wednesday => "Wed",
            Day::Thursday  => "Thurs",
            Day::Friday    => "Fri",
            Day::Saturday  => "Sat",
            Day::Sunday    => "Sun",
        }
    }

    /// One-letter meeting-pattern code some campuses use instead of `Y`.
    pub fn code(self) -> char {
        match self {
            Day::Monday    => 'M',
            Day::Tuesday   => 'T',
            Day::Wednesday => 'W',
            Day::Thursday  => 'R',
            Day::Friday    => 'F',
            Day::Saturday  => 'S',
            Day::Sunday    => 'U',
        }
    }

    /// Accepts the full name or the column name, any case.
    pub fn parse(text: &str) -> Option<Day> {
        let t = text.trim();
        Day::ALL.into_iter().find(|d| {
            d.label().eq_ignore_ascii_case(t) || d.column().eq_ignore_ascii_case(t)
        })
    }

    /// Does an indicator cell mark this day as active?
    pub fn is_active(self, cell: &str) -> bool {
        let c = cell.trim();
        if c.eq_ignore_ascii_case("Y") {
            return true;
        }
        let mut chars = c.chars();
        matches!((chars.next(), chars.next()), (Some(ch), None) if ch == self.code())
    }
}

/// A picker value: everything, or one exact value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    pub fn parse(text: &str) -> Self {
        let t = text.trim();
        if t.is_empty() || t.eq_ignore_ascii_case(ALL) {
            Choice::All
        } else {
            Choice::Only(s!(t))
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }

    pub fn matches(&self, cell: &str) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(v) => v == cell,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Choice::All => ALL,
            Choice::Only(v) => v,
        }
    }
}

/// Column the campus picker reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CampusField {
    /// Campus the schedule file was loaded for.
    #[default]
    Source,
    /// Campus predicted from the building directory.
    Predicted,
}

impl CampusField {
    pub fn column(self) -> &'static str {
        match self {
            CampusField::Source => COL_CAMPUS,
            CampusField::Predicted => COL_CAMPUS_PRED,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub day: Day,
    pub campus_field: CampusField,
    pub campus: Choice,
    pub building: Choice,
    pub subject: Choice,
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; a user-typed extension wins over the format's.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = match &self.out_path.custom_ext {
            Some(e) => e.to_string_lossy().into_owned(),
            None => s!(self.format.ext()),
        };
        self.out_path.dir.join(join!(stem, ".", &ext))
    }

    /// Parse GUI/CLI text into dir + stem (+ extension if one was typed).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.custom_ext = p.extension().map(|e| e.to_os_string());
    }

    /// Replace just the file stem, keeping directory and extension policy.
    pub fn set_file_stem(&mut self, stem: &str) {
        self.out_path.file_stem = OsString::from(stem);
    }

    pub fn dir(&self) -> &Path {
        &self.out_path.dir
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,
    custom_ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            custom_ext: None,
        }
    }
}
