// src/config/consts.rs

// Remote sources
pub const BUILDINGS_URL: &str =
    "https://raw.githubusercontent.com/umsi-amadaman/LEOcourseschedules/main/UMICHbuildings_dict.json";
pub const MONTHLY_URL: &str =
    "https://github.com/umsi-amadaman/LEOcourseschedules/raw/main/W25/LEOmonthly_Jan25.csv";

// Local schedule files, one per campus: (campus label, path)
pub const DEFAULT_SCHEDULES: &[(&str, &str)] = &[
    ("Ann Arbor", "A2_S25.csv"),
    ("Dearborn",  "Dearborn_S25.csv"),
    ("Flint",     "Flint_S25.csv"),
];

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = "leo_sched/0.4";

// Schedule columns
pub const COL_FACILITY: &str = "Facility ID";
pub const COL_CAMPUS: &str = "Campus";
pub const COL_SUBJECT: &str = "Subject";
pub const COL_INSTR_ID: &str = "Class Instr ID";
pub const COL_TIME_START: &str = "Meeting Time Start";
pub const COL_TIME_END: &str = "Meeting Time End";

// Derived by the enricher
pub const COL_ROOM_PRED: &str = "RoomPrediction";
pub const COL_BLDG_PRED: &str = "BldgPrediction";
pub const COL_CAMPUS_PRED: &str = "CampusPrediction";

// Payroll table
pub const COL_UM_ID: &str = "UM ID";
pub const MONTHLY_COLS: &[&str] = &[
    "UM ID", "Job Title", "Appointment Start Date", "FTE", "Department Name", "Deduction",
];

// On-screen / download column order
pub const DISPLAY_COLS: &[&str] = &[
    "Meeting Time Start", "Meeting Time End", "RoomPrediction", "BldgPrediction",
    "CampusPrediction", "Campus", "Crse Descr", "Subject", "Catalog Nbr", "Class Section",
    "Class Instr Name", "UM ID", "Job Title", "Appointment Start Date", "FTE",
    "Department Name", "Deduction", "Class Mtg Nbr", "Facility ID", "Facility Descr",
    "Instruction Mode Descrshort", "Meeting Start Dt", "Meeting End Dt",
    "Mon", "Tues", "Wed", "Thurs", "Fri", "Sat", "Sun",
];

// Picker sentinel
pub const ALL: &str = "ALL";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "schedule";

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const LOG_ENV: &str = "LEO_SCHED_LOG";
