//! Read-only export views.
//!
//! Derives table rows, per-teacher workload, and a spreadsheet-shaped
//! workbook from generated combinations. Nothing here mutates the
//! combinations or writes files.
//!
//! # Usage
//!
//! ```
//! use u_timetable::combination::{generate_combinations, TeacherNames};
//! use u_timetable::export::{export_combination, WorkloadSummary};
//!
//! let names = TeacherNames::new("Alice", "Bob", "Cara", "Dee", "Eve");
//! let combos = generate_combinations("Green High", "Blue Valley", &names).unwrap();
//!
//! let workload = WorkloadSummary::for_combination(&combos[0]);
//! assert_eq!(workload.total_periods(), 36);
//!
//! let book = export_combination(&combos, 1).unwrap();
//! assert_eq!(book.file_name, "Timetable_Combination_1.xlsx");
//! ```

mod sheet;
mod workload;

pub use sheet::{
    combination_workbook, export_combination, export_file_name, format_cell, sheet_name,
    timetable_rows, SheetExport, TimetableRow, WorkbookExport, MAX_SHEET_NAME_LEN,
    SUMMARY_SHEET_NAME,
};
pub use workload::{CombinationWorkload, TeacherWorkload, WorkloadSummary, CLASS_DURATION_MINUTES};
