//! Tabular views of a combination for spreadsheet writers.
//!
//! Builds the rows a writer needs without touching any file format:
//! one sheet per school plus a summary sheet. Afternoon periods are
//! labeled 5-8 here; the underlying timetable keeps 1-4.

use serde::{Deserialize, Serialize};

use super::workload::{CombinationWorkload, WorkloadSummary, CLASS_DURATION_MINUTES};
use crate::models::{SchoolTimetable, TimeSlot, TimetableCombination, PERIODS_PER_SESSION};

/// Maximum sheet name length accepted by spreadsheet applications.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Name of the combined summary sheet.
pub const SUMMARY_SHEET_NAME: &str = "Summary";

/// Renders a slot as `"{subject} ({teacher})"`.
pub fn format_cell(slot: &TimeSlot) -> String {
    format!("{} ({})", slot.subject, slot.teacher.name)
}

/// One day of a school timetable as table cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableRow {
    /// Day name.
    pub day: String,
    /// Cell per period, in period order.
    pub cells: Vec<String>,
}

/// Converts a school timetable into one row per day.
pub fn timetable_rows(timetable: &SchoolTimetable) -> Vec<TimetableRow> {
    timetable
        .schedule
        .iter()
        .map(|day| TimetableRow {
            day: day.day.clone(),
            cells: (1..=PERIODS_PER_SESSION)
                .map(|period| day.slot(period).map(format_cell).unwrap_or_default())
                .collect(),
        })
        .collect()
}

/// A worksheet as a grid of text cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetExport {
    /// Sheet tab name (at most 31 characters).
    pub name: String,
    /// Rows of cells; an empty row is a spacer.
    pub rows: Vec<Vec<String>>,
    /// Suggested column widths in characters.
    pub column_widths: Vec<u16>,
}

/// A full workbook for one combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkbookExport {
    /// Suggested file name.
    pub file_name: String,
    /// Sheets in tab order: School A, School B, Summary.
    pub sheets: Vec<SheetExport>,
}

impl WorkbookExport {
    /// Finds a sheet by tab name.
    pub fn sheet(&self, name: &str) -> Option<&SheetExport> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

/// Truncates a sheet name to the spreadsheet limit (by characters).
pub fn sheet_name(name: &str) -> String {
    name.chars().take(MAX_SHEET_NAME_LEN).collect()
}

/// Suggested file name for an exported combination.
pub fn export_file_name(combination_id: u32) -> String {
    format!("Timetable_Combination_{combination_id}.xlsx")
}

fn duration_line() -> String {
    format!("Class Duration: {CLASS_DURATION_MINUTES} minutes each")
}

fn row<I, S>(cells: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    cells.into_iter().map(Into::into).collect()
}

fn school_sheet(timetable: &SchoolTimetable, workload: &WorkloadSummary) -> SheetExport {
    let school = &timetable.school;
    let session = school.session;

    let mut rows = vec![
        vec![format!(
            "{} - {} Session (Periods {})",
            school.name,
            session.name(),
            session.period_range_label()
        )],
        vec![duration_line()],
        Vec::new(),
    ];

    let mut header = vec!["Day".to_string()];
    header.extend(session.period_labels().map(|p| format!("Period {p}")));
    rows.push(header);

    for day_row in timetable_rows(timetable) {
        let mut cells = vec![day_row.day];
        cells.extend(day_row.cells);
        rows.push(cells);
    }

    rows.push(Vec::new());
    rows.push(row(["Teacher Summary"]));
    for entry in &workload.entries {
        rows.push(vec![
            entry.teacher.clone(),
            format!("{} periods ({} mins)", entry.periods, entry.minutes),
        ]);
    }

    SheetExport {
        name: sheet_name(&school.name),
        rows,
        column_widths: vec![12, 20, 20, 20, 20],
    }
}

fn summary_sheet(combination: &TimetableCombination, overall: &WorkloadSummary) -> SheetExport {
    let mut rows = vec![
        vec![format!("Timetable Summary - Combination {}", combination.id)],
        vec![duration_line()],
        Vec::new(),
        row(["School", "Session", "Days", "Periods"]),
    ];

    for timetable in combination.timetables() {
        let session = timetable.school.session;
        rows.push(vec![
            timetable.school.name.clone(),
            session.name().to_string(),
            session.day_range_label().to_string(),
            session.period_range_label(),
        ]);
    }

    rows.push(Vec::new());
    rows.push(row(["Overall Teacher Workload"]));
    rows.push(row(["Teacher", "Total Periods", "Total Time"]));
    for entry in &overall.entries {
        rows.push(vec![
            entry.teacher.clone(),
            entry.periods.to_string(),
            format!("{} mins", entry.minutes),
        ]);
    }

    SheetExport {
        name: SUMMARY_SHEET_NAME.to_string(),
        rows,
        column_widths: vec![20, 15, 15, 15],
    }
}

/// Builds the workbook for a single combination.
pub fn combination_workbook(combination: &TimetableCombination) -> WorkbookExport {
    let workload = CombinationWorkload::calculate(combination);
    WorkbookExport {
        file_name: export_file_name(combination.id),
        sheets: vec![
            school_sheet(&combination.school_a, &workload.school_a),
            school_sheet(&combination.school_b, &workload.school_b),
            summary_sheet(combination, &workload.overall),
        ],
    }
}

/// Builds the workbook for the combination with `combination_id`.
///
/// Returns `None` if no combination has that id.
pub fn export_combination(
    combinations: &[TimetableCombination],
    combination_id: u32,
) -> Option<WorkbookExport> {
    combinations
        .iter()
        .find(|c| c.id == combination_id)
        .map(combination_workbook)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combination::{generate_combinations_with_rng, TeacherNames};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn combinations(school_a: &str) -> Vec<TimetableCombination> {
        let names = TeacherNames::new("Alice", "Bob", "Cara", "Dee", "Eve");
        let mut rng = SmallRng::seed_from_u64(42);
        generate_combinations_with_rng(school_a, "Blue Valley", &names, &mut rng).unwrap()
    }

    #[test]
    fn test_format_cell() {
        let combos = combinations("Green High");
        let slot = &combos[0].school_a.schedule[0].slots[2];
        assert_eq!(format_cell(slot), "Physics (Cara)");
    }

    #[test]
    fn test_timetable_rows() {
        let combos = combinations("Green High");
        let rows = timetable_rows(&combos[0].school_a);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[1].day, "Tuesday");
        assert_eq!(
            rows[1].cells,
            vec![
                "Physics (Cara)",
                "Chemistry (Dee)",
                "Biology (Eve)",
                "Maths (Alice)"
            ]
        );
    }

    #[test]
    fn test_school_b_sheet_relabels_periods() {
        let combos = combinations("Green High");
        let book = combination_workbook(&combos[0]);
        let sheet = book.sheet("Blue Valley").unwrap();

        assert_eq!(sheet.rows[0], vec!["Blue Valley - Afternoon Session (Periods 5-8)"]);
        assert_eq!(sheet.rows[1], vec!["Class Duration: 40 minutes each"]);
        assert_eq!(sheet.rows[3], vec!["Day", "Period 5", "Period 6", "Period 7", "Period 8"]);
        assert_eq!(sheet.rows[4][0], "Thursday");
        // Underlying data is unchanged
        assert_eq!(combos[0].school_b.schedule[0].slots[0].period, 1);
    }

    #[test]
    fn test_school_a_sheet_summary_rows() {
        let combos = combinations("Green High");
        let book = combination_workbook(&combos[0]);
        let sheet = &book.sheets[0];

        assert_eq!(sheet.rows[0], vec!["Green High - Morning Session (Periods 1-4)"]);
        let summary_at = sheet
            .rows
            .iter()
            .position(|r| r.first().map(String::as_str) == Some("Teacher Summary"))
            .unwrap();
        assert_eq!(sheet.rows[summary_at + 1], vec!["Alice", "5 periods (200 mins)"]);
        assert_eq!(sheet.rows.len(), summary_at + 1 + 5);
    }

    #[test]
    fn test_summary_sheet() {
        let combos = combinations("Green High");
        let book = combination_workbook(&combos[2]);
        assert_eq!(book.file_name, "Timetable_Combination_3.xlsx");

        let sheet = book.sheet(SUMMARY_SHEET_NAME).unwrap();
        assert_eq!(sheet.rows[0], vec!["Timetable Summary - Combination 3"]);
        assert_eq!(sheet.rows[4], vec!["Green High", "Morning", "Mon-Sat", "1-4"]);
        assert_eq!(sheet.rows[5], vec!["Blue Valley", "Afternoon", "Thu-Sat", "5-8"]);

        let total: u32 = sheet.rows[9..]
            .iter()
            .map(|r| r[1].parse::<u32>().unwrap())
            .sum();
        assert_eq!(total, 36);
    }

    #[test]
    fn test_sheet_name_truncated() {
        let long = "The Extremely Long Named Secondary School";
        let combos = combinations(long);
        let book = combination_workbook(&combos[0]);
        assert_eq!(book.sheets[0].name.chars().count(), MAX_SHEET_NAME_LEN);
        assert!(long.starts_with(&book.sheets[0].name));
    }

    #[test]
    fn test_export_unknown_combination() {
        let combos = combinations("Green High");
        assert!(export_combination(&combos, 4).is_none());
        assert_eq!(export_combination(&combos, 2).unwrap().sheets.len(), 3);
    }
}
