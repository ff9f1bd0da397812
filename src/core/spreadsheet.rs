use std::path::Path;

use log::info;
use rust_xlsxwriter::{Format, FormatAlign, Workbook};

use crate::config::DEFAULT_COLUMN_WIDTH;
use crate::error::scrape::ScrapeError;
use crate::model::course::{CourseInfo, PLACEHOLDER};

pub const HEADER: [&str; 5] = [
    "Name of course",
    "Language",
    "Date of start",
    "Duration",
    "Average score",
];

const DATE_WIDTH: u16 = 16;
const DURATION_WIDTH: u16 = 9;
const AVERAGE_SCORE_WIDTH: u16 = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    pub name_width: u16,
    pub language_width: u16,
}

impl Default for SheetLayout {
    fn default() -> Self {
        SheetLayout {
            name_width: DEFAULT_COLUMN_WIDTH,
            language_width: DEFAULT_COLUMN_WIDTH,
        }
    }
}

impl SheetLayout {
    fn column_widths(&self) -> [u16; 5] {
        [
            self.name_width,
            self.language_width,
            DATE_WIDTH,
            DURATION_WIDTH,
            AVERAGE_SCORE_WIDTH,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    /// Text that keeps its line breaks inside the cell.
    Wrapped(String),
    Number(f64),
}

fn wrap(text: &str, width: u16) -> String {
    textwrap::fill(text, usize::from(width.max(1)))
}

fn number_or_placeholder(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::Number(value),
        None => Cell::Text(PLACEHOLDER.to_string()),
    }
}

pub fn course_row(course: &CourseInfo, layout: &SheetLayout) -> [Cell; 5] {
    [
        Cell::Wrapped(wrap(course.name_or_placeholder(), layout.name_width)),
        Cell::Wrapped(wrap(course.language_or_placeholder(), layout.language_width)),
        Cell::Text(course.start_date_or_placeholder().to_string()),
        number_or_placeholder(course.weeks.map(|weeks| weeks as f64)),
        number_or_placeholder(course.average_score),
    ]
}

/// One row per course, in input order.
pub fn course_rows(courses: &[CourseInfo], layout: &SheetLayout) -> Vec<[Cell; 5]> {
    courses
        .iter()
        .map(|course| course_row(course, layout))
        .collect()
}

pub fn write_courses(
    path: &Path,
    courses: &[CourseInfo],
    layout: &SheetLayout,
) -> Result<usize, ScrapeError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let wrap_format = Format::new().set_text_wrap().set_align(FormatAlign::Top);
    let cell_format = Format::new().set_align(FormatAlign::Top);

    let worksheet = workbook.add_worksheet();
    for (col, width) in layout.column_widths().into_iter().enumerate() {
        worksheet.set_column_width(col as u16, width)?;
    }
    for (col, title) in HEADER.into_iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, title, &header_format)?;
    }

    let rows = course_rows(courses, layout);
    for (index, row) in rows.iter().enumerate() {
        let row_num = index as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string_with_format(row_num, col, text, &cell_format)?;
                }
                Cell::Wrapped(text) => {
                    worksheet.write_string_with_format(row_num, col, text, &wrap_format)?;
                }
                Cell::Number(value) => {
                    worksheet.write_number_with_format(row_num, col, *value, &cell_format)?;
                }
            }
        }
    }

    workbook.save(path)?;
    info!("wrote {} course rows to {}", rows.len(), path.display());
    Ok(rows.len())
}
