use std::collections::BTreeMap;

use crate::model::{Career, Education, PersonInfo};

pub(super) const IDENTITY_HEADER_ROW: u32 = 0;
pub(super) const IDENTITY_DATA_ROW: u32 = 1;
/// Column reserved for the embedded photo on the identity data row.
pub(super) const PHOTO_COL: u16 = 0;
/// First education data row; the education header sits directly above it.
pub(super) const EDUCATION_START_ROW: u32 = 3;

const IDENTITY_HEADERS: [&str; 6] = ["사진", "이름", "이메일", "주소", "전화번호", "생년월일"];
const EDUCATION_HEADERS: [&str; 4] = ["졸업년도", "학교명", "전공", "졸업여부"];
const CAREER_HEADERS: [&str; 4] = ["근무기간", "근무처", "담당업무", "근속연수"];

/// Sparse grid assignment for one sheet: row index → column index → text.
/// Rows iterate in ascending order, cells within a row likewise.
pub(super) struct Grid {
    rows: BTreeMap<u32, BTreeMap<u16, String>>,
}

impl Grid {
    fn new() -> Self {
        Grid {
            rows: BTreeMap::new(),
        }
    }

    fn set(&mut self, row: u32, col: u16, text: &str) {
        self.rows
            .entry(row)
            .or_default()
            .insert(col, text.to_string());
    }

    fn set_headers(&mut self, row: u32, labels: &[&str]) {
        for (col, label) in labels.iter().enumerate() {
            self.set(row, col as u16, label);
        }
    }

    pub(super) fn rows(&self) -> impl Iterator<Item = (u32, &BTreeMap<u16, String>)> {
        self.rows.iter().map(|(row, cells)| (*row, cells))
    }
}

/// Row left deliberately blank between the education and career blocks.
fn separator_row(education_count: usize) -> u32 {
    EDUCATION_START_ROW + education_count as u32
}

pub(super) fn career_header_row(education_count: usize) -> u32 {
    separator_row(education_count) + 1
}

/// First career data row.
pub(super) fn career_start_row(education_count: usize) -> u32 {
    career_header_row(education_count) + 1
}

/// Map the identity, education, and career blocks onto the résumé sheet.
/// Entry lists may be empty; both header pairs are emitted regardless, with
/// the career block offset by however many education rows precede it.
pub(super) fn resume_grid(
    person: &PersonInfo,
    educations: &[Education],
    careers: &[Career],
) -> Grid {
    let mut grid = Grid::new();

    grid.set_headers(IDENTITY_HEADER_ROW, &IDENTITY_HEADERS);
    // PHOTO_COL carries the picture, not text.
    grid.set(IDENTITY_DATA_ROW, 1, &person.name);
    grid.set(IDENTITY_DATA_ROW, 2, &person.email);
    grid.set(IDENTITY_DATA_ROW, 3, &person.address);
    grid.set(IDENTITY_DATA_ROW, 4, &person.phone_number);
    grid.set(IDENTITY_DATA_ROW, 5, &person.birth_date);

    grid.set_headers(EDUCATION_START_ROW - 1, &EDUCATION_HEADERS);
    for (i, education) in educations.iter().enumerate() {
        let row = EDUCATION_START_ROW + i as u32;
        grid.set(row, 0, &education.graduation_year);
        grid.set(row, 1, &education.school_name);
        grid.set(row, 2, &education.major);
        grid.set(row, 3, &education.graduation_status);
    }

    grid.set_headers(career_header_row(educations.len()), &CAREER_HEADERS);
    let career_start = career_start_row(educations.len());
    for (i, career) in careers.iter().enumerate() {
        let row = career_start + i as u32;
        grid.set(row, 0, &career.work_period);
        grid.set(row, 1, &career.company_name);
        grid.set(row, 2, &career.job_title);
        grid.set(row, 3, &career.employment_years);
    }

    grid
}
