#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use resume_xlsx::{Career, Education, PersonInfo, PhotoStatus, Resume};

pub fn sample_person(photo: &Path) -> PersonInfo {
    PersonInfo {
        photo: photo.to_path_buf(),
        name: "Kim".to_string(),
        email: "k@x.com".to_string(),
        address: "Seoul".to_string(),
        phone_number: "010-1111-2222".to_string(),
        birth_date: "1990-01-01".to_string(),
    }
}

pub fn sample_resume(photo: &Path) -> Resume {
    Resume {
        person: sample_person(photo),
        educations: Vec::new(),
        careers: Vec::new(),
        self_introduction: String::new(),
    }
}

pub fn education(year: &str, school: &str, major: &str, status: &str) -> Education {
    Education {
        graduation_year: year.to_string(),
        school_name: school.to_string(),
        major: major.to_string(),
        graduation_status: status.to_string(),
    }
}

pub fn career(period: &str, company: &str, title: &str, years: &str) -> Career {
    Career {
        work_period: period.to_string(),
        company_name: company.to_string(),
        job_title: title.to_string(),
        employment_years: years.to_string(),
    }
}

/// Fabricate a decodable photo fixture under tests/output/.
pub fn write_test_photo(name: &str) -> PathBuf {
    std::fs::create_dir_all("tests/output").expect("cannot create tests/output");
    let path = PathBuf::from("tests/output").join(name);
    image::RgbImage::from_pixel(60, 80, image::Rgb([120, 90, 60]))
        .save(&path)
        .expect("cannot write photo fixture");
    path
}

/// A path that is guaranteed not to exist.
pub fn missing_photo() -> PathBuf {
    PathBuf::from("tests/output/no-such-photo.png")
}

pub fn render(resume: &Resume) -> (Vec<u8>, PhotoStatus) {
    resume_xlsx::render_resume(resume).expect("rendering failed")
}

pub fn zip_names(bytes: &[u8]) -> Vec<String> {
    let archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).expect("not a ZIP archive");
    let mut names: Vec<String> = archive.file_names().map(|n| n.to_string()).collect();
    names.sort();
    names
}

pub fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive =
        zip::ZipArchive::new(std::io::Cursor::new(bytes)).expect("not a ZIP archive");
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing part {name}"))
        .read_to_string(&mut content)
        .expect("part is not UTF-8");
    content
}

pub fn read_binary_part(bytes: &[u8], name: &str) -> Vec<u8> {
    let mut archive =
        zip::ZipArchive::new(std::io::Cursor::new(bytes)).expect("not a ZIP archive");
    let mut content = Vec::new();
    archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing part {name}"))
        .read_to_end(&mut content)
        .expect("cannot read part");
    content
}

/// "B2" → (1, 1): 0-based (row, col).
pub fn parse_cell_ref(cell_ref: &str) -> (u32, u16) {
    let split = cell_ref
        .find(|c: char| c.is_ascii_digit())
        .expect("no row number in cell ref");
    let (letters, digits) = cell_ref.split_at(split);
    let col = letters
        .bytes()
        .fold(0u32, |acc, b| acc * 26 + (b - b'A' + 1) as u32)
        - 1;
    let row: u32 = digits.parse().expect("bad row number");
    (row - 1, col as u16)
}

/// All inline-string cells of a worksheet part: 0-based (row, col) → text.
pub fn sheet_cells(sheet_xml: &str) -> HashMap<(u32, u16), String> {
    let doc = roxmltree::Document::parse(sheet_xml).expect("invalid sheet XML");
    let mut cells = HashMap::new();
    for cell in doc.descendants().filter(|n| n.tag_name().name() == "c") {
        let Some(r) = cell.attribute("r") else {
            continue;
        };
        let text = cell
            .descendants()
            .find(|n| n.tag_name().name() == "t")
            .and_then(|t| t.text())
            .unwrap_or("")
            .to_string();
        cells.insert(parse_cell_ref(r), text);
    }
    cells
}

/// Style index attribute of one cell, if any.
pub fn cell_style(sheet_xml: &str, wanted: &str) -> Option<String> {
    let doc = roxmltree::Document::parse(sheet_xml).expect("invalid sheet XML");
    doc.descendants()
        .find(|n| n.tag_name().name() == "c" && n.attribute("r") == Some(wanted))
        .and_then(|c| c.attribute("s").map(|s| s.to_string()))
}

/// Custom width of the first declared column range, if any.
pub fn first_col_width(sheet_xml: &str) -> Option<f32> {
    let doc = roxmltree::Document::parse(sheet_xml).expect("invalid sheet XML");
    doc.descendants()
        .find(|n| n.tag_name().name() == "col")
        .and_then(|c| c.attribute("width"))
        .and_then(|w| w.parse().ok())
}

/// Custom height of a 0-based row, if any.
pub fn row_height(sheet_xml: &str, row: u32) -> Option<f32> {
    let wanted = (row + 1).to_string();
    let doc = roxmltree::Document::parse(sheet_xml).expect("invalid sheet XML");
    doc.descendants()
        .find(|n| n.tag_name().name() == "row" && n.attribute("r") == Some(wanted.as_str()))
        .and_then(|r| r.attribute("ht"))
        .and_then(|h| h.parse().ok())
}

/// Row indices (0-based) present in a worksheet part, ascending.
pub fn row_indices(sheet_xml: &str) -> Vec<u32> {
    let doc = roxmltree::Document::parse(sheet_xml).expect("invalid sheet XML");
    let mut rows: Vec<u32> = doc
        .descendants()
        .filter(|n| n.tag_name().name() == "row")
        .filter_map(|r| r.attribute("r"))
        .filter_map(|r| r.parse::<u32>().ok())
        .map(|r| r - 1)
        .collect();
    rows.sort();
    rows
}
