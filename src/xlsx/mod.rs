mod layout;
mod photo;
mod worksheet;

use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::FileOptions;

use crate::error::Error;
use crate::model::{PhotoStatus, Resume};

pub const SHEET_RESUME: &str = "이력서";
pub const SHEET_SELF_INTRO: &str = "자기소개서";

/// Render a résumé into a complete XLSX package. Photo failures are the one
/// recoverable case: logged, and the workbook is produced without the
/// picture or its sizing.
pub(crate) fn render(resume: &Resume) -> Result<(Vec<u8>, PhotoStatus), Error> {
    let photo = match photo::load(&resume.person.photo) {
        Ok(photo) => Some(photo),
        Err(e) => {
            log::warn!("{e} — rendering without the photo");
            None
        }
    };
    let status = if photo.is_some() {
        PhotoStatus::Embedded
    } else {
        PhotoStatus::Skipped
    };

    let grid = layout::resume_grid(&resume.person, &resume.educations, &resume.careers);

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        FileOptions::<()>::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(content_types_xml(photo.is_some()).as_bytes())?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(ROOT_RELS_XML.as_bytes())?;

    zip.start_file("xl/workbook.xml", options)?;
    zip.write_all(workbook_xml().as_bytes())?;

    zip.start_file("xl/_rels/workbook.xml.rels", options)?;
    zip.write_all(WORKBOOK_RELS_XML.as_bytes())?;

    zip.start_file("xl/styles.xml", options)?;
    zip.write_all(STYLES_XML.as_bytes())?;

    zip.start_file("xl/worksheets/sheet1.xml", options)?;
    zip.write_all(worksheet::resume_sheet_xml(&grid, photo.is_some()).as_bytes())?;

    zip.start_file("xl/worksheets/sheet2.xml", options)?;
    zip.write_all(worksheet::self_introduction_xml(&resume.self_introduction).as_bytes())?;

    if let Some(photo) = &photo {
        zip.start_file("xl/worksheets/_rels/sheet1.xml.rels", options)?;
        zip.write_all(SHEET1_RELS_XML.as_bytes())?;

        zip.start_file("xl/drawings/drawing1.xml", options)?;
        zip.write_all(photo::drawing_xml(photo).as_bytes())?;

        zip.start_file("xl/drawings/_rels/drawing1.xml.rels", options)?;
        zip.write_all(DRAWING_RELS_XML.as_bytes())?;

        zip.start_file("xl/media/image1.png", options)?;
        zip.write_all(&photo.png)?;
    }

    let bytes = zip.finish()?.into_inner();
    Ok((bytes, status))
}

fn content_types_xml(with_photo: bool) -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>");
    xml.push_str(
        "<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">",
    );
    xml.push_str(
        "<Default Extension=\"rels\" \
         ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>",
    );
    xml.push_str("<Default Extension=\"xml\" ContentType=\"application/xml\"/>");
    if with_photo {
        xml.push_str("<Default Extension=\"png\" ContentType=\"image/png\"/>");
    }
    xml.push_str(
        "<Override PartName=\"/xl/workbook.xml\" \
         ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml\"/>",
    );
    xml.push_str(
        "<Override PartName=\"/xl/worksheets/sheet1.xml\" \
         ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>",
    );
    xml.push_str(
        "<Override PartName=\"/xl/worksheets/sheet2.xml\" \
         ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>",
    );
    xml.push_str(
        "<Override PartName=\"/xl/styles.xml\" \
         ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml\"/>",
    );
    if with_photo {
        xml.push_str(
            "<Override PartName=\"/xl/drawings/drawing1.xml\" \
             ContentType=\"application/vnd.openxmlformats-officedocument.drawing+xml\"/>",
        );
    }
    xml.push_str("</Types>");
    xml
}

const ROOT_RELS_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
    <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
    <Relationship Id=\"rId1\" \
    Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" \
    Target=\"xl/workbook.xml\"/>\
    </Relationships>";

fn workbook_xml() -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <workbook xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" \
         xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\">\
         <sheets>\
         <sheet name=\"{SHEET_RESUME}\" sheetId=\"1\" r:id=\"rId1\"/>\
         <sheet name=\"{SHEET_SELF_INTRO}\" sheetId=\"2\" r:id=\"rId2\"/>\
         </sheets>\
         </workbook>"
    )
}

const WORKBOOK_RELS_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
    <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
    <Relationship Id=\"rId1\" \
    Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet\" \
    Target=\"worksheets/sheet1.xml\"/>\
    <Relationship Id=\"rId2\" \
    Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet\" \
    Target=\"worksheets/sheet2.xml\"/>\
    <Relationship Id=\"rId3\" \
    Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles\" \
    Target=\"styles.xml\"/>\
    </Relationships>";

// Two cell formats: index 0 the default, index 1 wrap-text (used by the
// self-introduction cell). Built fresh per workbook — no shared style state.
const STYLES_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
    <styleSheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\">\
    <fonts count=\"1\"><font><sz val=\"11\"/><name val=\"Calibri\"/></font></fonts>\
    <fills count=\"2\">\
    <fill><patternFill patternType=\"none\"/></fill>\
    <fill><patternFill patternType=\"gray125\"/></fill>\
    </fills>\
    <borders count=\"1\"><border><left/><right/><top/><bottom/><diagonal/></border></borders>\
    <cellStyleXfs count=\"1\"><xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\"/></cellStyleXfs>\
    <cellXfs count=\"2\">\
    <xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\" xfId=\"0\"/>\
    <xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\" xfId=\"0\" applyAlignment=\"1\">\
    <alignment wrapText=\"1\"/>\
    </xf>\
    </cellXfs>\
    <cellStyles count=\"1\"><cellStyle name=\"Normal\" xfId=\"0\" builtinId=\"0\"/></cellStyles>\
    </styleSheet>";

const SHEET1_RELS_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
    <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
    <Relationship Id=\"rId1\" \
    Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/drawing\" \
    Target=\"../drawings/drawing1.xml\"/>\
    </Relationships>";

const DRAWING_RELS_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
    <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
    <Relationship Id=\"rId1\" \
    Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/image\" \
    Target=\"../media/image1.png\"/>\
    </Relationships>";
