use std::io::Cursor;
use std::path::Path;

use image::imageops::FilterType;

use crate::error::PhotoError;
use crate::units::{mm_to_px, px_to_emu};

/// Physical size of the photo slot on the sheet.
pub(super) const PHOTO_WIDTH_MM: f32 = 35.0;
pub(super) const PHOTO_HEIGHT_MM: f32 = 45.0;

// Anchor cell span: the picture covers the header + data rows of the photo
// column, (col 0, row 0) through (col 1, row 2) exclusive.
const ANCHOR_FROM_COL: u32 = 0;
const ANCHOR_FROM_ROW: u32 = 0;
const ANCHOR_TO_COL: u32 = 1;
const ANCHOR_TO_ROW: u32 = 2;

pub(super) fn target_width_px() -> u32 {
    mm_to_px(PHOTO_WIDTH_MM)
}

pub(super) fn target_height_px() -> u32 {
    mm_to_px(PHOTO_HEIGHT_MM)
}

/// A photo resized to the fixed slot dimensions and re-encoded as PNG,
/// ready for the workbook's media store.
pub(super) struct Photo {
    pub(super) png: Vec<u8>,
    pub(super) width_px: u32,
    pub(super) height_px: u32,
}

pub(super) fn load(path: &Path) -> Result<Photo, PhotoError> {
    let bytes = std::fs::read(path).map_err(|e| PhotoError::Read(path.to_path_buf(), e))?;
    let original =
        image::load_from_memory(&bytes).map_err(|e| PhotoError::Decode(path.to_path_buf(), e))?;

    // Independent scale factors per axis: the slot is exactly 35mm × 45mm,
    // aspect ratio is not preserved.
    let width_px = target_width_px();
    let height_px = target_height_px();
    let resized = original.resize_exact(width_px, height_px, FilterType::Lanczos3);

    let mut png = Vec::new();
    resized
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| PhotoError::Encode(path.to_path_buf(), e))?;

    Ok(Photo {
        png,
        width_px,
        height_px,
    })
}

/// Drawing part anchoring the photo over the identity block's photo column.
pub(super) fn drawing_xml(photo: &Photo) -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>");
    xml.push_str(
        "<xdr:wsDr xmlns:xdr=\"http://schemas.openxmlformats.org/drawingml/2006/spreadsheetDrawing\" \
         xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" \
         xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\">",
    );
    xml.push_str("<xdr:twoCellAnchor editAs=\"oneCell\">");
    xml.push_str(&format!(
        "<xdr:from><xdr:col>{ANCHOR_FROM_COL}</xdr:col><xdr:colOff>0</xdr:colOff>\
         <xdr:row>{ANCHOR_FROM_ROW}</xdr:row><xdr:rowOff>0</xdr:rowOff></xdr:from>"
    ));
    xml.push_str(&format!(
        "<xdr:to><xdr:col>{ANCHOR_TO_COL}</xdr:col><xdr:colOff>0</xdr:colOff>\
         <xdr:row>{ANCHOR_TO_ROW}</xdr:row><xdr:rowOff>0</xdr:rowOff></xdr:to>"
    ));
    xml.push_str("<xdr:pic>");
    xml.push_str("<xdr:nvPicPr><xdr:cNvPr id=\"1\" name=\"Photo 1\"/><xdr:cNvPicPr/></xdr:nvPicPr>");
    xml.push_str(
        "<xdr:blipFill><a:blip r:embed=\"rId1\"/><a:stretch><a:fillRect/></a:stretch></xdr:blipFill>",
    );
    xml.push_str(&format!(
        "<xdr:spPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"{}\" cy=\"{}\"/></a:xfrm>\
         <a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom></xdr:spPr>",
        px_to_emu(photo.width_px),
        px_to_emu(photo.height_px),
    ));
    xml.push_str("</xdr:pic>");
    xml.push_str("<xdr:clientData/>");
    xml.push_str("</xdr:twoCellAnchor>");
    xml.push_str("</xdr:wsDr>");
    xml
}
