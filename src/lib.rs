mod error;
mod model;
pub mod units;
mod xlsx;

pub use error::{Error, PhotoError};
pub use model::{Career, Education, PersonInfo, PhotoStatus, Resume};
pub use xlsx::{SHEET_RESUME, SHEET_SELF_INTRO};

use std::path::Path;
use std::time::Instant;

/// Fixed output file name, written to the current working directory and
/// overwritten unconditionally.
pub const OUTPUT_FILE: &str = "이력서.xlsx";

pub fn write_resume(resume: &Resume, output: &Path) -> Result<PhotoStatus, Error> {
    let t0 = Instant::now();

    let (bytes, photo) = xlsx::render(resume)?;
    let t_render = t0.elapsed();

    std::fs::write(output, &bytes).map_err(Error::Io)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_render.as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(photo)
}

/// In-memory variant: the finished workbook bytes plus the photo outcome.
pub fn render_resume(resume: &Resume) -> Result<(Vec<u8>, PhotoStatus), Error> {
    xlsx::render(resume)
}
