mod view;

use std::path::Path;
use std::process::ExitCode;

use resume_xlsx::{OUTPUT_FILE, PhotoStatus};

fn main() -> ExitCode {
    env_logger::init();

    let resume = match view::collect_resume() {
        Ok(resume) => resume,
        Err(e) => {
            log::error!("입력을 읽지 못했습니다: {e}");
            return ExitCode::FAILURE;
        }
    };

    match resume_xlsx::write_resume(&resume, Path::new(OUTPUT_FILE)) {
        Ok(PhotoStatus::Embedded) => println!("이력서 생성이 완료되었습니다."),
        Ok(PhotoStatus::Skipped) => println!("이력서 생성이 완료되었습니다. (사진 제외)"),
        Err(e) => {
            log::error!("이력서 저장에 실패했습니다: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
