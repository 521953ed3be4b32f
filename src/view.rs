//! Console data collection. Prompts mirror the sheet labels; no field
//! format validation is performed — the renderer trusts its input.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use resume_xlsx::{Career, Education, PersonInfo, Resume};

fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn input_person_info(input: &mut impl BufRead) -> io::Result<PersonInfo> {
    println!("[인적사항]");
    Ok(PersonInfo {
        photo: PathBuf::from(prompt(input, "사진 파일 경로")?),
        name: prompt(input, "이름")?,
        email: prompt(input, "이메일")?,
        address: prompt(input, "주소")?,
        phone_number: prompt(input, "전화번호")?,
        birth_date: prompt(input, "생년월일")?,
    })
}

fn input_education_list(input: &mut impl BufRead) -> io::Result<Vec<Education>> {
    println!("[학력사항] 졸업년도를 비워두면 입력을 마칩니다.");
    let mut educations = Vec::new();
    loop {
        let graduation_year = prompt(input, "졸업년도")?;
        if graduation_year.is_empty() {
            break;
        }
        educations.push(Education {
            graduation_year,
            school_name: prompt(input, "학교명")?,
            major: prompt(input, "전공")?,
            graduation_status: prompt(input, "졸업여부")?,
        });
    }
    Ok(educations)
}

fn input_career_list(input: &mut impl BufRead) -> io::Result<Vec<Career>> {
    println!("[경력사항] 근무기간을 비워두면 입력을 마칩니다.");
    let mut careers = Vec::new();
    loop {
        let work_period = prompt(input, "근무기간")?;
        if work_period.is_empty() {
            break;
        }
        careers.push(Career {
            work_period,
            company_name: prompt(input, "근무처")?,
            job_title: prompt(input, "담당업무")?,
            employment_years: prompt(input, "근속연수")?,
        });
    }
    Ok(careers)
}

fn input_self_introduction(input: &mut impl BufRead) -> io::Result<String> {
    println!("[자기소개서] 빈 줄을 입력하면 입력을 마칩니다.");
    let mut lines: Vec<String> = Vec::new();
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            break;
        }
        lines.push(line.to_string());
    }
    Ok(lines.join("\n"))
}

pub fn collect_resume() -> io::Result<Resume> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let person = input_person_info(&mut input)?;
    let educations = input_education_list(&mut input)?;
    let careers = input_career_list(&mut input)?;
    let self_introduction = input_self_introduction(&mut input)?;

    Ok(Resume {
        person,
        educations,
        careers,
        self_introduction,
    })
}
