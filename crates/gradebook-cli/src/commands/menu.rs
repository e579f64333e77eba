//! The interactive `gradebook menu` loop.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use gradebook_core::{StoreError, StudentStore};

use super::{split_list, StorePaths};

const BANNER: &str = " ------ Welcome to Student Grade Tracker ------
    -- Select the operation:
    1 for add student,
    2 for update scores,
    3 for average scores,
    0 for exit
";

const MENU_PROMPT: &str = "Main Menu - Enter the number of the operation: ";

pub fn execute(paths: &StorePaths) -> Result<()> {
    let mut store = paths.open_store()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut store, stdin.lock(), stdout.lock())
}

/// Drive the menu until `0` is chosen or input runs out.
pub fn run<R: BufRead, W: Write>(
    store: &mut StudentStore,
    mut input: R,
    mut out: W,
) -> Result<()> {
    loop {
        write!(out, "{BANNER}")?;
        let Some(choice) = prompt(&mut input, &mut out, MENU_PROMPT)? else {
            writeln!(out)?;
            return Ok(());
        };

        let keep_going = match choice.trim() {
            "1" => add_student(store, &mut input, &mut out)?,
            "2" => update_scores(store, &mut input, &mut out)?,
            "3" => show_average(store, &mut input, &mut out)?,
            "0" => return Ok(()),
            _ => {
                writeln!(out, "Invalid input, please try again.")?;
                true
            }
        };
        if !keep_going {
            writeln!(out)?;
            return Ok(());
        }
    }
}

/// Print `message` and read one line. `None` means end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn add_student<R: BufRead, W: Write>(
    store: &mut StudentStore,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    let Some(id) = prompt(input, out, "Enter the student ID (blank to generate): ")? else {
        return Ok(false);
    };
    let id = id.trim();
    let id = (!id.is_empty()).then(|| id.to_string());

    if let Some(id) = &id {
        match store.lookup(id) {
            Ok(_) => {
                writeln!(out, "Student ID {id} already exists")?;
                return Ok(true);
            }
            Err(e) if e.is_not_found() => {}
            Err(StoreError::InvalidId { .. }) => {
                writeln!(out, "Invalid student ID {id}")?;
                return Ok(true);
            }
            Err(e) => {
                writeln!(out, "Error reading student file: {e}")?;
                return Ok(true);
            }
        }
    }

    let Some(name) = prompt(input, out, "Enter the student name: ")? else {
        return Ok(false);
    };
    let Some(courses) = prompt(input, out, "Enter the courses (comma-separated): ")? else {
        return Ok(false);
    };

    let record = match store.create(id, name, split_list(&courses)) {
        Ok(record) => record,
        Err(e) => {
            writeln!(out, "Error adding student: {e}")?;
            return Ok(true);
        }
    };

    match store.persist(&record) {
        Ok(location) => writeln!(
            out,
            "Data saved successfully to {} (ID {})",
            location.display(),
            record.id
        )?,
        Err(e) => writeln!(out, "Error saving data: {e}")?,
    }
    Ok(true)
}

fn update_scores<R: BufRead, W: Write>(
    store: &StudentStore,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    let Some(id) = prompt(input, out, "Enter the student ID: ")? else {
        return Ok(false);
    };
    let id = id.trim();

    let mut record = match store.lookup(id) {
        Ok(record) => record,
        Err(e) if e.is_not_found() => {
            writeln!(out, "No student found with ID {id}")?;
            return Ok(true);
        }
        Err(StoreError::InvalidId { .. }) => {
            writeln!(out, "Invalid student ID {id}")?;
            return Ok(true);
        }
        Err(e) => {
            writeln!(out, "Error reading student file: {e}")?;
            return Ok(true);
        }
    };

    let Some(raw) = prompt(input, out, "Enter scores (comma-separated): ")? else {
        return Ok(false);
    };
    let tokens: Vec<&str> = raw.split(',').collect();

    match store.update_scores(&mut record, &tokens) {
        Ok(scores) => writeln!(out, "\nCurrent scores: {scores:?}")?,
        Err(StoreError::InvalidScore { .. }) => writeln!(out, "\nError: Score must be a number")?,
        Err(e) => writeln!(out, "\nError updating scores: {e}")?,
    }
    Ok(true)
}

fn show_average<R: BufRead, W: Write>(
    store: &StudentStore,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    let Some(id) = prompt(input, out, "Enter the student ID: ")? else {
        return Ok(false);
    };
    let id = id.trim();

    let summary = store
        .average_score(id)
        .and_then(|average| store.gpa(id).map(|gpa| (average, gpa)));

    match summary {
        Ok((average, gpa)) => writeln!(
            out,
            "Average score for student {id} is {average} (GPA {gpa})"
        )?,
        Err(e) if e.is_not_found() => writeln!(out, "No student found with ID {id}")?,
        Err(StoreError::InvalidId { .. }) => writeln!(out, "Invalid student ID {id}")?,
        Err(e) => writeln!(out, "\nError getting average scores: {e}")?,
    }
    Ok(true)
}
