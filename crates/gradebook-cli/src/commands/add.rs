//! The `gradebook add` command.

use anyhow::{Context, Result};

use super::{split_list, StorePaths};

pub fn execute(paths: &StorePaths, id: Option<String>, name: String, courses: String) -> Result<()> {
    let mut store = paths.open_store()?;

    if let Some(id) = &id {
        match store.lookup(id) {
            Ok(_) => anyhow::bail!("student ID {id} already exists"),
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e).context("failed to check for an existing student"),
        }
    }

    let record = store.create(id, name, split_list(&courses))?;
    let location = store.persist(&record)?;

    println!("Data saved successfully to {}", location.display());
    println!("Student ID: {}", record.id);
    Ok(())
}
