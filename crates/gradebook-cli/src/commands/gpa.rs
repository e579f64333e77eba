//! The `gradebook gpa` command.

use anyhow::{Context, Result};

use super::StorePaths;

pub fn execute(paths: &StorePaths, id: String) -> Result<()> {
    let store = paths.open_store()?;
    let gpa = store
        .gpa(&id)
        .with_context(|| format!("cannot compute GPA for student {id}"))?;
    println!("GPA for student {id} is {gpa}");
    Ok(())
}
