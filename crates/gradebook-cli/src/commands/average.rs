//! The `gradebook average` command.

use anyhow::Result;

use super::StorePaths;

pub fn execute(paths: &StorePaths, id: String) -> Result<()> {
    let store = paths.open_store()?;
    let average = store.average_score(&id)?;
    println!("Average score for student {id} is {average}");
    Ok(())
}
