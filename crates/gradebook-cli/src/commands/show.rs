//! The `gradebook show` command.

use anyhow::Result;

use super::StorePaths;

pub fn execute(paths: &StorePaths, id: String) -> Result<()> {
    let store = paths.open_store()?;
    let record = store.lookup(&id)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
