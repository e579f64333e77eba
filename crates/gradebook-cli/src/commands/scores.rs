//! The `gradebook scores` command.

use anyhow::Result;

use super::StorePaths;

pub fn execute(paths: &StorePaths, id: String, scores: String) -> Result<()> {
    let store = paths.open_store()?;
    let mut record = store.lookup(&id)?;

    let tokens: Vec<&str> = scores.split(',').collect();
    let updated = store.update_scores(&mut record, &tokens)?;

    println!("Current scores: {updated:?}");
    Ok(())
}
