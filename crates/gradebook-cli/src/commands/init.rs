//! The `gradebook init` command.

use std::path::Path;

use anyhow::Result;

use gradebook_core::config::LOCAL_CONFIG_FILE;

pub fn execute() -> Result<()> {
    if Path::new(LOCAL_CONFIG_FILE).exists() {
        println!("{LOCAL_CONFIG_FILE} already exists, skipping.");
    } else {
        std::fs::write(LOCAL_CONFIG_FILE, SAMPLE_CONFIG)?;
        println!("Created {LOCAL_CONFIG_FILE}");
    }

    println!("\nNext steps:");
    println!("  1. Edit {LOCAL_CONFIG_FILE} to choose where student files live");
    println!("  2. Run: gradebook add --name \"Ada\" --courses \"Math,CS\"");
    println!("  3. Run: gradebook (interactive menu)");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

# Directory holding one <id>.json file per student.
data_dir = "student"

# Random ID draws before falling back to a scan of free IDs.
id_attempts = 32
"#;
