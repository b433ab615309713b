use anyhow::{Context, Result};
use std::path::Path;

/// Dry run: print the top-level instance lines without touching the
/// filesystem.
pub fn run(file: &Path) -> Result<()> {
    let instances = rbxdump_loader::load_file(file)
        .with_context(|| format!("Failed to load document {}", file.display()))?;

    println!("{} top-level instance(s) in {}:", instances.len(), file.display());
    for instance in &instances {
        println!("- {} ({})", instance.class_name, instance.display_name());
    }

    Ok(())
}
