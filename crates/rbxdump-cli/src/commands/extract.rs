use anyhow::{Context, Result};
use rbxdump_core::config::Config;
use rbxdump_extract::Extractor;
use std::path::Path;
use std::time::Instant;
use tracing::warn;

pub fn run(file: &Path, out_root: &Path, config_file: Option<&Path>) -> Result<()> {
    let config = Config::load(config_file)?;

    // The document loads fully before any filesystem mutation; a parse
    // failure here means no output at all.
    let instances = rbxdump_loader::load_file(file)
        .with_context(|| format!("Failed to load document {}", file.display()))?;

    let src_root = out_root.join(&config.output.subdir);
    std::fs::create_dir_all(&src_root)
        .with_context(|| format!("Failed to create output directory {}", src_root.display()))?;

    let extractor = Extractor::new(&config);
    let start = Instant::now();
    println!("Extracting {} top-level instance(s) from {}:", instances.len(), file.display());
    for instance in &instances {
        println!("- {} ({})", instance.class_name, instance.display_name());
        if let Err(err) = extractor.extract(instance, &src_root) {
            warn!(
                name = instance.display_name(),
                class = %instance.class_name,
                %err,
                "failed to extract top-level instance"
            );
        }
    }
    println!(
        "Extraction complete in {:?}: {}",
        start.elapsed(),
        src_root.display()
    );

    Ok(())
}
