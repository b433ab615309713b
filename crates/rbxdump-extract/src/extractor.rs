use crate::paths;
use rbxdump_core::config::Config;
use rbxdump_core::error::ExtractError;
use rbxdump_core::{Instance, constants, naming};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Recursive instance-to-filesystem extractor.
///
/// Built once per run from the loaded [`Config`] and applied to each
/// top-level instance. Traversal is depth-first in document order. Failure
/// is isolated per node: a child that cannot be materialized is logged and
/// skipped, its siblings and any output it already produced are untouched.
pub struct Extractor {
    script_classes: HashSet<String>,
    extension: String,
}

impl Extractor {
    pub fn new(config: &Config) -> Self {
        Self {
            script_classes: config.scripts.classes.iter().cloned().collect(),
            extension: config.scripts.extension.clone(),
        }
    }

    /// Materialize `instance` and its descendants under `parent_dir`.
    ///
    /// Steps, in order: allocate a collision-free directory and create it,
    /// emit the script source for script-class instances, write the
    /// properties sidecar, then recurse into children. Directory and script
    /// failures abort this node and surface to the caller; a properties
    /// write failure and any child failure are logged here and do not
    /// propagate.
    pub fn extract(&self, instance: &Instance, parent_dir: &Path) -> Result<(), ExtractError> {
        let mut name = naming::sanitize(instance.display_name());
        if name.is_empty() {
            name = constants::FALLBACK_NAME.to_string();
        }
        let instance_dir = paths::unique_path(parent_dir.join(&name));
        fs::create_dir_all(&instance_dir)
            .map_err(|e| ExtractError::create_dir(&instance_dir, e))?;

        if self.script_classes.contains(&instance.class_name) {
            self.write_script(instance, &instance_dir, &name)?;
        }

        if let Err(err) = write_properties(instance, &instance_dir, &name) {
            warn!(path = %instance_dir.display(), %err, "failed to write properties");
        }

        for child in &instance.children {
            if let Err(err) = self.extract(child, &instance_dir) {
                warn!(
                    child = child.display_name(),
                    class = %child.class_name,
                    parent = %instance_dir.display(),
                    %err,
                    "failed to extract child"
                );
            }
        }
        Ok(())
    }

    /// Write `<dir>/<name>.<ext>` from the first `ProtectedString` property
    /// named `Source`, or the placeholder body when none exists. Exactly one
    /// file per script instance.
    fn write_script(
        &self,
        instance: &Instance,
        dir: &Path,
        name: &str,
    ) -> Result<(), ExtractError> {
        let script_path = dir.join(format!("{name}.{}", self.extension));
        let body = match instance.source_property() {
            Some(source) => source.value.as_deref().unwrap_or(""),
            None => constants::MISSING_SOURCE_BODY,
        };
        fs::write(&script_path, body).map_err(|e| ExtractError::write_file(&script_path, e))?;
        debug!(path = %script_path.display(), bytes = body.len(), "wrote script source");
        Ok(())
    }
}

/// Write the `<name>_properties.txt` sidecar, one `<key>: <value>` line per
/// mapped property in document order. Skipped entirely when the instance
/// has no mappable properties.
fn write_properties(instance: &Instance, dir: &Path, name: &str) -> Result<(), ExtractError> {
    let map = instance.property_map();
    if map.is_empty() {
        return Ok(());
    }
    let props_path = dir.join(format!("{name}{}", constants::PROPERTIES_SUFFIX));
    let mut out = String::new();
    for (key, value) in &map {
        out.push_str(key);
        out.push_str(": ");
        out.push_str(value.unwrap_or(""));
        out.push('\n');
    }
    fs::write(&props_path, out).map_err(|e| ExtractError::write_file(&props_path, e))
}
