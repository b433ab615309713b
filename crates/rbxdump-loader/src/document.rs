//! Parses Roblox place/model XML (`.rbxlx` / `.rbxmx`) into [`Instance`]
//! trees.
//!
//! The document shape is: a root element containing `Item` elements, each
//! with a `class` attribute, an optional `Properties` container (one child
//! element per property, carrying a `name` attribute, its tag as the
//! serialized kind, and its text as the value), and nested `Item` children.
//! Loading is all-or-nothing: any read or parse failure aborts before a
//! single instance is produced.

use rbxdump_core::constants;
use rbxdump_core::error::LoadError;
use rbxdump_core::{Instance, Property};
use roxmltree::{Document, Node};
use std::path::Path;
use tracing::debug;

/// Load a document from disk and return its top-level instances in
/// document order.
pub fn load_file(path: &Path) -> Result<Vec<Instance>, LoadError> {
    let raw = std::fs::read_to_string(path)?;
    load_str(&raw)
}

/// Parse document text and return its top-level instances in document order.
pub fn load_str(raw: &str) -> Result<Vec<Instance>, LoadError> {
    let doc = Document::parse(raw).map_err(LoadError::xml)?;
    let items: Vec<Instance> = doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("Item"))
        .map(build_instance)
        .collect();
    debug!(top_level = items.len(), "document loaded");
    Ok(items)
}

fn build_instance(item: Node) -> Instance {
    let class_name = item
        .attribute("class")
        .unwrap_or(constants::FALLBACK_CLASS)
        .to_string();

    let mut properties = Vec::new();
    let mut children = Vec::new();
    for child in item.children().filter(|n| n.is_element()) {
        if child.has_tag_name("Properties") {
            properties.extend(
                child
                    .children()
                    .filter(|n| n.is_element())
                    .map(build_property),
            );
        } else if child.has_tag_name("Item") {
            children.push(build_instance(child));
        }
    }

    Instance {
        class_name,
        properties,
        children,
    }
}

fn build_property(entry: Node) -> Property {
    Property {
        name: entry.attribute("name").map(str::to_string),
        kind: entry.tag_name().name().to_string(),
        value: entry.text().map(str::to_string),
    }
}
