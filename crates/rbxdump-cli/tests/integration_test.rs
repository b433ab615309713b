//! End-to-end lifecycle tests for rbxdump, driven at the library level the
//! same way the `extract` command drives it: load the document, ensure the
//! output subdirectory, extract each top-level instance in order.

use rbxdump_core::config::Config;
use rbxdump_extract::Extractor;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const PLACE: &str = r#"
<roblox version="4">
  <Item class="Workspace">
    <Properties>
      <string name="Name">Workspace</string>
    </Properties>
    <Item class="Script">
      <Properties>
        <string name="Name">Main</string>
        <ProtectedString name="Source">print('hi')</ProtectedString>
      </Properties>
    </Item>
  </Item>
  <Item class="ServerScriptService">
    <Properties>
      <string name="Name">ServerScriptService</string>
    </Properties>
  </Item>
</roblox>
"#;

/// Replicates `rbxdump extract <file> --out <root>` without going through
/// the binary. Returns the populated source root.
fn do_extract(file: &Path, out_root: &Path, config: &Config) -> PathBuf {
    let instances = rbxdump_loader::load_file(file).expect("load document");
    let src_root = out_root.join(&config.output.subdir);
    fs::create_dir_all(&src_root).expect("create output root");

    let extractor = Extractor::new(config);
    for instance in &instances {
        extractor
            .extract(instance, &src_root)
            .expect("extract top-level instance");
    }
    src_root
}

#[test]
fn extract_mirrors_the_document_under_src() {
    let dir = tempdir().unwrap();
    let place = dir.path().join("place.rbxlx");
    fs::write(&place, PLACE).unwrap();

    let src_root = do_extract(&place, dir.path(), &Config::default());

    assert_eq!(src_root, dir.path().join("src"));
    assert!(src_root.join("Workspace").is_dir());
    assert!(src_root.join("ServerScriptService").is_dir());
    assert_eq!(
        fs::read_to_string(src_root.join("Workspace/Main/Main.luau")).unwrap(),
        "print('hi')"
    );
    assert_eq!(
        fs::read_to_string(src_root.join("Workspace/Workspace_properties.txt")).unwrap(),
        "Name: Workspace\n"
    );
}

#[test]
fn rerunning_against_the_same_root_suffixes_instead_of_clobbering() {
    let dir = tempdir().unwrap();
    let place = dir.path().join("place.rbxlx");
    fs::write(&place, PLACE).unwrap();

    let config = Config::default();
    do_extract(&place, dir.path(), &config);
    let src_root = do_extract(&place, dir.path(), &config);

    // First run's output is intact; the second run landed beside it.
    assert_eq!(
        fs::read_to_string(src_root.join("Workspace/Main/Main.luau")).unwrap(),
        "print('hi')"
    );
    assert!(src_root.join("Workspace_1/Main/Main.luau").exists());
}

#[test]
fn config_file_reshapes_the_output() {
    let dir = tempdir().unwrap();
    let place = dir.path().join("place.rbxlx");
    fs::write(&place, PLACE).unwrap();

    let config_path = dir.path().join("rbxdump.toml");
    fs::write(
        &config_path,
        "[output]\nsubdir = \"dump\"\n\n[scripts]\nextension = \"lua\"\n",
    )
    .unwrap();
    let config = Config::load(Some(&config_path)).unwrap();

    let src_root = do_extract(&place, dir.path(), &config);
    assert_eq!(src_root, dir.path().join("dump"));
    assert!(src_root.join("Workspace/Main/Main.lua").exists());
}

#[test]
fn unreadable_document_fails_before_any_output() {
    let dir = tempdir().unwrap();
    let place = dir.path().join("broken.rbxlx");
    fs::write(&place, "<roblox><Item class=").unwrap();

    assert!(rbxdump_loader::load_file(&place).is_err());
    // Nothing was created alongside the input.
    assert!(!dir.path().join("src").exists());
}
