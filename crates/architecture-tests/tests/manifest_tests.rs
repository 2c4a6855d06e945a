//! Architecture tests for crate manifests.
//!
//! - A dependency declared in `[workspace.dependencies]` is inherited with
//!   `{ workspace = true }` by every member crate, so versions live in one place.

use std::fs;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("architecture-tests lives under crates/")
        .to_path_buf()
}

/// Lines of the `[section]` table, without the header.
fn section_lines<'a>(content: &'a str, section: &str) -> Vec<&'a str> {
    let header = format!("[{section}]");
    content
        .lines()
        .skip_while(|line| line.trim() != header)
        .skip(1)
        .take_while(|line| !line.trim_start().starts_with('['))
        .collect()
}

/// Dependency name of a `name = ...` line, skipping comments and blanks.
fn dependency_name(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    line.split_once('=').map(|(name, _)| name.trim())
}

fn workspace_dependencies(root_manifest: &str) -> Vec<String> {
    section_lines(root_manifest, "workspace.dependencies")
        .into_iter()
        .filter_map(dependency_name)
        .map(str::to_string)
        .collect()
}

/// `name` entries that pin their own version instead of inheriting it.
fn non_inherited(manifest: &str, workspace_deps: &[String]) -> Vec<String> {
    ["dependencies", "dev-dependencies"]
        .iter()
        .flat_map(|section| section_lines(manifest, section))
        .filter(|line| {
            dependency_name(line).is_some_and(|name| workspace_deps.iter().any(|dep| dep == name))
        })
        .filter(|line| !line.replace(' ', "").contains("workspace=true"))
        .map(|line| line.trim().to_string())
        .collect()
}

#[test]
fn test_member_crates_inherit_workspace_dependencies() {
    let root = workspace_root();
    let root_manifest = fs::read_to_string(root.join("Cargo.toml")).expect("root Cargo.toml");
    let workspace_deps = workspace_dependencies(&root_manifest);
    assert!(!workspace_deps.is_empty(), "no [workspace.dependencies] found");

    let mut violations = Vec::new();
    for entry in fs::read_dir(root.join("crates")).expect("crates/ directory") {
        let manifest_path = entry.expect("crate entry").path().join("Cargo.toml");
        let Ok(manifest) = fs::read_to_string(&manifest_path) else {
            continue;
        };
        for line in non_inherited(&manifest, &workspace_deps) {
            violations.push(format!("{}: {}", manifest_path.display(), line));
        }
    }

    assert!(
        violations.is_empty(),
        "Dependencies declared in the workspace must use {{ workspace = true }}:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_non_inherited_flags_pinned_versions() {
    let workspace_deps = vec!["temp-env".to_string(), "proptest".to_string()];
    let manifest = "[package]\nname = \"demo\"\n\n[dev-dependencies]\n\
                    proptest = { workspace = true }\ntempfile = \"3\"\ntemp-env = \"0.3\"\n";

    assert_eq!(
        non_inherited(manifest, &workspace_deps),
        vec!["temp-env = \"0.3\"".to_string()]
    );
}
