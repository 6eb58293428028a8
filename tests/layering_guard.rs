//! Layering guardrails to keep the library crates free of process-level dependencies.
//!
//! `jack_core` and `jack_syntax` are pure libraries: argument parsing and subscriber setup belong to the `jackc`
//! binary. This test scans their manifests and fails if a CLI-only crate appears in `[dependencies]`.

const CLI_ONLY: &[&str] = &["clap", "tracing-subscriber"];

fn main_dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut deps = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }
        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }
        let name = line.split(['=', '#']).next().unwrap_or("").trim();
        if !name.is_empty() {
            deps.push(name.to_string());
        }
    }
    deps
}

fn assert_no_cli_deps(crate_name: &str, manifest: &str) {
    for dep in main_dependencies(manifest) {
        assert!(
            !CLI_ONLY.contains(&dep.as_str()),
            "`{dep}` must not appear in {crate_name}'s [dependencies]; it belongs to the jackc binary"
        );
    }
}

#[test]
fn syntax_crate_has_no_cli_dependencies() {
    assert_no_cli_deps("jack_syntax", include_str!("../crates/jack_syntax/Cargo.toml"));
}

#[test]
fn core_crate_has_no_cli_dependencies() {
    assert_no_cli_deps("jack_core", include_str!("../crates/jack_core/Cargo.toml"));
}

#[test]
fn core_crate_stays_dependency_free() {
    let deps = main_dependencies(include_str!("../crates/jack_core/Cargo.toml"));
    assert!(deps.is_empty(), "jack_core should have no dependencies, found {deps:?}");
}

#[test]
fn binary_owns_the_cli_stack() {
    let deps = main_dependencies(include_str!("../Cargo.toml"));
    for required in CLI_ONLY {
        assert!(deps.iter().any(|d| d == required), "`{required}` missing from jackc's [dependencies]");
    }
}
