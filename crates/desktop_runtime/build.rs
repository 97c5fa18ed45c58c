use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const KNOWN_WINDOW_IDS: [&str; 4] = ["readme", "projects", "connect", "birthday"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowPosition {
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowManifest {
    id: String,
    title: String,
    icon: String,
    open: bool,
    z_index: u64,
    position: WindowPosition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CelebrationManifest {
    window: String,
    month: u32,
    day: u32,
    initial_burst_delay_ms: u64,
    duration_ms: u64,
    tick_ms: u64,
    base_particle_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopManifest {
    schema_version: u32,
    windows: Vec<WindowManifest>,
    celebration: CelebrationManifest,
}

fn validate(manifest: &DesktopManifest, path: &str) {
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {path}: expected 1 found {}",
            manifest.schema_version
        );
    }

    let mut ids = HashSet::new();
    let mut z_indexes = HashSet::new();
    for window in &manifest.windows {
        if !KNOWN_WINDOW_IDS.contains(&window.id.as_str()) {
            panic!("unknown window id `{}` in {path}", window.id);
        }
        if !ids.insert(window.id.as_str()) {
            panic!("duplicate window id `{}` in {path}", window.id);
        }
        if window.z_index == 0 || !z_indexes.insert(window.z_index) {
            panic!(
                "window `{}` in {path} needs a unique z_index >= 1, found {}",
                window.id, window.z_index
            );
        }
    }
    for id in KNOWN_WINDOW_IDS {
        if !ids.contains(id) {
            panic!("window `{id}` missing from {path}");
        }
    }

    let rule = &manifest.celebration;
    if !ids.contains(rule.window.as_str()) {
        panic!("celebration window `{}` is not declared in {path}", rule.window);
    }
    if !(1..=12).contains(&rule.month) || !(1..=31).contains(&rule.day) {
        panic!(
            "celebration date {}/{} in {path} is out of range",
            rule.month, rule.day
        );
    }
    if rule.duration_ms == 0 || rule.tick_ms == 0 {
        panic!("celebration duration_ms and tick_ms in {path} must be positive");
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.manifest.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: DesktopManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&manifest, &path.display().to_string());

    let json = serde_json::to_string_pretty(&manifest).expect("serialize desktop manifest");
    let generated = format!(
        "/// Build-time generated desktop manifest JSON.\n\
pub const DESKTOP_MANIFEST_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_manifest_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
