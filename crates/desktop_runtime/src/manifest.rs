//! Build-time validated desktop manifest: initial window set and celebration rule.

use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{WindowId, WindowPosition};

include!(concat!(env!("OUT_DIR"), "/desktop_manifest_generated.rs"));

/// Manifest schema version understood by this runtime.
pub const DESKTOP_MANIFEST_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// One window declaration from `desktop.manifest.toml`.
pub struct WindowManifest {
    /// Stable window identity.
    pub id: WindowId,
    /// Title bar and taskbar label.
    pub title: String,
    /// Icon id resolved by the UI layer.
    pub icon: String,
    /// Whether the window starts open.
    pub open: bool,
    /// Initial stacking value.
    pub z_index: u64,
    /// Initial frame position in desktop coordinates.
    pub position: WindowPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
/// Date gate and timing for the birthday celebration.
pub struct CelebrationRule {
    /// Window revealed on the anniversary and hosting the celebration.
    pub window: WindowId,
    /// Calendar month, 1-based.
    pub month: u32,
    /// Day of month, 1-based.
    pub day: u32,
    /// Delay before the boot-time burst on the anniversary.
    pub initial_burst_delay_ms: u64,
    /// Total length of the fountain sequence.
    pub duration_ms: u64,
    /// Interval between fountain ticks.
    pub tick_ms: u64,
    /// Per-fountain particle count at the start of the sequence.
    pub base_particle_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Parsed desktop manifest.
pub struct DesktopManifest {
    /// Manifest schema version.
    pub schema_version: u32,
    /// Initial window declarations.
    pub windows: Vec<WindowManifest>,
    /// Celebration rule.
    pub celebration: CelebrationRule,
}

impl DesktopManifest {
    /// Returns the declaration for `id`, if present.
    pub fn window(&self, id: WindowId) -> Option<&WindowManifest> {
        self.windows.iter().find(|window| window.id == id)
    }
}

#[derive(Debug, Error)]
/// Errors produced while loading a desktop manifest payload.
pub enum ManifestError {
    /// Payload was not valid manifest JSON.
    #[error("desktop manifest parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// Payload declares a schema this runtime does not understand.
    #[error("unsupported desktop manifest schema version {0}")]
    UnsupportedSchema(u32),
    /// A known window is missing from the payload.
    #[error("desktop manifest does not declare window `{0}`")]
    MissingWindow(WindowId),
    /// The same window is declared twice.
    #[error("desktop manifest declares window `{0}` more than once")]
    DuplicateWindow(WindowId),
}

/// Parses and validates a manifest JSON payload.
///
/// # Errors
///
/// Returns [`ManifestError`] when the payload does not parse, uses another schema version, or
/// does not declare every [`WindowId`] exactly once.
pub fn parse_desktop_manifest(json: &str) -> Result<DesktopManifest, ManifestError> {
    let manifest: DesktopManifest = serde_json::from_str(json)?;
    if manifest.schema_version != DESKTOP_MANIFEST_SCHEMA_VERSION {
        return Err(ManifestError::UnsupportedSchema(manifest.schema_version));
    }
    for id in WindowId::ALL {
        match manifest.windows.iter().filter(|w| w.id == id).count() {
            0 => return Err(ManifestError::MissingWindow(id)),
            1 => {}
            _ => return Err(ManifestError::DuplicateWindow(id)),
        }
    }
    Ok(manifest)
}

/// Returns the generated manifest JSON payload.
pub fn desktop_manifest_json() -> &'static str {
    DESKTOP_MANIFEST_JSON
}

/// Returns the compiled-in desktop manifest.
pub fn desktop_manifest() -> &'static DesktopManifest {
    static MANIFEST: OnceLock<DesktopManifest> = OnceLock::new();
    MANIFEST.get_or_init(|| {
        parse_desktop_manifest(DESKTOP_MANIFEST_JSON)
            .expect("generated desktop manifest should parse")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn generated_manifest_declares_the_four_windows() {
        let manifest = desktop_manifest();
        let open: Vec<_> = manifest
            .windows
            .iter()
            .filter(|w| w.open)
            .map(|w| w.id)
            .collect();
        assert_eq!(
            open,
            vec![WindowId::Readme, WindowId::Projects, WindowId::Connect]
        );
        let birthday = manifest.window(WindowId::Birthday).expect("birthday");
        assert_eq!(birthday.title, "¡Feliz Cumpleaños!");
        assert_eq!(birthday.z_index, 4);
        assert_eq!(birthday.position, WindowPosition { x: 300, y: 150 });
        assert_eq!(
            manifest.window(WindowId::Projects).map(|w| w.title.as_str()),
            Some("A:\\Proyectos")
        );
    }

    #[test]
    fn generated_celebration_rule_targets_january_31() {
        let rule = desktop_manifest().celebration;
        assert_eq!(rule.window, WindowId::Birthday);
        assert_eq!((rule.month, rule.day), (1, 31));
        assert_eq!(rule.initial_burst_delay_ms, 1000);
        assert_eq!(rule.duration_ms, 15_000);
        assert_eq!(rule.tick_ms, 250);
        assert_eq!(rule.base_particle_count, 50);
    }

    #[test]
    fn parse_rejects_duplicate_window() {
        let json = desktop_manifest_json().replace("\"birthday\"", "\"connect\"");
        let err = parse_desktop_manifest(&json).expect_err("duplicate connect");
        assert!(matches!(err, ManifestError::DuplicateWindow(WindowId::Connect)));
    }

    #[test]
    fn parse_rejects_missing_window() {
        let mut value: serde_json::Value =
            serde_json::from_str(desktop_manifest_json()).expect("manifest json");
        value["windows"]
            .as_array_mut()
            .expect("windows array")
            .retain(|window| window["id"] != "birthday");
        let err = parse_desktop_manifest(&value.to_string()).expect_err("birthday removed");
        assert!(matches!(err, ManifestError::MissingWindow(WindowId::Birthday)));
    }

    #[test]
    fn parse_rejects_other_schema_versions() {
        let json = desktop_manifest_json().replace("\"schema_version\": 1", "\"schema_version\": 2");
        let err = parse_desktop_manifest(&json).expect_err("schema 2");
        assert!(matches!(err, ManifestError::UnsupportedSchema(2)));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(matches!(
            parse_desktop_manifest("{"),
            Err(ManifestError::Parse(_))
        ));
    }
}
