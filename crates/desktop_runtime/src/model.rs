use std::fmt;

use serde::{Deserialize, Serialize};

use crate::manifest::{desktop_manifest, DesktopManifest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowId {
    Readme,
    Projects,
    Connect,
    Birthday,
}

impl WindowId {
    pub const ALL: [WindowId; 4] = [Self::Readme, Self::Projects, Self::Connect, Self::Birthday];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Readme => "readme",
            Self::Projects => "projects",
            Self::Connect => "connect",
            Self::Birthday => "birthday",
        }
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowEntry {
    pub id: WindowId,
    pub title: String,
    pub icon_id: String,
    pub is_open: bool,
    pub is_minimized: bool,
    pub z_index: u64,
    pub default_position: WindowPosition,
}

impl WindowEntry {
    /// Open and not minimized.
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One taskbar button derived from an open window.
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub title: String,
    pub icon_id: String,
    pub is_active: bool,
    pub is_minimized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    pub windows: Vec<WindowEntry>,
    pub start_menu_open: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::from_manifest(desktop_manifest())
    }
}

impl DesktopState {
    /// Builds the initial registry from manifest declarations, in declaration order.
    pub fn from_manifest(manifest: &DesktopManifest) -> Self {
        Self {
            windows: manifest
                .windows
                .iter()
                .map(|window| WindowEntry {
                    id: window.id,
                    title: window.title.clone(),
                    icon_id: window.icon.clone(),
                    is_open: window.open,
                    is_minimized: false,
                    z_index: window.z_index,
                    default_position: window.position,
                })
                .collect(),
            start_menu_open: false,
        }
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowEntry> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    /// Highest stacking value over every entry, open or not.
    pub fn max_z_index(&self) -> u64 {
        self.windows.iter().map(|w| w.z_index).max().unwrap_or(0)
    }

    /// Highest stacking value among visible entries; `None` when nothing is visible.
    pub fn active_z_index(&self) -> Option<u64> {
        self.windows
            .iter()
            .filter(|w| w.is_visible())
            .map(|w| w.z_index)
            .max()
    }

    pub fn active_window_id(&self) -> Option<WindowId> {
        let active_z = self.active_z_index()?;
        self.windows
            .iter()
            .find(|w| w.is_visible() && w.z_index == active_z)
            .map(|w| w.id)
    }

    pub fn is_window_active(&self, window_id: WindowId) -> bool {
        self.active_window_id() == Some(window_id)
    }

    /// Open entries ordered by ascending stacking value.
    pub fn taskbar_entries(&self) -> Vec<TaskbarEntry> {
        let active = self.active_window_id();
        let mut open: Vec<&WindowEntry> = self.windows.iter().filter(|w| w.is_open).collect();
        open.sort_by_key(|w| w.z_index);
        open.into_iter()
            .map(|w| TaskbarEntry {
                window_id: w.id,
                title: w.title.clone(),
                icon_id: w.icon_id.clone(),
                is_active: active == Some(w.id),
                is_minimized: w.is_minimized,
            })
            .collect()
    }
}
