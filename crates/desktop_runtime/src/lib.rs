//! Desktop runtime for the retro landing page: window registry, frame drag, taskbar, and the
//! date-gated birthday celebration.

pub mod celebration;
pub mod components;
pub mod drag;
pub mod host;
pub mod manifest;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use components::{DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use host::DesktopHostContext;
pub use manifest::{desktop_manifest, CelebrationRule, DesktopManifest, ManifestError};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError};
pub use runtime_context::use_desktop_runtime;
