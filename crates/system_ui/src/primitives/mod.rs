//! Shared structural, shell, overlay, and control primitives.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod overlays;
mod shell;

pub use controls::Button;
pub use overlays::{MenuItem, MenuSeparator, MenuSurface};
pub use shell::{
    ClockTray, DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot,
    DesktopWindowLayer, Taskbar, TaskbarButton, TaskbarSection, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Raised bevelled button.
    #[default]
    Standard,
    /// Flat button that only bevels on hover (menus, taskbar entries).
    Quiet,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Titlebar control size.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Call-to-action button.
    Lg,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
