//! Shared UI primitive library for the retro desktop shell.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the desktop shell CSS layers.
//! Window content panels should compose these primitives instead of emitting ad hoc
//! chrome markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonSize, ButtonVariant, ClockTray, DesktopBackdrop, DesktopIconButton,
    DesktopIconGrid, DesktopRoot, DesktopWindowLayer, MenuItem, MenuSeparator, MenuSurface,
    Taskbar, TaskbarButton, TaskbarSection, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, ClockTray, DesktopBackdrop, DesktopIconButton,
        DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Icon, IconName, IconSize, MenuItem,
        MenuSeparator, MenuSurface, Taskbar, TaskbarButton, TaskbarSection, WindowBody,
        WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
    };
}
