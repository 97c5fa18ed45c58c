//! Centralized icon set.
//!
//! Icons render as glyph spans so the desktop stays free of image assets; the CSS layer sizes
//! them through `data-ui-size`.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named icon glyphs available to the shell.
pub enum IconName {
    /// "My Computer".
    Computer,
    /// Folder.
    Folder,
    /// Plain text document.
    TextFile,
    /// Mail envelope.
    Mail,
    /// Source code document.
    Code,
    /// Birthday cake.
    Cake,
    /// Start button logo.
    StartLogo,
    /// Power off.
    Shutdown,
    /// Tray speaker.
    Speaker,
    /// Titlebar minimize glyph.
    WindowMinimize,
    /// Titlebar maximize glyph.
    WindowMaximize,
    /// Titlebar close glyph.
    Dismiss,
}

impl IconName {
    /// Resolves a stable icon id (as stored in runtime models) to an icon.
    pub fn from_id(id: &str) -> Option<Self> {
        let icon = match id {
            "computer" => Self::Computer,
            "folder" => Self::Folder,
            "text-file" => Self::TextFile,
            "mail" => Self::Mail,
            "code" => Self::Code,
            "cake" => Self::Cake,
            "start" => Self::StartLogo,
            "shutdown" => Self::Shutdown,
            "speaker" => Self::Speaker,
            _ => return None,
        };
        Some(icon)
    }

    /// Returns the stable token written to `data-ui-icon`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Computer => "computer",
            Self::Folder => "folder",
            Self::TextFile => "text-file",
            Self::Mail => "mail",
            Self::Code => "code",
            Self::Cake => "cake",
            Self::StartLogo => "start",
            Self::Shutdown => "shutdown",
            Self::Speaker => "speaker",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::Dismiss => "dismiss",
        }
    }

    const fn glyph(self) -> &'static str {
        match self {
            Self::Computer => "💻",
            Self::Folder => "📂",
            Self::TextFile => "📄",
            Self::Mail => "📧",
            Self::Code => "📜",
            Self::Cake => "🎂",
            Self::StartLogo => "🪟",
            Self::Shutdown => "❌",
            Self::Speaker => "🔊",
            Self::WindowMinimize => "_",
            Self::WindowMaximize => "□",
            Self::Dismiss => "×",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Titlebar control size.
    Xs,
    /// Taskbar/titlebar size.
    #[default]
    Sm,
    /// Start menu size.
    Md,
    /// Desktop icon size.
    Lg,
}

impl IconSize {
    const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders one icon glyph.
pub fn Icon(icon: IconName, #[prop(optional)] size: IconSize) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon.glyph()}
        </span>
    }
}
