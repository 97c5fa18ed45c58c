//! Power/CRT state wrapped around the desktop.

use std::time::Duration;

/// Delay between first paint and the CRT turn-on animation.
pub const BOOT_DELAY: Duration = Duration::from_millis(100);
/// Length of the CRT turn-off animation before the shutdown screen appears.
pub const SHUTDOWN_DELAY: Duration = Duration::from_millis(700);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    Booting,
    Running,
    ShuttingDown,
    Off,
}

impl PowerState {
    /// CSS class driving the CRT animation for this state.
    pub fn crt_class(self) -> &'static str {
        match self {
            Self::Booting => "crt-booting",
            Self::Running => "crt-turn-on",
            Self::ShuttingDown => "crt-turn-off",
            Self::Off => "crt-off",
        }
    }

    /// Whether the desktop (and its runtime state) stays mounted.
    pub fn desktop_mounted(self) -> bool {
        self != Self::Off
    }

    pub fn boot_complete(self) -> Self {
        match self {
            Self::Booting => Self::Running,
            other => other,
        }
    }

    pub fn request_shutdown(self) -> Self {
        match self {
            Self::Running | Self::Booting => Self::ShuttingDown,
            other => other,
        }
    }

    pub fn shutdown_complete(self) -> Self {
        match self {
            Self::ShuttingDown => Self::Off,
            other => other,
        }
    }

    pub fn restart(self) -> Self {
        match self {
            Self::Off => Self::Running,
            other => other,
        }
    }
}
