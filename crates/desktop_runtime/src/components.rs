//! Desktop shell UI components: icons, window frames, taskbar, and window content.

mod celebration;
mod content;
mod taskbar;
mod window;

use std::time::Duration;

use leptos::*;
use platform_host::LocalClockReading;
use system_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, IconName,
};

use self::{taskbar::DesktopTaskbar, window::DesktopWindow};
use crate::{
    model::{PointerPosition, WindowId},
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
};

pub use crate::runtime_context::{DesktopProvider, DesktopRuntimeContext};

/// Desktop shortcuts in display order.
const DESKTOP_SHORTCUTS: [(IconName, &str, WindowId); 4] = [
    (IconName::Computer, "Mi PC", WindowId::Readme),
    (IconName::Folder, "Proyectos", WindowId::Projects),
    (IconName::Mail, "Contacto", WindowId::Connect),
    (IconName::TextFile, "Leeme.txt", WindowId::Readme),
];

#[component]
/// Renders the desktop: shortcut icons, every registered window, and the taskbar.
pub fn DesktopShell(
    /// Invoked when the user picks "Apagar..." from the start menu.
    #[prop(optional)]
    on_shutdown: Option<Callback<()>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let compact = runtime.compact;

    view! {
        <DesktopRoot id="desktop-shell-root" compact=Signal::derive(move || compact.get())>
            <DesktopBackdrop>
                <DesktopIconGrid compact=Signal::derive(move || compact.get())>
                    {DESKTOP_SHORTCUTS
                        .into_iter()
                        .map(|(icon, label, window_id)| {
                            view! {
                                <DesktopIconButton
                                    icon=icon
                                    label=label
                                    on_click=Callback::new(move |_| {
                                        runtime.dispatch_action(DesktopAction::OpenWindow { window_id });
                                    })
                                />
                            }
                        })
                        .collect_view()}
                </DesktopIconGrid>

                <DesktopWindowLayer>
                    {WindowId::ALL
                        .into_iter()
                        .map(|window_id| view! { <DesktopWindow window_id=window_id /> })
                        .collect_view()}
                </DesktopWindowLayer>
            </DesktopBackdrop>

            <DesktopTaskbar on_shutdown=on_shutdown />
        </DesktopRoot>
    }
}

const CLOCK_REFRESH: Duration = Duration::from_secs(1);

/// Formats a clock reading as `h:mm AM/PM` (12-hour, no leading zero on the hour).
fn format_taskbar_clock(reading: LocalClockReading) -> String {
    let hour = match reading.hour % 12 {
        0 => 12,
        hour => hour,
    };
    let meridiem = if reading.hour < 12 { "AM" } else { "PM" };
    format!("{hour}:{:02} {meridiem}", reading.minute)
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(hour: u32, minute: u32) -> LocalClockReading {
        LocalClockReading {
            year: 2027,
            month: 1,
            day: 31,
            hour,
            minute,
            second: 0,
        }
    }

    #[test]
    fn clock_uses_twelve_hour_format_without_leading_zero() {
        assert_eq!(format_taskbar_clock(at(0, 5)), "12:05 AM");
        assert_eq!(format_taskbar_clock(at(9, 30)), "9:30 AM");
        assert_eq!(format_taskbar_clock(at(12, 0)), "12:00 PM");
        assert_eq!(format_taskbar_clock(at(15, 7)), "3:07 PM");
        assert_eq!(format_taskbar_clock(at(23, 59)), "11:59 PM");
    }

    #[test]
    fn every_window_is_reachable_from_a_shortcut_except_birthday() {
        let targets: Vec<_> = DESKTOP_SHORTCUTS.iter().map(|(_, _, id)| *id).collect();
        for window_id in [WindowId::Readme, WindowId::Projects, WindowId::Connect] {
            assert!(targets.contains(&window_id), "{window_id} has no shortcut");
        }
        assert!(!targets.contains(&WindowId::Birthday));
    }
}
