//! Registry transition helpers shared by the desktop reducer.

use crate::model::{DesktopState, WindowEntry, WindowId};

pub(crate) fn find_window_mut(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Option<&mut WindowEntry> {
    state.windows.iter_mut().find(|w| w.id == window_id)
}

/// Raises `window_id` above every entry and clears its minimized flag.
///
/// The new stacking value is derived from the current snapshot, never from a cached maximum.
/// Returns `false` when the window is not registered.
pub fn bring_to_front(state: &mut DesktopState, window_id: WindowId) -> bool {
    let next_z = state.max_z_index().saturating_add(1);
    let Some(window) = find_window_mut(state, window_id) else {
        return false;
    };
    window.z_index = next_z;
    window.is_minimized = false;
    true
}

/// Opens (or restores) `window_id` and raises it.
pub fn open_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(window) = find_window_mut(state, window_id) else {
        return false;
    };
    window.is_open = true;
    window.is_minimized = false;
    bring_to_front(state, window_id)
}

/// Taskbar button semantics: restore hidden windows, minimize the active one, raise the rest.
pub fn toggle_taskbar_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(window) = state.window(window_id) else {
        return false;
    };
    if window.is_minimized || !window.is_open {
        return open_window(state, window_id);
    }

    if state.active_z_index() == Some(window.z_index) {
        if let Some(window) = find_window_mut(state, window_id) {
            window.is_minimized = true;
        }
        true
    } else {
        bring_to_front(state, window_id)
    }
}
