//! Reducer actions and transition logic for the window registry.

use thiserror::Error;

use crate::model::{DesktopState, WindowId};
use crate::window_manager::{bring_to_front, find_window_mut, open_window, toggle_taskbar_window};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open (or restore) a window and raise it. Closes the start menu.
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
    },
    /// Close a window, keeping its stacking value.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Raise a window above every other entry.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Toggle taskbar behavior for a window (restore, minimize, or focus).
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Mark a window open without touching stacking or minimized state.
    RevealWindow {
        /// Window to reveal.
        window_id: WindowId,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Errors returned by [`reduce_desktop`].
pub enum ReducerError {
    /// The state has no entry for the requested window.
    #[error("window `{0}` is not registered")]
    WindowNotFound(WindowId),
}

/// Applies a [`DesktopAction`] to the registry.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when the action targets a window that the state was
/// not built with. The state is left unchanged in that case.
pub fn reduce_desktop(state: &mut DesktopState, action: DesktopAction) -> Result<(), ReducerError> {
    match action {
        DesktopAction::OpenWindow { window_id } => {
            require(open_window(state, window_id), window_id)?;
            state.start_menu_open = false;
        }
        DesktopAction::CloseWindow { window_id } => {
            let window = find_window_mut(state, window_id)
                .ok_or(ReducerError::WindowNotFound(window_id))?;
            window.is_open = false;
        }
        DesktopAction::MinimizeWindow { window_id } => {
            let window = find_window_mut(state, window_id)
                .ok_or(ReducerError::WindowNotFound(window_id))?;
            window.is_minimized = true;
        }
        DesktopAction::FocusWindow { window_id } => {
            require(bring_to_front(state, window_id), window_id)?;
        }
        DesktopAction::ToggleTaskbarWindow { window_id } => {
            require(toggle_taskbar_window(state, window_id), window_id)?;
        }
        DesktopAction::RevealWindow { window_id } => {
            let window = find_window_mut(state, window_id)
                .ok_or(ReducerError::WindowNotFound(window_id))?;
            window.is_open = true;
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
    }
    Ok(())
}

fn require(found: bool, window_id: WindowId) -> Result<(), ReducerError> {
    if found {
        Ok(())
    } else {
        Err(ReducerError::WindowNotFound(window_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn apply(state: &mut DesktopState, action: DesktopAction) {
        reduce_desktop(state, action).expect("known window");
    }

    fn z_of(state: &DesktopState, window_id: WindowId) -> u64 {
        state.window(window_id).expect("window").z_index
    }

    fn assert_single_active(state: &DesktopState) {
        let Some(max_visible) = state.active_z_index() else {
            assert_eq!(state.active_window_id(), None);
            return;
        };
        let holders: Vec<_> = state
            .windows
            .iter()
            .filter(|w| w.is_visible() && w.z_index == max_visible)
            .map(|w| w.id)
            .collect();
        assert_eq!(holders.len(), 1, "holders of max z: {holders:?}");
        assert_eq!(state.active_window_id(), Some(holders[0]));
    }

    #[test]
    fn open_readme_makes_it_active_above_connect() {
        let mut state = DesktopState::default();
        assert_eq!(state.active_window_id(), Some(WindowId::Connect));

        apply(&mut state, DesktopAction::OpenWindow { window_id: WindowId::Readme });

        assert_eq!(z_of(&state, WindowId::Readme), 5);
        assert_eq!(state.active_window_id(), Some(WindowId::Readme));
    }

    #[test]
    fn taskbar_click_on_active_window_minimizes_and_hands_focus_back() {
        let mut state = DesktopState::default();
        apply(&mut state, DesktopAction::OpenWindow { window_id: WindowId::Readme });

        apply(
            &mut state,
            DesktopAction::ToggleTaskbarWindow { window_id: WindowId::Readme },
        );

        let readme = state.window(WindowId::Readme).expect("readme");
        assert!(readme.is_open);
        assert!(readme.is_minimized);
        assert_eq!(state.active_window_id(), Some(WindowId::Connect));

        let before = state.max_z_index();
        apply(
            &mut state,
            DesktopAction::ToggleTaskbarWindow { window_id: WindowId::Readme },
        );
        let readme = state.window(WindowId::Readme).expect("readme");
        assert!(!readme.is_minimized);
        assert!(readme.z_index > before);
        assert_eq!(state.active_window_id(), Some(WindowId::Readme));
    }

    #[test]
    fn taskbar_click_on_inactive_window_focuses_without_touching_others() {
        let mut state = DesktopState::default();
        apply(&mut state, DesktopAction::MinimizeWindow { window_id: WindowId::Readme });

        apply(
            &mut state,
            DesktopAction::ToggleTaskbarWindow { window_id: WindowId::Projects },
        );

        assert_eq!(state.active_window_id(), Some(WindowId::Projects));
        assert!(state.window(WindowId::Readme).expect("readme").is_minimized);
        assert!(!state.window(WindowId::Connect).expect("connect").is_minimized);
    }

    #[test]
    fn taskbar_click_on_closed_window_opens_it() {
        let mut state = DesktopState::default();
        apply(
            &mut state,
            DesktopAction::ToggleTaskbarWindow { window_id: WindowId::Birthday },
        );
        let birthday = state.window(WindowId::Birthday).expect("birthday");
        assert!(birthday.is_open);
        assert_eq!(birthday.z_index, 5);
        assert_eq!(state.active_window_id(), Some(WindowId::Birthday));
    }

    #[test]
    fn bring_to_front_twice_keeps_focus_and_strictly_increases_z() {
        let mut state = DesktopState::default();
        apply(&mut state, DesktopAction::FocusWindow { window_id: WindowId::Projects });
        let first = z_of(&state, WindowId::Projects);
        apply(&mut state, DesktopAction::FocusWindow { window_id: WindowId::Projects });
        let second = z_of(&state, WindowId::Projects);

        assert!(second > first);
        assert_eq!(state.active_window_id(), Some(WindowId::Projects));
    }

    #[test]
    fn minimize_button_on_background_window_raises_then_hides_it() {
        let mut state = DesktopState::default();
        apply(&mut state, DesktopAction::FocusWindow { window_id: WindowId::Readme });
        assert_eq!(z_of(&state, WindowId::Readme), 5);
        apply(&mut state, DesktopAction::MinimizeWindow { window_id: WindowId::Readme });

        assert!(state.window(WindowId::Readme).expect("readme").is_minimized);
        assert_eq!(state.active_window_id(), Some(WindowId::Connect));
        assert_single_active(&state);
    }

    #[test]
    fn focus_clears_minimized_flag() {
        let mut state = DesktopState::default();
        apply(&mut state, DesktopAction::MinimizeWindow { window_id: WindowId::Connect });
        apply(&mut state, DesktopAction::FocusWindow { window_id: WindowId::Connect });
        assert!(!state.window(WindowId::Connect).expect("connect").is_minimized);
        assert_eq!(state.active_window_id(), Some(WindowId::Connect));
    }

    #[test]
    fn close_then_open_restores_above_every_previous_value() {
        let mut state = DesktopState::default();
        let previous_max = state.max_z_index();
        apply(&mut state, DesktopAction::CloseWindow { window_id: WindowId::Projects });
        assert_eq!(z_of(&state, WindowId::Projects), 2);
        assert!(!state.window(WindowId::Projects).expect("projects").is_open);

        apply(&mut state, DesktopAction::OpenWindow { window_id: WindowId::Projects });
        let projects = state.window(WindowId::Projects).expect("projects");
        assert!(projects.is_open);
        assert!(!projects.is_minimized);
        assert!(projects.z_index > previous_max);
    }

    #[test]
    fn closing_every_window_leaves_no_active_window() {
        let mut state = DesktopState::default();
        for window_id in WindowId::ALL {
            apply(&mut state, DesktopAction::CloseWindow { window_id });
        }
        assert_eq!(state.active_window_id(), None);
        assert!(state.taskbar_entries().is_empty());
    }

    #[test]
    fn reveal_opens_without_reordering() {
        let mut state = DesktopState::default();
        apply(&mut state, DesktopAction::RevealWindow { window_id: WindowId::Birthday });
        let birthday = state.window(WindowId::Birthday).expect("birthday");
        assert!(birthday.is_open);
        assert_eq!(birthday.z_index, 4);
        assert_eq!(state.active_window_id(), Some(WindowId::Birthday));
    }

    #[test]
    fn start_menu_toggles_and_closes_on_open() {
        let mut state = DesktopState::default();
        apply(&mut state, DesktopAction::ToggleStartMenu);
        assert!(state.start_menu_open);
        apply(&mut state, DesktopAction::OpenWindow { window_id: WindowId::Connect });
        assert!(!state.start_menu_open);
        apply(&mut state, DesktopAction::ToggleStartMenu);
        apply(&mut state, DesktopAction::CloseStartMenu);
        assert!(!state.start_menu_open);
    }

    #[test]
    fn unknown_window_is_reported_and_state_untouched() {
        let mut state = DesktopState::default();
        state.windows.retain(|w| w.id != WindowId::Birthday);
        let before = state.clone();

        let err = reduce_desktop(
            &mut state,
            DesktopAction::OpenWindow { window_id: WindowId::Birthday },
        )
        .expect_err("birthday missing");

        assert_eq!(err, ReducerError::WindowNotFound(WindowId::Birthday));
        assert_eq!(state, before);
    }

    #[test]
    fn random_action_sequences_keep_a_single_active_window() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut state = DesktopState::default();
        for _ in 0..2_000 {
            let window_id = WindowId::ALL[rng.gen_range(0..WindowId::ALL.len())];
            let action = match rng.gen_range(0..5) {
                0 => DesktopAction::OpenWindow { window_id },
                1 => DesktopAction::CloseWindow { window_id },
                2 => DesktopAction::MinimizeWindow { window_id },
                3 => DesktopAction::FocusWindow { window_id },
                _ => DesktopAction::ToggleTaskbarWindow { window_id },
            };
            let max_before = state.max_z_index();
            apply(&mut state, action);
            assert!(state.max_z_index() >= max_before);
            assert_single_active(&state);
        }
    }
}
