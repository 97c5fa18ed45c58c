//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived registry signal, the dispatch callback, and host bootstrap
//! wiring. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    host::DesktopHostContext,
    model::DesktopState,
    reducer::{reduce_desktop, DesktopAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for particle effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive window registry signal.
    pub state: RwSignal<DesktopState>,
    /// Whether the viewport is below the compact layout breakpoint.
    pub compact: RwSignal<bool>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and runs boot-time host wiring.
pub fn DesktopProvider(
    /// Host bundle override; the browser host is used when omitted.
    #[prop(optional)]
    host: Option<DesktopHostContext>,
    children: Children,
) -> impl IntoView {
    let host = store_value(host.unwrap_or_default());
    let state = create_rw_signal(DesktopState::default());
    let compact = create_rw_signal(false);

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let previous = desktop.clone();
        match reduce_desktop(&mut desktop, action) {
            Ok(()) => {
                if desktop != previous {
                    state.set(desktop);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        compact,
        dispatch,
    };
    provide_context(runtime);

    let boot_host = host.get_value();
    boot_host.install_layout_tracking(compact);
    boot_host.install_celebration_date_gate(dispatch);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
