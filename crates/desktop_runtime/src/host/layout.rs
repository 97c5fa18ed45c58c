use leptos::{ev, on_cleanup, window_event_listener, RwSignal, SignalGetUntracked, SignalSet};
use platform_host::is_compact_viewport;

use crate::host::DesktopHostContext;

pub(super) fn install_layout_tracking(host: DesktopHostContext, compact: RwSignal<bool>) {
    compact.set(is_compact_viewport(host.viewport_width_px()));

    let listener = window_event_listener(ev::resize, move |_| {
        let next = is_compact_viewport(host.viewport_width_px());
        if compact.get_untracked() != next {
            compact.set(next);
        }
    });
    on_cleanup(move || listener.remove());
}
