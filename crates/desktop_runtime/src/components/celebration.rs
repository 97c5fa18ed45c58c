use super::*;
use leptos::leptos_dom::helpers::IntervalHandle;
use platform_host::unix_time_ms_now;

use crate::{celebration::CelebrationTrigger, manifest::desktop_manifest};

#[component]
/// Runs the celebration once per mount, the first time the window is visible.
///
/// Stays mounted while the window is minimized so a restore cannot restart it; minimizing or
/// unmounting cancels the sequence.
pub(super) fn BirthdayCelebration(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let rule = desktop_manifest().celebration;
    let trigger = store_value(CelebrationTrigger::new(rule));
    let interval = store_value(None::<IntervalHandle>);
    let visible = create_memo(move |_| {
        runtime
            .state
            .with(|s| s.window(window_id).map(|w| w.is_visible()).unwrap_or(false))
    });

    let stop_interval = move || {
        if let Some(handle) = interval.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };

    create_effect(move |_| {
        let is_visible = visible.get();
        let effects = runtime.host.get_value().particle_effect_service();
        let started = trigger
            .try_update_value(|t| t.observe_visibility(is_visible, unix_time_ms_now(), effects.as_ref()))
            .unwrap_or(false);
        if !started {
            if !is_visible {
                stop_interval();
            }
            return;
        }

        let tick = move || {
            let effects = runtime.host.get_value().particle_effect_service();
            let keep_ticking = trigger
                .try_update_value(|t| {
                    t.tick(unix_time_ms_now(), &mut rand::thread_rng(), effects.as_ref())
                })
                .unwrap_or(false);
            if !keep_ticking {
                stop_interval();
            }
        };
        match set_interval_with_handle(tick, Duration::from_millis(rule.tick_ms)) {
            Ok(handle) => interval.set_value(Some(handle)),
            Err(err) => logging::warn!("celebration interval failed: {err:?}"),
        }
    });

    on_cleanup(move || {
        trigger.try_update_value(|t| t.cancel());
        stop_interval();
    });
}
