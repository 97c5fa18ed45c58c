use std::time::Duration;

use leptos::{logging, on_cleanup, set_timeout_with_handle, Callable, Callback};
use platform_host::{CalendarDate, ConfettiBurst, LocalClockReading};

use crate::{
    host::DesktopHostContext,
    manifest::{desktop_manifest, CelebrationRule},
    reducer::DesktopAction,
};

/// Whether `date` is the configured celebration day, ignoring the year.
pub fn is_celebration_day(date: CalendarDate, rule: &CelebrationRule) -> bool {
    date.is_anniversary_of(rule.month, rule.day)
}

pub(super) fn install_celebration_date_gate(
    host: DesktopHostContext,
    dispatch: Callback<DesktopAction>,
) {
    let rule = desktop_manifest().celebration;
    let today = LocalClockReading::now().date();
    if !is_celebration_day(today, &rule) {
        return;
    }

    logging::log!(
        "celebration day {}/{}: revealing `{}`",
        rule.month,
        rule.day,
        rule.window
    );
    dispatch.call(DesktopAction::RevealWindow {
        window_id: rule.window,
    });

    match set_timeout_with_handle(
        move || host.fire_burst(&ConfettiBurst::finale()),
        Duration::from_millis(rule.initial_burst_delay_ms),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("celebration greeting timer failed: {err:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: u32, day: u32) -> CalendarDate {
        CalendarDate {
            year: 2027,
            month,
            day,
        }
    }

    #[test]
    fn only_january_31_is_a_celebration_day() {
        let rule = desktop_manifest().celebration;
        assert!(is_celebration_day(date(1, 31), &rule));
        assert!(!is_celebration_day(date(1, 30), &rule));
        assert!(!is_celebration_day(date(2, 1), &rule));
        assert!(!is_celebration_day(date(12, 31), &rule));
    }
}
