use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use system_ui::Button;

use crate::power::{PowerState, BOOT_DELAY, SHUTDOWN_DELAY};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="simpleDevs" />
        <Meta
            name="description"
            content="simpleDevs: software libre hecho por estudiantes de la Universidad Nacional de San Luis."
        />

        <Router>
            <Routes>
                <Route path="" view=DesktopEntry />
                <Route path="/*any" view=DesktopEntry />
            </Routes>
        </Router>
    }
}

#[component]
/// Desktop wrapped in the power/CRT lifecycle. Restarting remounts the runtime from defaults.
pub fn DesktopEntry() -> impl IntoView {
    let power = create_rw_signal(PowerState::Booting);

    if let Ok(handle) = set_timeout_with_handle(
        move || power.update(|state| *state = state.boot_complete()),
        BOOT_DELAY,
    ) {
        on_cleanup(move || handle.clear());
    }

    let shutdown_timer = store_value(None::<TimeoutHandle>);
    let shutdown = Callback::new(move |()| {
        let next = power.get_untracked().request_shutdown();
        if next != PowerState::ShuttingDown {
            return;
        }
        power.set(next);
        match set_timeout_with_handle(
            move || power.update(|state| *state = state.shutdown_complete()),
            SHUTDOWN_DELAY,
        ) {
            Ok(handle) => shutdown_timer.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("shutdown timer failed: {err:?}");
                power.set(PowerState::Off);
            }
        }
    });
    on_cleanup(move || {
        if let Some(handle) = shutdown_timer.try_get_value().flatten() {
            handle.clear();
        }
    });

    let restart = Callback::new(move |_: ev::MouseEvent| {
        power.update(|state| *state = state.restart());
    });
    let desktop_mounted = create_memo(move |_| power.get().desktop_mounted());

    view! {
        <Show
            when=move || desktop_mounted.get()
            fallback=move || view! { <ShutdownScreen on_restart=restart /> }
        >
            <div class=move || format!("site-root {}", power.get().crt_class())>
                <div class="crt-overlay" aria-hidden="true"></div>
                <DesktopProvider>
                    <DesktopShell on_shutdown=shutdown />
                </DesktopProvider>
            </div>
        </Show>
    }
}

#[component]
fn ShutdownScreen(on_restart: Callback<ev::MouseEvent>) -> impl IntoView {
    view! {
        <div class="shutdown-screen" role="alert">
            <p>"Ahora puede apagar el equipo de forma segura."</p>
            <Button on_click=on_restart>"Reiniciar"</Button>
        </div>
    }
}
