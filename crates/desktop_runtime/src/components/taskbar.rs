use super::*;
use leptos::{html, leptos_dom::helpers::WindowListenerHandle};
use system_ui::{
    Button, ButtonSize, ClockTray, Icon, IconSize, MenuItem, MenuSeparator, MenuSurface, Taskbar,
    TaskbarButton, TaskbarSection,
};
use wasm_bindgen::JsCast;

/// An open start menu closes on any mousedown that lands outside the taskbar.
fn dismisses_start_menu(menu_open: bool, inside_taskbar: bool) -> bool {
    menu_open && !inside_taskbar
}

fn event_inside(root: &web_sys::Node, event: &web_sys::MouseEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .map(|node| root.contains(Some(&node)))
        .unwrap_or(false)
}

#[component]
pub(super) fn DesktopTaskbar(on_shutdown: Option<Callback<()>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let clock_now = create_rw_signal(LocalClockReading::now());
    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(LocalClockReading::now()),
        CLOCK_REFRESH,
    ) {
        on_cleanup(move || interval.clear());
    }
    let clock_text = Signal::derive(move || format_taskbar_clock(clock_now.get()));

    let start_menu_open = create_memo(move |_| state.with(|s| s.start_menu_open));

    let taskbar_ref = create_node_ref::<html::Footer>();
    let outside_click_listener = store_value(None::<WindowListenerHandle>);
    create_effect(move |_| {
        if start_menu_open.get() {
            if outside_click_listener.with_value(Option::is_none) {
                let listener = window_event_listener(ev::mousedown, move |event| {
                    let inside_taskbar = taskbar_ref
                        .get_untracked()
                        .map(|taskbar| event_inside(&taskbar, &event))
                        .unwrap_or(false);
                    let menu_open = state.with_untracked(|s| s.start_menu_open);
                    if dismisses_start_menu(menu_open, inside_taskbar) {
                        runtime.dispatch_action(DesktopAction::CloseStartMenu);
                    }
                });
                outside_click_listener.set_value(Some(listener));
            }
        } else {
            outside_click_listener.update_value(|slot| {
                if let Some(listener) = slot.take() {
                    listener.remove();
                }
            });
        }
    });
    on_cleanup(move || {
        outside_click_listener.try_update_value(|slot| {
            if let Some(listener) = slot.take() {
                listener.remove();
            }
        });
    });

    let shutdown = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::CloseStartMenu);
        if let Some(on_shutdown) = on_shutdown {
            on_shutdown.call(());
        }
    });

    view! {
        <Taskbar aria_label="Barra de tareas" node_ref=taskbar_ref>
            <Show when=move || start_menu_open.get() fallback=|| ()>
                <MenuSurface id="desktop-start-menu" role="menu" aria_label="Menú Inicio">
                    <div data-ui-slot="start-menu-brand" aria-hidden="true">
                        <span>"SimpleDevs"</span>
                    </div>
                    <div data-ui-slot="start-menu-items">
                        <MenuItem
                            icon=IconName::Folder
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(DesktopAction::OpenWindow {
                                    window_id: WindowId::Projects,
                                });
                            })
                        >
                            "Proyectos"
                        </MenuItem>
                        <MenuItem
                            icon=IconName::Mail
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(DesktopAction::OpenWindow {
                                    window_id: WindowId::Connect,
                                });
                            })
                        >
                            "Contacto"
                        </MenuItem>
                        <MenuSeparator />
                        <MenuItem icon=IconName::Shutdown on_click=shutdown>
                            "Apagar..."
                        </MenuItem>
                    </div>
                </MenuSurface>
            </Show>

            <TaskbarButton
                ui_slot="start-button"
                icon=IconName::StartLogo
                aria_label="Inicio".to_string()
                aria_expanded=Signal::derive(move || start_menu_open.get())
                pressed=Signal::derive(move || start_menu_open.get())
                on_click=Callback::new(move |_| runtime.dispatch_action(DesktopAction::ToggleStartMenu))
            >
                "Inicio"
            </TaskbarButton>

            <TaskbarSection ui_slot="quick-launch" aria_label="Inicio rápido">
                <Button ui_slot="quick-launch-button" size=ButtonSize::Sm title="simpleDevs".to_string()>
                    <Icon icon=IconName::Computer size=IconSize::Sm />
                </Button>
            </TaskbarSection>

            <TaskbarSection ui_slot="running-windows" aria_label="Ventanas abiertas">
                <For
                    each=move || state.with(|s| s.taskbar_entries())
                    key=|entry| entry.window_id
                    let:entry
                >
                    {{
                        let window_id = entry.window_id;
                        let icon = IconName::from_id(&entry.icon_id).unwrap_or(IconName::TextFile);
                        view! {
                            <TaskbarButton
                                icon=icon
                                title=entry.title.clone()
                                aria_label=entry.title.clone()
                                pressed=Signal::derive(move || {
                                    state.with(|s| s.is_window_active(window_id))
                                })
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::ToggleTaskbarWindow {
                                        window_id,
                                    });
                                })
                            >
                                {entry.title.clone()}
                            </TaskbarButton>
                        }
                    }}
                </For>
            </TaskbarSection>

            <ClockTray time_text=clock_text aria_label=Signal::derive(move || clock_text.get()) />
        </Taskbar>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mousedown_inside_taskbar_keeps_start_menu_open() {
        // Menu items and the start button live inside the taskbar; their click must still land.
        assert!(!dismisses_start_menu(true, true));
    }

    #[test]
    fn mousedown_outside_taskbar_closes_open_start_menu() {
        assert!(dismisses_start_menu(true, false));
        assert!(!dismisses_start_menu(false, false));
    }
}
