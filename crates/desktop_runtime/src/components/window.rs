use super::*;
use super::{celebration::BirthdayCelebration, content::window_content};
use crate::{
    drag::FrameDrag,
    manifest::desktop_manifest,
    model::{WindowEntry, WindowPosition},
};
use leptos::leptos_dom::helpers::WindowListenerHandle;
use system_ui::{
    WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Extra stacking applied to full-screen compact frames so they cover the icon grid.
const COMPACT_Z_INDEX_BOOST: u64 = 50;

struct DragListeners {
    pointer_move: WindowListenerHandle,
    pointer_up: WindowListenerHandle,
}

impl DragListeners {
    fn remove(self) {
        self.pointer_move.remove();
        self.pointer_up.remove();
    }
}

/// Compact frames become full-screen sheets that stop above the taskbar.
fn frame_style(position: WindowPosition, z_index: u64, compact: bool) -> String {
    if compact {
        format!(
            "position:fixed;inset:0 0 2rem 0;z-index:{};",
            z_index.saturating_add(COMPACT_Z_INDEX_BOOST)
        )
    } else {
        format!(
            "position:absolute;left:{}px;top:{}px;z-index:{};",
            position.x, position.y, z_index
        )
    }
}

#[component]
/// Mounts a window while it is open; closing it disposes frame position and celebration state.
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let is_open = create_memo(move |_| {
        runtime
            .state
            .with(|s| s.window(window_id).map(|w| w.is_open).unwrap_or(false))
    });

    view! {
        <Show when=move || is_open.get() fallback=|| ()>
            <OpenDesktopWindow window_id=window_id />
        </Show>
    }
}

#[component]
fn OpenDesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let compact = runtime.compact;
    let entry = create_memo(move |_| runtime.state.with(|s| s.window(window_id).cloned()));
    let is_minimized = create_memo(move |_| {
        entry.with(|w| w.as_ref().map(|w| w.is_minimized).unwrap_or(false))
    });
    let is_active = create_memo(move |_| runtime.state.with(|s| s.is_window_active(window_id)));

    let default_position = entry
        .get_untracked()
        .map(|w| w.default_position)
        .unwrap_or_default();
    let frame = create_rw_signal(FrameDrag::new(default_position));
    let drag_listeners = store_value(None::<DragListeners>);

    let title = move || entry.with(|w| w.as_ref().map(|w| w.title.clone()).unwrap_or_default());
    let icon = move || {
        entry
            .with(|w| w.as_ref().and_then(|w: &WindowEntry| IconName::from_id(&w.icon_id)))
            .unwrap_or(IconName::TextFile)
    };
    let style = Signal::derive(move || {
        let z_index = entry.with(|w| w.as_ref().map(|w| w.z_index).unwrap_or(0));
        frame_style(frame.get().position(), z_index, compact.get())
    });

    let focus = move || runtime.dispatch_action(DesktopAction::FocusWindow { window_id });

    let end_drag = move || {
        if frame.with_untracked(FrameDrag::is_dragging) {
            frame.update(|f| {
                f.end();
            });
        }
        drag_listeners.update_value(|slot| {
            if let Some(listeners) = slot.take() {
                listeners.remove();
            }
        });
    };

    let begin_drag = Callback::new(move |event: web_sys::PointerEvent| {
        if event.button() != 0 {
            return;
        }
        event.stop_propagation();
        focus();
        if compact.get_untracked() {
            return;
        }
        event.prevent_default();
        end_drag();
        frame.update(|f| f.begin(pointer_from_pointer_event(&event)));

        let pointer_move = window_event_listener(ev::pointermove, move |event| {
            let mut next = frame.get_untracked();
            if next.update(pointer_from_pointer_event(&event)) {
                frame.set(next);
            }
        });
        let pointer_up = window_event_listener(ev::pointerup, move |_| end_drag());
        drag_listeners.set_value(Some(DragListeners {
            pointer_move,
            pointer_up,
        }));
    });

    on_cleanup(move || {
        drag_listeners.try_update_value(|slot| {
            if let Some(listeners) = slot.take() {
                listeners.remove();
            }
        });
    });

    // Control buttons raise the window like any frame press but never start a drag.
    let stop_pointer = Callback::new(move |event: web_sys::PointerEvent| {
        event.prevent_default();
        event.stop_propagation();
        focus();
    });
    let stop_mouse = Callback::new(|event: web_sys::MouseEvent| stop_mouse_event(&event));

    let celebration = (desktop_manifest().celebration.window == window_id)
        .then(|| view! { <BirthdayCelebration window_id=window_id /> });

    view! {
        {celebration}
        <Show when=move || !is_minimized.get() fallback=|| ()>
            <WindowFrame
                style=style
                aria_label=Signal::derive(title)
                active=Signal::derive(move || is_active.get())
                compact=Signal::derive(move || compact.get())
                on_pointerdown=Callback::new(move |_| focus())
            >
                <WindowTitleBar
                    active=Signal::derive(move || is_active.get())
                    draggable=Signal::derive(move || !compact.get())
                    on_pointerdown=begin_drag
                >
                    <WindowTitle icon=icon() title=title() />
                    <WindowControls>
                        <WindowControlButton
                            icon=IconName::WindowMinimize
                            aria_label="Minimizar".to_string()
                            on_pointerdown=stop_pointer
                            on_mousedown=stop_mouse
                            on_click=Callback::new(move |event: web_sys::MouseEvent| {
                                stop_mouse_event(&event);
                                runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
                            })
                        />
                        <WindowControlButton
                            icon=IconName::WindowMaximize
                            aria_label="Maximizar".to_string()
                            on_pointerdown=stop_pointer
                            on_mousedown=stop_mouse
                            on_click=stop_mouse
                        />
                        <WindowControlButton
                            icon=IconName::Dismiss
                            aria_label="Cerrar".to_string()
                            on_pointerdown=stop_pointer
                            on_mousedown=stop_mouse
                            on_click=Callback::new(move |event: web_sys::MouseEvent| {
                                stop_mouse_event(&event);
                                runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
                            })
                        />
                    </WindowControls>
                </WindowTitleBar>
                <WindowBody>{window_content(window_id)}</WindowBody>
            </WindowFrame>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn floating_frames_are_positioned_by_style() {
        assert_eq!(
            frame_style(WindowPosition { x: 150, y: -12 }, 7, false),
            "position:absolute;left:150px;top:-12px;z-index:7;"
        );
    }

    #[test]
    fn compact_frames_ignore_position_and_stack_higher() {
        assert_eq!(
            frame_style(WindowPosition { x: 970, y: 40 }, 3, true),
            "position:fixed;inset:0 0 2rem 0;z-index:53;"
        );
    }

    #[test]
    fn dragged_frames_follow_the_drag_position() {
        let mut drag = FrameDrag::new(WindowPosition { x: 150, y: 40 });
        drag.begin(PointerPosition { x: 160, y: 50 });
        assert!(drag.update(PointerPosition { x: 260, y: 90 }));
        assert_eq!(
            frame_style(drag.position(), 2, false),
            "position:absolute;left:250px;top:80px;z-index:2;"
        );
    }
}
