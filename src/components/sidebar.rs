use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::menu::{MenuController, MenuState};
use crate::shortcuts::Shortcut;
use crate::timer::PageTimer;

/// Sidebar menu with its overlay, auto-hiding toggle button and edge hotspot.
///
/// Also owns the page-wide keyboard shortcuts, since `Escape` closes the
/// menu and `Ctrl/Cmd+K` jumps to `search_input`.
#[component]
pub fn Sidebar(search_input: NodeRef<html::Input>, children: Children) -> impl IntoView {
    let state = RwSignal::new(MenuState::default());
    let menu = StoredValue::new_local(MenuController::new(PageTimer::default(), move |s| {
        let _ = state.try_set(s);
    }));

    let keydown = window_event_listener(ev::keydown, move |ev| {
        let Some(shortcut) = Shortcut::from_key(&ev.key(), ev.ctrl_key(), ev.meta_key()) else {
            return;
        };
        if shortcut.prevents_default() {
            ev.prevent_default();
        }
        match shortcut {
            Shortcut::FocusSearch => {
                if let Some(input) = search_input.get_untracked() {
                    let _ = input.focus();
                }
            }
            Shortcut::Dismiss => {
                menu.with_value(|m| m.close());
                if let Some(input) = search_input.get_untracked() {
                    let _ = input.blur();
                }
            }
        }
    });
    let scroll = window_event_listener(ev::scroll, move |_| menu.with_value(|m| m.scroll()));

    on_cleanup(move || {
        keydown.remove();
        scroll.remove();
    });

    view! {
        <div
            class="menu-hotspot"
            on:mouseenter=move |_| menu.with_value(|m| m.hotspot_activity())
            on:mousemove=move |_| menu.with_value(|m| m.hotspot_activity())
            on:mouseleave=move |_| menu.with_value(|m| m.hotspot_leave())
        ></div>
        <button
            id="menuBtn"
            class="menu-btn"
            class:visible=move || state.get().button_visible
            aria-label="Toggle menu"
            on:click=move |_| menu.with_value(|m| m.toggle())
            on:mouseenter=move |_| menu.with_value(|m| m.button_enter())
            on:mouseleave=move |_| menu.with_value(|m| m.button_leave())
        >
            "☰"
        </button>
        <div
            id="overlay"
            class="overlay"
            class:active=move || state.get().sidebar_open
            on:click=move |_| menu.with_value(|m| m.close())
        ></div>
        <aside id="sidebar" class="sidebar" class:active=move || state.get().sidebar_open>
            {children()}
        </aside>
    }
}
