//! Sidebar menu and the auto-hiding button that opens it.
//!
//! The button slides in while the pointer is near the left edge hotspot
//! or while the page scrolls, and hides itself again after a quiet period
//! unless the sidebar is open or the pointer rests on it.

use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::timer::{Timer, TimerQueue, TimerSlot};

/// Delay before hiding the button after hotspot activity.
pub const HOTSPOT_HIDE_DELAY: Duration = Duration::from_millis(2500);
/// Delay before hiding the button after the page stops scrolling.
pub const SCROLL_HIDE_DELAY: Duration = Duration::from_millis(1500);
/// Delay before hiding the button after the sidebar is closed.
pub const CLOSE_HIDE_DELAY: Duration = Duration::from_millis(500);

/// What the page renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    /// Sidebar and overlay carry the `active` class.
    pub sidebar_open: bool,
    /// Menu button carries the `visible` class.
    pub button_visible: bool,
}

struct MenuInner<T: Timer> {
    state: Cell<MenuState>,
    button_hovered: Cell<bool>,
    hotspot_hovered: Cell<bool>,
    observer: Box<dyn Fn(MenuState)>,
    hide: TimerSlot<T>,
    scroll: TimerSlot<T>,
    close: TimerQueue<T>,
}

impl<T: Timer + 'static> MenuInner<T> {
    fn update(&self, f: impl FnOnce(&mut MenuState)) {
        let mut state = self.state.get();
        f(&mut state);
        if state != self.state.get() {
            self.state.set(state);
            (self.observer)(state);
        }
    }

    fn show_button(self: &Rc<Self>) {
        self.update(|s| s.button_visible = true);
        let weak = Rc::downgrade(self);
        self.hide.reschedule(HOTSPOT_HIDE_DELAY, move || {
            with_inner(&weak, |inner| {
                if !inner.state.get().sidebar_open
                    && !inner.button_hovered.get()
                    && !inner.hotspot_hovered.get()
                {
                    inner.update(|s| s.button_visible = false);
                }
            })
        });
    }

    /// Hide unless the sidebar is open or the button is hovered.
    fn hide_if_idle(&self) {
        if !self.state.get().sidebar_open && !self.button_hovered.get() {
            self.update(|s| s.button_visible = false);
        }
    }
}

fn with_inner<T: Timer>(weak: &Weak<MenuInner<T>>, f: impl FnOnce(&MenuInner<T>)) {
    if let Some(inner) = weak.upgrade() {
        f(&inner);
    }
}

/// Drives [`MenuState`] from pointer, scroll and keyboard events.
pub struct MenuController<T: Timer> {
    inner: Rc<MenuInner<T>>,
}

impl<T: Timer> Clone for MenuController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Timer + Clone + 'static> MenuController<T> {
    /// `observer` is called with the new state after every change.
    pub fn new(timer: T, observer: impl Fn(MenuState) + 'static) -> Self {
        Self {
            inner: Rc::new(MenuInner {
                state: Cell::new(MenuState::default()),
                button_hovered: Cell::new(false),
                hotspot_hovered: Cell::new(false),
                observer: Box::new(observer),
                hide: TimerSlot::new(timer.clone()),
                scroll: TimerSlot::new(timer.clone()),
                close: TimerQueue::new(timer, CLOSE_HIDE_DELAY),
            }),
        }
    }
}

impl<T: Timer + 'static> MenuController<T> {
    pub fn state(&self) -> MenuState {
        self.inner.state.get()
    }

    /// Menu button click.
    pub fn toggle(&self) {
        let opening = !self.inner.state.get().sidebar_open;
        if opening {
            self.inner.update(|s| {
                s.sidebar_open = true;
                s.button_visible = true;
            });
            return;
        }

        self.inner.update(|s| s.sidebar_open = false);
        if !self.inner.button_hovered.get() {
            let weak = Rc::downgrade(&self.inner);
            self.inner
                .close
                .push(move || with_inner(&weak, MenuInner::hide_if_idle));
        }
    }

    /// Overlay click or `Escape`.
    pub fn close(&self) {
        self.inner.update(|s| s.sidebar_open = false);
    }

    /// Pointer entered or moved inside the edge hotspot.
    pub fn hotspot_activity(&self) {
        self.inner.hotspot_hovered.set(true);
        self.inner.show_button();
    }

    pub fn hotspot_leave(&self) {
        self.inner.hotspot_hovered.set(false);
    }

    pub fn button_enter(&self) {
        self.inner.button_hovered.set(true);
        self.inner.update(|s| s.button_visible = true);
        self.inner.hide.cancel();
    }

    pub fn button_leave(&self) {
        self.inner.button_hovered.set(false);
        self.inner.show_button();
    }

    /// Page scrolled.
    pub fn scroll(&self) {
        self.inner.update(|s| s.button_visible = true);
        let weak = Rc::downgrade(&self.inner);
        self.inner.scroll.reschedule(SCROLL_HIDE_DELAY, move || {
            with_inner(&weak, MenuInner::hide_if_idle)
        });
    }
}
