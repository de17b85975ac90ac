//! Single-threaded cancellable timers and the debouncer built on them.
//!
//! A [`Timer`] arms one-shot tasks and hands back a handle; dropping the
//! handle cancels the task. [`TimerSlot`] keeps at most one pending
//! handle, so re-arming it implicitly cancels the previous task.
//! [`TimerQueue`] lets every armed task run.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

/// A one-shot task scheduler.
pub trait Timer {
    /// Cancels the scheduled task when dropped.
    type Handle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Holds at most one pending task of a [`Timer`].
pub struct TimerSlot<T: Timer> {
    timer: T,
    pending: RefCell<Option<T::Handle>>,
}

impl<T: Timer> TimerSlot<T> {
    pub fn new(timer: T) -> Self {
        Self {
            timer,
            pending: RefCell::new(None),
        }
    }

    /// Cancel the pending task (if any) and arm `task` after `delay`.
    pub fn reschedule(&self, delay: Duration, task: impl FnOnce() + 'static) {
        let handle = self.timer.schedule(delay, Box::new(task));
        // The old handle is dropped after the borrow ends so that a
        // handle with a side-effecting Drop never re-enters the slot.
        let previous = self.pending.borrow_mut().replace(handle);
        drop(previous);
    }

    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
    }
}

/// Runs every pushed task after the same fixed delay, without cancelling
/// earlier ones. Pending tasks are cancelled when the queue is dropped.
pub struct TimerQueue<T: Timer> {
    timer: T,
    delay: Duration,
    pending: RefCell<VecDeque<T::Handle>>,
    fired: Rc<Cell<usize>>,
}

impl<T: Timer> TimerQueue<T> {
    pub fn new(timer: T, delay: Duration) -> Self {
        Self {
            timer,
            delay,
            pending: RefCell::new(VecDeque::new()),
            fired: Rc::new(Cell::new(0)),
        }
    }

    pub fn push(&self, task: impl FnOnce() + 'static) {
        // Equal delays fire in push order, so the oldest handles are the spent ones.
        let spent: Vec<T::Handle> = {
            let mut pending = self.pending.borrow_mut();
            let count = self.fired.replace(0).min(pending.len());
            pending.drain(..count).collect()
        };
        drop(spent);

        let fired = Rc::clone(&self.fired);
        let handle = self.timer.schedule(
            self.delay,
            Box::new(move || {
                fired.set(fired.get() + 1);
                task();
            }),
        );
        self.pending.borrow_mut().push_back(handle);
    }

    /// Number of handles still held, including ones whose task already ran.
    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Coalesces bursts of values into a single call carrying the last one.
pub struct Debouncer<T: Timer, V: 'static> {
    slot: TimerSlot<T>,
    wait: Duration,
    action: Rc<dyn Fn(V)>,
}

impl<T: Timer, V: 'static> Debouncer<T, V> {
    pub fn new(timer: T, wait: Duration, action: impl Fn(V) + 'static) -> Self {
        Self {
            slot: TimerSlot::new(timer),
            wait,
            action: Rc::new(action),
        }
    }

    /// Restart the quiet period; `value` replaces any value still waiting.
    pub fn trigger(&self, value: V) {
        let action = Rc::clone(&self.action);
        self.slot.reschedule(self.wait, move || action(value));
    }

    /// Drop the waiting value without running the action.
    pub fn cancel(&self) {
        self.slot.cancel();
    }
}

/// Timer backed by `setTimeout` in the browser.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

#[cfg(feature = "hydrate")]
impl Timer for BrowserTimer {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task)
    }
}

/// Timer used wherever the page is not running in a browser.
#[cfg(feature = "hydrate")]
pub type PageTimer = BrowserTimer;
#[cfg(not(feature = "hydrate"))]
pub type PageTimer = ManualTimer;

/// A virtual clock that only moves when [`ManualTimer::advance`] is called.
///
/// Clones share the same clock and task queue. Used by tests and by the
/// server render pass, where no input events ever fire.
#[derive(Clone, Default)]
pub struct ManualTimer {
    inner: Rc<RefCell<ManualClock>>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    tasks: Vec<ManualTask>,
}

struct ManualTask {
    id: u64,
    due: Duration,
    task: Box<dyn FnOnce()>,
}

/// Handle of a task armed on a [`ManualTimer`].
pub struct ManualHandle {
    id: u64,
    clock: std::rc::Weak<RefCell<ManualClock>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            // Already borrowed means the clock is running this very task.
            if let Ok(mut clock) = clock.try_borrow_mut() {
                clock.tasks.retain(|t| t.id != self.id);
            }
        }
    }
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of armed tasks.
    pub fn pending(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// Move the clock forward, running every task that becomes due in
    /// deadline order. Tasks armed while advancing run too if they fall
    /// inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.inner.borrow().now + by;
        loop {
            let next = {
                let mut clock = self.inner.borrow_mut();
                let due = clock
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(idx, _)| idx);
                due.map(|idx| {
                    let task = clock.tasks.remove(idx);
                    clock.now = task.due;
                    task
                })
            };
            match next {
                Some(task) => (task.task)(),
                None => break,
            }
        }
        self.inner.borrow_mut().now = target;
    }
}

impl Timer for ManualTimer {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        let mut clock = self.inner.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.tasks.push(ManualTask { id, due, task });
        ManualHandle {
            id,
            clock: Rc::downgrade(&self.inner),
        }
    }
}
