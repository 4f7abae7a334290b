//! One-shot timers and debouncing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::error::UiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

pub type Task = Box<dyn FnOnce()>;

/// Runs tasks after a delay on the current thread
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Result<TimerId, UiError>;

    /// Cancelling a timer that already fired is a no-op
    fn cancel(&self, id: TimerId);
}

struct Pending {
    id: TimerId,
    due: Duration,
    task: Task,
}

/// Scheduler driven by an explicit clock, for tests and headless runs
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    pending: RefCell<Vec<Pending>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Move the clock forward, running every task that falls due in order.
    /// Tasks may schedule further tasks; those run too if they fall due.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let earliest = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.id.0))
                    .map(|(i, _)| i);
                earliest.map(|i| pending.remove(i))
            };
            match next {
                Some(p) => {
                    self.now.set(p.due);
                    (p.task)();
                }
                None => break,
            }
        }
        self.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Result<TimerId, UiError> {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.pending.borrow_mut().push(Pending {
            id,
            due: self.now.get() + delay,
            task,
        });
        Ok(id)
    }

    fn cancel(&self, id: TimerId) {
        self.pending.borrow_mut().retain(|p| p.id != id);
    }
}

/// Coalesces bursts of calls into one run after a quiet period.
///
/// Each call cancels the previously scheduled run, so only the most recent
/// task ever executes.
pub struct Debouncer {
    scheduler: Rc<dyn Scheduler>,
    delay: Duration,
    pending: Rc<Cell<Option<TimerId>>>,
}

impl Debouncer {
    pub fn new(scheduler: Rc<dyn Scheduler>, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn call(&self, task: impl FnOnce() + 'static) {
        self.cancel();
        let pending = Rc::clone(&self.pending);
        let scheduled = self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                pending.set(None);
                task();
            }),
        );
        match scheduled {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => log::warn!("debounced task not scheduled: {e}"),
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}
