//! Timer scheduling with first-class cancellation.
//!
//! Every animation loop on the page is a chain of one-shot timers: a tick runs,
//! then arms the next one. The [`TaskHandle`] returned for each armed timer
//! cancels it when dropped, so a component only has to drop its handle on
//! unmount to guarantee nothing fires afterwards.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

/// Cancels the scheduled task when dropped or when [`TaskHandle::cancel`] is called.
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle;
}

/// `setTimeout` through gloo. Dropping a gloo `Timeout` clears it.
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle {
        let timeout = Timeout::new(delay_ms, task);
        TaskHandle::new(move || drop(timeout))
    }
}

type StepFn = Rc<RefCell<dyn FnMut() -> Option<u32>>>;
type Slot = Rc<RefCell<Option<TaskHandle>>>;

/// A self-rearming timer. `step` runs on each tick and returns the delay until
/// the next tick, or `None` to stop. Dropping the timer cancels the pending tick.
pub struct ChainedTimer {
    slot: Slot,
}

impl ChainedTimer {
    pub fn start(
        scheduler: Rc<dyn Scheduler>,
        first_delay_ms: u32,
        step: impl FnMut() -> Option<u32> + 'static,
    ) -> Self {
        let slot: Slot = Rc::new(RefCell::new(None));
        let step: StepFn = Rc::new(RefCell::new(step));
        arm(scheduler, first_delay_ms, Rc::downgrade(&slot), step);
        Self { slot }
    }

    pub fn is_running(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

fn arm(scheduler: Rc<dyn Scheduler>, delay_ms: u32, slot: Weak<RefCell<Option<TaskHandle>>>, step: StepFn) {
    let Some(owner) = slot.upgrade() else {
        return;
    };

    let next_scheduler = scheduler.clone();
    let handle = scheduler.schedule(
        delay_ms,
        Box::new(move || {
            // owner dropped between arming and firing
            if slot.upgrade().is_none() {
                return;
            }
            let next = (&mut *step.borrow_mut())();
            match next {
                Some(delay) => arm(next_scheduler, delay, slot, step),
                None => {
                    if let Some(owner) = slot.upgrade() {
                        owner.borrow_mut().take();
                    }
                }
            }
        }),
    );
    *owner.borrow_mut() = Some(handle);
}

#[cfg(test)]
pub mod testing {
    use super::*;

    struct Pending {
        id: u64,
        due: u64,
        task: Task,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        pending: Vec<Pending>,
    }

    /// Virtual clock for tests. Nothing runs until [`ManualScheduler::advance`].
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.clock.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.clock.borrow().pending.len()
        }

        /// Runs every task that comes due within `ms`, in due order, including
        /// tasks armed by the tasks being run.
        pub fn advance(&self, ms: u64) {
            let target = self.now() + ms;
            loop {
                let task = {
                    let mut clock = self.clock.borrow_mut();
                    let next = clock
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.id))
                        .map(|(index, _)| index);
                    match next {
                        Some(index) => {
                            let pending = clock.pending.remove(index);
                            clock.now = pending.due;
                            pending.task
                        }
                        None => break,
                    }
                };
                task();
            }
            self.clock.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + u64::from(delay_ms);
            clock.pending.push(Pending { id, due, task });

            let weak = Rc::downgrade(&self.clock);
            TaskHandle::new(move || {
                if let Some(clock) = weak.upgrade() {
                    clock.borrow_mut().pending.retain(|p| p.id != id);
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ManualScheduler;
    use super::*;
    use std::cell::Cell;

    #[test]
    fn dropping_the_handle_cancels_the_task() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let handle = {
            let fired = fired.clone();
            scheduler.schedule(100, Box::new(move || fired.set(true)))
        };
        drop(handle);
        scheduler.advance(1_000);
        assert!(!fired.get());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn explicit_cancel_stops_only_that_task() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let (cancelled, kept) = {
            let first = fired.clone();
            let second = fired.clone();
            (
                scheduler.schedule(100, Box::new(move || first.set(first.get() + 1))),
                scheduler.schedule(100, Box::new(move || second.set(second.get() + 10))),
            )
        };
        cancelled.cancel();
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(100);
        assert_eq!(fired.get(), 10);
        drop(kept);
    }

    #[test]
    fn chained_timer_rearms_until_step_says_stop() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let timer = {
            let ticks = ticks.clone();
            ChainedTimer::start(Rc::new(scheduler.clone()), 10, move || {
                ticks.set(ticks.get() + 1);
                (ticks.get() < 3).then_some(10)
            })
        };
        scheduler.advance(25);
        assert_eq!(ticks.get(), 2);
        assert!(timer.is_running());
        scheduler.advance(100);
        assert_eq!(ticks.get(), 3);
        assert!(!timer.is_running());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn nothing_fires_after_the_owner_is_dropped() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let timer = {
            let ticks = ticks.clone();
            ChainedTimer::start(Rc::new(scheduler.clone()), 10, move || {
                ticks.set(ticks.get() + 1);
                Some(10)
            })
        };
        scheduler.advance(35);
        assert_eq!(ticks.get(), 3);

        drop(timer);
        scheduler.advance(1_000);
        assert_eq!(ticks.get(), 3);
        assert_eq!(scheduler.pending(), 0);
    }
}
