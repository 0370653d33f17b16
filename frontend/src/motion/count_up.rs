use std::rc::Rc;

use yew::prelude::*;

use super::scheduler::{BrowserScheduler, ChainedTimer, Scheduler};

/// A finite count from zero to `target` in `steps` discrete ticks spread over
/// `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountUp {
    pub target: u32,
    pub steps: u32,
    pub duration_ms: u32,
}

impl CountUp {
    pub fn new(target: u32, steps: u32, duration_ms: u32) -> Self {
        Self { target, steps, duration_ms }
    }

    /// Value shown after `step` ticks. Never overshoots; the last tick lands on target.
    pub fn value_at(&self, step: u32) -> u32 {
        if step >= self.steps {
            return self.target;
        }
        (u64::from(self.target) * u64::from(step) / u64::from(self.steps)) as u32
    }

    pub fn tick_ms(&self) -> u32 {
        if self.steps == 0 {
            return 0;
        }
        self.duration_ms / self.steps
    }

    /// Every value emitted by a full run, in order.
    #[cfg(test)]
    pub fn values(&self) -> Vec<u32> {
        if self.steps == 0 {
            return vec![self.target];
        }
        (1..=self.steps).map(|step| self.value_at(step)).collect()
    }
}

/// One running count. Dropping it stops further emissions.
pub struct CountUpRun {
    _timer: Option<ChainedTimer>,
}

impl CountUpRun {
    pub fn start(scheduler: Rc<dyn Scheduler>, spec: CountUp, on_value: impl Fn(u32) + 'static) -> Self {
        if spec.steps == 0 {
            on_value(spec.target);
            return Self { _timer: None };
        }

        let tick = spec.tick_ms();
        let mut step = 0;
        let timer = ChainedTimer::start(scheduler, tick, move || {
            step += 1;
            on_value(spec.value_at(step));
            (step < spec.steps).then_some(tick)
        });
        Self { _timer: Some(timer) }
    }
}

/// Counts up once `active` turns true. Stays at zero until then.
#[hook]
pub fn use_count_up(spec: CountUp, active: bool) -> u32 {
    let value = use_state_eq(|| 0u32);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |(spec, active)| {
                let run = active.then(|| {
                    let value = value.clone();
                    CountUpRun::start(Rc::new(BrowserScheduler), *spec, move |v| value.set(v))
                });
                move || drop(run)
            },
            (spec, active),
        );
    }

    *value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::scheduler::testing::ManualScheduler;
    use std::cell::RefCell;

    #[test]
    fn sequence_is_monotonic_bounded_and_exact() {
        for target in [0, 1, 5, 15, 50, 100, 997, 10_000] {
            for steps in [1, 2, 3, 7, 60, 120] {
                let values = CountUp::new(target, steps, 2000).values();
                assert_eq!(values.len(), steps as usize);
                assert!(values.windows(2).all(|w| w[0] <= w[1]), "T={target} S={steps}");
                assert!(values.iter().all(|v| *v <= target));
                assert_eq!(values.last().copied(), Some(target));
            }
        }
    }

    #[test]
    fn intermediate_values_are_floored() {
        let spec = CountUp::new(50, 60, 2000);
        assert_eq!(spec.value_at(1), 0);
        assert_eq!(spec.value_at(30), 25);
        assert_eq!(spec.value_at(59), 49);
        assert_eq!(spec.value_at(60), 50);
        assert_eq!(spec.tick_ms(), 33);
    }

    #[test]
    fn zero_steps_emits_target_immediately() {
        let scheduler = ManualScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _run = {
            let seen = seen.clone();
            CountUpRun::start(Rc::new(scheduler.clone()), CountUp::new(15, 0, 2000), move |v| {
                seen.borrow_mut().push(v)
            })
        };
        assert_eq!(*seen.borrow(), vec![15]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn full_run_emits_every_tick_and_lands_on_target() {
        let scheduler = ManualScheduler::new();
        let spec = CountUp::new(100, 60, 2000);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _run = {
            let seen = seen.clone();
            CountUpRun::start(Rc::new(scheduler.clone()), spec, move |v| seen.borrow_mut().push(v))
        };
        scheduler.advance(u64::from(spec.tick_ms()) * 60);
        assert_eq!(*seen.borrow(), spec.values());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn dropped_run_stops_emitting() {
        let scheduler = ManualScheduler::new();
        let spec = CountUp::new(50, 60, 2000);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let run = {
            let seen = seen.clone();
            CountUpRun::start(Rc::new(scheduler.clone()), spec, move |v| seen.borrow_mut().push(v))
        };
        scheduler.advance(u64::from(spec.tick_ms()) * 10);
        assert_eq!(seen.borrow().len(), 10);

        drop(run);
        scheduler.advance(10_000);
        assert_eq!(seen.borrow().len(), 10);
        assert_eq!(scheduler.pending(), 0);
    }
}
