//! Pauses CSS animations inside an element while it is scrolled out of view.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::motion::visibility::{IntersectionViewport, ViewportObserver};

/// Class that sets `animation-play-state: paused` on an element and its
/// descendants (see `index.html`).
pub const PAUSED_CLASS: &str = "motion-paused";

/// Tracks whether animations should run. Only transitions are reported.
#[derive(Clone, Copy, Debug, Default)]
pub struct PauseGate {
    paused: bool,
}

impl PauseGate {
    /// `Some(paused)` when the state changes, `None` otherwise.
    pub fn record(&mut self, fraction: f64) -> Option<bool> {
        let paused = fraction <= 0.0;
        if paused == self.paused {
            return None;
        }
        self.paused = paused;
        Some(paused)
    }
}

fn set_paused(element: &Element, paused: bool) {
    let classes = element.class_list();
    let result = if paused { classes.add_1(PAUSED_CLASS) } else { classes.remove_1(PAUSED_CLASS) };
    if let Err(e) = result {
        log::warn!("Could not toggle {}: {:?}", PAUSED_CLASS, e);
    }
}

#[hook]
pub fn use_pause_offscreen(node: NodeRef) {
    use_effect_with_deps(
        |node| {
            let watched = node.cast::<Element>().and_then(|element| {
                let viewport = Rc::new(IntersectionViewport::new(Some(config::IMAGE_ROOT_MARGIN)));
                let gate = Cell::new(PauseGate::default());
                let target = element.clone();
                let callback = move |fraction: f64| {
                    let mut next = gate.get();
                    if let Some(paused) = next.record(fraction) {
                        set_paused(&target, paused);
                    }
                    gate.set(next);
                };
                match viewport.observe(&element, 0.0, Box::new(callback)) {
                    Ok(()) => Some((viewport, element)),
                    Err(e) => {
                        log::warn!("{}; animations keep running off screen", e);
                        None
                    }
                }
            });
            move || {
                if let Some((viewport, element)) = watched {
                    viewport.unobserve(&element);
                    set_paused(&element, false);
                }
            }
        },
        node,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_transitions() {
        let mut gate = PauseGate::default();
        assert_eq!(gate.record(0.4), None);
        assert_eq!(gate.record(0.0), Some(true));
        assert_eq!(gate.record(0.0), None);
        assert_eq!(gate.record(0.01), Some(false));
        assert_eq!(gate.record(1.0), None);
    }
}
