//! "Became visible" flags for entrance animations.
//!
//! Each mounted element gets its own observation. The flag it drives starts
//! false, flips to true the first time enough of the element is on screen, and
//! never goes back. "Enough" is measured against the smaller of the element and
//! the viewport, so sections taller than the screen still reveal.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::browser;
use crate::config;

/// Evenly spaced raw intersection ratios the browser reports at.
const RATIO_STEPS: u32 = 20;

#[derive(Debug, thiserror::Error)]
pub enum ObserveError {
    #[error("intersection observer could not be created: {0}")]
    Unavailable(String),
}

/// Monotonic visibility flag.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityLatch {
    threshold: f64,
    visible: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, visible: false }
    }

    /// Feeds one visible-fraction sample. Returns true only for the sample that
    /// flips the latch.
    pub fn record(&mut self, ratio: f64) -> bool {
        if self.is_visible() || ratio <= 0.0 || ratio < self.threshold {
            return false;
        }
        self.visible = true;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// How much of an element is on screen, as a share of the most that can be:
/// the element's own height, or the viewport's when the element is taller.
pub fn visible_fraction(visible_height: f64, target_height: f64, root_height: f64) -> f64 {
    let span = if root_height > 0.0 { target_height.min(root_height) } else { target_height };
    if visible_height <= 0.0 || span <= 0.0 {
        return 0.0;
    }
    (visible_height / span).min(1.0)
}

/// Raw ratio at which `visible_fraction` reaches `threshold` for an element of
/// this height.
fn raw_ratio_for(threshold: f64, target_height: f64, root_height: f64) -> Option<f64> {
    if target_height <= 0.0 || root_height <= 0.0 || target_height <= root_height {
        return None;
    }
    Some(threshold * root_height / target_height)
}

/// Ratios handed to `IntersectionObserver`: a fixed grid plus the points where
/// this element crosses `threshold`.
fn observer_thresholds(threshold: f64, target_height: f64, root_height: f64) -> Vec<f64> {
    let mut steps: Vec<f64> = (0..=RATIO_STEPS).map(|i| f64::from(i) / f64::from(RATIO_STEPS)).collect();
    steps.push(threshold);
    steps.extend(raw_ratio_for(threshold, target_height, root_height));
    steps.retain(|r| (0.0..=1.0).contains(r));
    steps.sort_by(|a, b| a.total_cmp(b));
    steps.dedup();
    steps
}

/// Something that reports how much of a target is inside the viewport, as a
/// [`visible_fraction`].
pub trait ViewportObserver {
    type Target: Clone;

    fn observe(
        &self,
        target: &Self::Target,
        threshold: f64,
        callback: Box<dyn Fn(f64)>,
    ) -> Result<(), ObserveError>;

    fn unobserve(&self, target: &Self::Target);
}

/// A one-shot observation of a single target. Stops observing as soon as the
/// target has been seen, and when dropped.
pub struct VisibilityWatch<O: ViewportObserver> {
    observer: Rc<O>,
    target: O::Target,
    active: Rc<Cell<bool>>,
}

impl<O> VisibilityWatch<O>
where
    O: ViewportObserver + 'static,
    O::Target: 'static,
{
    pub fn start(
        observer: Rc<O>,
        target: O::Target,
        threshold: f64,
        on_visible: impl FnOnce() + 'static,
    ) -> Self {
        let active = Rc::new(Cell::new(true));
        let latch = RefCell::new(VisibilityLatch::new(threshold));
        let on_visible = Rc::new(RefCell::new(Some(on_visible)));

        let callback = {
            let active = active.clone();
            let on_visible = on_visible.clone();
            let observer: Weak<O> = Rc::downgrade(&observer);
            let target = target.clone();
            move |ratio: f64| {
                if !active.get() || !latch.borrow_mut().record(ratio) {
                    return;
                }
                active.set(false);
                if let Some(observer) = observer.upgrade() {
                    observer.unobserve(&target);
                }
                if let Some(notify) = on_visible.borrow_mut().take() {
                    notify();
                }
            }
        };

        if let Err(e) = observer.observe(&target, threshold, Box::new(callback)) {
            log::warn!("{}; showing content without waiting", e);
            active.set(false);
            if let Some(notify) = on_visible.borrow_mut().take() {
                notify();
            }
        }

        Self { observer, target, active }
    }
}

impl<O: ViewportObserver> VisibilityWatch<O> {
    pub fn is_pending(&self) -> bool {
        self.active.get()
    }
}

impl<O: ViewportObserver> Drop for VisibilityWatch<O> {
    fn drop(&mut self) {
        if self.is_pending() {
            self.active.set(false);
            self.observer.unobserve(&self.target);
        }
    }
}

struct Registration {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

/// `IntersectionObserver` backed viewport, one browser observer per instance.
pub struct IntersectionViewport {
    root_margin: Option<&'static str>,
    registration: RefCell<Option<Registration>>,
}

impl IntersectionViewport {
    pub fn new(root_margin: Option<&'static str>) -> Self {
        Self { root_margin, registration: RefCell::new(None) }
    }
}

impl ViewportObserver for IntersectionViewport {
    type Target = Element;

    fn observe(
        &self,
        target: &Element,
        threshold: f64,
        callback: Box<dyn Fn(f64)>,
    ) -> Result<(), ObserveError> {
        let closure = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    callback(0.0);
                    continue;
                }
                let root_height = entry
                    .root_bounds()
                    .map(|bounds| bounds.height())
                    .or_else(browser::viewport_height)
                    .unwrap_or(0.0);
                callback(visible_fraction(
                    entry.intersection_rect().height(),
                    entry.bounding_client_rect().height(),
                    root_height,
                ));
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let thresholds: Array = observer_thresholds(
            threshold,
            target.get_bounding_client_rect().height(),
            browser::viewport_height().unwrap_or(0.0),
        )
        .into_iter()
        .map(JsValue::from_f64)
        .collect();

        let options = IntersectionObserverInit::new();
        options.set_threshold(&thresholds);
        if let Some(margin) = self.root_margin {
            options.set_root_margin(margin);
        }

        let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
            .map_err(|e| ObserveError::Unavailable(format!("{:?}", e)))?;
        observer.observe(target);

        *self.registration.borrow_mut() = Some(Registration { observer, _callback: closure });
        Ok(())
    }

    fn unobserve(&self, target: &Element) {
        // the closure stays alive until the viewport itself is dropped,
        // unobserve may be called from inside it
        if let Some(registration) = self.registration.borrow().as_ref() {
            registration.observer.unobserve(target);
            registration.observer.disconnect();
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InViewOptions {
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
}

impl InViewOptions {
    pub fn section() -> Self {
        Self { threshold: config::SECTION_VISIBILITY_THRESHOLD, root_margin: None }
    }

    pub fn image() -> Self {
        Self {
            threshold: config::IMAGE_VISIBILITY_THRESHOLD,
            root_margin: Some(config::IMAGE_ROOT_MARGIN),
        }
    }
}

/// True once the referenced element has been on screen. The observation is
/// released on unmount.
#[hook]
pub fn use_in_view(node: NodeRef, options: InViewOptions) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let watch = node.cast::<Element>().map(|element| {
                    VisibilityWatch::start(
                        Rc::new(IntersectionViewport::new(options.root_margin)),
                        element,
                        options.threshold,
                        move || visible.set(true),
                    )
                });
                move || drop(watch)
            },
            (node, options),
        );
    }

    *visible
}
