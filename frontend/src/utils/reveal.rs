use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

// Spacing of the extra observer thresholds below the reveal threshold.
const THRESHOLD_STEP: f64 = 0.01;

/// One-shot "has this section been seen" flag.
///
/// `has_entered` only ever goes false -> true. Once it flips the state
/// detaches itself and every later observation is ignored, so scrolling a
/// section out and back in never replays its entrance.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealState {
    has_entered: bool,
    threshold: f64,
    attached: bool,
}

impl RevealState {
    pub fn new(threshold: f64) -> Self {
        Self {
            has_entered: false,
            threshold: threshold.clamp(0.0, 1.0),
            attached: false,
        }
    }

    pub fn has_entered(&self) -> bool {
        self.has_entered
    }

    #[cfg(test)]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns true when the caller should start observing. Already attached
    /// or already revealed means there is nothing to do.
    pub fn attach(&mut self) -> bool {
        if self.attached || self.has_entered {
            return false;
        }
        self.attached = true;
        true
    }

    /// Feeds one visibility sample. Returns true only for the sample that
    /// triggers the reveal; the state is detached afterwards.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if !self.attached || self.has_entered {
            return false;
        }
        if visible_fraction < self.threshold {
            return false;
        }
        self.has_entered = true;
        self.attached = false;
        true
    }

    /// Returns whether there was a live subscription to release.
    pub fn detach(&mut self) -> bool {
        std::mem::replace(&mut self.attached, false)
    }

    /// No way to observe: show the content rather than hide it forever.
    pub fn assume_visible(&mut self) {
        self.has_entered = true;
        self.attached = false;
    }
}

/// How much of a section counts as seen: its own visible ratio, or the share
/// of the viewport it fills, whichever is larger. A section more than
/// `1 / threshold` viewports tall never shows `threshold` of itself but does
/// fill the viewport.
pub fn visible_fraction(ratio: f64, visible_height: f64, root_height: f64) -> f64 {
    if root_height <= 0.0 {
        return ratio;
    }
    ratio.max(visible_height / root_height)
}

/// Ratios the observer reports at: zero, every `THRESHOLD_STEP` below the
/// reveal threshold, then the threshold itself. Tall sections only ever
/// cross the small ones.
pub fn observer_thresholds(threshold: f64) -> Vec<f64> {
    let mut ratios: Vec<f64> = (0..)
        .map(|i: u32| f64::from(i) * THRESHOLD_STEP)
        .take_while(|ratio| *ratio < threshold)
        .collect();
    ratios.push(threshold);
    ratios
}

fn root_height(entry: &IntersectionObserverEntry) -> f64 {
    match entry.root_bounds() {
        Some(bounds) => bounds.height(),
        None => web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0),
    }
}

/// Live `IntersectionObserver` bound to a [`RevealState`]. Dropping it
/// disconnects the observer if it is still attached.
struct ViewportObserver {
    observer: IntersectionObserver,
    state: Rc<RefCell<RevealState>>,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ViewportObserver {
    fn attach(
        target: &web_sys::Element,
        state: Rc<RefCell<RevealState>>,
        on_enter: Callback<()>,
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        if !js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))? {
            return Err(JsValue::from_str("IntersectionObserver unsupported"));
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new({
            let state = state.clone();
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let fraction = visible_fraction(
                        entry.intersection_ratio(),
                        entry.intersection_rect().height(),
                        root_height(&entry),
                    );
                    if state.borrow_mut().observe(fraction) {
                        observer.disconnect();
                        on_enter.emit(());
                        break;
                    }
                }
            }
        });

        let options = IntersectionObserverInit::new();
        let thresholds: js_sys::Array = observer_thresholds(state.borrow().threshold())
            .into_iter()
            .map(JsValue::from_f64)
            .collect();
        options.set_threshold(&thresholds);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        if state.borrow_mut().attach() {
            observer.observe(target);
        }

        Ok(Self {
            observer,
            state,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        if self.state.borrow_mut().detach() {
            self.observer.disconnect();
        }
    }
}

/// Attach the returned ref to a section; the flag turns true (once) when
/// `threshold` of it has scrolled into view.
#[hook]
pub fn use_reveal(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let entered = use_state(|| false);

    {
        let node = node.clone();
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let state = Rc::new(RefCell::new(RevealState::new(threshold)));
                let on_enter = {
                    let entered = entered.clone();
                    Callback::from(move |_: ()| entered.set(true))
                };

                let observer = match node.cast::<web_sys::Element>() {
                    Some(target) => match ViewportObserver::attach(&target, state.clone(), on_enter) {
                        Ok(observer) => Some(observer),
                        Err(e) => {
                            log::warn!("Reveal observer unavailable, showing content: {:?}", e);
                            None
                        }
                    },
                    None => {
                        log::warn!("Reveal target not mounted, showing content");
                        None
                    }
                };

                if observer.is_none() {
                    state.borrow_mut().assume_visible();
                }
                if state.borrow().has_entered() {
                    entered.set(true);
                }

                move || drop(observer)
            },
            (),
        );
    }

    (node, *entered)
}

/// Tailwind classes for an element that slides/fades in once revealed.
pub fn reveal_classes(visible: bool, hidden: &'static str) -> Classes {
    if visible {
        classes!("translate-x-0", "translate-y-0", "scale-100", "opacity-100")
    } else {
        classes!(hidden, "opacity-0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden_and_detached() {
        let state = RevealState::new(0.2);
        assert!(!state.has_entered());
        assert!(!state.is_attached());
    }

    #[test]
    fn test_attach_is_idempotent() {
        let mut state = RevealState::new(0.2);
        assert!(state.attach());
        assert!(!state.attach());
        assert!(state.is_attached());
    }

    #[test]
    fn test_below_threshold_does_not_trigger() {
        let mut state = RevealState::new(0.2);
        state.attach();
        assert!(!state.observe(0.0));
        assert!(!state.observe(0.1));
        assert!(!state.has_entered());
        assert!(state.is_attached());
    }

    #[test]
    fn test_reaching_threshold_triggers_and_detaches() {
        let mut state = RevealState::new(0.2);
        state.attach();
        assert!(state.observe(0.2));
        assert!(state.has_entered());
        assert!(!state.is_attached());
    }

    #[test]
    fn test_just_under_threshold_does_not_trigger() {
        let mut state = RevealState::new(0.2);
        state.attach();
        assert!(!state.observe(0.1999));
        assert!(state.observe(0.2));
    }

    #[test]
    fn test_tall_section_reveals_once_it_fills_the_viewport() {
        // 5000px section scrolling through a 375px viewport
        let (section_h, root_h) = (5000.0, 375.0);
        let mut state = RevealState::new(0.2);
        state.attach();

        let mut fired = 0;
        for step in 0..=100 {
            let visible_h = root_h * step as f64 / 100.0;
            let fraction = visible_fraction(visible_h / section_h, visible_h, root_h);
            if state.observe(fraction) {
                fired += 1;
                assert!(visible_h >= root_h * 0.2);
            }
        }
        assert_eq!(fired, 1);
        assert!(state.has_entered());
    }

    #[test]
    fn test_visible_fraction_prefers_larger_share() {
        assert_eq!(visible_fraction(0.5, 100.0, 800.0), 0.5);
        assert_eq!(visible_fraction(0.05, 400.0, 800.0), 0.5);
        assert_eq!(visible_fraction(0.3, 100.0, 0.0), 0.3);
    }

    #[test]
    fn test_observer_thresholds_step_up_to_reveal_point() {
        let ratios = observer_thresholds(0.2);
        assert_eq!(ratios.first(), Some(&0.0));
        assert_eq!(ratios.last(), Some(&0.2));
        assert_eq!(ratios.len(), 21);
        assert!(ratios.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(observer_thresholds(0.0), vec![0.0]);
    }

    #[test]
    fn test_one_shot_after_leave_and_reenter() {
        let mut state = RevealState::new(0.2);
        state.attach();
        assert!(state.observe(0.5));

        // leaves the viewport, comes back
        assert!(!state.observe(0.0));
        assert!(!state.observe(1.0));
        assert!(state.has_entered());

        // re-attaching a revealed section is a no-op
        assert!(!state.attach());
        assert!(!state.observe(1.0));
        assert!(state.has_entered());
    }

    #[test]
    fn test_detach_is_safe_to_repeat() {
        let mut state = RevealState::new(0.2);
        state.attach();
        assert!(state.detach());
        assert!(!state.detach());
        assert!(!state.observe(1.0));
        assert!(!state.has_entered());
    }

    #[test]
    fn test_unobserved_samples_are_ignored() {
        let mut state = RevealState::new(0.2);
        assert!(!state.observe(1.0));
        assert!(!state.has_entered());
    }

    #[test]
    fn test_assume_visible_fallback() {
        let mut state = RevealState::new(0.2);
        state.attach();
        state.assume_visible();
        assert!(state.has_entered());
        assert!(!state.is_attached());
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(RevealState::new(1.5).threshold(), 1.0);
        assert_eq!(RevealState::new(-0.3).threshold(), 0.0);
    }
}
