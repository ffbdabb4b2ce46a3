/* src/server/engine/rust/src/effects.rs */

//! Per-component presentational state: scroll reveal and animated counters.
//!
//! A `VisibilityObserver` stands in for the browser's intersection observer.
//! Components subscribe and hold a `Subscription`; dropping it unsubscribes,
//! so teardown happens on every exit path. State is single-threaded.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const COUNTER_THRESHOLD: f64 = 0.3;
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_TICK_MS: u32 = 16;
/// Stagger between service cards and between gallery tiles.
pub const SERVICE_STAGGER_MS: u32 = 80;
pub const GALLERY_STAGGER_MS: u32 = 60;

type Listener = Rc<RefCell<dyn FnMut(f64)>>;

#[derive(Default)]
struct Listeners {
  next_id: u64,
  entries: Vec<(u64, f64, Listener)>,
}

/// Delivers intersection ratios of one element to its subscribers.
#[derive(Clone, Default)]
pub struct VisibilityObserver {
  inner: Rc<RefCell<Listeners>>,
}

/// Live subscription. Dropping it removes the listener.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
  observer: Weak<RefCell<Listeners>>,
  id: u64,
}

impl Drop for Subscription {
  fn drop(&mut self) {
    if let Some(inner) = self.observer.upgrade() {
      inner.borrow_mut().entries.retain(|(id, _, _)| *id != self.id);
    }
  }
}

impl VisibilityObserver {
  pub fn new() -> Self {
    Self::default()
  }

  /// Call `listener` whenever the ratio reaches `threshold`.
  pub fn subscribe(&self, threshold: f64, listener: impl FnMut(f64) + 'static) -> Subscription {
    let mut inner = self.inner.borrow_mut();
    let id = inner.next_id;
    inner.next_id += 1;
    let listener: Listener = Rc::new(RefCell::new(listener));
    inner.entries.push((id, threshold, listener));
    Subscription { observer: Rc::downgrade(&self.inner), id }
  }

  pub fn subscriber_count(&self) -> usize {
    self.inner.borrow().entries.len()
  }

  /// Report the element's visible ratio.
  pub fn notify(&self, ratio: f64) {
    // Snapshot so listeners may subscribe or drop subscriptions while running
    let due: Vec<Listener> = self
      .inner
      .borrow()
      .entries
      .iter()
      .filter(|(_, threshold, _)| ratio >= *threshold)
      .map(|(_, _, l)| Rc::clone(l))
      .collect();
    for listener in due {
      (&mut *listener.borrow_mut())(ratio);
    }
  }
}

/// Reveal-on-scroll flag: flips once, never resets.
pub struct Reveal {
  visible: Rc<Cell<bool>>,
  _subscription: Subscription,
}

impl Reveal {
  pub fn observe(observer: &VisibilityObserver) -> Self {
    let visible = Rc::new(Cell::new(false));
    let flag = Rc::clone(&visible);
    let subscription = observer.subscribe(REVEAL_THRESHOLD, move |_| flag.set(true));
    Self { visible, _subscription: subscription }
  }

  pub fn is_visible(&self) -> bool {
    self.visible.get()
  }
}

/// Staggered transition delay for the `index`-th item of a revealed grid.
pub fn transition_delay(index: usize, step_ms: u32) -> u32 {
  u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

#[derive(Debug)]
struct CounterState {
  end: u32,
  suffix: &'static str,
  value: f64,
  count: u32,
  started: bool,
  done: bool,
}

/// Count-up animation driven by explicit ticks.
pub struct Counter {
  state: Rc<RefCell<CounterState>>,
  _subscription: Subscription,
}

impl Counter {
  pub fn observe(observer: &VisibilityObserver, end: u32, suffix: &'static str) -> Self {
    let state = Rc::new(RefCell::new(CounterState {
      end,
      suffix,
      value: 0.0,
      count: 0,
      started: false,
      done: false,
    }));
    let start = Rc::clone(&state);
    let subscription = observer.subscribe(COUNTER_THRESHOLD, move |_| {
      start.borrow_mut().started = true;
    });
    Self { state, _subscription: subscription }
  }

  pub fn increment(&self) -> f64 {
    f64::from(self.state.borrow().end) / f64::from(COUNTER_DURATION_MS / COUNTER_TICK_MS)
  }

  /// Advance one tick. Returns whether the counter is still running.
  pub fn tick(&self) -> bool {
    let step = self.increment();
    let mut s = self.state.borrow_mut();
    if !s.started || s.done {
      return false;
    }
    s.value += step;
    if s.value >= f64::from(s.end) {
      s.count = s.end;
      s.done = true;
      return false;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
      s.count = s.value.floor() as u32;
    }
    true
  }

  pub fn is_started(&self) -> bool {
    self.state.borrow().started
  }

  pub fn is_done(&self) -> bool {
    self.state.borrow().done
  }

  pub fn count(&self) -> u32 {
    self.state.borrow().count
  }

  pub fn display(&self) -> String {
    let s = self.state.borrow();
    format!("{}{}", s.count, s.suffix)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reveal_flips_once_at_threshold() {
    let observer = VisibilityObserver::new();
    let reveal = Reveal::observe(&observer);
    observer.notify(0.05);
    assert!(!reveal.is_visible());
    observer.notify(0.1);
    assert!(reveal.is_visible());
    observer.notify(0.0);
    assert!(reveal.is_visible());
  }

  #[test]
  fn dropping_component_unsubscribes() {
    let observer = VisibilityObserver::new();
    let reveal = Reveal::observe(&observer);
    let counter = Counter::observe(&observer, 10, "+");
    assert_eq!(observer.subscriber_count(), 2);
    drop(reveal);
    assert_eq!(observer.subscriber_count(), 1);
    drop(counter);
    assert_eq!(observer.subscriber_count(), 0);
    observer.notify(1.0);
  }

  #[test]
  fn subscription_outliving_observer_is_harmless() {
    let observer = VisibilityObserver::new();
    let reveal = Reveal::observe(&observer);
    drop(observer);
    drop(reveal);
  }

  #[test]
  fn counter_waits_for_its_threshold() {
    let observer = VisibilityObserver::new();
    let counter = Counter::observe(&observer, 10, "+");
    assert!(!counter.tick());
    observer.notify(0.2);
    assert!(!counter.is_started());
    observer.notify(0.3);
    assert!(counter.is_started());
  }

  #[test]
  fn counter_runs_to_end_and_clamps() {
    let observer = VisibilityObserver::new();
    let counter = Counter::observe(&observer, 5000, "+");
    observer.notify(1.0);
    assert!((counter.increment() - 40.0).abs() < f64::EPSILON);
    let mut ticks = 1;
    while counter.tick() {
      ticks += 1;
      assert!(counter.count() < 5000);
    }
    assert_eq!(ticks, 125);
    assert!(counter.is_done());
    assert_eq!(counter.display(), "5000+");
    assert!(!counter.tick());
  }

  #[test]
  fn small_counter_floors_intermediate_values() {
    let observer = VisibilityObserver::new();
    let counter = Counter::observe(&observer, 4, "");
    observer.notify(0.5);
    counter.tick();
    assert_eq!(counter.count(), 0);
    while counter.tick() {}
    assert_eq!(counter.display(), "4");
  }

  #[test]
  fn stagger_delays() {
    assert_eq!(transition_delay(0, SERVICE_STAGGER_MS), 0);
    assert_eq!(transition_delay(3, SERVICE_STAGGER_MS), 240);
    assert_eq!(transition_delay(5, GALLERY_STAGGER_MS), 300);
  }
}
