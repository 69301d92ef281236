//! Registry of scroll observers
//!
//! Sections attach one observer per trigger when they mount and release all
//! of theirs when they unmount, so nothing keeps reacting to scroll after a
//! section is gone.

use serde::Serialize;

use super::trigger::{Crossing, TriggerRange};

/// Handle to an attached observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ObserverId(u64);

/// Boundary crossing reported by [`ScrollObservers::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObserverEvent {
    pub id: ObserverId,
    pub crossing: Crossing,
}

#[derive(Debug, Clone)]
struct Observer {
    id: ObserverId,
    owner: &'static str,
    range: TriggerRange,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollObservers {
    observers: Vec<Observer>,
    next_id: u64,
    scroll: f64,
    /// Crossings owed to observers attached below the current scroll position
    pending: Vec<ObserverEvent>,
}

impl ScrollObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, owner: &'static str, range: TriggerRange) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push(Observer { id, owner, range });
        self.pending.extend(
            Crossing::between(&range, f64::NEG_INFINITY, self.scroll)
                .into_iter()
                .map(|crossing| ObserverEvent { id, crossing }),
        );
        tracing::trace!(owner, start = range.start, end = range.end, "observer attached");
        id
    }

    /// Replace an observer's range after a layout change. Returns `false` for
    /// released ids.
    pub fn set_range(&mut self, id: ObserverId, range: TriggerRange) -> bool {
        match self.observers.iter_mut().find(|o| o.id == id) {
            Some(observer) => {
                observer.range = range;
                true
            }
            None => false,
        }
    }

    pub fn range(&self, id: ObserverId) -> Option<TriggerRange> {
        self.observers.iter().find(|o| o.id == id).map(|o| o.range)
    }

    /// Progress of an observer at the last reported scroll position.
    pub fn progress(&self, id: ObserverId) -> Option<f64> {
        self.range(id).map(|r| r.progress(self.scroll))
    }

    pub fn scroll(&self) -> f64 {
        self.scroll
    }

    /// Report a new scroll position; returns every crossing it caused, after
    /// any crossings owed to observers attached since the last update.
    pub fn update(&mut self, scroll: f64) -> Vec<ObserverEvent> {
        let prev = self.scroll;
        self.scroll = scroll;
        let mut events = std::mem::take(&mut self.pending);
        events.extend(self.observers.iter().flat_map(|o| {
            Crossing::between(&o.range, prev, scroll)
                .into_iter()
                .map(move |crossing| ObserverEvent { id: o.id, crossing })
        }));
        events
    }

    /// Detach every observer registered by `owner`.
    pub fn release(&mut self, owner: &str) -> usize {
        let before = self.observers.len();
        self.observers.retain(|o| o.owner != owner);
        let live: Vec<ObserverId> = self.observers.iter().map(|o| o.id).collect();
        self.pending.retain(|e| live.contains(&e.id));
        let released = before - self.observers.len();
        if released > 0 {
            tracing::debug!(owner, released, "observers released");
        }
        released
    }

    pub fn count_for(&self, owner: &str) -> usize {
        self.observers.iter().filter(|o| o.owner == owner).count()
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_reports_crossings_per_observer() {
        let mut obs = ScrollObservers::new();
        let a = obs.attach("about", TriggerRange::new(100.0, 200.0));
        let b = obs.attach("faq", TriggerRange::new(500.0, 600.0));

        let events = obs.update(150.0);
        assert_eq!(
            events,
            vec![ObserverEvent {
                id: a,
                crossing: Crossing::Enter
            }]
        );

        let events = obs.update(700.0);
        assert_eq!(events.len(), 3);
        assert!(events.iter().any(|e| e.id == b && e.crossing == Crossing::Leave));
        assert_eq!(obs.progress(a), Some(1.0));
    }

    #[test]
    fn release_detaches_only_the_owner() {
        let mut obs = ScrollObservers::new();
        obs.attach("about", TriggerRange::new(0.0, 10.0));
        obs.attach("about", TriggerRange::new(0.0, 20.0));
        let keep = obs.attach("projects", TriggerRange::new(0.0, 30.0));

        assert_eq!(obs.release("about"), 2);
        assert_eq!(obs.count_for("about"), 0);
        assert_eq!(obs.len(), 1);
        assert!(obs.range(keep).is_some());
        assert_eq!(obs.release("about"), 0);
    }

    #[test]
    fn late_attach_catches_up_on_next_update() {
        let mut obs = ScrollObservers::new();
        obs.update(1000.0);
        let id = obs.attach("experience", TriggerRange::new(100.0, 2000.0));
        let events = obs.update(1000.0);
        assert_eq!(
            events,
            vec![ObserverEvent {
                id,
                crossing: Crossing::Enter
            }]
        );
        assert!(obs.update(1000.0).is_empty());
    }

    #[test]
    fn set_range_on_released_id_is_rejected() {
        let mut obs = ScrollObservers::new();
        let id = obs.attach("hero", TriggerRange::new(0.0, 10.0));
        obs.release("hero");
        assert!(!obs.set_range(id, TriggerRange::new(0.0, 5.0)));
        assert!(obs.is_empty());
    }
}
