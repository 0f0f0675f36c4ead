//! Notifications emitted by [`PlayerStats`] mutations.
//!
//! UI and other collaborators register listeners and receive events
//! synchronously, in registration order, during the mutating call. Listeners
//! must not call back into the stats they observe.
//!
//! [`PlayerStats`]: super::stats::PlayerStats

use std::fmt;

/// A state change worth telling the UI about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatsEvent {
    HealthChanged { health: i32 },
    ManaChanged { mana: i32 },
    ExperienceGained { amount: u64 },
    LevelUp { level: u32 },
    AttributePointsGained { points: u32 },
    AttributeChanged,
}

/// Handle returned by [`StatsListeners::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&StatsEvent)>;

/// Registry of event listeners with deterministic unsubscribe.
#[derive(Default)]
pub struct StatsListeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl StatsListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Removes a listener. Returns false if the id was already removed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn emit(&mut self, event: StatsEvent) {
        for (_, listener) in &mut self.entries {
            listener(&event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for StatsListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatsListeners")
            .field("listeners", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_subscribe_and_emit() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut listeners = StatsListeners::new();
        listeners.subscribe(Box::new(move |event| sink.borrow_mut().push(*event)));

        listeners.emit(StatsEvent::LevelUp { level: 3 });
        listeners.emit(StatsEvent::AttributeChanged);

        assert_eq!(
            *seen.borrow(),
            vec![StatsEvent::LevelUp { level: 3 }, StatsEvent::AttributeChanged]
        );
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);

        let mut listeners = StatsListeners::new();
        let id = listeners.subscribe(Box::new(move |_| *sink.borrow_mut() += 1));

        listeners.emit(StatsEvent::AttributeChanged);
        assert!(listeners.unsubscribe(id));
        listeners.emit(StatsEvent::AttributeChanged);

        assert_eq!(*count.borrow(), 1);
        assert!(!listeners.unsubscribe(id));
    }

    #[test]
    fn test_unsubscribe_one_of_many() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let first_sink = Rc::clone(&seen);
        let second_sink = Rc::clone(&seen);

        let mut listeners = StatsListeners::new();
        let first = listeners.subscribe(Box::new(move |_| first_sink.borrow_mut().push("first")));
        listeners.subscribe(Box::new(move |_| second_sink.borrow_mut().push("second")));

        listeners.unsubscribe(first);
        listeners.emit(StatsEvent::AttributeChanged);

        assert_eq!(*seen.borrow(), vec!["second"]);
    }
}
