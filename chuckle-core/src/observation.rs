use std::time::SystemTime;

/// Observation variants emitted by the runtime loop
///
/// Carries the application's event and command types directly so observers
/// can pattern-match without stringification. No trait bounds are imposed
/// here; helpers add whatever bounds they need.
pub enum Observation<EventType, CommandType> {
    Event {
        ts: SystemTime,
        data: EventType,
    },
    Effect {
        ts: SystemTime,
        data: CommandType,
    },
}

impl<EventType, CommandType> Observation<EventType, CommandType> {
    /// An event observation stamped with the current time.
    pub fn event(data: EventType) -> Self {
        Observation::Event {
            ts: SystemTime::now(),
            data,
        }
    }

    /// An effect observation stamped with the current time.
    pub fn effect(data: CommandType) -> Self {
        Observation::Effect {
            ts: SystemTime::now(),
            data,
        }
    }
}
