use crate::Observation;
use std::fmt::Debug;
use std::sync::Arc;

/// Observer function type
pub type ObserverFn<EventType, CommandType> =
    Arc<dyn Fn(&Observation<EventType, CommandType>) + Send + Sync>;

/// No-op observer
pub fn no_op_observer<EventType, CommandType>() -> ObserverFn<EventType, CommandType>
where
    EventType: 'static,
    CommandType: 'static,
{
    Arc::new(|_observation: &Observation<EventType, CommandType>| {})
}

/// Tracing observer - logs to tracing crate
pub fn tracing_observer<EventType, CommandType>() -> ObserverFn<EventType, CommandType>
where
    EventType: Debug + 'static,
    CommandType: Debug + 'static,
{
    Arc::new(
        move |observation: &Observation<EventType, CommandType>| match observation {
            Observation::Event { data, .. } => {
                tracing::info!(target: "chuckle-core::Msg", "Msg({:?})", data);
            }
            Observation::Effect { data, .. } => {
                tracing::debug!(target: "chuckle-core::Cmd", "Cmd({:?})", data);
            }
        },
    )
}

/// Tee observer - call multiple observers
pub fn tee_observer<EventType, CommandType>(
    observers: Vec<ObserverFn<EventType, CommandType>>,
) -> ObserverFn<EventType, CommandType>
where
    EventType: 'static,
    CommandType: 'static,
{
    Arc::new(
        move |observation: &Observation<EventType, CommandType>| {
            for observer in &observers {
                observer(observation);
            }
        },
    )
}
