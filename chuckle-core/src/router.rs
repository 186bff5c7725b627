use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Channel-backed router through which effect managers and ports deliver
/// events to the application loop. Payloads crossing a task or thread
/// boundary must be `Send + 'static`.
#[derive(Clone)]
pub struct Router<Event> {
    app_tx: UnboundedSender<Event>,
}

impl<Event> Router<Event> {
    /// Create a new router around an existing sender.
    pub fn new(app_tx: UnboundedSender<Event>) -> Self {
        Self { app_tx }
    }

    /// Send an event to the application event loop. A closed channel means
    /// the loop is shutting down; the event is dropped.
    pub fn send_to_app(&self, event: Event)
    where
        Event: Send + 'static,
    {
        let _ = self.app_tx.send(event);
    }

    /// Clone the underlying channel sender (primarily for spawned tasks).
    pub fn app_sender(&self) -> UnboundedSender<Event> {
        self.app_tx.clone()
    }
}

/// Channel endpoints owned by the runtime loop.
pub struct RouterChannels<Event> {
    pub router: Router<Event>,
    pub app_rx: UnboundedReceiver<Event>,
}

impl<Event> RouterChannels<Event> {
    /// Allocate the app channel and return the router plus receiver.
    pub fn new() -> Self {
        let (app_tx, app_rx) = unbounded_channel();
        Self {
            router: Router::new(app_tx),
            app_rx,
        }
    }
}

impl<Event> Default for RouterChannels<Event> {
    fn default() -> Self {
        Self::new()
    }
}
