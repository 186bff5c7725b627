//! chuckle-core: TEA primitives for the chuckle runtime and its effect
//! managers.
//!
//! An application is `init`/`update`/`view` over an owned model. `update`
//! returns the next model plus a [`CoreCmd`] batch of effect requests;
//! managers execute the requests and resume the app by sending messages
//! through a [`Router`]. Observers see every message and effect crossing
//! the loop.

mod cmd;
mod observation;
mod observer;
mod request;
mod router;

pub use cmd::CoreCmd;
pub use observation::Observation;
pub use observer::{no_op_observer, tee_observer, tracing_observer, ObserverFn};
pub use request::{shutdown, CoreRequest};
pub use router::{Router, RouterChannels};
