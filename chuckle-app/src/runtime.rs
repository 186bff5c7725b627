//! Hand-written runtime wiring for the joke app: the request union, `Cmd`
//! alias, command helpers, ports, and the event loop itself.

use chuckle_core::{CoreCmd, CoreRequest, Observation, ObserverFn, Router, RouterChannels};
use chuckle_http_manager::{HttpError, HttpManager, HttpRequest};
use serde::de::DeserializeOwned;

use crate::app::{Model, Msg};

// === Request union and Cmd alias ===

#[derive(Clone, Debug)]
pub enum Request<Msg> {
    Core(CoreRequest),
    Http(HttpRequest<Msg>),
}

pub type Cmd<Msg> = CoreCmd<Request<Msg>>;

// === Command helpers ===

pub fn shutdown<M>() -> Cmd<M> {
    CoreCmd::single(Request::Core(chuckle_core::shutdown()))
}

/// Lift a JSON GET into a command; the callback resumes the app with the
/// decoded outcome.
pub fn get_json<T, M>(
    url: impl Into<String>,
    returns: impl Fn(Result<T, HttpError>) -> M + Send + Sync + 'static,
) -> Cmd<M>
where
    T: DeserializeOwned,
{
    CoreCmd::single(Request::Http(chuckle_http_manager::get_json(url, returns)))
}

// === Ports (host -> app) ===

/// Incoming port: a host-side trigger that constructs one app message.
#[derive(Clone)]
pub struct InPort {
    router: Router<Msg>,
    make: fn() -> Msg,
}

impl InPort {
    fn new(router: Router<Msg>, make: fn() -> Msg) -> Self {
        Self { router, make }
    }

    pub fn send(&self) {
        self.router.send_to_app((self.make)());
    }
}

#[derive(Clone)]
pub struct Ports {
    pub fetch_joke: InPort,
    pub quit: InPort,
}

impl Ports {
    fn new(router: &Router<Msg>) -> Self {
        Self {
            fetch_joke: InPort::new(router.clone(), || Msg::FetchJoke),
            quit: InPort::new(router.clone(), || Msg::Quit),
        }
    }
}

// === Reconcilers ===

/// Reconciler that prints the rendering whenever it changes.
pub fn stdout_reconciler() -> impl FnMut(&String) {
    let mut last = String::new();
    move |rendered: &String| {
        if *rendered != last {
            println!("{rendered}");
            last.clone_from(rendered);
        }
    }
}

// === Runtime ===

pub struct Runtime<I, U, V, R, D> {
    init: I,
    update: U,
    view: V,
    reconciler: R,
    observer: ObserverFn<Msg, Request<Msg>>,
    dispatch: D,
    channels: RouterChannels<Msg>,
    ports: Ports,
}

impl<I, U, V, R> Runtime<I, U, V, R, Box<dyn FnMut(HttpRequest<Msg>, &Router<Msg>)>>
where
    I: FnOnce() -> (Model, Cmd<Msg>),
    U: Fn(Model, Msg) -> (Model, Cmd<Msg>),
    V: Fn(&Model) -> String,
    R: FnMut(&String),
{
    /// Production constructor: HTTP effects go to a real [`HttpManager`].
    pub fn new(
        init: I,
        update: U,
        view: V,
        reconciler: R,
        observer: ObserverFn<Msg, Request<Msg>>,
    ) -> Self {
        let manager = HttpManager::new();
        Self::with_dispatch(
            init,
            update,
            view,
            reconciler,
            observer,
            Box::new(move |req, router: &Router<Msg>| manager.on_effects(router, vec![req])),
        )
    }
}

impl<I, U, V, R, D> Runtime<I, U, V, R, D>
where
    I: FnOnce() -> (Model, Cmd<Msg>),
    U: Fn(Model, Msg) -> (Model, Cmd<Msg>),
    V: Fn(&Model) -> String,
    R: FnMut(&String),
    D: FnMut(HttpRequest<Msg>, &Router<Msg>),
{
    /// Constructor with an explicit HTTP dispatcher; the seam used by tests
    /// to intercept outbound requests.
    pub fn with_dispatch(
        init: I,
        update: U,
        view: V,
        reconciler: R,
        observer: ObserverFn<Msg, Request<Msg>>,
        dispatch: D,
    ) -> Self {
        let channels = RouterChannels::new();
        let ports = Ports::new(&channels.router);
        Self {
            init,
            update,
            view,
            reconciler,
            observer,
            dispatch,
            channels,
            ports,
        }
    }

    pub fn ports(&self) -> Ports {
        self.ports.clone()
    }

    /// Drive the app until a `Shutdown` request or until every sender is
    /// gone. All model mutation happens on this one logical thread; the
    /// dispatcher is the only suspension seam.
    pub async fn run(mut self) {
        let RouterChannels { router, mut app_rx } = self.channels;
        let (mut model, mut cmd) = (self.init)();

        loop {
            for req in cmd.into_inner() {
                (self.observer)(&Observation::effect(req.clone()));
                match req {
                    Request::Core(CoreRequest::Shutdown) => return,
                    Request::Http(req) => (self.dispatch)(req, &router),
                }
            }

            let rendered = (self.view)(&model);
            (self.reconciler)(&rendered);

            let Some(first) = app_rx.recv().await else {
                return;
            };
            let mut events = vec![first];
            while let Ok(more) = app_rx.try_recv() {
                events.push(more);
            }

            let mut next_cmds = Vec::new();
            for event in events {
                (self.observer)(&Observation::event(event.clone()));
                let (next, produced) = (self.update)(model, event);
                model = next;
                next_cmds.push(produced);
            }
            cmd = CoreCmd::batch(next_cmds);
        }
    }
}
