use chuckle_http_manager::HttpError;
use serde::Deserialize;

use crate::runtime::{get_json, shutdown, Cmd};

/// Fixed per-session limit on successful fetches.
pub const MAX_JOKES: u32 = 5;

pub const JOKE_URL: &str = "https://api.chucknorris.io/jokes/random";

const NO_MORE_JOKES: &str = "no more jokes";
const CUTTING_OFF: &str = "cutting you off";

/// Wire shape of the joke endpoint; only the text payload matters.
#[derive(Clone, Debug, Deserialize)]
pub struct Joke {
    pub value: String,
}

#[derive(Clone, Debug)]
pub struct Model {
    pub joke: String,
    pub joke_count: u32,
    pub too_many: bool,
}

#[derive(Clone, Debug)]
pub enum Msg {
    FetchJoke,
    GotJoke(Result<Joke, HttpError>),
    Quit,
}

/// The closed set of state mutations. `apply` is the only place the model
/// changes; `update` folds sequences of these through it.
#[derive(Clone, Debug)]
pub enum Update {
    IncJokeCount,
    SetJoke(String),
    TooMany,
}

pub fn apply(mut model: Model, update: Update) -> Model {
    match update {
        Update::IncJokeCount => model.joke_count += 1,
        Update::SetJoke(text) => model.joke = text,
        Update::TooMany => model.too_many = true,
    }
    model
}

pub fn init() -> (Model, Cmd<Msg>) {
    let model = Model {
        joke: String::new(),
        joke_count: 0,
        too_many: false,
    };
    (model, Cmd::none())
}

pub fn update(model: Model, msg: Msg) -> (Model, Cmd<Msg>) {
    match msg {
        Msg::FetchJoke => {
            // Terminal check before the threshold check: once cut off, no
            // further network traffic is ever issued.
            if model.too_many {
                let model = apply(model, Update::SetJoke(NO_MORE_JOKES.into()));
                (model, Cmd::none())
            } else if model.joke_count >= MAX_JOKES {
                let model = [Update::TooMany, Update::SetJoke(CUTTING_OFF.into())]
                    .into_iter()
                    .fold(model, apply);
                (model, Cmd::none())
            } else {
                (model, get_json(JOKE_URL, Msg::GotJoke))
            }
        }
        Msg::GotJoke(Ok(joke)) => {
            let model = [Update::IncJokeCount, Update::SetJoke(joke.value)]
                .into_iter()
                .fold(model, apply);
            (model, Cmd::none())
        }
        Msg::GotJoke(Err(err)) => {
            // Surfaced, not recovered; the counter does not move.
            tracing::error!(target: "chuckle::app", "joke fetch failed: {err}");
            (model, Cmd::none())
        }
        Msg::Quit => (model, shutdown()),
    }
}

pub fn view(model: &Model) -> String {
    if model.too_many {
        "That's too many Chuck Norris jokes. Please restart!".to_string()
    } else if model.joke.is_empty() {
        "Press Enter to fetch a Chuck Norris joke.".to_string()
    } else {
        format!("[{}/{}] {}", model.joke_count, MAX_JOKES, model.joke)
    }
}
