// Reducer-level coverage of the fetch-and-limit state machine. Outbound
// traffic is intercepted at the command boundary: tests pull the HTTP request
// out of the returned command and drive its `returns` callback by hand.

use chuckle_app::app::{self, Joke, Model, Msg, Update, JOKE_URL, MAX_JOKES};
use chuckle_app::runtime::{Cmd, Request};
use chuckle_http_manager::{HttpError, HttpRequest, HttpResponse};

fn http_requests(cmd: Cmd<Msg>) -> Vec<HttpRequest<Msg>> {
    cmd.into_inner()
        .into_iter()
        .filter_map(|req| match req {
            Request::Http(req) => Some(req),
            Request::Core(_) => None,
        })
        .collect()
}

fn ok_json(json: &str) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse {
        status: 200,
        headers: Vec::new(),
        body: json.as_bytes().to_vec(),
    })
}

/// Run one full fetch: trigger, intercept the single outbound request,
/// complete it with the given JSON body, and feed the completion back in.
fn fetch_once(model: Model, json: &str) -> Model {
    let (model, cmd) = app::update(model, Msg::FetchJoke);
    let mut requests = http_requests(cmd);
    assert_eq!(requests.len(), 1, "one outbound request per fetch");
    let request = requests.pop().unwrap();
    assert_eq!(request.url, JOKE_URL);
    let completion = (request.returns)(ok_json(json));
    let (model, cmd) = app::update(model, completion);
    assert!(cmd.is_empty(), "completion produces no further effects");
    model
}

fn terminal_model() -> Model {
    Model {
        joke: "cutting you off".to_string(),
        joke_count: MAX_JOKES,
        too_many: true,
    }
}

#[test]
fn reducer_applies_each_tagged_update() {
    let (model, _) = app::init();
    let model = app::apply(model, Update::IncJokeCount);
    assert_eq!(model.joke_count, 1);
    let model = app::apply(model, Update::SetJoke("ha".to_string()));
    assert_eq!(model.joke, "ha");
    let model = app::apply(model, Update::TooMany);
    assert!(model.too_many);
    assert_eq!(model.joke_count, 1);
}

#[test]
fn successful_fetch_increments_exactly_once() {
    let (model, cmd) = app::init();
    assert!(cmd.is_empty());
    assert_eq!(model.joke_count, 0);

    let model = fetch_once(model, r#"{"value":"X"}"#);
    assert_eq!(model.joke_count, 1);
    assert_eq!(model.joke, "X");
    assert!(!model.too_many);
}

#[test]
fn counter_is_monotonic_across_successes() {
    let (mut model, _) = app::init();
    for expected in 1..=MAX_JOKES {
        model = fetch_once(model, &format!(r#"{{"value":"joke {expected}"}}"#));
        assert_eq!(model.joke_count, expected);
        assert_eq!(model.joke, format!("joke {expected}"));
    }
}

#[test]
fn fetch_is_allowed_just_below_the_limit() {
    let model = Model {
        joke: "previous".to_string(),
        joke_count: MAX_JOKES - 1,
        too_many: false,
    };
    let (model, cmd) = app::update(model, Msg::FetchJoke);
    assert_eq!(http_requests(cmd).len(), 1);
    assert_eq!(model.joke_count, MAX_JOKES - 1);
    assert!(!model.too_many);
}

#[test]
fn request_at_the_limit_blocks_without_fetching() {
    let model = Model {
        joke: "joke 5".to_string(),
        joke_count: MAX_JOKES,
        too_many: false,
    };
    let (model, cmd) = app::update(model, Msg::FetchJoke);
    assert!(cmd.is_empty(), "threshold transition issues no network call");
    assert!(model.too_many);
    assert_eq!(model.joke, "cutting you off");
    assert_eq!(model.joke_count, MAX_JOKES, "counter unchanged at cutoff");
}

#[test]
fn terminal_state_is_idempotent_and_offline() {
    let mut model = terminal_model();
    for _ in 0..3 {
        let (next, cmd) = app::update(model, Msg::FetchJoke);
        assert!(
            http_requests(cmd).is_empty(),
            "terminal path must stay off the network"
        );
        assert!(next.too_many);
        assert_eq!(next.joke_count, MAX_JOKES);
        assert_eq!(next.joke, "no more jokes");
        model = next;
    }
}

#[test]
fn five_fetches_then_cutoff_end_to_end() {
    let (mut model, _) = app::init();
    for n in 1..=MAX_JOKES {
        model = fetch_once(model, &format!(r#"{{"value":"joke {n}"}}"#));
    }
    assert_eq!(model.joke_count, MAX_JOKES);
    assert!(!model.too_many, "limit reached but not yet cut off");

    // Sixth request: terminal transition, no outbound traffic.
    let (model, cmd) = app::update(model, Msg::FetchJoke);
    assert!(cmd.is_empty());
    assert!(model.too_many);
    assert_eq!(model.joke, "cutting you off");
    assert_eq!(model.joke_count, MAX_JOKES);

    // And every request after that is a no-op apart from the fixed message.
    let (model, cmd) = app::update(model, Msg::FetchJoke);
    assert!(cmd.is_empty());
    assert_eq!(model.joke, "no more jokes");
    assert_eq!(model.joke_count, MAX_JOKES);
}

#[test]
fn bad_status_leaves_model_unchanged() {
    let (model, cmd) = app::update(app::init().0, Msg::FetchJoke);
    let request = http_requests(cmd).pop().unwrap();
    let completion = (request.returns)(Ok(HttpResponse {
        status: 500,
        headers: Vec::new(),
        body: b"oops".to_vec(),
    }));
    assert!(matches!(
        completion,
        Msg::GotJoke(Err(HttpError::BadStatus { status: 500 }))
    ));
    let (model, cmd) = app::update(model, completion);
    assert!(cmd.is_empty());
    assert_eq!(model.joke_count, 0, "failures never move the counter");
    assert_eq!(model.joke, "");
    assert!(!model.too_many);
}

#[test]
fn malformed_body_leaves_model_unchanged() {
    let (model, cmd) = app::update(app::init().0, Msg::FetchJoke);
    let request = http_requests(cmd).pop().unwrap();
    let completion = (request.returns)(ok_json("not json"));
    assert!(matches!(
        completion,
        Msg::GotJoke(Err(HttpError::BadBody { .. }))
    ));
    let (model, _) = app::update(model, completion);
    assert_eq!(model.joke_count, 0);
    assert_eq!(model.joke, "");
}

#[test]
fn decoded_joke_carries_the_text_field() {
    let (_, cmd) = app::update(app::init().0, Msg::FetchJoke);
    let request = http_requests(cmd).pop().unwrap();
    let completion =
        (request.returns)(ok_json(r#"{"value":"hi","icon_url":"x","id":"abc"}"#));
    match completion {
        Msg::GotJoke(Ok(Joke { value })) => assert_eq!(value, "hi"),
        other => panic!("unexpected completion: {other:?}"),
    }
}

#[test]
fn quit_requests_shutdown() {
    let (model, cmd) = app::update(app::init().0, Msg::Quit);
    assert_eq!(model.joke_count, 0);
    let requests = cmd.into_inner();
    assert_eq!(requests.len(), 1);
    assert!(matches!(requests[0], Request::Core(_)));
}
