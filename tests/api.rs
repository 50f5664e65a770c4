//! Drives the JSON API end to end through the transport-independent router

use serde_json::{Value, json};
use wordle_server::game::SessionStore;
use wordle_server::server::{ApiRequest, ApiResponse, HttpMethod, handle, session_id};
use wordle_server::wordlists::{WordBank, WordList, WordSource};

const GUESSES: &[&str] = &[
    "apple", "apply", "crane", "slate", "irate", "spice", "tempo", "lemon",
];

fn store() -> SessionStore {
    let mut bank = WordBank::default();
    let guesses = GUESSES.iter().map(|&w| w.to_string()).collect();
    bank.insert(WordList::new(5, guesses, vec!["apple".to_string()], WordSource::Embedded).unwrap());

    let guesses = ["cat", "dog"].iter().map(|&w| w.to_string()).collect();
    bank.insert(WordList::new(3, guesses, vec!["dog".to_string()], WordSource::Embedded).unwrap());
    SessionStore::new(bank, 6)
}

fn send(
    store: &SessionStore,
    method: HttpMethod,
    path: &str,
    session: Option<&str>,
    body: &str,
) -> (u16, Value, Option<String>) {
    let request = ApiRequest {
        method,
        path,
        session_id: session,
        body: body.as_bytes(),
    };
    let ApiResponse {
        status,
        body,
        set_cookie,
    } = handle(store, &request).expect("API route");
    (status, serde_json::from_slice(&body).unwrap(), set_cookie)
}

/// Start a game and return its session id, as a browser would store it
fn start(store: &SessionStore, body: &str) -> String {
    let (status, game, cookie) = send(store, HttpMethod::Post, "/api/new-game", None, body);
    assert_eq!(status, 200);
    let cookie = cookie.expect("session cookie");
    let (pair, attributes) = cookie.split_once(';').unwrap();
    assert_eq!(attributes.trim(), "Path=/");

    let id = session_id(pair).unwrap().to_string();
    assert_eq!(game["id"], id.as_str());
    id
}

fn guess(store: &SessionStore, id: &str, word: &str) -> (u16, Value) {
    let body = json!({ "guess": word }).to_string();
    let (status, value, _) = send(store, HttpMethod::Post, "/api/guess", Some(id), &body);
    (status, value)
}

#[test]
fn new_game_returns_fresh_state() {
    let store = store();
    let (status, game, _) = send(&store, HttpMethod::Post, "/api/new-game", None, "");

    assert_eq!(status, 200);
    assert_eq!(game["status"], "in_progress");
    assert_eq!(game["maxGuesses"], 6);
    assert_eq!(game["wordLength"], 5);
    assert_eq!(game["guesses"], json!([]));
    assert!(game.get("answer").is_none());
}

#[test]
fn each_new_game_gets_its_own_session() {
    let store = store();
    let first = start(&store, "");
    let second = start(&store, "{}");
    assert_ne!(first, second);
    assert_eq!(store.len(), 2);
}

#[test]
fn guess_is_scored() {
    let store = store();
    let id = start(&store, "");
    let (status, game) = guess(&store, &id, "apply");

    assert_eq!(status, 200);
    assert_eq!(
        game["guesses"],
        json!([{
            "word": "apply",
            "result": ["correct", "correct", "correct", "correct", "absent"],
        }])
    );
    assert_eq!(game["status"], "in_progress");
}

#[test]
fn state_is_stable_between_guesses() {
    let store = store();
    let id = start(&store, "");
    guess(&store, &id, "crane");

    let (status, first, _) = send(&store, HttpMethod::Get, "/api/state", Some(&id), "");
    let (_, second, _) = send(&store, HttpMethod::Get, "/api/state", Some(&id), "");
    assert_eq!(status, 200);
    assert_eq!(first, second);
    assert_eq!(first["guesses"][0]["word"], "crane");
}

#[test]
fn state_without_session_is_not_found() {
    let store = store();
    let (status, body, _) = send(&store, HttpMethod::Get, "/api/state", None, "");
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "error": "No active game" }));

    let (status, _, _) = send(&store, HttpMethod::Get, "/api/state", Some("stale"), "");
    assert_eq!(status, 404);
}

#[test]
fn guess_without_session_is_not_found() {
    let store = store();
    let (status, body, _) = send(
        &store,
        HttpMethod::Post,
        "/api/guess",
        None,
        r#"{"guess":"apple"}"#,
    );
    assert_eq!(status, 404);
    assert_eq!(body["error"], "No active game. Start a new one first.");
}

#[test]
fn invalid_guesses_are_rejected() {
    let store = store();
    let id = start(&store, "");

    let (status, body) = guess(&store, &id, "leap");
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Guesses must be exactly 5 letters.");

    let (status, body) = guess(&store, &id, "zebra");
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Guess must be a valid word from the list.");

    let (status, body, _) = send(&store, HttpMethod::Post, "/api/guess", Some(&id), "{nope");
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid JSON body");

    let (_, game, _) = send(&store, HttpMethod::Get, "/api/state", Some(&id), "");
    assert_eq!(game["guesses"], json!([]));
}

#[test]
fn word_length_is_validated() {
    let store = store();

    let (status, body, cookie) = send(
        &store,
        HttpMethod::Post,
        "/api/new-game",
        None,
        r#"{"wordLength":"five"}"#,
    );
    assert_eq!(status, 400);
    assert_eq!(body["error"], "wordLength must be an integer");
    assert!(cookie.is_none());

    let (status, body, _) = send(
        &store,
        HttpMethod::Post,
        "/api/new-game",
        None,
        r#"{"wordLength":9}"#,
    );
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Unsupported word length");
    assert!(store.is_empty());
}

#[test]
fn shorter_words_play_the_same_way() {
    let store = store();
    let id = start(&store, r#"{"wordLength": 3}"#);

    let (_, game) = guess(&store, &id, "cat");
    assert_eq!(game["wordLength"], 3);
    assert_eq!(game["guesses"][0]["result"], json!(["absent", "absent", "absent"]));

    let (_, game) = guess(&store, &id, "DOG");
    assert_eq!(game["status"], "won");
    assert_eq!(game["answer"], "dog");
}

#[test]
fn six_wrong_guesses_lose_and_reveal_answer() {
    let store = store();
    let id = start(&store, "");

    for word in ["apply", "crane", "slate", "irate", "spice"] {
        let (status, game) = guess(&store, &id, word);
        assert_eq!(status, 200);
        assert_eq!(game["status"], "in_progress");
        assert!(game.get("answer").is_none());
    }

    let (_, game) = guess(&store, &id, "tempo");
    assert_eq!(game["status"], "lost");
    assert_eq!(game["answer"], "apple");

    let (status, body) = guess(&store, &id, "apple");
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Game is already finished. Start a new game.");
}

#[test]
fn winning_ends_the_game() {
    let store = store();
    let id = start(&store, "");
    let (_, game) = guess(&store, &id, "apple");

    assert_eq!(game["status"], "won");
    assert_eq!(game["answer"], "apple");
    assert_eq!(guess(&store, &id, "lemon").0, 400);
}

#[test]
fn unknown_routes() {
    let store = store();
    let (status, body, _) = send(&store, HttpMethod::Post, "/api/reset", None, "");
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Unknown endpoint");

    let (status, _, _) = send(&store, HttpMethod::Other, "/api/state", None, "");
    assert_eq!(status, 405);

    let request = ApiRequest {
        method: HttpMethod::Get,
        path: "/app.js",
        session_id: None,
        body: b"",
    };
    assert!(handle(&store, &request).is_none());
}
