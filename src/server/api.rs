//! JSON API handlers
//!
//! Transport-independent: a request is a method, a path, an optional session
//! id and a raw body. [`handle`] returns `None` for requests that should be
//! answered with a static asset instead.

use super::cookies::session_cookie;
use crate::game::{GameError, GameView, SessionError, SessionStore};
use crate::wordlists::{DEFAULT_WORD_LENGTH, SUPPORTED_WORD_LENGTHS};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const NEW_GAME_PATH: &str = "/api/new-game";
pub const GUESS_PATH: &str = "/api/guess";
pub const STATE_PATH: &str = "/api/state";

/// Request methods the API distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    /// Answered like a GET for static assets, without the body
    Head,
    Post,
    Other,
}

/// A request stripped of transport details
#[derive(Debug, Clone, Copy)]
pub struct ApiRequest<'a> {
    pub method: HttpMethod,
    /// Path without query string
    pub path: &'a str,
    pub session_id: Option<&'a str>,
    pub body: &'a [u8],
}

/// A JSON response, plus a cookie when a session was created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub set_cookie: Option<String>,
}

impl ApiResponse {
    fn json<T: Serialize>(status: u16, payload: &T) -> Self {
        // Our payloads are plain structs with string keys; serialization
        // cannot fail for them
        let body = serde_json::to_vec(payload).unwrap_or_default();
        Self {
            status,
            body,
            set_cookie: None,
        }
    }

    fn game(view: &GameView) -> Self {
        Self::json(200, view)
    }
}

/// Body of `POST /api/new-game`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameRequest {
    #[serde(default)]
    pub word_length: Option<Value>,
}

impl NewGameRequest {
    /// Requested length, defaulting to five letters
    ///
    /// Accepts a JSON integer, an integral float, or a string holding an
    /// integer.
    ///
    /// # Errors
    /// Returns `ApiError::WordLengthNotInteger` for anything else, or
    /// `ApiError::UnsupportedLength` for lengths that cannot be played.
    pub fn word_length(&self) -> Result<usize, ApiError> {
        let length = match &self.word_length {
            None | Some(Value::Null) => return Ok(DEFAULT_WORD_LENGTH),
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
            Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
            Some(_) => None,
        }
        .ok_or(ApiError::WordLengthNotInteger)?;

        usize::try_from(length)
            .ok()
            .filter(|len| SUPPORTED_WORD_LENGTHS.contains(len))
            .ok_or(ApiError::UnsupportedLength)
    }
}

/// Body of `POST /api/guess`
#[derive(Debug, Default, Deserialize)]
pub struct GuessRequest {
    #[serde(default)]
    pub guess: Option<Value>,
}

impl GuessRequest {
    /// The guess as text
    ///
    /// Numbers and booleans are taken as their JSON text, so they fail the
    /// letter check rather than the body check. Missing or `null` is empty.
    #[must_use]
    pub fn text(&self) -> String {
        match &self.guess {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Request-level failures, each mapped to a status code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InvalidJson,
    BodyTooLarge,
    UnreadableBody,
    WordLengthNotInteger,
    UnsupportedLength,
    NoActiveGame,
    NoGameToGuess,
    InvalidGuess(GameError),
    UnknownEndpoint,
    MethodNotAllowed,
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::InvalidJson
            | Self::UnreadableBody
            | Self::WordLengthNotInteger
            | Self::UnsupportedLength
            | Self::InvalidGuess(_) => 400,
            Self::NoActiveGame | Self::NoGameToGuess | Self::UnknownEndpoint => 404,
            Self::MethodNotAllowed => 405,
            Self::BodyTooLarge => 413,
        }
    }

    /// JSON `{error}` response for this failure
    #[must_use]
    pub fn response(&self) -> ApiResponse {
        ApiResponse::json(
            self.status(),
            &ErrorBody {
                error: self.to_string(),
            },
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson => write!(f, "Invalid JSON body"),
            Self::BodyTooLarge => write!(f, "Request body too large"),
            Self::UnreadableBody => write!(f, "Could not read request body"),
            Self::WordLengthNotInteger => write!(f, "wordLength must be an integer"),
            Self::UnsupportedLength => write!(f, "Unsupported word length"),
            Self::NoActiveGame => write!(f, "No active game"),
            Self::NoGameToGuess => write!(f, "No active game. Start a new one first."),
            Self::InvalidGuess(e) => write!(f, "{e}"),
            Self::UnknownEndpoint => write!(f, "Unknown endpoint"),
            Self::MethodNotAllowed => write!(f, "Method not allowed"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Parse a JSON body, treating a zero-length body as `{}`
fn parse_body<'de, T: Deserialize<'de> + Default>(body: &'de [u8]) -> Result<T, ApiError> {
    if body.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        debug!("Rejected request body: {e}");
        ApiError::InvalidJson
    })
}

/// `POST /api/new-game`
///
/// # Errors
/// Returns `ApiError` for a malformed body or unsupported length.
pub fn new_game(store: &SessionStore, body: &[u8]) -> Result<GameView, ApiError> {
    let request: NewGameRequest = parse_body(body)?;
    let word_length = request.word_length()?;
    store.create(word_length).map_err(|e| match e {
        SessionError::UnsupportedLength(_) => ApiError::UnsupportedLength,
        SessionError::NotFound => ApiError::NoActiveGame,
        SessionError::Game(g) => ApiError::InvalidGuess(g),
    })
}

/// `POST /api/guess`
///
/// The session is checked before the body is parsed.
///
/// # Errors
/// Returns `ApiError` for a missing session, malformed body or rejected
/// guess.
pub fn guess(
    store: &SessionStore,
    session_id: Option<&str>,
    body: &[u8],
) -> Result<GameView, ApiError> {
    let id = session_id.ok_or(ApiError::NoGameToGuess)?;
    store.snapshot(id).map_err(|_| ApiError::NoGameToGuess)?;

    let request: GuessRequest = parse_body(body)?;
    store.guess(id, &request.text()).map_err(|e| match e {
        SessionError::Game(g) => ApiError::InvalidGuess(g),
        SessionError::NotFound | SessionError::UnsupportedLength(_) => ApiError::NoGameToGuess,
    })
}

/// `GET /api/state`
///
/// # Errors
/// Returns `ApiError::NoActiveGame` without a known session.
pub fn state(store: &SessionStore, session_id: Option<&str>) -> Result<GameView, ApiError> {
    session_id
        .and_then(|id| store.snapshot(id).ok())
        .ok_or(ApiError::NoActiveGame)
}

/// Dispatch an API request
///
/// Returns `None` for a GET outside the API, or any HEAD, which the caller
/// serves as a static asset.
#[must_use]
pub fn handle(store: &SessionStore, request: &ApiRequest<'_>) -> Option<ApiResponse> {
    let result = match (request.method, request.path) {
        (HttpMethod::Get, STATE_PATH) => state(store, request.session_id).map(|v| ApiResponse::game(&v)),
        (HttpMethod::Get | HttpMethod::Head, _) => return None,
        (HttpMethod::Post, NEW_GAME_PATH) => new_game(store, request.body).map(|view| {
            let mut response = ApiResponse::game(&view);
            response.set_cookie = Some(session_cookie(&view.id));
            response
        }),
        (HttpMethod::Post, GUESS_PATH) => {
            guess(store, request.session_id, request.body).map(|v| ApiResponse::game(&v))
        }
        (HttpMethod::Post, _) => Err(ApiError::UnknownEndpoint),
        (HttpMethod::Other, _) => Err(ApiError::MethodNotAllowed),
    };
    Some(result.unwrap_or_else(|e| e.response()))
}
