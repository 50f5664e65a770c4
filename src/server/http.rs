//! HTTP transport
//!
//! Accepts connections with `tiny_http` and hands each request to its own
//! thread. API requests go through [`api::handle`]; other GETs and HEADs are
//! served from the static directory.

use super::api::{self, ApiError, ApiRequest, ApiResponse, ErrorBody, HttpMethod};
use super::assets;
use super::cookies;
use crate::game::SessionStore;
use anyhow::{Result, anyhow};
use log::{info, warn};
use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use tiny_http::{Header, Method, Request, Response, Server};

/// Largest request body accepted
const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// Where and what to serve
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Bind and serve until the process exits
///
/// # Errors
/// Returns an error if the address cannot be bound.
pub fn run(config: &ServerConfig, store: Arc<SessionStore>) -> Result<()> {
    let address = config.address();
    let server = Server::http(&address).map_err(|e| anyhow!("Failed to bind {address}: {e}"))?;
    info!("Listening on http://{address}");

    let static_dir = Arc::new(config.static_dir.clone());
    for request in server.incoming_requests() {
        let store = Arc::clone(&store);
        let static_dir = Arc::clone(&static_dir);
        thread::spawn(move || respond(&store, &static_dir, request));
    }
    Ok(())
}

/// Outgoing body plus the headers it needs
struct Reply {
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
    set_cookie: Option<String>,
}

impl From<ApiResponse> for Reply {
    fn from(response: ApiResponse) -> Self {
        Self {
            status: response.status,
            content_type: "application/json",
            body: response.body,
            set_cookie: response.set_cookie,
        }
    }
}

impl Reply {
    fn into_response(self) -> Response<Cursor<Vec<u8>>> {
        let mut response = Response::from_data(self.body).with_status_code(self.status);
        if let Ok(header) = Header::from_bytes("Content-Type", self.content_type) {
            response = response.with_header(header);
        }
        if let Some(cookie) = self.set_cookie {
            if let Ok(header) = Header::from_bytes("Set-Cookie", cookie) {
                response = response.with_header(header);
            }
        }
        response
    }
}

/// Request fields the handlers need, copied out of the transport
struct Incoming {
    method: HttpMethod,
    url: String,
    session: Option<String>,
}

impl Incoming {
    fn from_request(request: &Request) -> Self {
        let method = match request.method() {
            Method::Get => HttpMethod::Get,
            Method::Head => HttpMethod::Head,
            Method::Post => HttpMethod::Post,
            _ => HttpMethod::Other,
        };
        let session = request
            .headers()
            .iter()
            .find(|h| h.field.equiv("Cookie"))
            .and_then(|h| cookies::session_id(h.value.as_str()))
            .map(str::to_string);
        Self {
            method,
            url: request.url().to_string(),
            session,
        }
    }

    fn path(&self) -> &str {
        self.url.split(['?', '#']).next().unwrap_or_default()
    }
}

fn respond(store: &SessionStore, static_dir: &Path, mut request: Request) {
    let reply = reply_for(store, static_dir, &mut request);

    let peer = request
        .remote_addr()
        .map_or_else(|| "-".to_string(), ToString::to_string);
    info!(
        "{peer} \"{} {}\" {}",
        request.method(),
        request.url(),
        reply.status
    );

    // tiny_http leaves out the body when answering a HEAD
    if let Err(e) = request.respond(reply.into_response()) {
        warn!("Failed to send response to {peer}: {e}");
    }
}

fn reply_for(store: &SessionStore, static_dir: &Path, request: &mut Request) -> Reply {
    let incoming = Incoming::from_request(request);
    let body = if incoming.method == HttpMethod::Post {
        read_body(request.as_reader())
    } else {
        Ok(Vec::new())
    };
    dispatch(store, static_dir, &incoming, body)
}

/// Read the whole body, refusing anything over [`MAX_BODY_BYTES`]
fn read_body<R: Read>(reader: R) -> Result<Vec<u8>, ApiError> {
    let mut body = Vec::new();
    reader
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| {
            warn!("Failed to read request body: {e}");
            ApiError::UnreadableBody
        })?;
    if body.len() as u64 > MAX_BODY_BYTES {
        return Err(ApiError::BodyTooLarge);
    }
    Ok(body)
}

fn dispatch(
    store: &SessionStore,
    static_dir: &Path,
    incoming: &Incoming,
    body: Result<Vec<u8>, ApiError>,
) -> Reply {
    let body = match body {
        Ok(body) => body,
        Err(e) => return e.response().into(),
    };
    let api_request = ApiRequest {
        method: incoming.method,
        path: incoming.path(),
        session_id: incoming.session.as_deref(),
        body: &body,
    };
    api::handle(store, &api_request)
        .map_or_else(|| serve_static(static_dir, &incoming.url), Reply::from)
}

fn serve_static(static_dir: &Path, url: &str) -> Reply {
    let file = assets::resolve(static_dir, url);
    match file.as_deref().map(|path| (path, fs::read(path))) {
        Some((path, Ok(body))) => Reply {
            status: 200,
            content_type: assets::content_type(path),
            body,
            set_cookie: None,
        },
        Some((path, Err(e))) => {
            warn!("Failed to read {}: {e}", path.display());
            not_found()
        }
        None => not_found(),
    }
}

fn not_found() -> Reply {
    let body = serde_json::to_vec(&ErrorBody {
        error: "Not found".to_string(),
    })
    .unwrap_or_default();
    Reply {
        status: 404,
        content_type: "application/json",
        body,
        set_cookie: None,
    }
}
