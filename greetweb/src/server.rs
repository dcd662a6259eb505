//! Web server module for greetweb.
//!
//! Builds the route table for the greeting endpoints and serves it over
//! plain HTTP. Handlers are stateless: each one binds its inputs through
//! axum extractors, builds a message or list, and either renders a page
//! from the `greetviews` crate or returns a plain-text body directly.
//!
use axum::{
    Form, Router,
    extract::{Path, Query},
    response::Html,
    routing::{get, post},
};
use serde::Deserialize;
use tracing::info;

use crate::config::CONFIG;
use greetviews::{form::FORM_PAGE, greeting, names};

/// Start the web server on the configured address
pub async fn run() {
    let addr = format!("{}:{}", CONFIG.host, CONFIG.port)
        .parse::<std::net::SocketAddr>()
        .unwrap();

    info!("🌐 Greeting pages at http://{}/hello?coder=you", addr);

    axum_server::bind(addr)
        .serve(router().into_make_service())
        .await
        .unwrap();
}

/// Route table mapping every endpoint to its handler
fn router() -> Router {
    Router::new()
        .route("/hello", get(hello_from_query).post(hello_from_form))
        .route("/hello/{name}", get(hello_from_path))
        .route("/goodbye", post(goodbye))
        .route("/hellogoodbye", get(hello_goodbye).post(hello_goodbye))
        .route("/form", get(show_form_page))
        .route("/hello-names", get(hello_names_page))
}

/// Input for the /hello endpoints, from query string or form body
#[derive(Deserialize)]
struct HelloInput {
    /// Name of the coder to greet
    pub coder: String,
}

/// Build the greeting text shown by every /hello variant
fn greeting_message(who: &str) -> String {
    format!("Hello, {}!", who)
}

/// Greet the coder named in the query string
///
/// The `coder` parameter is required; axum rejects requests without it
/// before this handler runs.
async fn hello_from_query(Query(input): Query<HelloInput>) -> Html<String> {
    Html(greeting::page(&greeting_message(&input.coder)))
}

/// Greet the coder named in the submitted form
async fn hello_from_form(Form(input): Form<HelloInput>) -> Html<String> {
    Html(greeting::page(&greeting_message(&input.coder)))
}

/// Greet the coder named in the path segment
async fn hello_from_path(Path(name): Path<String>) -> Html<String> {
    Html(greeting::page(&greeting_message(&name)))
}

/// Plain-text farewell body
async fn goodbye() -> &'static str {
    "Goodbye, world"
}

/// Plain-text combined greeting and farewell body
async fn hello_goodbye() -> &'static str {
    "Hello and goodbye, world"
}

/// Display the static greeting form page
async fn show_form_page() -> Html<&'static str> {
    Html(FORM_PAGE)
}

/// Display the fixed list of coder names
///
/// The list is built fresh on every request; nothing accumulates between
/// calls.
async fn hello_names_page() -> Html<String> {
    let coder_names = ["LaunchCode", "Java", "JavaScript"];

    Html(names::page(&coder_names))
}
