//! Greeting view shown by the /hello endpoints.
//!
//! Renders the message built by the handlers into a complete HTML page.
//! The handler supplies the full greeting text and this module places it
//! in the page body, escaped the way a template engine would escape a
//! bound value. Keep the markup here in sync with the `form` page styling.
//!
use crate::escape::escape;

/// Render the greeting page with the supplied message
///
/// # Arguments
/// * `greeting` - Full greeting text, e.g. "Hello, coder!"
pub fn page(greeting: &str) -> String {
    format!(
        "<html><head><title>Hello</title></head>
        <body style='background:#1a1a1a;color:#e0e0e0;font-family:Segoe UI,sans-serif;text-align:center;padding:50px;'>
            <h1>{}</h1>
            <p><a href='/form' style='color:#007bff;'>Greet someone else</a></p>
        </body></html>",
        escape(greeting)
    )
}
