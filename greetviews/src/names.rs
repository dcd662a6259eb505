//! Name-list view shown by the /hello-names endpoint.
//!
//! Renders a list of names as a complete HTML page. The handler supplies
//! the names and this module lays them out as list items, preserving the
//! order in which they were given.
//!
use crate::escape::escape;

/// Render the name-list page with the supplied names, in order
///
/// # Arguments
/// * `names` - Names to display, one list item each
pub fn page(names: &[&str]) -> String {
    let items: String = names
        .iter()
        .map(|name| format!("<li>{}</li>", escape(name)))
        .collect();

    format!(
        "<html><head><title>Hello, everyone</title></head>
        <body style='background:#1a1a1a;color:#e0e0e0;font-family:Segoe UI,sans-serif;padding:50px;'>
            <h1>Hello to everyone on the list</h1>
            <ul style='font-size:1.2rem;line-height:1.8;'>{}</ul>
        </body></html>",
        items
    )
}
