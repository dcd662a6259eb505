//! Greetings view layer crate.
//!
//! This crate contains the pages served by the greetweb endpoints: the
//! greeting view (`greeting`), the name-list view (`names`), the static
//! form page (`form`), and the HTML-escaping helper the dynamic views
//! share (`escape`). Pages are rendered from code with `format!`; keeping
//! the HTML here avoids runtime template dependencies.
//!
/// HTML escaping module
pub mod escape;
/// Greeting page rendering module
pub mod greeting;
/// Name-list page rendering module
pub mod names;
/// Static form page
pub mod form;
#[cfg(test)]
mod tests {
    use crate::{escape::escape, form::FORM_PAGE, greeting, names};

    /// Test the greeting text appears verbatim in the rendered page
    #[test]
    fn greeting_renders_message() {
        let page = greeting::page("Hello, Jolene!");
        assert!(page.contains("Hello, Jolene!"));
    }

    /// Test markup inside the greeting value is escaped at render time
    #[test]
    fn greeting_escapes_markup() {
        let page = greeting::page("Hello, <b>coder</b>!");
        assert!(page.contains("Hello, &lt;b&gt;coder&lt;/b&gt;!"));
        assert!(!page.contains("<b>coder</b>"));
    }

    /// Test names render as list items in the given order
    #[test]
    fn names_render_in_order() {
        let page = names::page(&["LaunchCode", "Java", "JavaScript"]);
        let first = page.find("<li>LaunchCode</li>").unwrap();
        let second = page.find("<li>Java</li>").unwrap();
        let third = page.find("<li>JavaScript</li>").unwrap();
        assert!(first < second);
        assert!(second < third);
    }

    /// Test the same input always renders the same list page
    #[test]
    fn names_rendering_is_stable() {
        let names = ["LaunchCode", "Java", "JavaScript"];
        assert_eq!(names::page(&names), names::page(&names));
    }

    /// Test the form page submits a "coder" field to /hello
    #[test]
    fn form_posts_coder_to_hello() {
        assert!(FORM_PAGE.contains(r#"action="/hello""#));
        assert!(FORM_PAGE.contains(r#"method="post""#));
        assert!(FORM_PAGE.contains(r#"name="coder""#));
    }

    /// Test every HTML-significant character gets replaced
    #[test]
    fn escape_replaces_specials() {
        assert_eq!(
            escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }
}
