//! Static form page served by the /form endpoint.
//!
//! A constant HTML page with a single text input. Submitting it posts the
//! "coder" field to /hello, which renders the greeting view. There is no
//! server-side processing behind this page itself.
//!
/// HTML page with the greeting form
pub const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Greeting Form</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
        body { background: #121212; color: #e0e0e0; font-family: 'Segoe UI', sans-serif; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; }
        .form-card { background: #1e1e1e; padding: 2rem; border-radius: 12px; box-shadow: 0 10px 30px rgba(0,0,0,0.5); width: 100%; max-width: 350px; }
        h2 { text-align: center; color: #00ff41; margin-bottom: 1.5rem; font-family: monospace; }
        input { width: 100%; padding: 12px; margin: 10px 0; border-radius: 6px; border: 1px solid #333; background: #252525; color: white; box-sizing: border-box; }
        button { width: 100%; padding: 12px; background: #007bff; border: none; color: white; border-radius: 6px; cursor: pointer; font-weight: bold; margin-top: 10px; }
        button:hover { background: #0056b3; }
    </style>
</head>
<body>
    <div class="form-card">
        <h2>WHO_TO_GREET</h2>
        <form action="/hello" method="post">
            <input type="text" name="coder" placeholder="Your name" required>
            <button type="submit">Greet me</button>
        </form>
    </div>
</body>
</html>"#;
