//! Fixed page chrome shared by every route.

const SHELL_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>XSS Training Lab</title>
    <style>
        body { font-family: sans-serif; max-width: 800px; margin: 2rem auto; padding: 0 1rem; background: #f4f4f9; }
        .container { background: white; padding: 2rem; border-radius: 8px; box-shadow: 0 2px 5px rgba(0,0,0,0.1); }
        .nav { margin-bottom: 20px; border-bottom: 2px solid #eee; padding-bottom: 10px; }
        .nav a { margin-right: 15px; text-decoration: none; color: #d63384; font-weight: bold; }
        .nav a:hover { text-decoration: underline; }
        .code-block { background: #272822; color: #f8f8f2; padding: 15px; border-radius: 5px; overflow-x: auto; font-family: monospace; }
        .comment-box { background: #fff3cd; border: 1px solid #ffeeba; padding: 15px; margin-top: 20px; border-radius: 5px; }
        .safe-box { background: #d1e7dd; border: 1px solid #badbcc; padding: 15px; margin-top: 20px; border-radius: 5px; }
        input[type="text"] { padding: 8px; width: 70%; border: 1px solid #ccc; border-radius: 4px; }
        button { padding: 8px 15px; background: #d63384; color: white; border: none; border-radius: 4px; cursor: pointer; }
        button:hover { background: #a61e61; }
        hr { border: 0; border-top: 1px solid #eee; margin: 20px 0; }
    </style>
</head>
<body>
    <div class="container">
        <h1>XSS (Cross-Site Scripting) Lab</h1>
        <div class="nav">
            <a href="/">Home</a>
            <a href="/easy">Level 1: Easy</a>
            <a href="/medium">Level 2: Medium</a>
            <a href="/hard">Level 3: Hard</a>
        </div>

"#;

const SHELL_TAIL: &str = r#"
    </div>
</body>
</html>
"#;

/// Static welcome content for `GET /`. Contains no user input.
pub const HOME_BODY: &str = r#"<h3>Welcome to the XSS Lab</h3>
<p>XSS occurs when an application includes untrusted data in a web page without proper validation or escaping.</p>
<ul>
    <li><strong>Goal:</strong> Make a JavaScript alert popup appear: <code>alert(1)</code></li>
    <li><strong>Level 1:</strong> No protections. Direct reflection.</li>
    <li><strong>Level 2:</strong> Weak filter (removes &lt;script&gt; tags).</li>
    <li><strong>Level 3:</strong> Context-aware encoding (Secure).</li>
</ul>"#;

/// Wrap a body in the fixed chrome.
///
/// `body_html` goes in verbatim — the shell performs no escaping and trusts
/// its caller completely.
pub fn render_shell(body_html: &str) -> String {
    let mut out = String::with_capacity(SHELL_HEAD.len() + body_html.len() + SHELL_TAIL.len());
    out.push_str(SHELL_HEAD);
    out.push_str(body_html);
    out.push_str(SHELL_TAIL);
    out
}
