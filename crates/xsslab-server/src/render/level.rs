//! Per-level body composition.

use std::fmt::Write;

use xsslab_core::encode::escape_html;
use xsslab_core::level::LevelPolicy;

/// Build the body HTML for one level page.
///
/// The form's `value="..."` echo is entity-escaped on every level — an
/// injection there would just break the input field instead of demonstrating
/// the lab's sink. The result box is the sink: it receives the policy
/// pipeline's output verbatim.
pub fn render_level_body(policy: &LevelPolicy, raw_comment: &str) -> String {
    let input_value = escape_html(raw_comment);
    let result = policy.render_comment(raw_comment);

    let mut body = String::new();
    let _ = write!(
        body,
        "<h3>{title}</h3>\n\
         <p>{description}</p>\n\
         \n\
         <div class=\"code-block\">\n\
             // Backend logic <br>\n\
             {snippet}\n\
         </div>\n\
         \n\
         <hr>\n\
         \n\
         <form method=\"GET\">\n\
             <label>Post a Comment:</label><br>\n\
             <input type=\"text\" name=\"comment\" placeholder=\"Hello World\" value=\"{input_value}\">\n\
             <button type=\"submit\">Post</button>\n\
         </form>\n",
        title = escape_html(policy.title),
        description = escape_html(policy.description),
        snippet = code_block(policy.code_snippet),
    );

    // Same truthiness gate the lab has always had: a comment that filters
    // down to nothing renders no box at all.
    if !result.is_empty() {
        let _ = write!(
            body,
            "\n<div class=\"{box_class}\">\n\
                 <strong>Most Recent Comment:</strong><br>\n\
                 {result}\n\
             </div>\n",
            box_class = policy.result_box_class,
        );
    }

    body
}

/// Escape snippet text for display and turn newlines into `<br>` so the
/// multi-line snippets keep their shape inside the code block.
fn code_block(snippet: &str) -> String {
    escape_html(snippet).replace('\n', "<br>\n    ")
}
