//! Encoder and filter behavior tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use xsslab_core::encode::{escape_html, strip_script_tag};

#[test]
fn escape_covers_all_five_specials() {
    assert_eq!(escape_html("&<>\"'"), "&amp;&lt;&gt;&quot;&#39;");
}

#[test]
fn escape_passes_plain_text_through() {
    assert_eq!(escape_html(""), "");
    assert_eq!(escape_html("hello world"), "hello world");
    assert_eq!(escape_html("héllo ✓ 日本語"), "héllo ✓ 日本語");
}

#[test]
fn escape_is_idempotent_only_without_specials() {
    for s in ["", "plain", "no specials here 123", "日本語"] {
        assert_eq!(escape_html(&escape_html(s)), escape_html(s), "input={s}");
    }
    // Re-escaping existing entities is deliberate, not a bug.
    assert_eq!(escape_html("&lt;"), "&amp;lt;");
    assert_ne!(escape_html(&escape_html("<")), escape_html("<"));
}

#[test]
fn escape_never_leaves_angle_brackets() {
    for s in [
        "<script>alert(1)</script>",
        "a<b>c",
        "<<>>",
        "&lt;already&gt;",
        "\"quoted\" & 'single'",
    ] {
        let out = escape_html(s);
        assert!(!out.contains('<'), "input={s} out={out}");
        assert!(!out.contains('>'), "input={s} out={out}");
    }
}

#[test]
fn strip_removes_exact_lowercase_tag() {
    assert_eq!(strip_script_tag("x<script>y"), "xy");
    assert_eq!(strip_script_tag("<script><script>"), "");
    assert_eq!(strip_script_tag("<script>alert(1)</script>"), "alert(1)</script>");
    assert_eq!(strip_script_tag(""), "");
}

#[test]
fn strip_ignores_case_variants_and_attributes() {
    // The evasion surface: only the exact literal is matched.
    assert_eq!(strip_script_tag("x<SCRIPT>y"), "x<SCRIPT>y");
    assert_eq!(strip_script_tag("<script src=x>"), "<script src=x>");
    assert_eq!(strip_script_tag("<img onerror=alert(1)>"), "<img onerror=alert(1)>");
    assert_eq!(strip_script_tag("<svg onload=alert(1)>"), "<svg onload=alert(1)>");
}

#[test]
fn strip_single_pass_reconstitutes_nested_tag() {
    // Removing the inner literal once leaves a brand-new <script>.
    assert_eq!(strip_script_tag("<scr<script>ipt>"), "<script>");
    assert_eq!(
        strip_script_tag("<scr<script>ipt>alert(1)</script>"),
        "<script>alert(1)</script>"
    );
}
