//! Level policy table: binds each difficulty to its filter/escape pair and
//! display metadata.
//!
//! The table is `static`, built at compile time, and never mutated — it is
//! configuration, not state, so concurrent requests read it without any
//! synchronization.

use crate::encode::{escape_html, strip_script_tag};
use crate::error::{LabError, Result};

/// Lab difficulty. Exactly three values, fixed for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    /// URL path segment for this level.
    pub fn path_key(self) -> &'static str {
        match self {
            Level::Easy => "easy",
            Level::Medium => "medium",
            Level::Hard => "hard",
        }
    }
}

/// Pre-render transformation applied to the raw comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Comment passes through untouched.
    Identity,
    /// Literal `<script>` substrings removed (see `encode::strip_script_tag`).
    StripScriptTag,
}

impl Filter {
    pub fn apply(self, comment: &str) -> String {
        match self {
            Filter::Identity => comment.to_string(),
            Filter::StripScriptTag => strip_script_tag(comment),
        }
    }
}

/// Whether the filtered comment is entity-encoded before insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapePolicy {
    /// Inserted as-is. This is the XSS sink for EASY and MEDIUM.
    Raw,
    /// Entity-encoded via `encode::escape_html`. The HARD level's defense.
    HtmlEntity,
}

/// One row of the policy table.
#[derive(Debug)]
pub struct LevelPolicy {
    pub level: Level,
    pub filter: Filter,
    pub escape: EscapePolicy,
    pub title: &'static str,
    pub description: &'static str,
    /// Backend logic shown to the player inside the code block.
    pub code_snippet: &'static str,
    /// CSS class of the "most recent comment" box.
    pub result_box_class: &'static str,
}

impl LevelPolicy {
    /// Full policy pipeline: filter first, then escape iff the policy says
    /// so. The caller inserts the return value into the result box with NO
    /// further escaping — for Raw levels that insertion is the vulnerability.
    pub fn render_comment(&self, raw: &str) -> String {
        let filtered = self.filter.apply(raw);
        match self.escape {
            EscapePolicy::HtmlEntity => escape_html(&filtered),
            EscapePolicy::Raw => filtered,
        }
    }
}

static POLICIES: [LevelPolicy; 3] = [
    LevelPolicy {
        level: Level::Easy,
        filter: Filter::Identity,
        escape: EscapePolicy::Raw,
        title: "Level 1: Easy (Reflected XSS)",
        description: "Whatever you type is put directly into the HTML. No filters.",
        code_snippet: "// no filtering, no escaping\nlet result = comment;\npage.push_str(&result);",
        result_box_class: "comment-box",
    },
    LevelPolicy {
        level: Level::Medium,
        filter: Filter::StripScriptTag,
        escape: EscapePolicy::Raw,
        title: "Level 2: Medium (Filter Evasion)",
        description: "The developer removes '<script>' tags. Can you bypass this?",
        code_snippet: "// weak filter\nlet result = comment.replace(\"<script>\", \"\");\npage.push_str(&result);",
        result_box_class: "comment-box",
    },
    LevelPolicy {
        level: Level::Hard,
        filter: Filter::Identity,
        escape: EscapePolicy::HtmlEntity,
        title: "Level 3: Hard (Secure)",
        description: "This uses standard templating. The browser sees code as text, not instructions.",
        code_snippet: "// secure: entity-encode before insertion\nlet result = escape_html(&comment);\npage.push_str(&result);",
        result_box_class: "safe-box",
    },
];

impl Level {
    /// Policy row for this level.
    pub fn policy(self) -> &'static LevelPolicy {
        match self {
            Level::Easy => &POLICIES[0],
            Level::Medium => &POLICIES[1],
            Level::Hard => &POLICIES[2],
        }
    }
}

/// Resolve a URL path key to its policy row.
///
/// Anything outside the three fixed keys is `UnknownLevel`; the HTTP layer
/// turns that into a 404.
pub fn resolve(key: &str) -> Result<&'static LevelPolicy> {
    match key {
        "easy" => Ok(Level::Easy.policy()),
        "medium" => Ok(Level::Medium.policy()),
        "hard" => Ok(Level::Hard.policy()),
        other => Err(LabError::UnknownLevel(other.to_string())),
    }
}
