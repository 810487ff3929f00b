//! Page composition: shared shell chrome plus per-level bodies.
//!
//! The composer has one deliberate trust boundary: `render_shell` inserts its
//! body argument verbatim. Callers decide what is safe to pass — EASY and
//! MEDIUM bodies carry the unescaped comment on purpose, HARD escapes before
//! the body is built.

mod level;
mod shell;

pub use level::render_level_body;
pub use shell::{render_shell, HOME_BODY};
