//! Rewrite engine: turn legacy blocking notification calls into awaited
//! modal-service calls, and repair the wiring those calls need.
//!
//! This crate owns *what* a file's text should become. It does not own file
//! selection or persistence; that's `modalfix-core`.
//!
//! Everything here is pure text-in/text-out and idempotent: running any pass
//! on its own output is a no-op. There is no parser — matching is structural
//! pattern matching over raw source text, best-effort by design.

mod classify;
mod rewrite;
mod wiring;

pub use classify::classify_message;
pub use rewrite::{CallRewriter, RewriteOutcome};
pub use wiring::{WiringOptions, WiringOutcome, WiringRepairer, WiringState};
