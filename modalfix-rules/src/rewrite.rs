//! Ordered pattern table that rewrites legacy `alert(...)` / `confirm(...)`
//! calls into awaited modal-service calls.
//!
//! Rule order is significant: quote-aware rules (which can see the message
//! and classify it) must run before the generic head catch-alls, otherwise
//! the catch-all pre-empts classification. A candidate head must not be
//! preceded by a word character, `$`, or `.`, which keeps `showAlert(`,
//! `myalert(` and member-expression suffixes out of reach and makes the whole
//! pass idempotent.

use crate::classify::classify_message;
use modalfix_types::NotificationKind;
use regex::{Captures, Regex};
use tracing::trace;

/// Result of one rewriting pass over a file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub text: String,
    /// Legacy call heads present before the pass.
    pub calls_found: u64,
    /// Legacy call heads no longer present after the pass.
    pub calls_replaced: u64,
}

/// How a matched rule produces its replacement text.
enum Replacement {
    /// Fixed target category; only the call head changes, the argument text
    /// (whatever its shape) is left untouched.
    Head(NotificationKind),
    /// Classifier-driven: the captured message decides the category; the
    /// original quoting is re-emitted byte-for-byte around it.
    Classified { quote: &'static str },
    /// `if (!confirm(<msg>))` guard, re-wrapped so the awaited call stays a
    /// single parenthesized operand.
    ConfirmGuard { quote: &'static str },
}

struct RewriteRule {
    pattern: Regex,
    replacement: Replacement,
}

impl RewriteRule {
    fn apply(&self, text: &str) -> String {
        match &self.replacement {
            Replacement::Head(kind) => self
                .pattern
                .replace_all(text, |caps: &Captures<'_>| {
                    format!("{}await {}(", &caps[1], kind.target_call())
                })
                .into_owned(),
            Replacement::Classified { quote } => self
                .pattern
                .replace_all(text, |caps: &Captures<'_>| {
                    let msg = &caps[2];
                    let kind = classify_message(msg);
                    trace!(message = msg, ?kind, "classified alert call");
                    format!(
                        "{}await {}({q}{}{q})",
                        &caps[1],
                        kind.target_call(),
                        msg,
                        q = quote
                    )
                })
                .into_owned(),
            Replacement::ConfirmGuard { quote } => self
                .pattern
                .replace_all(text, |caps: &Captures<'_>| {
                    format!("if (!(await showConfirm({q}{}{q})))", &caps[1], q = quote)
                })
                .into_owned(),
        }
    }
}

/// Applies the ordered rule table to a file's full text.
pub struct CallRewriter {
    rules: Vec<RewriteRule>,
    legacy_head: Regex,
}

// Head guard: start of text, or any char that cannot end an identifier or a
// member expression.
const BOUNDARY: &str = r"(^|[^\w$.])";

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static rewrite pattern")
}

impl CallRewriter {
    pub fn new() -> Self {
        let mut rules = Vec::new();

        // Negated confirm guards first; their text overlaps the generic
        // confirm head.
        for (quote, body) in [
            ("'", r"(?:[^'\\]|\\.)*"),
            ("\"", r#"(?:[^"\\]|\\.)*"#),
            ("`", r"[^`]*"),
        ] {
            rules.push(RewriteRule {
                pattern: re(&format!(
                    r"if\s*\(\s*!\s*confirm\s*\(\s*{q}({body}){q}\s*\)\s*\)",
                    q = quote
                )),
                replacement: Replacement::ConfirmGuard { quote },
            });
        }

        // Any remaining confirm head.
        rules.push(RewriteRule {
            pattern: re(&format!(r"{BOUNDARY}confirm\s*\(")),
            replacement: Replacement::Head(NotificationKind::Confirm),
        });

        // Static-argument alert calls: classify the message, keep the quotes.
        for (quote, body) in [
            ("'", r"(?:[^'\\]|\\.)*"),
            ("\"", r#"(?:[^"\\]|\\.)*"#),
            ("`", r"[^`]*"),
        ] {
            rules.push(RewriteRule {
                pattern: re(&format!(
                    r"{BOUNDARY}alert\s*\(\s*{q}({body}){q}\s*\)",
                    q = quote
                )),
                replacement: Replacement::Classified { quote },
            });
        }

        // Catch-all: bare identifiers, member expressions, fallback
        // expressions. Argument text stays as-is.
        rules.push(RewriteRule {
            pattern: re(&format!(r"{BOUNDARY}alert\s*\(")),
            replacement: Replacement::Head(NotificationKind::Alert),
        });

        Self {
            rules,
            legacy_head: re(&format!(r"{BOUNDARY}(?:alert|confirm)\s*\(")),
        }
    }

    fn count_legacy(&self, text: &str) -> u64 {
        self.legacy_head.find_iter(text).count() as u64
    }

    /// True when `text` still contains at least one legacy call head.
    pub fn contains_legacy_calls(&self, text: &str) -> bool {
        self.legacy_head.is_match(text)
    }

    /// Rewrite all legacy calls in `text`. A text with no legacy call heads
    /// is returned unchanged.
    pub fn rewrite(&self, text: &str) -> RewriteOutcome {
        let calls_found = self.count_legacy(text);
        if calls_found == 0 {
            return RewriteOutcome {
                text: text.to_string(),
                calls_found: 0,
                calls_replaced: 0,
            };
        }

        let mut current = text.to_string();
        for rule in &self.rules {
            current = rule.apply(&current);
        }

        let remaining = self.count_legacy(&current);
        RewriteOutcome {
            calls_replaced: calls_found.saturating_sub(remaining),
            calls_found,
            text: current,
        }
    }
}

impl Default for CallRewriter {
    fn default() -> Self {
        Self::new()
    }
}
