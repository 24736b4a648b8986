//! Property-based tests for the rewrite engine.
//!
//! These tests verify that:
//! - Rewriting is idempotent (a second pass never changes the output)
//! - Wiring repair is idempotent
//! - Classification is deterministic and total
//! - Quoting style survives the rewrite for every quote kind

use modalfix_rules::{classify_message, CallRewriter, WiringOptions, WiringRepairer};
use proptest::prelude::*;

/// Strategy for realistic message text: letters, digits, spaces, a few
/// Spanish characters and the status glyphs. Deliberately excludes quotes and
/// parens so messages stay static string literals.
fn arb_message() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[A-Za-z0-9áéíóúñ¿? ✅❌]{0,40}").unwrap()
}

fn arb_quote() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['\'', '"', '`'])
}

proptest! {
    #[test]
    fn rewrite_twice_equals_rewrite_once(msg in arb_message(), quote in arb_quote()) {
        let src = format!(
            "const onClick = () => {{\n  alert({q}{msg}{q});\n  if (!confirm({q}{msg}{q})) return;\n}};\n",
            q = quote
        );
        let rewriter = CallRewriter::new();
        let once = rewriter.rewrite(&src);
        let twice = rewriter.rewrite(&once.text);
        prop_assert_eq!(&once.text, &twice.text);
        prop_assert_eq!(twice.calls_replaced, 0);
    }

    #[test]
    fn quoting_is_preserved(msg in arb_message(), quote in arb_quote()) {
        let src = format!("alert({q}{msg}{q})", q = quote);
        let out = CallRewriter::new().rewrite(&src);
        let expected_arg = format!("({q}{msg}{q})", q = quote);
        prop_assert!(out.text.ends_with(&expected_arg), "got {}", out.text);
        prop_assert!(out.text.starts_with("await show"));
    }

    #[test]
    fn classification_is_total_and_deterministic(msg in arb_message()) {
        let first = classify_message(&msg);
        prop_assert_eq!(classify_message(&msg), first);
    }

    #[test]
    fn repair_twice_equals_repair_once(msg in arb_message()) {
        let src = format!(
            "import React from 'react';\n\nexport default function Page() {{\n  const go = () => {{\n    await showAlert('{}');\n  }};\n  return null;\n}}\n",
            msg.replace('\'', "")
        );
        let repairer = WiringRepairer::new(&WiringOptions::default());
        let once = repairer.repair(&src);
        let twice = repairer.repair(&once.text);
        prop_assert_eq!(&once.text, &twice.text);
        prop_assert!(!twice.changes.any());
    }

    #[test]
    fn untouched_corpus_stays_untouched(body in r"[a-z0-9 \n;=]{0,80}") {
        // No legacy heads, no notification usage: both passes are no-ops.
        prop_assume!(!body.contains("alert") && !body.contains("confirm"));
        let rewriter = CallRewriter::new();
        prop_assert_eq!(rewriter.rewrite(&body).text, body.clone());
        let repairer = WiringRepairer::new(&WiringOptions::default());
        prop_assert_eq!(repairer.repair(&body).text, body);
    }
}
