//! Integration Test: Panicking Shortcut Prohibition
//!
//! **Policy**: Pointer coordinates and terminal sizes are untrusted input.
//! Out-of-range values are dropped where they arrive and fatal startup
//! errors are returned, so production code MUST NOT unwrap.
//!
//! **Acceptable**: `unwrap_or`, `unwrap_or_else`, `unwrap_or_default`, and
//! anything inside `#[cfg(test)]`.

use architectural_enforcement::{check_directory, report, tui_src, Rule};

const RULES: &[Rule] = &[
    Rule {
        pattern: ".unwrap()",
        reason: "Panicking unwrap",
    },
    Rule {
        pattern: ".expect(",
        reason: "Panicking expect",
    },
];

#[test]
fn test_no_unwrap_in_production_code() {
    let src = tui_src();
    assert!(src.is_dir(), "missing {}", src.display());

    let violations = check_directory(&src, RULES);

    report("Panicking calls found in production code!", &violations);
}
