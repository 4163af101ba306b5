//! Integration Test: Global Mutable State Prohibition
//!
//! **Policy**: The easel state is one owned value threaded through every
//! event handler. Production code MUST NOT keep mutable state outside it.

use architectural_enforcement::{check_directory, report, tui_src, Rule};

const RULES: &[Rule] = &[
    Rule {
        pattern: "static mut",
        reason: "Mutable static",
    },
    Rule {
        pattern: "thread_local!",
        reason: "Thread-local state",
    },
    Rule {
        pattern: "lazy_static!",
        reason: "Lazily initialized global",
    },
];

#[test]
fn test_no_global_mutable_state() {
    let src = tui_src();
    assert!(src.is_dir(), "missing {}", src.display());

    let violations = check_directory(&src, RULES);

    report("Global mutable state found in production code!", &violations);
}
