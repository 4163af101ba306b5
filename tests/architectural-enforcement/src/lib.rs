//! Architectural Enforcement
//!
//! Source scanners shared by the integration tests in `tests/`. They walk
//! `tui/src` and report forbidden patterns in production code:
//! - No ambient mutable state (`static mut`, `thread_local!`, `lazy_static!`)
//! - No panicking shortcuts (`.unwrap()`, `.expect(`)
//!
//! A file's production code ends at its first `#[cfg(test)]`; comment
//! text is ignored.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A forbidden pattern and why it is forbidden
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub pattern: &'static str,
    pub reason: &'static str,
}

/// One match of a rule in production code
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub path: PathBuf,
    pub line: usize,
    pub text: String,
    pub reason: &'static str,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} - {}: {}",
            self.path.display(),
            self.line,
            self.reason,
            self.text
        )
    }
}

/// `tui/src`, resolved from this crate's manifest directory
pub fn tui_src() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tui")
        .join("src")
}

/// Every `.rs` file under `dir`, sorted
pub fn rust_sources(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

/// Code portion of each production line, with 1-based line numbers
pub fn production_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| !line.trim_start().starts_with("#[cfg(test)]"))
        .map(|(idx, line)| (idx + 1, line.split("//").next().unwrap_or(line)))
        .filter(|(_, code)| !code.trim().is_empty())
        .collect()
}

/// Match `rules` against one file's content
pub fn check_source(path: &Path, content: &str, rules: &[Rule]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (line, code) in production_lines(content) {
        for rule in rules {
            if code.contains(rule.pattern) {
                violations.push(Violation {
                    path: path.to_path_buf(),
                    line,
                    text: code.trim().to_string(),
                    reason: rule.reason,
                });
            }
        }
    }
    violations
}

/// Match `rules` against every Rust file under `dir`
pub fn check_directory(dir: &Path, rules: &[Rule]) -> Vec<Violation> {
    rust_sources(dir)
        .iter()
        .filter_map(|path| {
            let content = fs::read_to_string(path).ok()?;
            Some(check_source(path, &content, rules))
        })
        .flatten()
        .collect()
}

/// Print violations and fail the calling test if there are any
pub fn report(title: &str, violations: &[Violation]) {
    if violations.is_empty() {
        return;
    }

    eprintln!("\n❌ {title}\n");
    for violation in violations {
        eprintln!("  ❌ {violation}");
    }

    panic!(
        "\nFound {} violation(s) in production code.\nFix these before merging!",
        violations.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNWRAP: Rule = Rule {
        pattern: ".unwrap()",
        reason: "unwrap",
    };

    #[test]
    fn test_comments_are_ignored() {
        let src = "fn f() {\n    // x.unwrap() would panic\n    g()\n}\n";
        assert!(check_source(Path::new("a.rs"), src, &[UNWRAP]).is_empty());
    }

    #[test]
    fn test_test_module_is_ignored() {
        let src = "fn f() {}\n\n#[cfg(test)]\nmod tests {\n    fn t() { x.unwrap(); }\n}\n";
        assert!(check_source(Path::new("a.rs"), src, &[UNWRAP]).is_empty());
    }

    #[test]
    fn test_production_match_is_reported_with_line() {
        let src = "fn f() {\n    let v = x.unwrap();\n}\n";
        let found = check_source(Path::new("a.rs"), src, &[UNWRAP]);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line, 2);
        assert_eq!(found[0].text, "let v = x.unwrap();");
    }

    #[test]
    fn test_unwrap_or_variants_pass() {
        let src = "fn f() { x.unwrap_or(1); y.unwrap_or_default(); z.unwrap_or_else(g); }\n";
        assert!(check_source(Path::new("a.rs"), src, &[UNWRAP]).is_empty());
    }
}
