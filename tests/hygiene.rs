//! Hygiene — enforces coding standards at test time
//!
//! Scans `src/` for constructs that would let a cosmetic enhancement crash the
//! page or swallow a browser error without a trace. Budgets are zero and never
//! grow: fix an existing hit before adding a new one.

use std::fs;
use std::path::Path;

struct Rule {
    label: &'static str,
    pattern: &'static str,
    max: usize,
}

// Panics — these abort the wasm instance and every listener with it.
const PANICS: &[Rule] = &[
    Rule { label: ".unwrap()", pattern: ".unwrap()", max: 0 },
    Rule { label: ".expect()", pattern: ".expect(", max: 0 },
    Rule { label: "panic!()", pattern: "panic!(", max: 0 },
    Rule { label: "unreachable!()", pattern: "unreachable!(", max: 0 },
    Rule { label: "todo!()", pattern: "todo!(", max: 0 },
    Rule { label: "unimplemented!()", pattern: "unimplemented!(", max: 0 },
];

// Silent loss — browser failures must be logged, not dropped.
const DISCARDS: &[Rule] = &[
    Rule { label: "let _ =", pattern: "let _ =", max: 0 },
    Rule { label: ".ok()", pattern: ".ok()", max: 0 },
];

const STRUCTURE: &[Rule] = &[Rule { label: "#[allow(dead_code)]", pattern: "#[allow(dead_code)]", max: 0 }];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs` siblings.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|line| line.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn check(rules: &[Rule]) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let mut failures = Vec::new();
    for rule in rules {
        let found = hits(&files, rule.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > rule.max {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("  {} budget exceeded: found {count}, max {}\n{detail}", rule.label, rule.max));
        }
    }
    assert!(failures.is_empty(), "hygiene violations:\n{}", failures.join("\n"));
}

#[test]
fn panic_budget() {
    check(PANICS);
}

#[test]
fn silent_discard_budget() {
    check(DISCARDS);
}

#[test]
fn dead_code_budget() {
    check(STRUCTURE);
}

#[test]
fn browser_imports_stay_in_dom_module() {
    let offenders: Vec<String> = source_files()
        .into_iter()
        .filter(|file| !file.path.replace('\\', "/").contains("src/dom/"))
        .filter(|file| file.content.lines().any(|line| line.trim_start().starts_with("use web_sys")))
        .map(|file| file.path)
        .collect();
    assert!(offenders.is_empty(), "top-level web_sys imports outside src/dom: {offenders:?}");
}
