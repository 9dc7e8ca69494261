//! Fixture runner: `fixtures/valid` must decode and re-encode unchanged,
//! `fixtures/invalid` must fail to decode.
//!
//! Usage: `dev-test-runner [NAME_REGEX]`
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use colored::Colorize;
use json_schema_union::Schema;
use regex::Regex;
use serde_json::Value;

#[derive(Debug, Clone, Copy)]
enum Expect {
    RoundTrip,
    Reject,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("fixtures")
}

fn list_fixtures(dir: &Path, filter: Option<&Regex>) -> std::io::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }
        let name = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
        if filter.is_some_and(|rx| !rx.is_match(&name)) {
            continue;
        }
        out.push(path);
    }
    out.sort();
    Ok(out)
}

fn run_one(path: &Path, expect: Expect) -> Result<String, String> {
    let bytes = std::fs::read(path).map_err(|e| format!("read failed: {e}"))?;
    let decoded = Schema::from_bytes(&bytes);
    match (expect, decoded) {
        (Expect::Reject, Err(error)) => Ok(format!("rejected: {error}")),
        (Expect::Reject, Ok(schema)) => Err(format!("decoded as {} but should fail", schema.schema_type())),
        (Expect::RoundTrip, Err(error)) => Err(format!("decode failed: {error}")),
        (Expect::RoundTrip, Ok(schema)) => {
            let original: Value = serde_json::from_slice(&bytes).map_err(|e| e.to_string())?;
            let encoded = schema.to_value().map_err(|e| format!("encode failed: {e}"))?;
            if encoded != original {
                return Err(format!("re-encoded document differs:\n  in:  {original}\n  out: {encoded}"));
            }
            let again = Schema::from_value(&encoded).map_err(|e| format!("re-decode failed: {e}"))?;
            if again != schema {
                return Err("decode(encode(schema)) != schema".to_string());
            }
            Ok(schema.schema_type().to_string())
        }
    }
}

fn main() -> ExitCode {
    let filter = match std::env::args().nth(1).map(|src| Regex::new(&src)).transpose() {
        Ok(x) => x,
        Err(error) => {
            eprintln!("invalid filter regex: {error}");
            return ExitCode::from(2);
        }
    };
    let root = fixtures_root();
    let mut passed = 0usize;
    let mut failed = 0usize;
    for (sub, expect) in [("valid", Expect::RoundTrip), ("invalid", Expect::Reject)] {
        let fixtures = match list_fixtures(&root.join(sub), filter.as_ref()) {
            Ok(x) => x,
            Err(error) => {
                eprintln!("failed to list {sub} fixtures: {error}");
                return ExitCode::from(2);
            }
        };
        for path in fixtures {
            let name = path.display();
            match run_one(&path, expect) {
                Ok(note) => {
                    passed += 1;
                    eprintln!("✅ {name} {}", note.dimmed());
                }
                Err(reason) => {
                    failed += 1;
                    eprintln!("❌ {name}: {}", reason.red());
                }
            }
        }
    }
    eprintln!("—— {passed} passed, {failed} failed ——");
    if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
