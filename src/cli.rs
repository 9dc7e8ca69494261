//! Minimal CLI: decode schemas → (check | reencode)
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use json_schema_union::{Schema, path_de};
use rayon::prelude::*;
use serde_json::Value;

use crate::jq_exec::JqFilter;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// decode JSON Schema documents into typed schemas, report their kinds, or re-encode them
#[derive(Parser, Debug)]
#[command(version)]
pub struct CommandLineInterface {
    /// more log output (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// decode every input and print its schema kind or the decode error
    Check(CheckOut),
    /// decode every input and print it encoded back to JSON Schema
    Reencode(ReencodeOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select a subnode in each document (e.g. /properties/address)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ filter applied after the pointer; every output is checked as its own schema
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct CheckOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct ReencodeOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// single-line output instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

/// One schema document and where it came from (`file`, `file#2` for jq outputs).
///
/// `doc` is an error when the input could not be read, parsed or selected;
/// `check` reports that as a failed row instead of aborting the run.
struct SourceDocument {
    origin: String,
    doc: Result<Value>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_documents(&self) -> Result<Vec<SourceDocument>> {
        let source_paths = resolve_file_path_patterns(&self.input)?;
        let jq = self.jq_expr.as_deref().map(JqFilter::compile).transpose()?;

        // read + parse in parallel; selection runs in input order afterwards
        let parsed = source_paths
            .par_iter()
            .map(|path| (path.to_string_lossy().to_string(), read_document(path)))
            .collect::<Vec<_>>();

        let mut out = Vec::new();
        for (origin, doc) in parsed {
            let doc = doc.and_then(|doc| self.select(doc, &origin));
            match (doc, jq.as_ref()) {
                (Err(error), _) => {
                    tracing::warn!(%origin, "skipping unreadable input");
                    out.push(SourceDocument { origin, doc: Err(error) });
                }
                (Ok(doc), None) => out.push(SourceDocument { origin, doc: Ok(doc) }),
                (Ok(doc), Some(jq)) => match jq.apply(&doc) {
                    Ok(results) => {
                        for (ix, doc) in results.into_iter().enumerate() {
                            out.push(SourceDocument { origin: format!("{origin}#{ix}"), doc: Ok(doc) });
                        }
                    }
                    Err(error) => {
                        let doc = Err(error.context(format!("failed to apply jq expression to {origin}")));
                        out.push(SourceDocument { origin, doc });
                    }
                },
            }
        }
        tracing::info!(documents = out.len(), files = source_paths.len(), "loaded inputs");
        Ok(out)
    }

    fn select(&self, doc: Value, origin: &str) -> Result<Value> {
        match self.json_pointer.as_deref() {
            None => Ok(doc),
            Some(pointer) => doc
                .pointer(pointer)
                .cloned()
                .ok_or_else(|| anyhow!("JSON pointer `{pointer}` matched nothing in {origin}")),
        }
    }
}

/// Print one ✔/✘ row per document; returns how many failed.
fn check_documents(documents: &[SourceDocument]) -> usize {
    let mut failed = 0usize;
    for SourceDocument { origin, doc } in documents {
        let decoded = doc
            .as_ref()
            .map_err(|error| format!("{error:#}"))
            .and_then(|doc| Schema::from_value(doc).map_err(|error| error.to_string()));
        match decoded {
            Ok(schema) => {
                println!("{} {origin} ({})", "✔".green(), schema.schema_type());
            }
            Err(message) => {
                failed += 1;
                println!("{} {origin}: {}", "✘".red(), message.red());
            }
        }
    }
    failed
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    /// `Ok(false)` means every input was processed but some failed to decode.
    pub fn run(&self) -> Result<bool> {
        match &self.cmd {
            Command::Check(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(true);
                }
                let documents = target.input_settings.load_documents()?;
                let failed = check_documents(&documents);
                tracing::info!(total = documents.len(), failed, "check finished");
                Ok(failed == 0)
            }
            Command::Reencode(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(true);
                }
                let documents = target.input_settings.load_documents()?;
                let mut encoded = Vec::with_capacity(documents.len());
                for SourceDocument { origin, doc } in documents {
                    let doc = doc?;
                    let schema = Schema::from_value(&doc)
                        .with_context(|| format!("failed to decode schema {origin}"))?;
                    let value = schema
                        .to_value()
                        .with_context(|| format!("failed to encode schema {origin}"))?;
                    encoded.push(value);
                }
                let output = match encoded.len() {
                    1 => encoded.remove(0),
                    _ => Value::Array(encoded),
                };
                let output_src = if target.compact {
                    serde_json::to_string(&output)?
                } else {
                    serde_json::to_string_pretty(&output)?
                };
                match target.out.as_ref() {
                    Some(out) => write_output(out, &output_src)?,
                    None => println!("{output_src}"),
                }
                Ok(true)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn read_document(path: &Path) -> Result<Value> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read source file {}", path.display()))?;
    let doc = path_de::document_from_slice(&bytes)
        .with_context(|| format!("failed to parse JSON source file ({})", path.display()))?;
    Ok(doc)
}

fn write_output(out: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(out, contents).with_context(|| format!("failed to write {}", out.display()))
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern).with_context(|| format!("bad glob pattern: {pattern}"))? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
