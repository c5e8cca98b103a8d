//! Minimal CLI: generate (one file) | batch (config-driven, failure-isolated)
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use crate::config::{FileEntry, GeneratorConfig};
use crate::error::GenError;
use crate::infer::Inferencer;
use crate::render;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer a structural type schema from JSON and emit a TypeScript module
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// generate types for a single JSON file
    Generate(GenerateOut),
    /// process every entry of a JSON config, isolating per-file failures
    Batch(BatchRun),
}

#[derive(Args, Debug, Clone)]
struct GenerateOut {
    /// source JSON file
    #[arg(long, short)]
    input: PathBuf,

    /// output .ts file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// top-level type name
    #[arg(long, default_value = "Root")]
    root_type: String,

    /// free-text module label for the header comment
    #[arg(long)]
    module_name: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct BatchRun {
    /// config file listing { input, output, rootTypeName, moduleName } entries
    #[arg(long, short)]
    config: PathBuf,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Generate(target) => {
                let text = generate_module_text(
                    &target.input,
                    &target.root_type,
                    target.module_name.as_deref(),
                )?;
                match target.out.as_ref() {
                    Some(out) => {
                        write_output(out, &text)?;
                        eprintln!("{} {}", "generated".green(), out.display());
                    }
                    None => println!("{text}"),
                }
                Ok(())
            }
            Command::Batch(target) => {
                let config = GeneratorConfig::load(&target.config)?;
                let report = run_batch(&config);
                report.print_summary();
                if report.failed > 0 {
                    anyhow::bail!("{} of {} files failed", report.failed, config.files.len());
                }
                Ok(())
            }
        }
    }
}

/// Outcome of one batch invocation. Failures are counted, never re-raised;
/// only the aggregate decides the exit code.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn print_summary(&self) {
        eprintln!();
        eprintln!("{}", "generation complete:".bold());
        eprintln!("  {} {}", "success:".green(), self.succeeded);
        eprintln!("  {} {}", "errors: ".red(), self.failed);
    }
}

/// Process every configured entry strictly in order, each with its own fresh
/// inference context. A failing entry is reported and skipped; later entries
/// still run.
pub fn run_batch(config: &GeneratorConfig) -> BatchReport {
    let mut report = BatchReport::default();
    for entry in &config.files {
        let input = config.input_path(entry);
        let output = config.output_path(entry);
        match generate_for_entry(entry, &input, &output) {
            Ok(()) => {
                eprintln!(
                    "{} {} → {}",
                    "ok".green().bold(),
                    entry.input.display(),
                    output.display()
                );
                report.succeeded += 1;
            }
            Err(error) => {
                eprintln!("{} {}: {error}", "error".red().bold(), entry.input.display());
                report.failed += 1;
            }
        }
    }
    report
}

fn generate_for_entry(entry: &FileEntry, input: &Path, output: &Path) -> Result<(), GenError> {
    let text =
        generate_module_text(input, &entry.root_type_name, entry.module_name.as_deref())?;
    write_output(output, &text)
}

/// The full pipeline for one file: read → parse → infer → render.
/// Nothing is written here; one run either yields a complete artifact or
/// fails with a typed error.
fn generate_module_text(
    input: &Path,
    root_type: &str,
    module_name: Option<&str>,
) -> Result<String, GenError> {
    if !input.exists() {
        return Err(GenError::InputNotFound { path: input.to_path_buf() });
    }
    let source = std::fs::read_to_string(input).map_err(|source| GenError::InputRead {
        path: input.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&source).map_err(|source| GenError::MalformedJson {
            path: input.to_path_buf(),
            source,
        })?;

    let mut inf = Inferencer::new(root_type);
    let root_expr = inf.infer_root(&value);

    let mut text = render::render_header(&display_file_name(input), module_name);
    text.push_str(&render::render_module(root_type, &root_expr, value.is_object(), &inf));
    Ok(text)
}

fn write_output(path: &Path, content: &str) -> Result<(), GenError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| GenError::OutputPath {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    std::fs::write(path, content).map_err(|source| GenError::OutputPath {
        path: path.to_path_buf(),
        source,
    })
}

fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(input: &str, output: &str, root: &str) -> FileEntry {
        FileEntry {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            root_type_name: root.to_string(),
            module_name: None,
        }
    }

    #[test]
    fn missing_input_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            data_dir: Some(dir.path().to_path_buf()),
            output_dir: Some(dir.path().join("out")),
            files: vec![entry("nope.json", "nope.ts", "Nope")],
        };
        let report = run_batch(&config);
        assert_eq!(report.succeeded, 0);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn batch_continues_past_failures() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("good.json"),
            r#"{"rooms": [{"id": "1", "name": "Deluxe", "a": 1, "b": 2, "c": 3, "d": 4, "e": 5}]}"#,
        )
        .unwrap();

        let config = GeneratorConfig {
            data_dir: Some(dir.path().to_path_buf()),
            output_dir: Some(dir.path().join("out")),
            files: vec![
                entry("missing.json", "missing.ts", "Missing"),
                entry("good.json", "rooms/types/room.types.ts", "RoomData"),
            ],
        };
        let report = run_batch(&config);
        assert_eq!(report.failed, 1);
        assert_eq!(report.succeeded, 1);

        // second file was still written, nested dirs created on demand
        let written =
            std::fs::read_to_string(dir.path().join("out/rooms/types/room.types.ts")).unwrap();
        assert!(written.contains("export interface RoomsItem {"));
        assert!(written.contains("export interface RoomData {"));
        assert!(written.contains("Generated from: good.json"));
        assert!(written.ends_with("export default RoomData;\n"));
    }

    #[test]
    fn malformed_json_carries_filename_context() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        let err = generate_module_text(&bad, "Bad", None).unwrap_err();
        assert!(matches!(err, GenError::MalformedJson { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn generate_writes_header_and_module_label() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("roomData.json");
        std::fs::write(&input, r#"{"a": 1}"#).unwrap();
        let text = generate_module_text(&input, "RoomData", Some("rooms")).unwrap();
        assert!(text.starts_with("/**\n * Auto-generated TypeScript types\n"));
        assert!(text.contains(" * Generated from: roomData.json\n"));
        assert!(text.contains(" * Module: rooms\n"));
    }

    #[test]
    fn output_below_header_is_identical_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.json");
        std::fs::write(
            &input,
            r#"{"rooms": [{"id": "1", "name": "A", "a": 1, "b": 2, "c": 3, "d": 4, "e": 5}]}"#,
        )
        .unwrap();
        let schema_of = |text: String| text.split_once("*/\n\n").unwrap().1.to_string();
        let first = schema_of(generate_module_text(&input, "RoomData", None).unwrap());
        let second = schema_of(generate_module_text(&input, "RoomData", None).unwrap());
        assert_eq!(first, second);
    }
}
