//! Minimal CLI: pick a generator → (text | plan)
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::ir::GeneratorKind;
use crate::template::Templates;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate per-arity type declarations for variadic higher-order functions
#[derive(Parser, Debug)]
#[command(name = "typedef-gen", version)]
pub struct CommandLineInterface {
    /// debug-level logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// emit the partial-application intersection type
    Partial(GenerateOut),
    /// emit one complement declaration per arity
    Complement(GenerateOut),
    /// emit test cases for the complement declarations
    ComplementTests(GenerateOut),
    /// print the default template config
    Templates(TemplatesOut),
}

#[derive(Args, Debug, Clone)]
struct GenerateOut {
    /// exclusive upper bound on generated arities (config default if omitted)
    #[arg(long)]
    max_arity: Option<usize>,

    /// template config (.toml, or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// what to print
    #[arg(long, value_enum, default_value_t = EmitFormat::Text)]
    emit: EmitFormat,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum EmitFormat {
    /// banner + generated declarations
    Text,
    /// the enumerated fragments as JSON
    Plan,
}

#[derive(Args, Debug, Clone)]
struct TemplatesOut {
    #[arg(long, value_enum, default_value_t = ConfigFormat::Toml)]
    format: ConfigFormat,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl GenerateOut {
    fn load_templates(&self) -> Result<Templates> {
        match self.config.as_ref() {
            None => Ok(Templates::default()),
            Some(path) => Templates::load(path)
                .with_context(|| format!("failed to load template config {}", path.display())),
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    /// Logs go to stderr; stdout only ever carries generated text.
    pub fn init_logging(&self) {
        let default_level = if self.verbose { "debug" } else { "info" };
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
            )
            .with_writer(std::io::stderr)
            .init();
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Partial(target) => self.run_generator(GeneratorKind::Partial, target),
            Command::Complement(target) => self.run_generator(GeneratorKind::Complement, target),
            Command::ComplementTests(target) => {
                self.run_generator(GeneratorKind::ComplementTests, target)
            }
            Command::Templates(target) => {
                let templates = Templates::default();
                let src = match target.format {
                    ConfigFormat::Toml => toml::to_string_pretty(&templates)?,
                    ConfigFormat::Json => serde_json::to_string_pretty(&templates)? + "\n",
                };
                write_output(target.out.as_deref(), &src)
            }
        }
    }
    fn run_generator(&self, generator: GeneratorKind, target: &GenerateOut) -> Result<()> {
        // debug path
        if target.no_op {
            eprintln!("{self:#?}");
            return Ok(());
        }

        let templates = target.load_templates()?;
        let src = match target.emit {
            EmitFormat::Text => crate::generator::generate_document(generator, target.max_arity, &templates)
                .with_context(|| format!("failed to generate {generator:?} declarations"))?,
            EmitFormat::Plan => {
                let max_arity = target
                    .max_arity
                    .unwrap_or_else(|| generator.default_max_arity(&templates));
                let plan = crate::arity::plan(generator, max_arity)?;
                serde_json::to_string_pretty(&plan)? + "\n"
            }
        };
        write_output(target.out.as_deref(), &src)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_output(out: Option<&Path>, src: &str) -> Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, src).with_context(|| format!("failed to write {}", out.display()))?;
            tracing::info!(path = %out.display(), bytes = src.len(), "wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(src.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        CommandLineInterface::command().debug_assert();
    }

    #[test]
    fn negative_arity_is_rejected_at_parse_time() {
        let parsed = CommandLineInterface::try_parse_from(["typedef-gen", "partial", "--max-arity", "-1"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn subcommand_names() {
        let cli = CommandLineInterface::try_parse_from(["typedef-gen", "complement-tests", "--emit", "plan"]).unwrap();
        match cli.cmd {
            Command::ComplementTests(target) => assert_eq!(target.emit, EmitFormat::Plan),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
