mod error;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use vr_builder::{ValueRangeBuilder, resolve_value};
use vr_project::{RangeSetDocument, replay};

use crate::error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "vr-cli")]
#[command(about = "Value range builder - author and check labeled numeric ranges", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check every range and report overlap
    Validate {
        /// Path to the range set file (YAML or JSON)
        document_path: PathBuf,
    },
    /// Print ranges with numeric bounds
    Ranges {
        /// Path to the range set file (YAML or JSON)
        document_path: PathBuf,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Find the range a value falls into
    Lookup {
        /// Path to the range set file (YAML or JSON)
        document_path: PathBuf,
        /// Value to classify
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Replay an action script against a range set
    Apply {
        /// Path to the range set file (YAML or JSON)
        document_path: PathBuf,
        /// Path to the action script (YAML)
        script_path: PathBuf,
        /// Where to write the edited range set
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Append a blank range with the next swatch color
    Add {
        /// Path to the range set file (YAML or JSON)
        document_path: PathBuf,
        /// Where to write the edited range set (defaults to the input file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { document_path } => cmd_validate(&document_path),
        Commands::Ranges {
            document_path,
            json,
        } => cmd_ranges(&document_path, json),
        Commands::Lookup {
            document_path,
            value,
        } => cmd_lookup(&document_path, value),
        Commands::Apply {
            document_path,
            script_path,
            output,
        } => cmd_apply(&document_path, &script_path, output.as_deref()),
        Commands::Add {
            document_path,
            output,
        } => cmd_add(&document_path, output.as_deref()),
    }
}

fn load(path: &Path) -> CliResult<RangeSetDocument> {
    vr_project::load_document(path).map_err(|source| CliError::Load {
        path: path.to_path_buf(),
        source,
    })
}

fn save(path: &Path, document: &RangeSetDocument) -> CliResult<()> {
    vr_project::save_document(path, document).map_err(|source| CliError::Save {
        path: path.to_path_buf(),
        source,
    })
}

fn cmd_validate(document_path: &Path) -> CliResult<()> {
    println!("Validating ranges: {}", document_path.display());
    let document = load(document_path)?;
    let builder = ValueRangeBuilder::new(document.builder_config())?;

    let issues = builder.issues();
    for (id, issue) in &issues {
        println!("  ✗ {id}: {issue}");
    }
    if let Some(message) = builder.overlap_message() {
        println!("  ✗ {message}");
    }

    if builder.are_ranges_valid() {
        println!("✓ {} range(s) valid", builder.value_ranges().len());
        Ok(())
    } else {
        let overlap = usize::from(builder.validation_map().overlap_found);
        Err(CliError::InvalidRanges {
            issues: issues.len() + overlap,
        })
    }
}

fn cmd_ranges(document_path: &Path, json: bool) -> CliResult<()> {
    let document = load(document_path)?;
    let builder = ValueRangeBuilder::new(document.builder_config())?;
    let ranges = builder.get_value_ranges();

    if json {
        println!("{}", serde_json::to_string_pretty(&ranges)?);
        return Ok(());
    }

    if ranges.is_empty() {
        println!("No ranges in {}", document.name);
    } else {
        println!("Ranges in {}:", document.name);
        for r in ranges {
            println!(
                "  {:<12} [{}, {}] {} {}",
                r.id,
                r.min,
                r.max,
                r.color,
                r.message.as_deref().unwrap_or("")
            );
        }
    }
    Ok(())
}

fn cmd_lookup(document_path: &Path, value: f64) -> CliResult<()> {
    let document = load(document_path)?;
    let builder = ValueRangeBuilder::new(document.builder_config())?;
    let ranges = builder.get_value_ranges();

    let range = resolve_value(&ranges, value).ok_or(CliError::NoMatch { value })?;
    println!("{} -> {} ({})", value, range.id, range.color);
    if let Some(message) = &range.message {
        println!("  {message}");
    }
    Ok(())
}

fn cmd_apply(document_path: &Path, script_path: &Path, output: Option<&Path>) -> CliResult<()> {
    let document = load(document_path)?;
    let script = vr_project::load_action_script(script_path).map_err(|source| CliError::Load {
        path: script_path.to_path_buf(),
        source,
    })?;

    let mut builder = ValueRangeBuilder::new(document.builder_config())?;
    replay(&mut builder, &script, |idx, def, b| {
        let mark = if b.are_ranges_valid() { "✓" } else { "✗" };
        println!("  {mark} step {}: {:?}", idx + 1, def);
    });

    if let Some(path) = output {
        save(path, &document.with_ranges_from(&builder))?;
        println!("✓ Saved {}", path.display());
    }
    Ok(())
}

fn cmd_add(document_path: &Path, output: Option<&Path>) -> CliResult<()> {
    let document = load(document_path)?;
    let mut builder = ValueRangeBuilder::new(document.builder_config())?;

    let id = builder.add_range()?;
    let path = output.unwrap_or(document_path);
    save(path, &document.with_ranges_from(&builder))?;
    println!("✓ Added range {id} to {}", path.display());
    Ok(())
}
