//! corpc-gen CLI
//!
//! Command-line interface scaffolding a corpc rpc service project from a
//! protobuf definition. The pipeline is strictly sequential: validate
//! arguments, create the project tree, compile the proto, parse the binding
//! header, generate the artifact set. Each step completes fully before the
//! next begins and the first failure aborts the run; the last progress line
//! printed tells the user where generation stopped.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use corpc_gen_common::{GeneratorError, Result as GenResult};
use corpc_gen_generator::{
    compile_proto, ProjectGenerator, ProjectLayout, ServerOptions, WriteOutcome,
};
use corpc_gen_parser::parse_binding_header;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "corpc-gen")]
#[command(version, about = "Scaffold a corpc rpc service project from a .proto definition", long_about = None)]
struct Cli {
    /// Path to the protobuf definition; must be a protobuf3 .proto file
    #[arg(short, long)]
    input: PathBuf,

    /// Directory the project is generated into
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Port the generated server binds to
    #[arg(short, long, default_value_t = 39999, value_parser = clap::value_parser!(u16).range(1..))]
    port: u16,

    /// Ip the generated server binds to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let project_name = validate_input(&cli.input)?;
    println!("{} Project name: {}", "→".cyan(), project_name.yellow());
    if cli.verbose {
        println!("  Input: {}", cli.input.display());
        println!("  Output: {}", cli.output.display());
        println!("  Server endpoint: {}:{}", cli.host, cli.port);
    }

    let layout = ProjectLayout::new(&cli.output, &project_name);

    println!("{} Creating project directories...", "→".cyan());
    layout
        .create_all()
        .context("Failed to create project directories")?;

    println!("{} Compiling protocol definition...", "→".cyan());
    compile_proto(&cli.input, &layout).context("Failed to compile protocol definition")?;

    println!("{} Parsing service binding header...", "→".cyan());
    let header_path = layout.binding_header();
    let header_text = fs::read_to_string(&header_path).map_err(|e| {
        GeneratorError::FileSystem(format!(
            "failed to read binding header [{}]: {}",
            header_path.display(),
            e
        ))
    })?;
    let service = parse_binding_header(&header_text).context("Failed to parse binding header")?;
    println!(
        "{} Parsed service {} with {} rpc methods",
        "✓".green(),
        service.name.yellow(),
        service.methods.len()
    );

    println!("{} Generating framework code...", "→".cyan());
    let options = ServerOptions {
        host: cli.host,
        port: cli.port,
    };
    let generator = ProjectGenerator::new(&project_name, service, options)
        .context("Failed to create generator")?;
    let report = generator
        .generate(&layout)
        .context("Failed to generate framework code")?;

    if cli.verbose {
        for file in &report {
            match file.outcome {
                WriteOutcome::Written => {
                    println!("  {} {}", "wrote".green(), file.path.display())
                }
                WriteOutcome::SkippedExisting => {
                    println!("  {} {} (exists)", "skip".yellow(), file.path.display())
                }
            }
        }
    }

    println!("\n{}", "✓ Generation complete!".green().bold());
    println!("\n{}", "Next steps:".bold());
    println!(
        "  1. Implement the rpc interfaces under {}",
        layout.project_root().join(&project_name).join("interface").display()
    );
    println!(
        "  2. Build the project: cd {} && mkdir -p build && cd build && cmake .. && make",
        layout.project_root().display()
    );
    println!(
        "  3. Start the server: ./bin/{} ../conf/{}.yml",
        project_name, project_name
    );

    Ok(())
}

/// Check the input path and derive the project name from its file stem.
fn validate_input(input: &Path) -> GenResult<String> {
    if !input.is_file() {
        return Err(GeneratorError::InvalidCliArguments(format!(
            "protobuf file does not exist: [{}]",
            input.display()
        )));
    }

    let file_name = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let suffix = ".proto";
    if !file_name.to_lowercase().ends_with(suffix) || file_name.len() == suffix.len() {
        return Err(GeneratorError::InvalidCliArguments(format!(
            "input file is not a standard protobuf file: [{}]",
            input.display()
        )));
    }

    Ok(file_name[..file_name.len() - suffix.len()].to_string())
}
