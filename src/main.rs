use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser as ClapParser;
use log::LevelFilter;

use pencil::ast::NodeKind;
use pencil::CompilationUnit;

/// Lexes, parses, and resolves scopes for a single source file.
#[derive(ClapParser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Source file, resolved relative to the `test/` directory.
    filename: PathBuf,

    /// Increase diagnostic verbosity. Repeatable: `-v` for info, `-vv` for
    /// trace.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Trace,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    simple_logger::SimpleLogger::new()
        .with_level(level_filter(cli.verbose))
        .init()
        .expect("failed to initialize logger");

    let path = Path::new("test/").join(&cli.filename);

    let unit = match CompilationUnit::from_path(&path) {
        Ok(unit) => unit,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    for diagnostic in unit.diagnostics.iter() {
        eprintln!("{diagnostic}");
    }

    if unit.has_failed() {
        if let Some(err) = &unit.parse_error {
            eprintln!("{err}");
        }
        eprintln!("parsing failed for '{}'", path.display());
        return ExitCode::FAILURE;
    }

    let statement_count = match &unit.program.kind {
        NodeKind::Program(program) => program.statements.len(),
        _ => 0,
    };
    println!(
        "parsed '{}' successfully ({statement_count} top-level statement(s))",
        path.display()
    );

    ExitCode::SUCCESS
}
