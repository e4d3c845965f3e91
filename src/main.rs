mod cli;
mod config;

use bomsim::adapters::outbound::console::StderrProgressReporter;
use bomsim::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter, StdoutPresenter};
use bomsim::application::dto::{OutputFormat, QueryKind, QueryRequest};
use bomsim::application::factories::FormatterFactory;
use bomsim::application::use_cases::QueryBomUseCase;
use bomsim::bom_analysis::services::DEFAULT_MAX_DEPTH;
use bomsim::ports::outbound::OutputPresenter;
use bomsim::shared::error::{AppError, ExitCode};
use bomsim::shared::Result;
use cli::{Args, Command};
use config::{discover_config, load_config_from_path, ConfigFile, CONFIG_FILENAME};
use std::path::PathBuf;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let Args {
        bom,
        format,
        output,
        config,
        max_depth,
        command,
    } = Args::parse_args();

    let config = match config {
        Some(path) => Some(load_config_from_path(&path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };

    let inputs = CliInputs {
        bom,
        format,
        max_depth,
        command,
    };
    let (request, format) = resolve_request(inputs, config.as_ref())?;

    let use_case = QueryBomUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        StderrProgressReporter::new(),
    );

    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let formatted_output = FormatterFactory::create(format).format(&response)?;

    let presenter: Box<dyn OutputPresenter> = match output {
        Some(output_path) => Box::new(FileSystemWriter::new(output_path)),
        None => Box::new(StdoutPresenter::new()),
    };

    presenter.present(&formatted_output)
}

/// Command-line values that take part in the merge with the config file
struct CliInputs {
    bom: Option<PathBuf>,
    format: Option<OutputFormat>,
    max_depth: Option<usize>,
    command: Command,
}

/// Merges flags over config file values over built-in defaults.
fn resolve_request(
    inputs: CliInputs,
    config: Option<&ConfigFile>,
) -> Result<(QueryRequest, OutputFormat)> {
    let bom_path = inputs
        .bom
        .or_else(|| config.and_then(|c| c.bom.clone()))
        .ok_or_else(|| AppError::MissingInput {
            what: "BoM file".to_string(),
            hint: format!("Pass --bom <PATH> or set 'bom' in {}", CONFIG_FILENAME),
        })?;

    let format = match inputs.format {
        Some(format) => format,
        None => config
            .map(ConfigFile::output_format)
            .transpose()?
            .flatten()
            .unwrap_or(OutputFormat::Json),
    };

    let max_depth = inputs
        .max_depth
        .or_else(|| config.and_then(|c| c.max_depth))
        .unwrap_or(DEFAULT_MAX_DEPTH);

    let query = match inputs.command {
        Command::Components { sku } => QueryKind::Components { sku },
        Command::Usage { sku } => QueryKind::Usage { sku },
        Command::TopLevel { sku } => QueryKind::TopLevel { sku },
        Command::Edges { sku } => QueryKind::Edges { sku },
        Command::Leaves { sku } => QueryKind::Leaves { sku },
        Command::Closure { sku, qty } => QueryKind::Closure { sku, quantity: qty },
        Command::Similarity { sku_a, sku_b } => QueryKind::Similarity { sku_a, sku_b },
        Command::Matrix { skus } => {
            let skus_path = skus
                .or_else(|| config.and_then(|c| c.skus.clone()))
                .ok_or_else(|| AppError::MissingInput {
                    what: "SKU list".to_string(),
                    hint: format!("Pass --skus <PATH> or set 'skus' in {}", CONFIG_FILENAME),
                })?;
            QueryKind::Matrix { skus_path }
        }
    };

    Ok((
        QueryRequest::new(bom_path, query).with_max_depth(max_depth),
        format,
    ))
}
