use crate::{
    commands::{Commands, ItemKindArg},
    env::EnvManager,
    error::CliError,
};
use clap::Parser;
use model::{
    core::{filter::QueryFilter, value_type::ValueType},
    tracker::item::{DataElement, TrackedEntityAttribute, ValueTypedItem},
};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracker_export::{FieldPaths, QueryFilterValue, RelationshipItemFields};

mod commands;
mod env;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "tracker-filter",
    version = "0.1.0",
    about = "Inspect tracker filter conversion and field selection"
)]
struct Cli {
    #[arg(long, global = true, help = "Load settings from this .env file")]
    env_file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut env = EnvManager::from_system();
    if let Some(path) = &cli.env_file {
        env.load_from_file(path)?;
    }
    let settings = env.settings()?;

    // RUST_LOG wins over the configured directive
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Convert {
            filter,
            value_type,
            uid,
            kind,
        } => {
            let value = convert(&filter, &value_type, uid, kind)?;
            output::print(&value, settings.pretty_output)
        }
        Commands::Fields { fields, separator } => {
            let separator = separator.unwrap_or_else(|| settings.path_separator.clone());
            let item_fields = resolve_fields(&fields, separator)?;
            output::print(&item_fields, settings.pretty_output)
        }
    }
}

fn convert(
    filter: &str,
    value_type: &str,
    uid: String,
    kind: ItemKindArg,
) -> Result<QueryFilterValue, CliError> {
    let filter: QueryFilter = filter.parse()?;
    let value_type: ValueType = value_type.parse()?;

    let item: Box<dyn ValueTypedItem> = match kind {
        ItemKindArg::Attribute => Box::new(TrackedEntityAttribute::new(uid, value_type)),
        ItemKindArg::DataElement => Box::new(DataElement::new(uid, value_type)),
    };

    info!(
        "Converting filter `{}` for {} {} of type {}",
        filter,
        item.kind(),
        item.uid(),
        value_type
    );

    Ok(QueryFilterValue::of(&filter, item.as_ref())?)
}

fn resolve_fields(fields: &str, separator: String) -> Result<RelationshipItemFields, CliError> {
    if separator.is_empty() {
        return Err(CliError::Config("--separator must not be empty".to_string()));
    }
    info!("Resolving relationship item fields for `{fields}`");

    Ok(FieldPaths::parse(fields, separator).relationship_item_fields())
}
