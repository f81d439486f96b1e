use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use trace_data::spec::{self, Dataset, TableSpec, TraceSpec};
use trace_data::{Result, TableView, cleaned_plot_data};

#[derive(Parser)]
#[command(name = "trace-data")]
#[command(about = "Resolve column references in trace and table descriptors", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build per-cohort plot records for a trace.
    Plot {
        #[arg(long)]
        data: String,

        #[arg(long)]
        trace: String,

        #[arg(short = 'o', long)]
        out: Option<String>,

        #[arg(long)]
        pretty: bool,
    },

    /// Build table rows for a table descriptor.
    Table {
        #[arg(long)]
        data: String,

        #[arg(long)]
        table: String,

        #[arg(short = 'o', long)]
        out: Option<String>,

        #[arg(long)]
        pretty: bool,
    },

    /// Validate descriptors without touching any data.
    Check {
        #[arg(long, required_unless_present = "table")]
        trace: Option<String>,

        #[arg(long)]
        table: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Plot {
            data,
            trace,
            out,
            pretty,
        } => {
            // 1) Parse + validate the trace descriptor.
            let trace_spec: TraceSpec = spec::read_json(&trace)?;
            trace_spec.validate()?;

            // 2) Load dataset.
            let dataset: Dataset = spec::read_json(&data)?;

            // 3) Resolve.
            let records = cleaned_plot_data(&dataset, &trace_spec)
                .with_context(|| format!("resolve trace {}", trace_spec.name))?;

            write_output(&records, out.as_deref(), pretty)?;
        }
        Commands::Table {
            data,
            table,
            out,
            pretty,
        } => {
            let table_spec: TableSpec = spec::read_json(&table)?;
            table_spec.validate()?;

            let dataset: Dataset = spec::read_json(&data)?;

            let view = TableView::build(&dataset, &table_spec)
                .with_context(|| format!("resolve table {}", table_spec.name))?;

            write_output(&view, out.as_deref(), pretty)?;
        }
        Commands::Check { trace, table } => {
            if let Some(path) = trace {
                let trace_spec: TraceSpec = spec::read_json(&path)?;
                trace_spec.validate()?;
                println!("{}: ok", path);
            }
            if let Some(path) = table {
                let table_spec: TableSpec = spec::read_json(&path)?;
                table_spec.validate()?;
                println!("{}: ok", path);
            }
        }
    }

    Ok(())
}

fn write_output<T: Serialize>(value: &T, out: Option<&str>, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    match out {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("write {}", path))?;
            eprintln!("Wrote {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
