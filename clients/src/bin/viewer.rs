//! `geo-viewer`: browse the basic geometry ontology and measure shapes.
//!
//! **Usage:**
//! ```text
//! geo-viewer [--config <path>] [--ontology <path>] [--format <fmt>]
//!            [--resolution <suffix|exact>] [--json] <command>
//!
//! geo-viewer classes
//! geo-viewer individuals Circle
//! geo-viewer properties Circle1
//! geo-viewer calc IsoscelesTriangle 4 3
//! geo-viewer browse
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geo_clients::render::{self, OutputMode};
use geo_clients::{calc, Failure, Overrides, Session, ViewerConfig};
use geo_ontology::{loader, Format, OntologyFacade, Resolution};
use tracing_subscriber::EnvFilter;

/// Browse the basic geometry ontology and measure shapes.
#[derive(Parser)]
#[command(
    name = "geo-viewer",
    about = "Ontology Viewer - Basic Geometry",
    version
)]
struct Args {
    /// Configuration file (default: ./geo-viewer.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Ontology document to load.
    #[arg(long, global = true)]
    ontology: Option<PathBuf>,

    /// Document syntax: rdfxml, turtle or ntriples (default: from extension).
    #[arg(long, global = true)]
    format: Option<Format>,

    /// Name matching: suffix or exact.
    #[arg(long, global = true)]
    resolution: Option<Resolution>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// List every class in the ontology.
    Classes,
    /// List the individuals of a class (including its subclasses).
    Individuals {
        /// Class name.
        class: String,
    },
    /// Show the object and data properties of an individual.
    Properties {
        /// Individual name.
        individual: String,
    },
    /// Area and perimeter of a shape.
    Calc {
        /// Circle, Square, EquilateralTriangle or IsoscelesTriangle.
        shape: String,
        /// Radius (Circle), side (Square, EquilateralTriangle) or base.
        dim1: String,
        /// Height (IsoscelesTriangle only).
        dim2: Option<String>,
        /// Print zero metrics instead of failing on bad input.
        #[arg(long)]
        lenient: bool,
    },
    /// Interactive session reading commands from stdin.
    Browse,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mode = if args.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    if let Cmd::Calc {
        shape,
        dim1,
        dim2,
        lenient,
    } = &args.command
    {
        let on_failure = if *lenient {
            Failure::Lenient
        } else {
            Failure::Strict
        };
        let out = calc::run(mode, shape, dim1, dim2.as_deref(), on_failure)
            .context("Calculation failed")?;
        print!("{out}");
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let config = ViewerConfig::discover(args.config.as_deref(), &cwd)?.with_overrides(Overrides {
        ontology: args.ontology,
        format: args.format,
        resolution: args.resolution,
    });
    let document = loader::load(&config.ontology, config.format)
        .with_context(|| format!("Failed to load ontology {}", config.ontology.display()))?;
    let facade = OntologyFacade::new(document, config.resolution);

    let out = match args.command {
        Cmd::Classes => render::classes(mode, &facade.list_classes())?,
        Cmd::Individuals { class } => {
            render::individuals(mode, &class, &facade.list_individuals(&class))?
        }
        Cmd::Properties { individual } => render::properties(
            mode,
            &individual,
            &facade.list_property_assertions(&individual),
        )?,
        Cmd::Browse => {
            let stdin = io::stdin();
            Session::new(&facade, mode).run(stdin.lock(), io::stdout())?;
            return Ok(());
        }
        Cmd::Calc { .. } => return Ok(()),
    };
    print!("{out}");
    Ok(())
}
