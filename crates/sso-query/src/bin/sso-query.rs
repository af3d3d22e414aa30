//! sso-query command line
//!
//! Run with: cargo run -p sso-query -- query --class NEO --offline

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sso_query::analysis;
use sso_query::query::{build_obscore_query, SkyPosition, DEFAULT_BANDS, DEFAULT_CALIB_LEVEL};
use sso_query::{
    classify_orbit, CutoffField, JoinTarget, OrbitalClass, OrbitalCutoffs, QueryBuilder,
    QueryRequest, QueryRunner, SsoConfig, StaticSchema, TapClient,
};

#[derive(Parser)]
#[command(name = "sso-query", version, about = "Solar-system object catalog queries")]
struct Cli {
    /// Config file (defaults to <config dir>/sso-query/config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List orbital classes and their cutoffs
    Classes,
    /// Classify an orbit from q (AU), e and inclination (deg)
    Classify {
        #[arg(long)]
        q: f64,
        #[arg(long)]
        e: f64,
        #[arg(long)]
        incl: f64,
    },
    /// Print the ADQL for a class or custom cutoffs
    Query {
        #[command(flatten)]
        selection: Selection,
        /// Skip schema lookup and assume every optional join column exists
        #[arg(long)]
        offline: bool,
    },
    /// Run a query and print the rows as CSV
    Run {
        #[command(flatten)]
        selection: Selection,
        /// Print class counts and trimmed orbit statistics instead of rows
        #[arg(long)]
        summary: bool,
    },
    /// Print the ObsCore image query for a sky position
    Images {
        /// Right ascension (deg)
        #[arg(long, allow_negative_numbers = true)]
        ra: f64,
        /// Declination (deg)
        #[arg(long, allow_negative_numbers = true)]
        dec: f64,
        /// Filter bands (ugrizy); pass --bands "" for all bands
        #[arg(long, value_delimiter = ',', num_args = 0..)]
        bands: Option<Vec<String>>,
        #[arg(long, default_value_t = DEFAULT_CALIB_LEVEL)]
        calib_level: u8,
    },
    /// Check whether the service URL and access token look usable
    CheckAccess,
}

#[derive(Args)]
struct Selection {
    /// Orbital class (NEO, MBA, JFC, LPC, Centaur, TNO, Jtrojan, Ntrojan)
    #[arg(long, conflicts_with_all = ["q_min", "q_max", "e_min", "e_max", "a_min", "a_max", "tj_min", "tj_max"])]
    class: Option<String>,
    #[arg(long)]
    q_min: Option<f64>,
    #[arg(long)]
    q_max: Option<f64>,
    #[arg(long)]
    e_min: Option<f64>,
    #[arg(long)]
    e_max: Option<f64>,
    #[arg(long)]
    a_min: Option<f64>,
    #[arg(long)]
    a_max: Option<f64>,
    #[arg(long)]
    tj_min: Option<f64>,
    #[arg(long)]
    tj_max: Option<f64>,
    /// Catalog schema (overrides the configured one)
    #[arg(long)]
    catalog: Option<String>,
    /// Join DiaSource or SSObject
    #[arg(long)]
    join: Option<JoinTarget>,
    #[arg(long)]
    limit: Option<u64>,
    /// Sort column, optionally followed by ASC or DESC
    #[arg(long)]
    order_by: Option<String>,
}

impl Selection {
    fn cutoffs(&self) -> Option<OrbitalCutoffs> {
        let cutoffs = [
            (CutoffField::QMin, self.q_min),
            (CutoffField::QMax, self.q_max),
            (CutoffField::EMin, self.e_min),
            (CutoffField::EMax, self.e_max),
            (CutoffField::AMin, self.a_min),
            (CutoffField::AMax, self.a_max),
            (CutoffField::TjMin, self.tj_min),
            (CutoffField::TjMax, self.tj_max),
        ]
        .into_iter()
        .fold(OrbitalCutoffs::new(), |cutoffs, (field, value)| match value {
            Some(value) => cutoffs.with(field, value),
            None => cutoffs,
        });
        (!cutoffs.is_empty()).then_some(cutoffs)
    }

    fn request(&self, config: &SsoConfig) -> QueryRequest {
        let defaults = &config.query;
        QueryRequest {
            catalog: self.catalog.clone().unwrap_or_else(|| defaults.catalog.clone()),
            class_name: self.class.clone(),
            cutoffs: self.cutoffs(),
            join: self.join.or(defaults.join),
            limit: self.limit.or(defaults.limit),
            order_by: self.order_by.clone(),
            fields: None,
        }
    }
}

fn offline_schema(request: &QueryRequest) -> StaticSchema {
    [JoinTarget::DiaSource, JoinTarget::SsObject]
        .into_iter()
        .fold(StaticSchema::new(), |schema, target| {
            schema.with_table(&request.catalog, target.table(), target.all_columns())
        })
}

fn require_access(config: &SsoConfig) -> anyhow::Result<()> {
    if !config.check_access() {
        anyhow::bail!("access unavailable: needs an https URL and a gt- token");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sso_query=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = SsoConfig::resolve(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command {
        Command::Classes => {
            for class in OrbitalClass::all() {
                let bounds: Vec<String> = class
                    .cutoffs()
                    .defined()
                    .map(|(field, value)| format!("{}={}", field, value))
                    .collect();
                println!("{:<8} {}", class.as_str(), bounds.join(" "));
            }
        }

        Command::Classify { q, e, incl } => match classify_orbit(q, e, incl) {
            Some(class) => println!("{}", class),
            None => println!("unclassified"),
        },

        Command::Query { selection, offline } => {
            let request = selection.request(&config);
            let built = if offline {
                let schema = offline_schema(&request);
                QueryBuilder::new(&schema).make_query(&request).await?
            } else {
                let client = TapClient::new(&config.tap)?;
                QueryBuilder::new(&client).make_query(&request).await?
            };
            if let Some(class) = built.class {
                tracing::info!("Resolved class: {}", class);
            }
            println!("{}", built);
        }

        Command::Run { selection, summary } => {
            if !config.check_access() {
                tracing::warn!(
                    "No usable access token for {}; the service may reject the query",
                    config.tap.base_url
                );
            }
            let request = selection.request(&config);
            let client = TapClient::new(&config.tap)?;
            let built = QueryBuilder::new(&client).make_query(&request).await?;

            let runner = QueryRunner::new(client, config.tap.poll_interval());
            let mut table = runner.run_query(&built).await?;

            if summary {
                analysis::label_classes(&mut table)?;
                for (label, count) in analysis::type_counts(&table)? {
                    println!("{:<8} {}", label, count);
                }
                analysis::prepare_orbit_table(&mut table)?;
                println!("{} rows within the orbit percentile band", table.len());
            } else {
                print!("{}", table.to_csv()?);
            }
        }

        Command::Images {
            ra,
            dec,
            bands,
            calib_level,
        } => {
            let center = SkyPosition::new(ra, dec)?;
            let bands: Vec<String> = match bands {
                Some(bands) => bands.into_iter().filter(|b| !b.is_empty()).collect(),
                None => DEFAULT_BANDS.iter().map(|b| b.to_string()).collect(),
            };
            let bands: Vec<&str> = bands.iter().map(String::as_str).collect();
            print!("{}", build_obscore_query(center, Some(&bands), calib_level)?);
        }

        Command::CheckAccess => {
            println!("URL: {}", config.tap.base_url);
            require_access(&config)?;
            println!("access: ok");
        }
    }

    Ok(())
}
