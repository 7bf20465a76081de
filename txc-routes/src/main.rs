use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use txc_routes::config::Layout;
use txc_routes::enrich::RouteEnricher;
use txc_routes::error::PipelineError;
use txc_routes::routing::{OsrmClient, RoutingConfig};
use txc_routes::store::{LineStore, RouteStore};
use txc_routes::transxchange::{
    DirectorySource, FileListSource, SchemaConfig, ScheduleExtractor, TRANSXCHANGE_NAMESPACE,
};

#[derive(Debug, Parser)]
#[command(name = "txc-routes", version, about = "Bus route geometry from TransXChange schedules")]
struct Cli {
    /// Project root that `test-data/` and `public/` live under
    #[arg(long, env = "TXC_ROOT", default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract line records and the line registry from schedule documents
    Extract {
        /// Schedule directory name under `test-data/`
        source: String,

        /// Dataset name under `public/json/`
        destination: String,

        /// Read schedules from this directory instead of `test-data/<source>`
        #[arg(long)]
        source_dir: Option<PathBuf>,

        /// Write records to this directory instead of `public/json/<destination>`
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Process only these files, in order
        #[arg(long = "file")]
        files: Vec<PathBuf>,

        /// XML namespace of the schedule documents
        #[arg(long, default_value = TRANSXCHANGE_NAMESPACE)]
        namespace: String,
    },

    /// Fetch road routes for every registered line of a region
    Enrich {
        /// Region name: reads `public/json/<region>`, writes `public/route-data/<region>`
        region: String,

        /// Read line records from this directory instead
        #[arg(long)]
        lines_dir: Option<PathBuf>,

        /// Write route records to this directory instead
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Base URL of the OSRM instance
        #[arg(long, env = "ROUTING_BASE_URL")]
        routing_url: Option<String>,

        /// Routing profile
        #[arg(long, default_value = "driving")]
        profile: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout: u64,

        /// Route requests in flight at once
        #[arg(long, default_value_t = 1)]
        concurrency: usize,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), PipelineError> {
    let layout = Layout::new(cli.root);

    match cli.command {
        Command::Extract {
            source,
            destination,
            source_dir,
            out_dir,
            files,
            namespace,
        } => {
            let store = LineStore::new(out_dir.unwrap_or_else(|| layout.line_dir(&destination)));
            let extractor = ScheduleExtractor::new(SchemaConfig::new(namespace));

            let report = if files.is_empty() {
                let dir = source_dir.unwrap_or_else(|| layout.schedule_dir(&source));
                info!(source = %dir.display(), destination = %store.dir().display(), "extracting");
                extractor.run(&DirectorySource::new(dir), &store)?
            } else {
                info!(files = files.len(), destination = %store.dir().display(), "extracting");
                extractor.run(&FileListSource::new(files), &store)?
            };

            println!(
                "Extracted {} lines ({} skipped, {} failed)",
                report.registry.len(),
                report.skipped.len(),
                report.failed.len()
            );
        }

        Command::Enrich {
            region,
            lines_dir,
            out_dir,
            routing_url,
            profile,
            timeout,
            concurrency,
        } => {
            let lines = LineStore::new(lines_dir.unwrap_or_else(|| layout.line_dir(&region)));
            let routes = RouteStore::new(out_dir.unwrap_or_else(|| layout.route_dir(&region)));

            let mut config = RoutingConfig::new().with_profile(profile).with_timeout(timeout);
            if let Some(url) = routing_url {
                config = config.with_base_url(url);
            }

            info!(%region, base_url = %config.base_url, "extracting route data");
            let client = OsrmClient::new(config)?;
            let report = RouteEnricher::new(client)
                .with_max_concurrent(concurrency)
                .run(&lines, &routes)
                .await?;

            println!(
                "Routed {} lines ({} failed)",
                report.written.len(),
                report.failed.len()
            );
        }
    }

    Ok(())
}
