use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use catalog::{CatalogRepository, InMemoryCatalog, JsonFileCatalog};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, ChecklistService, SectionNavigator};
use ui::{App, UiApp, build_app_context};

mod logging;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCatalogPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCatalogPath { raw } => write!(f, "invalid --catalog value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn checklist(&self) -> Arc<ChecklistService> {
        self.services.checklist()
    }

    fn navigator(&self) -> SectionNavigator {
        self.services.navigator()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--catalog <reference.json>]");
    eprintln!();
    eprintln!("Without --catalog the bundled reference data is used.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CHECKLIST_CATALOG  reference data file (overridden by --catalog)");
    eprintln!("  CHECKLIST_LOG      log filter, e.g. debug or widget=trace,info");
}

#[derive(Debug, Default)]
struct Args {
    catalog: Option<PathBuf>,
    help: bool,
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_catalog: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            catalog: env_catalog
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            help: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    let value = require_value(args, "--catalog")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidCatalogPath { raw: value });
                    }
                    parsed.catalog = Some(PathBuf::from(value));
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

async fn load_services(args: &Args) -> Result<AppServices, Box<dyn std::error::Error>> {
    let repo: Box<dyn CatalogRepository> = match &args.catalog {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading reference data");
            Box::new(JsonFileCatalog::new(path))
        }
        None => {
            tracing::info!("using bundled reference data");
            Box::new(InMemoryCatalog::new(catalog::bundled()?))
        }
    };
    Ok(AppServices::load(repo.as_ref()).await?)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, std::env::var("CHECKLIST_CATALOG").ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    logging::init()?;
    let services = load_services(&parsed).await?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("AI Verify Process Checklist")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
