use anyhow::anyhow;
use clap::{Parser, Subcommand};
use std::process::exit;
use tower_sessions::MemoryStore;
use tracing::error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use workbench::core::application::{Application, ApplicationServices};
use workbench::core::config::Config;
use workbench::domain::auth;
use workbench::inbound::http::router;
use workbench::outbound::credentials::PermissiveVerifier;
use workbench::outbound::session::{SessionAdapter, SessionAdapterFactory};
use workbench::outbound::store::memory::MemoryRepository;
use workbench::outbound::store::seed::seed_demo_data;

type ApplicationAlias = Application<
    auth::Service<SessionAdapter, MemoryRepository, PermissiveVerifier, SessionAdapterFactory>,
    workbench::domain::workbench::Service<MemoryRepository>,
>;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(long)]
    config_path: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Run,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = start(cli).await {
        error!("Error: {:#?}", e);
        exit(1);
    }
}

async fn start(cli: Cli) -> anyhow::Result<(), anyhow::Error> {
    let config = Config::parse(cli.config_path)?;
    if !config.is_valid() {
        return Err(anyhow!("config is not valid"));
    }

    let application = create_application(config).await?;

    match cli.command {
        None => Ok(()),
        Some(subcommand) => match subcommand {
            Commands::Run => run_server(application).await,
        },
    }
}

async fn create_application(config: Config) -> Result<ApplicationAlias, anyhow::Error> {
    let repo = MemoryRepository::new();

    if config.seed_demo_data {
        tracing::debug!("seeding demo data");
        seed_demo_data(&repo)
            .await
            .map_err(|e| anyhow!(e.to_string()))?;
        tracing::debug!("seeded demo data");
    }

    let verifier = PermissiveVerifier::new();
    let session_factory = SessionAdapterFactory::new();
    let auth_service = auth::Service::new(repo.clone(), verifier, session_factory);
    let workbench_service = workbench::domain::workbench::Service::new(repo);

    Ok(Application::new(config, auth_service, workbench_service))
}

async fn run_server(app: ApplicationAlias) -> anyhow::Result<()> {
    let session_store = MemoryStore::default();
    let listen_addr = app.config().listen_addr;

    let router = router(app, session_store);

    let listener = tokio::net::TcpListener::bind(listen_addr.as_str())
        .await
        .map_err(|_| anyhow!("server failed to bind"))?;

    tracing::debug!(
        "listening on {}",
        listener
            .local_addr()
            .map_err(|_| anyhow!("failed to get local_addr"))?
    );

    axum::serve(listener, router)
        .await
        .map_err(|_| anyhow!("failed to start server"))
}
