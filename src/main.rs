use tracing_subscriber::EnvFilter;

use dashboard_export::{config, export};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("{} dashboard export v{}", config::APP_NAME, config::APP_VERSION);

    if let Err(e) = export::run_export(&config::database_path(), &config::dashboard_output_dir()) {
        tracing::error!("Export failed: {e}");
        std::process::exit(1);
    }
}
