//! Campaign service daemon — entry point for running the HTTP API.

use clap::Parser;
use karo_campaign::CampaignBook;
use karo_catalog::Catalog;
use karo_rpc::{AppState, RpcServer, ServiceConfig};
use karo_store_memory::MemoryStore;
use karo_verification::{
    ProofVerifier, StaticVerifier, VisionGateway, VisionGatewayConfig,
};
use karo_wallet::WalletLedger;
use karo_workflow::SubmissionWorkflow;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "karo-daemon", about = "ShopKaro campaign service daemon")]
struct Cli {
    /// Port the HTTP API listens on.
    #[arg(long, env = "KARO_PORT")]
    port: Option<u16>,

    /// Base URL of the vision inference API.
    #[arg(long, env = "KARO_VERIFIER_ENDPOINT")]
    verifier_endpoint: Option<String>,

    /// Model identifier for verification requests.
    #[arg(long, env = "KARO_VERIFIER_MODEL")]
    verifier_model: Option<String>,

    /// Environment variable holding the inference API key.
    #[arg(long, env = "KARO_API_KEY_ENV")]
    api_key_env: Option<String>,

    /// Per-request verification timeout in seconds.
    #[arg(long, env = "KARO_VERIFIER_TIMEOUT_SECS")]
    verifier_timeout_secs: Option<u64>,

    /// Failed proof attempts allowed before a campaign is rejected.
    #[arg(long, env = "KARO_MAX_PROOF_ATTEMPTS")]
    max_proof_attempts: Option<u32>,

    /// Skip seeding the demo catalog on startup.
    #[arg(long, env = "KARO_NO_SEED")]
    no_seed: bool,

    /// Run without the inference endpoint: every proof is approved.
    #[arg(long, env = "KARO_OFFLINE")]
    offline: bool,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "KARO_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "KARO_LOG_FORMAT")]
    log_format: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings are
    /// used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// File config (when given) as the base, flags on top.
    fn into_config(self) -> anyhow::Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_toml_file(&path.display().to_string())?,
            None => ServiceConfig::default(),
        };

        if let Some(port) = self.port {
            config.listen_port = port;
        }
        if let Some(endpoint) = self.verifier_endpoint {
            config.verifier_endpoint = endpoint;
        }
        if let Some(model) = self.verifier_model {
            config.verifier_model = model;
        }
        if let Some(env) = self.api_key_env {
            config.api_key_env = env;
        }
        if let Some(secs) = self.verifier_timeout_secs {
            config.verifier_timeout_secs = secs;
        }
        if let Some(attempts) = self.max_proof_attempts {
            config.max_proof_attempts = attempts;
        }
        if self.no_seed {
            config.seed_demo_catalog = false;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let offline = cli.offline;
    let config_path = cli.config.clone();
    let config = cli.into_config()?;

    karo_utils::init_tracing(&config.log_level, &config.log_format);
    if let Some(path) = config_path {
        tracing::info!("loaded config from {}", path.display());
    }

    let api_key = config.api_key();
    if offline || api_key.is_none() {
        if !offline {
            tracing::warn!(
                env = %config.api_key_env,
                "API key not set; running in offline mode, every proof is approved"
            );
        }
        serve(config, StaticVerifier::approving()).await
    } else {
        let gateway_config = VisionGatewayConfig::new(
            config.verifier_endpoint.clone(),
            api_key.unwrap_or_default(),
        )
        .with_model(config.verifier_model.clone())
        .with_timeout(Duration::from_secs(config.verifier_timeout_secs));
        serve(config, VisionGateway::new(gateway_config)).await
    }
}

async fn serve<V: ProofVerifier + 'static>(
    config: ServiceConfig,
    verifier: V,
) -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new());
    let catalog = Catalog::new(store.clone());
    if config.seed_demo_catalog {
        catalog.seed_demo_products()?;
    }
    let book = CampaignBook::new(store);

    let workflow = SubmissionWorkflow::new(catalog.clone(), book.clone(), verifier)
        .with_max_attempts(config.max_proof_attempts);
    let wallet = WalletLedger::new(book, catalog);
    let state = Arc::new(AppState { workflow, wallet });

    let server = RpcServer::new(config.listen_port, state);
    server
        .start(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await?;

    tracing::info!("daemon exited cleanly");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_uses_defaults() {
        let cli = Cli::try_parse_from(["karo-daemon"]).unwrap();
        let config = cli.into_config().unwrap();
        assert_eq!(config.listen_port, 8787);
        assert!(config.seed_demo_catalog);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "karo-daemon",
            "--port",
            "9000",
            "--no-seed",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();
        assert_eq!(config.listen_port, 9000);
        assert!(!config.seed_demo_catalog);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn flags_override_the_config_file() {
        let path = std::env::temp_dir().join("karo-daemon-config-test.toml");
        std::fs::write(&path, "listen_port = 9100\nmax_proof_attempts = 2\n").unwrap();

        let cli = Cli::try_parse_from([
            "karo-daemon",
            "--config",
            path.to_str().unwrap(),
            "--port",
            "9200",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();
        std::fs::remove_file(&path).ok();

        // The flag wins; untouched file settings stay.
        assert_eq!(config.listen_port, 9200);
        assert_eq!(config.max_proof_attempts, 2);
    }
}
