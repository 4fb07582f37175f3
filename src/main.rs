use clap::Parser;
use portfolio_forge::adapters::cache::FileDraftCache;
use portfolio_forge::adapters::deploy::{
    DeploySequence, GithubClient, SimulatedDeployer, VercelClient, GITHUB_API_BASE,
    VERCEL_API_BASE,
};
use portfolio_forge::adapters::notify::ConsoleNotifier;
use portfolio_forge::domain::ports::{Deployer, DraftCache};
use portfolio_forge::utils::{logger, validation::Validate};
use portfolio_forge::{CliConfig, ForgeConfig, ForgeError, PortfolioForm, SubmitOutcome};

fn build_deployer(cli: &CliConfig, config: &ForgeConfig) -> anyhow::Result<Box<dyn Deployer>> {
    if cli.simulate || config.simulate() {
        tracing::info!("using simulated deployer");
        return Ok(Box::new(SimulatedDeployer::new(config.simulated_delay())));
    }

    let deploy = config.deploy.clone().unwrap_or_default();
    let github_token = deploy.github_token.ok_or_else(|| ForgeError::ConfigError {
        field: "deploy.github_token".to_string(),
        reason: "required for a real deployment".to_string(),
    })?;
    let vercel_token = deploy.vercel_token.ok_or_else(|| ForgeError::ConfigError {
        field: "deploy.vercel_token".to_string(),
        reason: "required for a real deployment".to_string(),
    })?;

    let github = GithubClient::with_api_base(
        github_token,
        deploy
            .github_api_base
            .unwrap_or_else(|| GITHUB_API_BASE.to_string()),
    );
    let vercel = VercelClient::with_api_base(
        vercel_token,
        deploy
            .vercel_api_base
            .unwrap_or_else(|| VERCEL_API_BASE.to_string()),
    );

    Ok(Box::new(DeploySequence::new(
        github,
        vercel,
        config.repo_name().to_string(),
    )))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting portfolio-forge CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match ForgeConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("failed to load {}: {}", cli.config, e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let draft = config.to_draft()?;

    // Mirror the draft so an aborted run can be inspected later.
    let cache = FileDraftCache::new(&cli.cache_dir);
    cache.set("draft", &draft);

    let deployer = build_deployer(&cli, &config)?;
    let mut form = PortfolioForm::with_draft(deployer, ConsoleNotifier, draft);

    match form.submit().await {
        SubmitOutcome::Deployed(receipt) => {
            println!("📁 Repository: {}", receipt.repo_url);
            println!("🌐 Live at: {}", receipt.deployment_url);
            cache.clear("draft");
        }
        SubmitOutcome::Invalid => {
            for (field, message) in form.errors().iter() {
                eprintln!("❌ {}: {}", field, message);
            }
            std::process::exit(2);
        }
        SubmitOutcome::Failed => {
            // The destructive notification has already been shown.
            std::process::exit(1);
        }
    }

    Ok(())
}
