pub mod toml_config;

pub use self::toml_config::ForgeConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-forge")]
#[command(about = "Validate a portfolio draft and deploy it as a static site")]
pub struct CliConfig {
    #[arg(long, default_value = "portfolio.toml", help = "Path to the draft TOML file")]
    pub config: String,

    #[arg(long, help = "Force the simulated deployer regardless of config")]
    pub simulate: bool,

    #[arg(
        long,
        default_value = ".portfolio-cache",
        help = "Directory used to mirror the draft between runs"
    )]
    pub cache_dir: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
