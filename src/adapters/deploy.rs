use crate::domain::model::{DeployReceipt, PortfolioDraft};
use crate::domain::ports::Deployer;
use crate::utils::error::{ForgeError, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const VERCEL_API_BASE: &str = "https://api.vercel.com";

/// Stand-in deployment sequence: waits for a fixed delay and then succeeds,
/// or fails when constructed with `failing`. Used by default so the CLI works
/// without any provider tokens.
pub struct SimulatedDeployer {
    delay: Duration,
    fail: bool,
}

impl SimulatedDeployer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    pub fn failing(delay: Duration) -> Self {
        Self { delay, fail: true }
    }
}

#[async_trait]
impl Deployer for SimulatedDeployer {
    async fn deploy(&self, draft: &PortfolioDraft) -> Result<DeployReceipt> {
        tracing::info!("simulating deployment for {}", draft.name);
        tokio::time::sleep(self.delay).await;

        if self.fail {
            return Err(ForgeError::DeployError {
                message: "simulated deployment failure".to_string(),
            });
        }

        Ok(DeployReceipt {
            repo_url: "https://github.com/example/portfolio".to_string(),
            deployment_url: "https://portfolio.vercel.app".to_string(),
            deployed_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoInfo {
    pub full_name: String,
    pub html_url: String,
}

pub struct GithubClient {
    client: Client,
    api_base: String,
    token: String,
}

impl GithubClient {
    pub fn new(token: String) -> Self {
        Self::with_api_base(token, GITHUB_API_BASE.to_string())
    }

    pub fn with_api_base(token: String, api_base: String) -> Self {
        Self {
            client: Client::new(),
            api_base,
            token,
        }
    }

    /// Creates a public, auto-initialized repository for the portfolio.
    pub async fn create_repo(&self, repo_name: &str) -> Result<RepoInfo> {
        tracing::debug!("POST {}/user/repos", self.api_base);
        let response = self
            .client
            .post(format!("{}/user/repos", self.api_base))
            .header("Authorization", format!("token {}", self.token))
            .header("User-Agent", "portfolio-forge")
            .json(&serde_json::json!({
                "name": repo_name,
                "private": false,
                "auto_init": true,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForgeError::DeployError {
                message: format!("GitHub repository creation returned {}", status),
            });
        }

        let repo: RepoInfo = response.json().await?;
        Ok(repo)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentInfo {
    pub url: String,
}

pub struct VercelClient {
    client: Client,
    api_base: String,
    token: String,
}

impl VercelClient {
    pub fn new(token: String) -> Self {
        Self::with_api_base(token, VERCEL_API_BASE.to_string())
    }

    pub fn with_api_base(token: String, api_base: String) -> Self {
        Self {
            client: Client::new(),
            api_base,
            token,
        }
    }

    /// Creates a deployment backed by the given GitHub repository.
    pub async fn create_deployment(&self, repo_full_name: &str) -> Result<DeploymentInfo> {
        tracing::debug!("POST {}/v1/deployments", self.api_base);
        let response = self
            .client
            .post(format!("{}/v1/deployments", self.api_base))
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&serde_json::json!({
                "name": "portfolio",
                "gitRepository": {
                    "type": "github",
                    "repo": repo_full_name,
                },
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForgeError::DeployError {
                message: format!("Vercel deployment returned {}", status),
            });
        }

        let deployment: DeploymentInfo = response.json().await?;
        Ok(deployment)
    }
}

/// The real deployment sequence: create the GitHub repository, then deploy
/// it via Vercel. Either step failing fails the whole submission.
pub struct DeploySequence {
    github: GithubClient,
    vercel: VercelClient,
    repo_name: String,
}

impl DeploySequence {
    pub fn new(github: GithubClient, vercel: VercelClient, repo_name: String) -> Self {
        Self {
            github,
            vercel,
            repo_name,
        }
    }
}

#[async_trait]
impl Deployer for DeploySequence {
    async fn deploy(&self, draft: &PortfolioDraft) -> Result<DeployReceipt> {
        tracing::info!(
            "deploying portfolio for {} as repository {}",
            draft.name,
            self.repo_name
        );

        let repo = self.github.create_repo(&self.repo_name).await?;
        tracing::info!("created repository {}", repo.full_name);

        let deployment = self.vercel.create_deployment(&repo.full_name).await?;
        tracing::info!("deployment available at {}", deployment.url);

        Ok(DeployReceipt {
            repo_url: repo.html_url,
            deployment_url: deployment.url,
            deployed_at: Utc::now(),
        })
    }
}
