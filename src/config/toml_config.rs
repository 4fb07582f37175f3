use crate::domain::model::{AvatarFile, AvatarSource, PortfolioDraft, Project};
use crate::utils::error::{ForgeError, Result};
use crate::utils::sanitize::sanitize_input;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgeConfig {
    pub profile: ProfileConfig,
    pub deploy: Option<DeployConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub name: String,
    pub role: String,
    pub about: String,
    pub email: String,
    pub skills: Vec<String>,
    pub avatar_url: Option<String>,
    pub avatar_file: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub link: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeployConfig {
    pub repo_name: Option<String>,
    pub github_token: Option<String>,
    pub vercel_token: Option<String>,
    pub github_api_base: Option<String>,
    pub vercel_api_base: Option<String>,
    pub simulate: Option<bool>,
    pub simulated_delay_ms: Option<u64>,
}

impl ForgeConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ForgeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ForgeError::ConfigError {
            field: "toml_parsing".to_string(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values, so
    /// provider tokens never have to live in the config file.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid");

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(url) = &self.profile.avatar_url {
            validate_url("profile.avatar_url", url)?;
        }
        if let Some(path) = &self.profile.avatar_file {
            validate_path("profile.avatar_file", path)?;
        }
        if self.profile.avatar_url.is_some() && self.profile.avatar_file.is_some() {
            return Err(ForgeError::ConfigError {
                field: "profile.avatar_url".to_string(),
                reason: "avatar_url and avatar_file are mutually exclusive".to_string(),
            });
        }

        if let Some(deploy) = &self.deploy {
            if let Some(base) = &deploy.github_api_base {
                validate_url("deploy.github_api_base", base)?;
            }
            if let Some(base) = &deploy.vercel_api_base {
                validate_url("deploy.vercel_api_base", base)?;
            }

            // A real deployment needs both provider tokens.
            if !self.simulate() {
                let github_token = deploy.github_token.as_deref().unwrap_or("");
                let vercel_token = deploy.vercel_token.as_deref().unwrap_or("");
                validate_non_empty_string("deploy.github_token", github_token)?;
                validate_non_empty_string("deploy.vercel_token", vercel_token)?;
                validate_non_empty_string("deploy.repo_name", self.repo_name())?;
            }
        }

        Ok(())
    }

    pub fn repo_name(&self) -> &str {
        self.deploy
            .as_ref()
            .and_then(|d| d.repo_name.as_deref())
            .unwrap_or("portfolio")
    }

    /// Simulation is the default; a real deployment must be opted into.
    pub fn simulate(&self) -> bool {
        self.deploy
            .as_ref()
            .and_then(|d| d.simulate)
            .unwrap_or(true)
    }

    pub fn simulated_delay(&self) -> Duration {
        let ms = self
            .deploy
            .as_ref()
            .and_then(|d| d.simulated_delay_ms)
            .unwrap_or(2000);
        Duration::from_millis(ms)
    }

    /// Builds the draft, stripping markup from free-text fields and reading
    /// the avatar file from disk when one is configured.
    pub fn to_draft(&self) -> Result<PortfolioDraft> {
        let avatar = if let Some(url) = &self.profile.avatar_url {
            Some(AvatarSource::Remote(url.clone()))
        } else if let Some(path) = &self.profile.avatar_file {
            let bytes = std::fs::read(path).map_err(ForgeError::IoError)?;
            let name = Path::new(path)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("avatar")
                .to_string();
            Some(AvatarSource::Upload(AvatarFile { name, bytes }))
        } else {
            None
        };

        let skills = self
            .profile
            .skills
            .iter()
            .map(|s| sanitize_input(s))
            .filter(|s| !s.trim().is_empty())
            .collect();

        let projects = self
            .profile
            .projects
            .iter()
            .map(|p| Project {
                title: sanitize_input(&p.title),
                description: sanitize_input(&p.description),
                tech_stack: p.tech_stack.clone(),
                link: p.link.clone(),
                github: p.github.clone(),
            })
            .collect();

        Ok(PortfolioDraft {
            name: sanitize_input(&self.profile.name),
            role: sanitize_input(&self.profile.role),
            about: sanitize_input(&self.profile.about),
            email: self.profile.email.trim().to_string(),
            skills,
            avatar,
            projects,
            linkedin: self.profile.linkedin.clone(),
            github: self.profile.github.clone(),
        })
    }
}

impl Validate for ForgeConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
