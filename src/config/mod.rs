use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

pub const HOME_SECTIONS: [&str; 5] = ["hero", "services", "training", "certificates", "contact"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub site: SiteConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub homepage: HomepageConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Target length for card summaries derived from body text.
    #[serde(default = "default_summary_length")]
    pub summary_length: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            summary_length: default_summary_length(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HomepageConfig {
    #[serde(default = "default_hero_heading")]
    pub hero_heading: String,
    #[serde(default = "default_hero_tagline")]
    pub hero_tagline: String,
    #[serde(default = "default_hero_cta_label")]
    pub hero_cta_label: String,
    #[serde(default = "default_hero_cta_href")]
    pub hero_cta_href: String,
    /// Omitting a section hides it.
    #[serde(default)]
    pub sections_order: Vec<String>,
}

impl Default for HomepageConfig {
    fn default() -> Self {
        Self {
            hero_heading: default_hero_heading(),
            hero_tagline: default_hero_tagline(),
            hero_cta_label: default_hero_cta_label(),
            hero_cta_href: default_hero_cta_href(),
            sections_order: Vec::new(),
        }
    }
}

impl HomepageConfig {
    pub fn get_sections_order(&self) -> Vec<&str> {
        if self.sections_order.is_empty() {
            HOME_SECTIONS.to_vec()
        } else {
            self.sections_order.iter().map(|s| s.as_str()).collect()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContactConfig {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_summary_length() -> usize {
    160
}

fn default_hero_heading() -> String {
    "Advisory that moves the needle".to_string()
}

fn default_hero_tagline() -> String {
    "Audit, compliance and training for organisations that want certainty.".to_string()
}

fn default_hero_cta_label() -> String {
    "Talk to us".to_string()
}

fn default_hero_cta_href() -> String {
    "/contact".to_string()
}

fn default_page_size() -> usize {
    20
}

fn default_max_page_size() -> usize {
    100
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Could not read config file '{}': {}. Are you in a Ridgeline site directory?",
                path.display(),
                e
            )
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.site.url).map_err(|e| {
            anyhow::anyhow!("site.url '{}' is not an absolute URL: {}", self.site.url, e)
        })?;
        if self.content.summary_length == 0 {
            anyhow::bail!("content.summary_length must be greater than 0");
        }
        if self.content.summary_length > 1000 {
            anyhow::bail!("content.summary_length must be 1000 or less");
        }
        for section in &self.homepage.sections_order {
            if !HOME_SECTIONS.contains(&section.as_str()) {
                anyhow::bail!(
                    "Unknown homepage section '{}'. Known sections: {}",
                    section,
                    HOME_SECTIONS.join(", ")
                );
            }
        }
        if self.api.default_page_size == 0 {
            anyhow::bail!("api.default_page_size must be greater than 0");
        }
        if self.api.default_page_size > self.api.max_page_size {
            anyhow::bail!("api.default_page_size must not exceed api.max_page_size");
        }
        Ok(())
    }
}
