//! Configuration module
//!
//! Environment-driven configuration for the catalog components: storage
//! locations and media upload limits. Values come from the process
//! environment (optionally seeded from a `.env` file) with sensible
//! defaults for local development.

use std::env;

const DEFAULT_STORAGE_PATH: &str = "./data/media";
const DEFAULT_STORAGE_BASE_URL: &str = "http://localhost:3000/media";
const DEFAULT_MAX_VIDEO_SIZE_BYTES: usize = 2 * 1024 * 1024 * 1024;
const DEFAULT_MAX_IMAGE_SIZE_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_VIDEO_CONTENT_TYPES: &str = "video/mp4,video/webm";
const DEFAULT_IMAGE_CONTENT_TYPES: &str = "image/jpeg,image/png,image/webp";

#[derive(Clone, Debug)]
pub struct Config {
    pub environment: String,
    pub storage_path: String,
    pub storage_base_url: String,
    pub max_video_size_bytes: usize,
    pub max_image_size_bytes: usize,
    pub video_allowed_content_types: Vec<String>,
    pub image_allowed_content_types: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let config = Self {
            environment: env_or("ENVIRONMENT", "development"),
            storage_path: env_or("STORAGE_PATH", DEFAULT_STORAGE_PATH),
            storage_base_url: env_or("STORAGE_BASE_URL", DEFAULT_STORAGE_BASE_URL),
            max_video_size_bytes: env_parse("MAX_VIDEO_SIZE_BYTES", DEFAULT_MAX_VIDEO_SIZE_BYTES)?,
            max_image_size_bytes: env_parse("MAX_IMAGE_SIZE_BYTES", DEFAULT_MAX_IMAGE_SIZE_BYTES)?,
            video_allowed_content_types: parse_list(&env_or(
                "VIDEO_ALLOWED_CONTENT_TYPES",
                DEFAULT_VIDEO_CONTENT_TYPES,
            )),
            image_allowed_content_types: parse_list(&env_or(
                "IMAGE_ALLOWED_CONTENT_TYPES",
                DEFAULT_IMAGE_CONTENT_TYPES,
            )),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.storage_path.trim().is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }
        if self.max_video_size_bytes == 0 {
            anyhow::bail!("MAX_VIDEO_SIZE_BYTES must be greater than zero");
        }
        if self.max_image_size_bytes == 0 {
            anyhow::bail!("MAX_IMAGE_SIZE_BYTES must be greater than zero");
        }
        if self.video_allowed_content_types.is_empty() {
            anyhow::bail!("VIDEO_ALLOWED_CONTENT_TYPES must list at least one content type");
        }
        if self.image_allowed_content_types.is_empty() {
            anyhow::bail!("IMAGE_ALLOWED_CONTENT_TYPES must list at least one content type");
        }
        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse(key: &str, default: usize) -> Result<usize, anyhow::Error> {
    match env::var(key) {
        Ok(value) => value
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}
