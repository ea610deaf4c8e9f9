//! Configuration module
//!
//! All runtime configuration is resolved once at startup from the
//! environment. The pipeline, storage client, and HTTP server receive the
//! resulting struct by reference; nothing reads environment variables after
//! startup.

use std::env;
use std::path::PathBuf;

const MAX_CONNECTIONS: u32 = 20;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
const HTTP_REQUEST_TIMEOUT_SECS: u64 = 45;
const DEFAULT_BLOB_BASE_URL: &str = "https://blob.vercel-storage.com";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    /// Blob store write credential. Absence is a configuration error on
    /// first upload use, not at process start.
    pub blob_token: Option<String>,
    pub blob_base_url: String,
    /// Selects local-processing mode vs processing-disabled mode for the
    /// ingestion pipeline.
    pub local_processing_enabled: bool,
    /// Thumbnail URL recorded when processing is disabled. Empty string by
    /// default.
    pub placeholder_thumbnail_url: String,
    pub scratch_dir: PathBuf,
    pub ffmpeg_path: String,
    pub http_connect_timeout_secs: u64,
    pub http_request_timeout_secs: u64,
}

impl Config {
    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());
        let is_production = {
            let env = environment.to_lowercase();
            env == "production" || env == "prod"
        };

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }
        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        // Outside production the frame extractor runs locally; deployed
        // environments skip it unless explicitly enabled.
        let local_processing_enabled = env::var("VIDEO_PROCESSING_ENABLED")
            .map(|v| v.to_lowercase().parse().unwrap_or(!is_production))
            .unwrap_or(!is_production);

        let scratch_dir = env::var("SCRATCH_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| env::temp_dir().join("video-processing"));

        Ok(Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| CONNECTION_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            blob_token: env::var("BLOB_READ_WRITE_TOKEN").ok(),
            blob_base_url: env::var("BLOB_STORE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BLOB_BASE_URL.to_string()),
            local_processing_enabled,
            placeholder_thumbnail_url: env::var("THUMBNAIL_PLACEHOLDER_URL")
                .unwrap_or_default(),
            scratch_dir,
            ffmpeg_path: env::var("FFMPEG_PATH").unwrap_or_else(|_| "ffmpeg".to_string()),
            http_connect_timeout_secs: env::var("HTTP_CONNECT_TIMEOUT_SECS")
                .unwrap_or_else(|_| HTTP_CONNECT_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(HTTP_CONNECT_TIMEOUT_SECS),
            http_request_timeout_secs: env::var("HTTP_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| HTTP_REQUEST_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(HTTP_REQUEST_TIMEOUT_SECS),
        })
    }
}
