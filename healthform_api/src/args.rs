use std::path::PathBuf;

use clap::Parser;
use healthform_core::DEFAULT_MAX_UPLOAD_MB;

use crate::config::ServiceConfig;

pub fn parse_args() -> Args {
    Args::parse()
}

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(
        long,
        env = "HEALTHFORM_HOST",
        default_value = "127.0.0.1",
        help = "Address to listen on."
    )]
    pub host: String,

    #[arg(
        short,
        long,
        env = "HEALTHFORM_PORT",
        default_value_t = 5000,
        help = "Port to listen on."
    )]
    pub port: u16,

    #[arg(
        short,
        long,
        env = "HEALTHFORM_UPLOAD_DIR",
        default_value = "./uploads",
        help = "Directory that uploaded files are written to. It is created at startup if it does not exist."
    )]
    pub upload_dir: PathBuf,

    #[arg(
        long,
        env = "HEALTHFORM_MAX_UPLOAD_MB",
        default_value_t = DEFAULT_MAX_UPLOAD_MB,
        help = "Largest request body, in megabytes, that the form endpoint accepts."
    )]
    pub max_upload_mb: usize,
}

impl Args {
    /// The address the listener binds to, in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            upload_dir: self.upload_dir.clone(),
            max_upload_bytes: self.max_upload_mb.saturating_mul(1024 * 1024),
        }
    }
}
