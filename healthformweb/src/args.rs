use clap::Parser;
use healthform_core::DEFAULT_MAX_UPLOAD_MB;

pub fn parse_args() -> Args {
    Args::parse()
}

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(
        long,
        env = "HEALTHFORMWEB_HOST",
        default_value = "127.0.0.1",
        help = "Address to serve the dashboard on."
    )]
    pub host: String,

    #[arg(
        short,
        long,
        env = "HEALTHFORMWEB_PORT",
        default_value_t = 8501,
        help = "Port to serve the dashboard on. Use 0 to have a random unused port chosen."
    )]
    pub port: u16,

    #[arg(
        short,
        long,
        env = "HEALTHFORMWEB_BACKEND_URL",
        default_value = "http://localhost:5000/api/form",
        help = "URL of the submission service endpoint that the form is forwarded to."
    )]
    pub backend_url: String,

    #[arg(
        long,
        env = "HEALTHFORMWEB_MAX_UPLOAD_MB",
        default_value_t = DEFAULT_MAX_UPLOAD_MB,
        help = "Largest file, in megabytes, that the dashboard accepts from the browser."
    )]
    pub max_upload_mb: usize,

    #[arg(
        short,
        long,
        default_value = "false",
        help = "Whether to automatically open the dashboard in the browser."
    )]
    pub auto_open: bool,
}

impl Args {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}
