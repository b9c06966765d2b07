//! Command-line interface

use clap::Parser;
use sarago_core::config::{ServerConfig, DEFAULT_CONFIG_FILE, DEFAULT_PAGE_SIZE};
use std::path::PathBuf;

/// sarago - browse call detail records and play their voice recordings
#[derive(Debug, Parser)]
#[command(name = "sarago")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The HTTP port
    #[arg(long, default_value_t = 80)]
    pub port: u16,

    /// Starting URL announced at startup
    #[arg(long, default_value = "http://localhost")]
    pub url: String,

    /// Database host, overriding DatabaseHost from the config file
    #[arg(long = "db", value_name = "HOST")]
    pub db_host: Option<String>,

    /// Page size for results
    #[arg(long = "pg", default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(i64).range(1..))]
    pub page_size: i64,

    /// Path to config
    #[arg(long = "cfg", value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Directory holding the HTML templates
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub templates: PathBuf,

    /// Directory served at /
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// HTTP worker threads (defaults to the number of CPUs)
    #[arg(long)]
    pub workers: Option<usize>,
}

impl Cli {
    /// Server settings taken from the command line
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            port: self.port,
            start_url: self.url.clone(),
            page_size: self.page_size,
            workers: self.workers.unwrap_or_else(num_cpus::get).max(1),
            template_dir: self.templates.clone(),
            static_root: self.root.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["sarago"]);
        assert_eq!(cli.port, 80);
        assert_eq!(cli.url, "http://localhost");
        assert_eq!(cli.page_size, 15);
        assert_eq!(cli.config, "sarago.yml");
        assert!(cli.db_host.is_none());

        let server = cli.server_config();
        assert_eq!(server.page_size, 15);
        assert!(server.workers >= 1);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "sarago", "--port", "8080", "--db", "10.1.1.1", "--pg", "50", "--cfg", "alt.yml",
        ]);
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.db_host.as_deref(), Some("10.1.1.1"));
        assert_eq!(cli.page_size, 50);
        assert_eq!(cli.config, "alt.yml");
    }

    #[test]
    fn test_page_size_must_be_positive() {
        assert!(Cli::try_parse_from(["sarago", "--pg", "0"]).is_err());
    }
}
