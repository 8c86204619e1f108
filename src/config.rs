//! Configuration for the calculator service
//!
//! CLI arguments and environment variable handling using clap.

use clap::Parser;
use std::net::SocketAddr;

/// calcsuite - multi-function calculator service
#[derive(Parser, Debug, Clone)]
#[command(name = "calcsuite")]
#[command(about = "HTTP service for the multi-function calculator suite")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "127.0.0.1:5000")]
    pub listen: SocketAddr,

    /// Directory holding the built client bundle
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let args = Args::parse_from(["calcsuite"]);
        assert_eq!(args.listen.port(), 5000);
        assert_eq!(args.static_dir, "static");
        assert!(args.validate().is_ok());
    }

    #[test]
    fn bogus_log_level_is_rejected() {
        let args = Args::parse_from(["calcsuite", "--log-level", "verbose"]);
        assert!(args.validate().is_err());
    }
}
