// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "quadric-beach")]
#[command(about = "Real-time ray traced beach built from quadric surfaces", long_about = None)]
pub struct Cli {
    /// JSON scene configuration; missing fields keep their defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long = "dump-config", default_value = "false")]
    pub dump_config: bool,

    /// Initial window width
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["quadric-beach"]);
        assert!(cli.config.is_none());
        assert!(!cli.dump_config);
        assert_eq!((cli.width, cli.height), (800, 600));
    }

    #[test]
    fn all_flags() {
        let cli = Cli::parse_from([
            "quadric-beach",
            "--config",
            "beach.json",
            "--dump-config",
            "--width",
            "1920",
            "--height",
            "1080",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("beach.json")));
        assert!(cli.dump_config);
        assert_eq!((cli.width, cli.height), (1920, 1080));
    }
}
