use clap::Parser;

#[derive(Parser)]
#[command(name = "tick", about = concat!("[x] tick v", env!("CARGO_PKG_VERSION"), " - your to-do list in the terminal"), version)]
pub struct Cli {
    /// Run against a different data directory (default: $XDG_DATA_HOME/tick)
    #[arg(short = 'C', long = "data-dir")]
    pub data_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_no_args() {
        let cli = Cli::parse_from(["tick"]);
        assert!(cli.data_dir.is_none());
    }

    #[test]
    fn parses_data_dir() {
        let cli = Cli::parse_from(["tick", "-C", "/tmp/elsewhere"]);
        assert_eq!(cli.data_dir.as_deref(), Some("/tmp/elsewhere"));

        let cli = Cli::parse_from(["tick", "--data-dir", "/tmp/other"]);
        assert_eq!(cli.data_dir.as_deref(), Some("/tmp/other"));
    }
}
