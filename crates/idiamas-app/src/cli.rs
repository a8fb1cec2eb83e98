use std::path::PathBuf;

use clap::Parser;

/// Capture subtitles from the screen, OCR them and explain the translation
#[derive(Parser, Debug)]
#[command(name = "idiamas", version)]
pub struct Args {
    /// Load settings from this dotenv file instead of `./.env`
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Append logs to this file, overrides LOG_FILE
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// List available monitors and exit
    #[arg(long)]
    pub list_monitors: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Args::parse_from([
            "idiamas",
            "--env-file",
            "conf/.env",
            "--log-file",
            "run.log",
            "--list-monitors",
        ]);
        assert_eq!(args.env_file, Some(PathBuf::from("conf/.env")));
        assert_eq!(args.log_file, Some(PathBuf::from("run.log")));
        assert!(args.list_monitors);
    }

    #[test]
    fn flags_are_optional() {
        let args = Args::parse_from(["idiamas"]);
        assert!(args.env_file.is_none());
        assert!(args.log_file.is_none());
        assert!(!args.list_monitors);
    }
}
