//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Limpid - Simplify documents with a remote language model.
#[derive(Debug, Parser)]
#[command(name = "limpid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input text files, processed in order
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output file for the simplified text
    #[arg(short, long, default_value = "simplified.txt")]
    pub output: PathBuf,

    /// Engine configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum chunk size in bytes
    #[arg(long)]
    pub max_chunk_size: Option<usize>,

    /// Chat completions endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Model to request
    #[arg(long)]
    pub model: Option<String>,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["limpid", "notes.txt"]);
        assert_eq!(cli.inputs, vec![PathBuf::from("notes.txt")]);
        assert_eq!(cli.output, PathBuf::from("simplified.txt"));
        assert!(cli.config.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_multiple_inputs_keep_order() {
        let cli = Cli::parse_from(["limpid", "a.txt", "b.txt", "c.txt"]);
        let names: Vec<_> = cli.inputs.iter().map(|p| p.to_str().unwrap()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "limpid",
            "notes.txt",
            "-o",
            "out.txt",
            "--max-chunk-size",
            "1500",
            "--model",
            "llama3-70b-8192",
            "--quiet",
        ]);
        assert_eq!(cli.output, PathBuf::from("out.txt"));
        assert_eq!(cli.max_chunk_size, Some(1500));
        assert_eq!(cli.model.as_deref(), Some("llama3-70b-8192"));
        assert!(cli.quiet);
    }

    #[test]
    fn test_no_inputs_rejected() {
        assert!(Cli::try_parse_from(["limpid"]).is_err());
    }
}
