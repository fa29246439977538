use std::path::PathBuf;

use clap::Parser;

use pyre::config::{Config, MergePolicy};

/// Define phonemes as bundles of binary features, and assert implications between bundles.
///
/// Each line read is a single statement, and the effect of each statement is written after it is read.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Files of statements, read in order (and before standard input).
    pub paths: Vec<PathBuf>,

    /// How to merge features which contradict those of a symbol: 'skip' the contradicting features, or apply nothing ('strict').
    #[arg(long, value_name = "POLICY", value_enum, default_value_t = MergePolicy::Skip)]
    pub merge_policy: MergePolicy,

    /// Shorthand for '--merge-policy strict'.
    #[arg(long)]
    pub strict: bool,

    /// Do not read from standard input.
    #[arg(long)]
    pub no_stdin: bool,

    /// Do not write a prompt when reading from a terminal.
    #[arg(short, long)]
    pub quiet: bool,

    /// Write this help as markdown, and exit.
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// The configuration of a context, as requested by `args`.
pub fn config_from_args(args: &Args) -> Config {
    let mut config = Config::default();

    config.merge_policy.value = match args.strict {
        true => MergePolicy::Strict,
        false => args.merge_policy,
    };

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_shorthand() {
        let args = Args::parse_from(["pyre", "--strict", "inventory.pyre"]);
        assert_eq!(config_from_args(&args).merge_policy.value, MergePolicy::Strict);
        assert_eq!(args.paths, vec![PathBuf::from("inventory.pyre")]);
    }

    #[test]
    fn default_policy() {
        let args = Args::parse_from(["pyre"]);
        assert_eq!(config_from_args(&args).merge_policy.value, MergePolicy::Skip);
    }

    #[test]
    fn named_policy() {
        let args = Args::parse_from(["pyre", "--merge-policy", "strict"]);
        assert_eq!(config_from_args(&args).merge_policy.value, MergePolicy::Strict);
    }

    #[test]
    fn unknown_policy() {
        assert!(Args::try_parse_from(["pyre", "--merge-policy", "lenient"]).is_err());
    }
}
