//! treedot binary
//!
//! Usage:
//!   treedot [OPTIONS] <json_file>
//!
//! Reads a JSON parse tree and prints it as a Graphviz digraph on stdout.
//! Diagnostics and logs (RUST_LOG) go to stderr.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use treedot::config::{EmitConfig, OutputFormat};
use treedot::TreeDotError;

const USAGE: &str = "Usage: treedot [OPTIONS] <json_file>";

fn print_usage() {
    println!("{USAGE}");
    println!();
    println!("Options:");
    println!("  --format dot|terminal   Output format (default: dot)");
    println!("  --graph-name NAME       Name of the digraph (default: tree)");
    println!("  --indent                Indent node and edge lines by depth");
    println!("  --highlight-root        Draw the root as a filled node");
    println!("  --escape-labels         Escape quotes and backslashes in labels");
    println!("  --include TAG[,TAG]     Keep only nodes with these tags");
    println!("  --exclude TAG[,TAG]     Drop nodes with these tags, keep their children");
    println!("  --prune TAG[,TAG]       Drop nodes with these tags and everything below");
    println!("  --collect TAG[,TAG]     List nodes with these tags instead of drawing");
    println!("  -h, --help              Show this message");
    println!();
    println!("Example:");
    println!("  treedot parse.json | dot -Tpng -o parse.png");
}

#[derive(Debug)]
enum Command {
    Help,
    Convert { path: PathBuf, config: EmitConfig },
}

fn usage_error(message: impl Into<String>) -> TreeDotError {
    TreeDotError::Usage(message.into())
}

fn value_after<'a>(raw: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, TreeDotError> {
    *i += 1;
    raw.get(*i)
        .map(String::as_str)
        .ok_or_else(|| usage_error(format!("Missing value after {flag}")))
}

fn tag_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_command(raw: &[String]) -> Result<Command, TreeDotError> {
    let mut config = EmitConfig::default();
    let mut positional: Vec<PathBuf> = Vec::new();

    let mut i = 0;
    while i < raw.len() {
        match raw[i].as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--format" => {
                config.format = value_after(raw, &mut i, "--format")?.parse::<OutputFormat>()?;
            }
            "--graph-name" => {
                config.dot.graph_name = value_after(raw, &mut i, "--graph-name")?.to_string();
            }
            "--indent" => config.dot.indent = true,
            "--highlight-root" => config.dot.highlight_root = true,
            "--escape-labels" => config.dot.escape_labels = true,
            "--include" => {
                let tags = tag_list(value_after(raw, &mut i, "--include")?);
                config.filter.include.extend(tags);
            }
            "--exclude" => {
                let tags = tag_list(value_after(raw, &mut i, "--exclude")?);
                config.filter.exclude.extend(tags);
            }
            "--prune" => {
                let tags = tag_list(value_after(raw, &mut i, "--prune")?);
                config.filter.prune.extend(tags);
            }
            "--collect" => {
                let tags = tag_list(value_after(raw, &mut i, "--collect")?);
                config.collect.extend(tags);
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(usage_error(format!("Unknown option: {other}")));
            }
            other => positional.push(PathBuf::from(other)),
        }
        i += 1;
    }

    if positional.len() != 1 {
        return Err(usage_error(String::new()));
    }
    let path = positional.remove(0);

    Ok(Command::Convert { path, config })
}

fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_command(&raw) {
        Ok(command) => command,
        Err(TreeDotError::Usage(message)) => {
            if !message.is_empty() {
                eprintln!("{message}");
            }
            print_usage();
            process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    match command {
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::Convert { path, config } => {
            debug!(?config, "starting conversion");
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            treedot::convert(&path, &config, &mut out)
                .with_context(|| format!("cannot convert {}", path.display()))?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_path_uses_defaults() {
        let Command::Convert { path, config } = parse_command(&args(&["parse.json"])).unwrap()
        else {
            panic!("expected convert");
        };
        assert_eq!(path, PathBuf::from("parse.json"));
        assert_eq!(config, EmitConfig::default());
    }

    #[test]
    fn test_wrong_positional_count_is_usage_error() {
        assert!(matches!(parse_command(&[]), Err(TreeDotError::Usage(_))));
        assert!(matches!(
            parse_command(&args(&["a.json", "b.json"])),
            Err(TreeDotError::Usage(_))
        ));
    }

    #[test]
    fn test_options_are_collected() {
        let raw = args(&[
            "--format",
            "terminal",
            "--graph-name",
            "cst",
            "--indent",
            "--include",
            "NP, VP",
            "--prune",
            "PUNCT",
            "in.json",
        ]);
        let Command::Convert { config, .. } = parse_command(&raw).unwrap() else {
            panic!("expected convert");
        };
        assert_eq!(config.format, OutputFormat::Terminal);
        assert_eq!(config.dot.graph_name, "cst");
        assert!(config.dot.indent);
        assert_eq!(config.filter.include, vec!["NP", "VP"]);
        assert_eq!(config.filter.prune, vec!["PUNCT"]);
    }

    #[test]
    fn test_bad_options() {
        assert!(matches!(
            parse_command(&args(&["--bogus", "in.json"])),
            Err(TreeDotError::Usage(_))
        ));
        assert!(matches!(
            parse_command(&args(&["in.json", "--format"])),
            Err(TreeDotError::Usage(_))
        ));
        assert!(matches!(
            parse_command(&args(&["--format", "png", "in.json"])),
            Err(TreeDotError::Usage(_))
        ));
        assert!(matches!(
            parse_command(&args(&["--help"])),
            Ok(Command::Help)
        ));
    }
}
