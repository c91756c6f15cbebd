//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Script and stylesheet tags with bundling, minification and cache busting
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: assets.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Site root holding the js/css folders (overrides the config file)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Prefix for generated URLs (e.g., /static, https://cdn.example.com)
    #[arg(short = 'H', long = "http-root", global = true, value_hint = clap::ValueHint::Url)]
    pub http_root: Option<String>,

    /// Minify single files and bundles
    #[arg(short, long, global = true, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Serve every source individually (disables bundling and minification)
    #[arg(short, long, global = true, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub debug: Option<bool>,

    /// Render missing sources with `?v=0` instead of failing
    #[arg(short = 'I', long = "ignore-missing", global = true, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub ignore_missing: Option<bool>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print a <script> tag for one file
    Script {
        /// File name relative to the js folder
        file: String,

        #[command(flatten)]
        attrs: AttrArgs,
    },

    /// Print a <link rel="stylesheet"> tag for one file
    Style {
        /// File name relative to the css folder
        file: String,

        #[command(flatten)]
        attrs: AttrArgs,
    },

    /// Bundle scripts into one file and print its <script> tag
    Scripts {
        #[command(flatten)]
        bundle: BundleArgs,
    },

    /// Bundle stylesheets into one file and print its <link> tag
    Styles {
        #[command(flatten)]
        bundle: BundleArgs,
    },
}

/// Extra attributes shared by every subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct AttrArgs {
    /// Extra tag attribute, repeatable (`-a defer -a media=print`)
    #[arg(short = 'a', long = "attr", value_name = "NAME[=VALUE]", value_parser = parse_attr)]
    pub attrs: Vec<(String, String)>,
}

impl AttrArgs {
    /// Borrowed view in the order given on the command line.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.attrs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }
}

/// Bundle command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BundleArgs {
    /// Source files in bundle order
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<String>,

    /// Output file name inside the compiled folder
    #[arg(short, long, value_name = "OUT")]
    pub output: String,

    #[command(flatten)]
    pub attrs: AttrArgs,
}

/// Parse `name=value`; a bare `name` repeats itself as the value.
fn parse_attr(s: &str) -> Result<(String, String), String> {
    let (name, value) = s.split_once('=').unwrap_or((s, s));
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("attribute name is empty in `{s}`"));
    }
    Ok((name.to_owned(), value.to_owned()))
}
