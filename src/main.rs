//! asset-compiler - script/stylesheet tags with bundling and cache busting.

mod cli;

use anyhow::Result;
use asset_compiler::{AssetCompiler, logger};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let compiler = AssetCompiler::new(cli::load_config(&cli)?);

    let markup = match &cli.command {
        Commands::Script { file, attrs } => compiler.get_script(file, &attrs.pairs())?,
        Commands::Style { file, attrs } => compiler.get_style(file, &attrs.pairs())?,
        Commands::Scripts { bundle } => {
            compiler.get_scripts_multi(bundle.files.as_slice(), &bundle.output, &bundle.attrs.pairs())?
        }
        Commands::Styles { bundle } => {
            compiler.get_styles_multi(bundle.files.as_slice(), &bundle.output, &bundle.attrs.pairs())?
        }
    };

    // Debug bundles already end each tag with a newline
    if markup.ends_with('\n') {
        print!("{markup}");
    } else {
        println!("{markup}");
    }
    Ok(())
}
