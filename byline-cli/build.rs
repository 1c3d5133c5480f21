use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the default projections from byline-doc's registry.
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_PROJECTIONS: &[&str] = &["html", "json", "text", "toc"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("byline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for normalizing and projecting byline post documents")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to an editor JSON export")
                .required_unless_present("list-projections")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Target projection")
                .value_parser(clap::builder::PossibleValuesParser::new(
                    AVAILABLE_PROJECTIONS,
                ))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("list-projections")
                .long("list-projections")
                .help("List available projections")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "byline", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "byline", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "byline", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
