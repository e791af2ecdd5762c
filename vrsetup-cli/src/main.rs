/// vrsetup-config - print display-wall configuration sections
///
/// Reads one `.vrsetup` file per tile and prints the screen sections, the
/// window sections, or the list of display identifiers.
///   - vrsetup-config screens
///   - vrsetup-config windows --directory ./wall --tiles 12
///   - vrsetup-config displays --scale 1.88
use anyhow::Result;
use clap::Parser;
use vrsetup_cli::{generate, logging, ConfigArgs};

fn main() -> Result<()> {
    let args = ConfigArgs::parse();
    logging::init(args.verbose);

    let output = generate(&args)?;
    println!("{output}");
    Ok(())
}
