/// obj-flip - negate the first two axes of an OBJ mesh
///
/// Usage: obj-flip <source.obj> <destination.obj>
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use std::io;
use vrsetup_cli::progress::write_summary;
use vrsetup_cli::{logging, FlipArgs, ProgressLine};
use vrsetup_core::flip_file;

fn main() -> Result<()> {
    let args = FlipArgs::parse();
    logging::init(args.verbose);

    let show_progress = !args.quiet && io::stderr().is_tty();
    let mut progress = ProgressLine::new(io::stderr());

    let summary = flip_file(&args.source, &args.destination, |done, total| {
        if show_progress {
            if let Err(err) = progress.update(done, total) {
                tracing::debug!(%err, "Progress output failed");
            }
        }
    })
    .with_context(|| {
        format!(
            "failed to flip {} into {}",
            args.source.display(),
            args.destination.display()
        )
    })?;

    if show_progress {
        progress.finish(&summary)?;
    } else if !args.quiet {
        write_summary(io::stderr(), &summary)?;
    }
    if let Some(backup) = &summary.backup {
        eprintln!("Previous output saved as {}", backup.display());
    }
    Ok(())
}
