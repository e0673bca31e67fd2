use anyhow::{Result, bail};
use gentables::ExtractConfig;
use tracing::info;

use crate::cli::ConfigArgs;

pub fn run(args: ConfigArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!(
            "{} already exists; pass --force to overwrite",
            args.output.display()
        );
    }

    ExtractConfig::default().save_to_path(&args.output)?;
    info!(path = %args.output.display(), "wrote default extract config");

    Ok(())
}
