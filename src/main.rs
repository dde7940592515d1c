use anyhow::Result;
use schematic::cli::{self, Opts};

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    log::debug!("reading schematic from `{}`", opts.path().display());
    cli::run(&opts)
}
