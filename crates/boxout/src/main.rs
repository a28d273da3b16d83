//! `boxout` - draw stacked text sections inside a terminal box.

use std::io::{self, Write};

use clap::Parser;

mod cli;
mod logging;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    cli.color.apply();

    let rendered = cli.render(io::stdin().lock())?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
