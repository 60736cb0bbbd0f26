use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::debug;

use png_icon::{read_chunks, write_bytes, PNG};

/// Writes a 16x16 solid-colour PNG icon.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Where to write the icon
    #[arg(short, long, default_value = "icon.png")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let icon = PNG::icon();

    let bytes = icon.to_bytes().context("encoding icon")?;
    for chunk in read_chunks(&bytes).context("re-reading encoded icon")? {
        debug!("{:?}", chunk);
    }

    write_bytes(&cli.output, &bytes)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    println!("Icon created successfully!");
    Ok(())
}
