//! Renders sfflash.1 from the clap definition into the given directory
//! (`man` if omitted)

use clap::CommandFactory;
use std::path::PathBuf;

#[path = "../cli.rs"]
#[allow(dead_code)]
mod cli;

fn main() -> std::io::Result<()> {
    let dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("man"), PathBuf::from);
    std::fs::create_dir_all(&dir)?;

    let mut page = Vec::new();
    clap_mangen::Man::new(cli::Cli::command()).render(&mut page)?;

    let path = dir.join("sfflash.1");
    std::fs::write(&path, page)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
