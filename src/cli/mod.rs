use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::shell::Shell;
use crate::config::{self, InventoryFiles};
use crate::domain::cd::Cd;
use crate::storage::files::{self, LoadStatus};
use crate::storage::inventory::Inventory;

pub mod shell;

#[derive(Parser)]
#[command(name = "cdinventory")]
#[command(version = "0.1")]
#[command(about = "CD / album inventory manager")]
pub struct Cli {
    /// Path to the config TOML file. Defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu (default)
    Shell,
    /// Show the inventory ordered by id
    List,
    /// Show the tracks of a CD
    Tracks { id: u32 },
    /// Add a CD and save the inventory
    AddCd {
        id: u32,
        title: String,
        artist: String,
    },
    /// Add a track to a CD and save the inventory
    AddTrack {
        cd: u32,
        position: u32,
        title: String,
        length: String,
    },
    /// Remove the track in the given slot of a CD and save the inventory
    RemoveTrack { cd: u32, slot: usize },
    /// Print the long record (CD line plus track listing) of a CD
    Export { id: u32 },
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => config::Config::load(path)?,
        None => config::Config::default(),
    };
    let files = cfg.inventory;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = io::stdin();
            Shell::new(stdin.lock(), &mut out, &files).run()?;
        }

        Commands::List => {
            let inventory = load_reported(&mut out, &files)?;
            write_inventory(&mut out, &inventory)?;
        }

        Commands::Tracks { id } => {
            let inventory = load_reported(&mut out, &files)?;
            write_tracks(&mut out, inventory.find_by_id(id)?)?;
        }

        Commands::AddCd { id, title, artist } => {
            let mut inventory = load_for_update(&files)?;
            inventory.add_cd(id, &title, &artist)?;
            files::save(&files, &inventory)?;
            write_inventory(&mut out, &inventory)?;
        }

        Commands::AddTrack {
            cd,
            position,
            title,
            length,
        } => {
            let mut inventory = load_for_update(&files)?;
            inventory.add_track(cd, position, &title, &length)?;
            files::save(&files, &inventory)?;
            write_tracks(&mut out, inventory.find_by_id(cd)?)?;
        }

        Commands::RemoveTrack { cd, slot } => {
            let mut inventory = load_for_update(&files)?;
            match inventory.remove_track(cd, slot)? {
                Some(track) => writeln!(out, "Removed {track}")?,
                None => writeln!(out, "No track in slot {slot}, nothing removed")?,
            }
            files::save(&files, &inventory)?;
        }

        Commands::Export { id } => {
            let inventory = load_reported(&mut out, &files)?;
            write!(out, "{}", inventory.find_by_id(id)?.to_long_record()?)?;
        }
    }

    Ok(())
}

/// Loads for read-only commands, printing why the result may be incomplete.
fn load_reported(out: &mut impl Write, files: &InventoryFiles) -> io::Result<Inventory> {
    let report = files::load(files);
    report_load(out, &report.status)?;
    Ok(report.inventory)
}

/// Loads for commands that save afterwards. A partial load would be written
/// back over the files, so it is refused.
fn load_for_update(files: &InventoryFiles) -> anyhow::Result<Inventory> {
    let report = files::load(files);
    match report.status {
        LoadStatus::Failed(err) => {
            Err(err).with_context(|| "refusing to save over an inventory that failed to load")
        }
        LoadStatus::Complete | LoadStatus::FileAbsent(_) => Ok(report.inventory),
    }
}

pub fn report_load(out: &mut impl Write, status: &LoadStatus) -> io::Result<()> {
    match status {
        LoadStatus::Complete => Ok(()),
        LoadStatus::FileAbsent(_) => writeln!(
            out,
            "Found no file to load. Add Album and/or tracks and save to create file"
        ),
        LoadStatus::Failed(err) => writeln!(out, "There was a general error!\n{err}"),
    }
}

pub fn write_inventory(out: &mut impl Write, inventory: &Inventory) -> io::Result<()> {
    writeln!(out, "======= The Current Inventory: =======")?;
    writeln!(out, "ID\tCD Title (by: Artist)\n")?;
    for slot in inventory.slots() {
        match slot {
            Some(cd) => writeln!(out, "{cd}")?,
            None => writeln!(out, "No information for this Album")?,
        }
    }
    writeln!(out, "======================================")
}

pub fn write_tracks(out: &mut impl Write, cd: &Cd) -> io::Result<()> {
    writeln!(out, "====== Current CD / Album: ======")?;
    writeln!(out, "{cd}")?;
    writeln!(out, "=================================")?;
    match cd.tracks_text() {
        Ok(text) => writeln!(out, "{text}")?,
        Err(err) => writeln!(out, "{err}")?,
    }
    writeln!(out, "=================================")
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn no_subcommand_means_shell() {
        let cli = Cli::parse_from(["cdinventory"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_add_track() {
        let cli = Cli::parse_from([
            "cdinventory",
            "--config",
            "inventory.toml",
            "add-track",
            "1",
            "2",
            "Baby Be Mine",
            "4:20",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("inventory.toml")));
        match cli.command {
            Some(Commands::AddTrack {
                cd,
                position,
                title,
                length,
            }) => {
                assert_eq!((cd, position), (1, 2));
                assert_eq!(title, "Baby Be Mine");
                assert_eq!(length, "4:20");
            }
            _ => panic!("expected add-track"),
        }
    }

    #[test]
    fn inventory_listing_shows_holes() -> anyhow::Result<()> {
        let mut inventory = Inventory::new();
        inventory.add_cd(2, "Bad", "Michael Jackson")?;

        let mut out = Vec::new();
        write_inventory(&mut out, &inventory)?;

        assert_eq!(
            String::from_utf8(out)?,
            "======= The Current Inventory: =======\n\
             ID\tCD Title (by: Artist)\n\n\
             No information for this Album\n\
             2\tBad (by: Michael Jackson)\n\
             ======================================\n"
        );
        Ok(())
    }

    #[test]
    fn track_listing_reports_empty_cd() -> anyhow::Result<()> {
        let cd = Cd::new(1, "Thriller", "Michael Jackson")?;

        let mut out = Vec::new();
        write_tracks(&mut out, &cd)?;

        assert!(String::from_utf8(out)?.contains("no tracks saved for CD 1"));
        Ok(())
    }
}
