//! Loading and saving the inventory as two flat text files.
//!
//! Neither direction panics or aborts the session: load always hands back
//! whatever it managed to read, save reports the error and leaves memory as is.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{error, info, warn};

use crate::{
    config::InventoryFiles,
    storage::{
        codec::{self, DecodeError},
        error::StorageError,
        inventory::Inventory,
    },
};

#[derive(Debug)]
pub enum LoadStatus {
    Complete,
    /// One of the files does not exist yet. Not an error for a fresh inventory.
    FileAbsent(PathBuf),
    /// Reading stopped early; the inventory holds everything read before.
    Failed(StorageError),
}

#[derive(Debug)]
pub struct LoadReport {
    pub inventory: Inventory,
    pub status: LoadStatus,
}

pub fn load(files: &InventoryFiles) -> LoadReport {
    let mut inventory = Inventory::new();

    let status = match read_into(files, &mut inventory) {
        Ok(()) => {
            info!(
                "loaded {} CDs from {} and {}",
                inventory.len(),
                files.cd_file.to_string_lossy(),
                files.track_file.to_string_lossy()
            );
            LoadStatus::Complete
        }
        Err(StorageError::Fs { path, source })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            warn!("inventory file {} not found", path.to_string_lossy());
            LoadStatus::FileAbsent(path)
        }
        Err(err) => {
            error!("failed to load inventory, keeping {} CDs: {err}", inventory.len());
            LoadStatus::Failed(err)
        }
    };

    LoadReport { inventory, status }
}

fn read_into(files: &InventoryFiles, inventory: &mut Inventory) -> Result<(), StorageError> {
    for_each_line(&files.cd_file, |line| {
        inventory.push(codec::decode_cd(line)?)?;
        Ok(())
    })?;

    for_each_line(&files.track_file, |line| {
        let (cd_id, track) = codec::decode_track(line)?;
        inventory.find_by_id_mut(cd_id)?.add_track(track)?;
        Ok(())
    })
}

fn for_each_line(
    path: &Path,
    mut handle: impl FnMut(&str) -> Result<(), DecodeError>,
) -> Result<(), StorageError> {
    let file = File::open(path).map_err(|e| StorageError::fs(path, e))?;

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| StorageError::fs(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        handle(&line).map_err(|source| StorageError::Malformed {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
    }
    Ok(())
}

/// Overwrites both files with the current inventory.
///
/// CDs are written in list order, tracks in slot order per CD. A failure part
/// way through leaves the file partially written.
pub fn save(files: &InventoryFiles, inventory: &Inventory) -> Result<(), StorageError> {
    let cds = inventory.cds();

    let result = write_lines(&files.cd_file, cds.iter().map(codec::encode_cd)).and_then(|()| {
        let tracks = cds.iter().flat_map(|cd| {
            cd.tracks()
                .iter()
                .flatten()
                .map(move |track| codec::encode_track(cd.id(), track))
        });
        write_lines(&files.track_file, tracks)
    });

    match &result {
        Ok(()) => info!(
            "saved {} CDs to {} and {}",
            cds.len(),
            files.cd_file.to_string_lossy(),
            files.track_file.to_string_lossy()
        ),
        Err(err) => error!("failed to save inventory: {err}"),
    }
    result
}

fn write_lines(path: &Path, lines: impl Iterator<Item = String>) -> Result<(), StorageError> {
    let file = File::create(path).map_err(|e| StorageError::fs(path, e))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer
            .write_all(line.as_bytes())
            .map_err(|e| StorageError::fs(path, e))?;
    }
    writer.flush().map_err(|e| StorageError::fs(path, e))
}
