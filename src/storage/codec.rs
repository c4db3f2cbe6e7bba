//! Line format of the two inventory files.
//!
//! CD file: `id,title,artist`. Track file: `cd_id,position,title,length`.
//! Fields are not escaped; the domain types refuse delimiter characters.

use thiserror::Error;

use crate::domain::{
    cd::Cd,
    error::{DomainError, parse_key},
    track::Track,
};

pub const CD_FIELDS: usize = 3;
pub const TRACK_FIELDS: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected {expected} comma separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

fn split_fields<const N: usize>(line: &str) -> Result<[&str; N], DecodeError> {
    let fields = line.trim_end_matches(['\r', '\n']).split(',').collect::<Vec<_>>();
    let found = fields.len();
    fields
        .try_into()
        .map_err(|_| DecodeError::FieldCount { expected: N, found })
}

pub fn decode_cd(line: &str) -> Result<Cd, DecodeError> {
    let [id, title, artist] = split_fields::<CD_FIELDS>(line)?;
    Ok(Cd::new(parse_key("CD id", id)?, title, artist)?)
}

/// Returns the owning CD id together with the track.
pub fn decode_track(line: &str) -> Result<(u32, Track), DecodeError> {
    let [cd_id, position, title, length] = split_fields::<TRACK_FIELDS>(line)?;
    let cd_id = parse_key("CD id", cd_id)?;
    let track = Track::new(parse_key("track position", position)?, title, length)?;
    Ok((cd_id, track))
}

pub fn encode_cd(cd: &Cd) -> String {
    cd.to_record()
}

pub fn encode_track(cd_id: u32, track: &Track) -> String {
    format!("{cd_id},{}", track.to_record())
}
