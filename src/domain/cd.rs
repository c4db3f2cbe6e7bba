use std::fmt;

use super::{
    error::{DomainError, check_key, check_text},
    slots::{self, Keyed},
    track::Track,
};

const MISSING_TRACK: &str = "No Information for this track";

/// A CD / album and its tracks.
///
/// Tracks are kept slotted by position: `tracks()[p - 1]` is the track at
/// position `p`, every other slot is a hole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cd {
    id: u32,
    title: String,
    artist: String,
    tracks: Vec<Option<Track>>,
}

impl Cd {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        artist: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        let artist = artist.into();
        check_text("CD title", &title)?;
        check_text("CD artist", &artist)?;
        Ok(Self {
            id: check_key("CD id", id)?,
            title,
            artist,
            tracks: Vec::new(),
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Slotted tracks, holes included.
    pub fn tracks(&self) -> &[Option<Track>] {
        &self.tracks
    }

    pub fn track(&self, position: u32) -> Option<&Track> {
        let slot = (position as usize).checked_sub(1)?;
        self.tracks.get(slot)?.as_ref()
    }

    /// Adds `track` and re-slots the collection.
    ///
    /// Fails when another track already holds the same position.
    pub fn add_track(&mut self, track: Track) -> Result<(), DomainError> {
        if self.track(track.position()).is_some() {
            return Err(DomainError::DuplicateKey {
                kind: "track position",
                key: track.position(),
            });
        }
        self.tracks.push(Some(track));
        self.reindex_tracks();
        Ok(())
    }

    /// Removes whatever sits in 1-based `slot` and re-slots the collection.
    ///
    /// Returns `None` when the slot was a hole.
    pub fn remove_track(&mut self, slot: usize) -> Result<Option<Track>, DomainError> {
        let len = self.tracks.len();
        let index = slot
            .checked_sub(1)
            .filter(|index| *index < len)
            .ok_or(DomainError::SlotOutOfRange { slot, len })?;
        let removed = self.tracks[index].take();
        self.reindex_tracks();
        Ok(removed)
    }

    /// One line per slot, holes rendered as a placeholder.
    pub fn tracks_text(&self) -> Result<String, DomainError> {
        if self.tracks.is_empty() {
            return Err(DomainError::EmptyCollection(self.id));
        }
        let mut text = String::new();
        for slot in &self.tracks {
            match slot {
                Some(track) => text.push_str(&track.to_string()),
                None => text.push_str(MISSING_TRACK),
            }
            text.push('\n');
        }
        Ok(text)
    }

    /// `id,title,artist` terminated by a newline.
    pub fn to_record(&self) -> String {
        format!("{},{},{}\n", self.id, self.title, self.artist)
    }

    /// Storage line, blank line, track listing, blank line.
    pub fn to_long_record(&self) -> Result<String, DomainError> {
        Ok(format!("{}\n{}\n", self.to_record(), self.tracks_text()?))
    }

    /// Lays CDs out by id for display. Does not touch `cds`.
    pub fn reindex_by_id(cds: &[Cd]) -> Vec<Option<&Cd>> {
        slots::index_by_key(cds)
    }

    fn reindex_tracks(&mut self) {
        self.tracks = slots::reindex(std::mem::take(&mut self.tracks));
    }
}

impl Keyed for Cd {
    fn key(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for Cd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{} (by: {})", self.id, self.title, self.artist)
    }
}
