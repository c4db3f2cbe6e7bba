use std::fmt;

use super::{
    error::{DomainError, check_key, check_text},
    slots::Keyed,
};

/// A single track on a CD.
///
/// `position` is 1-based and doubles as the track's slot on its CD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    position: u32,
    title: String,
    length: String,
}

impl Track {
    pub fn new(
        position: u32,
        title: impl Into<String>,
        length: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let mut track = Self {
            position: 1,
            title: String::new(),
            length: String::new(),
        };
        track.set_position(position)?;
        track.set_title(title)?;
        track.set_length(length)?;
        Ok(track)
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn length(&self) -> &str {
        &self.length
    }

    pub fn set_position(&mut self, position: u32) -> Result<(), DomainError> {
        self.position = check_key("track position", position)?;
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), DomainError> {
        let title = title.into();
        if title.is_empty() {
            return Err(DomainError::validation("track title", "must not be empty"));
        }
        check_text("track title", &title)?;
        self.title = title;
        Ok(())
    }

    pub fn set_length(&mut self, length: impl Into<String>) -> Result<(), DomainError> {
        let length = length.into();
        check_text("track length", &length)?;
        self.length = length;
        Ok(())
    }

    /// `position,title,length` terminated by a newline.
    pub fn to_record(&self) -> String {
        format!("{},{},{}\n", self.position, self.title, self.length)
    }
}

impl Keyed for Track {
    fn key(&self) -> u32 {
        self.position
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} ({})", self.position, self.title, self.length)
    }
}
