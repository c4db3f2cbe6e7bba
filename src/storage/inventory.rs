use crate::domain::{cd::Cd, error::DomainError, track::Track};

/// In-memory list of CDs for one session.
///
/// The list keeps insertion order; [`Inventory::slots`] gives the id-ordered
/// view used for display.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Inventory {
    cds: Vec<Cd>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cds(&self) -> &[Cd] {
        &self.cds
    }

    pub fn is_empty(&self) -> bool {
        self.cds.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cds.len()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.cds.iter().any(|cd| cd.id() == id)
    }

    pub fn find_by_id(&self, id: u32) -> Result<&Cd, DomainError> {
        self.cds
            .iter()
            .find(|cd| cd.id() == id)
            .ok_or(DomainError::NotFound(id))
    }

    pub fn find_by_id_mut(&mut self, id: u32) -> Result<&mut Cd, DomainError> {
        self.cds
            .iter_mut()
            .find(|cd| cd.id() == id)
            .ok_or(DomainError::NotFound(id))
    }

    /// Appends a new CD. Fails when the id is already taken.
    pub fn add_cd(&mut self, id: u32, title: &str, artist: &str) -> Result<&Cd, DomainError> {
        let cd = Cd::new(id, title, artist)?;
        self.push(cd)
    }

    /// Appends an already built CD, tracks included.
    pub fn push(&mut self, cd: Cd) -> Result<&Cd, DomainError> {
        if self.contains(cd.id()) {
            return Err(DomainError::DuplicateKey {
                kind: "CD id",
                key: cd.id(),
            });
        }
        self.cds.push(cd);
        Ok(&self.cds[self.cds.len() - 1])
    }

    pub fn add_track(
        &mut self,
        cd_id: u32,
        position: u32,
        title: &str,
        length: &str,
    ) -> Result<(), DomainError> {
        let track = Track::new(position, title, length)?;
        self.find_by_id_mut(cd_id)?.add_track(track)
    }

    pub fn remove_track(&mut self, cd_id: u32, slot: usize) -> Result<Option<Track>, DomainError> {
        self.find_by_id_mut(cd_id)?.remove_track(slot)
    }

    /// CDs laid out by id, holes where no CD has that id.
    pub fn slots(&self) -> Vec<Option<&Cd>> {
        Cd::reindex_by_id(&self.cds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_id_on_empty_inventory_fails() {
        let inventory = Inventory::new();
        assert_eq!(inventory.find_by_id(1), Err(DomainError::NotFound(1)));
    }

    #[test]
    fn add_cd_then_display_slots() -> anyhow::Result<()> {
        let mut inventory = Inventory::new();
        inventory.add_cd(5, "Bad", "Michael Jackson")?;

        let slots = inventory.slots();
        assert_eq!(slots.len(), 5);
        assert!(slots[..4].iter().all(Option::is_none));
        assert_eq!(slots[4].map(Cd::title), Some("Bad"));
        Ok(())
    }

    #[test]
    fn add_cd_keeps_insertion_order() -> anyhow::Result<()> {
        let mut inventory = Inventory::new();
        inventory.add_cd(3, "Off the Wall", "Michael Jackson")?;
        inventory.add_cd(1, "Thriller", "Michael Jackson")?;

        let ids = inventory.cds().iter().map(Cd::id).collect::<Vec<_>>();
        assert_eq!(ids, vec![3, 1]);
        Ok(())
    }

    #[test]
    fn add_cd_rejects_duplicate_id() -> anyhow::Result<()> {
        let mut inventory = Inventory::new();
        inventory.add_cd(1, "Thriller", "Michael Jackson")?;

        assert_eq!(
            inventory.add_cd(1, "Bad", "Michael Jackson").unwrap_err(),
            DomainError::DuplicateKey {
                kind: "CD id",
                key: 1
            }
        );
        assert_eq!(inventory.len(), 1);
        Ok(())
    }

    #[test]
    fn add_and_remove_track_through_inventory() -> anyhow::Result<()> {
        let mut inventory = Inventory::new();
        inventory.add_cd(1, "Thriller", "Michael Jackson")?;
        inventory.add_track(1, 1, "Billie Jean", "4:54")?;

        assert_eq!(inventory.find_by_id(1)?.tracks_text()?, "1. Billie Jean (4:54)\n");

        let removed = inventory.remove_track(1, 1)?;
        assert_eq!(removed.map(|t| t.position()), Some(1));
        assert_eq!(
            inventory.find_by_id(1)?.tracks_text(),
            Err(DomainError::EmptyCollection(1))
        );
        Ok(())
    }

    #[test]
    fn add_track_to_missing_cd_fails() {
        let mut inventory = Inventory::new();
        assert_eq!(
            inventory.add_track(9, 1, "Billie Jean", "4:54"),
            Err(DomainError::NotFound(9))
        );
    }
}
