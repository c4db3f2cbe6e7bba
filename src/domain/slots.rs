//! Gap-filling indexing shared by the CD list and the track list.
//!
//! Every entity carries a 1-based key. Indexing produces a dense vector where
//! slot `key - 1` holds the entity and every other slot is `None` (a hole).

/// An entity that owns its storage slot through a 1-based key.
pub trait Keyed {
    fn key(&self) -> u32;
}

impl<T: Keyed + ?Sized> Keyed for &T {
    fn key(&self) -> u32 {
        (**self).key()
    }
}

/// Lays `items` out by key.
///
/// The result is sized to the largest key, or to the number of items when
/// that is larger. Keys must be unique; with duplicate keys the last item
/// wins the slot. An item keyed 0 has no slot and is left out.
pub fn index_by_key<T: Keyed>(items: impl IntoIterator<Item = T>) -> Vec<Option<T>> {
    let items: Vec<T> = items.into_iter().filter(|item| item.key() >= 1).collect();
    let max_key = items.iter().map(|item| item.key() as usize).max().unwrap_or(0);
    let len = max_key.max(items.len());

    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(len).collect();
    for item in items {
        if let Some(slot) = (item.key() as usize).checked_sub(1) {
            slots[slot] = Some(item);
        }
    }
    slots
}

/// Re-applies indexing to an already slotted vector, dropping its holes first.
pub fn reindex<T: Keyed>(slots: Vec<Option<T>>) -> Vec<Option<T>> {
    index_by_key(slots.into_iter().flatten())
}
