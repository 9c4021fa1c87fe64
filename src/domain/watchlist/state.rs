//! Watchlist state container — local cache of the remote collection.

use super::WatchlistEntry;
use crate::shared::CoinId;

/// Local cache of the remotely persisted watchlist.
///
/// The app owns an instance of this type and mutates it only after the
/// corresponding remote call succeeds; a failed call leaves the collection
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct WatchlistState {
    entries: Vec<WatchlistEntry>,
}

impl WatchlistState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire collection from a fetch.
    pub fn replace(&mut self, entries: Vec<WatchlistEntry>) {
        self.entries = entries;
    }

    /// Append a newly created entry. An entry with the same id is replaced
    /// instead — at most one copy per id.
    pub fn insert(&mut self, entry: WatchlistEntry) {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Remove by server id, returning the removed entry if it was present.
    pub fn remove(&mut self, id: i64) -> Option<WatchlistEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Overwrite the matching entry with the authoritative remote copy.
    ///
    /// All fields are replaced, not just the ones a patch submitted, so
    /// server-side normalization is reflected locally. Returns false when no
    /// entry with that id exists.
    pub fn apply_update(&mut self, updated: WatchlistEntry) -> bool {
        match self.entries.iter_mut().find(|e| e.id == updated.id) {
            Some(existing) => {
                *existing = updated;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: i64) -> Option<&WatchlistEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// The entry tracking `coin`, if any.
    pub fn entry_for_coin(&self, coin: &CoinId) -> Option<&WatchlistEntry> {
        self.entries.iter().find(|e| &e.coin_id == coin)
    }

    pub fn contains_coin(&self, coin: &CoinId) -> bool {
        self.entry_for_coin(coin).is_some()
    }

    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn entry(id: i64, coin: &str) -> WatchlistEntry {
        WatchlistEntry {
            id,
            user_id: "user1".to_string(),
            coin_id: CoinId::from(coin),
            target_price: None,
            notes: String::new(),
        }
    }

    #[test]
    fn test_insert_then_remove_restores_prior_state() {
        let mut state = WatchlistState::new();
        state.replace(vec![entry(1, "bitcoin")]);
        let before = state.entries().to_vec();

        state.insert(entry(2, "ethereum"));
        assert_eq!(state.len(), 2);
        let removed = state.remove(2);
        assert_eq!(removed.unwrap().coin_id.as_str(), "ethereum");
        assert_eq!(state.entries(), before.as_slice());
    }

    #[test]
    fn test_insert_same_id_replaces() {
        let mut state = WatchlistState::new();
        state.insert(entry(1, "bitcoin"));
        state.insert(entry(1, "ethereum"));
        assert_eq!(state.len(), 1);
        assert_eq!(state.get(1).unwrap().coin_id.as_str(), "ethereum");
    }

    #[test]
    fn test_apply_update_overwrites_every_field() {
        let mut state = WatchlistState::new();
        state.insert(entry(5, "bitcoin"));

        let mut updated = entry(5, "bitcoin");
        updated.target_price = Some(Decimal::new(75_000, 0));
        updated.notes = "normalized by server".to_string();
        assert!(state.apply_update(updated.clone()));
        assert_eq!(state.get(5), Some(&updated));
    }

    #[test]
    fn test_apply_update_unknown_id_is_noop() {
        let mut state = WatchlistState::new();
        state.insert(entry(1, "bitcoin"));
        assert!(!state.apply_update(entry(99, "ethereum")));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id_leaves_state() {
        let mut state = WatchlistState::new();
        state.insert(entry(1, "bitcoin"));
        assert!(state.remove(42).is_none());
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_contains_coin() {
        let mut state = WatchlistState::new();
        state.insert(entry(1, "bitcoin"));
        assert!(state.contains_coin(&CoinId::from("bitcoin")));
        assert!(!state.contains_coin(&CoinId::from("dogecoin")));
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut state = WatchlistState::new();
        state.insert(entry(1, "bitcoin"));
        state.replace(vec![entry(8, "solana"), entry(9, "cardano")]);
        assert_eq!(state.len(), 2);
        assert!(state.get(1).is_none());
    }
}
