//! Favorites domain — locally persisted set of favorite coins.

use crate::shared::CoinId;
use crate::storage::FavoritesBackend;

use std::collections::BTreeSet;

/// Deduplicated set of favorite coin identifiers. Membership is the only
/// query; entries carry no metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet(BTreeSet<CoinId>);

impl FavoriteSet {
    pub fn contains(&self, id: &CoinId) -> bool {
        self.0.contains(id)
    }

    /// Symmetric-difference toggle: absent→present, present→absent.
    /// Returns the new membership state.
    pub fn toggle(&mut self, id: CoinId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = &CoinId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<CoinId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = CoinId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Favorites store: the in-memory set plus best-effort durable persistence.
///
/// Every toggle writes the serialized set through the backend. Persistence
/// failures are logged and swallowed — they never block the in-memory
/// mutation or surface to the user.
pub struct FavoritesStore {
    set: FavoriteSet,
    backend: Box<dyn FavoritesBackend>,
}

impl FavoritesStore {
    /// Restore from the backend, falling back to an empty set when the
    /// payload is absent or malformed.
    pub fn load(backend: Box<dyn FavoritesBackend>) -> Self {
        let set = match backend.read() {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<CoinId>>(&payload) {
                Ok(ids) => ids.into_iter().collect(),
                Err(err) => {
                    tracing::warn!(%err, "malformed favorites payload, starting empty");
                    FavoriteSet::default()
                }
            },
            Ok(None) => FavoriteSet::default(),
            Err(err) => {
                tracing::warn!(%err, "failed to read favorites, starting empty");
                FavoriteSet::default()
            }
        };
        Self { set, backend }
    }

    pub fn is_favorite(&self, id: &CoinId) -> bool {
        self.set.contains(id)
    }

    /// Toggle membership and persist the new set. Returns the new membership
    /// state.
    pub fn toggle(&mut self, id: CoinId) -> bool {
        let now_favorite = self.set.toggle(id);
        self.persist();
        now_favorite
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.set
    }

    fn persist(&self) {
        let ids: Vec<&CoinId> = self.set.ids().collect();
        match serde_json::to_string(&ids) {
            Ok(payload) => {
                if let Err(err) = self.backend.write(&payload) {
                    tracing::warn!(%err, "failed to persist favorites");
                }
            }
            Err(err) => tracing::warn!(%err, "failed to serialize favorites"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    #[test]
    fn test_toggle_twice_is_an_involution() {
        let mut store = FavoritesStore::load(Box::new(MemoryBackend::new()));
        let id = CoinId::from("bitcoin");

        assert!(!store.is_favorite(&id));
        assert!(store.toggle(id.clone()));
        assert!(store.is_favorite(&id));
        assert!(!store.toggle(id.clone()));
        assert!(!store.is_favorite(&id));
    }

    #[test]
    fn test_membership_survives_restart() {
        let backend = MemoryBackend::new();
        let mut store = FavoritesStore::load(Box::new(backend.clone()));
        store.toggle(CoinId::from("bitcoin"));
        store.toggle(CoinId::from("ethereum"));
        store.toggle(CoinId::from("bitcoin"));
        drop(store);

        let restored = FavoritesStore::load(Box::new(backend));
        assert!(restored.is_favorite(&CoinId::from("ethereum")));
        assert!(!restored.is_favorite(&CoinId::from("bitcoin")));
        assert_eq!(restored.favorites().len(), 1);
    }

    #[test]
    fn test_corrupt_payload_falls_back_to_empty() {
        let backend = MemoryBackend::new();
        backend.write("{not json!").unwrap();

        let store = FavoritesStore::load(Box::new(backend.clone()));
        assert!(store.favorites().is_empty());

        // wrong shape, valid JSON
        backend.write("{\"favorites\": 3}").unwrap();
        let store = FavoritesStore::load(Box::new(backend));
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn test_persisted_payload_is_a_plain_id_array() {
        let backend = MemoryBackend::new();
        let mut store = FavoritesStore::load(Box::new(backend.clone()));
        store.toggle(CoinId::from("solana"));

        let payload = crate::storage::FavoritesBackend::read(&backend)
            .unwrap()
            .unwrap();
        let ids: Vec<String> = serde_json::from_str(&payload).unwrap();
        assert_eq!(ids, ["solana"]);
    }
}
