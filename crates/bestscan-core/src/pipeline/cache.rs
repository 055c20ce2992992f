use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::model::MapMetadata;

/// Per-run map metadata cache keyed by beatmap id.
///
/// Only successful lookups are stored. Two tasks missing the same id at the
/// same time both fetch it; the later insert wins.
#[derive(Debug, Default)]
pub struct MapCache {
    maps: Mutex<HashMap<u64, MapMetadata>>,
}

impl MapCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, map_id: u64) -> Option<MapMetadata> {
        self.maps
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&map_id)
            .cloned()
    }

    pub fn insert(&self, map_id: u64, map: MapMetadata) {
        self.maps
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(map_id, map);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_get_insert() {
        let cache = MapCache::new();
        assert_eq!(cache.get(75), None);

        let map = MapMetadata {
            artist: "Kenji Ninuma".to_string(),
            title: "DISCO PRINCE".to_string(),
            difficulty: "Normal".to_string(),
        };
        cache.insert(75, map.clone());
        assert_eq!(cache.get(75), Some(map));
        assert_eq!(cache.get(76), None);
    }
}
