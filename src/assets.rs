//! Sprite keys and the asset lookup boundary
//!
//! The simulation only ever names visuals with a `SpriteKey`. Turning a key
//! into a loaded texture is the host's business: it implements
//! `AssetLookup`, and `HandleCache` makes sure each file is requested once.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::sim::MobKind;

/// Every visual the core can ask the renderer to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKey {
    Player,
    Mob(MobKind),
    /// Remains of a killed mob
    DeadMob,
    Background,
    AmmoIcon,
}

impl SpriteKey {
    /// Asset file for this sprite, relative to the asset root
    pub fn file_name(self) -> &'static str {
        match self {
            SpriteKey::Player => "graphics/player.png",
            SpriteKey::Mob(MobKind::Heavy) => "graphics/bloater.png",
            SpriteKey::Mob(MobKind::Fast) => "graphics/chaser.png",
            SpriteKey::Mob(MobKind::Weak) => "graphics/crawler.png",
            SpriteKey::DeadMob => "graphics/blood.png",
            SpriteKey::Background => "graphics/background_sheet.png",
            SpriteKey::AmmoIcon => "graphics/ammo_icon.png",
        }
    }
}

/// Host-provided loader, e.g. a texture store
pub trait AssetLookup {
    type Handle: Clone;

    fn lookup(&mut self, name: &str) -> Self::Handle;
}

/// Memoizes handles per sprite key on top of an `AssetLookup`
pub struct HandleCache<L: AssetLookup> {
    lookup: L,
    handles: HashMap<SpriteKey, L::Handle>,
}

impl<L: AssetLookup> HandleCache<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            handles: HashMap::new(),
        }
    }

    /// Handle for `key`, loading it on first use
    pub fn get(&mut self, key: SpriteKey) -> L::Handle {
        if let Some(handle) = self.handles.get(&key) {
            return handle.clone();
        }
        let handle = self.lookup.lookup(key.file_name());
        self.handles.insert(key, handle.clone());
        handle
    }

    /// Number of distinct sprites loaded so far
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn into_inner(self) -> L {
        self.lookup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recording {
        requests: Vec<String>,
    }

    impl AssetLookup for Recording {
        type Handle = usize;

        fn lookup(&mut self, name: &str) -> usize {
            self.requests.push(name.to_string());
            self.requests.len() - 1
        }
    }

    #[test]
    fn test_each_file_looked_up_once() {
        let mut cache = HandleCache::new(Recording::default());
        let a = cache.get(SpriteKey::Mob(MobKind::Fast));
        let b = cache.get(SpriteKey::DeadMob);
        let c = cache.get(SpriteKey::Mob(MobKind::Fast));
        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(cache.len(), 2);
        let rec = cache.into_inner();
        assert_eq!(rec.requests, vec!["graphics/chaser.png", "graphics/blood.png"]);
    }

    #[test]
    fn test_mob_kinds_have_distinct_files() {
        let names: Vec<_> = MobKind::ALL
            .iter()
            .map(|&k| SpriteKey::Mob(k).file_name())
            .collect();
        assert_eq!(names.len(), 3);
        assert!(names[0] != names[1] && names[1] != names[2] && names[0] != names[2]);
    }
}
