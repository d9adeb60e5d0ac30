// 🏛️ Gallery Store - Thread-safe collection of unique Art records
//
// One map from identity key to the full record. Writes replace by key,
// reads return owned snapshots.

use crate::art::{Art, ArtKey};
use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, trace, warn};

/// 365 days of seconds. No leap-year adjustment.
pub const APPROX_ONE_YEAR: Duration = Duration::seconds(365 * 24 * 60 * 60);

// ============================================================================
// GALLERY CONTRACT
// ============================================================================

/// A service that maintains a collection of Art
pub trait Gallery {
    /// Add a piece of art, replacing any existing piece with the same identity
    ///
    /// Returns the replaced piece, if any.
    fn add_art(&self, art: Art) -> Option<Art>;

    /// Remove the piece with the same identity, returning it if found
    fn delete_art(&self, art: &Art) -> Option<Art>;

    /// All art currently in the gallery
    fn all_art(&self) -> HashSet<Art>;

    /// Names of all artists with art currently in the gallery
    fn artists(&self) -> HashSet<String>;

    /// All art by exactly this artist (case-sensitive)
    fn art_by_artist(&self, artist: &str) -> HashSet<Art>;

    /// All art created within the past (approximate) year
    fn recent_art(&self) -> HashSet<Art>;

    /// All priced art within the inclusive bounds; `None` leaves a side open
    ///
    /// Art with no asking price is never returned.
    fn art_by_price(&self, from: Option<i64>, to: Option<i64>) -> HashSet<Art>;
}

// ============================================================================
// THREAD-SAFE GALLERY
// ============================================================================

/// In-memory gallery shared across threads
///
/// Cloning gives another handle to the same collection.
#[derive(Debug, Clone, Default)]
pub struct ArtGallery {
    art: Arc<RwLock<HashMap<ArtKey, Art>>>,
}

impl ArtGallery {
    /// Create new empty gallery
    pub fn new() -> Self {
        ArtGallery {
            art: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create gallery pre-loaded with the given pieces (later duplicates win)
    pub fn with_art(pieces: impl IntoIterator<Item = Art>) -> Self {
        let gallery = ArtGallery::new();
        for art in pieces {
            gallery.add_art(art);
        }
        gallery
    }

    /// Art created strictly after `now - APPROX_ONE_YEAR`
    pub fn recent_art_at(&self, now: DateTime<Utc>) -> HashSet<Art> {
        let year_ago = now - APPROX_ONE_YEAR;
        self.select(|a| a.created() > year_ago)
    }

    /// Look up the stored piece for an identity key
    pub fn get(&self, key: &ArtKey) -> Option<Art> {
        self.read().get(key).cloned()
    }

    pub fn contains(&self, art: &Art) -> bool {
        self.read().contains_key(&art.key())
    }

    /// Count pieces currently in the gallery
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Distinct artist names in alphabetic order
    pub fn artists_sorted(&self) -> Vec<String> {
        let mut names: Vec<String> = self.artists().into_iter().collect();
        names.sort();
        names
    }

    fn select<F>(&self, predicate: F) -> HashSet<Art>
    where
        F: Fn(&Art) -> bool,
    {
        let matched: HashSet<Art> = self
            .read()
            .values()
            .filter(|a| predicate(a))
            .cloned()
            .collect();
        trace!(count = matched.len(), "gallery query");
        matched
    }

    // Each write is a single map call, so a poisoned lock still guards a
    // consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<ArtKey, Art>> {
        self.art.read().unwrap_or_else(|poisoned| {
            warn!("recovering poisoned gallery lock");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ArtKey, Art>> {
        self.art.write().unwrap_or_else(|poisoned| {
            warn!("recovering poisoned gallery lock");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl Gallery for ArtGallery {
    fn add_art(&self, art: Art) -> Option<Art> {
        debug!(%art, "adding art");
        let replaced = self.write().insert(art.key(), art);
        if let Some(previous) = &replaced {
            debug!(%previous, "replaced existing art");
        }
        replaced
    }

    fn delete_art(&self, art: &Art) -> Option<Art> {
        let removed = self.write().remove(&art.key());
        debug!(%art, found = removed.is_some(), "deleting art");
        removed
    }

    fn all_art(&self) -> HashSet<Art> {
        self.select(|_| true)
    }

    fn artists(&self) -> HashSet<String> {
        self.read().values().map(|a| a.artist().to_string()).collect()
    }

    fn art_by_artist(&self, artist: &str) -> HashSet<Art> {
        self.select(|a| a.artist() == artist)
    }

    fn recent_art(&self) -> HashSet<Art> {
        self.recent_art_at(Utc::now())
    }

    fn art_by_price(&self, from: Option<i64>, to: Option<i64>) -> HashSet<Art> {
        self.select(|a| match a.price_pence() {
            Some(price) => from.is_none_or(|f| price >= f) && to.is_none_or(|t| price <= t),
            None => false,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
