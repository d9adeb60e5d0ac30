// 🖼️ Art Entity - Immutable value describing one artwork
//
// "Name + type + artist is IDENTITY, price and date are PAYLOAD"
//
// Two records with the same identity are the same logical artwork, so
// storing one replaces the other's price and date in the gallery.

use crate::error::{GalleryError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

// ============================================================================
// ART TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArtType {
    /// Oil, acrylic, watercolour on canvas or board
    Painting,

    /// Carved, cast or assembled three-dimensional work
    Sculpture,

    /// Woven textile work
    Tapestry,

    /// Pencil, ink, charcoal
    Drawing,

    Photograph,
}

impl ArtType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtType::Painting => "PAINTING",
            ArtType::Sculpture => "SCULPTURE",
            ArtType::Tapestry => "TAPESTRY",
            ArtType::Drawing => "DRAWING",
            ArtType::Photograph => "PHOTOGRAPH",
        }
    }
}

impl fmt::Display for ArtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// IDENTITY KEY
// ============================================================================

/// The (name, type, artist) triple that identifies an artwork
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtKey {
    pub name: String,
    pub art_type: ArtType,
    pub artist: String,
}

// ============================================================================
// ART ENTITY
// ============================================================================

/// A single piece of artwork
///
/// Identity: name, art_type, artist (used for equality and hashing)
/// Payload: price_pence, created (ignored by equality)
///
/// Fields are private so a constructed record can never change. Build one
/// with [`Art::new`] or [`Art::builder`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawArt")]
pub struct Art {
    name: String,

    #[serde(rename = "type")]
    art_type: ArtType,

    /// Asking price in pence, None if not for sale
    price_pence: Option<i64>,

    artist: String,

    created: DateTime<Utc>,
}

impl Art {
    /// Create a validated art record
    ///
    /// Fails with `InvalidArgument` if the price is negative.
    pub fn new(
        name: impl Into<String>,
        art_type: ArtType,
        price_pence: Option<i64>,
        artist: impl Into<String>,
        created: DateTime<Utc>,
    ) -> Result<Self> {
        Self::validated(
            Some(name.into()),
            Some(art_type),
            price_pence,
            Some(artist.into()),
            Some(created),
        )
    }

    /// Start building a record field by field; every field begins absent
    pub fn builder() -> ArtBuilder {
        ArtBuilder::default()
    }

    fn validated(
        name: Option<String>,
        art_type: Option<ArtType>,
        price_pence: Option<i64>,
        artist: Option<String>,
        created: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        let name = name.ok_or(GalleryError::InvalidArgument("Name cannot be null"))?;
        let art_type = art_type.ok_or(GalleryError::InvalidArgument("Type cannot be null"))?;
        let artist = artist.ok_or(GalleryError::InvalidArgument("Artist cannot be null"))?;
        let created = created.ok_or(GalleryError::InvalidArgument("Created cannot be null"))?;
        if price_pence.is_some_and(|p| p < 0) {
            return Err(GalleryError::InvalidArgument("Price cannot be negative"));
        }

        Ok(Art {
            name,
            art_type,
            price_pence,
            artist,
            created,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn art_type(&self) -> ArtType {
        self.art_type
    }

    pub fn price_pence(&self) -> Option<i64> {
        self.price_pence
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Creation time, returned by value so callers get their own copy
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Check if this piece has an asking price
    pub fn is_for_sale(&self) -> bool {
        self.price_pence.is_some()
    }

    /// Identity key used by the gallery store
    pub fn key(&self) -> ArtKey {
        ArtKey {
            name: self.name.clone(),
            art_type: self.art_type,
            artist: self.artist.clone(),
        }
    }
}

impl PartialEq for Art {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.art_type == other.art_type && self.artist == other.artist
    }
}

impl Eq for Art {}

impl Hash for Art {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.art_type.hash(state);
        self.artist.hash(state);
    }
}

impl fmt::Display for Art {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Art{{name='{}', type={}, price_pence={:?}, artist='{}', created={}}}",
            self.name,
            self.art_type,
            self.price_pence,
            self.artist,
            self.created.to_rfc3339()
        )
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Collects Art fields where any of them may still be missing
#[derive(Debug, Clone, Default)]
pub struct ArtBuilder {
    name: Option<String>,
    art_type: Option<ArtType>,
    price_pence: Option<i64>,
    artist: Option<String>,
    created: Option<DateTime<Utc>>,
}

impl ArtBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn art_type(mut self, art_type: ArtType) -> Self {
        self.art_type = Some(art_type);
        self
    }

    pub fn price_pence(mut self, price_pence: i64) -> Self {
        self.price_pence = Some(price_pence);
        self
    }

    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    pub fn build(self) -> Result<Art> {
        Art::validated(
            self.name,
            self.art_type,
            self.price_pence,
            self.artist,
            self.created,
        )
    }
}

/// Wire shape of an Art record before validation
#[derive(Deserialize)]
struct RawArt {
    name: Option<String>,
    #[serde(rename = "type")]
    art_type: Option<ArtType>,
    price_pence: Option<i64>,
    artist: Option<String>,
    created: Option<DateTime<Utc>>,
}

impl TryFrom<RawArt> for Art {
    type Error = GalleryError;

    fn try_from(raw: RawArt) -> Result<Self> {
        Art::validated(raw.name, raw.art_type, raw.price_pence, raw.artist, raw.created)
    }
}

// ============================================================================
// TESTS
// ============================================================================
