//! Artist bank
//!
//! Profile CRUD over the blob store. The whole bank is one JSON array
//! under `dsvb:artistbank`; the selected profile is a full copy under
//! `dsvb:active-artist`. Every operation reads the array, mutates, and
//! writes it back, matching the single-blob contract the studio's other
//! tools read.

use sf_core::{ArtistProfile, SfError, SfResult, artist_tag};

use crate::store::BlobStore;

/// Store key for the profile array
pub const ARTIST_BANK_KEY: &str = "dsvb:artistbank";
/// Store key for the selected profile
pub const ACTIVE_ARTIST_KEY: &str = "dsvb:active-artist";

/// Artist profile collection over a [`BlobStore`]
#[derive(Debug, Clone)]
pub struct ArtistBank {
    store: BlobStore,
}

impl ArtistBank {
    /// Bank over the given store
    pub fn new(store: BlobStore) -> Self {
        Self { store }
    }

    /// Bank at the per-user default location
    pub fn open_default() -> SfResult<Self> {
        Ok(Self::new(BlobStore::open_default()?))
    }

    /// The underlying store
    pub fn store(&self) -> &BlobStore {
        &self.store
    }

    /// Load every profile. A corrupt or missing bank reads as empty.
    pub fn all(&self) -> Vec<ArtistProfile> {
        match self.store.read_json(ARTIST_BANK_KEY) {
            Ok(Some(artists)) => artists,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("artist bank unreadable, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    fn save_all(&self, artists: &[ArtistProfile]) -> SfResult<()> {
        self.store.write_json(ARTIST_BANK_KEY, &artists)
    }

    /// Number of stored profiles
    pub fn len(&self) -> usize {
        self.all().len()
    }

    /// True when no profiles are stored
    pub fn is_empty(&self) -> bool {
        self.all().is_empty()
    }

    /// Find a profile by exact id, exact tag, or sluggable name.
    ///
    /// `get("A$AP Rocky")` and `get("asap_rocky")` find the same profile.
    pub fn get(&self, id_or_tag: &str) -> Option<ArtistProfile> {
        let slug = artist_tag(id_or_tag);
        self.all()
            .into_iter()
            .find(|a| a.id == id_or_tag || a.tag == id_or_tag || (!slug.is_empty() && a.tag == slug))
    }

    /// Insert or replace a profile, matching on id.
    ///
    /// The modification stamp refreshes on every save. When the replaced
    /// profile is the active one, the active copy is refreshed so the
    /// two keys cannot disagree.
    pub fn upsert(&self, mut profile: ArtistProfile) -> SfResult<()> {
        profile.validate()?;
        profile.touch();
        let mut artists = self.all();

        match artists.iter_mut().find(|a| a.id == profile.id) {
            Some(existing) => *existing = profile.clone(),
            None => artists.push(profile.clone()),
        }
        self.save_all(&artists)?;

        if self.active().is_some_and(|a| a.id == profile.id) {
            self.store.write_json(ACTIVE_ARTIST_KEY, &profile)?;
        }
        log::info!("saved artist {} ({})", profile.name, profile.tag);
        Ok(())
    }

    /// Remove a profile; clears the active selection if it pointed at it.
    /// Returns whether anything was removed.
    pub fn remove(&self, id_or_tag: &str) -> SfResult<bool> {
        let Some(target) = self.get(id_or_tag) else {
            return Ok(false);
        };

        let mut artists = self.all();
        artists.retain(|a| a.id != target.id);
        self.save_all(&artists)?;

        if self.active().is_some_and(|a| a.id == target.id) {
            self.clear_active()?;
        }
        log::info!("removed artist {}", target.name);
        Ok(true)
    }

    /// Select a profile as active
    pub fn set_active(&self, id_or_tag: &str) -> SfResult<ArtistProfile> {
        let profile = self
            .get(id_or_tag)
            .ok_or_else(|| SfError::InvalidParam(format!("unknown artist: {id_or_tag}")))?;
        self.store.write_json(ACTIVE_ARTIST_KEY, &profile)?;
        Ok(profile)
    }

    /// The selected profile, if any. Corrupt data reads as no selection.
    pub fn active(&self) -> Option<ArtistProfile> {
        match self.store.read_json(ACTIVE_ARTIST_KEY) {
            Ok(selection) => selection,
            Err(e) => {
                log::warn!("active artist unreadable, treating as unset: {e}");
                None
            }
        }
    }

    /// Clear the active selection
    pub fn clear_active(&self) -> SfResult<()> {
        self.store.remove(ACTIVE_ARTIST_KEY)
    }

    /// Drop profiles whose tag duplicates an earlier one (first wins).
    /// Returns how many were dropped.
    pub fn dedupe(&self) -> SfResult<usize> {
        let artists = self.all();
        let mut seen: Vec<&str> = Vec::new();
        let mut kept: Vec<ArtistProfile> = Vec::new();

        for artist in &artists {
            if seen.contains(&artist.tag.as_str()) {
                log::warn!("dropping duplicate artist tag {}", artist.tag);
            } else {
                seen.push(artist.tag.as_str());
                kept.push(artist.clone());
            }
        }

        let dropped = artists.len() - kept.len();
        if dropped > 0 {
            self.save_all(&kept)?;
        }
        Ok(dropped)
    }
}
