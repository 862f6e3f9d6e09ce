//! Artwork registry state and transition logic.
//!
//! The registry is a map from content fingerprints to [`Artwork`] records,
//! plus an auxiliary map tracking the cumulative royalty percentage
//! allocated per artwork. The auxiliary total is maintained incrementally
//! and always equals the sum of the artwork's stored share percentages,
//! with one deliberate exception documented on
//! [`ArtworkRegistry::set_royalty_share`].
//!
//! Error checks run before any mutation, so a failed operation never
//! leaves partial writes behind.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use lienzo_types::artwork::{
    ArtworkDetails, ArtworkStatus, CategorySet, Collaborator, ProvenanceVersion, RoyaltyShare,
    VersionDetails,
};
use lienzo_types::{Fingerprint, Principal, MAX_CATEGORY_TAGS, MAX_ROYALTY_TOTAL, MAX_VERSION_NUMBER};

use crate::{RegistryError, Result};

/// A registered artwork record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Artwork {
    /// Current controlling principal.
    pub owner: Principal,
    pub title: String,
    pub description: String,
    pub cultural_significance: String,
    pub origin: String,
    pub medium: String,
    /// Provenance history, in insertion order.
    pub versions: Vec<ProvenanceVersion>,
    /// Category assignment; replaced wholesale on update.
    pub categories: CategorySet,
    /// Collaborators keyed by identity.
    pub collaborators: HashMap<Principal, Collaborator>,
    /// Royalty shares keyed by participant identity.
    pub royalty_shares: HashMap<Principal, RoyaltyShare>,
    /// Authentication status; never mutated by this core.
    pub status: ArtworkStatus,
}

/// In-memory artwork registry.
///
/// Mutating operations return [`crate::Result`] and check ownership where
/// the contract requires it. Pure lookups return `Option` and never
/// produce an error code. Fingerprint arguments arrive as byte slices; a
/// slice that is not exactly 32 bytes can never name a stored artwork, so
/// lookups treat it as absent, and only the operations that *record* a
/// fingerprint reject it with [`RegistryError::InvalidFingerprint`].
pub struct ArtworkRegistry {
    /// Artwork records indexed by fingerprint.
    artworks: HashMap<Fingerprint, Artwork>,
    /// Cumulative allocated royalty percentage per fingerprint.
    royalty_totals: HashMap<Fingerprint, u8>,
}

impl ArtworkRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            artworks: HashMap::new(),
            royalty_totals: HashMap::new(),
        }
    }

    /// Register a new artwork under `fingerprint`, owned by `sender`.
    ///
    /// Check order is part of the contract: fingerprint length, then
    /// duplicate fingerprint, then blank metadata.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidFingerprint`] if `fingerprint` is not 32 bytes
    /// - [`RegistryError::DuplicateEntry`] if the fingerprint is already registered
    /// - [`RegistryError::InvalidMetadata`] if `title` or `description` is empty
    #[allow(clippy::too_many_arguments)]
    pub fn register_artwork(
        &mut self,
        sender: &str,
        fingerprint: &[u8],
        title: &str,
        description: &str,
        cultural_significance: &str,
        origin: &str,
        medium: &str,
    ) -> Result<()> {
        let key: Fingerprint = fingerprint
            .try_into()
            .map_err(|_| RegistryError::InvalidFingerprint {
                len: fingerprint.len(),
            })?;

        if self.artworks.contains_key(&key) {
            return Err(RegistryError::DuplicateEntry);
        }
        if title.is_empty() || description.is_empty() {
            return Err(RegistryError::InvalidMetadata);
        }

        self.artworks.insert(
            key,
            Artwork {
                owner: sender.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                cultural_significance: cultural_significance.to_string(),
                origin: origin.to_string(),
                medium: medium.to_string(),
                versions: Vec::new(),
                categories: CategorySet::default(),
                collaborators: HashMap::new(),
                royalty_shares: HashMap::new(),
                status: ArtworkStatus::default(),
            },
        );
        self.royalty_totals.insert(key, 0);

        tracing::info!(
            fingerprint = %hex::encode(key),
            owner = sender,
            title,
            "artwork registered"
        );
        Ok(())
    }

    /// Transfer control of an artwork to `new_owner`.
    ///
    /// `new_owner` is an opaque identity; no format validation applies.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if the artwork does not exist
    /// - [`RegistryError::Unauthorized`] if `sender` is not the owner
    pub fn transfer_ownership(
        &mut self,
        sender: &str,
        fingerprint: &[u8],
        new_owner: &str,
    ) -> Result<()> {
        let artwork = self.entry_mut(fingerprint)?;
        if artwork.owner != sender {
            return Err(RegistryError::Unauthorized);
        }

        artwork.owner = new_owner.to_string();

        tracing::info!(
            fingerprint = %hex::encode(fingerprint),
            from = sender,
            to = new_owner,
            "ownership transferred"
        );
        Ok(())
    }

    /// Append a provenance version to an artwork.
    ///
    /// Check order is part of the contract: existence, ownership,
    /// duplicate version number, version bound, then new-hash length.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if the artwork does not exist
    /// - [`RegistryError::Unauthorized`] if `sender` is not the owner
    /// - [`RegistryError::DuplicateEntry`] if `version` is already recorded
    /// - [`RegistryError::VersionTooLarge`] if `version` exceeds 50
    /// - [`RegistryError::InvalidFingerprint`] if `new_hash` is not 32 bytes
    pub fn add_version(
        &mut self,
        sender: &str,
        fingerprint: &[u8],
        new_hash: &[u8],
        version: u32,
        notes: &str,
    ) -> Result<()> {
        let artwork = self.entry_mut(fingerprint)?;
        if artwork.owner != sender {
            return Err(RegistryError::Unauthorized);
        }
        if artwork.versions.iter().any(|v| v.version == version) {
            return Err(RegistryError::DuplicateEntry);
        }
        if version > MAX_VERSION_NUMBER {
            return Err(RegistryError::VersionTooLarge { version });
        }
        let hash: Fingerprint = new_hash
            .try_into()
            .map_err(|_| RegistryError::InvalidFingerprint {
                len: new_hash.len(),
            })?;

        artwork.versions.push(ProvenanceVersion {
            hash,
            version,
            notes: notes.to_string(),
        });

        tracing::debug!(
            fingerprint = %hex::encode(fingerprint),
            version,
            "provenance version added"
        );
        Ok(())
    }

    /// Set an artwork's category assignment.
    ///
    /// The whole [`CategorySet`] is replaced; tags from earlier calls are
    /// discarded, never merged. Duplicate tags within one call are kept.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if the artwork does not exist
    /// - [`RegistryError::Unauthorized`] if `sender` is not the owner
    /// - [`RegistryError::TooManyTags`] if more than 10 tags are supplied
    pub fn add_category(
        &mut self,
        sender: &str,
        fingerprint: &[u8],
        primary: &str,
        tags: Vec<String>,
    ) -> Result<()> {
        let artwork = self.entry_mut(fingerprint)?;
        if artwork.owner != sender {
            return Err(RegistryError::Unauthorized);
        }
        if tags.len() > MAX_CATEGORY_TAGS {
            return Err(RegistryError::TooManyTags { count: tags.len() });
        }

        artwork.categories = CategorySet {
            primary: primary.to_string(),
            tags,
        };

        tracing::debug!(
            fingerprint = %hex::encode(fingerprint),
            primary,
            "categories replaced"
        );
        Ok(())
    }

    /// Grant a collaborator a role and permission list on an artwork.
    ///
    /// Permissions are stored verbatim, without validation or dedup, and
    /// are fixed at add time; there is no update or removal operation.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if the artwork does not exist
    /// - [`RegistryError::Unauthorized`] if `sender` is not the owner
    /// - [`RegistryError::DuplicateEntry`] if the identity is already a collaborator
    pub fn add_collaborator(
        &mut self,
        sender: &str,
        fingerprint: &[u8],
        collaborator: &str,
        role: &str,
        permissions: Vec<String>,
    ) -> Result<()> {
        let artwork = self.entry_mut(fingerprint)?;
        if artwork.owner != sender {
            return Err(RegistryError::Unauthorized);
        }
        if artwork.collaborators.contains_key(collaborator) {
            return Err(RegistryError::DuplicateEntry);
        }

        artwork.collaborators.insert(
            collaborator.to_string(),
            Collaborator {
                role: role.to_string(),
                permissions,
            },
        );

        tracing::debug!(
            fingerprint = %hex::encode(fingerprint),
            collaborator,
            role,
            "collaborator added"
        );
        Ok(())
    }

    /// Check whether `collaborator` holds `permission` on an artwork.
    ///
    /// An identity with no collaborator entry yields `Ok(false)`, not an
    /// error.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::PermissionLookupNotFound`] if the artwork does
    ///   not exist (code 8, kept distinct from the mutation-path code 5)
    pub fn has_permission(
        &self,
        fingerprint: &[u8],
        collaborator: &str,
        permission: &str,
    ) -> Result<bool> {
        let artwork = self
            .lookup(fingerprint)
            .ok_or(RegistryError::PermissionLookupNotFound)?;

        Ok(artwork
            .collaborators
            .get(collaborator)
            .is_some_and(|c| c.permissions.iter().any(|p| p == permission)))
    }

    /// Allocate a royalty share to `participant`.
    ///
    /// The per-artwork running total is bounded at 100%; the bound is
    /// checked before any state changes, so a rejected allocation leaves
    /// both the shares and the total untouched.
    ///
    /// Re-assigning an existing participant overwrites the stored share,
    /// but the running total still counts the replaced percentage, so the
    /// artwork's allocation headroom is consumed twice. This matches the
    /// deployed contract and is kept until product signs off on a change.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if the artwork does not exist
    /// - [`RegistryError::Unauthorized`] if `sender` is not the owner
    /// - [`RegistryError::InvalidPercentage`] if `percentage` is 0 or over 100
    /// - [`RegistryError::RoyaltyTotalExceeded`] if the running total would pass 100
    pub fn set_royalty_share(
        &mut self,
        sender: &str,
        fingerprint: &[u8],
        participant: &str,
        percentage: u8,
    ) -> Result<()> {
        let key: Fingerprint = fingerprint
            .try_into()
            .map_err(|_| RegistryError::NotFound)?;
        let artwork = self.artworks.get_mut(&key).ok_or(RegistryError::NotFound)?;
        if artwork.owner != sender {
            return Err(RegistryError::Unauthorized);
        }
        if percentage == 0 || percentage > MAX_ROYALTY_TOTAL {
            return Err(RegistryError::InvalidPercentage { percentage });
        }

        let running = self.royalty_totals.get(&key).copied().unwrap_or(0);
        let attempted = u16::from(running) + u16::from(percentage);
        if attempted > u16::from(MAX_ROYALTY_TOTAL) {
            return Err(RegistryError::RoyaltyTotalExceeded { attempted });
        }

        artwork.royalty_shares.insert(
            participant.to_string(),
            RoyaltyShare {
                percentage,
                total_received: 0,
            },
        );
        self.royalty_totals.insert(key, attempted as u8);

        tracing::debug!(
            fingerprint = %hex::encode(key),
            participant,
            percentage,
            total = attempted,
            "royalty share set"
        );
        Ok(())
    }

    /// Check that `account` controls the artwork.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if the artwork does not exist
    /// - [`RegistryError::Unauthorized`] if `account` is not the owner
    pub fn verify_ownership(&self, fingerprint: &[u8], account: &str) -> Result<()> {
        let artwork = self.lookup(fingerprint).ok_or(RegistryError::NotFound)?;
        if artwork.owner != account {
            return Err(RegistryError::Unauthorized);
        }
        Ok(())
    }

    /// The full stored record for an artwork, or `None` if absent.
    pub fn artwork(&self, fingerprint: &[u8]) -> Option<&Artwork> {
        self.lookup(fingerprint)
    }

    /// Descriptive metadata of an artwork, or `None` if absent.
    pub fn artwork_details(&self, fingerprint: &[u8]) -> Option<ArtworkDetails> {
        let artwork = self.lookup(fingerprint)?;
        Some(ArtworkDetails {
            owner: artwork.owner.clone(),
            title: artwork.title.clone(),
            description: artwork.description.clone(),
            cultural_significance: artwork.cultural_significance.clone(),
            origin: artwork.origin.clone(),
            medium: artwork.medium.clone(),
        })
    }

    /// A participant's royalty share, or `None` if the artwork or the
    /// share does not exist.
    pub fn royalty_share(&self, fingerprint: &[u8], participant: &str) -> Option<RoyaltyShare> {
        self.lookup(fingerprint)?.royalty_shares.get(participant).cloned()
    }

    /// The cumulative allocated royalty percentage for an artwork, or
    /// `None` if absent.
    pub fn royalty_total(&self, fingerprint: &[u8]) -> Option<u8> {
        let key: Fingerprint = fingerprint.try_into().ok()?;
        self.royalty_totals.get(&key).copied()
    }

    /// One provenance version of an artwork, or `None` if the artwork or
    /// that version number does not exist.
    pub fn version_details(&self, fingerprint: &[u8], version: u32) -> Option<VersionDetails> {
        let artwork = self.lookup(fingerprint)?;
        let entry = artwork.versions.iter().find(|v| v.version == version)?;
        Some(VersionDetails {
            updated_hash: entry.hash,
            update_notes: entry.notes.clone(),
        })
    }

    /// An artwork's category assignment, or `None` if absent.
    pub fn categories(&self, fingerprint: &[u8]) -> Option<CategorySet> {
        Some(self.lookup(fingerprint)?.categories.clone())
    }

    /// Whether an artwork is registered under `fingerprint`.
    pub fn contains(&self, fingerprint: &[u8]) -> bool {
        self.lookup(fingerprint).is_some()
    }

    /// Number of registered artworks.
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    /// Whether the registry holds no artworks.
    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    fn lookup(&self, fingerprint: &[u8]) -> Option<&Artwork> {
        let key: Fingerprint = fingerprint.try_into().ok()?;
        self.artworks.get(&key)
    }

    // A wrong-length fingerprint can never be a stored key, so it maps to
    // NotFound here rather than InvalidFingerprint.
    fn entry_mut(&mut self, fingerprint: &[u8]) -> Result<&mut Artwork> {
        let key: Fingerprint = fingerprint
            .try_into()
            .map_err(|_| RegistryError::NotFound)?;
        self.artworks.get_mut(&key).ok_or(RegistryError::NotFound)
    }
}

impl Default for ArtworkRegistry {
    fn default() -> Self {
        Self::new()
    }
}
