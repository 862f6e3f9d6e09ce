//! Artwork record structures.

use serde::{Deserialize, Serialize};

use crate::Fingerprint;

/// One entry in an artwork's provenance history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenanceVersion {
    /// Fingerprint of the updated content.
    pub hash: Fingerprint,
    /// Version number, unique within one artwork.
    pub version: u32,
    /// Free-text notes describing the update.
    pub notes: String,
}

/// Category assignment for an artwork.
///
/// Tags are a plain sequence: duplicates are kept, order is preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySet {
    /// Primary category name.
    pub primary: String,
    /// Max 10 tags.
    pub tags: Vec<String>,
}

/// A non-owner identity granted a role and an explicit permission list.
///
/// Role and permissions are fixed at add time; there is no update
/// operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    /// Role name, e.g. `"authenticator"`.
    pub role: String,
    /// Permission strings, stored verbatim.
    pub permissions: Vec<String>,
}

/// Royalty allocation for one participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoyaltyShare {
    /// Share of revenue in percent (1–100).
    pub percentage: u8,
    /// Cumulative amount paid out. Always 0 in this core; payouts are
    /// settled upstream.
    pub total_received: u64,
}

/// Authentication state of an artwork.
///
/// Only [`AuthenticationState::PendingAuthentication`] is ever assigned
/// here; state transitions belong to the authentication flow upstream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthenticationState {
    PendingAuthentication,
    Authenticated,
    Rejected,
}

/// Status record for an artwork.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkStatus {
    /// Current authentication state.
    pub state: AuthenticationState,
    /// Whether the artwork is publicly visible.
    pub visibility: bool,
}

impl Default for ArtworkStatus {
    fn default() -> Self {
        Self {
            state: AuthenticationState::PendingAuthentication,
            visibility: false,
        }
    }
}

/// Read projection of an artwork's descriptive metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkDetails {
    /// Current controlling principal.
    pub owner: crate::Principal,
    pub title: String,
    pub description: String,
    pub cultural_significance: String,
    pub origin: String,
    pub medium: String,
}

/// Read projection of one provenance version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionDetails {
    /// Fingerprint recorded for the version.
    pub updated_hash: Fingerprint,
    /// Notes recorded for the version.
    pub update_notes: String,
}
