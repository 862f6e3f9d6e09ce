//! # lienzo-registry
//!
//! In-memory registry of cultural artworks, standing in for the on-chain
//! contract so its business rules can be validated before deployment.
//!
//! This crate implements:
//! - Artwork registration keyed by 32-byte content fingerprints
//! - Provenance versioning with unique, bounded version numbers
//! - Categorization with a bounded tag list (full replacement on update)
//! - Collaborator permissioning (one entry per identity, fixed at add time)
//! - Ownership transfer and verification (owner-gated mutations)
//! - Fractional royalty allocation capped at 100% per artwork
//!
//! ## Key Parameters
//!
//! | Parameter | Value |
//! |---|---|
//! | Fingerprint length | 32 bytes |
//! | Max provenance version number | 50 |
//! | Max category tags | 10 |
//! | Max cumulative royalty | 100% |
//!
//! Every operation is synchronous and deterministic. Mutations take the
//! registry by `&mut self`, so each read-check-write sequence is atomic; a
//! concurrent host must serialize access externally (e.g. behind a mutex).
//!
//! Failures are returned as [`RegistryError`], never panicked. Each variant
//! carries the numeric code of the contract's error taxonomy via
//! [`RegistryError::code`], so a transaction layer can surface the exact
//! on-chain numbering. Pure lookups are a separate channel: they return
//! `Option` and never produce an error code.

pub mod registry;

pub use registry::{Artwork, ArtworkRegistry};

use lienzo_types::{FINGERPRINT_LEN, MAX_CATEGORY_TAGS, MAX_ROYALTY_TOTAL, MAX_VERSION_NUMBER};

/// Error types for registry operations.
///
/// The `code()` numbering is part of the caller-visible contract and must
/// not be renumbered. Codes 5 and 8 both mean "artwork absent" but are kept
/// distinct: the contract reserves 8 for permission lookups.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The fingerprint, version number, or collaborator already exists.
    #[error("entry already exists")]
    DuplicateEntry,

    /// The caller is not the artwork's owner.
    #[error("caller is not the artwork owner")]
    Unauthorized,

    /// A fingerprint is not exactly 32 bytes.
    #[error("fingerprint must be exactly {} bytes, got {len}", FINGERPRINT_LEN)]
    InvalidFingerprint {
        /// The length that was supplied.
        len: usize,
    },

    /// A required metadata field is empty.
    #[error("title and description must be non-empty")]
    InvalidMetadata,

    /// The artwork does not exist (mutation path).
    #[error("artwork not found")]
    NotFound,

    /// A version number exceeds the maximum.
    #[error("version number {version} exceeds maximum of {}", MAX_VERSION_NUMBER)]
    VersionTooLarge {
        /// The version number that was supplied.
        version: u32,
    },

    /// Too many category tags were supplied.
    #[error("tag count {count} exceeds maximum of {}", MAX_CATEGORY_TAGS)]
    TooManyTags {
        /// The number of tags that was supplied.
        count: usize,
    },

    /// The artwork does not exist (permission lookup path).
    #[error("artwork not found for permission lookup")]
    PermissionLookupNotFound,

    /// A royalty percentage is outside (0, 100].
    #[error("royalty percentage must be in 1..=100, got {percentage}")]
    InvalidPercentage {
        /// The percentage that was supplied.
        percentage: u8,
    },

    /// A royalty allocation would push the cumulative total past 100%.
    #[error("cumulative royalty {attempted}% exceeds maximum of {}%", MAX_ROYALTY_TOTAL)]
    RoyaltyTotalExceeded {
        /// The cumulative percentage the allocation would have reached.
        attempted: u16,
    },
}

impl RegistryError {
    /// The contract-level numeric code for this error.
    pub const fn code(&self) -> u32 {
        match self {
            RegistryError::DuplicateEntry => 1,
            RegistryError::Unauthorized => 2,
            RegistryError::InvalidFingerprint { .. } => 3,
            RegistryError::InvalidMetadata => 4,
            RegistryError::NotFound => 5,
            RegistryError::VersionTooLarge { .. } => 6,
            RegistryError::TooManyTags { .. } => 7,
            RegistryError::PermissionLookupNotFound => 8,
            RegistryError::InvalidPercentage { .. } => 9,
            RegistryError::RoyaltyTotalExceeded { .. } => 10,
        }
    }
}

/// Convenience result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
