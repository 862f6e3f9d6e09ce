//! # lienzo-types
//!
//! Shared domain types for the Lienzo cultural artwork registry.
//! Records correspond 1:1 with the on-chain contract's map entries.

pub mod artwork;

/// 32-byte content-derived identifier uniquely naming an artwork record.
pub type Fingerprint = [u8; 32];

/// Opaque caller identity. Compared by equality only; no further
/// structure is assumed.
pub type Principal = String;

/// Required length of an artwork fingerprint in bytes.
pub const FINGERPRINT_LEN: usize = 32;

/// Maximum provenance version number per artwork.
pub const MAX_VERSION_NUMBER: u32 = 50;

/// Maximum category tags per artwork.
pub const MAX_CATEGORY_TAGS: usize = 10;

/// Maximum cumulative royalty allocation per artwork, in percent.
pub const MAX_ROYALTY_TOTAL: u8 = 100;
