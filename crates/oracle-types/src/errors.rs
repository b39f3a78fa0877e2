//! Error types for the oracle domain model.

use starknet::core::utils::{CairoShortStringToFeltError, ParseCairoShortStringError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EntityError {
	#[error("identifier is not encodable as a short string: {0}")]
	IdEncoding(#[from] CairoShortStringToFeltError),

	#[error("felt does not decode to a short string: {0}")]
	IdDecoding(#[from] ParseCairoShortStringError),

	#[error("unknown data type tag: {0:?}")]
	UnknownDataType(String),

	#[error("future entries require an expiration timestamp")]
	MissingExpiration,

	#[error("OPTION entries have no on-chain serialization")]
	UnsupportedVariant,
}

/// Raised when an asset has no mapping in the supported-asset catalog.
///
/// Defined here so higher-level callers share a single taxonomy for this
/// failure instead of inventing their own.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct UnsupportedAssetError(pub String);
