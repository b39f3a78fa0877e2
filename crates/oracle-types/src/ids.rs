//! Identifier coercion between short ASCII strings and field elements.
//!
//! On-chain identifiers are felts; humans write tickers. Constructors accept
//! either form through [`AssetId`] and normalize to a felt at the entry
//! point, so the ambiguity never travels further into the types.

use starknet::core::types::Felt;
use starknet::core::utils::{cairo_short_string_to_felt, parse_cairo_short_string};

use crate::errors::EntityError;

/// Identifier accepted either as an already-encoded felt or as a short
/// ASCII ticker that is encoded during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetId {
	Felt(Felt),
	Ticker(String),
}

impl AssetId {
	/// Normalizes to the canonical felt form.
	pub fn into_felt(self) -> Result<Felt, EntityError> {
		match self {
			AssetId::Felt(felt) => Ok(felt),
			AssetId::Ticker(ticker) => str_to_felt(&ticker),
		}
	}
}

impl From<Felt> for AssetId {
	fn from(felt: Felt) -> Self {
		AssetId::Felt(felt)
	}
}

impl From<&str> for AssetId {
	fn from(ticker: &str) -> Self {
		AssetId::Ticker(ticker.to_string())
	}
}

impl From<String> for AssetId {
	fn from(ticker: String) -> Self {
		AssetId::Ticker(ticker)
	}
}

impl From<u64> for AssetId {
	fn from(raw: u64) -> Self {
		AssetId::Felt(Felt::from(raw))
	}
}

impl From<u128> for AssetId {
	fn from(raw: u128) -> Self {
		AssetId::Felt(Felt::from(raw))
	}
}

/// Encodes a short ASCII string (at most 31 bytes) as a felt.
pub fn str_to_felt(s: &str) -> Result<Felt, EntityError> {
	Ok(cairo_short_string_to_felt(s)?)
}

/// Decodes a felt back to the short string it was encoded from.
pub fn felt_to_str(felt: Felt) -> Result<String, EntityError> {
	Ok(parse_cairo_short_string(&felt)?)
}

/// Derives the canonical pair id for a base/quote combination, e.g.
/// `("eth", "usd")` becomes the felt of `"ETH/USD"`.
pub fn pair_id_for(base: &str, quote: &str) -> Result<Felt, EntityError> {
	str_to_felt(&format!("{}/{}", base.to_uppercase(), quote.to_uppercase()))
}
