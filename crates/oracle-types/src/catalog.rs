//! Supported-asset catalog.
//!
//! Static table of the assets the oracle deployment publishes, keyed by
//! their `"BASE/QUOTE"` pair id. Lookups fail with
//! [`UnsupportedAssetError`] so callers handle one taxonomy for every
//! unknown-asset path.

use serde::Serialize;
use starknet::core::types::Felt;

use crate::asset::Pair;
use crate::data::{DataType, DataTypes};
use crate::errors::{EntityError, UnsupportedAssetError};
use crate::ids::pair_id_for;

/// One published asset: its entry kind, base/quote tickers and the
/// decimals its prices are quoted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssetSpec {
	pub kind: DataTypes,
	pub base: &'static str,
	pub quote: &'static str,
	pub decimals: u32,
}

impl AssetSpec {
	const fn spot(base: &'static str, quote: &'static str, decimals: u32) -> Self {
		Self {
			kind: DataTypes::Spot,
			base,
			quote,
			decimals,
		}
	}

	const fn future(base: &'static str, quote: &'static str, decimals: u32) -> Self {
		Self {
			kind: DataTypes::Future,
			base,
			quote,
			decimals,
		}
	}

	/// `"BASE/QUOTE"` key this asset is published under.
	pub fn key(&self) -> String {
		format!("{}/{}", self.base, self.quote)
	}

	/// Pair id felt for this asset.
	pub fn pair_id(&self) -> Result<Felt, EntityError> {
		pair_id_for(self.base, self.quote)
	}

	/// Builds the [`Pair`] entity this asset describes.
	pub fn to_pair(&self) -> Result<Pair, EntityError> {
		Pair::new(self.key(), self.quote, self.base)
	}

	/// Builds the entry identifier for this asset, with the expiry
	/// required for future assets.
	pub fn to_data_type(&self, expiration_timestamp: Option<u64>) -> Result<DataType, EntityError> {
		DataType::new(self.kind, self.key(), expiration_timestamp)
	}
}

/// Assets the oracle publishes, mirroring the on-chain deployment.
pub const SUPPORTED_ASSETS: &[AssetSpec] = &[
	AssetSpec::spot("BTC", "USD", 8),
	AssetSpec::spot("WBTC", "BTC", 8),
	AssetSpec::spot("WBTC", "USD", 8),
	AssetSpec::spot("BTC", "EUR", 8),
	AssetSpec::spot("ETH", "USD", 8),
	AssetSpec::spot("WSTETH", "USD", 8),
	AssetSpec::spot("SOL", "USD", 8),
	AssetSpec::spot("DAI", "USD", 8),
	AssetSpec::spot("LUSD", "USD", 8),
	AssetSpec::spot("UNI", "USD", 8),
	AssetSpec::spot("USDT", "USD", 6),
	AssetSpec::spot("USDC", "USD", 6),
	AssetSpec::spot("MATIC", "USD", 8),
	AssetSpec::spot("LORDS", "USD", 8),
	AssetSpec::future("BTC", "USD", 8),
	AssetSpec::future("BTC", "USDT", 6),
	AssetSpec::future("ETH", "USD", 8),
	AssetSpec::future("ETH", "USDT", 6),
	AssetSpec::spot("ETH", "USDC", 6),
	AssetSpec::spot("DAI", "USDC", 6),
	AssetSpec::spot("WBTC", "USDC", 6),
	AssetSpec::spot("ETH", "STRK", 18),
	AssetSpec::spot("STRK", "USD", 8),
];

/// Looks up the spot asset published under `pair_id` (`"BASE/QUOTE"`).
pub fn spot_asset_for_pair_id(pair_id: &str) -> Result<&'static AssetSpec, UnsupportedAssetError> {
	find_asset(pair_id, DataTypes::Spot)
}

/// Looks up the future asset published under `pair_id`.
pub fn future_asset_for_pair_id(
	pair_id: &str,
) -> Result<&'static AssetSpec, UnsupportedAssetError> {
	find_asset(pair_id, DataTypes::Future)
}

/// Looks up an asset of the given kind under `pair_id`.
pub fn asset_for_pair_id_by_kind(
	pair_id: &str,
	kind: DataTypes,
) -> Result<&'static AssetSpec, UnsupportedAssetError> {
	match kind {
		DataTypes::Spot => spot_asset_for_pair_id(pair_id),
		DataTypes::Future => future_asset_for_pair_id(pair_id),
		DataTypes::Option => Err(UnsupportedAssetError(
			"only SPOT & FUTURE are supported for now".to_string(),
		)),
	}
}

/// Looks up an asset of any kind under `pair_id`; when a pair is
/// published both spot and future, the earlier table entry (spot) wins.
pub fn asset_for_pair_id(pair_id: &str) -> Result<&'static AssetSpec, UnsupportedAssetError> {
	SUPPORTED_ASSETS
		.iter()
		.find(|asset| asset.key() == pair_id)
		.ok_or_else(|| UnsupportedAssetError(format!("pair id not found: {}", pair_id)))
}

fn find_asset(
	pair_id: &str,
	kind: DataTypes,
) -> Result<&'static AssetSpec, UnsupportedAssetError> {
	SUPPORTED_ASSETS
		.iter()
		.find(|asset| asset.kind == kind && asset.key() == pair_id)
		.ok_or_else(|| UnsupportedAssetError(format!("pair id not found: {}", pair_id)))
}
