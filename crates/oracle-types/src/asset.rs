//! Currency and trading-pair entities.
//!
//! Both are immutable once constructed and serialize to the exact field
//! order of their on-chain struct counterparts.

use serde::{Deserialize, Serialize};
use serde_json::json;
use starknet::core::types::Felt;
use std::fmt;

use crate::errors::EntityError;
use crate::ids::{felt_to_str, AssetId};

/// A currency known to the oracle.
///
/// A zero `starknet_address` or `ethereum_address` is the sentinel for a
/// currency that has no bridged token on that ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
	pub id: Felt,
	pub decimals: u32,
	pub is_abstract_currency: bool,
	pub starknet_address: Felt,
	pub ethereum_address: Felt,
}

impl Currency {
	/// Builds a currency from a ticker or raw felt id. Omitted addresses
	/// default to the zero sentinel.
	pub fn new(
		id: impl Into<AssetId>,
		decimals: u32,
		is_abstract_currency: bool,
		starknet_address: Option<Felt>,
		ethereum_address: Option<Felt>,
	) -> Result<Self, EntityError> {
		Ok(Self {
			id: id.into().into_felt()?,
			decimals,
			is_abstract_currency,
			starknet_address: starknet_address.unwrap_or(Felt::ZERO),
			ethereum_address: ethereum_address.unwrap_or(Felt::ZERO),
		})
	}

	/// Canonical on-chain layout: `[id, decimals, is_abstract_currency,
	/// starknet_address, ethereum_address]`.
	pub fn serialize(&self) -> Vec<Felt> {
		vec![
			self.id,
			Felt::from(self.decimals),
			bool_to_felt(self.is_abstract_currency),
			self.starknet_address,
			self.ethereum_address,
		]
	}

	/// Human-readable mapping for logging and deploy-time constructor
	/// args. Felt fields are rendered as decimal strings; decoding ids
	/// back to tickers is the caller's job.
	pub fn to_dict(&self) -> serde_json::Value {
		json!({
			"id": self.id.to_string(),
			"decimals": self.decimals,
			"is_abstract_currency": self.is_abstract_currency,
			"starknet_address": self.starknet_address.to_string(),
			"ethereum_address": self.ethereum_address.to_string(),
		})
	}
}

impl fmt::Display for Currency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Currency({}, {}, {}, {:#x}, {:#x})",
			display_id(self.id),
			self.decimals,
			self.is_abstract_currency,
			self.starknet_address,
			self.ethereum_address
		)
	}
}

/// A `base/quote` trading pair tracked by the oracle.
///
/// The currency ids are not checked against any currency set here;
/// referential integrity is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
	pub id: Felt,
	pub quote_currency_id: Felt,
	pub base_currency_id: Felt,
}

impl Pair {
	/// Builds a pair from ids in either ticker or felt form.
	pub fn new(
		id: impl Into<AssetId>,
		quote_currency_id: impl Into<AssetId>,
		base_currency_id: impl Into<AssetId>,
	) -> Result<Self, EntityError> {
		Ok(Self {
			id: id.into().into_felt()?,
			quote_currency_id: quote_currency_id.into().into_felt()?,
			base_currency_id: base_currency_id.into().into_felt()?,
		})
	}

	/// Canonical on-chain layout: `[id, quote_currency_id,
	/// base_currency_id]`.
	pub fn serialize(&self) -> Vec<Felt> {
		vec![self.id, self.quote_currency_id, self.base_currency_id]
	}

	/// Human-readable mapping for logging and deploy-time constructor
	/// args.
	pub fn to_dict(&self) -> serde_json::Value {
		json!({
			"id": self.id.to_string(),
			"quote_currency_id": self.quote_currency_id.to_string(),
			"base_currency_id": self.base_currency_id.to_string(),
		})
	}
}

impl fmt::Display for Pair {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Pair({}, {}, {})",
			display_id(self.id),
			display_id(self.quote_currency_id),
			display_id(self.base_currency_id)
		)
	}
}

fn bool_to_felt(value: bool) -> Felt {
	if value {
		Felt::ONE
	} else {
		Felt::ZERO
	}
}

fn display_id(id: Felt) -> String {
	felt_to_str(id).unwrap_or_else(|_| format!("{:#x}", id))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ids::str_to_felt;

	#[test]
	fn test_currency_serializes_in_struct_order() {
		let currency = Currency::new("BTC", 8, false, None, None).unwrap();
		let serialized = currency.serialize();

		assert_eq!(serialized.len(), 5);
		assert_eq!(serialized[0], str_to_felt("BTC").unwrap());
		assert_eq!(serialized[1], Felt::from(8_u32));
		assert_eq!(serialized[2], Felt::ZERO);
		assert_eq!(serialized[3], Felt::ZERO);
		assert_eq!(serialized[4], Felt::ZERO);
	}

	#[test]
	fn test_abstract_currency_serializes_true_as_one() {
		let currency = Currency::new("USD", 8, true, None, None).unwrap();
		assert_eq!(currency.serialize()[2], Felt::ONE);
	}

	#[test]
	fn test_currency_keeps_supplied_addresses() {
		let currency = Currency::new(
			"ETH",
			18,
			false,
			Some(Felt::from(0xabc_u64)),
			Some(Felt::from(0xdef_u64)),
		)
		.unwrap();

		assert_eq!(currency.starknet_address, Felt::from(0xabc_u64));
		assert_eq!(currency.ethereum_address, Felt::from(0xdef_u64));
	}

	#[test]
	fn test_currency_accepts_raw_felt_id() {
		let raw = str_to_felt("BTC").unwrap();
		let currency = Currency::new(raw, 8, false, None, None).unwrap();
		assert_eq!(currency.id, raw);
	}

	#[test]
	fn test_currency_rejects_overlong_ticker() {
		assert!(Currency::new("X".repeat(32), 8, false, None, None).is_err());
	}

	#[test]
	fn test_pair_serializes_in_struct_order() {
		let pair = Pair::new("BTC/USD", "USD", "BTC").unwrap();
		let serialized = pair.serialize();

		assert_eq!(
			serialized,
			vec![
				str_to_felt("BTC/USD").unwrap(),
				str_to_felt("USD").unwrap(),
				str_to_felt("BTC").unwrap(),
			]
		);
	}

	#[test]
	fn test_pair_display_decodes_ids() {
		let pair = Pair::new("BTC/USD", "USD", "BTC").unwrap();
		assert_eq!(pair.to_string(), "Pair(BTC/USD, USD, BTC)");
	}

	#[test]
	fn test_currency_to_dict_renders_felts_as_decimal_strings() {
		let currency = Currency::new("BTC", 8, false, None, None).unwrap();
		let dict = currency.to_dict();

		assert_eq!(dict["id"], "4346947");
		assert_eq!(dict["decimals"], 8);
		assert_eq!(dict["is_abstract_currency"], false);
		assert_eq!(dict["starknet_address"], "0");
	}
}
