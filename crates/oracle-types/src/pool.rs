//! AMM pool identification.

use serde::{Deserialize, Serialize};
use serde_json::json;
use starknet::core::types::Felt;
use std::fmt;

/// Identifies a unique AMM pool.
///
/// Callers supply already-normalized values: `token_0` must sort below
/// `token_1` as integers, `fee` is a 0.128 fixed-point fraction
/// (`2^128 / 100` is 1%), `tick_spacing` is the minimum spacing between
/// initialized ticks, and a zero `extension` means the pool has no
/// extension contract. None of this is validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolKey {
	pub token_0: Felt,
	pub token_1: Felt,
	pub fee: u128,
	pub tick_spacing: u128,
	pub extension: Felt,
}

impl PoolKey {
	pub fn new(token_0: Felt, token_1: Felt, fee: u128, tick_spacing: u128, extension: Felt) -> Self {
		Self {
			token_0,
			token_1,
			fee,
			tick_spacing,
			extension,
		}
	}

	/// Canonical on-chain layout: `[token_0, token_1, fee, tick_spacing,
	/// extension]`.
	pub fn serialize(&self) -> Vec<Felt> {
		vec![
			self.token_0,
			self.token_1,
			Felt::from(self.fee),
			Felt::from(self.tick_spacing),
			self.extension,
		]
	}

	/// Human-readable mapping for logging and debugging.
	pub fn to_dict(&self) -> serde_json::Value {
		json!({
			"token_0": self.token_0.to_string(),
			"token_1": self.token_1.to_string(),
			"fee": self.fee.to_string(),
			"tick_spacing": self.tick_spacing.to_string(),
			"extension": self.extension.to_string(),
		})
	}
}

impl fmt::Display for PoolKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"PoolKey({:#x}, {:#x}, {}, {}, {:#x})",
			self.token_0, self.token_1, self.fee, self.tick_spacing, self.extension
		)
	}
}
