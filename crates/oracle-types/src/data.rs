//! Oracle entry identifiers and on-chain enum tags.

use serde::{Deserialize, Serialize};
use serde_json::json;
use starknet::core::types::Felt;
use std::fmt;
use std::str::FromStr;

use crate::errors::EntityError;
use crate::ids::AssetId;

/// Closed set of entry kinds the oracle distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataTypes {
	Spot,
	Future,
	Option,
}

impl DataTypes {
	pub fn tag(&self) -> &'static str {
		match self {
			DataTypes::Spot => "SPOT",
			DataTypes::Future => "FUTURE",
			DataTypes::Option => "OPTION",
		}
	}
}

impl fmt::Display for DataTypes {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.tag())
	}
}

impl FromStr for DataTypes {
	type Err = EntityError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"SPOT" => Ok(DataTypes::Spot),
			"FUTURE" => Ok(DataTypes::Future),
			"OPTION" => Ok(DataTypes::Option),
			other => Err(EntityError::UnknownDataType(other.to_string())),
		}
	}
}

/// Identifies one oracle entry: the entry kind, its pair, and for futures
/// the settlement expiry.
///
/// Each variant carries exactly the payload its on-chain counterpart
/// defines, so an undefined encoding surfaces as an explicit match arm
/// rather than a silent empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
	#[serde(rename = "SpotEntry")]
	Spot { pair_id: Felt },
	#[serde(rename = "FutureEntry")]
	Future { pair_id: Felt, expiration_timestamp: u64 },
	#[serde(rename = "OptionEntry")]
	Option { pair_id: Felt },
}

impl DataType {
	/// Builds an entry identifier from a kind tag, a pair id in ticker or
	/// felt form, and an optional expiry.
	///
	/// The expiry is required for futures and ignored for the other
	/// kinds.
	pub fn new(
		data_type: DataTypes,
		pair_id: impl Into<AssetId>,
		expiration_timestamp: Option<u64>,
	) -> Result<Self, EntityError> {
		let pair_id = pair_id.into().into_felt()?;
		match data_type {
			DataTypes::Spot => Ok(DataType::Spot { pair_id }),
			DataTypes::Future => {
				let expiration_timestamp =
					expiration_timestamp.ok_or(EntityError::MissingExpiration)?;
				Ok(DataType::Future {
					pair_id,
					expiration_timestamp,
				})
			}
			DataTypes::Option => Ok(DataType::Option { pair_id }),
		}
	}

	pub fn kind(&self) -> DataTypes {
		match self {
			DataType::Spot { .. } => DataTypes::Spot,
			DataType::Future { .. } => DataTypes::Future,
			DataType::Option { .. } => DataTypes::Option,
		}
	}

	pub fn pair_id(&self) -> Felt {
		match self {
			DataType::Spot { pair_id }
			| DataType::Future { pair_id, .. }
			| DataType::Option { pair_id } => *pair_id,
		}
	}

	pub fn expiration_timestamp(&self) -> Option<u64> {
		match self {
			DataType::Future {
				expiration_timestamp,
				..
			} => Some(*expiration_timestamp),
			_ => None,
		}
	}

	/// Tagged-union calldata: `[variant_index, payload...]`.
	///
	/// OPTION entries have no encoding in the current contract and fail
	/// explicitly instead of producing an empty value.
	pub fn serialize(&self) -> Result<Vec<Felt>, EntityError> {
		match self {
			DataType::Spot { pair_id } => Ok(vec![Felt::ZERO, *pair_id]),
			DataType::Future {
				pair_id,
				expiration_timestamp,
			} => Ok(vec![
				Felt::ONE,
				*pair_id,
				Felt::from(*expiration_timestamp),
			]),
			DataType::Option { .. } => Err(EntityError::UnsupportedVariant),
		}
	}

	/// Human-readable mapping for logging and debugging.
	pub fn to_dict(&self) -> serde_json::Value {
		json!({
			"pair_id": self.pair_id().to_string(),
			"expiration_timestamp": self.expiration_timestamp(),
			"data_type": self.kind().tag(),
		})
	}
}

/// How the oracle aggregates source prices into one value.
///
/// On-chain tag names are `Median`, `Mean` and `Error`; the variant
/// indices below pin the on-chain declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregationMode {
	Median = 0,
	#[serde(rename = "Mean")]
	Average = 1,
	Error = 2,
}

impl AggregationMode {
	/// On-chain variant tag.
	pub fn variant_name(&self) -> &'static str {
		match self {
			AggregationMode::Median => "Median",
			AggregationMode::Average => "Mean",
			AggregationMode::Error => "Error",
		}
	}

	/// No-payload enum calldata: the bare variant index.
	pub fn serialize(&self) -> Vec<Felt> {
		vec![Felt::from(*self as u64)]
	}
}

impl fmt::Display for AggregationMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.variant_name())
	}
}

/// Lifecycle states of an on-chain price request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
	Uninitialized = 0,
	Received = 1,
	Fulfilled = 2,
	Cancelled = 3,
	OutOfGas = 4,
}

impl RequestStatus {
	/// On-chain variant tag.
	pub fn variant_name(&self) -> &'static str {
		match self {
			RequestStatus::Uninitialized => "UNINITIALIZED",
			RequestStatus::Received => "RECEIVED",
			RequestStatus::Fulfilled => "FULFILLED",
			RequestStatus::Cancelled => "CANCELLED",
			RequestStatus::OutOfGas => "OUT_OF_GAS",
		}
	}

	/// No-payload enum calldata: the bare variant index.
	pub fn serialize(&self) -> Vec<Felt> {
		vec![Felt::from(*self as u64)]
	}
}

impl fmt::Display for RequestStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.variant_name())
	}
}
