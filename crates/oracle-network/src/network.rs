//! Network registry: chain ids, explorer URLs, RPC pools and deployed
//! contract addresses for every supported network.
//!
//! The tables are process-wide read-only constants; there is no mutation
//! path after startup, so everything here is safe to share across threads.

use serde::{Deserialize, Serialize};
use starknet::core::types::Felt;
use starknet::macros::{felt, short_string};
use std::fmt;
use std::str::FromStr;

use crate::errors::ClientError;

/// Networks a client can address by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Network {
	Devnet,
	Testnet,
	Sepolia,
	Mainnet,
	Sharingan,
	ForkDevnet,
	OracleTestnet,
}

/// Addresses of the oracle deployment on one network.
///
/// Zero addresses mean the contract is not deployed there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAddresses {
	pub publisher_registry_address: Felt,
	pub oracle_proxy_address: Felt,
}

impl Network {
	/// Every supported network. Declaration order doubles as the
	/// precedence order for [`Network::from_chain_id`].
	pub const ALL: [Network; 7] = [
		Network::Devnet,
		Network::Testnet,
		Network::Sepolia,
		Network::Mainnet,
		Network::Sharingan,
		Network::ForkDevnet,
		Network::OracleTestnet,
	];

	/// Lowercase name the network is addressed by.
	pub fn name(&self) -> &'static str {
		match self {
			Network::Devnet => "devnet",
			Network::Testnet => "testnet",
			Network::Sepolia => "sepolia",
			Network::Mainnet => "mainnet",
			Network::Sharingan => "sharingan",
			Network::ForkDevnet => "fork_devnet",
			Network::OracleTestnet => "oracle_testnet",
		}
	}

	/// Chain id the ledger reports for this network.
	///
	/// The dev and test networks deliberately alias `SN_GOERLI`.
	pub fn chain_id(&self) -> Felt {
		match self {
			Network::Devnet | Network::Testnet | Network::Sharingan | Network::ForkDevnet => {
				short_string!("SN_GOERLI")
			}
			Network::Sepolia => short_string!("SN_SEPOLIA"),
			Network::Mainnet => short_string!("SN_MAIN"),
			Network::OracleTestnet => short_string!("oracle_goerli"),
		}
	}

	/// Best-effort single network for a chain id: the first match in
	/// [`Network::ALL`] order. Use [`Network::all_for_chain_id`] when the
	/// aliasing of dev and test networks matters.
	pub fn from_chain_id(chain_id: Felt) -> Option<Network> {
		Self::ALL
			.into_iter()
			.find(|network| network.chain_id() == chain_id)
	}

	/// Every network sharing `chain_id`.
	pub fn all_for_chain_id(chain_id: Felt) -> Vec<Network> {
		Self::ALL
			.into_iter()
			.filter(|network| network.chain_id() == chain_id)
			.collect()
	}

	/// Block-explorer base URL for this network.
	pub fn explorer_url(&self) -> &'static str {
		match self {
			Network::Devnet | Network::ForkDevnet => "https://devnet.starkscan.co",
			Network::Testnet => "https://testnet.starkscan.co",
			Network::Sepolia => "https://sepolia.starkscan.co",
			Network::Mainnet => "https://starkscan.co",
			Network::Sharingan => "https://sharingan-explorer.madara.zone",
			Network::OracleTestnet => "https://testnet.starkoracle.dev/explorer",
		}
	}

	/// Pool of public RPC endpoints this network load-balances over;
	/// empty for networks resolved to a fixed or synthesized endpoint.
	pub fn rpc_pool(&self) -> &'static [&'static str] {
		match self {
			Network::Mainnet => &["https://starknet-mainnet.public.blastapi.io/rpc/v0_6"],
			Network::Testnet => &["https://starknet-testnet.public.blastapi.io/rpc/v0_6"],
			Network::Sepolia => &["https://starknet-sepolia.public.blastapi.io/rpc/v0_6"],
			_ => &[],
		}
	}

	/// Deployed contract addresses; zeroed for networks without a
	/// deployment.
	pub fn contract_addresses(&self) -> ContractAddresses {
		match self {
			Network::Testnet => ContractAddresses {
				publisher_registry_address: felt!(
					"0x552e96b3a9078a453ab7012ed76325bedef7b0cc5647a8fafe985e658e31d86"
				),
				oracle_proxy_address: felt!(
					"0x6df335982dddce41008e4c03f2546fa27276567b5274c7d0c1262f3c2b5d167"
				),
			},
			Network::Mainnet => ContractAddresses {
				publisher_registry_address: felt!(
					"0x24a55b928496ef83468fdb9a5430fe031ac386b8f62f5c2eb7dd20ef7237415"
				),
				oracle_proxy_address: felt!(
					"0x2a85bd616f912537c50a49a4076db02c00b29b2cdc8a197ce92ed1837fa875b"
				),
			},
			Network::Sepolia => ContractAddresses {
				publisher_registry_address: felt!(
					"0x1b08e27ab436cd491631156da5f3aa7ff04aee1e6ca925eb2ca84397c22b74d"
				),
				oracle_proxy_address: felt!(
					"0x36031daa264c24520b11d93af622c848b2499b66b41d611bac95e13cfca131a"
				),
			},
			_ => ContractAddresses::default(),
		}
	}
}

impl fmt::Display for Network {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Network {
	type Err = ClientError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|network| network.name() == s)
			.ok_or_else(|| ClientError::UnknownNetwork(s.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_network_names_round_trip() {
		for network in Network::ALL {
			assert_eq!(network.name().parse::<Network>().unwrap(), network);
		}
	}

	#[test]
	fn test_unknown_network_name_is_rejected() {
		assert!(matches!(
			"not-a-network".parse::<Network>(),
			Err(ClientError::UnknownNetwork(_))
		));
	}

	#[test]
	fn test_chain_id_tables_stay_consistent() {
		// Non-aliased chain ids invert exactly; aliased ones resolve to
		// the first declaring network.
		for network in [Network::Sepolia, Network::Mainnet, Network::OracleTestnet] {
			assert_eq!(Network::from_chain_id(network.chain_id()), Some(network));
		}
		assert_eq!(
			Network::from_chain_id(short_string!("SN_GOERLI")),
			Some(Network::Devnet)
		);
	}

	#[test]
	fn test_goerli_aliases_enumerate_all_networks() {
		assert_eq!(
			Network::all_for_chain_id(short_string!("SN_GOERLI")),
			vec![
				Network::Devnet,
				Network::Testnet,
				Network::Sharingan,
				Network::ForkDevnet,
			]
		);
	}

	#[test]
	fn test_unknown_chain_id_has_no_networks() {
		assert_eq!(Network::from_chain_id(Felt::from(42_u64)), None);
		assert!(Network::all_for_chain_id(Felt::from(42_u64)).is_empty());
	}

	#[test]
	fn test_public_networks_have_rpc_pools() {
		for network in [Network::Mainnet, Network::Testnet, Network::Sepolia] {
			assert!(!network.rpc_pool().is_empty());
		}
		assert!(Network::Devnet.rpc_pool().is_empty());
	}

	#[test]
	fn test_deployed_networks_have_nonzero_addresses() {
		for network in [Network::Mainnet, Network::Testnet, Network::Sepolia] {
			let addresses = network.contract_addresses();
			assert_ne!(addresses.publisher_registry_address, Felt::ZERO);
			assert_ne!(addresses.oracle_proxy_address, Felt::ZERO);
		}
		assert_eq!(
			Network::Devnet.contract_addresses(),
			ContractAddresses::default()
		);
	}

	#[test]
	fn test_network_serde_uses_snake_case_names() {
		let json = serde_json::to_string(&Network::ForkDevnet).unwrap();
		assert_eq!(json, "\"fork_devnet\"");
		let back: Network = serde_json::from_str(&json).unwrap();
		assert_eq!(back, Network::ForkDevnet);
	}
}
