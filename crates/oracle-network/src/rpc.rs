//! RPC endpoint resolution and node-client construction.
//!
//! Pooled networks are load-distributed by drawing a pool entry uniformly
//! at random on every call, so callers must not assume endpoint stability
//! across calls. The random source is injectable for deterministic tests.

use rand::Rng;
use starknet::providers::jsonrpc::{HttpTransport, JsonRpcClient};
use tracing::{debug, info};
use url::Url;

use crate::errors::ClientError;
use crate::network::Network;

/// Port a locally hosted devnet listens on unless the caller says
/// otherwise.
pub const DEFAULT_DEVNET_PORT: u16 = 5050;

/// Resolves `network` to a concrete RPC URL.
///
/// Anything starting with an `http` scheme marker is treated as a direct
/// endpoint override and returned unchanged. `port` only matters for
/// locally hosted devnets. Pool selection uses the thread-local RNG; see
/// [`get_rpc_url_with`] to supply your own.
pub fn get_rpc_url(network: &str, port: u16) -> Result<String, ClientError> {
	get_rpc_url_with(network, port, &mut rand::thread_rng())
}

/// [`get_rpc_url`] with a caller-supplied random source for pool
/// selection.
pub fn get_rpc_url_with<R>(network: &str, port: u16, rng: &mut R) -> Result<String, ClientError>
where
	R: Rng + ?Sized,
{
	if network.starts_with("http") {
		return Ok(network.to_string());
	}
	let network: Network = network.parse()?;
	Ok(resolve_url(network, port, rng))
}

/// Resolves `network` and constructs the JSON-RPC node client bound to
/// the chosen endpoint. This is the only place the core touches the
/// client's construction contract.
pub fn get_client_from_network(
	network: &str,
	port: u16,
) -> Result<JsonRpcClient<HttpTransport>, ClientError> {
	let raw = get_rpc_url(network, port)?;
	let url = Url::parse(&raw).map_err(|source| ClientError::InvalidUrl { url: raw, source })?;

	info!("Connecting JSON-RPC client to {}", url);
	Ok(JsonRpcClient::new(HttpTransport::new(url)))
}

fn resolve_url<R>(network: Network, port: u16, rng: &mut R) -> String
where
	R: Rng + ?Sized,
{
	let url = match network {
		Network::Mainnet | Network::Testnet | Network::Sepolia => {
			select_endpoint(network.rpc_pool(), rng)
		}
		Network::Sharingan => "https://sharingan.madara.zone".to_string(),
		Network::OracleTestnet => "https://testnet.starkoracle.dev/rpc".to_string(),
		Network::Devnet | Network::ForkDevnet => format!("http://127.0.0.1:{}/rpc", port),
	};

	debug!("Resolved network {} to RPC endpoint {}", network, url);
	url
}

// Fresh uniform draw on every call; selection is not sticky per process.
fn select_endpoint<R>(pool: &[&str], rng: &mut R) -> String
where
	R: Rng + ?Sized,
{
	pool[rng.gen_range(0..pool.len())].to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::rngs::StdRng;
	use rand::SeedableRng;
	use std::collections::HashSet;

	#[test]
	fn test_direct_url_is_passed_through() {
		let url = "http://localhost:1234/rpc";
		assert_eq!(get_rpc_url(url, DEFAULT_DEVNET_PORT).unwrap(), url);

		let url = "https://my-own-node.example.com/rpc/v0_6";
		assert_eq!(get_rpc_url(url, DEFAULT_DEVNET_PORT).unwrap(), url);
	}

	#[test]
	fn test_devnet_url_uses_caller_port() {
		assert_eq!(
			get_rpc_url("devnet", 6060).unwrap(),
			"http://127.0.0.1:6060/rpc"
		);
		assert_eq!(
			get_rpc_url("fork_devnet", DEFAULT_DEVNET_PORT).unwrap(),
			"http://127.0.0.1:5050/rpc"
		);
	}

	#[test]
	fn test_fixed_endpoint_networks() {
		assert_eq!(
			get_rpc_url("sharingan", DEFAULT_DEVNET_PORT).unwrap(),
			"https://sharingan.madara.zone"
		);
		assert_eq!(
			get_rpc_url("oracle_testnet", DEFAULT_DEVNET_PORT).unwrap(),
			"https://testnet.starkoracle.dev/rpc"
		);
	}

	#[test]
	fn test_pooled_network_always_resolves_into_pool() {
		let mut rng = StdRng::seed_from_u64(1);
		let pool = Network::Testnet.rpc_pool();

		for _ in 0..20 {
			let url = get_rpc_url_with("testnet", DEFAULT_DEVNET_PORT, &mut rng).unwrap();
			assert!(pool.contains(&url.as_str()));
		}
	}

	#[test]
	fn test_pool_selection_eventually_covers_every_entry() {
		let pool = ["http://a/rpc", "http://b/rpc", "http://c/rpc"];
		let mut rng = StdRng::seed_from_u64(7);

		let mut seen = HashSet::new();
		for _ in 0..200 {
			seen.insert(select_endpoint(&pool, &mut rng));
		}

		assert_eq!(seen.len(), pool.len());
	}

	#[test]
	fn test_unknown_network_is_a_configuration_error() {
		let err = get_rpc_url("not-a-network", DEFAULT_DEVNET_PORT).unwrap_err();
		assert!(matches!(err, ClientError::UnknownNetwork(_)));
		assert!(err.to_string().contains("network name or an RPC URL"));
	}

	#[test]
	fn test_client_construction_from_network_name() {
		assert!(get_client_from_network("devnet", DEFAULT_DEVNET_PORT).is_ok());
		assert!(get_client_from_network("mainnet", DEFAULT_DEVNET_PORT).is_ok());
	}

	#[test]
	fn test_client_construction_rejects_malformed_override() {
		// Passes the scheme-marker check but is not a parseable URL.
		let err = get_client_from_network("httpgarbage", DEFAULT_DEVNET_PORT).unwrap_err();
		assert!(matches!(err, ClientError::InvalidUrl { .. }));
	}
}
