//! Configuration errors for network and endpoint resolution.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
	#[error("must provide a network name or an RPC URL, got {0:?}")]
	UnknownNetwork(String),

	#[error("invalid RPC URL {url:?}: {source}")]
	InvalidUrl {
		url: String,
		#[source]
		source: url::ParseError,
	},
}
