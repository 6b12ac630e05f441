// 3rd party crates
use thiserror::Error;

// Project imports
use crate::providers::ProviderError;

/// Failure of a single provider lookup.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("provider {name} returned an error: {source}")]
    ProviderFailed {
        name: String,
        #[source]
        source: ProviderError,
    },

    #[error("provider {name} returned an empty IP address")]
    EmptyAddress { name: String },
}

/// Failure of a whole consensus run.
#[derive(Debug, Error)]
pub enum ConsensusError {
    #[error("zero provider. you need at least one provider")]
    ZeroQuorum,

    #[error("all returned IP addresses are different from each other: got {responses} responses, need {required} in agreement")]
    NoConsensus { responses: usize, required: usize },
}
