// Standard library
use std::collections::HashMap;
use std::net::IpAddr;

// 3rd party crates
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

// Project imports
use crate::providers::IpProvider;
use crate::utility::info_log::SharedInfoLog;

use super::errors::{ConsensusError, RequestError};
use super::functions::{shuffle_providers, time_seed};
use super::types::IpDetector;

impl IpDetector {
    pub fn new(providers: Vec<Box<dyn IpProvider>>, info_log: SharedInfoLog) -> Self {
        Self {
            providers,
            info_log,
            seed: None,
        }
    }

    /// Uses a fixed shuffle seed, making the query order reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the public IP address once `quorum` providers reported it.
    ///
    /// A quorum larger than the number of providers is lowered to that number.
    /// The info log is only appended to, clearing it is up to the caller.
    pub async fn resolve(&self, quorum: usize) -> Result<String, ConsensusError> {
        if quorum == 0 {
            return Err(ConsensusError::ZeroQuorum);
        }
        let quorum = quorum.min(self.providers.len());

        let mut rng = StdRng::seed_from_u64(self.seed.unwrap_or_else(time_seed));
        let providers = shuffle_providers(
            self.providers.iter().map(|p| p.as_ref()).collect(),
            &mut rng,
        );

        debug!(
            providers = providers.len(),
            quorum = quorum,
            "Starting consensus run"
        );

        let mut found_ip: HashMap<String, usize> = HashMap::new();
        let mut responses = 0;

        for provider in providers {
            let ip = match request(provider).await {
                Ok(ip) => ip,
                Err(e) => {
                    warn!(provider = %provider.name(), "{}", e);
                    self.info_log
                        .log(&format!("{}: {}", provider.name(), e))
                        .await;
                    continue;
                }
            };

            let key = ip.to_string();
            responses += 1;

            self.info_log
                .log(&format!(
                    "Provider {} returned the global/public IP as: {}",
                    provider.name(),
                    key
                ))
                .await;

            let count = found_ip.entry(key.clone()).or_insert(0);
            *count += 1;
            debug!(provider = %provider.name(), ip = %key, count = *count, "Tallied answer");

            if *count == quorum {
                info!(ip = %key, quorum = quorum, "Consensus reached");
                return Ok(key);
            }
        }

        Err(ConsensusError::NoConsensus {
            responses,
            required: quorum,
        })
    }
}

/// Asks a single provider for the address. No retries.
pub async fn request(provider: &dyn IpProvider) -> Result<IpAddr, RequestError> {
    match provider.get_ip().await {
        Ok(Some(ip)) => Ok(ip),
        Ok(None) => Err(RequestError::EmptyAddress {
            name: provider.name().to_string(),
        }),
        Err(source) => Err(RequestError::ProviderFailed {
            name: provider.name().to_string(),
            source,
        }),
    }
}
