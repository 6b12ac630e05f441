// Standard library
use std::time::{SystemTime, UNIX_EPOCH};

// 3rd party crates
use rand::seq::SliceRandom;
use rand::Rng;

/// Returns the providers in random order, so that repeated runs do not
/// always hit the same service first.
pub fn shuffle_providers<T, R: Rng + ?Sized>(mut providers: Vec<T>, rng: &mut R) -> Vec<T> {
    providers.shuffle(rng);
    providers
}

/// Seed derived from the wall clock.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
