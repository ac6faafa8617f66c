/// ID generation for lines and stations.
///
/// Stations normally arrive from the lookup collaborator with their identity
/// already assigned; lines created locally get a random u64.
use rand::Rng;

/// Generate a new random u64 ID
#[must_use]
pub fn generate_id() -> u64 {
    rand::thread_rng().gen()
}
