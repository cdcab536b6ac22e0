use chrono::Utc;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Random number generator of [`u64`] within inclusive bounds
///
/// Seeded from the current timestamp, the same way it's
/// traditionally done in `C` with `srand(time(NULL))`
pub(crate) fn random_u64(min: u64, max: u64) -> u64 {
    let now = Utc::now().timestamp_micros() as u64;

    // A process-wide `StdRng` shared between connection tasks would have
    // to live behind `Arc<Mutex<_>>`, and every draw would serialize on
    // that lock. Each subscription draws independently anyway, so a
    // throwaway generator per call keeps the streams uncorrelated
    let mut rng = StdRng::seed_from_u64(now);

    rng.gen_range(min..=max)
}

/// Current wall-clock time in milliseconds since the Unix epoch
pub(crate) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
