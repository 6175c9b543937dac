/// Generate a random `f64` in the range `[low, high)`.
#[inline]
pub(crate) fn f64_range(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    let t = rng.f64();
    // `high - low` overflows for bounds near `f64::MAX`.
    (low + t * high - t * low).clamp(low, high)
}

/// Return `true` with probability `p`.
#[inline]
pub(crate) fn chance(rng: &mut fastrand::Rng, p: f64) -> bool {
    rng.f64() < p
}

/// Build an RNG from an optional seed.
pub(crate) fn make_rng(seed: Option<u64>) -> fastrand::Rng {
    seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed)
}
