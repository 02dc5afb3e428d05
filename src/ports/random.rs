/// Randomness source port
///
/// Isolates random selection behind a trait so the content generator and
/// stream simulator are deterministic under test.

/// Port trait for randomness sources
pub trait RandomPort: Send + Sync {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&self, len: usize) -> usize;

    /// One Bernoulli trial with probability `p`, clamped to `0.0..=1.0`.
    fn chance(&self, p: f64) -> bool;
}
