//! # Draw Finalizer
//!
//! Mixes a `(seed, draw_index)` pair into 32 well-scattered bits using the
//! single-lane xxHash32 round and avalanche (rotate, multiply, xor-shift).
//!
//! Seeded content depends on these exact bits. Changing any constant or
//! shift silently regenerates every existing building, so the function is
//! frozen; treat a replacement as a compatibility break.

const PRIME_2: u32 = 0x85EB_CA77;
const PRIME_3: u32 = 0xC2B2_AE3D;
const PRIME_4: u32 = 0x27D4_EB2F;
const PRIME_5: u32 = 0x1656_67B1;

/// Hashes a seed and draw index into a 32-bit value.
///
/// # Example
///
/// ```rust
/// use plotgen_rng::hash::mix;
///
/// assert_eq!(mix(42, 7), mix(42, 7));
/// assert_ne!(mix(42, 7), mix(42, 8));
/// ```
#[inline]
pub fn mix(seed: u32, index: u32) -> u32 {
    let mut h = seed.wrapping_add(PRIME_5).wrapping_add(4);
    h = h.wrapping_add(index.wrapping_mul(PRIME_3));
    h = h.rotate_left(17).wrapping_mul(PRIME_4);
    avalanche(h)
}

/// Maps a `(seed, draw_index)` pair to a float in `[0, 1)`.
#[inline]
pub fn unit_float(seed: u32, index: u32) -> f64 {
    f64::from(mix(seed, index)) / 4_294_967_296.0
}

#[inline]
fn avalanche(mut h: u32) -> u32 {
    h ^= h >> 15;
    h = h.wrapping_mul(PRIME_2);
    h ^= h >> 13;
    h = h.wrapping_mul(PRIME_3);
    h ^= h >> 16;
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_golden_values() {
        // Frozen outputs: a failure here means seeded content changed
        assert_eq!(mix(0, 0), 0x08D6_D969);
        assert_eq!(mix(1, 0), 0x77F4_98C8);
        assert_eq!(mix(42, 7), 0xD27C_6D24);
    }

    #[test]
    fn test_unit_float_range() {
        for index in 0..10_000 {
            let v = unit_float(99, index);
            assert!((0.0..1.0).contains(&v), "draw {index} out of range: {v}");
        }
    }

    #[test]
    fn test_unit_float_mean() {
        let n = 10_000;
        let mean: f64 = (0..n).map(|i| unit_float(2024, i)).sum::<f64>() / f64::from(n);
        assert!((mean - 0.5).abs() < 0.01, "mean drifted: {mean}");
    }

    #[test]
    fn test_seed_changes_sequence() {
        let a: Vec<u32> = (0..16).map(|i| mix(1, i)).collect();
        let b: Vec<u32> = (0..16).map(|i| mix(2, i)).collect();
        assert_ne!(a, b);
    }
}
