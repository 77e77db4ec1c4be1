//! # plotgen RNG
//!
//! Reproducible randomness for procedural buildings.
//!
//! Every draw is a pure function of `(seed, draw_index)`, so a caller can
//! re-derive the exact same sequence for a given seed no matter what other
//! draws happened around it. Substreams nest through an explicit stack owned
//! by [`RandomContext`].
//!
//! ## Usage
//!
//! ```rust
//! use plotgen_rng::RandomContext;
//!
//! let mut rng = RandomContext::new(42);
//! let outer = rng.value();
//!
//! let first = {
//!     let mut lod = rng.substream(7);
//!     lod.value()
//! };
//! let again = rng.substream(7).value();
//! assert_eq!(first, again);
//! assert!((0.0..1.0).contains(&outer));
//! ```

pub mod hash;
pub mod stream;
pub mod weighted;

pub use stream::{RandomContext, RandomState, Substream};
pub use weighted::WeightedSelector;
