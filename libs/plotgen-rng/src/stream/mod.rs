//! # Random Substreams
//!
//! [`RandomContext`] owns the active `(seed, draw_index)` pair and a LIFO
//! stack of saved states. Pushing a seeded state starts a reproducible
//! substream; popping resumes the enclosing stream exactly where it stopped.
//!
//! ```text
//! outer: seed=42 idx=3 ──push_seeded(7)──► seed=7 idx=0 … idx=n
//!                     ◄──────pop_state────┘
//! outer continues at idx=3
//! ```
//!
//! The stack must balance. [`Substream`] guards pop automatically; manual
//! `pop_state` calls without a matching push are logged and ignored, and a
//! context dropped with saved states left on its stack drains them with a
//! warning.

use glam::{DVec2, DVec3};
use std::f64::consts::TAU;
use std::ops::{Deref, DerefMut};
use tracing::{trace, warn};

use crate::hash;

/// A position in a random stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RandomState {
    /// Stream seed.
    pub seed: u32,
    /// Number of draws already taken from this seed.
    pub draw_index: u32,
}

impl RandomState {
    /// Creates a state at the beginning of the stream for `seed`.
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            draw_index: 0,
        }
    }

    /// Returns the value the next draw will produce, without consuming it.
    #[inline]
    pub fn peek(&self) -> f64 {
        hash::unit_float(self.seed, self.draw_index)
    }
}

/// Deterministic random stream with nestable substreams.
///
/// Not thread-safe by construction: a context is owned by one generation
/// call and passed down by `&mut`.
///
/// # Example
///
/// ```rust
/// use plotgen_rng::RandomContext;
///
/// let mut rng = RandomContext::new(1);
/// rng.push_state();
/// rng.push_seeded(7);
/// let a = rng.value();
/// rng.pop_state();
/// let b = rng.value();
/// rng.pop_state();
///
/// rng.push_seeded(7);
/// let c = rng.value();
/// rng.pop_state();
///
/// assert_eq!(a, c);
/// assert_eq!(b, RandomContext::new(1).value());
/// ```
#[derive(Debug)]
pub struct RandomContext {
    state: RandomState,
    stack: Vec<RandomState>,
}

impl Default for RandomContext {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RandomContext {
    /// Creates a context positioned at the start of `seed`'s stream.
    pub fn new(seed: u32) -> Self {
        Self {
            state: RandomState::new(seed),
            stack: Vec::new(),
        }
    }

    /// Returns the active stream position.
    #[inline]
    pub fn state(&self) -> RandomState {
        self.state
    }

    /// Number of saved states on the stack.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    // =========================================================================
    // SCOPING
    // =========================================================================

    /// Saves the active state; the stream continues unchanged.
    pub fn push_state(&mut self) {
        self.stack.push(self.state);
    }

    /// Saves the active state, then switches to the start of `seed`'s stream.
    pub fn push_seeded(&mut self, seed: u32) {
        self.stack.push(self.state);
        self.state = RandomState::new(seed);
        trace!(seed, depth = self.stack.len(), "entered substream");
    }

    /// Restores the most recently saved state.
    ///
    /// Popping an empty stack is a caller bug; it is logged and otherwise
    /// ignored so the active stream is left untouched.
    pub fn pop_state(&mut self) {
        match self.stack.pop() {
            Some(saved) => self.state = saved,
            None => warn!(
                seed = self.state.seed,
                draw_index = self.state.draw_index,
                "pop_state called with an empty random state stack"
            ),
        }
    }

    /// Saves the active state and returns a guard that restores it on drop.
    pub fn scope(&mut self) -> Substream<'_> {
        let depth = self.stack.len();
        self.push_state();
        Substream { ctx: self, depth }
    }

    /// Starts the seeded substream `seed` and returns a guard that resumes
    /// the enclosing stream on drop.
    pub fn substream(&mut self, seed: u32) -> Substream<'_> {
        let depth = self.stack.len();
        self.push_seeded(seed);
        Substream { ctx: self, depth }
    }

    /// Runs `f` inside the seeded substream `seed`.
    pub fn with_substream<T>(&mut self, seed: u32, f: impl FnOnce(&mut RandomContext) -> T) -> T {
        let mut guard = self.substream(seed);
        f(&mut *guard)
    }

    // =========================================================================
    // DRAWS
    // =========================================================================

    /// Draws a float in `[0, 1)`.
    #[inline]
    pub fn value(&mut self) -> f64 {
        let v = self.state.peek();
        self.state.draw_index = self.state.draw_index.wrapping_add(1);
        v
    }

    /// Draws an integer over the full `i32` range.
    #[inline]
    pub fn int_value(&mut self) -> i32 {
        let bits = hash::mix(self.state.seed, self.state.draw_index);
        self.state.draw_index = self.state.draw_index.wrapping_add(1);
        bits as i32
    }

    /// Draws a seed for a child stream; equivalent to `int_value` reinterpreted.
    #[inline]
    pub fn next_seed(&mut self) -> u32 {
        self.int_value() as u32
    }

    /// Draws a float in `[min, max)`.
    #[inline]
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.value()
    }

    /// Draws an integer in `[min, max)`. Returns `min` when the range is
    /// empty; a draw is consumed either way so the stream stays aligned.
    pub fn range_int(&mut self, min: i32, max: i32) -> i32 {
        let v = self.value();
        if max <= min {
            return min;
        }
        let span = i64::from(max) - i64::from(min);
        let offset = ((span as f64) * v).floor() as i64;
        (i64::from(min) + offset.min(span - 1)) as i32
    }

    /// Draws an integer in `[min, max]`.
    pub fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        let v = self.value();
        if max <= min {
            return min;
        }
        let span = i64::from(max) - i64::from(min) + 1;
        let offset = ((span as f64) * v).floor() as i64;
        (i64::from(min) + offset.min(span - 1)) as i32
    }

    /// Returns true with probability `p`.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.value() < p
    }

    /// Draws from a normal distribution (Box-Muller, two draws).
    pub fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.value();
        let u2 = self.value();
        // 1 - u1 lies in (0, 1], keeping ln finite
        let radius = (-2.0 * (1.0 - u1).ln()).sqrt();
        mean + std_dev * radius * (TAU * u2).cos()
    }

    /// Draws a uniformly distributed direction on the unit sphere.
    pub fn unit_vector(&mut self) -> DVec3 {
        let z = self.range(-1.0, 1.0);
        let theta = self.range(0.0, TAU);
        let r = (1.0 - z * z).max(0.0).sqrt();
        DVec3::new(r * theta.cos(), r * theta.sin(), z)
    }

    /// Draws a uniformly distributed direction on the unit circle.
    pub fn unit_vector_2d(&mut self) -> DVec2 {
        let theta = self.range(0.0, TAU);
        DVec2::new(theta.cos(), theta.sin())
    }

    /// Picks one element uniformly. Consumes no draw for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.range_int(0, items.len() as i32) as usize;
        items.get(index)
    }

    /// Shuffles a slice in place (Fisher-Yates, back to front).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.range_inclusive(0, i as i32) as usize;
            items.swap(i, j);
        }
    }
}

impl Drop for RandomContext {
    fn drop(&mut self) {
        if self.stack.is_empty() {
            return;
        }
        warn!(
            depth = self.stack.len(),
            "random state stack not balanced at shutdown; draining"
        );
        while let Some(saved) = self.stack.pop() {
            self.state = saved;
        }
    }
}

/// Scope guard for a pushed random state.
///
/// Dereferences to the owning [`RandomContext`], so guards nest:
///
/// ```rust
/// use plotgen_rng::RandomContext;
///
/// let mut rng = RandomContext::new(3);
/// {
///     let mut building = rng.substream(10);
///     let mut lod = building.substream(11);
///     lod.value();
///     assert_eq!(lod.depth(), 2);
/// }
/// assert_eq!(rng.depth(), 0);
/// ```
#[derive(Debug)]
pub struct Substream<'a> {
    ctx: &'a mut RandomContext,
    depth: usize,
}

impl Deref for Substream<'_> {
    type Target = RandomContext;

    fn deref(&self) -> &RandomContext {
        self.ctx
    }
}

impl DerefMut for Substream<'_> {
    fn deref_mut(&mut self) -> &mut RandomContext {
        self.ctx
    }
}

impl Drop for Substream<'_> {
    fn drop(&mut self) {
        let expected = self.depth + 1;
        let actual = self.ctx.stack.len();
        if actual != expected {
            warn!(
                expected,
                actual, "unbalanced push/pop inside a random substream scope"
            );
        }
        if actual <= self.depth {
            // The guard's own snapshot was already popped by hand
            return;
        }
        while self.ctx.stack.len() > self.depth {
            self.ctx.pop_state();
        }
    }
}
