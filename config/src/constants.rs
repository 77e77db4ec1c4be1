//! # Configuration Constants
//!
//! Centralized constants for the plotgen pipeline. All generator defaults,
//! grid scaling, material channels and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Scaling**: Grid unit conversion to world space
//! - **Shape Defaults**: Fallback values for every generator parameter
//! - **Channels**: Material/submesh indices shared by generators and renderers
//! - **Limits**: Safety bounds for tracing and building proportions

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// SCALING CONSTANTS
// =============================================================================

/// World-space length of one grid cell, in meters.
///
/// Generators work in grid units; the placement step multiplies every vertex
/// by this factor after rotation and translation.
///
/// # Example
///
/// ```rust
/// use config::constants::GRID_UNIT;
///
/// let plot_cells = 10.0;
/// let plot_meters = plot_cells * GRID_UNIT;
/// assert_eq!(plot_meters, 30.0);
/// ```
pub const GRID_UNIT: f64 = 3.0;

/// Height of one storey in grid units.
pub const STOREY_HEIGHT: f64 = 1.0;

// =============================================================================
// SHAPE DEFAULTS
// =============================================================================

/// Default wall height (one storey).
pub const DEFAULT_WALL_HEIGHT: f64 = STOREY_HEIGHT;

/// Default wall thickness.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_WALL_THICKNESS, GRID_UNIT};
///
/// // 30cm walls
/// assert!((DEFAULT_WALL_THICKNESS * GRID_UNIT - 0.3).abs() < 1e-9);
/// ```
pub const DEFAULT_WALL_THICKNESS: f64 = 0.1;

/// Default length of shapes that run along the local X axis.
pub const DEFAULT_LENGTH: f64 = 1.0;

/// Default width of planar shapes.
pub const DEFAULT_WIDTH: f64 = 1.0;

/// Default roof rise (vertical distance from eave to ridge).
pub const DEFAULT_ROOF_RISE: f64 = 0.5;

/// Default roof run (horizontal distance from eave to ridge).
pub const DEFAULT_ROOF_RUN: f64 = 0.5;

/// Default roof overhang past the wall line.
pub const DEFAULT_ROOF_OVERHANG: f64 = 0.1;

/// Default roof slab thickness.
pub const DEFAULT_ROOF_THICKNESS: f64 = 0.04;

/// Default number of segments approximating an arch curve.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_ARCH_SEGMENTS, MIN_ARCH_SEGMENTS};
///
/// let requested: Option<u32> = None;
/// let segments = requested.unwrap_or(DEFAULT_ARCH_SEGMENTS).max(MIN_ARCH_SEGMENTS);
/// assert_eq!(segments, 8);
/// ```
pub const DEFAULT_ARCH_SEGMENTS: u32 = 8;

/// An arch needs at least one segment to span its opening.
pub const MIN_ARCH_SEGMENTS: u32 = 1;

/// Default arch opening width.
pub const DEFAULT_ARCH_WIDTH: f64 = 0.5;

/// Default arch opening height, including the curved rise.
pub const DEFAULT_ARCH_HEIGHT: f64 = 0.8;

/// How far a door surround stands out of the wall face.
pub const DEFAULT_DOOR_DEPTH: f64 = 0.05;

/// Default pillar width (diameter of the circumscribed circle).
pub const DEFAULT_PILLAR_WIDTH: f64 = 0.15;

/// Default pillar side count (square pillar).
pub const DEFAULT_PILLAR_SIDES: u32 = 4;

/// Minimum pillar side count for a closed prism.
pub const MIN_PILLAR_SIDES: u32 = 3;

/// Default window opening width.
pub const DEFAULT_WINDOW_WIDTH: f64 = 0.35;

/// Default window opening height.
pub const DEFAULT_WINDOW_HEIGHT: f64 = 0.45;

/// Default window frame border width.
pub const DEFAULT_WINDOW_BORDER: f64 = 0.04;

/// Default window frame depth (how far it protrudes from the wall).
pub const DEFAULT_WINDOW_DEPTH: f64 = 0.03;

/// Default extrusion length for line profiles.
pub const DEFAULT_EXTRUSION: f64 = 1.0;

/// Default parapet height above a flat roof.
pub const DEFAULT_PARAPET_HEIGHT: f64 = 0.12;

// =============================================================================
// MATERIAL CHANNELS
// =============================================================================

/// Submesh channel for wall surfaces.
pub const CHANNEL_WALL: u32 = 0;

/// Submesh channel for roof surfaces.
pub const CHANNEL_ROOF: u32 = 1;

/// Submesh channel for trim (frames, pillars, parapets, arches).
pub const CHANNEL_TRIM: u32 = 2;

/// Submesh channel for glass panes.
pub const CHANNEL_GLASS: u32 = 3;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Multiplier bounding the boundary walk: a trace may take at most
/// `TRACE_STEP_FACTOR * (width + 1) * (height + 1)` unit steps.
pub const TRACE_STEP_FACTOR: usize = 4;

/// Default number of independently generated detail levels per building.
pub const DEFAULT_DETAIL_LEVELS: u32 = 3;

/// Minimum storeys a generated building may have.
pub const DEFAULT_MIN_STOREYS: u32 = 1;

/// Maximum storeys a generated building may have.
pub const DEFAULT_MAX_STOREYS: u32 = 4;

/// Seed used when a caller does not provide one.
pub const DEFAULT_SEED: u32 = 0x5EED_1234;

/// Coarsest detail level that still gets windows and a door.
pub const MAX_FACADE_DETAIL: u32 = 0;

/// Coarsest detail level that still gets corner pillars and parapets.
pub const MAX_TRIM_DETAIL: u32 = 1;

// =============================================================================
// GENERATION CONFIG
// =============================================================================

/// Validated snapshot of the settings shared by a generation run.
///
/// # Examples
/// ```
/// use config::constants::GenerationConfig;
/// let config = GenerationConfig::default();
/// assert!(config.grid_unit > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    /// World-space length of one grid cell.
    pub grid_unit: f64,
    /// Number of detail levels produced per building.
    pub detail_levels: u32,
    /// Lower bound of the storey count draw.
    pub min_storeys: u32,
    /// Upper bound (inclusive) of the storey count draw.
    pub max_storeys: u32,
}

impl GenerationConfig {
    /// Builds a configuration, rejecting values no generator can work with.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GenerationConfig;
    /// let cfg = GenerationConfig::new(2.5, 2, 1, 3).expect("valid config");
    /// assert_eq!(cfg.detail_levels, 2);
    /// ```
    pub fn new(
        grid_unit: f64,
        detail_levels: u32,
        min_storeys: u32,
        max_storeys: u32,
    ) -> Result<Self, ConfigError> {
        if !(grid_unit > 0.0) {
            return Err(ConfigError::InvalidGridUnit(grid_unit));
        }
        if detail_levels == 0 {
            return Err(ConfigError::InvalidDetailLevels(detail_levels));
        }
        if min_storeys == 0 || min_storeys > max_storeys {
            return Err(ConfigError::InvalidStoreyRange {
                min: min_storeys,
                max: max_storeys,
            });
        }
        Ok(Self {
            grid_unit,
            detail_levels,
            min_storeys,
            max_storeys,
        })
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            grid_unit: GRID_UNIT,
            detail_levels: DEFAULT_DETAIL_LEVELS,
            min_storeys: DEFAULT_MIN_STOREYS,
            max_storeys: DEFAULT_MAX_STOREYS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the grid unit is zero, negative or NaN.
    InvalidGridUnit(f64),
    /// Raised when zero detail levels are requested.
    InvalidDetailLevels(u32),
    /// Raised when the storey range is empty or starts at zero.
    InvalidStoreyRange {
        /// Requested minimum.
        min: u32,
        /// Requested maximum.
        max: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGridUnit(value) => {
                write!(f, "grid_unit must be positive: {value}")
            }
            ConfigError::InvalidDetailLevels(value) => {
                write!(f, "detail_levels must be >= 1: {value}")
            }
            ConfigError::InvalidStoreyRange { min, max } => {
                write!(f, "storey range must satisfy 1 <= min <= max: {min}..={max}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Maximum number of unit steps a boundary walk may take on a grid of the
/// given size before it is considered runaway.
///
/// # Example
///
/// ```rust
/// use config::constants::trace_step_limit;
///
/// // A 4x3 grid has a 14-step perimeter, far below the limit
/// assert!(trace_step_limit(4, 3) > 14);
/// ```
#[inline]
pub fn trace_step_limit(width: usize, height: usize) -> usize {
    TRACE_STEP_FACTOR * (width + 1) * (height + 1)
}
