//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

// =============================================================================
// SCALING TESTS
// =============================================================================

#[test]
fn test_grid_unit_is_positive() {
    assert!(GRID_UNIT > 0.0);
}

#[test]
fn test_wall_thinner_than_cell() {
    // Walls are laid on cell edges; a wall thicker than half a cell would
    // swallow one-cell wide wings of L and T footprints
    assert!(DEFAULT_WALL_THICKNESS < 0.5);
}

#[test]
fn test_window_fits_in_storey() {
    assert!(DEFAULT_WINDOW_HEIGHT + 2.0 * DEFAULT_WINDOW_BORDER < STOREY_HEIGHT);
}

#[test]
fn test_arch_fits_in_storey() {
    assert!(DEFAULT_ARCH_HEIGHT < STOREY_HEIGHT);
}

// =============================================================================
// CHANNEL TESTS
// =============================================================================

#[test]
fn test_channels_are_distinct() {
    let channels = [CHANNEL_WALL, CHANNEL_ROOF, CHANNEL_TRIM, CHANNEL_GLASS];
    for i in 0..channels.len() {
        for j in (i + 1)..channels.len() {
            assert_ne!(channels[i], channels[j]);
        }
    }
}

// =============================================================================
// GENERATION CONFIG TESTS
// =============================================================================

#[test]
fn test_default_config_is_valid() {
    let cfg = GenerationConfig::default();
    let rebuilt = GenerationConfig::new(
        cfg.grid_unit,
        cfg.detail_levels,
        cfg.min_storeys,
        cfg.max_storeys,
    );
    assert_eq!(rebuilt, Ok(cfg));
}

#[test]
fn test_config_rejects_bad_grid_unit() {
    assert_eq!(
        GenerationConfig::new(0.0, 3, 1, 2).unwrap_err(),
        ConfigError::InvalidGridUnit(0.0)
    );
    assert!(GenerationConfig::new(f64::NAN, 3, 1, 2).is_err());
}

#[test]
fn test_config_rejects_zero_detail_levels() {
    assert_eq!(
        GenerationConfig::new(1.0, 0, 1, 2).unwrap_err(),
        ConfigError::InvalidDetailLevels(0)
    );
}

#[test]
fn test_config_rejects_inverted_storeys() {
    assert_eq!(
        GenerationConfig::new(1.0, 1, 3, 2).unwrap_err(),
        ConfigError::InvalidStoreyRange { min: 3, max: 2 }
    );
    assert!(GenerationConfig::new(1.0, 1, 0, 2).is_err());
}

#[test]
fn test_config_error_display() {
    let message = ConfigError::InvalidGridUnit(-1.0).to_string();
    assert!(message.contains("grid_unit"));
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-EPSILON / 2.0));
    assert!(!approx_zero(0.1));
}

#[test]
fn test_trace_step_limit_covers_perimeter() {
    // Worst-case perimeter of a w x h region is 2 * (w + h) + inner notches,
    // always below the bound
    for (w, h) in [(1, 1), (4, 3), (10, 10), (32, 7)] {
        assert!(trace_step_limit(w, h) >= 2 * (w + h) * 2);
    }
}

#[test]
fn test_detail_thresholds_are_ordered() {
    assert!(MAX_FACADE_DETAIL <= MAX_TRIM_DETAIL);
    assert!(MAX_TRIM_DETAIL < DEFAULT_DETAIL_LEVELS);
}
