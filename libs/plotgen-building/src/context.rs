//! # Generation Context
//!
//! Everything a run of building generation shares: the random stream, the
//! validated configuration and the lazily prepared selector tables.

use config::constants::GenerationConfig;
use plotgen_rng::RandomContext;
use std::ops::RangeInclusive;

use crate::error::BuildingResult;
use crate::plan::SelectorTables;

/// State owned by one generation run and passed down by `&mut`.
#[derive(Debug)]
pub struct GenerationContext {
    pub rng: RandomContext,
    pub config: GenerationConfig,
    tables: Option<SelectorTables>,
}

impl GenerationContext {
    pub fn new(seed: u32, config: GenerationConfig) -> Self {
        Self {
            rng: RandomContext::new(seed),
            config,
            tables: None,
        }
    }

    /// Validates the settings before creating the context.
    ///
    /// # Example
    ///
    /// ```rust
    /// use plotgen_building::{BuildingError, GenerationContext};
    ///
    /// assert!(GenerationContext::configured(1, 3.0, 2, 1..=3).is_ok());
    /// assert!(matches!(
    ///     GenerationContext::configured(1, 0.0, 2, 1..=3),
    ///     Err(BuildingError::Config(_))
    /// ));
    /// ```
    pub fn configured(
        seed: u32,
        grid_unit: f64,
        detail_levels: u32,
        storeys: RangeInclusive<u32>,
    ) -> BuildingResult<Self> {
        let config =
            GenerationConfig::new(grid_unit, detail_levels, *storeys.start(), *storeys.end())?;
        Ok(Self::new(seed, config))
    }

    /// Returns true once the selector tables have been prepared.
    pub fn is_initialized(&self) -> bool {
        self.tables.is_some()
    }

    /// Splits the context into the random stream and the selector tables,
    /// preparing the tables on first use.
    pub fn parts(&mut self) -> (&mut RandomContext, &SelectorTables, &GenerationConfig) {
        let tables: &SelectorTables = self.tables.get_or_insert_with(SelectorTables::new);
        (&mut self.rng, tables, &self.config)
    }
}

impl Default for GenerationContext {
    fn default() -> Self {
        Self::new(config::constants::DEFAULT_SEED, GenerationConfig::default())
    }
}
