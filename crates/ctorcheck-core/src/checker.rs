//! The parity checker
//!
//! One stateless pass per check: count parity, mock synthesis, factory
//! invocation, field coverage. Legacy call shapes run a parallel pass
//! using literal argument sets and a wider exclusion list, and must emit
//! a deprecation notice.

use crate::coverage::verify_field_coverage;
use crate::error::{CheckError, CheckResult};
use crate::factory::ProductFactory;
use ctorcheck_mock::{MockArgumentSet, MockSynthesizer, StubRegistry};
use ctorcheck_schema::diff;
use serde::{Deserialize, Serialize};

/// Checker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Position of the configuration/options parameter, exempt from
    /// coverage because the factory consumes it without storing the exact
    /// instance
    pub options_position: usize,

    /// Positions exempt from coverage under legacy call shapes
    ///
    /// Encoded as fixed numeric offsets (by convention `[0, 5]`: the
    /// leading slot and the deprecated raw-config slot). If the legacy
    /// signature ever changes these offsets become silently wrong; they
    /// live here so there is exactly one place to update.
    pub legacy_excluded_positions: Vec<usize>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            options_position: 0,
            legacy_excluded_positions: vec![0, 5],
        }
    }
}

impl CheckerConfig {
    /// Default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the options position
    #[inline]
    #[must_use]
    pub fn with_options_position(mut self, position: usize) -> Self {
        self.options_position = position;
        self
    }

    /// Override the legacy exclusion positions
    #[inline]
    #[must_use]
    pub fn with_legacy_excluded_positions(mut self, positions: Vec<usize>) -> Self {
        self.legacy_excluded_positions = positions;
        self
    }
}

/// Outcome of one successful check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Name of the checked scenario (factory owner, or legacy set name)
    pub scenario: String,

    /// Declared factory parameter count
    pub factory_params: usize,

    /// Declared product parameter count
    pub product_params: usize,

    /// How many arguments were confirmed stored in the product
    pub covered: usize,

    /// How many positions were exempt from coverage
    pub excluded: usize,

    /// Deprecation notices the factory emitted
    pub deprecations: Vec<String>,
}

/// A named historical argument ordering the factory must keep accepting
#[derive(Debug)]
pub struct LegacyArgSet {
    /// Scenario name, used in reports and diagnostics
    pub name: String,

    /// Literal argument values for the legacy call shape
    pub args: MockArgumentSet,
}

impl LegacyArgSet {
    /// Create a named legacy argument set
    #[must_use]
    pub fn new(name: impl Into<String>, args: MockArgumentSet) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// Stateless constructor-parity checker
#[derive(Debug, Clone, Default)]
pub struct ParityChecker {
    config: CheckerConfig,
}

impl ParityChecker {
    /// Checker with the default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checker with an explicit configuration
    #[inline]
    #[must_use]
    pub fn with_config(config: CheckerConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Run the full check against a factory
    ///
    /// Count parity, then synthesis, then invocation, then coverage with
    /// the options position exempt. Any failure aborts the pass.
    ///
    /// # Errors
    /// The first [`CheckError`] encountered; nothing is retried.
    pub fn run<F: ProductFactory>(
        &self,
        factory: &F,
        registry: &StubRegistry,
    ) -> CheckResult<CheckReport> {
        let factory_schema = factory.factory_schema();
        let product_schema = factory.product_schema();
        tracing::info!(
            factory = factory_schema.owner(),
            product = product_schema.owner(),
            "running constructor parity check"
        );

        diff::check_count_parity(factory_schema, product_schema)?;

        let mut synthesizer = MockSynthesizer::new(registry);
        let mocks = synthesizer.synthesize(factory_schema)?;

        let construction = factory.create(&mocks)?;
        for notice in &construction.deprecations {
            tracing::warn!(notice, "deprecation notice during construction");
        }

        let excluded = [self.config.options_position];
        verify_field_coverage(&mocks, &construction.fields, &excluded)?;

        let excluded_count = excluded.iter().filter(|&&p| p < mocks.len()).count();
        let report = CheckReport {
            scenario: factory_schema.owner().to_string(),
            factory_params: factory_schema.len(),
            product_params: product_schema.len(),
            covered: mocks.len() - excluded_count,
            excluded: excluded_count,
            deprecations: construction.deprecations,
        };
        tracing::info!(
            scenario = %report.scenario,
            covered = report.covered,
            "constructor parity check passed"
        );
        Ok(report)
    }

    /// Check every supported historical call shape
    ///
    /// Each set is invoked through the factory's legacy entry point with
    /// its literal values. The shape must emit a deprecation notice, and
    /// coverage must hold with the legacy exclusion positions.
    ///
    /// # Errors
    /// Fails on the first set that constructs incorrectly, emits no
    /// deprecation notice, or leaves a non-excluded argument uncovered.
    pub fn check_legacy_construction<F: ProductFactory>(
        &self,
        factory: &F,
        arg_sets: Vec<LegacyArgSet>,
    ) -> CheckResult<Vec<CheckReport>> {
        let mut reports = Vec::with_capacity(arg_sets.len());

        for set in arg_sets {
            tracing::info!(scenario = %set.name, "running legacy construction check");
            let construction = factory.create_legacy(&set.args)?;

            if construction.deprecations.is_empty() {
                return Err(CheckError::MissingDeprecationNotice {
                    scenario: set.name,
                });
            }
            for notice in &construction.deprecations {
                tracing::warn!(scenario = %set.name, notice, "expected deprecation notice");
            }

            verify_field_coverage(
                &set.args,
                &construction.fields,
                &self.config.legacy_excluded_positions,
            )?;

            let excluded = self
                .config
                .legacy_excluded_positions
                .iter()
                .filter(|&&p| p < set.args.len())
                .count();
            reports.push(CheckReport {
                scenario: set.name,
                factory_params: factory.factory_schema().len(),
                product_params: factory.product_schema().len(),
                covered: set.args.len() - excluded,
                excluded,
                deprecations: construction.deprecations,
            });
        }

        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_encode_legacy_offsets() {
        let config = CheckerConfig::default();
        assert_eq!(config.options_position, 0);
        assert_eq!(config.legacy_excluded_positions, vec![0, 5]);
    }

    #[test]
    fn config_builder_overrides() {
        let config = CheckerConfig::new()
            .with_options_position(1)
            .with_legacy_excluded_positions(vec![1, 4]);
        assert_eq!(config.options_position, 1);
        assert_eq!(config.legacy_excluded_positions, vec![1, 4]);
    }

    #[test]
    fn config_serde_round_trip() {
        let config = CheckerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: CheckerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
