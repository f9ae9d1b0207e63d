//! Per-record synthesis driven by a fixed configuration.

use log::trace;

use crate::config::SynthesisConfig;
use crate::error::Result;
use crate::matrix::{SubMatrix, TravelTimeMatrix};
use crate::models::Demand;

use super::{synthesize_interval, synthesize_split};

/// How an edge is augmented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Interval insertion on every edge.
    Breaks,
    /// Interval insertion only on edges longer than the interval.
    Refine,
    /// Midpoint split only on edges longer than the interval.
    Midpoint,
}

/// Turns demand records into sub-matrices against a global matrix.
///
/// Every record is numbered from the same starting identifier; the
/// aggregator moves each sub-matrix to fresh identifiers when merging.
///
/// # Examples
///
/// ```
/// use u_breaks::config::SynthesisConfig;
/// use u_breaks::matrix::TravelTimeMatrix;
/// use u_breaks::models::DemandRecord;
/// use u_breaks::synthesis::{EdgeSynthesizer, Strategy};
///
/// let tm = TravelTimeMatrix::from_rows(vec![
///     vec![Some(0.0), Some(150.0)],
///     vec![Some(150.0), Some(0.0)],
/// ])
/// .unwrap();
/// let synth = EdgeSynthesizer::new(SynthesisConfig::breaks(), Strategy::Breaks);
/// let sub = synth.synthesize(&tm, &DemandRecord::new(0, 1)).unwrap();
/// assert_eq!(sub.synthetic_nodes().len(), 2);
/// assert_eq!(sub.get(0, 2), Some(60.0));
/// ```
#[derive(Debug, Clone)]
pub struct EdgeSynthesizer {
    config: SynthesisConfig,
    strategy: Strategy,
}

impl EdgeSynthesizer {
    /// Creates a synthesizer with the given options and strategy.
    pub fn new(config: SynthesisConfig, strategy: Strategy) -> Self {
        Self { config, strategy }
    }

    /// Hourly breaks on every edge.
    pub fn breaks() -> Self {
        Self::new(SynthesisConfig::breaks(), Strategy::Breaks)
    }

    /// Ten-hour refinement of long edges.
    pub fn refine() -> Self {
        Self::new(SynthesisConfig::coarse(), Strategy::Refine)
    }

    /// Midpoint split of edges longer than ten hours.
    pub fn midpoint() -> Self {
        Self::new(SynthesisConfig::coarse(), Strategy::Midpoint)
    }

    /// Synthesis options.
    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// How edges are augmented.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Synthesizes the sub-matrix for one record.
    ///
    /// The edge weight is read from `matrix`; a missing edge fails with
    /// [`BreakError::Lookup`](crate::error::BreakError::Lookup). A starting
    /// node override that lands on the record's endpoints fails with
    /// [`BreakError::Configuration`](crate::error::BreakError::Configuration).
    pub fn synthesize<D: Demand>(&self, matrix: &TravelTimeMatrix, record: &D) -> Result<SubMatrix> {
        self.config.validate()?;
        let (o, d) = (record.origin(), record.destination());
        let tt = matrix.travel_time(o, d)?;
        let start = self.config.starting_node(matrix);
        let interval = self.config.interval_length;

        match self.strategy {
            Strategy::Breaks => {
                synthesize_interval(o, d, tt, start, interval, self.config.max_nodes_per_edge)
            }
            Strategy::Refine | Strategy::Midpoint if tt <= interval => {
                trace!("edge {o} -> {d} ({tt} min) within {interval} min, left as is");
                Ok(SubMatrix::new())
            }
            Strategy::Refine => {
                synthesize_interval(o, d, tt, start, interval, self.config.max_nodes_per_edge)
            }
            Strategy::Midpoint => synthesize_split(o, d, tt, start),
        }
    }

    /// Synthesizes every record, stopping at the first failure.
    pub fn synthesize_all<D: Demand>(
        &self,
        matrix: &TravelTimeMatrix,
        records: &[D],
    ) -> Result<Vec<SubMatrix>> {
        records
            .iter()
            .map(|r| self.synthesize(matrix, r))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BreakError;
    use crate::models::DemandRecord;

    fn sample() -> TravelTimeMatrix {
        TravelTimeMatrix::from_rows(vec![
            vec![Some(0.0), Some(150.0), Some(700.0)],
            vec![Some(150.0), Some(0.0), None],
            vec![Some(650.0), Some(30.0), Some(0.0)],
        ])
        .expect("valid rows")
    }

    #[test]
    fn test_breaks_every_edge() {
        let tm = sample();
        let synth = EdgeSynthesizer::breaks();
        let sub = synth.synthesize(&tm, &DemandRecord::new(0, 1)).expect("valid");
        assert_eq!(sub.synthetic_nodes().iter().copied().collect::<Vec<_>>(), vec![3, 4]);
        let sub = synth.synthesize(&tm, &DemandRecord::new(2, 1)).expect("valid");
        assert!(sub.is_trivial());
    }

    #[test]
    fn test_same_start_for_every_record() {
        let tm = sample();
        let subs = EdgeSynthesizer::breaks()
            .synthesize_all(&tm, &[DemandRecord::new(0, 1), DemandRecord::new(1, 0)])
            .expect("valid");
        assert_eq!(subs.len(), 2);
        assert!(subs.iter().all(|s| s.is_synthetic(3)));
    }

    #[test]
    fn test_refine_skips_short_edges() {
        let tm = sample();
        let synth = EdgeSynthesizer::refine();
        assert_eq!(
            synth.synthesize(&tm, &DemandRecord::new(0, 1)).expect("valid"),
            SubMatrix::new()
        );
        let sub = synth.synthesize(&tm, &DemandRecord::new(0, 2)).expect("valid");
        assert_eq!(sub.synthetic_nodes().len(), 1);
        assert_eq!(sub.get(0, 3), Some(600.0));
        assert_eq!(sub.get(3, 2), Some(100.0));
    }

    #[test]
    fn test_midpoint() {
        let tm = sample();
        let synth = EdgeSynthesizer::midpoint();
        let sub = synth.synthesize(&tm, &DemandRecord::new(2, 0)).expect("valid");
        assert_eq!(sub.get(2, 3), Some(325.0));
        assert_eq!(sub.get(3, 0), Some(325.0));
        assert!(synth
            .synthesize(&tm, &DemandRecord::new(2, 1))
            .expect("valid")
            .is_trivial());
    }

    #[test]
    fn test_starting_node_override() {
        let tm = sample();
        let synth = EdgeSynthesizer::new(
            SynthesisConfig::breaks().with_starting_node(50),
            Strategy::Breaks,
        );
        let sub = synth.synthesize(&tm, &DemandRecord::new(0, 1)).expect("valid");
        assert!(sub.is_synthetic(50));
        assert!(sub.is_synthetic(51));
    }

    #[test]
    fn test_starting_node_on_endpoint() {
        let tm = sample();
        let synth = EdgeSynthesizer::new(
            SynthesisConfig::coarse().with_starting_node(2),
            Strategy::Midpoint,
        );
        assert!(matches!(
            synth.synthesize(&tm, &DemandRecord::new(2, 0)),
            Err(BreakError::Configuration(_))
        ));
    }

    #[test]
    fn test_missing_edge() {
        let tm = sample();
        let err = EdgeSynthesizer::breaks().synthesize_all(
            &tm,
            &[DemandRecord::new(0, 1), DemandRecord::new(1, 2)],
        );
        assert_eq!(err, Err(BreakError::Lookup { from: 1, to: 2 }));
    }

    #[test]
    fn test_invalid_config() {
        let tm = sample();
        let synth = EdgeSynthesizer::new(
            SynthesisConfig::breaks().with_interval_length(-1.0),
            Strategy::Refine,
        );
        assert!(matches!(
            synth.synthesize(&tm, &DemandRecord::new(0, 1)),
            Err(BreakError::Configuration(_))
        ));
    }
}
