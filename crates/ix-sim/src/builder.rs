//! Fluent builder for constructing an [`IntersectionSim`].

use ix_core::{SimParams, SimRng};

use crate::{IntersectionSim, SimResult};

/// Fluent builder for [`IntersectionSim`].
///
/// # Required inputs
///
/// - [`SimParams`] — seed, stop time, phase timings, arrival distributions,
///   yellow-advance percentage
///
/// # Optional inputs (have defaults)
///
/// | Method      | Default                          |
/// |-------------|----------------------------------|
/// | `.rng(r)`   | `SimRng::new(params.seed)`       |
///
/// # Example
///
/// ```rust,ignore
/// let params = load_params_file(Path::new("params.txt"))?;
/// let mut sim = SimBuilder::new(params).build()?;
/// let stats = sim.run(&mut LogNarrator);
/// println!("{stats}");
/// ```
pub struct SimBuilder {
    params: SimParams,
    rng:    Option<SimRng>,
}

impl SimBuilder {
    pub fn new(params: SimParams) -> Self {
        Self { params, rng: None }
    }

    /// Supply the random source explicitly instead of seeding one from
    /// `params.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the parameters and return an engine in the initial state
    /// (green east-west, time 0, nothing scheduled).
    ///
    /// Fails with [`SimError::SetupInvalid`][crate::SimError::SetupInvalid]
    /// if any parameter is out of range; no engine exists for a bad setup.
    pub fn build(self) -> SimResult<IntersectionSim> {
        self.params.validate()?;
        let rng = self.rng.unwrap_or_else(|| SimRng::new(self.params.seed));
        Ok(IntersectionSim::new(self.params, rng))
    }
}
