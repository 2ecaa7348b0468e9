use serde::{Deserialize, Serialize};

/// settings shared by every step of a run. built once from the pipeline
/// configuration and passed by reference, never modified during a run.
///
/// distances are in the units of the (projected) input coordinates, which
/// are expected to be meters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProcessingContext {
    /// distance under which a point touches a line, two vertices coincide,
    /// or two segment endpoints are joined.
    pub touch_tolerance: f64,
    /// distance under which two junction points share one location.
    pub coincidence_tolerance: f64,
    /// run the best-effort ramp/local crossing recovery pass.
    pub recovery_pass: bool,
    /// ramps with ids starting with any of these prefixes are skipped by the
    /// recovery pass, e.g. sources where ramps are known to end on local roads.
    pub recovery_excluded_prefixes: Vec<String>,
    /// classify records in parallel
    pub parallelize: bool,
}

impl ProcessingContext {
    pub const DEFAULT_TOUCH_TOLERANCE: f64 = 0.01;
    pub const DEFAULT_COINCIDENCE_TOLERANCE: f64 = 5.0;
}

impl Default for ProcessingContext {
    fn default() -> Self {
        Self {
            touch_tolerance: Self::DEFAULT_TOUCH_TOLERANCE,
            coincidence_tolerance: Self::DEFAULT_COINCIDENCE_TOLERANCE,
            recovery_pass: true,
            recovery_excluded_prefixes: vec![],
            parallelize: true,
        }
    }
}
