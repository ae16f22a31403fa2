//! Warm-up/measurement schedules for the benchmark targets.
//!
//! The original suite configured its harness through per-class annotations.
//! Here each benchmark class gets an explicit [`MeasurementProfile`] constant
//! instead, applied to a criterion group by the shared bench-side helper.
//! Heavier timed regions get longer budgets; the sample count stays at the
//! harness minimum because a single invocation of the large workloads already
//! runs for a noticeable fraction of a second.

use std::time::Duration;

use crate::error::ConfigError;

/// Smallest sample count the harness accepts per measurement.
pub const MIN_SAMPLE_SIZE: usize = 10;

/// Warm-up and measurement schedule for one benchmark class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementProfile {
    /// Time spent reaching steady state before recording begins.
    pub warm_up: Duration,
    /// Total recording budget per benchmark.
    pub measurement: Duration,
    /// Number of samples collected within the measurement budget.
    pub sample_size: usize,
}

impl MeasurementProfile {
    /// Validates and builds a profile.
    ///
    /// Both durations must be non-zero and `sample_size` must be at least
    /// [`MIN_SAMPLE_SIZE`]; the harness rejects anything below these bounds
    /// at run time, so they are checked here instead.
    pub fn try_new(
        warm_up: Duration,
        measurement: Duration,
        sample_size: usize,
    ) -> Result<Self, ConfigError> {
        if warm_up.is_zero() {
            return Err(ConfigError::new("warm-up time must be non-zero"));
        }
        if measurement.is_zero() {
            return Err(ConfigError::new("measurement time must be non-zero"));
        }
        if sample_size < MIN_SAMPLE_SIZE {
            return Err(ConfigError::new(format!(
                "sample size must be at least {MIN_SAMPLE_SIZE}, got {sample_size}"
            )));
        }
        Ok(Self {
            warm_up,
            measurement,
            sample_size,
        })
    }
}

/// Insert workloads: short regions, short schedule.
pub const INSERT: MeasurementProfile = MeasurementProfile {
    warm_up: Duration::from_millis(100),
    measurement: Duration::from_millis(500),
    sample_size: MIN_SAMPLE_SIZE,
};

/// Membership-probe workloads: ten million probes per invocation.
pub const CONTAINS: MeasurementProfile = MeasurementProfile {
    warm_up: Duration::from_secs(2),
    measurement: Duration::from_secs(10),
    sample_size: MIN_SAMPLE_SIZE,
};

/// Sorted-traversal workloads: up to a million elements per invocation.
pub const SORTED_SUM: MeasurementProfile = MeasurementProfile {
    warm_up: Duration::from_secs(1),
    measurement: Duration::from_secs(10),
    sample_size: MIN_SAMPLE_SIZE,
};

/// Combined insert/probe/traversal workloads.
pub const COMBINED: MeasurementProfile = MeasurementProfile {
    warm_up: Duration::from_millis(100),
    measurement: Duration::from_millis(250),
    sample_size: MIN_SAMPLE_SIZE,
};
