//! Shared configuration for the benchmark targets.

use criterion::BenchmarkGroup;
use criterion::measurement::WallTime;
use setbench::profile::MeasurementProfile;

/// Applies a measurement profile to a criterion group.
pub fn configure(group: &mut BenchmarkGroup<'_, WallTime>, profile: MeasurementProfile) {
    group
        .warm_up_time(profile.warm_up)
        .measurement_time(profile.measurement)
        .sample_size(profile.sample_size);
}
