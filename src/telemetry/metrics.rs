//! Metric definitions

use metrics::{counter, describe_counter};

/// Register metric descriptions and emit initial zero values so exporters
/// list every metric from startup, not just after first use.
pub fn describe_metrics() {
    describe_counter!(
        "flock_permission_checks_total",
        "Route permission checks by decision (allow/unauthenticated/forbidden)"
    );
    describe_counter!(
        "flock_catalog_load_failures_total",
        "Permission catalog loads that fell back to the unavailable snapshot"
    );

    for decision in ["allow", "unauthenticated", "forbidden"] {
        counter!("flock_permission_checks_total", "decision" => decision).absolute(0);
    }
    counter!("flock_catalog_load_failures_total").absolute(0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_metrics_without_recorder() {
        // No recorder installed: must be a no-op, not a panic.
        describe_metrics();
    }
}
