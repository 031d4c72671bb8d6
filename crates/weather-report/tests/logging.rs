// File: crates/weather-report/tests/logging.rs
// Purpose: Verbosity flag maps onto the default tracing filter.

use weather_report::logging::default_directives;

#[test]
fn verbosity_levels() {
    assert_eq!(default_directives(0), "weather_report=info,trend_core=info");
    assert_eq!(default_directives(1), "weather_report=debug,trend_core=debug");
    assert_eq!(default_directives(5), "weather_report=trace,trend_core=trace");
}
