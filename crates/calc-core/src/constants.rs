//! Shared numeric and display constants

use std::f64::consts::PI;

/// Significant digits kept by the display formatter
pub const DISPLAY_PRECISION: usize = 10;

/// Maximum number of retained history entries (oldest evicted)
pub const MAX_HISTORY_ITEMS: usize = 50;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// The single error sentinel shown on the display
pub const ERROR_DISPLAY: &str = "Error";
