//! Grid constants and runtime configuration defaults

// Default region: the conterminous United States
/// Default western edge in degrees longitude
pub const DEFAULT_WEST: f64 = -125.0;
/// Default southern edge in degrees latitude
pub const DEFAULT_SOUTH: f64 = 24.0;
/// Default eastern edge in degrees longitude
pub const DEFAULT_EAST: f64 = -66.5;
/// Default northern edge in degrees latitude
pub const DEFAULT_NORTH: f64 = 49.5;

/// Default hexagon side length in kilometers
pub const DEFAULT_CELL_KM: f64 = 75.0;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u32 = 42;

/// Coordinate reference system tag stamped onto every exported collection
pub const WGS84_CRS_URN: &str = "urn:ogc:def:crs:EPSG::4326";

// Plausible value ranges the synthesized indicators are clamped to
/// Fine particulate concentration bounds (µg/m³)
pub const PM_RANGE: (f64, f64) = (3.5, 14.0);
/// Ozone concentration bounds (ppm-scaled)
pub const OZONE_RANGE: (f64, f64) = (0.0, 2.5);
/// Adult asthma prevalence bounds (percent)
pub const ASTHMA_RANGE: (f64, f64) = (4.0, 20.0);
/// Social vulnerability score bounds
pub const SVM_RANGE: (f64, f64) = (0.0, 10.0);
/// Cell population bounds (thousands)
pub const TOTPOP_RANGE: (f64, f64) = (10.0, 1_200.0);

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
