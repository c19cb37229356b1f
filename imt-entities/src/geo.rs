/// A WGS84 position in decimal degrees.
///
/// The default value `(0.0, 0.0)` doubles as the sentinel for
/// "no coordinate data available" in enriched views.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}
