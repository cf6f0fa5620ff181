//! Unit conversion utilities.
//!
//! WordprocessingML mixes several length units: twips (twentieths of a point)
//! for page geometry and indentation, half-points for font sizes, eighths of
//! a point for border widths and EMUs for drawing extents.

pub const TWIPS_PER_INCH: u32 = 1_440;
pub const EMUS_PER_INCH: i64 = 914_400;

#[inline]
pub fn inches_to_twips(inches: f64) -> u32 {
    (inches * TWIPS_PER_INCH as f64).round() as u32
}

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_conversions() {
        assert_eq!(inches_to_twips(1.0), 1440);
        assert_eq!(inches_to_twips(0.25), 360);
        assert_eq!(inches_to_twips(8.5), 12_240);
        assert_eq!(inches_to_emu(1.0), 914_400);
        assert_eq!(inches_to_emu(1.2), 1_097_280);
    }
}
