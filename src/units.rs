//! Millimetre to pixel conversion at the fixed print resolution.

/// Print resolution every raster is produced at.
pub const DPI: f64 = 300.0;
pub const MM_PER_INCH: f64 = 25.4;

/// Converts a physical length to print pixels. Result stays fractional.
pub fn mm_to_px(value_mm: f64) -> f64 {
    value_mm / MM_PER_INCH * DPI
}

pub fn px_to_mm(value_px: f64) -> f64 {
    value_px / DPI * MM_PER_INCH
}

/// Rounds a pixel length half-up to a whole pixel count (raster dimensions).
pub fn round_px(value_px: f64) -> u32 {
    if !value_px.is_finite() || value_px <= 0.0 {
        return 0;
    }
    (value_px + 0.5).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_inch_is_dpi_pixels() {
        assert_eq!(mm_to_px(25.4), 300.0);
        assert_eq!(mm_to_px(0.0), 0.0);
    }

    #[test]
    fn px_to_mm_inverts() {
        let px = mm_to_px(84.0);
        assert!((px_to_mm(px) - 84.0).abs() < 1e-9);
    }

    #[test]
    fn round_px_is_half_up() {
        assert_eq!(round_px(992.126), 992);
        assert_eq!(round_px(1948.5), 1949);
        assert_eq!(round_px(1003.94), 1004);
        assert_eq!(round_px(-3.0), 0);
        assert_eq!(round_px(f64::NAN), 0);
    }
}
