//! Camera cutout overlay geometry, in raster pixels.

use crate::model::{self, AccessoryOffset, PhysicalModel, PlaceholderStyle};
use crate::units::mm_to_px;

/// Flash diameter relative to a lens.
pub const FLASH_SIZE_RATIO: f64 = 0.6;
/// Laser emitter diameter relative to a lens.
pub const LASER_SIZE_RATIO: f64 = 0.4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayRole {
    Lens,
    Flash,
    Laser,
}

impl OverlayRole {
    pub fn css_class(&self) -> &'static str {
        match self {
            OverlayRole::Lens => "camera-lens",
            OverlayRole::Flash => "camera-flash",
            OverlayRole::Laser => "camera-laser",
        }
    }
}

/// One circular element of the overlay. Positions may be fractional.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayElement {
    pub role: OverlayRole,
    pub width_px: f64,
    pub height_px: f64,
    pub left_px: f64,
    pub top_px: f64,
}

impl OverlayElement {
    fn circle(role: OverlayRole, diameter: f64, left_px: f64, top_px: f64) -> Self {
        Self {
            role,
            width_px: diameter,
            height_px: diameter,
            left_px,
            top_px,
        }
    }

    /// Same element mapped onto a preview drawn at `factor` times raster size.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            role: self.role,
            width_px: self.width_px * factor,
            height_px: self.height_px * factor,
            left_px: self.left_px * factor,
            top_px: self.top_px * factor,
        }
    }
}

/// How the overlay for a model is produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayStrategy {
    /// Elements derived from measured camera geometry.
    Precise(PhysicalModel),
    /// Fixed decoration left to the stylesheet.
    Styled(PlaceholderStyle),
}

impl OverlayStrategy {
    pub fn for_key(key: &str) -> Self {
        let physical = model::lookup(key);
        if physical.camera.is_some() {
            OverlayStrategy::Precise(physical)
        } else {
            OverlayStrategy::Styled(model::placeholder_for(key))
        }
    }

    pub fn elements(&self) -> Vec<OverlayElement> {
        match self {
            OverlayStrategy::Precise(physical) => build_overlay(physical),
            OverlayStrategy::Styled(_) => Vec::new(),
        }
    }
}

/// Lenses top to bottom, then flash, then laser. Empty for models without camera geometry.
pub fn build_overlay(physical: &PhysicalModel) -> Vec<OverlayElement> {
    let Some(cam) = physical.camera else {
        return Vec::new();
    };
    let lens = mm_to_px(cam.lens_diameter_mm);
    let top = mm_to_px(cam.top_offset_mm);
    let left = mm_to_px(cam.left_offset_mm);
    let gap = mm_to_px(cam.vertical_gap_mm);
    let pitch = lens + gap;

    let mut out = Vec::with_capacity(cam.lens_count as usize + 2);
    for i in 0..cam.lens_count {
        out.push(OverlayElement::circle(
            OverlayRole::Lens,
            lens,
            left,
            top + i as f64 * pitch,
        ));
    }
    let accessory = |role, ratio: f64, offset: AccessoryOffset| {
        OverlayElement::circle(
            role,
            lens * ratio,
            left + mm_to_px(offset.dx_mm),
            top + offset.dy_index as f64 * pitch,
        )
    };
    if let Some(flash) = cam.flash_offset {
        out.push(accessory(OverlayRole::Flash, FLASH_SIZE_RATIO, flash));
    }
    if let Some(laser) = cam.laser_offset {
        out.push(accessory(OverlayRole::Laser, LASER_SIZE_RATIO, laser));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::lookup;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn count(elements: &[OverlayElement], role: OverlayRole) -> usize {
        elements.iter().filter(|e| e.role == role).count()
    }

    #[test]
    fn s23_ultra_has_four_lenses_flash_and_laser() {
        let els = build_overlay(&lookup("s23-ultra"));
        assert_eq!(els.len(), 6);
        assert_eq!(count(&els, OverlayRole::Lens), 4);
        assert_eq!(count(&els, OverlayRole::Flash), 1);
        assert_eq!(count(&els, OverlayRole::Laser), 1);

        let lenses: Vec<_> = els.iter().filter(|e| e.role == OverlayRole::Lens).collect();
        for (i, lens) in lenses.iter().enumerate() {
            let expected = mm_to_px(22.0) + i as f64 * (mm_to_px(12.0) + mm_to_px(15.0));
            assert!(close(lens.top_px, expected), "lens {i}");
            assert!(close(lens.left_px, mm_to_px(12.0)));
            assert!(close(lens.width_px, mm_to_px(12.0)));
            assert_eq!(lens.width_px, lens.height_px);
        }
    }

    #[test]
    fn accessories_follow_their_lens_rows() {
        let pitch = mm_to_px(12.0) + mm_to_px(15.0);

        let s23 = build_overlay(&lookup("s23-ultra"));
        let flash = s23.iter().find(|e| e.role == OverlayRole::Flash).unwrap();
        let laser = s23.iter().find(|e| e.role == OverlayRole::Laser).unwrap();
        assert!(close(flash.top_px, mm_to_px(22.0) + pitch));
        assert!(close(flash.left_px, mm_to_px(12.0) + mm_to_px(18.0)));
        assert!(close(flash.width_px, mm_to_px(12.0) * 0.6));
        assert!(close(laser.top_px, mm_to_px(22.0) + 2.0 * pitch));
        assert!(close(laser.width_px, mm_to_px(12.0) * 0.4));

        let s24 = build_overlay(&lookup("s24-ultra"));
        let flash = s24.iter().find(|e| e.role == OverlayRole::Flash).unwrap();
        assert!(close(flash.top_px, mm_to_px(21.0)));
        assert!(close(flash.left_px, mm_to_px(13.0) + mm_to_px(18.0)));
    }

    #[test]
    fn models_without_geometry_produce_nothing() {
        for key in ["s23", "note-20", "iphone-15", "nope"] {
            assert!(build_overlay(&lookup(key)).is_empty());
            assert!(OverlayStrategy::for_key(key).elements().is_empty());
        }
    }

    #[test]
    fn strategy_picks_by_model() {
        assert!(matches!(
            OverlayStrategy::for_key("s24-ultra"),
            OverlayStrategy::Precise(_)
        ));
        assert_eq!(
            OverlayStrategy::for_key("iphone-13"),
            OverlayStrategy::Styled(PlaceholderStyle::Island)
        );
        assert_eq!(
            OverlayStrategy::for_key("unknown"),
            OverlayStrategy::Styled(PlaceholderStyle::None)
        );
    }

    #[test]
    fn scaling_maps_every_dimension() {
        let el = build_overlay(&lookup("s23-ultra"))[1];
        let s = el.scaled(0.5);
        assert!(close(s.top_px, el.top_px * 0.5));
        assert!(close(s.left_px, el.left_px * 0.5));
        assert!(close(s.width_px, el.width_px * 0.5));
        assert_eq!(s.role, el.role);
    }
}
