//! Static catalog of supported phone models.
//! Dimensions are print sizes (bleed included) measured on real devices; keep them literal.

/// Horizontal offset of a flash/laser from the lens column, and the lens row it lines up with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccessoryOffset {
    pub dx_mm: f64,
    /// 0-based lens row the accessory is vertically aligned with.
    pub dy_index: u32,
}

/// Rear camera layout: a single vertical column of equally spaced round lenses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraGeometry {
    pub lens_diameter_mm: f64,
    pub top_offset_mm: f64,
    pub left_offset_mm: f64,
    pub vertical_gap_mm: f64,
    pub lens_count: u32,
    pub laser_offset: Option<AccessoryOffset>,
    pub flash_offset: Option<AccessoryOffset>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalModel {
    pub width_mm: f64,
    pub height_mm: f64,
    pub camera: Option<CameraGeometry>,
}

/// How the preview hints at the camera of a model without precise geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// Fixed-size column of lenses in the top-left corner (Galaxy S line).
    LensColumn {
        lenses: u32,
        lens_px: u32,
        top_px: u32,
        left_px: u32,
        width_px: u32,
        height_px: u32,
    },
    /// Lens cluster laid out by the stylesheet (Note line).
    NoteCluster { lenses: u32 },
    /// Camera island drawn purely by the stylesheet (iPhone line).
    Island,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub model: PhysicalModel,
    pub placeholder: PlaceholderStyle,
}

/// Used for any key the catalog does not know.
pub const DEFAULT_MODEL: PhysicalModel = PhysicalModel {
    width_mm: 80.0,
    height_mm: 165.0,
    camera: None,
};

const GALAXY_COLUMN: PlaceholderStyle = PlaceholderStyle::LensColumn {
    lenses: 3,
    lens_px: 38,
    top_px: 40,
    left_px: 18,
    width_px: 40,
    height_px: 150,
};

const fn plain(width_mm: f64, height_mm: f64) -> PhysicalModel {
    PhysicalModel {
        width_mm,
        height_mm,
        camera: None,
    }
}

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        key: "s23-ultra",
        label: "Galaxy S23 Ultra",
        model: PhysicalModel {
            width_mm: 84.0,
            height_mm: 169.0,
            camera: Some(CameraGeometry {
                lens_diameter_mm: 12.0,
                top_offset_mm: 22.0,
                left_offset_mm: 12.0,
                vertical_gap_mm: 15.0,
                lens_count: 4,
                // right of the third lens
                laser_offset: Some(AccessoryOffset {
                    dx_mm: 18.0,
                    dy_index: 2,
                }),
                // right of the second lens
                flash_offset: Some(AccessoryOffset {
                    dx_mm: 18.0,
                    dy_index: 1,
                }),
            }),
        },
        placeholder: PlaceholderStyle::None,
    },
    CatalogEntry {
        key: "s24-ultra",
        label: "Galaxy S24 Ultra",
        model: PhysicalModel {
            width_mm: 85.0,
            height_mm: 168.0,
            camera: Some(CameraGeometry {
                lens_diameter_mm: 12.0,
                top_offset_mm: 21.0,
                left_offset_mm: 13.0,
                vertical_gap_mm: 15.0,
                lens_count: 4,
                laser_offset: Some(AccessoryOffset {
                    dx_mm: 18.0,
                    dy_index: 2,
                }),
                // top right of the column
                flash_offset: Some(AccessoryOffset {
                    dx_mm: 18.0,
                    dy_index: 0,
                }),
            }),
        },
        placeholder: PlaceholderStyle::None,
    },
    CatalogEntry {
        key: "s23",
        label: "Galaxy S23",
        model: plain(80.0, 165.0),
        placeholder: GALAXY_COLUMN,
    },
    CatalogEntry {
        key: "s24",
        label: "Galaxy S24",
        model: plain(80.0, 165.0),
        placeholder: GALAXY_COLUMN,
    },
    CatalogEntry {
        key: "note-20",
        label: "Galaxy Note 20",
        model: plain(80.0, 165.0),
        placeholder: PlaceholderStyle::NoteCluster { lenses: 3 },
    },
    CatalogEntry {
        key: "iphone-15",
        label: "iPhone 15",
        model: plain(78.0, 165.0),
        placeholder: PlaceholderStyle::Island,
    },
    CatalogEntry {
        key: "iphone-14",
        label: "iPhone 14",
        model: plain(78.0, 164.0),
        placeholder: PlaceholderStyle::Island,
    },
    CatalogEntry {
        key: "iphone-13",
        label: "iPhone 13",
        model: plain(78.0, 163.0),
        placeholder: PlaceholderStyle::Island,
    },
];

pub fn entry(key: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.key == key)
}

pub fn is_known(key: &str) -> bool {
    entry(key).is_some()
}

/// Physical model for `key`, or [`DEFAULT_MODEL`] when the key is unknown.
pub fn lookup(key: &str) -> PhysicalModel {
    entry(key).map(|e| e.model).unwrap_or(DEFAULT_MODEL)
}

pub fn placeholder_for(key: &str) -> PlaceholderStyle {
    entry(key)
        .map(|e| e.placeholder)
        .unwrap_or(PlaceholderStyle::None)
}
