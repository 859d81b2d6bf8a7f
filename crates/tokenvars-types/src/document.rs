// ABOUTME: Strongly-typed design token document produced by schema validation
// ABOUTME: Mirrors the canonical camelCase JSON shape with order-preserving color records

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from a token key to its raw value.
///
/// Iteration order is the declaration order of the source document.
pub type TokenRecord = IndexMap<String, String>;

/// Wrapper for groups that only carry a single `mode1` variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleMode<T> {
    pub mode1: T,
}

/// Validated design token document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDocument {
    pub typography: SingleMode<Typography>,

    /// Palette entries (`primary500`, `neutral150`, ...) mapped to hex colors
    pub color_set: SingleMode<TokenRecord>,

    /// Semantic roles for the light and dark themes
    pub color_tokens: ColorTokens,

    pub brand_colors: SingleMode<BrandColors>,

    pub spacing: SingleMode<Spacing>,

    /// Platform control-key labels, passed through untouched
    pub conversion: Conversion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub font_weight_regular: String,
    pub font_weight_medium: String,
}

/// Semantic role → hex color, one record per theme.
///
/// Both records are expected to share the same key set, but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub light: TokenRecord,
    pub dark: TokenRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandColors {
    pub logo_cerise: String,
    pub logo_fuchsia_blue: String,
    pub logo_picton_blue: String,
    pub logo_sun: String,
}

/// Spacing scale in pixels, plus the shared corner radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    pub xxs: f64,
    pub xs: f64,
    pub s: f64,
    pub m: f64,
    pub l: f64,
    pub xl: f64,
    pub xxl: f64,
    pub xxxl: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub control: ControlKeys,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlKeys {
    pub mac: String,
    pub window: String,
}

impl TokenDocument {
    /// Palette entries in declaration order
    pub fn color_set(&self) -> &TokenRecord {
        &self.color_set.mode1
    }
}
