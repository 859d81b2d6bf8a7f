// ABOUTME: Pure data types with no cross-crate dependencies
// ABOUTME: Foundation layer for all other tokenvars crates

pub mod color;
pub mod document;
pub mod issue;
pub mod output;

// Re-export commonly used types
pub use color::{Hsl, Rgb};
pub use document::{
    BrandColors, ColorTokens, Conversion, ControlKeys, SingleMode, Spacing, TokenDocument,
    TokenRecord, Typography,
};
pub use issue::{IssueKind, PathSegment, ValidationIssue, ValueKind};
pub use output::ConvertedTokens;
