// ABOUTME: Result of a successful token conversion
// ABOUTME: Three serialized variable blocks ready to be copied into a stylesheet

use serde::Serialize;

/// The three variable blocks produced from one token document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ConvertedTokens {
    /// Base color variables followed by the `--color-<role>` shortcut aliases
    pub base_map: String,
    /// Light theme semantic aliases
    pub light_map: String,
    /// Dark theme semantic aliases
    pub dark_map: String,
}
