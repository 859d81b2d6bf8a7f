// ABOUTME: Token pipeline turning raw JSON text into stylesheet variable blocks
// ABOUTME: Composes JSON parsing, schema validation and the two-pass transformer

pub mod color;
pub mod error;
pub mod normalize;
pub mod schema;
pub mod transform;


// Color exports
pub use color::{HslComponents, hex_to_hsl, hsl_to_rgb, parse_hex, rgb_to_hsl};

// Error exports
pub use error::{ColorError, ConvertError, Result, TransformError, ValidationError};

// Pipeline stage exports
pub use normalize::normalize_key;
pub use schema::{Schema, TOKEN_DOCUMENT, validate};
pub use transform::{AliasMaps, BaseVariables, Theme, VariableMap, transform};

use tokenvars_logging::{debug, instrument};
use tokenvars_types::{ConvertedTokens, TokenDocument};

/// Parse and validate a token document without transforming it.
#[instrument(level = "debug", skip(text), fields(bytes = text.len()))]
pub fn parse_document(text: &str) -> Result<TokenDocument> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let document = validate(&value)?;
    debug!(
        colors = document.color_set().len(),
        light = document.color_tokens.light.len(),
        dark = document.color_tokens.dark.len(),
        "Token document validated"
    );
    Ok(document)
}

/// Run the full pipeline: parse, validate, transform.
pub fn convert(text: &str) -> Result<ConvertedTokens> {
    let document = parse_document(text)?;
    Ok(transform(&document)?)
}
