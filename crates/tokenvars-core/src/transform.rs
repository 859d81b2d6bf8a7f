// ABOUTME: Two-pass transformer from a validated token document to stylesheet variable blocks
// ABOUTME: Pass one builds base color variables, pass two resolves semantic roles against them

use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use tokenvars_logging::{PerfTimer, debug, info, warn};
use tokenvars_types::{ColorTokens, ConvertedTokens, TokenDocument, TokenRecord};

use crate::color::hex_to_hsl;
use crate::error::TransformError;
use crate::normalize::normalize_key;

pub const SHORTCUT_HEADER: &str = "/* Color Variable With Color Set */";
pub const LIGHT_HEADER: &str = "/* Token Sets Light */";
pub const DARK_HEADER: &str = "/* Token Sets Dark */";

/// Separator between rendered declarations; no trailing separator after the last one
pub const DECLARATION_SEPARATOR: &str = ";\n";

const SLOW_TRANSFORM: Duration = Duration::from_millis(50);

/// Ordered variable name → value declarations.
///
/// Setting an existing name replaces its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMap {
    entries: IndexMap<String, String>,
}

impl VariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// `name: value` declarations joined by `;\n`
    pub fn render(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join(DECLARATION_SEPARATOR)
    }
}

/// Output of the first pass
#[derive(Debug, Clone, Default)]
pub struct BaseVariables {
    /// `--color-<key>: hsl(h, s%, l%)` in `colorSet` order
    pub declarations: VariableMap,
    /// Exact hex literal → base variable name; later entries overwrite earlier ones
    reverse_index: HashMap<String, String>,
}

impl BaseVariables {
    /// Base variable declared for this exact hex literal, if any
    pub fn resolve(&self, hex: &str) -> Option<&str> {
        self.reverse_index.get(hex).map(String::as_str)
    }
}

/// Build base color variables and the hex reverse index from `colorSet`.
///
/// Any malformed hex aborts the whole pass.
pub fn build_base_variables(color_set: &TokenRecord) -> Result<BaseVariables, TransformError> {
    let mut base = BaseVariables::default();

    for (key, hex) in color_set {
        let hsl = hex_to_hsl(hex).map_err(|err| TransformError::invalid_color(key, err))?;
        let name = format!("--color-{}", normalize_key(key));

        base.declarations.set(name.clone(), hsl.to_string());
        base.reverse_index.insert(hex.clone(), name);
    }

    Ok(base)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Theme::Light => LIGHT_HEADER,
            Theme::Dark => DARK_HEADER,
        }
    }

    fn roles(self, tokens: &ColorTokens) -> &TokenRecord {
        match self {
            Theme::Light => &tokens.light,
            Theme::Dark => &tokens.dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output of the second pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMaps {
    pub light: VariableMap,
    pub dark: VariableMap,
    /// `--color-<role>: var(--<role>)`, shared by both themes
    pub shortcuts: VariableMap,
}

impl AliasMaps {
    pub fn theme(&self, theme: Theme) -> &VariableMap {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }

    fn theme_mut(&mut self, theme: Theme) -> &mut VariableMap {
        match theme {
            Theme::Light => &mut self.light,
            Theme::Dark => &mut self.dark,
        }
    }
}

/// Resolve every semantic role of both themes against the base variables.
///
/// A hex that no `colorSet` entry declares yields an empty `var()` reference.
pub fn build_aliases(tokens: &ColorTokens, base: &BaseVariables) -> AliasMaps {
    let mut aliases = AliasMaps::default();

    for theme in Theme::ALL {
        for (key, hex) in theme.roles(tokens) {
            let role = format!("--{}", normalize_key(key));

            let reference = match base.resolve(hex) {
                Some(base_name) => format!("var({base_name})"),
                None => {
                    warn!(theme = %theme, role = %role, hex = %hex, "Color token does not match any colorSet entry");
                    "var()".to_string()
                }
            };

            aliases
                .shortcuts
                .set(format!("--color-{}", &role[2..]), format!("var({role})"));
            aliases.theme_mut(theme).set(role, reference);
        }
    }

    aliases
}

/// Assemble the three output blocks.
pub fn render(base: &BaseVariables, aliases: &AliasMaps) -> ConvertedTokens {
    let theme_block = |theme: Theme| {
        format!("{}\n\n{}", theme.header(), aliases.theme(theme).render())
    };

    ConvertedTokens {
        base_map: format!(
            "{}\n\n{SHORTCUT_HEADER}\n\n{}",
            base.declarations.render(),
            aliases.shortcuts.render()
        ),
        light_map: theme_block(Theme::Light),
        dark_map: theme_block(Theme::Dark),
    }
}

/// Transform a validated document into base, light and dark variable blocks.
///
/// Pure: the same document always yields byte-identical output.
pub fn transform(doc: &TokenDocument) -> Result<ConvertedTokens, TransformError> {
    let _timer = PerfTimer::new("transform").with_warn_threshold(SLOW_TRANSFORM);

    let base = build_base_variables(doc.color_set())?;
    debug!(base_variables = base.declarations.len(), "Built base color variables");

    let aliases = build_aliases(&doc.color_tokens, &base);
    debug!(
        light = aliases.light.len(),
        dark = aliases.dark.len(),
        shortcuts = aliases.shortcuts.len(),
        "Resolved semantic color tokens"
    );

    let output = render(&base, &aliases);
    info!(
        base_variables = base.declarations.len(),
        shortcuts = aliases.shortcuts.len(),
        "Token document converted"
    );
    Ok(output)
}
