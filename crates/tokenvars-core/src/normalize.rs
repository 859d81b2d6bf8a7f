// ABOUTME: Key normalizer turning camelCase token keys into kebab-case variable names
// ABOUTME: Restores the bg/fg markers split by upstream camel-casing before inserting separators

/// Separator inserted at word and digit boundaries
pub const SEPARATOR: char = '-';

/// Normalize a raw token key into a kebab-case identifier.
///
/// Total and deterministic: `bGFieldDefault` → `bg-field-default`,
/// `primary500` → `primary-500`, and already-normalized keys pass through unchanged.
pub fn normalize_key(raw: &str) -> String {
    let restored = raw.replace("bG", "bg").replace("fG", "fg");

    let mut out = String::with_capacity(restored.len() + 4);
    let mut prev: Option<char> = None;
    for ch in restored.chars() {
        if prev.is_some_and(|p| is_boundary(p, ch)) {
            out.push(SEPARATOR);
        }
        out.push(ch);
        prev = Some(ch);
    }

    out.to_lowercase()
}

fn is_boundary(prev: char, next: char) -> bool {
    (prev.is_ascii_lowercase() && next.is_ascii_uppercase())
        || (prev.is_ascii_alphabetic() && next.is_ascii_digit())
}
