//! Country label to URL slug normalization
//!
//! Country sheets on the dashboard live under a path segment derived from the
//! display label, e.g. `Pérou` → `perou`, `Corée du Sud` → `coree-du-sud`.
//! The transformation is:
//!
//! 1. drop `(` and `)`
//! 2. lowercase
//! 3. spaces become `-`
//! 4. canonical decomposition (NFD)
//! 5. identifier case-mapped profile: width mapping, lowercase, NFC
//! 6. fold a fixed table of accented Latin letters to ASCII
//! 7. canonical composition (NFC)
//!
//! Letters outside the fold table are kept as-is (`ô` stays `ô`). Nothing here
//! can fail; an empty label gives an empty slug.

use unicode_normalization::UnicodeNormalization;

/// Convert a display label into the slug used by detail page URLs
pub fn normalize(label: &str) -> String {
    let stripped: String = label.chars().filter(|c| !matches!(c, '(' | ')')).collect();
    let hyphenated = stripped.to_lowercase().replace(' ', "-");
    let decomposed: String = hyphenated.nfd().collect();
    let mapped = case_map_identifier(&decomposed);
    mapped.chars().map(fold_accent).nfc().collect()
}

/// Width-map, lowercase and recompose, as an identifier case-mapped profile does.
fn case_map_identifier(input: &str) -> String {
    input
        .chars()
        .map(narrow_width)
        .flat_map(char::to_lowercase)
        .nfc()
        .collect()
}

/// Full-width ASCII variants (U+FF01..U+FF5E) map to their ASCII counterparts.
fn narrow_width(c: char) -> char {
    match c {
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        _ => c,
    }
}

fn fold_accent(c: char) -> char {
    match c {
        'ą' | 'à' | 'á' => 'a',
        'é' | 'è' | 'ę' => 'e',
        'í' | 'ï' | 'î' => 'i',
        'ú' => 'u',
        'ó' => 'o',
        'ć' => 'c',
        'ł' => 'l',
        'ń' => 'n',
        'ś' => 's',
        'ż' | 'ź' => 'z',
        _ => c,
    }
}
