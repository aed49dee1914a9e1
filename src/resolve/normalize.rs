//! Canonical property-name keys.
//!
//! Vendor tooling is inconsistent about case, accents and separators, so
//! all property-name matching happens on a canonical key: lower-cased,
//! diacritics folded to their base letter, and whitespace, underscores,
//! hyphens and periods removed.

/// Build the canonical comparison key for a property or attribute label.
///
/// Two labels name "the same property" iff their canonical keys are
/// equal. Pure and total; idempotent on its own output.
#[must_use]
pub fn canonical_key(label: &str) -> String {
    let mut key = String::with_capacity(label.len());
    for ch in label.trim().chars() {
        for lower in ch.to_lowercase() {
            push_folded(&mut key, lower);
        }
    }
    key
}

/// Append one already-lowercased character, folding accents and dropping
/// separators. Precomposed accented letters map through the table below;
/// decomposed input loses its combining marks instead.
fn push_folded(key: &mut String, ch: char) {
    match ch {
        'ą' | 'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' => key.push('a'),
        'ć' | 'ç' | 'č' | 'ĉ' => key.push('c'),
        'ď' | 'đ' => key.push('d'),
        'ę' | 'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ě' => key.push('e'),
        'ì' | 'í' | 'î' | 'ï' | 'ī' => key.push('i'),
        'ł' => key.push('l'),
        'ń' | 'ñ' | 'ň' => key.push('n'),
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => key.push('o'),
        'ŕ' | 'ř' => key.push('r'),
        'ś' | 'š' | 'ş' => key.push('s'),
        'ť' | 'ţ' => key.push('t'),
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => key.push('u'),
        'ý' | 'ÿ' => key.push('y'),
        'ź' | 'ż' | 'ž' => key.push('z'),
        'ß' => key.push_str("ss"),
        'æ' => key.push_str("ae"),
        'œ' => key.push_str("oe"),
        // combining diacritical marks from decomposed input
        '\u{0300}'..='\u{036f}' => {}
        '_' | '-' | '.' => {}
        c if c.is_whitespace() => {}
        c => key.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lowercases_and_strips_separators() {
        assert_eq!(canonical_key("Net Side Area"), "netsidearea");
        assert_eq!(canonical_key("  Net_Side-Area. "), "netsidearea");
        assert_eq!(canonical_key("Type.Name"), "typename");
    }

    #[test]
    fn folds_precomposed_diacritics() {
        assert_eq!(canonical_key("Objętość"), "objetosc");
        assert_eq!(canonical_key("Długość całkowita"), "dlugosccalkowita");
        assert_eq!(canonical_key("Größe"), "grosse");
    }

    #[test]
    fn drops_combining_marks_from_decomposed_input() {
        // "Pole" with a combining acute on the o
        assert_eq!(canonical_key("Po\u{0301}le"), "pole");
    }

    #[test]
    fn idempotent() {
        for label in ["Net Side Area", "Objętość", "Ciężar_własny", "12.5"] {
            let once = canonical_key(label);
            assert_eq!(canonical_key(&once), once);
        }
    }

    #[test]
    fn empty_and_symbol_only_labels() {
        assert_eq!(canonical_key(""), "");
        assert_eq!(canonical_key(" _-. "), "");
    }
}
