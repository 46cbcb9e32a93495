// crates/flagmap-core/src/text.rs

//! # Label Normalizer
//!
//! Boundary datasets label the same subdivision in many ways: different
//! case, stray whitespace, `ü` vs `ue`, `Noord-Holland` vs `Noord Holland`.
//! The helpers here turn a raw label into the canonical form used as a
//! lookup key, plus the handful of spelling variants worth trying against a
//! name table.
//!
//! All functions are total: garbage in, garbage (but never a panic) out.

/// Diacritic substitutions applied to every table.
///
/// Tables may add their own on top (see [`crate::tables::NameTable::folds`]).
pub const DEFAULT_FOLDS: &[(char, &str)] = &[('ü', "ue"), ('ö', "oe"), ('ä', "ae"), ('ß', "ss")];

/// Canonical form of a label: lowercase, trimmed, inner whitespace runs
/// collapsed to a single space.
///
/// The result is stable under re-normalization:
///
/// ```rust
/// use flagmap_core::text::normalize;
///
/// let once = normalize("  Baden-WÜRTTEMBERG ");
/// assert_eq!(once, "baden-württemberg");
/// assert_eq!(normalize(&once), once);
/// ```
pub fn normalize(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    for word in lower.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Replace the characters of `DEFAULT_FOLDS` and `extra` with their ASCII
/// spellings. Characters without a substitution pass through untouched, so
/// non-Latin scripts survive.
pub fn fold_diacritics(s: &str, extra: &[(char, &str)]) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match DEFAULT_FOLDS
            .iter()
            .chain(extra.iter())
            .find(|(from, _)| *from == ch)
        {
            Some((_, to)) => out.push_str(to),
            None => out.push(ch),
        }
    }
    out
}

/// The spellings of one label that are tried, in order, against a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelVariants {
    /// [`normalize`]d label.
    pub canonical: String,
    /// Diacritics folded and hyphens turned into spaces.
    pub folded: String,
    /// Spaces turned into hyphens.
    pub hyphenated: String,
    /// Hyphens turned into spaces.
    pub spaced: String,
}

impl LabelVariants {
    /// Iterate the distinct variants in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let all = [
            self.canonical.as_str(),
            self.folded.as_str(),
            self.hyphenated.as_str(),
            self.spaced.as_str(),
        ];
        all.into_iter()
            .enumerate()
            .filter(move |(i, v)| !all[..*i].contains(v))
            .map(|(_, v)| v)
    }
}

/// Build the lookup variants of a raw label.
pub fn label_variants(label: &str, extra_folds: &[(char, &str)]) -> LabelVariants {
    let canonical = normalize(label);
    let folded = fold_diacritics(&canonical, extra_folds).replace('-', " ");
    let hyphenated = canonical.replace(' ', "-");
    let spaced = canonical.replace('-', " ");
    LabelVariants {
        canonical,
        folded,
        hyphenated,
        spaced,
    }
}

/// Convert a string into a folded key suitable for comparing country names.
///
/// Transliterates Unicode to ASCII with `deunicode` and lowercases, so
/// `"Côte d'Ivoire"` and `"cote d'ivoire"` compare equal. Not used for
/// subdivision tables, whose keys keep their native script.
pub fn fold_key(s: &str) -> String {
    normalize(&deunicode::deunicode(s))
}

/// Compares two strings for equality after [`fold_key`].
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "Baden-Württemberg",
        "  NOORD   Holland ",
        "Île-de-France",
        "Республика Адыгея",
        "",
        "   ",
        "St. Gallen",
        "GRAUBÜNDEN",
        "Łódzkie",
    ];

    #[test]
    fn normalize_is_idempotent() {
        for s in SAMPLES {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn normalize_lowercases_trims_and_collapses() {
        assert_eq!(normalize("  NOORD   Holland "), "noord holland");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("Республика Адыгея"), "республика адыгея");
    }

    #[test]
    fn fold_is_idempotent_and_keeps_other_scripts() {
        let folded = fold_diacritics("graubünden straße", &[]);
        assert_eq!(folded, "graubuenden strasse");
        assert_eq!(fold_diacritics(&folded, &[]), folded);
        assert_eq!(fold_diacritics("адыгея", &[]), "адыгея");
    }

    #[test]
    fn extra_folds_extend_the_default_set() {
        assert_eq!(fold_diacritics("łódź", &[('ł', "l"), ('ó', "o"), ('ź', "z")]), "lodz");
    }

    #[test]
    fn variants_cover_separator_spellings() {
        let v = label_variants("Baden-Württemberg", &[]);
        assert_eq!(v.canonical, "baden-württemberg");
        assert_eq!(v.folded, "baden wuerttemberg");
        assert_eq!(v.hyphenated, "baden-württemberg");
        assert_eq!(v.spaced, "baden württemberg");
        assert_eq!(v.iter().count(), 3);

        let v = label_variants("Noord Holland", &[]);
        assert_eq!(v.hyphenated, "noord-holland");
        assert_eq!(v.iter().collect::<Vec<_>>(), vec!["noord holland", "noord-holland"]);
    }

    #[test]
    fn fold_key_transliterates() {
        assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
        assert!(equals_folded("ÅLAND", "aland"));
    }
}
