// file: src/text/lemma.rs
// description: noun lemmatization via suffix substitution rules
// reference: WordNet morphy detachment rules

/// Irregular plurals worth knowing about in patent prose.
const IRREGULARS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("matrices", "matrix"),
    ("indices", "index"),
    ("vertices", "vertex"),
    // "axes" takes the axis sense; the axe sense does not occur in claims.
    ("axes", "axis"),
    ("analyses", "analysis"),
    ("bases", "basis"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("media", "medium"),
    // Invariant nouns that the suffix rules would mangle.
    ("series", "series"),
    ("species", "species"),
];

/// Reduces a plural noun to its singular base form. Deliberately reduces
/// inflection only: tense and derivational suffixes are left alone so that
/// distinct legal-term senses (e.g. "claimed" vs "claim") stay distinct.
/// Idempotent: lemmatizing an already-singular form returns it unchanged.
pub fn lemmatize(token: &str) -> String {
    if let Some((_, singular)) = IRREGULARS.iter().find(|(plural, _)| *plural == token) {
        return (*singular).to_string();
    }

    // Too short, or endings that look plural but are not.
    if token.len() <= 3
        || token.ends_with("ss")
        || token.ends_with("us")
        || token.ends_with("is")
    {
        return token.to_string();
    }

    // No "zes" rule: words like "sizes" and "prizes" singularize by the
    // bare s-strip below, not by dropping the "e".
    for (suffix, replacement) in [
        ("sses", "ss"),
        ("ies", "y"),
        ("ches", "ch"),
        ("shes", "sh"),
        ("xes", "x"),
    ] {
        if let Some(stem) = token.strip_suffix(suffix) {
            return format!("{}{}", stem, replacement);
        }
    }

    if let Some(stem) = token.strip_suffix('s') {
        return stem.to_string();
    }

    token.to_string()
}
