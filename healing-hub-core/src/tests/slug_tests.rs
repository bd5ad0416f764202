use super::*;

const SAMPLES: &[&str] = &[
    "",
    "Reiki",
    "REIKI!!",
    "  leading and trailing  ",
    "Third Eye -- Chakra",
    "---dashes---everywhere---",
    "Crème Brûlée",
    "Ayurveda: The Science of Life",
    "snake_case stays",
    "tab\tand\nnewline",
    "Ω omega ψ",
    "İstanbul",
    "!!!",
    "-a-",
    "a - - b",
];

#[test]
fn test_slugify_basic() {
    assert_eq!(slugify("Ginger"), "ginger");
    assert_eq!(slugify("REIKI!!"), "reiki");
    assert_eq!(slugify("Third Eye -- Chakra"), "third-eye-chakra");
    assert_eq!(slugify("Ayurveda: The Science of Life"), "ayurveda-the-science-of-life");
    assert_eq!(slugify("snake_case stays"), "snake_case-stays");
    assert_eq!(slugify("tab\tand\nnewline"), "tab-and-newline");
}

#[test]
fn test_slugify_strips_diacritics() {
    assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
    assert_eq!(slugify("Açaí"), "acai");
    assert_eq!(slugify("İstanbul"), "istanbul");
}

#[test]
fn test_slugify_empty_and_symbols() {
    assert_eq!(slugify(""), "");
    assert_eq!(slugify("   "), "");
    assert_eq!(slugify("!!!"), "");
    assert_eq!(slugify("Ω omega ψ"), "omega");
}

#[test]
fn test_slugify_is_idempotent() {
    for sample in SAMPLES {
        let once = slugify(sample);
        assert_eq!(slugify(&once), once, "not idempotent for {sample:?}");
    }
}

#[test]
fn test_slugify_hyphen_shape() {
    for sample in SAMPLES {
        let slug = slugify(sample);
        assert!(!slug.starts_with('-'), "leading hyphen in {slug:?}");
        assert!(!slug.ends_with('-'), "trailing hyphen in {slug:?}");
        assert!(!slug.contains("--"), "double hyphen in {slug:?}");
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'),
            "unexpected character in {slug:?}"
        );
    }
}

#[test]
fn test_base_slug_fallback() {
    assert_eq!(base_slug_for("Prana"), "prana");
    assert_eq!(base_slug_for("!!!"), FALLBACK_SLUG);
    assert_eq!(base_slug_for("气功"), FALLBACK_SLUG);
}

#[test]
fn test_make_unique_slug_free_base() {
    let existing: HashSet<String> = ["chakra".to_string()].into_iter().collect();
    assert_eq!(make_unique_slug("reiki", &existing), "reiki");
}

#[test]
fn test_make_unique_slug_suffixes() {
    let existing: HashSet<String> = ["reiki", "reiki-1", "reiki-3"]
        .into_iter()
        .map(String::from)
        .collect();
    let slug = make_unique_slug("reiki", &existing);
    assert_eq!(slug, "reiki-2");
    assert!(!existing.contains(&slug));
}

#[test]
fn test_registry_claims_are_distinct() {
    let mut registry = SlugRegistry::with_existing(vec!["reiki".to_string()]);
    assert_eq!(registry.claim("reiki"), "reiki-1");
    assert_eq!(registry.claim("reiki"), "reiki-2");
    assert_eq!(registry.claim("prana"), "prana");
    assert_eq!(registry.claim("prana"), "prana-1");
    assert_eq!(registry.len(), 5);
}

#[test]
fn test_registry_release() {
    let mut registry: SlugRegistry = vec!["ginger".to_string()].into_iter().collect();
    assert!(registry.release("ginger"));
    assert!(!registry.contains("ginger"));
    assert_eq!(registry.claim("ginger"), "ginger");
    assert!(!registry.release("missing"));
}
