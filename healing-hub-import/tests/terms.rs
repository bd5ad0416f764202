use healing_hub_catalog::*;
use healing_hub_db::*;
use healing_hub_import::*;

fn add(conn: &rusqlite::Connection, json: &str) -> TermRecord {
    let item: ImportTerm = serde_json::from_str(json).unwrap();
    create_term(conn, item, &NormalizeDefaults::default()).unwrap()
}

#[test]
fn create_applies_import_defaults() {
    let conn = open_memory().unwrap();
    let created = add(&conn, r#"{"name": "Prana", "shortDefinition": "Life force"}"#);

    assert_eq!(created.term, "Prana");
    assert_eq!(created.slug, "prana");
    assert_eq!(created.category, DEFAULT_CATEGORY);
    assert_eq!(created.niche, DEFAULT_CATEGORY);
    assert_eq!(created.definition, "## Overview\n\nLife force");
    assert!(!created.created_at.is_empty());
}

#[test]
fn create_avoids_existing_slug() {
    let conn = open_memory().unwrap();
    add(&conn, r#"{"term": "Reiki"}"#);
    let second = add(&conn, r#"{"term": "reiki"}"#);
    assert_eq!(second.slug, "reiki-1");
}

#[test]
fn create_rejects_missing_term() {
    let conn = open_memory().unwrap();
    let item: ImportTerm = serde_json::from_str(r#"{"definition": "orphan"}"#).unwrap();
    let err = create_term(&conn, item, &NormalizeDefaults::default()).unwrap_err();
    assert!(matches!(err, ImportError::Validation(_)));
    assert!(all_slugs(&conn).unwrap().is_empty());
}

#[test]
fn rename_regenerates_slug() {
    let conn = open_memory().unwrap();
    let reiki = add(&conn, r#"{"term": "Reiki"}"#);

    let updated = update_term(
        &conn,
        reiki.id,
        TermPatch {
            term: Some("Usui Reiki".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(updated.term, "Usui Reiki");
    assert_eq!(updated.slug, "usui-reiki");
    assert!(find_term_by_slug(&conn, "reiki").unwrap().is_none());
}

#[test]
fn rename_with_explicit_slug_keeps_it() {
    let conn = open_memory().unwrap();
    let reiki = add(&conn, r#"{"term": "Reiki"}"#);

    let updated = update_term(
        &conn,
        reiki.id,
        TermPatch {
            term: Some("Usui Reiki".to_string()),
            slug: Some("reiki-healing".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(updated.slug, "reiki-healing");
}

#[test]
fn case_only_rename_keeps_own_slug_free() {
    let conn = open_memory().unwrap();
    let reiki = add(&conn, r#"{"term": "Reiki"}"#);

    let updated = update_term(
        &conn,
        reiki.id,
        TermPatch {
            term: Some("REIKI".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(updated.slug, "reiki");
}

#[test]
fn rename_onto_taken_slug_is_suffixed() {
    let conn = open_memory().unwrap();
    add(&conn, r#"{"term": "Chakra"}"#);
    let prana = add(&conn, r#"{"term": "Prana"}"#);

    let updated = update_term(
        &conn,
        prana.id,
        TermPatch {
            term: Some("Chakra".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(updated.slug, "chakra-1");
}

#[test]
fn unchanged_name_keeps_slug() {
    let conn = open_memory().unwrap();
    let reiki = add(&conn, r#"{"term": "Reiki", "slug": "usui"}"#);

    let updated = update_term(
        &conn,
        reiki.id,
        TermPatch {
            term: Some("Reiki".to_string()),
            short_definition: Some("Hands-on healing".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(updated.slug, "usui");
    assert_eq!(updated.short_definition, "Hands-on healing");
}

#[test]
fn blank_term_is_rejected() {
    let conn = open_memory().unwrap();
    let reiki = add(&conn, r#"{"term": "Reiki"}"#);

    let err = update_term(
        &conn,
        reiki.id,
        TermPatch {
            term: Some("   ".to_string()),
            ..Default::default()
        },
    )
    .unwrap_err();

    assert!(matches!(err, ImportError::Validation(_)));
    assert_eq!(get_term(&conn, reiki.id).unwrap().unwrap().term, "Reiki");
}

#[test]
fn category_alone_updates_niche() {
    let conn = open_memory().unwrap();
    let reiki = add(&conn, r#"{"term": "Reiki", "category": "Energy"}"#);

    let updated = update_term(
        &conn,
        reiki.id,
        TermPatch {
            category: Some("Bodywork".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(updated.category, "Bodywork");
    assert_eq!(updated.niche, "Bodywork");
}

#[test]
fn blank_definition_is_synthesized() {
    let conn = open_memory().unwrap();
    let reiki = add(
        &conn,
        r#"{"term": "Reiki", "shortDefinition": "Energy work", "definition": "Long text"}"#,
    );

    let updated = update_term(
        &conn,
        reiki.id,
        TermPatch {
            definition: Some(String::new()),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(updated.definition, "## Overview\n\nEnergy work");
}

#[test]
fn synonyms_and_tools_are_replaced() {
    let conn = open_memory().unwrap();
    let reiki = add(
        &conn,
        r#"{"term": "Reiki", "synonyms": "Usui, Palm healing", "recommendedToolIds": [1, 2]}"#,
    );
    assert_eq!(reiki.synonyms.len(), 2);
    assert_eq!(reiki.recommended_tools.len(), 2);

    let updated = update_term(
        &conn,
        reiki.id,
        TermPatch {
            synonyms: Some(vec![" Jin Kei Do ".to_string(), "".to_string()]),
            recommended_tools: Some(vec![RecommendedTool {
                product_id: 9,
                context: "Starter kit".to_string(),
            }]),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(updated.synonyms, vec!["Jin Kei Do"]);
    assert_eq!(updated.recommended_tools[0].product_id, 9);
    assert_eq!(updated.recommended_tools.len(), 1);
}

#[test]
fn updating_missing_term_fails() {
    let conn = open_memory().unwrap();
    let err = update_term(&conn, 42, TermPatch::default()).unwrap_err();
    assert!(matches!(err, ImportError::TermNotFound(42)));
}

#[test]
fn blank_update_matches_create_fallbacks() {
    let conn = open_memory().unwrap();
    let created = add(&conn, r#"{"term": "Reiki"}"#);

    let updated = update_term(
        &conn,
        created.id,
        TermPatch {
            short_definition: Some(String::new()),
            definition: Some("  ".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(updated.short_definition, created.short_definition);
    assert_eq!(updated.definition, created.definition);
    assert_eq!(updated.short_definition, "Reiki");
}

#[test]
fn new_short_definition_refreshes_placeholder_definition() {
    let conn = open_memory().unwrap();
    let created = add(&conn, r#"{"term": "Prana", "shortDefinition": "Life force"}"#);

    let updated = update_term(
        &conn,
        created.id,
        TermPatch {
            short_definition: Some("Vital breath".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    let fresh = add(&conn, r#"{"term": "Prana", "shortDefinition": "Vital breath"}"#);
    assert_eq!(updated.short_definition, fresh.short_definition);
    assert_eq!(updated.definition, fresh.definition);
}

#[test]
fn written_definition_survives_short_update() {
    let conn = open_memory().unwrap();
    let created = add(&conn, r#"{"term": "Prana", "definition": "Breath as life force."}"#);

    let updated = update_term(
        &conn,
        created.id,
        TermPatch {
            short_definition: Some(String::new()),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(updated.definition, "Breath as life force.");
    assert_eq!(updated.short_definition, "Breath as life force.");
}

fn reject_synonym_inserts(conn: &rusqlite::Connection) {
    conn.execute_batch(
        "CREATE TRIGGER reject_synonyms BEFORE INSERT ON term_synonyms
         BEGIN SELECT RAISE(ABORT, 'synonyms rejected'); END;",
    )
    .unwrap();
}

#[test]
fn failed_create_leaves_no_partial_term() {
    let conn = open_memory().unwrap();
    reject_synonym_inserts(&conn);

    let item: ImportTerm =
        serde_json::from_str(r#"{"term": "Reiki", "synonyms": ["Usui"]}"#).unwrap();
    let err = create_term(&conn, item, &NormalizeDefaults::default()).unwrap_err();

    assert!(matches!(err, ImportError::Db(_)));
    assert!(all_slugs(&conn).unwrap().is_empty());
}

#[test]
fn failed_update_keeps_stored_term_intact() {
    let conn = open_memory().unwrap();
    let reiki = add(&conn, r#"{"term": "Reiki", "synonyms": ["Usui", "Palm healing"]}"#);
    reject_synonym_inserts(&conn);

    let err = update_term(
        &conn,
        reiki.id,
        TermPatch {
            term: Some("Usui Reiki".to_string()),
            synonyms: Some(vec!["Jin Kei Do".to_string()]),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, ImportError::Db(_)));

    let stored = get_term(&conn, reiki.id).unwrap().unwrap();
    assert_eq!(stored, reiki);
    assert_eq!(stored.synonyms, vec!["Usui", "Palm healing"]);
}
