use super::*;

fn name(stem: &str, category: &str) -> String {
    build_name(stem, category).unwrap().into_string()
}

#[test]
fn adds_category_prefix() {
    assert_eq!(name("neko", "animals"), "animals_neko");
    assert_eq!(name("cat", "animals"), "animals_cat");
}

#[test]
fn hyphens_become_underscores() {
    assert_eq!(name("inu-san", "animals"), "animals_inu_san");
    assert_eq!(name("sushi-maki", "food"), "food_sushi_maki");
    assert_eq!(name("super-long-name", "category"), "category_super_long_name");
}

#[test]
fn spaces_removed() {
    assert_eq!(name("test emoji", "category"), "category_testemoji");
    assert_eq!(name("my emoji name", "category"), "category_myemojiname");
    assert_eq!(name("test-emoji name", "category"), "category_test_emojiname");
}

#[test]
fn illegal_stems_rejected() {
    for stem in ["絵文字", "emoji@test", "emoji!test", "emoji#tag", "test🎉"] {
        assert_eq!(
            build_name(stem, "category"),
            Err(RejectReason::InvalidCharacters),
            "{stem}"
        );
    }
}

#[test]
fn empty_stem_rejected() {
    assert_eq!(build_name("   ", "category"), Err(RejectReason::EmptyStem));
    assert_eq!(build_name("", "category"), Err(RejectReason::EmptyStem));
}

#[test]
fn category_is_normalized_and_validated() {
    assert_eq!(name("neko", "cute-animals"), "cute_animals_neko");
    assert_eq!(name("neko", "cute animals"), "cuteanimals_neko");
    assert_eq!(build_name("neko", "動物"), Err(RejectReason::InvalidCategory));
    assert_eq!(build_name("neko", ""), Err(RejectReason::InvalidCategory));
}

#[test]
fn resolve_file_keeps_original_extension() {
    let file = RawFile::new("/path/to/inu-san.GIF", "animals");
    match resolve_file(&file) {
        NameOutcome::Accepted {
            identifier,
            file_name,
        } => {
            assert_eq!(identifier.as_str(), "animals_inu_san");
            assert_eq!(file_name, "animals_inu_san.GIF");
        }
        other => panic!("expected accepted, got {other:?}"),
    }
}

#[test]
fn resolve_file_rejection_carries_context() {
    let file = RawFile::new("/path/to/emoji@invalid.png", "test");
    let outcome = resolve_file(&file);
    assert!(!outcome.is_accepted());
    assert_eq!(
        outcome,
        NameOutcome::Rejected(Rejection {
            source_path: PathBuf::from("/path/to/emoji@invalid.png"),
            category: "test".to_string(),
            reason: RejectReason::InvalidCharacters,
        })
    );
}

#[test]
fn identifier_requires_legal_name() {
    assert!(Identifier::new("animals_neko").is_ok());
    assert!(Identifier::new("animals-neko").is_err());
    assert!(Identifier::new("").is_err());
}

#[test]
fn identifier_serde_validates() {
    let id: Identifier = serde_json::from_str("\"food_sushi\"").unwrap();
    assert_eq!(id.as_str(), "food_sushi");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"food_sushi\"");
    assert!(serde_json::from_str::<Identifier>("\"bad name\"").is_err());
}

#[test]
fn reject_reason_labels() {
    assert_eq!(RejectReason::InvalidCharacters.to_string(), "invalid-characters");
    assert_eq!(RejectReason::EmptyStem.as_str(), "empty-stem");
}

#[test]
fn rejection_lists_offending_characters() {
    let outcome = resolve_file(&RawFile::new("/p/a@b!c-d@.png", "test"));
    let NameOutcome::Rejected(rejection) = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(rejection.illegal_chars(), vec!['@', '!']);

    let outcome = resolve_file(&RawFile::new("/p/neko.png", "my#cat"));
    let NameOutcome::Rejected(rejection) = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(rejection.reason, RejectReason::InvalidCategory);
    assert_eq!(rejection.illegal_chars(), vec!['#']);

    let outcome = resolve_file(&RawFile::new("/p/   .png", "test"));
    let NameOutcome::Rejected(rejection) = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(rejection.reason, RejectReason::EmptyStem);
    assert!(rejection.illegal_chars().is_empty());
}

#[test]
fn rejection_message_names_path_category_and_reason() {
    let NameOutcome::Rejected(rejection) = resolve_file(&RawFile::new("/p/emoji@test.png", "test"))
    else {
        panic!("expected rejection");
    };
    assert_eq!(
        rejection.to_string(),
        "Invalid emoji name (skipped): /p/emoji@test.png (category \"test\", invalid-characters \"@\")"
    );

    let NameOutcome::Rejected(rejection) = resolve_file(&RawFile::new("/p/ .png", "test")) else {
        panic!("expected rejection");
    };
    assert_eq!(
        rejection.to_string(),
        "Invalid emoji name (skipped): /p/ .png (category \"test\", empty-stem)"
    );
}
