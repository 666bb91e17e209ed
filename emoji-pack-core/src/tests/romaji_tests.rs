use super::*;

fn hira(s: &str) -> String {
    to_hiragana(s).unwrap()
}

#[test]
fn basic_words() {
    assert_eq!(hira("neko"), "ねこ");
    assert_eq!(hira("inu"), "いぬ");
    assert_eq!(hira("sushi"), "すし");
    assert_eq!(hira("maki"), "まき");
    assert_eq!(hira("sushimaki"), "すしまき");
}

#[test]
fn syllabic_n() {
    assert_eq!(hira("san"), "さん");
    assert_eq!(hira("ramen"), "らめん");
    assert_eq!(hira("shinbun"), "しんぶん");
    assert_eq!(hira("konnichiwa"), "こんにちわ");
    assert_eq!(hira("onna"), "おんな");
    assert_eq!(hira("sannin"), "さんにん");
    assert_eq!(hira("kin'en"), "きんえん");
    assert_eq!(hira("nyan"), "にゃん");
}

#[test]
fn geminate_consonants() {
    assert_eq!(hira("kitte"), "きって");
    assert_eq!(hira("matcha"), "まっちゃ");
    assert_eq!(hira("zasshi"), "ざっし");
}

#[test]
fn palatal_and_alternate_spellings() {
    assert_eq!(hira("kyou"), "きょう");
    assert_eq!(hira("toukyou"), "とうきょう");
    assert_eq!(hira("tsuki"), "つき");
    assert_eq!(hira("tuki"), "つき");
    assert_eq!(hira("fuji"), "ふじ");
    assert_eq!(hira("huzi"), "ふじ");
    assert_eq!(hira("chawan"), "ちゃわん");
}

#[test]
fn small_kana() {
    assert_eq!(hira("xa"), "ぁ");
    assert_eq!(hira("ltu"), "っ");
    assert_eq!(hira("xyo"), "ょ");
}

#[test]
fn case_folded() {
    assert_eq!(hira("NEKO"), "ねこ");
    assert_eq!(hira("Sushi"), "すし");
}

#[test]
fn non_letters_pass_through() {
    assert_eq!(hira("neko2"), "ねこ2");
    assert_eq!(hira("123"), "123");
    assert_eq!(hira("ra-men"), "らーめん");
    assert_eq!(hira(""), "");
}

#[test]
fn unmappable_letters_fail() {
    assert_eq!(
        to_hiragana("cat"),
        Err(TransliterationError::unmappable("cat", "cat"))
    );
    assert_eq!(
        to_hiragana("neko_q"),
        Err(TransliterationError::unmappable("neko_q", "q"))
    );
    assert!(to_hiragana("test").is_err());
}

#[test]
fn non_ascii_fails() {
    assert_eq!(
        to_hiragana("ねこ"),
        Err(TransliterationError::NonAscii("ねこ".to_string()))
    );
}

#[test]
fn trait_object_and_closure() {
    let romaji: &dyn Transliterator = &RomajiTransliterator::new();
    assert_eq!(romaji.transliterate("inu").unwrap(), "いぬ");

    let upper = |s: &str| -> Result<String, TransliterationError> { Ok(s.to_uppercase()) };
    assert_eq!(upper.transliterate("abc").unwrap(), "ABC");
}
