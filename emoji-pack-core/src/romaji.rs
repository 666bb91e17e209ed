//! Romaji to hiragana transliteration.
//!
//! [`RomajiTransliterator`] is a greedy longest-match converter over a fixed
//! syllable table. It accepts Hepburn and Kunrei spellings plus the common
//! IME conventions (`nn`, `xtu`, `la`...). Anything it cannot spell is an
//! error, which callers treat as "no alias for this segment".

use crate::error::TransliterationError;

/// Converts a romanized segment into another script.
pub trait Transliterator {
    fn transliterate(&self, input: &str) -> Result<String, TransliterationError>;
}

impl<F> Transliterator for F
where
    F: Fn(&str) -> Result<String, TransliterationError>,
{
    fn transliterate(&self, input: &str) -> Result<String, TransliterationError> {
        self(input)
    }
}

/// Table-driven romaji → hiragana converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct RomajiTransliterator;

impl RomajiTransliterator {
    pub fn new() -> Self {
        Self
    }
}

impl Transliterator for RomajiTransliterator {
    fn transliterate(&self, input: &str) -> Result<String, TransliterationError> {
        to_hiragana(input)
    }
}

/// Longest syllable spelling in the table.
const MAX_SYLLABLE_LEN: usize = 3;

/// Convert romaji to hiragana.
///
/// ASCII letters are case-folded. Digits, `.`, `_` and other ASCII
/// punctuation pass through; `-` becomes the long vowel mark.
///
/// ```
/// use emoji_pack_core::romaji::to_hiragana;
///
/// assert_eq!(to_hiragana("sushi").unwrap(), "すし");
/// assert_eq!(to_hiragana("konnichiwa").unwrap(), "こんにちわ");
/// assert!(to_hiragana("cat").is_err());
/// ```
pub fn to_hiragana(input: &str) -> Result<String, TransliterationError> {
    if !input.is_ascii() {
        return Err(TransliterationError::NonAscii(input.to_string()));
    }

    let lower = input.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    let mut out = String::with_capacity(input.len() * 3);
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];

        if !c.is_ascii_alphabetic() {
            out.push(if c == b'-' { 'ー' } else { c as char });
            i += 1;
            continue;
        }

        let next = bytes.get(i + 1).copied();

        // Syllabic n: word-final, before a consonant, or spelled n' / nn.
        if c == b'n' {
            match next {
                None => {
                    out.push('ん');
                    i += 1;
                    continue;
                }
                Some(b'\'') => {
                    out.push('ん');
                    i += 2;
                    continue;
                }
                Some(b'n') => {
                    // "nna" is ん + な, a bare "nn" is a single ん
                    let starts_syllable = bytes
                        .get(i + 2)
                        .is_some_and(|&a| is_vowel(a) || a == b'y');
                    out.push('ん');
                    i += if starts_syllable { 1 } else { 2 };
                    continue;
                }
                Some(n) if !is_vowel(n) && n != b'y' => {
                    out.push('ん');
                    i += 1;
                    continue;
                }
                _ => {}
            }
        }

        // Geminate consonant: kk, ss, tt, and tch.
        if let Some(n) = next {
            let doubled = n == c && is_consonant(c);
            let tch = c == b't' && n == b'c' && bytes.get(i + 2) == Some(&b'h');
            if doubled || tch {
                out.push('っ');
                i += 1;
                continue;
            }
        }

        let longest = MAX_SYLLABLE_LEN.min(bytes.len() - i);
        let matched = (1..=longest)
            .rev()
            .find_map(|len| syllable(&lower[i..i + len]).map(|kana| (len, kana)));

        match matched {
            Some((len, kana)) => {
                out.push_str(kana);
                i += len;
            }
            None => {
                let end = bytes[i..]
                    .iter()
                    .position(|b| !b.is_ascii_alphabetic())
                    .map_or(bytes.len(), |p| i + p);
                return Err(TransliterationError::unmappable(input, &lower[i..end]));
            }
        }
    }

    Ok(out)
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'i' | b'u' | b'e' | b'o')
}

fn is_consonant(b: u8) -> bool {
    b.is_ascii_alphabetic() && !is_vowel(b)
}

#[rustfmt::skip]
fn syllable(s: &str) -> Option<&'static str> {
    let kana = match s {
        "a" => "あ", "i" => "い", "u" => "う", "e" => "え", "o" => "お",

        "ka" => "か", "ki" => "き", "ku" => "く", "ke" => "け", "ko" => "こ",
        "kya" => "きゃ", "kyu" => "きゅ", "kyo" => "きょ",
        "ga" => "が", "gi" => "ぎ", "gu" => "ぐ", "ge" => "げ", "go" => "ご",
        "gya" => "ぎゃ", "gyu" => "ぎゅ", "gyo" => "ぎょ",

        "sa" => "さ", "si" | "shi" => "し", "su" => "す", "se" => "せ", "so" => "そ",
        "sha" | "sya" => "しゃ", "shu" | "syu" => "しゅ", "sho" | "syo" => "しょ",
        "she" => "しぇ",
        "za" => "ざ", "zi" | "ji" => "じ", "zu" => "ず", "ze" => "ぜ", "zo" => "ぞ",
        "ja" | "zya" | "jya" => "じゃ", "ju" | "zyu" | "jyu" => "じゅ",
        "jo" | "zyo" | "jyo" => "じょ", "je" => "じぇ",

        "ta" => "た", "ti" | "chi" => "ち", "tu" | "tsu" => "つ", "te" => "て", "to" => "と",
        "cha" | "tya" => "ちゃ", "chu" | "tyu" => "ちゅ", "cho" | "tyo" => "ちょ",
        "che" => "ちぇ",
        "da" => "だ", "di" => "ぢ", "du" => "づ", "de" => "で", "do" => "ど",
        "dya" => "ぢゃ", "dyu" => "ぢゅ", "dyo" => "ぢょ",

        "na" => "な", "ni" => "に", "nu" => "ぬ", "ne" => "ね", "no" => "の",
        "nya" => "にゃ", "nyu" => "にゅ", "nyo" => "にょ",

        "ha" => "は", "hi" => "ひ", "hu" | "fu" => "ふ", "he" => "へ", "ho" => "ほ",
        "hya" => "ひゃ", "hyu" => "ひゅ", "hyo" => "ひょ",
        "fa" => "ふぁ", "fi" => "ふぃ", "fe" => "ふぇ", "fo" => "ふぉ",
        "ba" => "ば", "bi" => "び", "bu" => "ぶ", "be" => "べ", "bo" => "ぼ",
        "bya" => "びゃ", "byu" => "びゅ", "byo" => "びょ",
        "pa" => "ぱ", "pi" => "ぴ", "pu" => "ぷ", "pe" => "ぺ", "po" => "ぽ",
        "pya" => "ぴゃ", "pyu" => "ぴゅ", "pyo" => "ぴょ",

        "ma" => "ま", "mi" => "み", "mu" => "む", "me" => "め", "mo" => "も",
        "mya" => "みゃ", "myu" => "みゅ", "myo" => "みょ",
        "ya" => "や", "yu" => "ゆ", "yo" => "よ",
        "ra" => "ら", "ri" => "り", "ru" => "る", "re" => "れ", "ro" => "ろ",
        "rya" => "りゃ", "ryu" => "りゅ", "ryo" => "りょ",
        "wa" => "わ", "wi" => "うぃ", "we" => "うぇ", "wo" => "を",
        "va" => "ゔぁ", "vi" => "ゔぃ", "vu" => "ゔ", "ve" => "ゔぇ", "vo" => "ゔぉ",

        "xa" | "la" => "ぁ", "xi" | "li" => "ぃ", "xu" | "lu" => "ぅ",
        "xe" | "le" => "ぇ", "xo" | "lo" => "ぉ",
        "xya" | "lya" => "ゃ", "xyu" | "lyu" => "ゅ", "xyo" | "lyo" => "ょ",
        "xtu" | "ltu" => "っ", "xwa" | "lwa" => "ゎ",
        "xn" => "ん",

        _ => return None,
    };
    Some(kana)
}

#[cfg(test)]
#[path = "tests/romaji_tests.rs"]
mod tests;
