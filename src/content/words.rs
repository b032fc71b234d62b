//! Target words, cross-language translations and per-language alphabets
//! used by the word-collection mode.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::i18n::Language;

/// The same eleven words in every language, one row per word
static WORDS: &[[&str; 3]] = &[
    // ru, en, ko
    ["КОД", "CODE", "코드"],
    ["ИГРА", "GAME", "게임"],
    ["ЗМЕЙКА", "SNAKE", "뱀"],
    ["ЯБЛОКО", "APPLE", "사과"],
    ["ПИТОН", "PYTHON", "파이썬"],
    ["ПРОГРАММА", "PROGRAM", "프로그램"],
    ["БАБУШКА", "GRANDMA", "할머니"],
    ["МАМА", "MOM", "엄마"],
    ["ПАПА", "DAD", "아빠"],
    ["СЫН", "SON", "아들"],
    ["ДОЧЬ", "DAUGHTER", "딸"],
];

const RUSSIAN_ALPHABET: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";
const ENGLISH_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
// Basic consonant and vowel jamo only
const KOREAN_ALPHABET: &str = "ㄱㄴㄷㄹㅁㅂㅅㅇㅈㅊㅋㅌㅍㅎㅏㅑㅓㅕㅗㅛㅜㅠㅡㅣ";

fn column(language: Language) -> usize {
    match language {
        Language::Russian => 0,
        Language::English => 1,
        Language::Korean => 2,
    }
}

/// Target words available in `language`
pub fn target_words(language: Language) -> Vec<&'static str> {
    let col = column(language);
    WORDS.iter().map(|row| row[col]).collect()
}

/// Picks a target word in `language` uniformly at random
pub fn random_target_word<R: Rng + ?Sized>(
    language: Language,
    rng: &mut R,
) -> Option<&'static str> {
    let col = column(language);
    WORDS.choose(rng).map(|row| row[col])
}

/// Translates `word` from one language to another.
///
/// Words without a table entry come back unchanged.
pub fn translate_word(word: &str, from: Language, to: Language) -> String {
    let (from, to) = (column(from), column(to));
    WORDS
        .iter()
        .find(|row| row[from] == word)
        .map(|row| row[to].to_string())
        .unwrap_or_else(|| word.to_string())
}

/// Characters used to draw random letters in `language`
pub fn alphabet(language: Language) -> &'static str {
    match language {
        Language::Russian => RUSSIAN_ALPHABET,
        Language::English => ENGLISH_ALPHABET,
        Language::Korean => KOREAN_ALPHABET,
    }
}

/// A uniformly random letter from the alphabet of `language`
pub fn random_letter<R: Rng + ?Sized>(language: Language, rng: &mut R) -> char {
    let letters: Vec<char> = alphabet(language).chars().collect();
    letters[rng.gen_range(0..letters.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_translate_known_word() {
        assert_eq!(
            translate_word("ЯБЛОКО", Language::Russian, Language::English),
            "APPLE"
        );
        assert_eq!(
            translate_word("APPLE", Language::English, Language::Korean),
            "사과"
        );
        assert_eq!(
            translate_word("딸", Language::Korean, Language::Russian),
            "ДОЧЬ"
        );
    }

    #[test]
    fn test_translate_unknown_word_is_identity() {
        assert_eq!(
            translate_word("BANANA", Language::English, Language::Russian),
            "BANANA"
        );
        // Word exists, but not in the stated source language
        assert_eq!(
            translate_word("APPLE", Language::Russian, Language::Korean),
            "APPLE"
        );
    }

    #[test]
    fn test_translate_same_language() {
        assert_eq!(
            translate_word("GAME", Language::English, Language::English),
            "GAME"
        );
    }

    #[test]
    fn test_target_words_per_language() {
        for language in Language::ALL {
            assert_eq!(target_words(language).len(), 11);
        }
        assert!(target_words(Language::English).contains(&"SNAKE"));
    }

    #[test]
    fn test_random_letter_in_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for language in Language::ALL {
            for _ in 0..50 {
                let letter = random_letter(language, &mut rng);
                assert!(alphabet(language).contains(letter));
            }
        }
    }

    #[test]
    fn test_random_target_word_is_listed() {
        let mut rng = StdRng::seed_from_u64(3);
        let word = random_target_word(Language::Korean, &mut rng).unwrap();
        assert!(target_words(Language::Korean).contains(&word));
    }
}
