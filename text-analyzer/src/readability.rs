/// Score used when the text cannot be scored (no words or sentences).
pub const DEFAULT_SCORE: f64 = 50.0;

/// Flesch Reading Ease: 206.835 − 1.015·(words/sentences) − 84.6·(syllables/word).
/// `None` when the text has no scorable words or sentences.
pub fn flesch_reading_ease(text: &str) -> Option<f64> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }
    let sentences = count_sentences(text);
    if sentences == 0 {
        return None;
    }

    let syllables: usize = words.iter().map(|word| syllable_count(word)).sum();
    let word_count = words.len() as f64;
    Some(
        206.835
            - 1.015 * (word_count / sentences as f64)
            - 84.6 * (syllables as f64 / word_count),
    )
}

/// Sentences are `.!?`-delimited segments that contain at least one
/// alphanumeric char.
fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| segment.chars().any(char::is_alphanumeric))
        .count()
}

/// Vowel-group heuristic: count runs of vowels (y included), drop one for a
/// silent trailing 'e', floor at one syllable per word.
fn syllable_count(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(|c| c.to_lowercase())
        .collect();
    if letters.is_empty() {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut count = 0usize;
    let mut prev_vowel = false;
    for &letter in &letters {
        let vowel = is_vowel(letter);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    if count > 1 && letters.ends_with(&['e']) {
        count -= 1;
    }
    count.max(1)
}
