//! Text processing utilities for title tokenization

/// Shortest token kept
pub const MIN_TOKEN_LEN: usize = 2;

/// Word tokenizer: lowercases, splits on non-alphanumeric characters, and
/// drops tokens shorter than [`MIN_TOKEN_LEN`].
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.chars().count() >= MIN_TOKEN_LEN)
        .map(|s| s.to_string())
        .collect()
}

/// Expand tokens into every n-gram with `min_n <= n <= max_n`.
///
/// Output is grouped by n (all unigrams, then all bigrams, ...), and n-gram
/// terms are the tokens joined by a single space.
pub fn ngrams(tokens: &[String], min_n: usize, max_n: usize) -> Vec<String> {
    let min_n = min_n.max(1);
    let mut terms = Vec::new();

    for n in min_n..=max_n {
        if n > tokens.len() {
            break;
        }
        if n == 1 {
            terms.extend(tokens.iter().cloned());
            continue;
        }
        terms.extend(tokens.windows(n).map(|window| window.join(" ")));
    }

    terms
}

/// Tokenize `text` and expand it into unigram..=`max_n` terms
pub fn terms(text: &str, max_n: usize) -> Vec<String> {
    ngrams(&tokenize(text), 1, max_n)
}
