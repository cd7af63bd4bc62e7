//! Token cleaning, stopword filtering, and synonym folding.

/// Words carrying no topical signal, dropped during tokenization.
const STOPWORDS: [&str; 21] = [
    "the", "is", "in", "and", "or", "a", "an", "to", "for", "with", "on", "at", "by", "of", "that",
    "this", "it", "as", "are", "was", "be",
];

/// Lowercase a word and strip every non-alphanumeric character.
/// Lowercasing comes first: some uppercase letters lower to a base
/// letter plus a combining mark, which the filter then strips.
pub fn clean(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Fold informal variants onto their canonical form. Unknown tokens
/// pass through unchanged. Targets are fixed points of this table so
/// normalization stays idempotent.
fn fold_alias(token: &str) -> &str {
    match token {
        "bye" => "goodbye",
        "hi" | "hey" => "hello",
        "thanks" => "thank",
        "okay" => "ok",
        "yeah" | "yep" => "yes",
        "nope" => "no",
        _ => token,
    }
}

/// Clean a word, then fold synonyms onto canonical forms.
pub fn normalize(word: &str) -> String {
    let cleaned = clean(word);
    fold_alias(&cleaned).to_string()
}

/// Membership test against the fixed stopword set.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}
