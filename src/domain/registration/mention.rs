//! Extraction of @-mentioned students from notification text

const MENTION_PREFIX: char = '@';

/// Extract mentioned student identifiers from notification text
///
/// Every whitespace-separated token starting with `@` is a mention; the
/// identifier is the token with a single leading `@` removed. Identifiers
/// are returned in order of appearance, duplicates included, and are not
/// validated as emails.
pub fn parse_mentions(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|word| word.starts_with(MENTION_PREFIX) && word.contains(MENTION_PREFIX))
        .filter_map(|word| word.strip_prefix(MENTION_PREFIX))
        .map(String::from)
        .collect()
}
