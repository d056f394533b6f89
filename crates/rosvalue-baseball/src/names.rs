// Join keys for records that come from different sources.

use unicode_normalization::UnicodeNormalization;

/// Franchises whose nickname is two words long.
const TWO_WORD_NICKNAMES: &[&str] = &["Red Sox", "White Sox"];

/// Fold a display name down to ASCII: decompose accented characters and drop
/// whatever is left outside ASCII. Never fails; unmappable characters are
/// dropped.
pub fn fold_accents(name: &str) -> String {
    name.nfkd().filter(char::is_ascii).collect()
}

/// Short team name used by projection sources, e.g. "New York Yankees" ->
/// "Yankees". Falls back to the last word unless the name ends in one of the
/// two-word nicknames.
pub fn team_short_name(full_name: &str) -> String {
    let trimmed = full_name.trim();
    if let Some(nickname) = TWO_WORD_NICKNAMES
        .iter()
        .copied()
        .find(|n| trimmed.ends_with(n) && is_word_boundary(trimmed, n.len()))
    {
        return nickname.to_string();
    }
    trimmed
        .split_whitespace()
        .last()
        .unwrap_or_default()
        .to_string()
}

/// True if the `suffix_len` trailing bytes of `s` start a new word.
fn is_word_boundary(s: &str, suffix_len: usize) -> bool {
    let start = s.len() - suffix_len;
    start == 0 || s[..start].ends_with(char::is_whitespace)
}
