/// A single term/translation entry from the word file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub term: String,
    pub translation: String,
}

/// Full-width colon, common in lists typed with a Japanese IME.
const FULLWIDTH_COLON: char = '\u{FF1A}';

/// Parse one data line into a pair.
///
/// The line is split on the first ASCII colon (full-width colons are
/// normalized first) and both halves are trimmed. Returns `None` when the
/// line has no colon or either half ends up empty.
pub fn split_pair(line: &str) -> Option<Pair> {
    let line = line.replace(FULLWIDTH_COLON, ":");

    let (term, translation) = line.split_once(':')?;

    let term = term.trim();
    let translation = translation.trim();

    if term.is_empty() || translation.is_empty() {
        return None;
    }

    Some(Pair {
        term: term.to_string(),
        translation: translation.to_string(),
    })
}
