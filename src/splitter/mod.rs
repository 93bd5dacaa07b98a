pub mod mask;

use mask::Mask;

/// Split a string into words.
///
/// Words break at every run of non-alphanumeric bytes and at lower-to-upper
/// transitions. Inside a run of uppercase letters the last letter starts a new
/// word when a lowercase letter or digit follows it, so acronyms stay whole:
/// `"XMLToJSONConverter"` -> `["XML", "To", "JSON", "Converter"]`.
///
/// The returned words borrow from `s`, are never empty, and contain only ASCII
/// letters and digits.
pub fn split_words(s: &str) -> Vec<&str> {
    let bytes = s.as_bytes();
    let mut words = Vec::new();
    if bytes.is_empty() {
        return words;
    }

    let mut word_start = 0;
    let mut cur = Mask::NON_ALNUM;
    let mut next = Mask::of(bytes[0]);

    for i in 0..bytes.len() {
        let prev = cur;
        cur = next;
        next = bytes.get(i + 1).map_or(Mask::NON_ALNUM, |&b| Mask::of(b));

        if !cur.is_alnum() {
            if prev.is_alnum() && i > word_start {
                words.push(&s[word_start..i]);
            }
            word_start = i + 1;
            continue;
        }

        // An uppercase letter opens a word after a non-uppercase byte, or when
        // it is the last letter of an uppercase run followed by lowercase.
        let boundary = !prev.is_upper() || (!next.is_upper() && next.is_alnum());
        if cur.is_upper() && boundary && i > word_start {
            words.push(&s[word_start..i]);
            word_start = i;
        }
    }

    if cur.is_alnum() {
        words.push(&s[word_start..]);
    }

    words
}
