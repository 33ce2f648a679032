//! Query normalization and bidirectional substring matching.
//!
//! A key matches a query when either one contains the other. Entries are
//! evaluated in declared order and the first hit wins; there is no scoring,
//! so an under-specified query such as "chicken" resolves to whichever key
//! happens to be declared first.

/// `true` when `key` is a substring of `query` or `query` is a substring of `key`.
pub fn is_bidirectional_match(key: &str, query: &str) -> bool {
    query.contains(key) || key.contains(query)
}

/// Lower-case `query` and return the first entry whose key matches it.
pub fn first_match<'a, T, F>(entries: &'a [T], key_of: F, query: &str) -> Option<&'a T>
where
    F: Fn(&T) -> &str,
{
    let query = query.to_lowercase();
    entries
        .iter()
        .find(|entry| is_bidirectional_match(key_of(*entry), &query))
}

/// Upper-case every letter that starts a word, lower-case the rest.
///
/// A word starts at the beginning of the string or after any non-letter,
/// so `"spaghetti aglio e olio"` becomes `"Spaghetti Aglio E Olio"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: &[&str] = &["spaghetti", "kung pao chicken", "butter chicken"];

    fn find(query: &str) -> Option<&'static str> {
        first_match(KEYS, |k| *k, query).copied()
    }

    #[test]
    fn matches_in_both_directions() {
        assert!(is_bidirectional_match("pasta", "pasta cooking"));
        assert!(is_bidirectional_match("knife skills", "knife"));
        assert!(!is_bidirectional_match("rice", "pasta"));
    }

    #[test]
    fn first_declared_key_wins() {
        assert_eq!(find("chicken"), Some("kung pao chicken"));
        assert_eq!(find("BUTTER CHICKEN curry"), Some("butter chicken"));
        assert_eq!(find("tofu"), None);
    }

    #[test]
    fn empty_query_matches_first_key() {
        assert_eq!(find(""), Some("spaghetti"));
    }

    #[test]
    fn title_case_follows_word_boundaries() {
        assert_eq!(title_case("spaghetti aglio e olio"), "Spaghetti Aglio E Olio");
        assert_eq!(title_case("knife skills"), "Knife Skills");
        assert_eq!(title_case("stir-fried rICE"), "Stir-Fried Rice");
    }
}
