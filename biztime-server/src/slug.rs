//! Slug derivation for company codes

/// Maximum length of a slug produced by [`slugify`].
pub const MAX_SLUG_LEN: usize = 80;

/// Turn a display name into a URL-safe identifier.
///
/// Words are the runs of ASCII letters and digits; they are lowercased and
/// joined with single `-`, so the result never starts or ends with `-`.
///
/// Non-ASCII characters are dropped, not transliterated: `"Café Noir"`
/// becomes `"caf-noir"` and `"日本"` becomes `""`. A code is therefore a plain
/// ASCII path segment that depends on nothing but the name's ASCII part.
pub fn slugify(input: &str) -> String {
    let ascii: String = input.chars().filter(char::is_ascii).collect();

    let mut slug = ascii
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    // all ASCII, so byte truncation is safe
    slug.truncate(MAX_SLUG_LEN);
    let kept = slug.trim_end_matches('-').len();
    slug.truncate(kept);

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_is_lowercased() {
        assert_eq!(slugify("Microsoft"), "microsoft");
        assert_eq!(slugify("IBM"), "ibm");
    }

    #[test]
    fn punctuation_runs_collapse() {
        assert_eq!(slugify("Amazon, Inc."), "amazon-inc");
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("foo/bar\\baz"), "foo-bar-baz");
        assert_eq!(slugify("  --Apple--  "), "apple");
    }

    #[test]
    fn non_ascii_is_dropped() {
        assert_eq!(slugify("Café Noir"), "caf-noir");
        assert_eq!(slugify("emoji 😀 test"), "emoji-test");
        // dropped, not treated as a separator
        assert_eq!(slugify("Zoë"), "zo");
        assert_eq!(slugify("a😀b"), "ab");
    }

    #[test]
    fn nothing_usable_gives_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("日本"), "");
    }

    #[test]
    fn identical_slugs_for_similar_names() {
        assert_eq!(slugify("Acme Corp"), slugify("ACME corp."));
    }

    #[test]
    fn truncates_and_cleans() {
        let long = "a".repeat(100);
        let slug = slugify(&long);
        assert_eq!(slug.len(), MAX_SLUG_LEN);
        assert!(slug.chars().all(|c| c == 'a'));

        // a dash that lands on the cut point is trimmed
        let edge = format!("{} b", "a".repeat(MAX_SLUG_LEN - 1));
        let slug = slugify(&edge);
        assert_eq!(slug.len(), MAX_SLUG_LEN - 1);
        assert!(!slug.ends_with('-'));
    }
}
