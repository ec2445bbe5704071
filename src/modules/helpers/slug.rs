use std::sync::LazyLock;

use regex::Regex;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("slug charset regex is valid"));
static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));

/// # slugify
/// turn a display name into the url identifier used all over the site.
/// lowercase, drop everything outside `[a-z0-9\s-]`, collapse whitespace
/// runs to single hyphens.
///
/// must stay idempotent: route handlers apply it both when generating
/// links and when matching incoming path parameters.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned = NON_SLUG_CHARS.replace_all(&lowered, "");
    WHITESPACE_RUNS
        .replace_all(cleaned.trim(), "-")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Max Verstappen"), "max-verstappen");
        assert_eq!(slugify("Red Bull Racing"), "red-bull-racing");
    }

    #[test]
    fn strips_characters_outside_the_slug_charset() {
        assert_eq!(slugify("Nico Hülkenberg"), "nico-hlkenberg");
        assert_eq!(slugify("Sergio Pérez!"), "sergio-prez");
    }

    #[test]
    fn keeps_existing_hyphens() {
        assert_eq!(slugify("Jean-Eric Vergne"), "jean-eric-vergne");
    }

    #[test]
    fn collapses_whitespace_runs_and_trims() {
        assert_eq!(slugify("  Oscar   Piastri "), "oscar-piastri");
    }

    #[test]
    fn output_charset_is_lowercase_digits_and_hyphens() {
        for name in ["Carlos Sainz Jr.", "2025 São Paulo GP", "ALONSO  #14"] {
            let slug = slugify(name);
            assert!(
                slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "unexpected character in {slug:?}"
            );
        }
    }

    #[test]
    fn slugify_is_idempotent() {
        for name in ["Max Verstappen", "Jean-Eric Vergne", "  Nico   Hülkenberg "] {
            let once = slugify(name);
            assert_eq!(slugify(&once), once);
        }
    }
}
