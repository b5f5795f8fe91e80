//! Title normalisation for fuzzy comparison and direct slug guessing.

use crate::types::Slug;

/// Fold `text` into a comparison key over `[a-z0-9]`.
///
/// Characters are transliterated to their closest ASCII form (characters
/// with no reasonable mapping are dropped), lowercased, and everything
/// outside `[a-z0-9]` is removed. Total and idempotent.
pub fn normalize_for_comparison(text: &str) -> String {
    transliterate(text)
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Guess the catalog slug for a title: ASCII-only letters, digits and single
/// hyphens, case preserved.
///
/// `"One Piece"` becomes `One-Piece`; punctuation is dropped rather than
/// replaced, so `"JoJo's Bizarre!"` becomes `JoJos-Bizarre`.
pub fn title_to_direct_slug(title: &str) -> Slug {
    let kept: String = transliterate(title)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    Slug::new(kept.split_whitespace().collect::<Vec<_>>().join("-"))
}

/// Remove every `( ... )` group and trim, e.g. `"Berserk (Deluxe)"` to
/// `"Berserk"`. An unclosed `(` is kept verbatim.
pub fn strip_parenthesized(title: &str) -> String {
    let mut result = String::with_capacity(title.len());
    let mut rest = title;
    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')') else {
            break;
        };
        result.push_str(&rest[..open]);
        rest = &rest[open + close + 1..];
    }
    result.push_str(rest);
    result.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn transliterate(text: &str) -> String {
    deunicode::deunicode_with_tofu(text, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_strips_symbols() {
        assert_eq!(normalize_for_comparison("Death Note!"), "deathnote");
        assert_eq!(normalize_for_comparison("20th Century Boys"), "20thcenturyboys");
    }

    #[test]
    fn normalize_is_accent_insensitive() {
        assert_eq!(normalize_for_comparison("Café"), normalize_for_comparison("cafe"));
        assert_eq!(normalize_for_comparison("Pokémon"), "pokemon");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["Fullmetal Alchemist", "Ōkami-san", "  ", "L'Attaque des Titans", "進撃の巨人"] {
            let once = normalize_for_comparison(input);
            assert_eq!(normalize_for_comparison(&once), once, "input: {input}");
        }
    }

    #[test]
    fn normalize_output_is_ascii_alphanumeric() {
        let key = normalize_for_comparison("進撃の巨人 — Shingeki!");
        assert!(key.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert!(key.ends_with("shingeki"));
    }

    #[test]
    fn normalize_empty_input() {
        assert_eq!(normalize_for_comparison(""), "");
        assert_eq!(normalize_for_comparison("?!…"), "");
    }

    #[test]
    fn direct_slug_hyphenates_words() {
        assert_eq!(title_to_direct_slug("One Piece").as_str(), "One-Piece");
    }

    #[test]
    fn direct_slug_drops_symbols_before_hyphenation() {
        assert_eq!(title_to_direct_slug("JoJo's Bizarre!").as_str(), "JoJos-Bizarre");
        assert_eq!(title_to_direct_slug("Jo Jo's Bizarre!").as_str(), "Jo-Jos-Bizarre");
    }

    #[test]
    fn direct_slug_collapses_and_trims_whitespace() {
        assert_eq!(title_to_direct_slug("  Vinland   Saga \t").as_str(), "Vinland-Saga");
    }

    #[test]
    fn direct_slug_transliterates_and_keeps_case() {
        assert_eq!(title_to_direct_slug("Ôkami Kakushi").as_str(), "Okami-Kakushi");
    }

    #[test]
    fn direct_slug_of_symbols_is_empty() {
        assert!(title_to_direct_slug("!!!").is_empty());
    }

    #[test]
    fn strip_parenthesized_removes_groups() {
        assert_eq!(strip_parenthesized("Berserk (Deluxe)"), "Berserk");
        assert_eq!(strip_parenthesized("A (x) B (y)"), "A B");
    }

    #[test]
    fn strip_parenthesized_keeps_unclosed() {
        assert_eq!(strip_parenthesized("Monster (Perfect"), "Monster (Perfect");
    }
}
