// crates/georesolve-core/src/text.rs

//! Query string normalization.
//!
//! Free-text place descriptions arrive with the punctuation habits of
//! whatever document they were lifted from ("Fla.", "Boston (Mass.)",
//! "Zurich: Switzerland"). Everything here reduces them to the lowercase,
//! comma-separated form the cascade expects.

/// Normalizes a raw place description.
///
/// Lowercases, then strips periods — or turns them into spaces when
/// `period_to_space` is set, which the autocomplete pre-pass wants so that
/// "St. Paul, MN" keeps its word boundaries. A "name (qualifier)"
/// parenthetical becomes "name, qualifier"; brackets, colons, possessives
/// and the escaped-entity leftovers of XML pipelines are dropped.
pub fn clean_query(input: &str, period_to_space: bool) -> String {
    let mut result = input.to_lowercase();
    if period_to_space {
        result = result.replace('.', " ");
    }
    result = result.replace('.', "");

    // A leading parenthesis is not a clarification; drop it before the
    // "(qualifier)" rewrite below sees it.
    if let Some(rest) = result.strip_prefix('(') {
        result = rest.to_string();
    }

    // Convert "name (qualifier)" to "name, qualifier".
    if result.contains('(') && result.contains(')') {
        result = result.replace('(', ", ");
        result = result.replace(')', "");
    }

    for junk in ["(", ")", "]", "[", ":"] {
        result = result.replace(junk, "");
    }

    // Possessives, straight and curly, plus the escaped forms.
    result = result.replace("'s", "");
    result = result.replace("\u{2019}s", "");
    result = result.replace("&quot;", "");
    result = result.replace("&apos;s", "");
    result = result.replace('"', "");

    result.trim().to_string()
}

/// A query split at its first comma.
///
/// `first` is usually the place name, `second` the clarifier (state,
/// country, ...). Both equal the whole query when there is no comma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParts {
    pub first: String,
    pub second: String,
}

/// Splits a cleaned query into its place-name and clarifier tokens.
///
/// A short clarifier (≤ 3 chars once trimmed) has its internal whitespace
/// removed so spelled-out state initials survive: "houston, t x" yields
/// a `second` of "tx".
pub fn split_query(query: &str) -> QueryParts {
    match query.split_once(',') {
        Some((first, second)) => {
            let first = first.trim().to_string();
            let mut second = second.trim().to_string();
            if second.chars().count() <= 3 {
                second = second.replace(' ', "");
            }
            QueryParts { first, second }
        }
        None => QueryParts {
            first: query.to_string(),
            second: query.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_lowercases_and_strips_periods() {
        assert_eq!(clean_query("Fla.", false), "fla");
        assert_eq!(clean_query("Washington, D.C.", false), "washington, dc");
    }

    #[test]
    fn clean_period_to_space_keeps_word_boundaries() {
        assert_eq!(clean_query("St. Paul, MN", true), "st paul, mn");
    }

    #[test]
    fn clean_rewrites_parenthetical_qualifier() {
        assert_eq!(clean_query("Boston (Mass)", false), "boston, mass");
    }

    #[test]
    fn clean_drops_leading_parenthesis() {
        assert_eq!(clean_query("(Richmond", false), "richmond");
    }

    #[test]
    fn clean_strips_brackets_colons_possessives() {
        assert_eq!(clean_query("Martha's Vineyard", false), "martha vineyard");
        assert_eq!(clean_query("[Zurich]: Switzerland", false), "zurich switzerland");
        assert_eq!(clean_query("King&apos;s Lynn", false), "king lynn");
    }

    #[test]
    fn split_on_first_comma_only() {
        let parts = split_query("springfield, illinois, usa");
        assert_eq!(parts.first, "springfield");
        assert_eq!(parts.second, "illinois, usa");
    }

    #[test]
    fn split_without_comma_duplicates_query() {
        let parts = split_query("france");
        assert_eq!(parts.first, "france");
        assert_eq!(parts.second, "france");
    }

    #[test]
    fn split_collapses_short_initials() {
        assert_eq!(split_query("houston, t x").second, "tx");
        assert_eq!(split_query("albany, n y").second, "ny");
        // Longer clarifiers keep their spaces.
        assert_eq!(split_query("albany, new york").second, "new york");
    }
}
