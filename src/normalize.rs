// src/normalize.rs

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static STREET_ABBR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(rd|st|ave|dr|ln|blvd|ct|pkwy|pl|cir|ste|apt)\b").unwrap());

// Longest alternatives first so "ne" is not eaten by "n".
static DIRECTIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(northeast|northwest|southeast|southwest|north|south|east|west|ne|nw|se|sw|n|s|e|w)\b")
        .unwrap()
});

fn expand_abbreviation(abbr: &str) -> &'static str {
    match abbr {
        "rd" => "road",
        "st" => "street",
        "ave" => "avenue",
        "dr" => "drive",
        "ln" => "lane",
        "blvd" => "boulevard",
        "ct" => "court",
        "pkwy" => "parkway",
        "pl" => "place",
        "cir" => "circle",
        "ste" => "suite",
        "apt" => "apartment",
        _ => "",
    }
}

/// Canonicalize a free-text delivery address into a grouping key.
///
/// Pages of one multi-page BOL often carry inconsistently-written copies
/// of the same address ("123 Main St NE" vs "123 main street"), so we
/// case-fold, expand street-type abbreviations, and drop directional
/// tokens entirely. Abbreviation expansion must run before directional
/// removal so "st" becomes "street" rather than losing its "s"/"t".
///
/// Idempotent: normalizing an already-normalized address is a no-op.
/// Empty input normalizes to "", which the consolidator treats as
/// non-groupable.
pub fn normalize(address: &str) -> String {
    let lowered = address.to_lowercase().replace(['.', ','], "");
    let collapsed = WHITESPACE.replace_all(lowered.trim(), " ");
    let expanded = STREET_ABBR.replace_all(&collapsed, |caps: &regex::Captures| {
        expand_abbreviation(&caps[1])
    });
    let stripped = DIRECTIONAL.replace_all(&expanded, "");
    WHITESPACE.replace_all(stripped.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviations_expand_whole_word_only() {
        assert_eq!(normalize("123 Main St"), "123 main street");
        assert_eq!(normalize("400 Stone Dr"), "400 stone drive");
        // "st" inside a word must not expand
        assert_eq!(normalize("1 Stellar Way"), "1 stellar way");
    }

    #[test]
    fn test_directionals_removed() {
        assert_eq!(normalize("123 Main St NE"), "123 main street");
        assert_eq!(normalize("123 Main Street Northeast"), "123 main street");
        assert_eq!(normalize("55 W Peachtree Pl"), "55 peachtree place");
    }

    #[test]
    fn test_punctuation_and_case() {
        assert_eq!(
            normalize("456 Oak Ave., Atlanta, GA 30305"),
            "456 oak avenue atlanta ga 30305"
        );
    }

    #[test]
    fn test_equivalent_spellings_share_a_key() {
        assert_eq!(normalize("123 Main St NE"), normalize("123 main street"));
        assert_eq!(
            normalize("456 Oak Ave, Atlanta, GA 30305"),
            normalize("456 OAK AVENUE ATLANTA GA 30305")
        );
    }

    #[test]
    fn test_idempotent() {
        let addresses = [
            "123 Main St NE",
            "456 Oak Ave., Atlanta, GA 30305",
            "9800 Satellite Blvd SW Ste 200",
            "",
            "   ",
        ];
        for a in addresses {
            let once = normalize(a);
            assert_eq!(normalize(&once), once, "not idempotent for {a:?}");
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
