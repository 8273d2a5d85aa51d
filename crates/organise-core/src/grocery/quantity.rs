//! Quantity Parser
//!
//! "tomates x3", "tomates 3", "tomates (3)" and "3 tomates" all mean three
//! tomatoes. Patterns are tried in this order and the first match wins, so
//! "lot 2 x3" reads as name "lot 2", quantity 3.

use regex::Regex;
use std::sync::OnceLock;

/// Name and quantity recovered from a raw entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub name: String,
    pub qty: u32,
}

/// Where the number sits in a pattern
#[derive(Clone, Copy)]
enum NumberAt {
    End,
    Start,
}

fn patterns() -> &'static [(Regex, NumberAt)] {
    static PATTERNS: OnceLock<Vec<(Regex, NumberAt)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // "x" must follow whitespace: "noix 2" is noix, not noi x2
            (r"(?i)^(.+?)\s+x\s*(\d+)$", NumberAt::End),
            (r"^(.+?)\s+(\d+)$", NumberAt::End),
            (r"^(.+?)\s*\((\d+)\)$", NumberAt::End),
            (r"^(\d+)\s+(.+)$", NumberAt::Start),
        ]
        .into_iter()
        .filter_map(|(src, at)| match Regex::new(src) {
            Ok(re) => Some((re, at)),
            Err(e) => {
                log::error!("[grocery] Invalid quantity pattern {}: {}", src, e);
                None
            }
        })
        .collect()
    })
}

/// Split raw text into name and quantity
///
/// Without a recognizable number the whole (trimmed) text is the name and
/// the quantity is 1. A zero or out-of-range number counts as no number.
pub fn parse_quantity(input: &str) -> ParsedEntry {
    let trimmed = input.trim();
    let fallback = || ParsedEntry { name: trimmed.to_string(), qty: 1 };

    for (re, at) in patterns() {
        let Some(caps) = re.captures(trimmed) else {
            continue;
        };
        let (name, number) = match at {
            NumberAt::End => (&caps[1], &caps[2]),
            NumberAt::Start => (&caps[2], &caps[1]),
        };
        return match number.parse::<u32>() {
            Ok(qty) if qty >= 1 => ParsedEntry { name: name.trim().to_string(), qty },
            _ => fallback(),
        };
    }

    fallback()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(name: &str, qty: u32) -> ParsedEntry {
        ParsedEntry { name: name.to_string(), qty }
    }

    #[test]
    fn test_suffix_x() {
        assert_eq!(parse_quantity("tomates x3"), parsed("tomates", 3));
        assert_eq!(parse_quantity("tomates X 12"), parsed("tomates", 12));
        assert_eq!(parse_quantity("café x2"), parsed("café", 2));
    }

    #[test]
    fn test_suffix_number() {
        assert_eq!(parse_quantity("tomates 3"), parsed("tomates", 3));
        assert_eq!(parse_quantity("noix 2"), parsed("noix", 2));
        assert_eq!(parse_quantity("choux 3"), parsed("choux", 3));
        assert_eq!(parse_quantity("prix 4"), parsed("prix", 4));
    }

    #[test]
    fn test_parenthesized() {
        assert_eq!(parse_quantity("tomates (3)"), parsed("tomates", 3));
        assert_eq!(parse_quantity("tomates(4)"), parsed("tomates", 4));
    }

    #[test]
    fn test_prefix_number() {
        assert_eq!(parse_quantity("3 tomates"), parsed("tomates", 3));
        assert_eq!(parse_quantity("  2   pommes de terre "), parsed("pommes de terre", 2));
    }

    #[test]
    fn test_no_quantity() {
        assert_eq!(parse_quantity("pain"), parsed("pain", 1));
        assert_eq!(parse_quantity("  lait demi-écrémé  "), parsed("lait demi-écrémé", 1));
    }

    #[test]
    fn test_first_pattern_wins() {
        // Matches both "<name> x<N>" and "<N> <name>"; the suffix form is tried first
        assert_eq!(parse_quantity("2 boîtes x3"), parsed("2 boîtes", 3));
        // "<name> <N>" beats "<N> <name>"
        assert_eq!(parse_quantity("4 yaourts 6"), parsed("4 yaourts", 6));
    }

    #[test]
    fn test_zero_or_overflow_means_one() {
        assert_eq!(parse_quantity("tomates x0"), parsed("tomates x0", 1));
        assert_eq!(parse_quantity("riz 99999999999"), parsed("riz 99999999999", 1));
    }

    #[test]
    fn test_recovers_name_and_number_for_all_forms() {
        for name in ["pommes", "gel douche", "crème fraîche", "noix", "choux", "poireaux"] {
            for n in [1u32, 2, 7, 42] {
                for text in [
                    format!("{} x{}", name, n),
                    format!("{} {}", name, n),
                    format!("{} ({})", name, n),
                    format!("{} {}", n, name),
                ] {
                    assert_eq!(parse_quantity(&text), parsed(name, n), "input {:?}", text);
                }
            }
        }
    }
}
