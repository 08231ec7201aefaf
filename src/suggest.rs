//! "Did you mean" hints for unknown demo names.
//!
//! Demo names are kebab-case and fairly long, so a plain edit distance misses
//! the common case of typing only part of a name (`chain`, `template`). A
//! candidate matches when it is within the edit budget or when the query is a
//! prefix of one of its words.

/// Most hints shown at once.
const MAX_HINTS: usize = 3;

/// Levenshtein distance over chars, two rolling rows.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len());
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Edit budget scales with the query: one edit per four characters, at
/// least one, at most three.
fn budget_for(query: &str) -> usize {
    (query.chars().count() / 4).clamp(1, 3)
}

/// Names close to `query`, closest first, ties in catalog order.
pub fn closest_names<'a, I>(query: &str, names: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = query.trim().to_lowercase().replace(['_', ' '], "-");
    if query.is_empty() {
        return Vec::new();
    }
    let budget = budget_for(&query);

    let mut scored: Vec<(usize, usize, &str)> = names
        .into_iter()
        .enumerate()
        .filter_map(|(position, name)| {
            let distance = edit_distance(&query, name);
            if distance <= budget {
                return Some((distance, position, name));
            }
            // Word prefix match ranks after any real near miss
            let prefix_hit = name.split('-').any(|word| word.starts_with(query.as_str()))
                || name.starts_with(query.as_str());
            prefix_hit.then_some((budget + 1, position, name))
        })
        .collect();

    scored.sort_unstable();
    scored.into_iter().take(MAX_HINTS).map(|(_, _, name)| name).collect()
}

/// Render hints as a sentence, or `None` when there are none.
pub fn did_you_mean(hints: &[&str]) -> Option<String> {
    let quoted: Vec<String> = hints.iter().map(|h| format!("'{}'", h)).collect();
    match quoted.as_slice() {
        [] => None,
        [only] => Some(format!("Did you mean {}?", only)),
        [first, second] => Some(format!("Did you mean {} or {}?", first, second)),
        [init @ .., last] => Some(format!("Did you mean {}, or {}?", init.join(", "), last)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: &[&str] = &[
        "abstract-factory",
        "factory-method",
        "chain-of-responsibility",
        "state",
        "strategy",
        "template-method",
    ];

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("state", "state"), 0);
        assert_eq!(edit_distance("", "proxy"), 5);
        assert_eq!(edit_distance("proxy", ""), 5);
        assert_eq!(edit_distance("stat", "state"), 1);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_typo_finds_name() {
        assert_eq!(closest_names("stratgey", NAMES.iter().copied()), vec!["strategy"]);
    }

    #[test]
    fn test_separator_and_case_normalized() {
        assert_eq!(closest_names("Factory_Method", NAMES.iter().copied())[0], "factory-method");
    }

    #[test]
    fn test_word_prefix_match() {
        assert_eq!(closest_names("chain", NAMES.iter().copied()), vec!["chain-of-responsibility"]);
        assert_eq!(
            closest_names("factory", NAMES.iter().copied()),
            vec!["abstract-factory", "factory-method"]
        );
    }

    #[test]
    fn test_near_miss_ranks_before_prefix() {
        let hints = closest_names("factory", ["factory-method", "factor"]);
        assert_eq!(hints, vec!["factor", "factory-method"]);
        assert_eq!(closest_names("str", NAMES.iter().copied()), vec!["strategy"]);
    }

    #[test]
    fn test_no_match() {
        assert!(closest_names("xyzzy", NAMES.iter().copied()).is_empty());
        assert!(closest_names("  ", NAMES.iter().copied()).is_empty());
    }

    #[test]
    fn test_did_you_mean() {
        assert_eq!(did_you_mean(&[]), None);
        assert_eq!(did_you_mean(&["state"]).as_deref(), Some("Did you mean 'state'?"));
        assert_eq!(
            did_you_mean(&["state", "strategy"]).as_deref(),
            Some("Did you mean 'state' or 'strategy'?")
        );
        assert_eq!(
            did_you_mean(&["a", "b", "c"]).as_deref(),
            Some("Did you mean 'a', 'b', or 'c'?")
        );
    }
}
