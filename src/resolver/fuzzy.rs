//! Closest-match selection over candidate topic names
//!
//! Scores use the gestalt pattern-matching ratio (Ratcliff/Obershelp):
//! `2 * M / T`, where `M` counts characters in the recursively found
//! longest common blocks and `T` is the combined length.

use std::collections::HashMap;

/// Queries at least this long drop very common characters from the index
const AUTOJUNK_MIN_LEN: usize = 200;

/// Similarity ratio in `0.0..=1.0`, where `1.0` means identical.
///
/// The ratio is not symmetric: `candidate` is scanned against an index
/// built from `query`.
pub fn similarity(candidate: &str, query: &str) -> f64 {
    let a: Vec<char> = candidate.chars().collect();
    let b: Vec<char> = query.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = BlockMatcher::new(&a, &b).matching_chars();
    2.0 * matched as f64 / total as f64
}

/// Best-scoring candidate whose ratio reaches `cutoff`.
///
/// Equal scores keep the lexicographically greatest candidate.
pub fn closest_match<'a, I>(query: &str, candidates: I, cutoff: f64) -> Option<(&'a str, f64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, f64)> = None;

    for candidate in candidates {
        let score = similarity(candidate, query);
        if score < cutoff {
            continue;
        }
        match best {
            Some((best_name, best_score))
                if score < best_score || (score == best_score && candidate <= best_name) => {}
            _ => best = Some((candidate, score)),
        }
    }

    best
}

struct BlockMatcher<'s> {
    a: &'s [char],
    b: &'s [char],
    /// char → ascending positions in `b`
    b2j: HashMap<char, Vec<usize>>,
}

impl<'s> BlockMatcher<'s> {
    fn new(a: &'s [char], b: &'s [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let ntest = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= ntest);
        }

        Self { a, b, b2j }
    }

    /// Longest block with `a[i..i+k] == b[j..j+k]` inside the given ranges,
    /// earliest in `a` then in `b` on ties
    fn longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
        // j → length of the match ending at (i - 1, j)
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        // grow over characters left out of the index
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }

    /// Total size of all matching blocks
    fn matching_chars(&self) -> usize {
        let mut matched = 0;
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let (i, j, k) = self.longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            matched += k;
            if alo < i && blo < j {
                pending.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                pending.push((i + k, ahi, j + k, bhi));
            }
        }

        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_bounds() {
        assert_eq!(similarity("beam", "beam"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("beam", ""), 0.0);
        assert_eq!(similarity("abcdef", "ab"), 0.5);
    }

    #[test]
    fn test_similarity_keeps_prefixes_close() {
        assert_eq!(similarity("scaffolding", "scaff"), 0.625);
        assert!((similarity("precast concrete", "precst") - 6.0 / 11.0).abs() < 1e-12);
        assert!((similarity("scaffolding", "scafolding") - 20.0 / 21.0).abs() < 1e-12);
    }

    #[test]
    fn test_long_query_drops_common_chars() {
        let query = "a".repeat(250);
        // only the leading run survives, grown from an empty match
        assert!((similarity("aaaa", &query) - 8.0 / 254.0).abs() < 1e-12);
    }

    #[test]
    fn test_closest_match_picks_best() {
        let candidates = ["slab", "asphalt", "column"];
        let (topic, score) = closest_match("asfalt", candidates, 0.5).unwrap();
        assert_eq!(topic, "asphalt");
        assert!((score - 10.0 / 13.0).abs() < 1e-12);
    }

    #[test]
    fn test_closest_match_respects_cutoff() {
        assert!(closest_match("xylophone", ["beam", "grout"], 0.5).is_none());
        assert!(closest_match("anything", std::iter::empty(), 0.0).is_none());
    }

    #[test]
    fn test_closest_match_tie_keeps_greatest_name() {
        // both score 0.75
        let (topic, _) = closest_match("bead", ["beam", "bear"], 0.5).unwrap();
        assert_eq!(topic, "bear");
        let (topic, _) = closest_match("bead", ["bear", "beam"], 0.5).unwrap();
        assert_eq!(topic, "bear");
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let (topic, score) = closest_match("ab", ["abcdef"], 0.5).unwrap();
        assert_eq!(topic, "abcdef");
        assert_eq!(score, 0.5);
    }
}
