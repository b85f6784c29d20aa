//! Ratcliff/Obershelp "gestalt" similarity.
//!
//! The score of two strings is `2 * M / T`, where `M` is the number of
//! characters covered by matching blocks and `T` the combined length. Matching
//! blocks are found by taking the longest common substring and recursing on
//! the pieces to its left and right.

use std::collections::HashMap;

/// Inputs at least this long get their most frequent characters excluded
/// from seeding longest-match searches.
const POPULAR_MIN_LEN: usize = 200;

/// A string that is compared against many candidates.
///
/// Indexing is done once; every [`Target::ratio`] call reuses it.
#[derive(Debug, Clone)]
pub struct Target {
    chars: Vec<char>,
    positions: HashMap<char, Vec<usize>>,
    counts: HashMap<char, usize>,
}

impl Target {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();

        let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, c) in chars.iter().enumerate() {
            positions.entry(*c).or_default().push(j);
        }

        let counts = positions
            .iter()
            .map(|(c, js)| (*c, js.len()))
            .collect::<HashMap<_, _>>();

        if chars.len() >= POPULAR_MIN_LEN {
            let limit = chars.len() / 100 + 1;
            positions.retain(|_, js| js.len() <= limit);
        }

        Self {
            chars,
            positions,
            counts,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Upper bound on [`Target::ratio`] from the lengths alone.
    pub fn real_quick_ratio(&self, candidate: &[char]) -> f64 {
        let (la, lb) = (candidate.len(), self.chars.len());
        score(la.min(lb), la + lb)
    }

    /// Upper bound on [`Target::ratio`] from the character multisets.
    pub fn quick_ratio(&self, candidate: &[char]) -> f64 {
        let mut available: HashMap<char, usize> = HashMap::new();
        let mut matches = 0;
        for c in candidate {
            let left = available
                .entry(*c)
                .or_insert_with(|| self.counts.get(c).copied().unwrap_or(0));
            if *left > 0 {
                matches += 1;
                *left -= 1;
            }
        }
        score(matches, candidate.len() + self.chars.len())
    }

    pub fn ratio(&self, candidate: &[char]) -> f64 {
        score(
            self.matching_characters(candidate),
            candidate.len() + self.chars.len(),
        )
    }

    fn matching_characters(&self, a: &[char]) -> usize {
        let mut total = 0;
        let mut queue = vec![(0, a.len(), 0, self.chars.len())];

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.longest_match(a, alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            total += k;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        total
    }

    /// Longest block `a[i..i+k] == b[j..j+k]` inside the given window.
    ///
    /// Ties go to the block starting earliest in `a`, then earliest in `b`.
    fn longest_match(
        &self,
        a: &[char],
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let b = &self.chars;
        let (mut best_i, mut best_j, mut best_k) = (alo, blo, 0);

        // j2len[j] = length of the match ending at a[i - 1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut next_j2len = HashMap::new();
            if let Some(js) = self.positions.get(c) {
                for &j in js {
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
                    if k > best_k {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_k = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        // popular characters never seed a block but may still extend one
        while best_i > alo && best_j > blo && a[best_i - 1] == b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_k += 1;
        }
        while best_i + best_k < ahi && best_j + best_k < bhi && a[best_i + best_k] == b[best_j + best_k]
        {
            best_k += 1;
        }

        (best_i, best_j, best_k)
    }
}

fn score(matches: usize, length: usize) -> f64 {
    if length == 0 {
        return 1.0;
    }
    2.0 * matches as f64 / length as f64
}

/// Similarity of `candidate` to `target`, in `[0, 1]`.
pub fn ratio(candidate: &str, target: &str) -> f64 {
    let candidate: Vec<char> = candidate.chars().collect();
    Target::new(target).ratio(&candidate)
}
