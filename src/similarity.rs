//! Lexical similarity between two segments.
//!
//! The ratio is the classic sequence-matcher measure `2 * M / T`, where `T` is the
//! combined length of both strings and `M` the number of characters covered by the
//! matching blocks: take the longest common contiguous block, then repeat on the
//! unmatched parts to its left and right.

use std::collections::HashMap;
use std::ops::Range;

/// Candidates at least this long ignore "popular" characters when seeding blocks.
const POPULAR_MIN_LEN: usize = 200;

/// A run of `size` equal characters starting at `a` in the query and `b` in the candidate.
///
/// Positions count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchingBlock {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

impl MatchingBlock {
    /// Position in the query just past the block
    const fn a_end(self) -> usize {
        self.a + self.size
    }

    /// Position in the candidate just past the block
    const fn b_end(self) -> usize {
        self.b + self.size
    }
}

/// Similarity of `query` to `candidate` in `[0.0, 1.0]`.
///
/// Identical strings score 1.0, including two empty strings (`T = 0` is treated as a
/// perfect match rather than a division by zero).
#[must_use]
pub fn similarity(query: &str, candidate: &str) -> f64 {
    if query == candidate {
        return 1.0;
    }
    SequenceMatcher::new(query, candidate).ratio()
}

/// Matching blocks of `query` against `candidate`, ordered by position.
///
/// Adjacent blocks are merged, so no two returned blocks touch in both strings.
#[must_use]
pub fn matching_blocks(query: &str, candidate: &str) -> Vec<MatchingBlock> {
    SequenceMatcher::new(query, candidate).matching_blocks()
}

/// Matching state for one query/candidate pair
struct SequenceMatcher {
    /// Query characters
    a: Vec<char>,
    /// Candidate characters
    b: Vec<char>,
    /// Character → ascending positions in `b`, without popular characters
    b_positions: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    /// Indexes the candidate's characters by position.
    fn new(query: &str, candidate: &str) -> Self {
        let a: Vec<char> = query.chars().collect();
        let b: Vec<char> = candidate.chars().collect();

        let mut b_positions: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, ch) in b.iter().enumerate() {
            b_positions.entry(*ch).or_default().push(j);
        }

        // Characters making up more than 1% of a long candidate are too common to
        // anchor a block on. They can still extend one.
        if b.len() >= POPULAR_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b_positions.retain(|_, positions| positions.len() <= limit);
        }

        Self { a, b, b_positions }
    }

    /// Longest block inside the given windows.
    ///
    /// Among equally long blocks the one starting earliest in `a` wins, then the one
    /// starting earliest in `b`. A zero-sized block means nothing matches.
    fn longest_match(&self, a_range: Range<usize>, b_range: Range<usize>) -> MatchingBlock {
        let mut best = MatchingBlock { a: a_range.start, b: b_range.start, size: 0 };

        // j → length of the run ending at (i - 1, j)
        let mut run_lengths: HashMap<usize, usize> = HashMap::new();
        for i in a_range.clone() {
            let mut next_run_lengths = HashMap::new();
            let positions = self.a.get(i).and_then(|ch| self.b_positions.get(ch));

            for &j in positions.into_iter().flatten() {
                if j < b_range.start {
                    continue;
                }
                if j >= b_range.end {
                    break;
                }

                let previous =
                    j.checked_sub(1).and_then(|prev| run_lengths.get(&prev)).copied().unwrap_or(0);
                let size = previous + 1;
                next_run_lengths.insert(j, size);

                if size > best.size {
                    best = MatchingBlock { a: i + 1 - size, b: j + 1 - size, size };
                }
            }

            run_lengths = next_run_lengths;
        }

        while best.a > a_range.start
            && best.b > b_range.start
            && self.a.get(best.a - 1) == self.b.get(best.b - 1)
        {
            best = MatchingBlock { a: best.a - 1, b: best.b - 1, size: best.size + 1 };
        }

        while best.a_end() < a_range.end
            && best.b_end() < b_range.end
            && self.a.get(best.a_end()) == self.b.get(best.b_end())
        {
            best.size += 1;
        }

        best
    }

    /// All blocks, longest first within each window, then sorted and merged.
    fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut blocks = Vec::new();
        let mut pending = vec![(0..self.a.len(), 0..self.b.len())];

        while let Some((a_range, b_range)) = pending.pop() {
            let block = self.longest_match(a_range.clone(), b_range.clone());
            if block.size == 0 {
                continue;
            }

            if a_range.start < block.a && b_range.start < block.b {
                pending.push((a_range.start..block.a, b_range.start..block.b));
            }
            if block.a_end() < a_range.end && block.b_end() < b_range.end {
                pending.push((block.a_end()..a_range.end, block.b_end()..b_range.end));
            }
            blocks.push(block);
        }

        blocks.sort_unstable_by_key(|block| (block.a, block.b));

        let mut merged: Vec<MatchingBlock> = Vec::with_capacity(blocks.len());
        for block in blocks {
            match merged.last_mut() {
                Some(last) if last.a_end() == block.a && last.b_end() == block.b => {
                    last.size += block.size;
                }
                _ => merged.push(block),
            }
        }
        merged
    }

    /// `2 * M / T`, or 1.0 when both strings are empty
    #[allow(clippy::cast_precision_loss, clippy::float_arithmetic)]
    fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }

        let matched: usize = self.matching_blocks().iter().map(|block| block.size).sum();
        (2 * matched) as f64 / total as f64
    }
}
