//! Description matchers
//!
//! A matcher scores one query term against one catalog description and
//! returns a normalized distance: 0.0 is a perfect match, 1.0 is the worst.

use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::config::{MatchAlgorithm, SearchConfig};

pub trait Matcher: Send + Sync {
    /// Distance of `term` to `candidate` in `[0, 1]`, or `None` if it cannot match at all
    fn distance(&self, term: &str, candidate: &str) -> Option<f64>;
}

pub fn matcher_for(config: &SearchConfig) -> Box<dyn Matcher> {
    match config.algorithm {
        MatchAlgorithm::Approximate => Box::new(ApproximateMatcher::new(
            config.location_distance,
            config.ignore_location,
        )),
        MatchAlgorithm::Subsequence => Box::new(SubsequenceMatcher::new()),
    }
}

/// Typo-tolerant substring matcher
///
/// Finds the substring of the candidate with the fewest edits to the term
/// (Sellers' algorithm) and scores it as
/// `edits / term_len + start_offset / location_distance`.
#[derive(Debug, Clone)]
pub struct ApproximateMatcher {
    location_distance: usize,
    ignore_location: bool,
}

impl ApproximateMatcher {
    pub fn new(location_distance: usize, ignore_location: bool) -> Self {
        Self {
            location_distance,
            ignore_location,
        }
    }

    fn location_penalty(&self, start: usize) -> f64 {
        if self.ignore_location || start == 0 {
            0.0
        } else if self.location_distance == 0 {
            1.0
        } else {
            start as f64 / self.location_distance as f64
        }
    }
}

impl Default for ApproximateMatcher {
    fn default() -> Self {
        Self::new(SearchConfig::default().location_distance, false)
    }
}

impl Matcher for ApproximateMatcher {
    fn distance(&self, term: &str, candidate: &str) -> Option<f64> {
        let pattern = lowercase_chars(term);
        if pattern.is_empty() {
            return None;
        }
        let text = lowercase_chars(candidate);
        let len = pattern.len() as f64;

        let best = alignments(&pattern, &text)
            .map(|(edits, start)| edits as f64 / len + self.location_penalty(start))
            .fold(f64::INFINITY, f64::min);

        Some(best.min(1.0))
    }
}

fn lowercase_chars(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// For every end position in `text`, the fewest edits turning `pattern` into a
/// substring ending there, with that substring's start offset.
fn alignments(pattern: &[char], text: &[char]) -> impl Iterator<Item = (usize, usize)> {
    // Row 0: the empty pattern matches anywhere for free
    let mut prev: Vec<(usize, usize)> = (0..=text.len()).map(|j| (0, j)).collect();
    let mut cur = vec![(0, 0); text.len() + 1];

    for (i, &p) in pattern.iter().enumerate() {
        cur[0] = (i + 1, 0);
        for (j, &t) in text.iter().enumerate() {
            let (diag_cost, diag_start) = prev[j];
            let substitute = (diag_cost + usize::from(p != t), diag_start);
            let skip_pattern = (prev[j + 1].0 + 1, prev[j + 1].1);
            let skip_text = (cur[j].0 + 1, cur[j].1);
            cur[j + 1] = substitute.min(skip_pattern).min(skip_text);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev.into_iter()
}

/// fzf-style subsequence matcher
///
/// Normalizes the skim score against the term's score for matching itself.
pub struct SubsequenceMatcher {
    matcher: SkimMatcherV2,
}

impl fmt::Debug for SubsequenceMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubsequenceMatcher").finish_non_exhaustive()
    }
}

impl Default for SubsequenceMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SubsequenceMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }
}

impl Matcher for SubsequenceMatcher {
    fn distance(&self, term: &str, candidate: &str) -> Option<f64> {
        let perfect = self.matcher.fuzzy_match(term, term).filter(|&s| s > 0)?;
        let score = self.matcher.fuzzy_match(candidate, term)?;

        Some((1.0 - score as f64 / perfect as f64).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
