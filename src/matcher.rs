use std::sync::Arc;

use crate::corpus::{Corpus, TrainingExample};
use crate::errors::RecommenderError;
use crate::similarity::Target;

/// Finds the corpus entry closest to a free-text input.
#[derive(Debug, Clone)]
pub struct Matcher {
    corpus: Arc<Corpus>,
    cutoff: f64,
}

impl Matcher {
    pub fn new(corpus: Arc<Corpus>, cutoff: f64) -> Result<Self, RecommenderError> {
        if !(0.0..=1.0).contains(&cutoff) {
            return Err(RecommenderError::ConfigError(format!(
                "similarity cutoff must be in [0.0, 1.0], got {}",
                cutoff
            )));
        }
        Ok(Self { corpus, cutoff })
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Best entry scoring at least the cutoff, with its score.
    ///
    /// Equal scores are broken by the greater `user_input`; among entries with
    /// identical `user_input` the first one wins.
    pub fn closest(&self, input: &str) -> Option<(&TrainingExample, f64)> {
        let target = Target::new(input);
        let mut best: Option<(&TrainingExample, f64)> = None;

        for example in self.corpus.examples() {
            let candidate: Vec<char> = example.user_input.chars().collect();
            if target.real_quick_ratio(&candidate) < self.cutoff
                || target.quick_ratio(&candidate) < self.cutoff
            {
                continue;
            }
            let score = target.ratio(&candidate);
            if score < self.cutoff {
                continue;
            }

            let better = match best {
                None => true,
                Some((current, current_score)) => {
                    score > current_score
                        || (score == current_score && example.user_input > current.user_input)
                }
            };
            if better {
                best = Some((example, score));
            }
        }

        best
    }

    /// Stored response for the closest entry, if one clears the cutoff.
    ///
    /// An entry with an empty stored response counts as no match.
    pub fn find_response(&self, input: &str) -> Option<&str> {
        let (example, score) = self.closest(input)?;
        log::debug!(
            "closest match {:?} (score {:.3}) for input {:?}",
            example.user_input,
            score,
            input
        );
        if example.response.is_empty() {
            return None;
        }
        Some(example.response.as_str())
    }
}
