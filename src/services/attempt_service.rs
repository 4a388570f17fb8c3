use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::domain::QuizAttempt;
use crate::models::dto::response::{GenreStat, StatsResponse, SubfieldStat};

/// Append-only store of graded quiz attempts. At most one attempt is kept
/// per quiz id and persona id; later submissions for the same pair are
/// ignored. In-memory only, like the rate limiter.
pub struct AttemptLog {
    attempts: Mutex<Vec<QuizAttempt>>,
}

impl AttemptLog {
    pub fn new() -> Self {
        Self {
            attempts: Mutex::new(Vec::new()),
        }
    }

    /// Records a first attempt and returns true; a duplicate returns false
    /// and leaves the log unchanged.
    pub fn record(&self, attempt: QuizAttempt) -> bool {
        let mut attempts = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        let exists = attempts
            .iter()
            .any(|a| a.quiz_id == attempt.quiz_id && a.persona_id == attempt.persona_id);
        if exists {
            return false;
        }
        attempts.push(attempt);
        true
    }

    pub fn len(&self) -> usize {
        let attempts = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Accuracy per genre, sorted weakest first.
    pub fn genre_stats(&self) -> StatsResponse {
        let attempts = self.attempts.lock().unwrap_or_else(|e| e.into_inner());

        let mut tallies: HashMap<&str, (usize, usize)> = HashMap::new();
        for attempt in attempts.iter() {
            let tally = tallies.entry(attempt.genre.as_str()).or_insert((0, 0));
            tally.0 += 1;
            if attempt.correct {
                tally.1 += 1;
            }
        }

        let mut by_genre: Vec<GenreStat> = tallies
            .into_iter()
            .map(|(genre, (total, correct))| GenreStat {
                genre: genre.to_string(),
                total,
                correct,
                accuracy: accuracy(correct, total),
            })
            .collect();
        by_genre.sort_by(|a, b| a.accuracy.cmp(&b.accuracy).then(a.genre.cmp(&b.genre)));

        StatsResponse {
            weakest: by_genre.first().cloned(),
            strongest: by_genre.last().cloned(),
            by_genre,
        }
    }

    /// Subfield breakdown within one genre, sorted by volume then accuracy.
    pub fn subfield_stats(&self, genre: &str) -> Vec<SubfieldStat> {
        let attempts = self.attempts.lock().unwrap_or_else(|e| e.into_inner());

        let mut tallies: HashMap<&str, (usize, usize)> = HashMap::new();
        for attempt in attempts.iter().filter(|a| a.genre == genre) {
            let tally = tallies.entry(attempt.subfield.as_str()).or_insert((0, 0));
            tally.0 += 1;
            if attempt.correct {
                tally.1 += 1;
            }
        }

        let mut stats: Vec<SubfieldStat> = tallies
            .into_iter()
            .map(|(subfield, (total, correct))| SubfieldStat {
                subfield: subfield.to_string(),
                total,
                correct,
                accuracy: accuracy(correct, total),
            })
            .collect();
        stats.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then(b.accuracy.cmp(&a.accuracy))
                .then(a.subfield.cmp(&b.subfield))
        });
        stats
    }
}

impl Default for AttemptLog {
    fn default() -> Self {
        Self::new()
    }
}

fn accuracy(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * 100.0).round() as u32
}
