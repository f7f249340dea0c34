//! Process-local session counters. Never persisted; a session's analytics
//! die with it, only the weight matrix survives a save.

use chrono::{DateTime, Utc};

use engram_core::models::FeedbackOutcome;

/// Running totals for one session's rank/feedback activity.
#[derive(Debug, Clone)]
pub struct SessionAnalytics {
    /// Rank calls served.
    pub queries_ranked: u64,
    /// Candidates scored across all rank calls.
    pub candidates_scored: u64,
    /// Feedback batches applied.
    pub feedback_batches: u64,
    /// Individual feedback records applied.
    pub feedback_records: u64,
    /// Sum of |label - predicted| across all applied records.
    pub cumulative_absolute_error: f64,
    /// Sum and count of rank positions of relevant records, for batches
    /// that supplied an ordering.
    relevant_rank_sum: u64,
    relevant_rank_count: u64,
    /// Timestamp of the most recent rank or feedback call.
    pub last_activity: DateTime<Utc>,
}

impl Default for SessionAnalytics {
    fn default() -> Self {
        Self {
            queries_ranked: 0,
            candidates_scored: 0,
            feedback_batches: 0,
            feedback_records: 0,
            cumulative_absolute_error: 0.0,
            relevant_rank_sum: 0,
            relevant_rank_count: 0,
            last_activity: Utc::now(),
        }
    }
}

impl SessionAnalytics {
    pub fn record_rank(&mut self, candidates: usize) {
        self.queries_ranked += 1;
        self.candidates_scored += candidates as u64;
        self.last_activity = Utc::now();
    }

    pub fn record_feedback(
        &mut self,
        outcome: &FeedbackOutcome,
        labels: &[f64],
        ordering: Option<&[usize]>,
    ) {
        self.feedback_batches += 1;
        self.feedback_records += outcome.records_applied as u64;
        self.cumulative_absolute_error += outcome.total_absolute_error;
        if let Some(ordering) = ordering {
            for (&label, &rank) in labels.iter().zip(ordering) {
                if label == 1.0 {
                    self.relevant_rank_sum += rank as u64;
                    self.relevant_rank_count += 1;
                }
            }
        }
        self.last_activity = Utc::now();
    }

    /// Mean rank position of relevant feedback records, when orderings were
    /// supplied. `None` until the first relevant record arrives with one.
    pub fn mean_relevant_rank(&self) -> Option<f64> {
        if self.relevant_rank_count == 0 {
            None
        } else {
            Some(self.relevant_rank_sum as f64 / self.relevant_rank_count as f64)
        }
    }

    /// Mean absolute error across every record this session has applied.
    pub fn mean_absolute_error(&self) -> f64 {
        if self.feedback_records == 0 {
            0.0
        } else {
            self.cumulative_absolute_error / self.feedback_records as f64
        }
    }
}
