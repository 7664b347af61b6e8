use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single keystroke measurement taken while typing a passage.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeyTime {
    pub key: char,
    pub time_ms: f64,
    pub correct: bool,
}

/// Per-letter summary of one attempt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeySample {
    pub key: char,
    pub hit_count: usize,
    pub miss_count: usize,
    /// Mean time of the correct hits, zero when there were none.
    pub time_to_type_ms: f64,
}

/// Outcome of one completed typing attempt.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DrillResult {
    pub timestamp: DateTime<Utc>,
    pub histogram: Vec<KeySample>,
}

impl DrillResult {
    pub fn new(timestamp: DateTime<Utc>, histogram: Vec<KeySample>) -> Self {
        Self {
            timestamp,
            histogram,
        }
    }

    /// Fold raw keystrokes into a histogram, one sample per key in order of
    /// first appearance.
    pub fn from_key_times(timestamp: DateTime<Utc>, key_times: &[KeyTime]) -> Self {
        let mut histogram: Vec<KeySample> = Vec::new();
        let mut hit_totals: Vec<f64> = Vec::new();

        for kt in key_times {
            let idx = match histogram.iter().position(|s| s.key == kt.key) {
                Some(idx) => idx,
                None => {
                    histogram.push(KeySample {
                        key: kt.key,
                        hit_count: 0,
                        miss_count: 0,
                        time_to_type_ms: 0.0,
                    });
                    hit_totals.push(0.0);
                    histogram.len() - 1
                }
            };
            if kt.correct {
                histogram[idx].hit_count += 1;
                hit_totals[idx] += kt.time_ms;
            } else {
                histogram[idx].miss_count += 1;
            }
        }

        for (sample, total) in histogram.iter_mut().zip(hit_totals) {
            if sample.hit_count > 0 {
                sample.time_to_type_ms = total / sample.hit_count as f64;
            }
        }

        Self::new(timestamp, histogram)
    }

    pub fn sample(&self, key: char) -> Option<&KeySample> {
        self.histogram.iter().find(|s| s.key == key)
    }
}
