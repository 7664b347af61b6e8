use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::generator::phonetic::Letter;
use crate::session::result::DrillResult;

const EMA_ALPHA: f64 = 0.1;
const RECENT_TIMES_LEN: usize = 30;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyStat {
    pub letter: Letter,
    /// Number of attempts in which the letter appeared.
    pub sample_count: usize,
    pub hit_count: usize,
    pub miss_count: usize,
    pub filtered_time_ms: Option<f64>,
    pub best_time_ms: Option<f64>,
    pub recent_times: Vec<f64>,
}

impl KeyStat {
    pub fn new(letter: Letter) -> Self {
        Self {
            letter,
            sample_count: 0,
            hit_count: 0,
            miss_count: 0,
            filtered_time_ms: None,
            best_time_ms: None,
            recent_times: Vec::new(),
        }
    }

    pub fn has_samples(&self) -> bool {
        self.sample_count > 0
    }

    fn record(&mut self, hit_count: usize, miss_count: usize, time_ms: f64) {
        self.sample_count += 1;
        self.hit_count += hit_count;
        self.miss_count += miss_count;

        // Attempts with only misses carry no timing.
        if hit_count == 0 {
            return;
        }

        let filtered = match self.filtered_time_ms {
            None => time_ms,
            Some(prev) => EMA_ALPHA * time_ms + (1.0 - EMA_ALPHA) * prev,
        };
        self.filtered_time_ms = Some(filtered);
        self.best_time_ms = Some(self.best_time_ms.map_or(filtered, |b| b.min(filtered)));

        self.recent_times.push(time_ms);
        if self.recent_times.len() > RECENT_TIMES_LEN {
            self.recent_times.remove(0);
        }
    }
}

/// Per-letter statistics covering the whole alphabet of a model, in model
/// order. Letters that were never typed have zero-sample entries.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct KeyStatsMap {
    stats: Vec<KeyStat>,
}

impl KeyStatsMap {
    pub fn build(letters: &[Letter], results: &[DrillResult]) -> Self {
        let mut stats: Vec<KeyStat> = letters.iter().map(|&l| KeyStat::new(l)).collect();
        let index: HashMap<char, usize> = letters
            .iter()
            .enumerate()
            .map(|(i, l)| (l.code_point, i))
            .collect();

        for result in results {
            for sample in &result.histogram {
                if let Some(&i) = index.get(&sample.key) {
                    stats[i].record(sample.hit_count, sample.miss_count, sample.time_to_type_ms);
                }
            }
        }

        tracing::debug!(
            "Analyzed {} results over {} letters",
            results.len(),
            stats.len()
        );
        Self { stats }
    }

    pub fn get(&self, code_point: char) -> Option<&KeyStat> {
        self.stats.iter().find(|s| s.letter.code_point == code_point)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyStat> {
        self.stats.iter()
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::generator::phonetic::PhoneticModel;
    use crate::session::result::KeySample;

    fn result(samples: &[(char, usize, usize, f64)]) -> DrillResult {
        DrillResult::new(
            Utc::now(),
            samples
                .iter()
                .map(|&(key, hit_count, miss_count, time_to_type_ms)| KeySample {
                    key,
                    hit_count,
                    miss_count,
                    time_to_type_ms,
                })
                .collect(),
        )
    }

    #[test]
    fn test_empty_results_cover_every_letter() {
        let model = PhoneticModel::english();
        let map = KeyStatsMap::build(model.letters(), &[]);
        assert_eq!(map.len(), 26);
        assert!(map.iter().all(|s| !s.has_samples() && s.filtered_time_ms.is_none()));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let model = PhoneticModel::english();
        let map = KeyStatsMap::build(model.letters(), &[result(&[('7', 3, 0, 200.0)])]);
        assert_eq!(map.len(), 26);
        assert!(map.get('7').is_none());
    }

    #[test]
    fn test_first_sample_seeds_filter_then_ema() {
        let model = PhoneticModel::english();
        let results = [
            result(&[('e', 2, 0, 400.0)]),
            result(&[('e', 1, 1, 200.0)]),
        ];
        let map = KeyStatsMap::build(model.letters(), &results);
        let e = map.get('e').unwrap();
        assert_eq!(e.sample_count, 2);
        assert_eq!(e.hit_count, 3);
        assert_eq!(e.miss_count, 1);
        // 0.1 * 200 + 0.9 * 400
        assert!((e.filtered_time_ms.unwrap() - 380.0).abs() < 1e-9);
        assert!((e.best_time_ms.unwrap() - 380.0).abs() < 1e-9);
        assert_eq!(e.recent_times, vec![400.0, 200.0]);
    }

    #[test]
    fn test_miss_only_attempt_counts_without_timing() {
        let model = PhoneticModel::english();
        let map = KeyStatsMap::build(model.letters(), &[result(&[('q', 0, 2, 0.0)])]);
        let q = map.get('q').unwrap();
        assert!(q.has_samples());
        assert_eq!(q.miss_count, 2);
        assert!(q.filtered_time_ms.is_none());
    }

    #[test]
    fn test_recent_times_are_bounded() {
        let model = PhoneticModel::english();
        let results: Vec<DrillResult> = (0..50)
            .map(|i| result(&[('t', 1, 0, 200.0 + i as f64)]))
            .collect();
        let map = KeyStatsMap::build(model.letters(), &results);
        let t = map.get('t').unwrap();
        assert_eq!(t.recent_times.len(), 30);
        assert_eq!(t.recent_times[0], 220.0);
    }
}
