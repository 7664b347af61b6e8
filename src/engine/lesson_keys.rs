use crate::engine::key_stats::KeyStatsMap;
use crate::engine::target::Target;
use crate::generator::phonetic::Letter;

#[derive(Clone, Debug, PartialEq)]
pub struct LessonKey {
    pub letter: Letter,
    pub sample_count: usize,
    pub confidence: Option<f64>,
    pub best_confidence: Option<f64>,
    pub included: bool,
    pub focused: bool,
}

/// The letters flagged for the next round.
#[derive(Clone, Debug, Default)]
pub struct LessonKeys {
    keys: Vec<LessonKey>,
}

impl LessonKeys {
    /// Include every letter of the alphabet. Word passages cannot be limited
    /// to a subset of letters without breaking the words, so no key is
    /// excluded or singled out.
    pub fn include_all(stats: &KeyStatsMap, target: &Target) -> Self {
        let keys = stats
            .iter()
            .map(|stat| LessonKey {
                letter: stat.letter,
                sample_count: stat.sample_count,
                confidence: target.confidence(stat),
                best_confidence: target.best_confidence(stat),
                included: true,
                focused: false,
            })
            .collect();
        Self { keys }
    }

    pub fn keys(&self) -> &[LessonKey] {
        &self.keys
    }

    pub fn included(&self) -> impl Iterator<Item = &LessonKey> {
        self.keys.iter().filter(|k| k.included)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The included key with the lowest confidence still under the target.
    pub fn find_weakest(&self) -> Option<&LessonKey> {
        self.included()
            .filter_map(|k| k.confidence.filter(|&c| c < 1.0).map(|c| (k, c)))
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(k, _)| k)
    }
}
