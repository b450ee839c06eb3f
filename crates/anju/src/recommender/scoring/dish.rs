use super::config::{PreferenceMarkers, ScoringConfig};
use super::RankedDish;
use crate::recommender::domain::{AnswerSet, Dish, DishCatalog};
use crate::recommender::jitter::JitterSource;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Number of answers carrying each preference marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceCounts {
    pub spicy: u32,
    pub mild: u32,
    pub soup: u32,
}

impl PreferenceCounts {
    pub fn from_answers(answers: &AnswerSet, markers: &PreferenceMarkers) -> Self {
        let mut counts = Self::default();
        for answer in answers.texts() {
            counts.spicy += u32::from(mentions_any(answer, &markers.spicy));
            counts.mild += u32::from(mentions_any(answer, &markers.mild));
            counts.soup += u32::from(mentions_any(answer, &markers.soup));
        }
        counts
    }
}

fn mentions_any(answer: &str, markers: &[String]) -> bool {
    markers
        .iter()
        .filter(|marker| !marker.is_empty())
        .any(|marker| answer.contains(marker.as_str()))
}

/// Score of `dish` before jitter.
pub fn base_score(dish: &Dish, counts: PreferenceCounts, config: &ScoringConfig) -> f64 {
    let level = dish.spicy_level;
    let mut score = level * f64::from(counts.spicy);
    score += (config.spicy_scale_max - level) * f64::from(counts.mild);
    if counts.soup > 0 {
        score -= level * config.soup_penalty_factor;
    }
    score
}

pub(crate) fn rank_dishes<J: JitterSource + ?Sized>(
    counts: PreferenceCounts,
    catalog: &DishCatalog,
    config: &ScoringConfig,
    jitter: &mut J,
) -> Vec<RankedDish> {
    debug!(
        spicy = counts.spicy,
        mild = counts.mild,
        soup = counts.soup,
        "ranking dishes"
    );

    let mut ranked: Vec<RankedDish> = catalog
        .dishes()
        .iter()
        .map(|dish| {
            let base = base_score(dish, counts, config);
            RankedDish {
                dish: dish.clone(),
                base_score: base,
                score: base + jitter.jitter(config.dish_jitter),
            }
        })
        .collect();

    ranked.sort_by(|left, right| descending(left.score, right.score));
    ranked.truncate(config.top_n);
    ranked
}

fn descending(left: f64, right: f64) -> Ordering {
    right.total_cmp(&left)
}
