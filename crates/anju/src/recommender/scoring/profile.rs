use super::config::ScoringConfig;
use super::{ProfileMatch, ProfileScore, ScoringError};
use crate::recommender::domain::{AnswerSet, Profile, ProfileCatalog};
use crate::recommender::jitter::JitterSource;
use tracing::debug;

pub(crate) fn match_profile<J: JitterSource + ?Sized>(
    answers: &AnswerSet,
    catalog: &ProfileCatalog,
    config: &ScoringConfig,
    jitter: &mut J,
) -> Result<ProfileMatch, ScoringError> {
    if catalog.is_empty() {
        return Err(ScoringError::EmptyProfileCatalog);
    }

    let mut base_scores = vec![0_u32; catalog.len()];
    for (q_no, answer) in answers.iter() {
        let Some(winner) = question_winner(catalog.profiles(), answer) else {
            debug!(q_no, "no profile matched answer");
            continue;
        };

        let weight = config.question_weights.weight(q_no);
        base_scores[winner] += weight;
        debug!(
            q_no,
            weight,
            profile = %catalog.profiles()[winner].keyword,
            "question awarded to profile"
        );
    }

    let scores: Vec<ProfileScore> = catalog
        .profiles()
        .iter()
        .zip(base_scores)
        .map(|(profile, base_score)| {
            let offset = jitter.jitter(config.profile_jitter);
            ProfileScore {
                keyword: profile.keyword.clone(),
                base_score,
                jitter: offset,
                total: f64::from(base_score) + offset,
            }
        })
        .collect();

    let best = best_index(&scores);
    Ok(ProfileMatch {
        profile: catalog.profiles()[best].clone(),
        scores,
    })
}

/// Index of the profile with the most token hits in `answer`.
///
/// The earliest profile reaching the maximum keeps the question; a question
/// with no hits is awarded to nobody.
fn question_winner(profiles: &[Profile], answer: &str) -> Option<usize> {
    let mut winner = None;
    let mut best_count = 0;

    for (index, profile) in profiles.iter().enumerate() {
        let count = profile.match_count(answer);
        if count > best_count {
            best_count = count;
            winner = Some(index);
        }
    }

    winner
}

fn best_index(scores: &[ProfileScore]) -> usize {
    let mut best = 0;
    for (index, score) in scores.iter().enumerate().skip(1) {
        if score.total > scores[best].total {
            best = index;
        }
    }
    best
}
