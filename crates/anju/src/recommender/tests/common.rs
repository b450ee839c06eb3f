use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::recommender::catalog::Catalogs;
use crate::recommender::domain::{
    AnswerSet, Dish, DishCatalog, Profile, ProfileCatalog, Question, QuestionSet,
};
use crate::recommender::jitter::JitterSource;
use crate::recommender::scoring::ScoringConfig;
use crate::recommender::service::RecommendationService;

/// Returns the same unit value on every draw.
pub(super) struct FixedJitter(pub(super) f64);

impl JitterSource for FixedJitter {
    fn unit(&mut self) -> f64 {
        self.0
    }
}

/// Replays a fixed sequence of unit values, then zeros.
pub(super) struct ScriptedJitter(pub(super) Vec<f64>);

impl JitterSource for ScriptedJitter {
    fn unit(&mut self) -> f64 {
        if self.0.is_empty() {
            0.0
        } else {
            self.0.remove(0)
        }
    }
}

pub(super) fn spicy_plain_profiles() -> ProfileCatalog {
    ProfileCatalog::new(vec![
        Profile::new("Spicy-Lover", "spicy,hot"),
        Profile::new("Plain-Lover", "mild,plain"),
    ])
    .expect("unique keywords")
}

pub(super) fn tasting_profiles() -> ProfileCatalog {
    ProfileCatalog::new(vec![
        Profile::new("Fire Chaser", "spicy,hot,chili")
            .with_description("Reaches for the reddest plate on the table."),
        Profile::new("Soup Soother", "soup,broth,warm")
            .with_description("Wants something warm to sip between rounds."),
        Profile::new("Clean Palate", "mild,plain,light")
            .with_description("Prefers gentle flavors that let the drink lead."),
        Profile::new("Crunch Seeker", "fried,crispy,crunchy")
            .with_description("Lives for the sound of the first bite."),
    ])
    .expect("unique keywords")
}

pub(super) fn dishes() -> DishCatalog {
    DishCatalog::new(vec![
        Dish::new("Buldak", 5.0),
        Dish::new("Tteokbokki", 4.0),
        Dish::new("Kimchi Jjigae", 3.0),
        Dish::new("Fried Chicken", 1.0),
        Dish::new("Eomuk Tang", 1.0),
        Dish::new("Dried Squid", 0.0),
        Dish::new("Fruit Platter", 0.0),
    ])
}

pub(super) fn question_set() -> QuestionSet {
    let question = |q_no, prompt: &str, options: [&str; 3]| Question {
        q_no,
        question: prompt.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
    };

    QuestionSet::new(vec![
        question(
            1,
            "How do you feel about heat?",
            ["Bring on the spicy chili", "Something mild please", "Crispy beats spicy"],
        ),
        question(
            2,
            "Pick a texture",
            ["Fried and crunchy", "Warm soup broth", "Plain and light"],
        ),
        question(
            3,
            "What are you drinking?",
            ["Soju with hot soup", "Beer with fried snacks", "Wine with something light"],
        ),
        question(
            4,
            "How hungry are you?",
            ["Starving, make it spicy", "Just a mild nibble", "Warm soup to share"],
        ),
        question(
            5,
            "Who are you with?",
            ["Friends who love hot food", "Family, keep it plain", "Colleagues after work"],
        ),
    ])
    .expect("unique question numbers")
}

pub(super) fn answers(entries: &[(u32, &str)]) -> AnswerSet {
    entries.iter().map(|(q_no, text)| (*q_no, *text)).collect()
}

/// Complete answer set leaning heavily toward spicy food.
pub(super) fn spicy_answers() -> AnswerSet {
    answers(&[
        (1, "Bring on the spicy chili"),
        (2, "Fried and crunchy"),
        (3, "Soju with hot soup"),
        (4, "Starving, make it spicy"),
        (5, "Friends who love hot food"),
    ])
}

pub(super) fn catalogs() -> Catalogs {
    Catalogs {
        profiles: tasting_profiles(),
        dishes: dishes(),
        questions: question_set(),
    }
}

pub(super) fn build_service(seed: Option<u64>) -> Arc<RecommendationService> {
    Arc::new(RecommendationService::new(
        Arc::new(catalogs()),
        ScoringConfig::default(),
        seed,
    ))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json body")
}
