use anju::config::CatalogConfig;
use anju::recommender::{
    AnswerError, AnswerSet, Catalogs, NoJitter, QuizSession, RecommendError, ResultCalculator,
    ScoringConfig, SeededJitter,
};
use std::collections::BTreeSet;
use std::path::PathBuf;

fn bundled_catalogs() -> Catalogs {
    let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data");
    Catalogs::load(&CatalogConfig {
        profiles_path: data.join("type_profiles.csv"),
        dishes_path: data.join("dishes.csv"),
        questions_path: data.join("questions.csv"),
    })
    .expect("bundled catalogs load")
}

fn answer_every_question_with(catalogs: &Catalogs, option: usize) -> AnswerSet {
    let mut session = QuizSession::new(&catalogs.questions);
    while !session.is_complete() {
        session.answer(option).expect("option exists");
    }
    session.finish().expect("quiz complete")
}

fn dish_names(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn spicy_run_recommends_fire_chaser_and_hot_dishes() {
    let catalogs = bundled_catalogs();
    let answers = answer_every_question_with(&catalogs, 0);
    let calculator = ResultCalculator::default();

    let recommendation = calculator
        .calculate_for_quiz(
            &catalogs.questions,
            &answers,
            &catalogs.profiles,
            &catalogs.dishes,
            &mut SeededJitter::from_seed(8),
        )
        .expect("recommendation");

    assert_eq!(recommendation.profile.keyword, "Fire Chaser");
    assert_eq!(recommendation.preferences.spicy, 2);
    assert_eq!(recommendation.preferences.soup, 1);

    let fire = recommendation
        .profile_scores
        .iter()
        .find(|score| score.keyword == "Fire Chaser")
        .expect("score present");
    assert_eq!(fire.base_score, 8);

    let top: BTreeSet<String> = recommendation
        .dish_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    assert_eq!(
        top,
        dish_names(&[
            "Buldak",
            "Spicy Chicken Feet",
            "Jjamppong Tang",
            "Tteokbokki",
            "Golbaengi Muchim"
        ])
    );
}

#[test]
fn mild_run_recommends_clean_palate_and_gentle_dishes() {
    let catalogs = bundled_catalogs();
    let answers = answer_every_question_with(&catalogs, 1);
    let calculator = ResultCalculator::default();

    let recommendation = calculator
        .calculate_for_quiz(
            &catalogs.questions,
            &answers,
            &catalogs.profiles,
            &catalogs.dishes,
            &mut SeededJitter::from_seed(8),
        )
        .expect("recommendation");

    assert_eq!(recommendation.profile.keyword, "Clean Palate");
    assert_eq!(recommendation.preferences.mild, 2);
    assert!(recommendation
        .dishes
        .iter()
        .all(|ranked| ranked.dish.spicy_level == 0.0));
    assert_eq!(recommendation.dishes.len(), 5);
}

#[test]
fn seeded_runs_are_reproducible() {
    let catalogs = bundled_catalogs();
    let answers = answer_every_question_with(&catalogs, 2);
    let calculator = ResultCalculator::default();

    let run = |seed| {
        calculator
            .calculate(
                &answers,
                &catalogs.profiles,
                &catalogs.dishes,
                &mut SeededJitter::from_seed(seed),
            )
            .expect("recommendation")
    };

    assert_eq!(run(31), run(31));
}

#[test]
fn jitter_free_ranking_is_non_increasing() {
    let catalogs = bundled_catalogs();
    let calculator = ResultCalculator::new(ScoringConfig::default().without_jitter());

    for option in 0..3 {
        let answers = answer_every_question_with(&catalogs, option);
        let recommendation = calculator
            .calculate(&answers, &catalogs.profiles, &catalogs.dishes, &mut NoJitter)
            .expect("recommendation");

        assert!(recommendation
            .dishes
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score));
    }
}

#[test]
fn partial_answer_set_is_refused() {
    let catalogs = bundled_catalogs();
    let full = answer_every_question_with(&catalogs, 0);
    let answers: AnswerSet = full.iter().filter(|(q_no, _)| *q_no != 4).collect();

    let error = ResultCalculator::default()
        .calculate_for_quiz(
            &catalogs.questions,
            &answers,
            &catalogs.profiles,
            &catalogs.dishes,
            &mut NoJitter,
        )
        .expect_err("question 4 missing");

    assert_eq!(
        error,
        RecommendError::Answers(AnswerError::Incomplete {
            missing: 4,
            expected: 5,
            answered: 4
        })
    );
}
