use crate::cli::{CatalogArgs, QuizArgs, RecommendArgs};
use crate::infra::{build_service, load_config};
use anju::error::AppError;
use anju::recommender::{AnswerSet, Recommendation, RecommendationService};
use anju::telemetry;
use std::io::{self, BufRead, Write};

fn prepare(overrides: &CatalogArgs) -> Result<RecommendationService, AppError> {
    let config = load_config(overrides)?;
    telemetry::init(&config.telemetry)?;
    build_service(&config)
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let service = prepare(&args.catalog)?;
    let answers: AnswerSet = args.answers.into_iter().collect();
    let recommendation = service.recommend(&answers, args.seed)?;

    let mut stdout = io::stdout().lock();
    if args.json {
        let rendered = serde_json::to_string_pretty(&recommendation).map_err(io::Error::from)?;
        writeln!(stdout, "{rendered}")?;
    } else {
        render_recommendation(&mut stdout, &recommendation)?;
    }
    Ok(())
}

pub(crate) fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let service = prepare(&args.catalog)?;
    let mut stdout = io::stdout().lock();

    let Some(answers) = play(&service, io::stdin().lock(), &mut stdout)? else {
        writeln!(stdout, "quiz abandoned")?;
        return Ok(());
    };

    let recommendation = service.recommend(&answers, args.seed)?;
    writeln!(stdout)?;
    render_recommendation(&mut stdout, &recommendation)?;
    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let service = prepare(&args)?;
    let mut stdout = io::stdout().lock();
    render_catalog(&mut stdout, &service)?;
    Ok(())
}

/// Walks the question set over `input`; `None` when the user quits or input ends.
///
/// A number picks that option, `b` steps back, `r` starts over and `q` quits.
fn play<R, W>(
    service: &RecommendationService,
    input: R,
    output: &mut W,
) -> Result<Option<AnswerSet>, AppError>
where
    R: BufRead,
    W: Write,
{
    let mut session = service.session();
    let mut lines = input.lines();

    while let Some(question) = session.current() {
        let (answered, total) = session.progress();
        writeln!(output, "[{}/{}] {}", answered + 1, total, question.question)?;
        for (index, option) in question.options.iter().enumerate() {
            writeln!(output, "  {}) {}", index + 1, option)?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        match line?.trim() {
            "q" | "quit" => return Ok(None),
            "b" | "back" => {
                if !session.back() {
                    writeln!(output, "already at the first question")?;
                }
            }
            "r" | "restart" => session.restart(),
            choice => match choice.parse::<usize>() {
                Ok(number) if number > 0 => {
                    if let Err(err) = session.answer(number - 1) {
                        writeln!(output, "{err}")?;
                    }
                }
                _ => writeln!(output, "enter an option number (b = back, q = quit)")?,
            },
        }
    }

    Ok(Some(session.finish()?))
}

pub(crate) fn render_recommendation<W: Write>(
    output: &mut W,
    recommendation: &Recommendation,
) -> io::Result<()> {
    let profile = &recommendation.profile;
    writeln!(output, "Your anju type: {}", profile.keyword)?;
    if let Some(description) = &profile.description {
        writeln!(output, "  {description}")?;
    }
    writeln!(output, "Core combo: {}", profile.core_combo)?;

    if recommendation.dishes.is_empty() {
        writeln!(output, "No dishes available to recommend.")?;
        return Ok(());
    }

    writeln!(output, "Recommended dishes:")?;
    for (rank, ranked) in recommendation.dishes.iter().enumerate() {
        let dish = &ranked.dish;
        match &dish.category {
            Some(category) => writeln!(
                output,
                "  {}. {} ({category}, spicy {})",
                rank + 1,
                dish.name,
                dish.spicy_level
            )?,
            None => writeln!(
                output,
                "  {}. {} (spicy {})",
                rank + 1,
                dish.name,
                dish.spicy_level
            )?,
        }
    }
    Ok(())
}

fn render_catalog<W: Write>(output: &mut W, service: &RecommendationService) -> io::Result<()> {
    let catalogs = service.catalogs();

    writeln!(output, "Profiles ({}):", catalogs.profiles.len())?;
    for profile in catalogs.profiles.profiles() {
        writeln!(output, "  {} [{}]", profile.keyword, profile.core_combo)?;
    }

    writeln!(output, "Dishes ({}):", catalogs.dishes.len())?;
    for dish in catalogs.dishes.dishes() {
        writeln!(output, "  {} (spicy {})", dish.name, dish.spicy_level)?;
    }

    writeln!(output, "Questions ({}):", catalogs.questions.len())?;
    for question in catalogs.questions.questions() {
        writeln!(
            output,
            "  {}. {} ({} options)",
            question.q_no,
            question.question,
            question.options.len()
        )?;
    }
    Ok(())
}
