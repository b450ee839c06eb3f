use crate::cli::CatalogArgs;
use anju::config::{load_scoring_config, AppConfig};
use anju::error::AppError;
use anju::recommender::{Catalogs, QuestionNumber, RecommendationService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parses `N=TEXT` into a question number and its answer text.
pub(crate) fn parse_answer(raw: &str) -> Result<(QuestionNumber, String), String> {
    let (number, text) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected N=TEXT, got '{raw}'"))?;
    let q_no = number
        .trim()
        .parse::<QuestionNumber>()
        .map_err(|err| format!("failed to parse '{number}' as a question number ({err})"))?;
    Ok((q_no, text.trim().to_string()))
}

/// Environment configuration with command-line overrides applied on top.
pub(crate) fn load_config(overrides: &CatalogArgs) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;
    apply_overrides(&mut config, overrides)?;
    Ok(config)
}

pub(crate) fn apply_overrides(
    config: &mut AppConfig,
    overrides: &CatalogArgs,
) -> Result<(), AppError> {
    if let Some(path) = &overrides.profiles {
        config.catalog.profiles_path = path.clone();
    }
    if let Some(path) = &overrides.dishes {
        config.catalog.dishes_path = path.clone();
    }
    if let Some(path) = &overrides.questions {
        config.catalog.questions_path = path.clone();
    }
    if let Some(path) = &overrides.scoring_config {
        config.scoring.config = load_scoring_config(path)?;
    }
    Ok(())
}

pub(crate) fn build_service(config: &AppConfig) -> Result<RecommendationService, AppError> {
    let catalogs = Catalogs::load(&config.catalog)?;
    info!(
        profiles = catalogs.profiles.len(),
        dishes = catalogs.dishes.len(),
        questions = catalogs.questions.len(),
        "catalogs loaded"
    );

    Ok(RecommendationService::new(
        Arc::new(catalogs),
        config.scoring.config.clone(),
        config.scoring.seed,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anju::config::{
        AppEnvironment, CatalogConfig, ScoringSettings, ServerConfig, TelemetryConfig,
    };
    use std::path::PathBuf;

    fn base_config() -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
            catalog: CatalogConfig::default(),
            scoring: ScoringSettings::default(),
        }
    }

    #[test]
    fn parse_answer_splits_on_first_equals() {
        assert_eq!(
            parse_answer("3= soup = yes "),
            Ok((3, "soup = yes".to_string()))
        );
        assert_eq!(parse_answer("2="), Ok((2, String::new())));
    }

    #[test]
    fn parse_answer_rejects_malformed_input() {
        assert!(parse_answer("spicy").is_err());
        assert!(parse_answer("first=spicy").is_err());
        assert!(parse_answer("-1=spicy").is_err());
    }

    #[test]
    fn overrides_replace_only_given_paths() {
        let mut config = base_config();
        let overrides = CatalogArgs {
            profiles: Some(PathBuf::from("alt/profiles.csv")),
            ..CatalogArgs::default()
        };

        apply_overrides(&mut config, &overrides).expect("overrides apply");

        assert_eq!(
            config.catalog.profiles_path,
            PathBuf::from("alt/profiles.csv")
        );
        assert_eq!(
            config.catalog.dishes_path,
            PathBuf::from(CatalogConfig::DEFAULT_DISHES)
        );
    }

    #[test]
    fn missing_scoring_override_is_a_config_error() {
        let mut config = base_config();
        let overrides = CatalogArgs {
            scoring_config: Some(PathBuf::from("./no-such-scoring.json")),
            ..CatalogArgs::default()
        };

        let error = apply_overrides(&mut config, &overrides).expect_err("file is missing");
        assert!(matches!(error, AppError::Config(_)));
    }

    #[test]
    fn build_service_reports_missing_catalogs() {
        let mut config = base_config();
        config.catalog.profiles_path = PathBuf::from("./no-such-profiles.csv");

        let error = build_service(&config).err().expect("profiles are missing");
        assert!(matches!(error, AppError::Catalog(_)));
    }
}
