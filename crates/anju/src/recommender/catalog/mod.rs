pub(crate) mod normalizer;
mod parser;

use crate::config::CatalogConfig;
use crate::recommender::domain::{
    DishCatalog, DuplicateKeyword, DuplicateQuestion, ProfileCatalog, QuestionNumber, QuestionSet,
};
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reference table a catalog error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogTable {
    Profiles,
    Dishes,
    Questions,
}

impl fmt::Display for CatalogTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CatalogTable::Profiles => "profile catalog",
            CatalogTable::Dishes => "dish catalog",
            CatalogTable::Questions => "question set",
        };
        f.write_str(label)
    }
}

/// Failure while loading reference data. Always fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {table} from {}: {source}", .path.display())]
    Io {
        table: CatalogTable,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid CSV data in {table}: {source}")]
    Csv {
        table: CatalogTable,
        #[source]
        source: csv::Error,
    },
    #[error("{table} line {line}: required field '{field}' is missing or empty")]
    MissingField {
        table: CatalogTable,
        line: usize,
        field: &'static str,
    },
    #[error("dish catalog line {line}: spicy_level '{value}' is not a finite, non-negative number")]
    InvalidSpicyLevel { line: usize, value: String },
    #[error("question {q_no} has no options")]
    NoOptions { q_no: QuestionNumber },
    #[error(transparent)]
    DuplicateKeyword(#[from] DuplicateKeyword),
    #[error(transparent)]
    DuplicateQuestion(#[from] DuplicateQuestion),
    #[error("{0} has no rows")]
    Empty(CatalogTable),
}

impl CatalogError {
    pub(crate) fn csv(table: CatalogTable, source: csv::Error) -> Self {
        Self::Csv { table, source }
    }
}

/// The three reference tables, loaded once and shared read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalogs {
    pub profiles: ProfileCatalog,
    pub dishes: DishCatalog,
    pub questions: QuestionSet,
}

impl Catalogs {
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let (profiles, dishes) = load_catalogs(&config.profiles_path, &config.dishes_path)?;
        let questions = CatalogLoader::questions_from_path(&config.questions_path)?;

        Ok(Self {
            profiles,
            dishes,
            questions,
        })
    }
}

/// Loads the profile and dish tables used by the result calculator.
pub fn load_catalogs<P, D>(
    profile_catalog_path: P,
    dish_catalog_path: D,
) -> Result<(ProfileCatalog, DishCatalog), CatalogError>
where
    P: AsRef<Path>,
    D: AsRef<Path>,
{
    let profiles = CatalogLoader::profiles_from_path(profile_catalog_path)?;
    let dishes = CatalogLoader::dishes_from_path(dish_catalog_path)?;
    Ok((profiles, dishes))
}

pub struct CatalogLoader;

impl CatalogLoader {
    pub fn profiles_from_path<P: AsRef<Path>>(path: P) -> Result<ProfileCatalog, CatalogError> {
        let file = open(CatalogTable::Profiles, path.as_ref())?;
        Self::profiles_from_reader(file)
    }

    pub fn profiles_from_reader<R: Read>(reader: R) -> Result<ProfileCatalog, CatalogError> {
        let profiles = parser::parse_profiles(reader)?;
        if profiles.is_empty() {
            return Err(CatalogError::Empty(CatalogTable::Profiles));
        }

        let catalog = ProfileCatalog::new(profiles)?;
        debug!(profiles = catalog.len(), "profile catalog loaded");
        Ok(catalog)
    }

    pub fn dishes_from_path<P: AsRef<Path>>(path: P) -> Result<DishCatalog, CatalogError> {
        let file = open(CatalogTable::Dishes, path.as_ref())?;
        Self::dishes_from_reader(file)
    }

    pub fn dishes_from_reader<R: Read>(reader: R) -> Result<DishCatalog, CatalogError> {
        let catalog = DishCatalog::new(parser::parse_dishes(reader)?);
        if catalog.is_empty() {
            warn!("dish catalog is empty; recommendations will list no dishes");
        } else {
            debug!(dishes = catalog.len(), "dish catalog loaded");
        }
        Ok(catalog)
    }

    pub fn questions_from_path<P: AsRef<Path>>(path: P) -> Result<QuestionSet, CatalogError> {
        let file = open(CatalogTable::Questions, path.as_ref())?;
        Self::questions_from_reader(file)
    }

    pub fn questions_from_reader<R: Read>(reader: R) -> Result<QuestionSet, CatalogError> {
        let questions = parser::parse_questions(reader)?;
        if questions.is_empty() {
            return Err(CatalogError::Empty(CatalogTable::Questions));
        }

        let set = QuestionSet::new(questions)?;
        debug!(questions = set.len(), "question set loaded");
        Ok(set)
    }
}

fn open(table: CatalogTable, path: &Path) -> Result<File, CatalogError> {
    File::open(path).map_err(|source| CatalogError::Io {
        table,
        path: path.to_path_buf(),
        source,
    })
}
