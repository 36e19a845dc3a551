use crate::registry::CityId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Rejections produced while normalizing a city name.
///
/// The console recovers from these by asking for the same field again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("City name must be between 1 and 25 characters")]
    Length,

    #[error("City name cannot be empty or just spaces")]
    EmptyAfterTrim,

    #[error("Invalid Rwandan district name")]
    UnknownDistrict,

    #[error("City already exists")]
    DuplicateCity,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("City with index {0} not found")]
    CityNotFound(CityId),

    #[error("City not found: {0}")]
    CityNameNotFound(String),

    #[error("Cannot add road from a city to itself")]
    SelfLoop,

    #[error("Road already exists")]
    RoadExists,

    #[error("No road exists between the two cities")]
    NoRoad,

    #[error("Budget must be positive, got {0}")]
    NonPositiveBudget(f64),

    #[error("Position {position} out of range for {dimension} cities")]
    PositionOutOfRange { position: usize, dimension: usize },
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    pub fn is_lookup(&self) -> bool {
        matches!(self, Error::CityNotFound(_) | Error::CityNameNotFound(_))
    }

    /// Road and budget constraint violations.
    pub fn is_graph(&self) -> bool {
        matches!(
            self,
            Error::SelfLoop
                | Error::RoadExists
                | Error::NoRoad
                | Error::NonPositiveBudget(_)
                | Error::PositionOutOfRange { .. }
        )
    }
}
