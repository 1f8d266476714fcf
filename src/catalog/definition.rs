//! Catalog definitions - static career and education data.
//!
//! `Career` and `Education` hold the immutable properties of a card the
//! player can draw. Which careers and educations a player currently holds
//! is stored separately on the `Player`, by id.

use serde::{Deserialize, Serialize};

/// Unique identifier for a career in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CareerId(pub u16);

impl CareerId {
    /// Create a new career ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw index into the catalog.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CareerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Career({})", self.0)
    }
}

/// Unique identifier for an education in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EducationId(pub u16);

impl EducationId {
    /// Create a new education ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw index into the catalog.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for EducationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Education({})", self.0)
    }
}

/// A career card.
///
/// ```
/// use life_track::catalog::{Career, CareerId};
///
/// let plumber = Career::new(CareerId::new(2), "Plumber", 60_000)
///     .with_description("A plumber has a basic salary");
///
/// assert_eq!(plumber.salary, 60_000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Career {
    /// Catalog identifier.
    pub id: CareerId,

    /// Display name.
    pub name: String,

    /// Base salary paid on every paycheck square, before the education multiplier.
    pub salary: i64,

    /// Flavour text shown when the card is drawn.
    pub description: String,
}

impl Career {
    /// Create a new career with an empty description.
    #[must_use]
    pub fn new(id: CareerId, name: impl Into<String>, salary: i64) -> Self {
        Self {
            id,
            name: name.into(),
            salary,
            description: String::new(),
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// An education card.
///
/// `bonus` is added to the holder's salary multiplier; `cost` is paid once
/// when the education is accepted from an education square.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Education {
    /// Catalog identifier.
    pub id: EducationId,

    /// Display name.
    pub name: String,

    /// Salary multiplier bonus.
    pub bonus: f64,

    /// One-time cost.
    pub cost: i64,
}

impl Education {
    /// Create a new education.
    #[must_use]
    pub fn new(id: EducationId, name: impl Into<String>, bonus: f64, cost: i64) -> Self {
        Self {
            id,
            name: name.into(),
            bonus,
            cost,
        }
    }
}
