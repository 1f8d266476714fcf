//! The immutable catalog of careers, educations and event squares.
//!
//! A `Catalog` is built once at startup (usually via `Catalog::standard()`)
//! and then shared by reference with the board, the resolver and the
//! display functions.

use serde::{Deserialize, Serialize};

use super::definition::{Career, CareerId, Education, EducationId};
use super::events::{EventKind, EventSquare};

/// Starting balance for every player in the standard game.
pub const STANDARD_STARTING_BALANCE: i64 = 100_000;

/// Registry of every drawable card and every event square.
///
/// Career id 0 is always the unemployed career and education id 0 is
/// always the baseline credential; neither is ever drawn.
///
/// ## Example
///
/// ```
/// use life_track::catalog::{Catalog, EventKind};
///
/// let catalog = Catalog::builder()
///     .career("Pilot", 90_000, "Flies planes")
///     .education("Flight School", 0.5, 40_000)
///     .event_square(EventKind::Pay, "Paycheck", '$', &[3, 6])
///     .build();
///
/// assert_eq!(catalog.drawable_careers().len(), 1);
/// assert_eq!(catalog.career(catalog.unemployed()).salary, 0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Catalog {
    careers: Vec<Career>,
    educations: Vec<Education>,
    career_pool: Vec<CareerId>,
    education_pool: Vec<EducationId>,
    event_squares: Vec<EventSquare>,
}

impl Catalog {
    /// Start building a custom catalog.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The fixed catalog the game ships with.
    #[must_use]
    pub fn standard() -> Self {
        Self::builder()
            .unemployed("Unemployed", "This is the start of everything, only way is up")
            .career("Artist", 30_000, "An artist has a very low base pay")
            .career("Plumber", 60_000, "A plumber has a basic salary")
            .baseline_education("GED", 1.0)
            .education("Community College", 0.2, 20_000)
            .education("University", 0.6, 50_000)
            .education("Graduate School", 1.0, 90_000)
            .event_square(EventKind::Pay, "Paycheck", '$', &[6, 10, 14, 18, 22, 26, 30])
            .event_square(EventKind::CareerChange, "Career Change", '@', &[12, 24])
            .event_square(EventKind::EducationChance, "Education Chance", '?', &[17])
            .event_square(EventKind::Relationship, "Love Interest", '!', &[4, 13, 23, 31])
            .event_square(EventKind::Children, "Children", '<', &[7, 16, 25])
            .build()
    }

    /// The zero-salary career every player starts with.
    #[must_use]
    pub fn unemployed(&self) -> CareerId {
        CareerId::new(0)
    }

    /// The free credential every player starts with.
    #[must_use]
    pub fn baseline_education(&self) -> EducationId {
        EducationId::new(0)
    }

    /// Look up a career. Ids only come from this catalog, so this never misses.
    #[must_use]
    pub fn career(&self, id: CareerId) -> &Career {
        &self.careers[id.index()]
    }

    /// Look up an education.
    #[must_use]
    pub fn education(&self, id: EducationId) -> &Education {
        &self.educations[id.index()]
    }

    /// Find a career by display name.
    #[must_use]
    pub fn career_by_name(&self, name: &str) -> Option<&Career> {
        self.careers.iter().find(|c| c.name == name)
    }

    /// Find an education by display name.
    #[must_use]
    pub fn education_by_name(&self, name: &str) -> Option<&Education> {
        self.educations.iter().find(|e| e.name == name)
    }

    /// Careers a career-change card can produce.
    #[must_use]
    pub fn drawable_careers(&self) -> &[CareerId] {
        &self.career_pool
    }

    /// Educations an education card can produce.
    #[must_use]
    pub fn drawable_educations(&self) -> &[EducationId] {
        &self.education_pool
    }

    /// Event placements, in resolution order of their kinds.
    #[must_use]
    pub fn event_squares(&self) -> &[EventSquare] {
        &self.event_squares
    }

    /// The placement for a given kind, if the board has any.
    #[must_use]
    pub fn event_square(&self, kind: EventKind) -> Option<&EventSquare> {
        self.event_squares.iter().find(|s| s.kind == kind)
    }
}

/// Builder for `Catalog`.
///
/// Unset unemployed/baseline entries default to the standard game's.
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    unemployed: Option<(String, String)>,
    baseline: Option<(String, f64)>,
    careers: Vec<(String, i64, String)>,
    educations: Vec<(String, f64, i64)>,
    event_squares: Vec<EventSquare>,
}

impl CatalogBuilder {
    /// Set the name and description of the unemployed career.
    #[must_use]
    pub fn unemployed(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.unemployed = Some((name.into(), description.into()));
        self
    }

    /// Add a drawable career.
    #[must_use]
    pub fn career(
        mut self,
        name: impl Into<String>,
        salary: i64,
        description: impl Into<String>,
    ) -> Self {
        self.careers.push((name.into(), salary, description.into()));
        self
    }

    /// Set the free starting credential.
    #[must_use]
    pub fn baseline_education(mut self, name: impl Into<String>, bonus: f64) -> Self {
        self.baseline = Some((name.into(), bonus));
        self
    }

    /// Add a drawable education.
    #[must_use]
    pub fn education(mut self, name: impl Into<String>, bonus: f64, cost: i64) -> Self {
        self.educations.push((name.into(), bonus, cost));
        self
    }

    /// Place an event kind on the given positions.
    ///
    /// Placing the same kind twice merges the positions.
    #[must_use]
    pub fn event_square(
        mut self,
        kind: EventKind,
        name: impl Into<String>,
        symbol: char,
        positions: &[u32],
    ) -> Self {
        if let Some(existing) = self.event_squares.iter_mut().find(|s| s.kind == kind) {
            for &p in positions {
                if !existing.occupies(p) {
                    existing.positions.push(p);
                }
            }
        } else {
            self.event_squares
                .push(EventSquare::new(kind, name, symbol, positions));
        }
        self
    }

    /// Assign ids and freeze the catalog.
    #[must_use]
    pub fn build(self) -> Catalog {
        let (unemployed_name, unemployed_description) = self.unemployed.unwrap_or_else(|| {
            (
                "Unemployed".to_string(),
                "This is the start of everything, only way is up".to_string(),
            )
        });
        let (baseline_name, baseline_bonus) =
            self.baseline.unwrap_or_else(|| ("GED".to_string(), 1.0));

        let mut careers = vec![
            Career::new(CareerId::new(0), unemployed_name, 0).with_description(unemployed_description),
        ];
        let mut career_pool = Vec::with_capacity(self.careers.len());
        for (name, salary, description) in self.careers {
            let id = CareerId::new(careers.len() as u16);
            careers.push(Career::new(id, name, salary).with_description(description));
            career_pool.push(id);
        }

        let mut educations = vec![Education::new(
            EducationId::new(0),
            baseline_name,
            baseline_bonus,
            0,
        )];
        let mut education_pool = Vec::with_capacity(self.educations.len());
        for (name, bonus, cost) in self.educations {
            let id = EducationId::new(educations.len() as u16);
            educations.push(Education::new(id, name, bonus, cost));
            education_pool.push(id);
        }

        let mut event_squares = self.event_squares;
        event_squares.sort_by_key(|s| s.kind);
        for square in &mut event_squares {
            square.positions.sort_unstable();
        }

        Catalog {
            careers,
            educations,
            career_pool,
            education_pool,
            event_squares,
        }
    }
}
