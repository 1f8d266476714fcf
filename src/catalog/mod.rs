//! Catalog: careers, educations and event squares.
//!
//! ## Key Types
//!
//! - `Career` / `CareerId`: a job card and its salary
//! - `Education` / `EducationId`: a credential, its multiplier bonus and cost
//! - `EventKind` / `EventSquare`: the life-events and where they sit
//! - `Catalog`: the immutable registry built once per game

pub mod definition;
pub mod events;
pub mod registry;

pub use definition::{Career, CareerId, Education, EducationId};
pub use events::{EventKind, EventSquare};
pub use registry::{Catalog, CatalogBuilder, STANDARD_STARTING_BALANCE};
