//! Event resolution: what each square does to the player who crosses it.
//!
//! - `EventResolver`: one resolution function per `EventKind`
//! - `Outcome`: the narrative result of a resolution
//! - `Resolution`: an outcome tagged with its square, for move reports
//!
//! Resolvers never fail on game grounds. Declines, misses and ineligible
//! players all come back as outcomes; only the input provider can error.

mod outcome;
mod resolver;

pub use outcome::{Outcome, Resolution};
pub use resolver::EventResolver;
