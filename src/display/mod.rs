//! Presentation: explicit text for every entity and the board map.
//!
//! Nothing in the engine relies on `Display` impls for narrative. Each
//! entity has a `describe_*` function, and the map is a pure projection.

pub mod describe;
pub mod grid;

pub use describe::{
    describe_career, describe_education, describe_outcome, describe_player, describe_retirement,
    event_banner, DIVIDER,
};
pub use grid::{board_view, describe_map, map_view, MapView, PLAIN_TILE};
