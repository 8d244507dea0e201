/// Pacman adapter shelling out to the system package-manager query tools
mod query;

pub use query::{PacmanQuery, DEFAULT_LOOKUP_TIMEOUT_SECS};
