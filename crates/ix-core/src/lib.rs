//! `ix-core` — foundational types for the intersection simulator.
//!
//! This crate is a dependency of every other `ix-*` crate.  It intentionally
//! has no `ix-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `VehicleId`                                           |
//! | [`time`]        | `Tick`                                                |
//! | [`direction`]   | `Direction`, `Axis`, `PerDirection<T>`                |
//! | [`rng`]         | `SimRng` (uniform + positive-normal draws)            |
//! | [`params`]      | `SimParams`, `PhaseTiming`, `ArrivalDist`             |
//! | [`loader`]      | `load_params_file`, `load_params_reader`              |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod direction;
pub mod error;
pub mod ids;
pub mod loader;
pub mod params;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::{Axis, Direction, PerDirection};
pub use error::{CoreError, CoreResult};
pub use ids::VehicleId;
pub use loader::{load_params_file, load_params_reader};
pub use params::{ArrivalDist, PhaseTiming, SimParams};
pub use rng::SimRng;
pub use time::Tick;
