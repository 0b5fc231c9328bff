//! `ix-sim` — event-driven dispatch loop for the intersection simulator.
//!
//! # Dispatch loop
//!
//! ```text
//! start:  schedule first light change, then first arrival E, W, N, S
//! loop:
//!   ① Pop     — remove the earliest pending event; none left → Exhausted
//!   ② Clock   — now = event time; now > stop time → Overrun (not applied)
//!   ③ Apply   — arrival:      enqueue vehicle, schedule next arrival
//!               light change: advance vehicles for the ending phase,
//!                             move the light on, schedule next change
//! ```
//!
//! Everything is single-threaded and runs to completion per event.  Given
//! the same parameters (and therefore seed), two runs produce the same event
//! order, admission decisions and statistics.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ix_sim::{LogNarrator, SimBuilder};
//!
//! let mut sim = SimBuilder::new(params).build()?;
//! let stats = sim.run(&mut LogNarrator);
//! println!("{stats}");
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod light;
pub mod observer;
pub mod sim;
pub mod stats;
pub mod vehicle;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event::{Event, EventKind};
pub use light::{LightPhase, PhaseColor};
pub use observer::{LogNarrator, NoopObserver, SimObserver};
pub use sim::{IntersectionSim, StepOutcome};
pub use stats::{DirectionStats, Statistics};
pub use vehicle::Vehicle;
