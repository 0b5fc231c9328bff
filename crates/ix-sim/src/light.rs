//! The traffic-light state machine.
//!
//! ```text
//!   GreenEW ──ChangeToYellowEW──▶ YellowEW ──ChangeToGreenNS──▶ GreenNS
//!      ▲                                                          │
//!      └───────ChangeToGreenEW──── YellowNS ◀──ChangeToYellowNS───┘
//! ```
//!
//! Each phase lasts a fixed duration from the parameters.  The event that
//! *ends* a phase is also the moment the engine advances the vehicles that
//! phase let through, using that phase's colour for the admission rule and
//! its duration as the per-direction cap.

use std::fmt;

use ix_core::{Axis, SimParams};

use crate::EventKind;

/// Admission rule of a phase.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PhaseColor {
    /// Every queued vehicle advances, up to the cap.
    Green,
    /// Each vehicle advances with the configured probability; the first
    /// refusal stops that direction for the rest of the phase.
    Yellow,
}

impl PhaseColor {
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseColor::Green  => "green",
            PhaseColor::Yellow => "yellow",
        }
    }
}

impl fmt::Display for PhaseColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four phases of the signal cycle.  Exactly one is active at a time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum LightPhase {
    #[default]
    GreenEW,
    YellowEW,
    GreenNS,
    YellowNS,
}

impl LightPhase {
    /// The phase every simulation starts in.
    pub const INITIAL: LightPhase = LightPhase::GreenEW;

    /// The phase that follows `self` in the cycle.
    pub fn next(self) -> LightPhase {
        match self {
            LightPhase::GreenEW  => LightPhase::YellowEW,
            LightPhase::YellowEW => LightPhase::GreenNS,
            LightPhase::GreenNS  => LightPhase::YellowNS,
            LightPhase::YellowNS => LightPhase::GreenEW,
        }
    }

    /// The axis whose traffic may move during this phase.
    pub fn axis(self) -> Axis {
        match self {
            LightPhase::GreenEW | LightPhase::YellowEW => Axis::EastWest,
            LightPhase::GreenNS | LightPhase::YellowNS => Axis::NorthSouth,
        }
    }

    pub fn color(self) -> PhaseColor {
        match self {
            LightPhase::GreenEW | LightPhase::GreenNS   => PhaseColor::Green,
            LightPhase::YellowEW | LightPhase::YellowNS => PhaseColor::Yellow,
        }
    }

    /// How long this phase lasts; also the per-direction advance cap.
    pub fn duration(self, params: &SimParams) -> u64 {
        let timing = params.timing_for(self.axis());
        match self.color() {
            PhaseColor::Green  => timing.green,
            PhaseColor::Yellow => timing.yellow,
        }
    }

    /// The transition event that ends this phase.
    pub fn ending_event(self) -> EventKind {
        match self {
            LightPhase::GreenEW  => EventKind::ChangeToYellowEW,
            LightPhase::YellowEW => EventKind::ChangeToGreenNS,
            LightPhase::GreenNS  => EventKind::ChangeToYellowNS,
            LightPhase::YellowNS => EventKind::ChangeToGreenEW,
        }
    }

    /// The phase a transition event ends, or `None` for arrival events.
    pub fn ended_by(kind: EventKind) -> Option<LightPhase> {
        match kind {
            EventKind::ChangeToYellowEW => Some(LightPhase::GreenEW),
            EventKind::ChangeToGreenNS  => Some(LightPhase::YellowEW),
            EventKind::ChangeToYellowNS => Some(LightPhase::GreenNS),
            EventKind::ChangeToGreenEW  => Some(LightPhase::YellowNS),
            EventKind::ArriveEast
            | EventKind::ArriveWest
            | EventKind::ArriveNorth
            | EventKind::ArriveSouth => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LightPhase::GreenEW  => "green_ew",
            LightPhase::YellowEW => "yellow_ew",
            LightPhase::GreenNS  => "green_ns",
            LightPhase::YellowNS => "yellow_ns",
        }
    }
}

impl fmt::Display for LightPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.axis(), self.color())
    }
}
