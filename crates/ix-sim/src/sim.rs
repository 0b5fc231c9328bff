//! The `IntersectionSim` struct and its dispatch loop.

use ix_core::{Axis, Direction, PerDirection, SimParams, SimRng, Tick, VehicleId};
use ix_queue::{FifoQueue, SortedList};

use crate::{Event, EventKind, LightPhase, PhaseColor, SimObserver, Statistics, Vehicle};

/// Lowest and highest values of the yellow-admission draw, both inclusive.
const ADMISSION_MIN: i64 = 1;
const ADMISSION_MAX: i64 = 100;

// ── StepOutcome ───────────────────────────────────────────────────────────────

/// Result of one [`IntersectionSim::handle_next_event`] call.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// The event was applied.
    Handled(Event),
    /// A light transition that does not end the current phase (e.g. a
    /// duplicate).  Consumed without effect.
    Ignored(Event),
    /// The pending list was empty.  Halt.
    Exhausted,
    /// The earliest event lies after the stop time and was not applied.  Halt.
    Overrun(Event),
}

impl StepOutcome {
    /// `true` when the dispatch loop must stop.
    #[inline]
    pub fn is_halt(&self) -> bool {
        matches!(self, StepOutcome::Exhausted | StepOutcome::Overrun(_))
    }

    /// The event consumed by this step, if any.
    pub fn event(&self) -> Option<&Event> {
        match self {
            StepOutcome::Handled(e) | StepOutcome::Ignored(e) | StepOutcome::Overrun(e) => Some(e),
            StepOutcome::Exhausted => None,
        }
    }

    /// Lower-case label, useful for CSV column values.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepOutcome::Handled(_)  => "handled",
            StepOutcome::Ignored(_)  => "ignored",
            StepOutcome::Exhausted   => "exhausted",
            StepOutcome::Overrun(_)  => "overrun",
        }
    }
}

// ── IntersectionSim ───────────────────────────────────────────────────────────

/// Discrete-event simulation of one four-way signalised intersection.
///
/// The engine exclusively owns every piece of mutable state: the pending
/// event list, the four directional queues, the light phase, the RNG and the
/// running statistics.  Simulated time only moves when an event is consumed.
///
/// Two self-perpetuating event families drive the run:
///
/// 1. **Arrivals**: each arrival enqueues a vehicle and schedules the next
///    arrival for the same direction.
/// 2. **Light changes**: each transition advances the vehicles the ending
///    phase let through, moves the light on, and schedules the next
///    transition.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct IntersectionSim {
    pub(crate) params:  SimParams,
    pub(crate) rng:     SimRng,
    pub(crate) now:     Tick,
    pub(crate) phase:   LightPhase,
    pub(crate) events:  SortedList<Event>,
    pub(crate) queues:  PerDirection<FifoQueue<Vehicle>>,
    pub(crate) stats:   Statistics,
    /// Id handed to the next arriving vehicle.
    pub(crate) next_vehicle_id: VehicleId,
    pub(crate) events_handled:  u64,
    pub(crate) started:         bool,
}

impl IntersectionSim {
    pub(crate) fn new(params: SimParams, rng: SimRng) -> Self {
        Self {
            params,
            rng,
            now:             Tick::ZERO,
            phase:           LightPhase::INITIAL,
            events:          SortedList::new(),
            queues:          PerDirection::from_fn(|_| FifoQueue::new()),
            stats:           Statistics::default(),
            next_vehicle_id: VehicleId::FIRST,
            events_handled:  0,
            started:         false,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn now(&self) -> Tick {
        self.now
    }

    #[inline]
    pub fn phase(&self) -> LightPhase {
        self.phase
    }

    #[inline]
    pub fn params(&self) -> &SimParams {
        &self.params
    }

    #[inline]
    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// The vehicles currently waiting in `dir`, head first.
    #[inline]
    pub fn queue(&self, dir: Direction) -> &FifoQueue<Vehicle> {
        &self.queues[dir]
    }

    #[inline]
    pub fn queue_len(&self, dir: Direction) -> usize {
        self.queues[dir].len()
    }

    /// Pending events, earliest first.
    #[inline]
    pub fn pending_events(&self) -> &SortedList<Event> {
        &self.events
    }

    /// Events applied so far.  Ignored transitions and halts are not counted.
    #[inline]
    pub fn events_handled(&self) -> u64 {
        self.events_handled
    }

    // ── Seeding and scheduling ────────────────────────────────────────────

    /// Schedule the first light transition and the first arrival for every
    /// direction, in that order.  Does nothing if already started.
    pub fn start<O: SimObserver>(&mut self, observer: &mut O) {
        if self.started {
            return;
        }
        self.started = true;
        self.schedule_light_change(observer);
        for dir in Direction::ALL {
            self.schedule_arrival(dir, observer);
        }
    }

    /// Draw an interarrival delay for `dir` and schedule its next arrival.
    pub fn schedule_arrival<O: SimObserver>(&mut self, dir: Direction, observer: &mut O) {
        let dist = self.params.arrivals[dir];
        let delay = self.rng.positive_normal(dist.mean, dist.std_dev);
        self.schedule(Event::new(self.now + delay, EventKind::arrival(dir)), observer);
    }

    /// Schedule the transition that ends the current phase.
    pub fn schedule_light_change<O: SimObserver>(&mut self, observer: &mut O) {
        let duration = self.phase.duration(&self.params);
        self.schedule(Event::new(self.now + duration, self.phase.ending_event()), observer);
    }

    fn schedule<O: SimObserver>(&mut self, event: Event, observer: &mut O) {
        self.events.insert(event);
        observer.on_scheduled(self.now, &event);
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// Run single-step dispatch until it signals a halt.
    ///
    /// Seeds the initial events first if [`start`][Self::start] has not been
    /// called.  Returns the statistics at the moment of halting.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> Statistics {
        self.start(observer);
        while !self.handle_next_event(observer).is_halt() {}
        observer.on_sim_end(self.now, &self.stats);
        self.stats
    }

    /// Consume the earliest pending event and apply it.
    ///
    /// The clock moves to the event's time even when the event lies beyond
    /// the stop time; such an event is reported as
    /// [`StepOutcome::Overrun`] and not applied.
    pub fn handle_next_event<O: SimObserver>(&mut self, observer: &mut O) -> StepOutcome {
        let outcome = self.dispatch(observer);
        observer.on_step(&outcome, self.phase);
        outcome
    }

    fn dispatch<O: SimObserver>(&mut self, observer: &mut O) -> StepOutcome {
        let Some(event) = self.events.remove_front() else {
            return StepOutcome::Exhausted;
        };

        self.now = event.occurs_at();
        if self.now > self.params.stop_time {
            return StepOutcome::Overrun(event);
        }

        let kind = event.kind();
        if kind.is_light_change() && LightPhase::ended_by(kind) != Some(self.phase) {
            return StepOutcome::Ignored(event);
        }

        observer.on_event_start(&event);
        self.events_handled += 1;

        match kind {
            EventKind::ArriveEast  => self.handle_arrival(Direction::East, observer),
            EventKind::ArriveWest  => self.handle_arrival(Direction::West, observer),
            EventKind::ArriveNorth => self.handle_arrival(Direction::North, observer),
            EventKind::ArriveSouth => self.handle_arrival(Direction::South, observer),
            EventKind::ChangeToYellowEW
            | EventKind::ChangeToGreenNS
            | EventKind::ChangeToYellowNS
            | EventKind::ChangeToGreenEW => self.handle_light_change(observer),
        }
        StepOutcome::Handled(event)
    }

    pub(crate) fn handle_arrival<O: SimObserver>(&mut self, dir: Direction, observer: &mut O) {
        let vehicle = Vehicle::new(self.next_vehicle_id, dir, self.now);
        self.next_vehicle_id = self.next_vehicle_id.next();

        self.queues[dir].enqueue(vehicle);
        let queue_len = self.queues[dir].len();
        self.stats.get_mut(dir).total_arrived += 1;
        observer.on_arrival(self.now, &vehicle, queue_len);

        self.schedule_arrival(dir, observer);

        let stats = self.stats.get_mut(dir);
        stats.longest_queue = stats.longest_queue.max(queue_len);
    }

    /// Advance the traffic the ending phase let through, then move the light
    /// on and schedule the next transition.
    fn handle_light_change<O: SimObserver>(&mut self, observer: &mut O) {
        let ending = self.phase;
        let cap = ending.duration(&self.params);
        self.advance_axis(ending.axis(), ending.color(), cap, observer);

        self.phase = ending.next();
        observer.on_phase_change(self.now, ending, self.phase);
        self.schedule_light_change(observer);
    }

    /// Apply the admission rule for `color` to both directions on `axis`,
    /// each independently capped at `cap` vehicles.
    fn advance_axis<O: SimObserver>(
        &mut self,
        axis:     Axis,
        color:    PhaseColor,
        cap:      u64,
        observer: &mut O,
    ) {
        observer.on_advance_start(self.now, axis, color);
        for dir in axis.directions() {
            if color == PhaseColor::Yellow && self.queues[dir].is_empty() {
                observer.on_nothing_waiting(self.now, dir);
            }
            let mut advanced: u64 = 0;
            while advanced < cap && !self.queues[dir].is_empty() {
                if color == PhaseColor::Yellow && !self.admits_on_yellow() {
                    observer.on_yellow_stop(self.now, dir);
                    break;
                }
                let Some(vehicle) = self.queues[dir].dequeue() else {
                    break;
                };
                advanced += 1;
                observer.on_advance(self.now, &vehicle, color);
            }

            self.stats.get_mut(dir).total_advanced += advanced;
            observer.on_advance_summary(self.now, dir, color, advanced, self.queues[dir].len());
        }
    }

    /// One admission draw: the head vehicle runs the yellow iff the uniform
    /// sample falls within the configured percentage.
    fn admits_on_yellow(&mut self) -> bool {
        let sample = self.rng.uniform_in_range(ADMISSION_MIN, ADMISSION_MAX);
        sample <= i64::from(self.params.yellow_advance_percent)
    }
}
