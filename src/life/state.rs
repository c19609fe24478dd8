//! Simulation state and the event reducer
//!
//! The shell never mutates a `Model` in place: every event goes through
//! `reduce`, which consumes the old model and returns its replacement.

use super::board::{DenseBoard, LiveSet, dense_of, live_set_of};
use super::generation::next_generation;
use super::point::Point;
use crate::consts::{DEFAULT_SPEED_INPUT, SPEED_INPUT_MAX, SPEED_INPUT_MIN};
use crate::interval_for_input;
use crate::patterns::seed_board;

/// Run state with the board representation each state needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimState {
    /// Editable: every cell has an explicit flag so dead cells can be shown and toggled
    Paused(DenseBoard),
    /// Advancing on every tick; no per-cell editing
    Running(LiveSet),
}

impl SimState {
    pub fn is_running(&self) -> bool {
        matches!(self, SimState::Running(_))
    }

    pub fn live_count(&self) -> usize {
        match self {
            SimState::Paused(board) => board.live_count(),
            SimState::Running(live) => live.len(),
        }
    }

    /// Sparse view of the board regardless of run state
    pub fn live_set(&self) -> LiveSet {
        match self {
            SimState::Paused(board) => live_set_of(board),
            SimState::Running(live) => live.clone(),
        }
    }
}

/// User and timer events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start,
    Stop,
    /// Explicit single step (button); advances in either state
    Step,
    /// Periodic timer tick; only advances while running
    Tick,
    /// Flip one cell while paused
    TogglePoint(Point),
    /// Back to the seed pattern, paused, default speed
    Reset,
    /// Raw slider value
    SetSpeed(String),
    /// Empty board, paused
    Clear,
    /// Random board from the given seed, paused
    Randomize { seed: u64 },
}

/// Complete UI-facing simulation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub sim: SimState,
    /// Slider value the interval was derived from
    pub speed_input: u32,
    /// Milliseconds between ticks while running
    pub interval_ms: u32,
    /// Generations computed since the last Reset/Clear/Randomize
    pub generation: u64,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED_INPUT)
    }
}

impl Model {
    /// Paused on the seed pattern with the given slider position
    pub fn new(speed_input: u32) -> Self {
        let speed_input = speed_input.clamp(SPEED_INPUT_MIN, SPEED_INPUT_MAX);
        Self {
            sim: SimState::Paused(seed_board()),
            speed_input,
            interval_ms: interval_for_input(speed_input),
            generation: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.sim.is_running()
    }

    /// Tick interval while running, `None` while paused
    pub fn schedule(&self) -> Option<u32> {
        self.is_running().then_some(self.interval_ms)
    }
}

/// One generation in whichever representation the state holds
fn advance(sim: SimState) -> SimState {
    match sim {
        SimState::Paused(board) => SimState::Paused(dense_of(&next_generation(&live_set_of(&board)))),
        SimState::Running(live) => SimState::Running(next_generation(&live)),
    }
}

/// Parse a raw slider value to a slider position.
///
/// Unparseable input falls back to `DEFAULT_SPEED_INPUT`; numbers outside the
/// slider range are clamped into it.
pub fn parse_speed_input(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v.round().clamp(SPEED_INPUT_MIN as f64, SPEED_INPUT_MAX as f64) as u32,
        _ => {
            log::warn!("Unparseable speed {:?}, using {}", raw, DEFAULT_SPEED_INPUT);
            DEFAULT_SPEED_INPUT
        }
    }
}

/// Parse a raw slider value to a tick interval in milliseconds
pub fn parse_speed(raw: &str) -> u32 {
    interval_for_input(parse_speed_input(raw))
}

/// Apply one event, returning the replacement model
pub fn reduce(model: Model, event: Event) -> Model {
    let Model {
        sim,
        speed_input,
        interval_ms,
        generation,
    } = model;
    let keep = |sim| Model {
        sim,
        speed_input,
        interval_ms,
        generation,
    };
    let restart = |board| Model {
        sim: SimState::Paused(board),
        speed_input,
        interval_ms,
        generation: 0,
    };

    match (event, sim) {
        (Event::Start, SimState::Paused(board)) => keep(SimState::Running(live_set_of(&board))),
        (Event::Stop, SimState::Running(live)) => keep(SimState::Paused(dense_of(&live))),
        (Event::Step, sim) | (Event::Tick, sim @ SimState::Running(_)) => Model {
            sim: advance(sim),
            speed_input,
            interval_ms,
            generation: generation + 1,
        },
        (Event::TogglePoint(point), SimState::Paused(mut board)) => {
            board.toggle(point);
            keep(SimState::Paused(board))
        }
        (Event::Reset, _) => Model::default(),
        (Event::SetSpeed(raw), sim) => {
            let speed_input = parse_speed_input(&raw);
            Model {
                sim,
                speed_input,
                interval_ms: interval_for_input(speed_input),
                generation,
            }
        }
        (Event::Clear, _) => restart(DenseBoard::empty()),
        (Event::Randomize { seed }, _) => restart(DenseBoard::random(seed)),
        // Start while running, Stop while paused, Tick while paused, Toggle while running
        (_, sim) => keep(sim),
    }
}

/// Side effect on the repeating timer implied by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEffect {
    /// (Re)start ticking at this interval
    Start(u32),
    Stop,
}

/// Timer effect for moving between two schedules (see `Model::schedule`)
pub fn timer_effect(prev: Option<u32>, next: Option<u32>) -> Option<TimerEffect> {
    match (prev, next) {
        (None, Some(interval)) => Some(TimerEffect::Start(interval)),
        (Some(_), None) => Some(TimerEffect::Stop),
        (Some(old), Some(new)) if old != new => Some(TimerEffect::Start(new)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::SEED;

    fn live(points: &[(i32, i32)]) -> LiveSet {
        points.iter().copied().map(Point::from).collect()
    }

    fn seed_set() -> LiveSet {
        SEED.iter().copied().collect()
    }

    fn running() -> Model {
        reduce(Model::default(), Event::Start)
    }

    #[test]
    fn test_initial_model() {
        let model = Model::default();
        assert_eq!(model.sim, SimState::Paused(dense_of(&seed_set())));
        assert_eq!(model.speed_input, 900);
        assert_eq!(model.interval_ms, 100);
        assert_eq!(model.generation, 0);
    }

    #[test]
    fn test_start_converts_to_live_set() {
        assert_eq!(running().sim, SimState::Running(seed_set()));
    }

    #[test]
    fn test_stop_converts_to_dense() {
        let model = reduce(running(), Event::Stop);
        assert_eq!(model.sim, SimState::Paused(dense_of(&seed_set())));
    }

    #[test]
    fn test_start_and_stop_are_idempotent() {
        let model = running();
        assert_eq!(reduce(model.clone(), Event::Start), model);

        let paused = Model::default();
        assert_eq!(reduce(paused.clone(), Event::Stop), paused);
    }

    #[test]
    fn test_step_while_paused() {
        let model = reduce(Model::default(), Event::Step);
        let expected = live(&[(30, 29), (30, 30), (30, 31), (31, 30), (32, 31)]);
        assert_eq!(model.sim, SimState::Paused(dense_of(&expected)));
        assert_eq!(model.generation, 1);
    }

    #[test]
    fn test_tick_while_running() {
        let model = reduce(running(), Event::Tick);
        let expected = live(&[(30, 29), (30, 30), (30, 31), (31, 30), (32, 31)]);
        assert_eq!(model.sim, SimState::Running(expected));
        assert_eq!(model.generation, 1);

        let stepped = reduce(running(), Event::Step);
        assert_eq!(stepped, model);
    }

    #[test]
    fn test_tick_while_paused_is_ignored() {
        let model = Model::default();
        assert_eq!(reduce(model.clone(), Event::Tick), model);
    }

    #[test]
    fn test_toggle_while_paused() {
        let model = reduce(Model::default(), Event::TogglePoint(Point::new(0, 0)));
        let mut expected = seed_set();
        expected.insert(Point::new(0, 0));
        assert_eq!(model.sim, SimState::Paused(dense_of(&expected)));

        // Toggling a live seed cell kills it
        let model = reduce(model, Event::TogglePoint(Point::new(30, 30)));
        expected.remove(&Point::new(30, 30));
        assert_eq!(model.sim.live_set(), expected);
    }

    #[test]
    fn test_toggle_off_board_is_noop() {
        let model = Model::default();
        assert_eq!(reduce(model.clone(), Event::TogglePoint(Point::new(50, 3))), model);
        assert_eq!(reduce(model.clone(), Event::TogglePoint(Point::new(-1, 3))), model);
    }

    #[test]
    fn test_toggle_while_running_is_ignored() {
        let model = running();
        assert_eq!(reduce(model.clone(), Event::TogglePoint(Point::new(0, 0))), model);
    }

    #[test]
    fn test_reset_from_any_state() {
        let model = reduce(running(), Event::SetSpeed("600".into()));
        let model = reduce(model, Event::Tick);
        let model = reduce(model, Event::Reset);
        assert_eq!(model, Model::default());

        let edited = reduce(Model::default(), Event::TogglePoint(Point::new(1, 1)));
        assert_eq!(reduce(edited, Event::Reset), Model::default());
    }

    #[test]
    fn test_set_speed_keeps_state() {
        let model = reduce(running(), Event::SetSpeed("1000".into()));
        assert!(model.is_running());
        assert_eq!(model.interval_ms, 0);
        assert_eq!(model.speed_input, 1000);

        let paused = reduce(Model::default(), Event::SetSpeed("bogus".into()));
        assert_eq!(paused.interval_ms, 100);
        assert!(!paused.is_running());
    }

    #[test]
    fn test_parse_speed() {
        assert_eq!(parse_speed("600"), 400);
        assert_eq!(parse_speed("1000"), 0);
        assert_eq!(parse_speed("garbage"), 100);
        assert_eq!(parse_speed("900"), 100);
        assert_eq!(parse_speed("750"), 250);
        assert_eq!(parse_speed(""), 100);
        assert_eq!(parse_speed(" 650 "), 350);
    }

    #[test]
    fn test_parse_speed_clamps() {
        assert_eq!(parse_speed("5000"), 0);
        assert_eq!(parse_speed("-20"), 400);
        assert_eq!(parse_speed("NaN"), 100);
    }

    #[test]
    fn test_clear_and_randomize() {
        let model = reduce(reduce(running(), Event::Step), Event::Clear);
        assert_eq!(model.sim, SimState::Paused(DenseBoard::empty()));
        assert_eq!(model.generation, 0);

        let a = reduce(running(), Event::Randomize { seed: 7 });
        let b = reduce(Model::default(), Event::Randomize { seed: 7 });
        assert_eq!(a, b);
        assert_eq!(a.sim, SimState::Paused(DenseBoard::random(7)));
    }

    #[test]
    fn test_clear_keeps_interval() {
        let model = reduce(Model::default(), Event::SetSpeed("700".into()));
        let model = reduce(model, Event::Clear);
        assert_eq!(model.interval_ms, 300);
    }

    #[test]
    fn test_timer_effects() {
        let paused = Model::default();
        let run = running();
        assert_eq!(paused.schedule(), None);
        assert_eq!(run.schedule(), Some(100));

        assert_eq!(timer_effect(paused.schedule(), run.schedule()), Some(TimerEffect::Start(100)));
        assert_eq!(timer_effect(run.schedule(), paused.schedule()), Some(TimerEffect::Stop));
        assert_eq!(timer_effect(paused.schedule(), paused.schedule()), None);

        let faster = reduce(run.clone(), Event::SetSpeed("1000".into()));
        assert_eq!(timer_effect(run.schedule(), faster.schedule()), Some(TimerEffect::Start(0)));

        let ticked = reduce(run.clone(), Event::Tick);
        assert_eq!(timer_effect(run.schedule(), ticked.schedule()), None);

        let slower_paused = reduce(paused.clone(), Event::SetSpeed("600".into()));
        assert_eq!(timer_effect(paused.schedule(), slower_paused.schedule()), None);

        let reset = reduce(run.clone(), Event::Reset);
        assert_eq!(timer_effect(run.schedule(), reset.schedule()), Some(TimerEffect::Stop));
    }
}
