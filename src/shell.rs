//! Event dispatch around the reducer
//!
//! The shell owns the current `Model` and a repeating timer. Every event is
//! reduced to a new model; if the run state or interval changed, the timer is
//! started, restarted or stopped to match.

use crate::life::{Event, Model, TimerEffect, reduce, timer_effect};
use crate::renderer::board_svg;
use crate::settings::Settings;

/// A cancellable repeating timer that feeds `Event::Tick` back into the shell
pub trait Ticker {
    /// Start ticking every `interval_ms`, replacing any running schedule
    fn start(&mut self, interval_ms: u32);
    /// Stop ticking; no-op when already stopped
    fn stop(&mut self);
}

/// Owns the model and keeps the timer in step with it
pub struct Shell<T: Ticker> {
    model: Model,
    settings: Settings,
    ticker: T,
}

impl<T: Ticker> Shell<T> {
    /// Paused on the seed pattern at the configured speed; the timer is not started
    pub fn new(settings: Settings, ticker: T) -> Self {
        Self {
            model: Model::new(settings.initial_speed_input),
            settings,
            ticker,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    /// Reduce one event and apply the resulting timer effect
    pub fn dispatch(&mut self, event: Event) -> Option<TimerEffect> {
        log::debug!("Event: {:?}", event);
        let prev = self.model.schedule();
        let model = std::mem::take(&mut self.model);
        self.model = reduce(model, event);

        let effect = timer_effect(prev, self.model.schedule());
        match effect {
            Some(TimerEffect::Start(interval_ms)) => {
                log::info!("Running, generation {} every {}ms", self.model.generation, interval_ms);
                self.ticker.start(interval_ms);
            }
            Some(TimerEffect::Stop) => {
                log::info!("Paused at generation {}", self.model.generation);
                self.ticker.stop();
            }
            None => {}
        }
        effect
    }

    /// Markup for the current board
    pub fn svg(&self) -> String {
        board_svg(&self.model.sim, &self.settings)
    }
}
