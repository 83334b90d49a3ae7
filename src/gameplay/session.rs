//! Run lifecycle (Idle -> Running -> Over) and the per-run state it owns.

use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use super::clock::SpawnClock;
use super::live_objects::LiveObjects;
use crate::core::components::FallingObject;
use crate::core::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Running,
    Over,
}

/// Whole seconds between two millisecond timestamps, rounded half away from zero.
pub fn elapsed_whole_seconds(start_ms: f64, stop_ms: f64) -> u64 {
    ((stop_ms - start_ms) / 1000.0).round().max(0.0) as u64
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    phase: SessionPhase,
    start_ms: Option<f64>,
    stop_ms: Option<f64>,
    last_score: Option<u64>,
}

impl Session {
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn start_ms(&self) -> Option<f64> {
        self.start_ms
    }

    pub fn stop_ms(&self) -> Option<f64> {
        self.stop_ms
    }

    pub fn last_score(&self) -> Option<u64> {
        self.last_score
    }

    /// Idle -> Running. Ignored (returns `false`) in any other phase.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.phase != SessionPhase::Idle {
            return false;
        }
        self.phase = SessionPhase::Running;
        self.start_ms = Some(now_ms);
        self.stop_ms = None;
        true
    }

    /// Running -> Over, yielding the score. `None` if the run was not live,
    /// so a second call can never report twice.
    pub fn finish(&mut self, now_ms: f64) -> Option<u64> {
        if self.phase != SessionPhase::Running {
            return None;
        }
        let start = self.start_ms.unwrap_or(now_ms);
        let secs = elapsed_whole_seconds(start, now_ms);
        self.phase = SessionPhase::Over;
        self.stop_ms = Some(now_ms);
        self.last_score = Some(secs);
        Some(secs)
    }

    /// Back to Idle from any phase. The last score is kept for display.
    pub fn reset(&mut self) {
        self.phase = SessionPhase::Idle;
        self.start_ms = None;
        self.stop_ms = None;
    }
}

/// Everything a run mutates: lifecycle, spawn clock, live spheres, spawn RNG.
#[derive(Resource, Debug)]
pub struct GameSession {
    pub session: Session,
    pub clock: SpawnClock,
    pub live: LiveObjects<FallingObject>,
    pub rng: StdRng,
}

impl GameSession {
    pub fn from_config(cfg: &GameConfig) -> Self {
        let clock = SpawnClock::new(cfg.spawn.initial_interval).unwrap_or_else(|e| {
            let fallback = SpawnClock::default();
            warn!(
                target: "session",
                "spawn.initial_interval rejected ({e}); using {} frames",
                fallback.interval()
            );
            fallback
        });
        let seed = cfg.seed.unwrap_or_else(rand::random);
        info!(target: "session", seed, "Spawn RNG seeded");
        Self {
            session: Session::default(),
            clock,
            live: LiveObjects::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl FromWorld for GameSession {
    fn from_world(world: &mut World) -> Self {
        match world.get_resource::<GameConfig>() {
            Some(cfg) => Self::from_config(cfg),
            None => Self::from_config(&GameConfig::default()),
        }
    }
}

/// Run condition for systems that only act during a live run.
pub fn session_running(game: Option<Res<GameSession>>) -> bool {
    game.is_some_and(|g| g.session.is_running())
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStarted;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub elapsed_secs: u64,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReset;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_rounds_to_nearest_second() {
        assert_eq!(elapsed_whole_seconds(1000.0, 4600.0), 4);
        assert_eq!(elapsed_whole_seconds(1000.0, 4501.0), 4);
        assert_eq!(elapsed_whole_seconds(1000.0, 4500.0), 4);
        assert_eq!(elapsed_whole_seconds(1000.0, 5500.0), 5);
        assert_eq!(elapsed_whole_seconds(1000.0, 1400.0), 0);
    }

    #[test]
    fn finish_reports_once() {
        let mut s = Session::default();
        assert_eq!(s.finish(10.0), None, "idle run cannot end");
        assert!(s.start(1000.0));
        assert!(!s.start(2000.0), "second start ignored");
        assert_eq!(s.finish(5500.0), Some(5));
        assert_eq!(s.phase(), SessionPhase::Over);
        assert_eq!(s.finish(9000.0), None);
        assert_eq!(s.stop_ms(), Some(5500.0));
        assert_eq!(s.last_score(), Some(5));
    }

    #[test]
    fn over_is_one_way_until_reset() {
        let mut s = Session::default();
        s.start(0.0);
        s.finish(3000.0);
        assert!(!s.start(4000.0));
        s.reset();
        assert_eq!(s.phase(), SessionPhase::Idle);
        assert_eq!(s.start_ms(), None);
        assert!(s.start(4000.0));
    }

    #[test]
    fn zero_interval_falls_back_to_default_clock() {
        let mut cfg = GameConfig::default();
        cfg.spawn.initial_interval = 0;
        cfg.seed = Some(1);
        let game = GameSession::from_config(&cfg);
        assert_eq!(game.clock.interval(), SpawnClock::default().interval());
    }
}
