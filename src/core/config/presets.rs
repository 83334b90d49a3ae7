//! Named constant sets for the game's known tunings.

use super::config::{
    ControlsConfig, CullConfig, DebugConfig, FallConfig, GameConfig, PlayerConfig, RadiusRule,
    RampConfig, SessionConfig, SpawnConfig, WindowConfig, WorldConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Preset {
    /// Fixed radius 2, ramp at 1200 frames, fall at -8.
    #[default]
    Classic,
    /// Slower ramp at 1500 frames, radius `ceil(rand*2)`, fall at -6, no danger cue.
    Relaxed,
    /// Fast spawns, radius `floor(rand*3)`, larger cap, no spin.
    Chaotic,
}

impl Preset {
    pub fn config(self) -> GameConfig {
        let mut cfg = GameConfig {
            window: WindowConfig::default(),
            world: WorldConfig::default(),
            player: PlayerConfig::default(),
            spawn: SpawnConfig::default(),
            ramp: RampConfig::default(),
            cull: CullConfig::default(),
            fall: FallConfig::default(),
            session: SessionConfig::default(),
            controls: ControlsConfig::default(),
            debug: DebugConfig::default(),
            rapier_debug: false,
            seed: None,
        };
        match self {
            Preset::Classic => {}
            Preset::Relaxed => {
                cfg.spawn.initial_interval = 40;
                cfg.spawn.radius = RadiusRule::CeilScaled(2.0);
                cfg.ramp.after_frames = 1500;
                cfg.ramp.fast_interval = 20;
                cfg.ramp.danger_cue = false;
                cfg.fall.threshold = -6.0;
            }
            Preset::Chaotic => {
                cfg.spawn.initial_interval = 20;
                cfg.spawn.radius = RadiusRule::FloorScaled(3.0);
                cfg.spawn.initial_spin = [0.0, 0.0, 0.0];
                cfg.ramp.fast_interval = 8;
                cfg.cull.cap = 40;
                cfg.fall.threshold = -6.0;
            }
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_validates() {
        for p in [Preset::Classic, Preset::Relaxed, Preset::Chaotic] {
            let warns = p.config().validate();
            assert!(warns.is_empty(), "{p:?}: {warns:?}");
        }
    }

    #[test]
    fn classic_matches_default() {
        assert_eq!(Preset::Classic.config(), GameConfig::default());
    }

    #[test]
    fn relaxed_ramps_later() {
        let c = Preset::Classic.config();
        let r = Preset::Relaxed.config();
        assert!(r.ramp.after_frames > c.ramp.after_frames);
        assert!(r.fall.threshold > c.fall.threshold);
    }
}
