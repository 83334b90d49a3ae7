use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

use super::presets::Preset;

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Sphere Dodge".into(),
            auto_close: 0.0,
        }
    }
}

/// Global physics + static floor parameters.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub gravity_y: f32,
    /// Fixed Rapier step in seconds.
    pub timestep: f32,
    /// Half extents of the floor slab (x, y, z).
    pub floor_half_extents: [f32; 3],
    pub clear_color: [f32; 3],
}
impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity_y: -10.0,
            timestep: 1.0 / 60.0,
            floor_half_extents: [12.3, 0.1, 20.0],
            clear_color: [0.0, 0.0, 0.0],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    pub half_extent: f32,
    pub mass: f32,
    pub start: [f32; 3],
    pub color: [f32; 3],
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            half_extent: 1.0,
            mass: 2.0,
            start: [0.0, 1.0, 10.0],
            color: [1.0, 0.0, 0.0],
        }
    }
}

/// How a falling sphere picks its radius.
/// RON form: `(kind: "CeilScaled", value: 2.0)`. Read through a plain struct so the
/// variant name survives the `ron::Value` round trip layered loading goes through.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(try_from = "RadiusRuleRepr")]
pub enum RadiusRule {
    Fixed(f32),
    /// `ceil(rand * scale)`
    CeilScaled(f32),
    /// `floor(rand * scale)`
    FloorScaled(f32),
}

#[derive(Deserialize)]
struct RadiusRuleRepr {
    kind: String,
    value: f32,
}

impl TryFrom<RadiusRuleRepr> for RadiusRule {
    type Error = String;

    fn try_from(repr: RadiusRuleRepr) -> Result<Self, Self::Error> {
        match repr.kind.as_str() {
            "Fixed" => Ok(RadiusRule::Fixed(repr.value)),
            "CeilScaled" => Ok(RadiusRule::CeilScaled(repr.value)),
            "FloorScaled" => Ok(RadiusRule::FloorScaled(repr.value)),
            other => Err(format!(
                "unknown radius kind '{other}' (expected Fixed, CeilScaled or FloorScaled)"
            )),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    /// Frames between spawns at the start of a run ("rate of droppage").
    pub initial_interval: u32,
    /// Lateral x positions a sphere may appear at.
    pub palette: Vec<f32>,
    pub radius: RadiusRule,
    pub min_radius: f32,
    pub start_height: f32,
    pub start_depth: f32,
    pub initial_spin: [f32; 3],
    pub mass: f32,
    pub color: [f32; 3],
}
impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            initial_interval: 28,
            palette: (-9..=9).map(|x| x as f32).collect(),
            radius: RadiusRule::Fixed(2.0),
            min_radius: 0.5,
            start_height: 3.0,
            start_depth: -13.0,
            initial_spin: [20.0, 0.0, 0.0],
            mass: 100.0,
            color: [1.0, 1.0, 1.0],
        }
    }
}

/// Difficulty ramp: faster spawns (and an optional background cue) after a frame threshold.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RampConfig {
    pub after_frames: u64,
    pub fast_interval: u32,
    pub danger_cue: bool,
    pub danger_color: [f32; 3],
}
impl Default for RampConfig {
    fn default() -> Self {
        Self {
            after_frames: 1200,
            fast_interval: 10,
            danger_cue: true,
            danger_color: [0x88 as f32 / 255.0, 0.0, 0x21 as f32 / 255.0],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CullConfig {
    pub cap: usize,
    /// Despawn the Rapier body together with the visual when culling.
    pub release_physics: bool,
}
impl Default for CullConfig {
    fn default() -> Self {
        Self {
            cap: 30,
            release_physics: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FallConfig {
    pub threshold: f32,
}
impl Default for FallConfig {
    fn default() -> Self {
        Self { threshold: -8.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub allow_reset: bool,
}
impl Default for SessionConfig {
    fn default() -> Self {
        Self { allow_reset: true }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ControlsConfig {
    pub step: f32,
    pub jump_multiplier: f32,
}
impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            step: 1.0,
            jump_multiplier: 4.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    pub stats_logging: bool,
    pub log_interval: f32,
}
impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            stats_logging: true,
            log_interval: 2.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub spawn: SpawnConfig,
    pub ramp: RampConfig,
    pub cull: CullConfig,
    pub fall: FallConfig,
    pub session: SessionConfig,
    pub controls: ControlsConfig,
    pub debug: DebugConfig,
    pub rapier_debug: bool,
    /// Seed for the spawn RNG; `None` draws one from entropy at startup.
    pub seed: Option<u64>,
}
impl Default for GameConfig {
    fn default() -> Self {
        Preset::Classic.config()
    }
}

pub fn color_from(rgb: [f32; 3]) -> Color {
    Color::srgb(rgb[0], rgb[1], rgb[2])
}

pub fn vec3_from(v: [f32; 3]) -> Vec3 {
    Vec3::from_array(v)
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Merge RON files in order (later maps override earlier keys) on top of `base`.
    /// Returns the config, the paths that contributed, and any read/parse errors.
    pub fn load_layered<P, I>(base: &GameConfig, paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        match &mut merged {
                            Some(cur) => merge_value(cur, val),
                            None => merged = Some(val),
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(overlay) = merged else {
            return (base.clone(), used, errors);
        };
        let mut cfg = base.clone();
        cfg.apply_layer(overlay, &mut errors);
        (cfg, used, errors)
    }

    /// Apply one in-memory RON layer on top of `base`.
    pub fn layer_from_str(base: &GameConfig, raw: &str) -> (Self, Vec<String>) {
        let mut cfg = base.clone();
        let mut errors = Vec::new();
        match ron::from_str::<ron::value::Value>(raw) {
            Ok(layer) => cfg.apply_layer(layer, &mut errors),
            Err(e) => errors.push(format!("parse error: {e}")),
        }
        (cfg, errors)
    }

    /// Replace each top-level section the layer names. Fields missing inside a
    /// named section take the serde defaults, not the base values.
    fn apply_layer(&mut self, layer: ron::value::Value, errors: &mut Vec<String>) {
        use ron::value::Value;
        let Value::Map(map) = layer else {
            errors.push("config root must be a struct/map; layer ignored".into());
            return;
        };
        for (key, val) in map.into_iter() {
            let key = match key {
                Value::String(s) => s,
                other => {
                    errors.push(format!("non-string config key {other:?} ignored"));
                    continue;
                }
            };
            let res = match key.as_str() {
                "window" => val.into_rust::<WindowConfig>().map(|v| self.window = v),
                "world" => val.into_rust::<WorldConfig>().map(|v| self.world = v),
                "player" => val.into_rust::<PlayerConfig>().map(|v| self.player = v),
                "spawn" => val.into_rust::<SpawnConfig>().map(|v| self.spawn = v),
                "ramp" => val.into_rust::<RampConfig>().map(|v| self.ramp = v),
                "cull" => val.into_rust::<CullConfig>().map(|v| self.cull = v),
                "fall" => val.into_rust::<FallConfig>().map(|v| self.fall = v),
                "session" => val.into_rust::<SessionConfig>().map(|v| self.session = v),
                "controls" => val.into_rust::<ControlsConfig>().map(|v| self.controls = v),
                "debug" => val.into_rust::<DebugConfig>().map(|v| self.debug = v),
                "rapier_debug" => val.into_rust::<bool>().map(|v| self.rapier_debug = v),
                "seed" => val.into_rust::<Option<u64>>().map(|v| self.seed = v),
                other => {
                    errors.push(format!("unknown config section '{other}' ignored"));
                    continue;
                }
            };
            if let Err(e) = res {
                errors.push(format!("section '{key}': {e}; keeping previous value"));
            }
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.world.gravity_y >= 0.0 {
            w.push(format!(
                "world.gravity_y is {}; spheres and player will not fall",
                self.world.gravity_y
            ));
        }
        if self.world.timestep <= 0.0 {
            w.push("world.timestep must be > 0".into());
        }
        if self.spawn.initial_interval == 0 {
            w.push("spawn.initial_interval is 0; spawn gate would divide by zero".into());
        }
        if self.ramp.fast_interval == 0 {
            w.push("ramp.fast_interval is 0; ramp will be ignored".into());
        }
        if self.spawn.palette.is_empty() {
            w.push("spawn.palette is empty; spheres spawn at x = 0".into());
        }
        if self.spawn.min_radius <= 0.0 {
            w.push("spawn.min_radius must be > 0".into());
        }
        match self.spawn.radius {
            RadiusRule::Fixed(r) if r <= 0.0 => {
                w.push(format!("spawn.radius Fixed({r}) must be > 0"));
            }
            RadiusRule::CeilScaled(s) | RadiusRule::FloorScaled(s) if s <= 0.0 => {
                w.push(format!("spawn.radius scale {s} must be > 0"));
            }
            _ => {}
        }
        if self.spawn.mass <= 0.0 || self.player.mass <= 0.0 {
            w.push("masses must be > 0".into());
        }
        if self.cull.cap == 0 {
            w.push("cull.cap is 0; every sphere is removed the frame it spawns".into());
        }
        if !self.cull.release_physics {
            w.push("cull.release_physics disabled; culled bodies stay in the simulation".into());
        }
        if self.fall.threshold >= self.player.start[1] {
            w.push(format!(
                "fall.threshold {} is not below player start y {}; run ends immediately",
                self.fall.threshold, self.player.start[1]
            ));
        }
        if self.controls.step <= 0.0 {
            w.push("controls.step must be > 0".into());
        }
        w
    }
}

fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
    use ron::value::Value;
    match (base, overlay) {
        (Value::Map(bm), Value::Map(om)) => {
            for (k, v) in om.into_iter() {
                let existing = bm.iter_mut().find(|(ek, _)| **ek == k).map(|(_, ev)| ev);
                match existing {
                    Some(ev) => merge_value(ev, v),
                    None => {
                        bm.insert(k, v);
                    }
                }
            }
        }
        (b, o) => *b = o,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_clean() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    }

    #[test]
    fn zero_interval_is_reported() {
        let mut cfg = GameConfig::default();
        cfg.spawn.initial_interval = 0;
        let warns = cfg.validate();
        assert!(warns.iter().any(|w| w.contains("initial_interval")));
    }

    #[test]
    fn default_palette_spans_minus_nine_to_nine() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.spawn.palette.len(), 19);
        assert_eq!(cfg.spawn.palette.first(), Some(&-9.0));
        assert_eq!(cfg.spawn.palette.last(), Some(&9.0));
    }

    #[test]
    fn parses_radius_rule_variants() {
        let cfg: GameConfig =
            ron::from_str(r#"(spawn: (radius: (kind: "FloorScaled", value: 3.0), min_radius: 0.25))"#)
                .unwrap();
        assert_eq!(cfg.spawn.radius, RadiusRule::FloorScaled(3.0));
        assert_eq!(cfg.spawn.min_radius, 0.25);
        // untouched fields inside the section keep their defaults
        assert_eq!(cfg.spawn.initial_interval, 28);
    }

    #[test]
    fn radius_rule_survives_layer_loading() {
        let (cfg, errors) = GameConfig::layer_from_str(
            &GameConfig::default(),
            r#"(spawn: (initial_interval: 24, radius: (kind: "CeilScaled", value: 2.0)))"#,
        );
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(cfg.spawn.radius, RadiusRule::CeilScaled(2.0));
        assert_eq!(cfg.spawn.initial_interval, 24);

        let (cfg, errors) = GameConfig::layer_from_str(
            &GameConfig::default(),
            r#"(spawn: (radius: (kind: "Fixed", value: 3)))"#,
        );
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(cfg.spawn.radius, RadiusRule::Fixed(3.0));
    }

    #[test]
    fn unknown_radius_kind_is_reported() {
        let (cfg, errors) = GameConfig::layer_from_str(
            &GameConfig::default(),
            r#"(spawn: (radius: (kind: "Huge", value: 2.0)))"#,
        );
        assert!(errors.iter().any(|e| e.contains("Huge")), "{errors:?}");
        assert_eq!(cfg.spawn.radius, RadiusRule::Fixed(2.0));
    }

    #[test]
    fn merge_keeps_sibling_fields_of_earlier_layers() {
        use ron::value::Value;
        let mut base: Value =
            ron::from_str("(spawn: (initial_interval: 30, mass: 50.0), cull: (cap: 9))").unwrap();
        let overlay: Value = ron::from_str("(spawn: (initial_interval: 15))").unwrap();
        merge_value(&mut base, overlay);

        let mut cfg = GameConfig::default();
        let mut errors = Vec::new();
        cfg.apply_layer(base, &mut errors);
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(cfg.spawn.initial_interval, 15);
        assert_eq!(cfg.spawn.mass, 50.0);
        assert_eq!(cfg.cull.cap, 9);
    }
}
