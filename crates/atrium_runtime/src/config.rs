//! Session configuration
//!
//! # Sources (in priority order)
//!
//! 1. Explicit path (first command-line argument of the `atrium` binary)
//! 2. Environment variable: `ATRIUM_CONFIG=/path/to/atrium.toml`
//! 3. Built-in defaults
//!
//! # Example Config File
//!
//! ```toml
//! [movement]
//! gravity = 9.8
//! damping = 10.0
//! move_speed = 25.0
//! jump_speed = 5.0
//! eye_height = 0.6
//!
//! [collision]
//! body_size = [0.5, 1.8, 0.5]
//!
//! [picking]
//! hit_order = "traversal"   # traversal, nearest
//!
//! [camera]
//! fov_degrees = 60.0
//! look_sensitivity = 0.002
//!
//! [keys]
//! forward = ["KeyW", "ArrowUp"]
//! jump = ["Space"]
//!
//! [level]
//! path = "lab.glb"
//!
//! [intro]
//! enabled = true
//! char_delay_ms = 40
//! space_delay_ms = 80
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use atrium_physics::{CollisionConfig, MovementConfig};
use atrium_picking::HitOrder;
use serde::{Deserialize, Serialize};

use crate::camera::CameraConfig;
use crate::error::{ConfigError, Result};
use crate::keys::KeyBindings;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "ATRIUM_CONFIG";

/// Picking settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickingConfig {
    pub hit_order: HitOrder,
}

/// Level source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// glTF/GLB file; a flat floor is used when unset
    pub path: Option<PathBuf>,
}

/// Intro dialog settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    pub enabled: bool,
    /// Delay after typing a regular character
    pub char_delay_ms: u64,
    /// Delay after typing a space
    pub space_delay_ms: u64,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            char_delay_ms: 40,
            space_delay_ms: 80,
        }
    }
}

impl IntroConfig {
    pub fn char_delay(&self) -> Duration {
        Duration::from_millis(self.char_delay_ms)
    }

    pub fn space_delay(&self) -> Duration {
        Duration::from_millis(self.space_delay_ms)
    }
}

/// Complete session configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtriumConfig {
    pub movement: MovementConfig,
    pub collision: CollisionConfig,
    pub picking: PickingConfig,
    pub camera: CameraConfig,
    pub keys: KeyBindings,
    pub level: LevelConfig,
    pub intro: IntroConfig,
    /// File this config came from
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl std::str::FromStr for AtriumConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

impl AtriumConfig {
    /// Load from an explicit path, then `ATRIUM_CONFIG`, then defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            if !env_path.is_empty() {
                log::info!("Config path from env: {}", env_path);
                return Self::load_from_file(Path::new(&env_path));
            }
        }

        log::info!("Using default configuration");
        Ok(Self::default())
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = content.parse()?;
        config.config_path = Some(path.to_path_buf());
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check every section
    pub fn validate(&self) -> Result<()> {
        self.movement.validate()?;
        self.collision.validate()?;
        self.camera.validate().map_err(ConfigError::Camera)?;
        if let Some(key) = self.keys.conflicts().first() {
            return Err(ConfigError::KeyConflict(key.to_string()));
        }
        Ok(())
    }

    /// Log the effective settings
    pub fn log_summary(&self) {
        log::info!(
            "Movement: gravity {} damping {} speed {} jump {} eye {}",
            self.movement.gravity,
            self.movement.damping,
            self.movement.move_speed,
            self.movement.jump_speed,
            self.movement.eye_height
        );
        log::info!(
            "Collision: body {:?}, {} walls, hit order {:?}",
            self.collision.body_size,
            self.collision.walls.len(),
            self.picking.hit_order
        );
        match &self.level.path {
            Some(path) => log::info!("Level: {}", path.display()),
            None => log::info!("Level: built-in flat floor"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyCode;
    use glam::Vec3;

    #[test]
    fn test_empty_file_is_default() {
        let config: AtriumConfig = "".parse().unwrap();
        assert_eq!(config, AtriumConfig::default());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config: AtriumConfig = r#"
            [movement]
            gravity = 20.0

            [picking]
            hit_order = "nearest"

            [keys]
            jump = ["KeyJ"]

            [level]
            path = "lab.glb"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.movement.gravity, 20.0);
        assert_eq!(config.movement.damping, 10.0);
        assert_eq!(config.picking.hit_order, HitOrder::Nearest);
        assert_eq!(config.keys.jump, vec![KeyCode::Letter('J')]);
        assert_eq!(config.keys.forward, KeyBindings::default().forward);
        assert_eq!(config.level.path, Some(PathBuf::from("lab.glb")));
        assert!(config.intro.enabled);
    }

    #[test]
    fn test_custom_walls() {
        let config: AtriumConfig = r#"
            [collision]
            body_size = [0.4, 1.6, 0.4]
            walls = [ { center = [0.0, 1.0, -3.0], half_extents = [3.0, 1.0, 0.1] } ]
        "#
        .parse()
        .unwrap();

        assert_eq!(config.collision.body_size, Vec3::new(0.4, 1.6, 0.4));
        assert_eq!(config.collision.walls.len(), 1);
        assert_eq!(config.collision.walls[0].center.z, -3.0);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = "[keys]\nforward = [\"KeyWW\"]".parse::<AtriumConfig>().unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = "[movement]\ndamping = -1.0".parse::<AtriumConfig>().unwrap_err();
        assert!(matches!(err, ConfigError::Physics(_)));

        let err = "[camera]\nfov_degrees = 0.0".parse::<AtriumConfig>().unwrap_err();
        assert!(matches!(err, ConfigError::Camera(_)));

        let err = "[keys]\njump = [\"KeyW\"]".parse::<AtriumConfig>().unwrap_err();
        assert!(matches!(err, ConfigError::KeyConflict(ref k) if k == "KeyW"));
    }

    #[test]
    fn test_duplicate_binding_within_action_accepted() {
        let config: AtriumConfig = "[keys]\nforward = [\"KeyW\", \"ArrowUp\", \"KeyW\"]"
            .parse()
            .unwrap();
        assert_eq!(config.keys.forward.len(), 3);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AtriumConfig::load(Some(Path::new("no/such/atrium.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
