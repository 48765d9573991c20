//! Scene configuration.
//!
//! The window layer hands each scene an opaque JSON blob
//! (`{"scale": 1.0, "color": [r, g, b]}`); every field is optional and the
//! physics tunables can be overridden the same way.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::math::Vec3;

use super::error::SceneError;

/// Which mini-scene a window shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    /// Single textured cube spinning in clip space
    Cube,
    /// Dice thrown onto a table, orbit camera
    Dice,
}

impl SceneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneKind::Cube => "cube",
            SceneKind::Dice => "dice",
        }
    }
}

impl FromStr for SceneKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cube" => Ok(SceneKind::Cube),
            "dice" => Ok(SceneKind::Dice),
            other => Err(SceneError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tunables for the dice integrator.
///
/// Velocities are in world units per 60 Hz reference tick; `update` scales
/// them by `dt * reference_rate`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    pub gravity: f32,
    pub damping: f32,
    pub air_resistance: f32,
    pub table_height: f32,
    pub half_extent: f32,
    pub reference_rate: f32,
    pub max_animation_time: f32,
    pub still_threshold: f32,
    pub nearly_still_threshold: f32,
    pub settle_bounce_threshold: f32,
    pub settle_friction: f32,
    pub spin_friction: f32,
    pub spin_friction_threshold: f32,
    pub bounds: f32,
    pub lost_depth: f32,
    /// Resting x and z on the table. Height always comes from
    /// `contact_height`.
    pub start_xz: [f32; 2],
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: -0.8,
            damping: 0.5,
            air_resistance: 0.99,
            table_height: -30.0,
            half_extent: 15.0,
            reference_rate: 60.0,
            max_animation_time: 5.0,
            still_threshold: 0.1,
            nearly_still_threshold: 1.0,
            settle_bounce_threshold: 2.0,
            settle_friction: 0.6,
            spin_friction: 0.8,
            spin_friction_threshold: 2.0,
            bounds: 80.0,
            lost_depth: 100.0,
            start_xz: [0.0, 0.0],
        }
    }
}

impl PhysicsSettings {
    /// Height at which the body's lower face touches the table
    #[inline]
    pub fn contact_height(&self) -> f32 {
        self.table_height + self.half_extent
    }

    /// Initial at-rest position, lower face on the table
    pub fn rest_position(&self) -> Vec3 {
        Vec3::new(self.start_xz[0], self.contact_height(), self.start_xz[1])
    }

    fn validate(&self) -> Result<(), SceneError> {
        if !(self.half_extent > 0.0) {
            return Err(SceneError::InvalidConfig(format!(
                "physics.half_extent must be positive, got {}",
                self.half_extent
            )));
        }
        if !(self.max_animation_time > 0.0) {
            return Err(SceneError::InvalidConfig(format!(
                "physics.max_animation_time must be positive, got {}",
                self.max_animation_time
            )));
        }
        if !(self.bounds > 0.0) {
            return Err(SceneError::InvalidConfig(format!(
                "physics.bounds must be positive, got {}",
                self.bounds
            )));
        }
        if !(self.lost_depth > 0.0) {
            return Err(SceneError::InvalidConfig(format!(
                "physics.lost_depth must be positive, got {}",
                self.lost_depth
            )));
        }
        if !(self.reference_rate > 0.0) {
            return Err(SceneError::InvalidConfig(format!(
                "physics.reference_rate must be positive, got {}",
                self.reference_rate
            )));
        }
        Ok(())
    }
}

/// Relative URLs of the two texture assets
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TexturePaths {
    pub object: String,
    pub table: String,
}

impl Default for TexturePaths {
    fn default() -> Self {
        Self {
            object: "images/Cube.png".to_string(),
            table: "images/Table.png".to_string(),
        }
    }
}

/// Per-window configuration supplied by the window layer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Uniform scale of the spinning object
    pub scale: f32,
    /// RGB tint in 0..1, bound as the constant `a_color` attribute. The
    /// textured shader does not read it.
    pub color: Option<[f32; 3]>,
    pub textures: TexturePaths,
    pub physics: PhysicsSettings,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            color: None,
            textures: TexturePaths::default(),
            physics: PhysicsSettings::default(),
        }
    }
}

impl SceneConfig {
    /// Parse and validate. Blank input gives the defaults.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(SceneError::InvalidConfig(format!(
                "scale must be a positive number, got {}",
                self.scale
            )));
        }
        self.physics.validate()
    }
}
