//! Scene description, read from JSON.
//!
//! Every field is optional and falls back to the values below, so `{}` is a
//! valid scene: the built-in teapot under a white light.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::Rgb;
use serde::{Deserialize, Deserializer};

use crate::error::Result;
use crate::model::{deserialize_rgb, Material};
use crate::vec3::Vec3;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub patches: PatchSource,
    /// Subdivisions per patch edge.
    pub resolution: u32,
    pub max_resolution: u32,
    pub position: Vec3<f32>,
    /// Degrees per second while a rotation key is held.
    pub rotation_speed: f32,
    pub material: Material,
    #[serde(deserialize_with = "deserialize_rgb")]
    pub background: Rgb<u8>,
    pub light: LightConfig,
    #[serde(deserialize_with = "deserialize_rgb")]
    pub ambient: Rgb<u8>,
    pub camera: CameraConfig,
    /// Where `P` writes the current frame.
    pub screenshot: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            patches: PatchSource::Teapot,
            resolution: 10,
            max_resolution: 64,
            position: Vec3::new(0.0, -1.5, 0.0),
            rotation_speed: 45.0,
            material: Material::default(),
            background: Rgb([0, 0, 0]),
            light: LightConfig::default(),
            ambient: Rgb([20, 20, 20]),
            camera: CameraConfig::default(),
            screenshot: PathBuf::from("screenshot.png"),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;

        Ok(config)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Frame rate cap.
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Teapot".to_string(),
            width: 800,
            height: 600,
            fps: 60,
        }
    }
}

/// Point light, fixed relative to the viewer.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    /// Eye space position.
    pub position: Vec3<f32>,
    #[serde(deserialize_with = "deserialize_rgb")]
    pub color: Rgb<u8>,
    pub power: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(3.0, 4.0, 0.0),
            color: Rgb([255, 255, 255]),
            power: 60.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view, in degrees.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub distance: f32,
    /// Degrees.
    pub yaw: f32,
    /// Degrees.
    pub pitch: f32,
    /// Degrees per second.
    pub orbit_speed: f32,
    /// Units per second.
    pub zoom_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y: 60.0,
            near: 0.1,
            far: 100.0,
            distance: 8.0,
            yaw: 0.0,
            pitch: 20.0,
            orbit_speed: 90.0,
            zoom_speed: 4.0,
        }
    }
}

/// Where the control points come from: `"teapot"` or a `.bpt` file path.
#[derive(Clone, Debug, PartialEq)]
pub enum PatchSource {
    Teapot,
    File(PathBuf),
}

impl<'de> Deserialize<'de> for PatchSource {
    fn deserialize<D>(de: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let source = String::deserialize(de)?;

        Ok(match source.as_str() {
            "teapot" => PatchSource::Teapot,
            _ => PatchSource::File(PathBuf::from(source)),
        })
    }
}

#[test]
fn empty_object_is_default() {
    let config: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(PatchSource::Teapot, config.patches);
    assert_eq!(10, config.resolution);
    assert_eq!(800, config.window.width);
    assert_eq!(Vec3::new(0.0, -1.5, 0.0), config.position);
    assert_eq!(Rgb([255, 255, 255]), config.light.color);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config: Config = serde_json::from_str(
        r#"{
            "patches": "models/teacup.bpt",
            "resolution": 4,
            "window": { "width": 320 },
            "camera": { "fov_y": 45.0 },
            "light": { "position": [0, 10, 0] },
            "background": [30, 30, 30]
        }"#,
    )
    .unwrap();

    assert_eq!(PatchSource::File(PathBuf::from("models/teacup.bpt")), config.patches);
    assert_eq!(4, config.resolution);
    assert_eq!(320, config.window.width);
    assert_eq!(600, config.window.height);
    assert_eq!(45.0, config.camera.fov_y);
    assert_eq!(0.1, config.camera.near);
    assert_eq!(Vec3::new(0.0, 10.0, 0.0), config.light.position);
    assert_eq!(60.0, config.light.power);
    assert_eq!(Rgb([30, 30, 30]), config.background);
}

#[test]
fn malformed_color_is_an_error() {
    assert!(serde_json::from_str::<Config>(r#"{ "ambient": [1, 2] }"#).is_err());
}
