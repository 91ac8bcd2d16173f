use image::Rgb;
use serde::{Deserialize, Deserializer};

use crate::vec3::Vec3;

mod mesh;

pub use self::mesh::RenderableMesh;

pub(crate) fn deserialize_rgb<'de, D>(de: D) -> Result<Rgb<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let (r, g, b) = Deserialize::deserialize(de)?;
    let rgb = Rgb([r, g, b]);

    Ok(rgb)
}

/// Maps a byte colour onto `[0, 1]` channels.
#[inline]
pub fn linear(color: Rgb<u8>) -> Vec3<f32> {
    let [r, g, b] = color.0;
    Vec3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

/// Flat surface colour of an object. Always fully opaque.
#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Material {
    #[serde(deserialize_with = "deserialize_rgb")]
    pub color: Rgb<u8>,
}

impl Material {
    pub fn rgba(&self) -> [f32; 4] {
        let c = linear(self.color);
        [c.x, c.y, c.z, 1.0]
    }
}

impl Default for Material {
    fn default() -> Self {
        Material { color: Rgb([204, 178, 102]) }
    }
}

#[test]
fn material_from_json() {
    let material: Material = serde_json::from_str(r#"{ "color": [255, 0, 51] }"#).unwrap();

    assert_eq!(Rgb([255, 0, 51]), material.color);
    assert_eq!([1.0, 0.0, 0.2, 1.0], material.rgba());
}
