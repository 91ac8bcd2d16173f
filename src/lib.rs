//! Tessellation and software rendering of bicubic Bézier patch models, the
//! Utah teapot being the one that ships built in.

#[macro_use]
extern crate serde_derive;

pub mod camera;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod matrix;
pub mod model;
pub mod quat;
pub mod render;
pub mod scene;
pub mod transform;
pub mod vec3;
pub mod vec4;
