mod framebuffer;
mod raster;
mod shader;

pub use self::framebuffer::Framebuffer;
pub use self::raster::draw;
pub use self::shader::{Light, PointLight, Shader, Uniforms, Varying};
