mod mat4;
mod vec3;

pub use mat4::Mat4;
pub use vec3::Vec3;

pub const PI: f32 = std::f32::consts::PI;
pub const TAU: f32 = std::f32::consts::TAU;

/// Degrees to radians; every angle taken by [`Mat4`] goes through here.
///
/// Works in `f64` so projection and rotation terms are narrowed to `f32` once.
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

pub fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / std::f64::consts::PI)
}
