//! Column-major 4x4 transform matrices for model, view and projection work.
//!
//! ```
//! use enginemath::math::{Mat4, Vec3};
//!
//! let model = Mat4::translate(Vec3::new(1.0, 2.0, 3.0));
//! assert_eq!(model.transform_point(Vec3::zero()), Vec3::new(1.0, 2.0, 3.0));
//! ```

mod error;
pub mod logging;
pub mod math;

pub use error::MathError;
pub use math::{Mat4, Vec3};
