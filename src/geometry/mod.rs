pub mod point_3;
pub mod point_4;
pub mod util;
pub mod vector_3;

pub use point_3::Point3;
pub use point_4::Point4;
pub use vector_3::{Vector3, VectorOps};
