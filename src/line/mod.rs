pub mod basis;
pub mod line_pass;
pub mod plucker;

pub use basis::{Anti, Basis, BasisElement};
pub use line_pass::LinePass;
pub use plucker::Plucker;
