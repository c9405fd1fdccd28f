mod batch_inv;
mod fft;
mod field;
mod scalar;
mod vector;

pub use batch_inv::*;
pub use fft::*;
pub use field::*;
pub use scalar::*;
pub use vector::*;
