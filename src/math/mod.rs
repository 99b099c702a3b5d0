pub mod matrix;
pub mod codec;
pub mod error;

pub use matrix::Matrix;
pub use codec::{decode, encode, MatrixDocument};
pub use error::{MatrixError, Result};
