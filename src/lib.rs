pub mod error;
pub mod math;
pub mod path;
pub mod scene;
pub mod train;
pub mod tube;

pub use error::{Result, TubetrainError};
