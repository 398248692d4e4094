pub mod celebration;
pub mod color;
pub mod error;

pub use celebration::{Celebration, CelebrationData, CelebrationMeta, LiturgicalColor};
pub use color::{ColorKey, SCALE_STEPS};
pub use error::{LiturgyError, Result};
