pub mod annotation;
pub mod concept;
pub mod enums;
pub mod span;

pub use annotation::*;
pub use concept::*;
pub use enums::*;
pub use span::*;
