pub mod consumer;
pub mod resolver;
pub mod semantic;
pub mod sink;
pub mod types;

pub use consumer::*;
pub use resolver::*;
pub use semantic::*;
pub use sink::*;
pub use types::*;
