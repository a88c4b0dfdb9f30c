// HTTP routes
pub mod access;
pub mod export;
pub mod geophysics;
pub mod health;

pub use access::*;
pub use export::*;
pub use geophysics::*;
pub use health::*;
