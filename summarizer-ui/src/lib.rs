pub mod api;
pub mod interop;
pub mod upload;

pub use api::*;
pub use interop::*;
pub use upload::*;
