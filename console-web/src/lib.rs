pub mod api;
pub mod components;
pub mod interop;
pub mod notify;
pub mod session;

pub use api::*;
pub use components::*;
pub use interop::*;
pub use notify::*;
pub use session::*;
