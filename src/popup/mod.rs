mod input;
mod session;
mod window;

pub use input::*;
pub use session::*;
pub use window::*;
