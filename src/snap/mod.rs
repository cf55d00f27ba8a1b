mod interaction;
mod modes;

pub use interaction::*;
pub use modes::*;
