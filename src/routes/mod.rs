mod contact;
mod health_check;
mod roi;

pub use contact::*;
pub use health_check::*;
pub use roi::*;
