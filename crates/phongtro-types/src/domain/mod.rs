mod ids;
mod rental;
mod withdrawal;

pub use ids::*;
pub use rental::*;
pub use withdrawal::*;
