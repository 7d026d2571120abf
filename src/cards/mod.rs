pub mod rank;
pub use rank::*;

pub mod ranks;
pub use ranks::*;

pub mod suit;
pub use suit::*;
