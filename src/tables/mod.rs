pub mod counts;
pub use counts::*;

pub mod draw;
pub use draw::*;

pub mod flush;
pub use flush::*;

pub mod pattern;
pub use pattern::*;

pub mod sequences;
pub use sequences::*;

pub mod straight;
pub use straight::*;

pub mod suits;
pub use suits::*;

pub mod table;
pub use table::*;

pub mod bundle;
pub use bundle::*;
