pub mod card;
pub mod skeleton;

pub use card::*;
pub use skeleton::*;
