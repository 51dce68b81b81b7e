pub mod product;
pub mod user;
pub mod vote;

pub use product::*;
pub use user::*;
pub use vote::*;
