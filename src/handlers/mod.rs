pub mod ping;
pub mod products;
pub mod users;
pub mod votes;
