pub mod product_service;
pub mod user_service;
pub mod vote_service;
