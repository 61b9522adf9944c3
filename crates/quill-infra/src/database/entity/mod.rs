//! SeaORM entities mapping the domain to storage.

pub mod post;
