pub mod core;
pub mod roles;
pub mod shares;
