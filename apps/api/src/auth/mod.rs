// Authentication helpers
// Password hashing and bearer token handling for the identity layer

pub mod jwt;
pub mod password;
