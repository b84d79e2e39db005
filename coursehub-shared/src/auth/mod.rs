/// Authentication utilities
///
/// - [`password`]: Argon2id password hashing and verification
///
/// There are no tokens or sessions. Clients send their user object back on
/// each request that needs one.

pub mod password;
