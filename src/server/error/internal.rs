use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to sign a token.
    ///
    /// Usually a key that does not match the configured algorithm.
    #[error("Failed to encode token: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),

    /// Failure to hash a password or to parse a stored hash.
    #[error("Password hashing failed: {0}")]
    PasswordHash(argon2::password_hash::Error),

    /// A joined row that the schema guarantees was missing.
    #[error("Assignment {assignment_id} references missing creature {creature_id}")]
    DanglingAssignment {
        /// Assignment row id
        assignment_id: i32,
        /// Creature id the assignment points to
        creature_id: i32,
    },
}
