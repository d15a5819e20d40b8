//! Authentication module
//!
//! Provides JWT-based session tokens with bcrypt password hashing.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService, TokenError};
pub use middleware::AuthUser;
pub use password::{PasswordService, HASH_COST};
