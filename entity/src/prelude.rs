pub use super::assignment::Entity as Assignment;
pub use super::creature::Entity as Creature;
pub use super::revoked_token::Entity as RevokedToken;
pub use super::user::Entity as User;
