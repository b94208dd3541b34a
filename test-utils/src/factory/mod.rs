//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let trainer = factory::user::create_trainer(&db).await?;
//! let creature = factory::creature::create_creature(&db).await?;
//! let assignment = factory::assignment::create_assignment(&db, trainer.id, creature.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let profesor = factory::user::UserFactory::new(&db)
//!     .email("oak@universidad.edu")
//!     .role("profesor")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `creature` - Create catalog creature entities
//! - `assignment` - Create trainer-creature assignment entities
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod assignment;
pub mod creature;
pub mod helpers;
pub mod user;

pub use assignment::create_assignment;
pub use creature::create_creature;
pub use user::{create_profesor, create_trainer, create_user};
