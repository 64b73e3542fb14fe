//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let account = factory::create_account(&db).await?;
//!     let (band, membership) = factory::helpers::create_band_with_admin(&db, &account).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let invitation = factory::invitation::InvitationFactory::new(&db, band.id, account.id)
//!     .code("ABCDEFGHIJ")
//!     .created_minutes_ago(31)
//!     .kept(true)
//!     .build()
//!     .await?;
//! ```

pub mod account;
pub mod account_band;
pub mod band;
pub mod helpers;
pub mod invitation;

pub use account::create_account;
pub use account_band::create_membership;
pub use band::create_band;
pub use invitation::create_invitation;
