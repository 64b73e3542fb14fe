pub use super::account::Entity as Account;
pub use super::account_band::Entity as AccountBand;
pub use super::band::Entity as Band;
pub use super::invitation::Entity as Invitation;
