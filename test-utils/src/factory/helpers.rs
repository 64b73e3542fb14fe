//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Monotonically increasing across all factories, so generated emails and
/// invitation codes never collide within a test binary.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Encodes a counter value as a ten letter invitation code.
///
/// Writes the value in base 26 using `A`..=`Z`, left padded with `A`.
pub fn code_from_id(mut id: u64) -> String {
    let mut buf = [b'A'; 10];
    for slot in buf.iter_mut().rev() {
        *slot = b'A' + (id % 26) as u8;
        id /= 26;
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Creates a band with `account` as its admin member.
///
/// # Returns
/// - `Ok((band, membership))` - The band and the admin membership
/// - `Err(DbErr)` - Database error during creation
pub async fn create_band_with_admin(
    db: &DatabaseConnection,
    account: &entity::account::Model,
) -> Result<(entity::band::Model, entity::account_band::Model), DbErr> {
    let band = crate::factory::band::create_band(db).await?;
    let membership = crate::factory::account_band::AccountBandFactory::new(db, account.id, band.id)
        .admin(true)
        .build()
        .await?;

    Ok((band, membership))
}
