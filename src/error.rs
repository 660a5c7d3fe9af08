// Domain errors for the shop. The UI decides how each one is shown to
// the customer; these messages are what ends up in the logs.

use crate::models::AccountNumber;
use thiserror::Error;

/// Errors produced by the registry, catalog, cart and checkout logic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShopError {
    /// A menu answer that does not name any option.
    #[error("invalid menu choice: {0:?}")]
    InvalidMenuChoice(String),

    /// No account is registered under this number.
    #[error("account {0} not found")]
    AccountNotFound(AccountNumber),

    /// The password does not match the stored credential.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The catalog has no medicine with this exact name.
    #[error("medicine {0:?} not found")]
    MedicineNotFound(String),

    /// Checkout was requested on an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Argon2 could not produce a credential.
    #[error("password hashing failed")]
    PasswordHash,

    /// The seed catalog could not be loaded.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}
