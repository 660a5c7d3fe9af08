// Plain data shapes shared by the registry, catalog and cart modules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a customer account. Depending on the configured
/// numbering this is either the phone number or a sequential number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(u64);

impl AccountNumber {
    #[must_use]
    pub const fn new(number: u64) -> Self {
        Self(number)
    }

    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AccountNumber {
    fn from(number: u64) -> Self {
        Self(number)
    }
}

/// Delivery address. Free-form, nothing is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub street_name: String,
    pub building_details: String,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    pub name: String,
    pub price: Decimal,
}

/// A registered customer. `credential` holds the Argon2 PHC string, never
/// the password itself.
#[derive(Debug, Clone)]
pub struct Account {
    pub name: String,
    pub credential: String,
    pub account_number: AccountNumber,
    pub phone_number: u64,
    pub addresses: Vec<Address>,
}

/// One line of a cart: name and price copied from the catalog when the
/// medicine was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    pub price: Decimal,
}

impl From<&Medicine> for CartLine {
    fn from(medicine: &Medicine) -> Self {
        Self {
            name: medicine.name.clone(),
            price: medicine.price,
        }
    }
}

/// Fields collected by the registration form.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub password: String,
    pub phone_number: u64,
    pub address: Address,
}

/// Fields collected by the login form.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub account_number: AccountNumber,
    pub password: String,
}

/// Format an amount the way every price is shown: `$X.XX`.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}
