// Shop backend: the single object that owns every piece of state for a
// run (accounts, catalog, carts). The UI holds it by `&mut` and calls
// into it for each menu action; nothing here touches the terminal.

use crate::auth;
use crate::cart::{Carts, Receipt};
use crate::catalog::Catalog;
use crate::config::{AccountNumbering, Config};
use crate::error::ShopError;
use crate::models::{Account, AccountNumber, CartLine, LoginRequest, Medicine, RegisterRequest};
use crate::registry::AccountRegistry;

/// Session manager for one interactive run.
#[derive(Debug)]
pub struct Shop {
    accounts: AccountRegistry,
    catalog: Catalog,
    carts: Carts,
}

impl Shop {
    /// Create a shop with the built-in catalog and the numbering policy
    /// from `config`.
    pub fn from_config(config: &Config) -> Result<Self, ShopError> {
        Ok(Self::new(config.account_numbering, Catalog::builtin()?))
    }

    pub fn new(numbering: AccountNumbering, catalog: Catalog) -> Self {
        Self {
            accounts: AccountRegistry::new(numbering),
            catalog,
            carts: Carts::new(),
        }
    }

    pub fn numbering(&self) -> AccountNumbering {
        self.accounts.numbering()
    }

    /// Register a new customer and return the stored account.
    pub fn register(&mut self, req: RegisterRequest) -> Result<&Account, ShopError> {
        self.accounts.create(req)
    }

    /// Check the credentials and return the account number to start a
    /// session with.
    pub fn login(&self, req: &LoginRequest) -> Result<AccountNumber, ShopError> {
        let account = self.accounts.find(req.account_number)?;
        if !auth::verify_password(&req.password, &account.credential) {
            tracing::warn!(account_number = %req.account_number, "wrong password");
            return Err(ShopError::AuthenticationFailed);
        }
        tracing::info!(account_number = %account.account_number, "login successful");
        Ok(account.account_number)
    }

    pub fn account(&self, account_number: AccountNumber) -> Result<&Account, ShopError> {
        self.accounts.find(account_number)
    }

    /// Look `name` up in the catalog and, when found, add one line for it
    /// to the account's cart.
    pub fn order(&mut self, account_number: AccountNumber, name: &str) -> Result<&Medicine, ShopError> {
        let medicine = self.catalog.find(name).inspect_err(|_| {
            tracing::debug!(name, "medicine not in catalog");
        })?;
        self.carts.add(account_number, medicine);
        tracing::debug!(%account_number, name, "added to cart");
        Ok(medicine)
    }

    pub fn cart(&self, account_number: AccountNumber) -> &[CartLine] {
        self.carts.view(account_number)
    }

    pub fn clear_cart(&mut self, account_number: AccountNumber) {
        self.carts.clear(account_number);
    }

    /// Simulated payment: total the cart and empty it.
    pub fn checkout(&mut self, account_number: AccountNumber) -> Result<Receipt, ShopError> {
        let receipt = self.carts.checkout(account_number)?;
        tracing::info!(%account_number, total = %receipt.total, items = receipt.lines.len(), "checkout");
        Ok(receipt)
    }
}
