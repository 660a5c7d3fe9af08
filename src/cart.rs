// Carts, keyed by account number. A cart comes into existence on the
// first add and is emptied at checkout.

use crate::error::ShopError;
use crate::models::{AccountNumber, CartLine, Medicine};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// The outcome of a checkout: what was bought and what it cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub lines: Vec<CartLine>,
    pub total: Decimal,
}

#[derive(Debug, Default)]
pub struct Carts {
    by_account: HashMap<AccountNumber, Vec<CartLine>>,
}

impl Carts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line for `medicine`. Adding the same medicine twice
    /// gives two lines; there is no quantity.
    pub fn add(&mut self, account_number: AccountNumber, medicine: &Medicine) {
        self.by_account
            .entry(account_number)
            .or_default()
            .push(CartLine::from(medicine));
    }

    pub fn view(&self, account_number: AccountNumber) -> &[CartLine] {
        self.by_account
            .get(&account_number)
            .map_or(&[][..], Vec::as_slice)
    }

    pub fn clear(&mut self, account_number: AccountNumber) {
        if let Some(lines) = self.by_account.get_mut(&account_number) {
            lines.clear();
        }
    }

    /// Total the cart and empty it. An empty cart is left untouched.
    pub fn checkout(&mut self, account_number: AccountNumber) -> Result<Receipt, ShopError> {
        let lines = self
            .by_account
            .get_mut(&account_number)
            .filter(|lines| !lines.is_empty())
            .map(std::mem::take)
            .ok_or(ShopError::EmptyCart)?;
        let total = lines.iter().map(|line| line.price).sum();
        Ok(Receipt { lines, total })
    }
}
