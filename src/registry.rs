// Account registry: every customer registered during this run.

use crate::auth;
use crate::config::AccountNumbering;
use crate::error::ShopError;
use crate::models::{Account, AccountNumber, RegisterRequest};

/// First number handed out under sequential numbering.
const FIRST_SEQUENTIAL_NUMBER: u64 = 1000;

/// Accounts in registration order. Lookups scan from the front, so under
/// phone numbering a repeated phone number resolves to the earliest
/// account.
#[derive(Debug)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
    numbering: AccountNumbering,
}

impl AccountRegistry {
    pub fn new(numbering: AccountNumbering) -> Self {
        Self {
            accounts: Vec::new(),
            numbering,
        }
    }

    pub fn numbering(&self) -> AccountNumbering {
        self.numbering
    }

    /// Hash the password, assign an account number and store the account.
    pub fn create(&mut self, req: RegisterRequest) -> Result<&Account, ShopError> {
        let credential = auth::hash_password(&req.password)?;
        let account_number = self.next_account_number(req.phone_number);

        let index = self.accounts.len();
        self.accounts.push(Account {
            name: req.name,
            credential,
            account_number,
            phone_number: req.phone_number,
            addresses: vec![req.address],
        });
        tracing::info!(%account_number, "account created");
        Ok(&self.accounts[index])
    }

    pub fn find(&self, account_number: AccountNumber) -> Result<&Account, ShopError> {
        self.accounts
            .iter()
            .find(|a| a.account_number == account_number)
            .ok_or(ShopError::AccountNotFound(account_number))
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn next_account_number(&self, phone_number: u64) -> AccountNumber {
        match self.numbering {
            AccountNumbering::Phone => AccountNumber::new(phone_number),
            AccountNumbering::Sequential => AccountNumber::new(
                self.accounts
                    .last()
                    .map_or(FIRST_SEQUENTIAL_NUMBER, |a| a.account_number.as_u64() + 1),
            ),
        }
    }
}
