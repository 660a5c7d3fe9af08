// UI layer: the numbered text menus of PharmaGo. Every flow talks to the
// console only through `Terminal` and to the data only through `Shop`,
// so the whole conversation can be driven from a test script.

use crate::config::AccountNumbering;
use crate::error::ShopError;
use crate::models::{format_price, AccountNumber, Address, CartLine, LoginRequest, RegisterRequest};
use crate::shop::Shop;
use crate::terminal::Terminal;
use anyhow::Result;

/// Where the customer is in the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Unauthenticated,
    Authenticated(AccountNumber),
    Finished,
}

/// Run one customer visit: the top menu, then (after a successful
/// registration or login) the session menu until logout. An invalid top
/// menu answer ends the run without retrying.
pub fn main_menu(term: &mut impl Terminal, shop: &mut Shop) -> Result<()> {
    let mut state = SessionState::Unauthenticated;
    loop {
        state = match state {
            SessionState::Unauthenticated => match welcome(term, shop)? {
                Some(account_number) => SessionState::Authenticated(account_number),
                None => SessionState::Finished,
            },
            SessionState::Authenticated(account_number) => {
                session_menu(term, shop, account_number)?;
                SessionState::Finished
            }
            SessionState::Finished => return Ok(()),
        };
    }
}

/// Parse a numbered menu answer in `1..=options`.
pub fn menu_choice(input: &str, options: u32) -> Result<u32, ShopError> {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|choice| (1..=options).contains(choice))
        .ok_or_else(|| ShopError::InvalidMenuChoice(input.trim().to_string()))
}

fn welcome(term: &mut impl Terminal, shop: &mut Shop) -> Result<Option<AccountNumber>> {
    term.info("Welcome to PharmaGo!");
    term.info("Please select from the following options:");
    term.info("1. New Customer");
    term.info("2. Existing Customer");

    let answer = term.text("Your choice")?;
    match menu_choice(&answer, 2) {
        Ok(1) => {
            handle_register(term, shop)?;
            handle_login(term, shop).map(Some)
        }
        Ok(_) => handle_login(term, shop).map(Some),
        Err(e) => {
            tracing::debug!(error = %e, "top menu");
            term.error("Invalid choice.");
            Ok(None)
        }
    }
}

/// Collect the registration form and store the new account.
fn handle_register(term: &mut impl Terminal, shop: &mut Shop) -> Result<()> {
    term.info("Create your account:");
    let name = term.text("Enter your name")?;
    let password = term.password("Create your password")?;
    let phone_number = term.number("Enter your phone number")?;

    term.info("Enter your address:");
    let city = term.text("City")?;
    let street_name = term.text("Street Name")?;
    let building_details = term.text("Building Details")?;

    let req = RegisterRequest {
        name: name.trim().to_string(),
        password: password.trim().to_string(),
        phone_number,
        address: Address {
            city,
            street_name,
            building_details,
        },
    };
    let account_number = shop.register(req)?.account_number;

    term.info("Your account has been created successfully!");
    if shop.numbering() == AccountNumbering::Sequential {
        term.info(&format!("Your account number is {account_number}."));
    }
    Ok(())
}

/// Ask for credentials until they check out. Unknown accounts and wrong
/// passwords both go back to the first prompt.
fn handle_login(term: &mut impl Terminal, shop: &Shop) -> Result<AccountNumber> {
    let prompt = match shop.numbering() {
        AccountNumbering::Phone => "Enter your phone number",
        AccountNumbering::Sequential => "Enter your account number",
    };

    loop {
        let account_number = AccountNumber::new(term.number(prompt)?);
        if let Err(e) = shop.account(account_number) {
            tracing::warn!(error = %e, "login");
            term.error("Account not found. Please try again.");
            continue;
        }

        let password = term.password("Enter your password")?;
        let req = LoginRequest {
            account_number,
            password: password.trim().to_string(),
        };
        match shop.login(&req) {
            Ok(account_number) => {
                term.info("Login successful!");
                return Ok(account_number);
            }
            Err(ShopError::AuthenticationFailed) => {
                term.error("Incorrect password. Please try again.");
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn session_menu(term: &mut impl Terminal, shop: &mut Shop, account_number: AccountNumber) -> Result<()> {
    loop {
        term.info("");
        term.info("1. Order Medicine");
        term.info("2. View Cart");
        term.info("3. Checkout");
        term.info("4. Logout");

        let answer = term.text("Your choice")?;
        match menu_choice(&answer, 4) {
            Ok(1) => order_medicine(term, shop, account_number)?,
            Ok(2) => show_cart(term, shop.cart(account_number)),
            Ok(3) => handle_checkout(term, shop, account_number)?,
            Ok(_) => {
                term.info("Logging out...");
                return Ok(());
            }
            Err(e) => {
                tracing::debug!(error = %e, "session menu");
                term.error("Invalid choice. Please try again.");
            }
        }
    }
}

fn order_medicine(term: &mut impl Terminal, shop: &mut Shop, account_number: AccountNumber) -> Result<()> {
    let answer = term.text("Enter the medicine name")?;
    // Only the first word counts, like the other single-token prompts.
    let name = answer.split_whitespace().next().unwrap_or_default();

    match shop.order(account_number, name) {
        Ok(_) => {
            term.info("The item you want is available.");
            term.info("Added to your cart.");
        }
        Err(ShopError::MedicineNotFound(_)) => {
            term.info("The item you want is not available.");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn show_cart(term: &mut impl Terminal, lines: &[CartLine]) {
    if lines.is_empty() {
        term.info("Your cart is empty.");
        return;
    }
    term.info("Items in your cart:");
    for line in lines {
        term.info(&format!("- {} ({})", line.name, format_price(line.price)));
    }
}

fn handle_checkout(term: &mut impl Terminal, shop: &mut Shop, account_number: AccountNumber) -> Result<()> {
    let receipt = match shop.checkout(account_number) {
        Ok(receipt) => receipt,
        Err(ShopError::EmptyCart) => {
            term.error("Your cart is empty.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    term.busy("Processing payment...")?;
    term.info("Your Cart:");
    show_cart(term, &receipt.lines);
    term.info(&format!("Total Price: {}", format_price(receipt.total)));
    Ok(())
}
