//! End-to-end tests for the PharmaGo menus.
//!
//! The menus are driven through a scripted `Terminal` that answers every
//! prompt from a queue and records what was printed, so whole customer
//! visits run without a TTY.

use std::collections::VecDeque;

use anyhow::{anyhow, Result};
use pharmago_cli::catalog::Catalog;
use pharmago_cli::config::AccountNumbering;
use pharmago_cli::models::AccountNumber;
use pharmago_cli::shop::Shop;
use pharmago_cli::terminal::Terminal;
use pharmago_cli::ui::main_menu;

/// Terminal that replays canned answers and captures output lines.
#[derive(Default)]
struct ScriptedTerminal {
    answers: VecDeque<String>,
    output: Vec<String>,
    errors: Vec<String>,
}

impl ScriptedTerminal {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| (*a).to_string()).collect(),
            ..Self::default()
        }
    }

    fn next(&mut self, prompt: &str) -> Result<String> {
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("script ran out of answers at {prompt:?}"))
    }

    fn printed(&self, line: &str) -> bool {
        self.output.iter().any(|l| l == line)
    }

    fn count(&self, line: &str) -> usize {
        self.output.iter().filter(|l| *l == line).count()
    }
}

impl Terminal for ScriptedTerminal {
    fn info(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn error(&mut self, text: &str) {
        self.output.push(text.to_string());
        self.errors.push(text.to_string());
    }

    fn text(&mut self, prompt: &str) -> Result<String> {
        self.next(prompt)
    }

    fn number(&mut self, prompt: &str) -> Result<u64> {
        let answer = self.next(prompt)?;
        Ok(answer.trim().parse()?)
    }

    fn password(&mut self, prompt: &str) -> Result<String> {
        self.next(prompt)
    }

    fn busy(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }
}

fn shop(numbering: AccountNumbering) -> Shop {
    Shop::new(numbering, Catalog::builtin().expect("builtin catalog"))
}

/// Answers for "1. New Customer" with the given phone and password.
fn registration<'a>(phone: &'a str, password: &'a str) -> Vec<&'a str> {
    vec!["1", "Nour Ali", password, phone, "Alexandria", "Corniche St", "Building 7, floor 3"]
}

fn run(shop: &mut Shop, answers: &[&str]) -> ScriptedTerminal {
    let mut term = ScriptedTerminal::new(answers);
    main_menu(&mut term, shop).expect("menu run");
    assert!(term.answers.is_empty(), "unused answers: {:?}", term.answers);
    term
}

#[test]
fn register_then_login_reaches_session_menu() {
    let mut shop = shop(AccountNumbering::Phone);
    let mut answers = registration("5551234", "s3cret");
    answers.extend(["5551234", "s3cret", "4"]);

    let term = run(&mut shop, &answers);
    assert!(term.printed("Your account has been created successfully!"));
    assert!(term.printed("Login successful!"));
    assert!(term.printed("1. Order Medicine"));
    assert!(term.printed("Logging out..."));
    assert!(term.errors.is_empty());
}

#[test]
fn unknown_account_reprompts_until_found() {
    let mut shop = shop(AccountNumbering::Phone);
    let mut answers = registration("100", "pw");
    answers.extend(["999", "998", "100", "pw", "4"]);

    let term = run(&mut shop, &answers);
    assert_eq!(term.count("Account not found. Please try again."), 2);
    assert!(term.printed("Login successful!"));
}

#[test]
fn wrong_password_reprompts_from_phone_number() {
    let mut shop = shop(AccountNumbering::Phone);
    let mut answers = registration("100", "pw");
    answers.extend(["100", "wrong", "100", "also-wrong", "100", "pw", "4"]);

    let term = run(&mut shop, &answers);
    assert_eq!(term.count("Incorrect password. Please try again."), 2);
    assert!(term.printed("Login successful!"));
}

#[test]
fn order_known_and_unknown_medicine() {
    let mut shop = shop(AccountNumbering::Phone);
    let mut answers = registration("100", "pw");
    answers.extend(["100", "pw", "1", "panadol", "1", "aspirin", "2", "4"]);

    let term = run(&mut shop, &answers);
    assert_eq!(term.count("Added to your cart."), 1);
    assert!(term.printed("The item you want is not available."));
    assert!(term.printed("- panadol ($5.99)"));
    assert_eq!(shop.cart(AccountNumber::new(100)).len(), 1);
}

#[test]
fn checkout_prints_total_and_empties_cart() {
    let mut shop = shop(AccountNumbering::Phone);
    let mut answers = registration("100", "pw");
    answers.extend([
        "100", "pw", // login
        "2",  // empty cart
        "1", "panadol", "1", "voltaren", // two orders
        "3",  // checkout
        "2",  // view again
        "4",
    ]);

    let term = run(&mut shop, &answers);
    assert_eq!(term.count("Your cart is empty."), 2);
    assert!(term.printed("Your Cart:"));
    assert!(term.printed("- voltaren ($8.50)"));
    assert!(term.printed("Total Price: $14.49"));
    assert!(shop.cart(AccountNumber::new(100)).is_empty());
}

#[test]
fn checkout_of_empty_cart_is_an_error() {
    let mut shop = shop(AccountNumbering::Phone);
    let mut answers = registration("100", "pw");
    answers.extend(["100", "pw", "3", "4"]);

    let term = run(&mut shop, &answers);
    assert_eq!(term.errors, ["Your cart is empty."]);
    assert!(!term.output.iter().any(|l| l.starts_with("Total Price")));
}

#[test]
fn invalid_session_choice_redisplays_menu() {
    let mut shop = shop(AccountNumbering::Phone);
    let mut answers = registration("100", "pw");
    answers.extend(["100", "pw", "9", "x", "4"]);

    let term = run(&mut shop, &answers);
    assert_eq!(term.count("Invalid choice. Please try again."), 2);
    assert_eq!(term.count("4. Logout"), 3);
}

#[test]
fn invalid_top_choice_ends_the_run() {
    let mut shop = shop(AccountNumbering::Phone);
    let term = run(&mut shop, &["3"]);
    assert_eq!(term.errors, ["Invalid choice."]);
    assert!(!term.printed("1. Order Medicine"));
}

#[test]
fn carts_are_not_shared_between_accounts() {
    let mut shop = shop(AccountNumbering::Phone);

    let mut first = registration("100", "pw-a");
    first.extend(["100", "pw-a", "1", "omega3", "4"]);
    run(&mut shop, &first);

    let mut second = registration("200", "pw-b");
    second.extend(["200", "pw-b", "2", "4"]);
    let term = run(&mut shop, &second);

    assert!(term.printed("Your cart is empty."));
    assert_eq!(shop.cart(AccountNumber::new(100)).len(), 1);
}

#[test]
fn existing_customer_logs_in_on_a_later_visit() {
    let mut shop = shop(AccountNumbering::Phone);
    let mut first = registration("100", "pw");
    first.extend(["100", "pw", "1", "catafast", "4"]);
    run(&mut shop, &first);

    let term = run(&mut shop, &["2", "100", "pw", "2", "4"]);
    assert!(term.printed("- catafast ($6.75)"));
}

#[test]
fn sequential_numbering_shows_and_uses_account_number() {
    let mut shop = shop(AccountNumbering::Sequential);
    let mut answers = registration("5551234", "pw");
    answers.extend(["5551234", "1000", "pw", "4"]);

    let term = run(&mut shop, &answers);
    assert!(term.printed("Your account number is 1000."));
    assert_eq!(term.count("Account not found. Please try again."), 1);
    assert!(term.printed("Login successful!"));
}

#[test]
fn running_out_of_input_is_an_error() {
    let mut shop = shop(AccountNumbering::Phone);
    let mut term = ScriptedTerminal::new(&["2", "100"]);
    assert!(main_menu(&mut term, &mut shop).is_err());
}
