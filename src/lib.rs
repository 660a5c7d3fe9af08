// Library root
// -----------
// PharmaGo is a small interactive pharmacy ordering CLI. The binary
// (`main.rs`) wires these modules together and hands control to the UI.
//
// Module responsibilities:
// - `shop`: Owns all state for a run (accounts, catalog, carts) and
//   exposes register / login / order / checkout.
// - `registry`, `auth`, `catalog`, `cart`: The pieces `shop` is built on.
// - `ui`: The numbered text menus; talks to the console only through the
//   `terminal::Terminal` trait.
// - `terminal`: The `dialoguer` + `crossterm` console implementation.
// - `config`, `error`, `models`: Settings, domain errors and data shapes.
//
// The UI never touches state directly, so the menus can be driven from a
// scripted terminal in tests.
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod shop;
pub mod terminal;
pub mod ui;

pub use error::ShopError;
