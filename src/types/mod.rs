//! Shared data shapes for the classic SES API.
//!
//! These are the records nested inside requests and results: receipt rules
//! and their actions, bounce and DSN fields, identity attributes,
//! configuration set settings, and message content. Request and result types
//! themselves live in [`operations`](crate::operations).

mod bounce;
mod configuration;
mod email;
mod enums;
mod identity;
mod receipt;

pub use bounce::*;
pub use configuration::*;
pub use email::*;
pub use enums::*;
pub use identity::*;
pub use receipt::*;
