//! Domain types for both tools: the site-data document and the accounts,
//! payments and routing state of the payment router.

pub mod account;
pub mod document;
pub mod payment;
pub mod ports;
pub mod router;
