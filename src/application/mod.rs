//! Application layer orchestrating the payment router.
//!
//! `PaymentRouter` owns the routing state and the key-store, and is the entry
//! point the `payments` binary drives.

pub mod router;
