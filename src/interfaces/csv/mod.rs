pub mod account_writer;
pub mod payment_reader;
