pub mod use_transactions;

pub use use_transactions::use_transactions;
