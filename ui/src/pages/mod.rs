pub mod home;
pub mod not_found;
pub mod transactions;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use transactions::TransactionsPage;
