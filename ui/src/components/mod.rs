pub mod summary_card;
pub mod toast;
pub mod transaction_list;

pub use summary_card::SummaryCard;
pub use toast::ToastContainer;
pub use transaction_list::TransactionList;
