pub use card_transactions::CardTransaction;
pub use cards::{CardType, DebitCard};
pub use currency::Currency;
pub use error::EngineError;
pub use loans::{Loan, LoanStatus};
pub use ops::{Engine, EngineBuilder};

mod card_transactions;
mod cards;
mod currency;
mod error;
mod loans;
mod ops;

type ResultEngine<T> = Result<T, EngineError>;
