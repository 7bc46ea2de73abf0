pub mod points;
pub mod processor;
pub mod validator;

pub use crate::domain::model::{Receipt, ScoreRecord, ValidatedReceipt};
pub use crate::domain::ports::{ConfigProvider, ScoreStore};
pub use crate::utils::error::Result;
