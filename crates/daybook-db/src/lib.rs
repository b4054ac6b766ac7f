pub mod goal;
pub mod journal_entry;
pub mod todo;
pub mod user;
pub mod util;

pub use sea_orm;
