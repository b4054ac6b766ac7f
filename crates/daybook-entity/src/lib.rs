pub mod goal;
pub mod journal_entry;
pub mod todo;
pub mod user;
