pub mod goal;
pub mod journal;
pub mod login;
pub mod todo;
pub mod user;
pub mod validation;
