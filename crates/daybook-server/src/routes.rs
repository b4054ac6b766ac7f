pub(crate) mod api;
pub(crate) mod error;
pub(crate) mod extract;
pub(crate) mod global;
pub(crate) mod openapi;
