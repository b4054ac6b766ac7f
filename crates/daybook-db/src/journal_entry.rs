mod mutation;
mod query;

pub use mutation::Mutation;
pub use query::Query;
