//! Conversions between `daybook-entity` rows and `daybook-model` DTOs.
//!
//! Implement [`FromDbModel`] for a DTO built from a row and [`FromModel`] for an active model built from
//! validated input; the `Into*` counterparts follow from the blanket impls.

pub mod goal;
pub mod journal;
pub mod todo;
pub mod user;

pub trait IntoDbModel<T>: Sized {
    fn into_db_model(self) -> T;
}

pub trait FromDbModel<T>: Sized {
    fn from_db_model(model: T) -> Self;
}

pub trait IntoModel<T>: Sized {
    fn into_model(self) -> T;
}

pub trait FromModel<T>: Sized {
    fn from_model(model: T) -> Self;
}

/// Converts every row of a query result, keeping the order.
pub trait IntoModels<T>: Sized {
    fn into_models(self) -> Vec<T>;
}

impl<T, U> IntoModel<U> for T
where
    U: FromDbModel<T>,
{
    fn into_model(self) -> U {
        U::from_db_model(self)
    }
}

impl<T, U> IntoDbModel<U> for T
where
    U: FromModel<T>,
{
    fn into_db_model(self) -> U {
        U::from_model(self)
    }
}

impl<T, U> IntoModels<U> for Vec<T>
where
    U: FromDbModel<T>,
{
    fn into_models(self) -> Vec<U> {
        self.into_iter().map(U::from_db_model).collect()
    }
}
