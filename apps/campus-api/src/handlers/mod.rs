//! HTTP request handlers

pub mod course;
pub mod enrollment;
pub mod student;

use crate::error::ApiError;

pub type ApiResult<T> = Result<T, ApiError>;

fn to_responses<'a, E, R>(items: &'a [E]) -> Vec<R>
where
    R: From<&'a E>,
{
    items.iter().map(R::from).collect()
}
