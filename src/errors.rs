use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("User not found.")]
    NotFound,
    #[error(transparent)]
    Store(#[from] DbErr),
}

pub type UserResult<T> = Result<T, UserError>;

/// Turns a store lookup that may miss into a `NotFound` error.
pub trait OrNotFound<T> {
    fn or_not_found(self) -> UserResult<T>;
}

impl<T> OrNotFound<T> for Result<Option<T>, DbErr> {
    fn or_not_found(self) -> UserResult<T> {
        self?.ok_or(UserError::NotFound)
    }
}

impl OrNotFound<()> for Result<bool, DbErr> {
    fn or_not_found(self) -> UserResult<()> {
        if self? {
            Ok(())
        } else {
            Err(UserError::NotFound)
        }
    }
}
