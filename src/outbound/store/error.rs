use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("the resource could not be found")]
    NotFound,

    #[error("the resource already exists")]
    OnConflict,

    #[error("store lock poisoned")]
    LockPoisoned,
}
