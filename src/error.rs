use sea_orm::DbErr;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("partner not found")]
  PartnerNotFound,
  #[error("limit not found")]
  LimitNotFound,
  #[error("partner not active")]
  PartnerInactive,
  #[error("{0}")]
  InvalidArgs(String),
  #[error("database: {0}")]
  Database(#[from] DbErr),
}

/// Coarse classification the transport layer maps to responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  NotFound,
  InvalidState,
  InvalidArgument,
  Internal,
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Error::PartnerNotFound | Error::LimitNotFound => ErrorKind::NotFound,
      Error::PartnerInactive => ErrorKind::InvalidState,
      Error::InvalidArgs(_) => ErrorKind::InvalidArgument,
      Error::Database(_) => ErrorKind::Internal,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn kinds() {
    assert_eq!(Error::PartnerNotFound.kind(), ErrorKind::NotFound);
    assert_eq!(Error::LimitNotFound.kind(), ErrorKind::NotFound);
    assert_eq!(Error::PartnerInactive.kind(), ErrorKind::InvalidState);
    assert_eq!(
      Error::InvalidArgs("limit must be greater than 0".into()).kind(),
      ErrorKind::InvalidArgument
    );
    assert_eq!(
      Error::Database(DbErr::Custom("boom".into())).kind(),
      ErrorKind::Internal
    );
  }
}
