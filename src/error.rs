use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("export failed: {0}")]
    Export(String),
}
