use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("At least one region must be selected")]
    EmptySelection,

    #[error("Export failed: {0}")]
    Render(String),
}
