/// Core error type for the gantry system.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("tool already registered: {0}")]
    DuplicateTool(String),
}
