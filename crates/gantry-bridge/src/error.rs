/// Errors that are terminal for a bridge turn. Tool-level failures are
/// not here: they are captured as conversation text so the model can
/// react to them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("chat completion request failed: {0}")]
    Chat(#[from] reqwest::Error),

    #[error("chat completion response contained no choices")]
    NoChoices,

    #[error("tool discovery failed: {0}")]
    ToolDiscovery(String),
}
