/// Crate-wide Result with `anyhow::Error`, so adapters can attach
/// context to collaborator failures without widening every signature.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
