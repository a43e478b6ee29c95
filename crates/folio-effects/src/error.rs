//! Construction errors for the effect engines.

/// Misconfiguration detected while building an effect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EffectError {
    /// The typewriter was given no phrases to cycle through.
    #[error("typewriter needs at least one phrase")]
    EmptyPhrases,
    /// The typewriter typing interval was zero.
    #[error("typewriter typing interval must be greater than zero")]
    ZeroInterval,
}
