//! The language-model side of punbot.
//!
//! A [`PunBot`] turns a topic into a single structured [`Pun`]. The HTTP
//! client lives behind the `llm` feature; without it [`from_config`] has
//! nothing to offer and callers report the bot as unavailable.

#[cfg(feature = "llm")]
pub mod openai;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::PunbotConfig;
use crate::error::Result;

/// Shown when generated puns are asked for but no client was compiled in
pub const INSTALL_GUIDANCE: &str = "punbot was built without LLM support, which is required for LLM-generated puns. \
     Reinstall it with: cargo install punbot --features llm";

/// A pun produced by a language model
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Pun {
    /// Single emoji setting the mood of the pun
    #[serde(default)]
    pub emoji: String,
    /// The pun itself, pun core in italics
    pub pun_statement: String,
    /// Why the pun is a pun
    #[serde(default)]
    pub explanation: String,
}

impl fmt::Display for Pun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.emoji.is_empty() {
            write!(f, "{}", self.pun_statement)
        } else {
            write!(f, "{} {}", self.emoji, self.pun_statement)
        }
    }
}

/// Anything that can come up with a pun on a topic
pub trait PunBot {
    fn pun(&self, topic: &str) -> Result<Pun>;
}

/// Build the configured bot.
///
/// `Ok(None)` means this build has no LLM client at all; an `Err` means the
/// client exists but could not be set up.
#[cfg(feature = "llm")]
pub fn from_config(config: &PunbotConfig) -> Result<Option<Box<dyn PunBot>>> {
    let bot: Box<dyn PunBot> = Box::new(openai::OpenAiPunBot::new(config)?);
    Ok(Some(bot))
}

#[cfg(not(feature = "llm"))]
pub fn from_config(_config: &PunbotConfig) -> Result<Option<Box<dyn PunBot>>> {
    tracing::debug!("built without the llm feature");
    Ok(None)
}
