// Library surface for the CLI and integration tests.
pub mod bot;
pub mod celebration;
pub mod config;
pub mod error;
pub mod logger;
pub mod pun_selector;
pub mod puns;

pub use bot::{Pun, PunBot};
pub use config::PunbotConfig;
pub use error::{PunError, Result};
pub use pun_selector::{Count, Generation, GenerationMode, Notice, PunOutput, PunSelector};
pub use puns::{PunRecord, PunSource};
