use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::{
    bot::{self, Pun, PunBot, INSTALL_GUIDANCE},
    celebration,
    config::PunbotConfig,
    puns::{sample_with_replacement, PunSource},
};

/// How many puns were asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    Finite(usize),
    /// Party mode
    Unbounded,
}

impl FromStr for Count {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "inf" | "infinity" | "unbounded" | "party" | "∞" => Ok(Count::Unbounded),
            other => other
                .parse::<usize>()
                .map(Count::Finite)
                .map_err(|_| format!("expected a non-negative number or `inf`, got `{s}`")),
        }
    }
}

impl From<usize> for Count {
    fn from(n: usize) -> Self {
        Count::Finite(n)
    }
}

/// Where puns come from for this selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum GenerationMode {
    Curated,
    External,
}

/// One generated item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PunOutput {
    /// `@attribution: content`
    Curated(String),
    /// A line of party symbols
    Party(String),
    Generated(Pun),
}

impl fmt::Display for PunOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PunOutput::Curated(s) | PunOutput::Party(s) => write!(f, "{s}"),
            PunOutput::Generated(pun) => write!(f, "{pun}"),
        }
    }
}

/// Something the user should hear about that is not a pun
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NoPunsFound,
    BotUnavailable,
    BotFailed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoPunsFound => write!(
                f,
                "No puns found in puns.json. Consider adding some community-curated puns!"
            ),
            Notice::BotUnavailable => write!(f, "{INSTALL_GUIDANCE}"),
            Notice::BotFailed(reason) => write!(f, "The pun bot gave up: {reason}"),
        }
    }
}

/// Result of one request; never persisted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    pub puns: Vec<PunOutput>,
    pub notices: Vec<Notice>,
}

impl Generation {
    fn notice(notice: Notice) -> Self {
        Self {
            puns: Vec::new(),
            notices: vec![notice],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.puns.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        self.puns.iter().map(|p| p.to_string()).collect()
    }
}

// What became of the bot when the selector was built
enum BotSlot {
    Ready(Box<dyn PunBot>),
    /// No client in this build
    Missing,
    /// The client exists but could not be set up
    Broken(String),
}

/// Picks puns from the curated list, a language model, or throws a party
pub struct PunSelector {
    mode: GenerationMode,
    source: PunSource,
    bot: BotSlot,
    rng: StdRng,
}

impl PunSelector {
    pub fn new(config: &PunbotConfig, source: PunSource) -> Self {
        let mode = if config.wants_llm() {
            GenerationMode::External
        } else {
            GenerationMode::Curated
        };
        let bot = match mode {
            GenerationMode::External => match bot::from_config(config) {
                Ok(Some(bot)) => BotSlot::Ready(bot),
                Ok(None) => BotSlot::Missing,
                Err(e) => {
                    tracing::error!("could not build LLM client: {}", e);
                    BotSlot::Broken(e.to_string())
                }
            },
            GenerationMode::Curated => BotSlot::Missing,
        };
        tracing::debug!("pun selector in {} mode", mode);

        Self {
            mode,
            source,
            bot,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace whatever bot the config produced
    pub fn with_bot(mut self, bot: Option<Box<dyn PunBot>>) -> Self {
        self.bot = match bot {
            Some(bot) => BotSlot::Ready(bot),
            None => BotSlot::Missing,
        };
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    /// Produce puns as data, without printing anything
    pub fn generate(&mut self, count: Count, topic: Option<&str>) -> Generation {
        match (count, self.mode) {
            (Count::Unbounded, _) => Generation {
                puns: celebration::party(&mut self.rng)
                    .into_iter()
                    .map(PunOutput::Party)
                    .collect(),
                notices: Vec::new(),
            },
            (Count::Finite(n), GenerationMode::Curated) => self.curated(n),
            (Count::Finite(n), GenerationMode::External) => self.external(n, topic.unwrap_or("")),
        }
    }

    /// Produce puns and write them out, one per line.
    ///
    /// Each curated pun is preceded by a blank line; notices follow the puns.
    pub fn create_puns<W: Write>(
        &mut self,
        count: Count,
        topic: Option<&str>,
        out: &mut W,
    ) -> io::Result<()> {
        let generation = self.generate(count, topic);
        for pun in &generation.puns {
            if let PunOutput::Curated(_) = pun {
                writeln!(out)?;
            }
            writeln!(out, "{pun}")?;
        }
        for notice in &generation.notices {
            writeln!(out, "{notice}")?;
        }
        out.flush()
    }

    fn curated(&mut self, count: usize) -> Generation {
        let records = self.source.load();
        if records.is_empty() {
            tracing::warn!("no curated puns available from {:?}", self.source);
            return Generation::notice(Notice::NoPunsFound);
        }

        let puns = sample_with_replacement(&records, count, &mut self.rng)
            .into_iter()
            .map(|record| PunOutput::Curated(record.to_string()))
            .collect();
        Generation {
            puns,
            notices: Vec::new(),
        }
    }

    fn external(&mut self, count: usize, topic: &str) -> Generation {
        let bot = match &self.bot {
            BotSlot::Ready(bot) => bot,
            BotSlot::Missing => {
                tracing::warn!("generated puns requested but no bot is available");
                return Generation::notice(Notice::BotUnavailable);
            }
            BotSlot::Broken(reason) => {
                return Generation::notice(Notice::BotFailed(reason.clone()));
            }
        };

        let mut generation = Generation::default();
        for i in 0..count {
            match bot.pun(topic) {
                Ok(pun) => {
                    tracing::debug!("pun {} explained: {}", i + 1, pun.explanation);
                    generation.puns.push(PunOutput::Generated(pun));
                }
                Err(e) => {
                    tracing::error!("pun bot failed on pun {} of {}: {}", i + 1, count, e);
                    generation.notices.push(Notice::BotFailed(e.to_string()));
                    break;
                }
            }
        }
        generation
    }
}
