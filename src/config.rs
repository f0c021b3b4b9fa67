pub const DEFAULT_MODEL_NAME: &str = "gpt-4.1";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Settings that decide whether puns come from the curated list or a model.
///
/// Read once at startup and passed to the selector; nothing reads the
/// environment after that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PunbotConfig {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub api_base: Option<String>,
}

impl PunbotConfig {
    pub fn new(
        api_key: Option<String>,
        model_name: Option<String>,
        api_base: Option<String>,
    ) -> Self {
        Self {
            api_key: non_empty(api_key),
            model_name: non_empty(model_name),
            api_base: non_empty(api_base),
        }
    }

    /// Any LLM setting present means the user asked for generated puns
    pub fn wants_llm(&self) -> bool {
        self.api_key.is_some() || self.model_name.is_some() || self.api_base.is_some()
    }

    pub fn model_name(&self) -> &str {
        self.model_name.as_deref().unwrap_or(DEFAULT_MODEL_NAME)
    }

    pub fn api_base(&self) -> &str {
        self.api_base
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
