use log::Level;

pub const DEFAULT_ADVICE_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_ADVICE_MODEL: &str = "gemini-3-flash-preview";

pub const ADVICE_TEMPERATURE: f32 = 0.7;

pub const STRATEGIST_INSTRUCTION: &str = "You are a world-class financial strategist for MTG GROUP. \
Provide professional, analytical, and concise financial advice. Focus on ROI, risk mitigation, \
and capital structure. Keep answers professional and structured.";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Baked in at build time, e.g. `GEMINI_API_KEY=... trunk build`.
pub fn get_api_key() -> Option<&'static str> {
    option_env!("GEMINI_API_KEY").filter(|key| !key.is_empty())
}

pub fn get_advice_api_url() -> &'static str {
    option_env!("ADVICE_API_URL").unwrap_or(DEFAULT_ADVICE_API_URL)
}

pub fn get_advice_model() -> &'static str {
    option_env!("ADVICE_MODEL").unwrap_or(DEFAULT_ADVICE_MODEL)
}
