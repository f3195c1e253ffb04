//! Assistant configuration: persona instructions, credential sourcing, and
//! sampling parameters.

use indoc::indoc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// Default system instructions, an IT-administration specialist persona.
pub const DEFAULT_INSTRUCTIONS: &str = indoc! {"
    You are an IT administration expert specializing in PowerShell scripting,
    batch scripting, SCCM (Microsoft Configuration Manager), Group Policy
    Objects (GPO), Active Directory, and endpoint management tools. When
    providing scripts or code, format each one as a distinct markdown code
    block with a language tag, so it can be displayed and copied as a
    separate artifact. Focus on practical, secure, and efficient solutions
    for enterprise IT environments.
"};

/// Default model to query.
const DEFAULT_MODEL: &str = "claude-3-7-sonnet-20250219";

/// Environment variable holding the API key, unless configured otherwise.
const DEFAULT_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Assistant-specific configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssistantConfig {
    /// The system instructions sent with every completion request.
    pub instructions: String,

    /// Name of the environment variable that contains the API key.
    ///
    /// The key itself is never part of the configuration, it only ever lives
    /// in session memory.
    pub api_key_env: String,

    /// Sampling parameters for completion requests.
    pub parameters: ParametersConfig,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            instructions: DEFAULT_INSTRUCTIONS.to_owned(),
            api_key_env: DEFAULT_API_KEY_ENV.to_owned(),
            parameters: ParametersConfig::default(),
        }
    }
}

/// Model choice and sampling parameters for a completion request.
///
/// A session owns one instance, replaced wholesale on reconfiguration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParametersConfig {
    /// The model to query.
    pub model: String,

    /// Sampling temperature, in `[0, 1]`.
    pub temperature: f32,

    /// Maximum number of tokens to generate, in `[1, 4096]`.
    pub max_tokens: u32,

    /// Nucleus sampling threshold, in `[0, 1]`.
    pub top_p: f32,

    /// Whether to request the model's extended thinking mode.
    pub extended_thinking: bool,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_owned(),
            temperature: 0.7,
            max_tokens: 4096,
            top_p: 0.7,
            extended_thinking: false,
        }
    }
}

impl ParametersConfig {
    /// Assign a single parameter by key, clamping out-of-range values to
    /// their documented bounds.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "model" => self.model = value.to_owned(),
            "temperature" => self.temperature = clamp(key, parse_f32(key, value)?, 0.0, 1.0),
            "top_p" => self.top_p = clamp(key, parse_f32(key, value)?, 0.0, 1.0),
            "max_tokens" => self.max_tokens = clamp(key, parse(key, value)?, 1, 4096),
            "extended_thinking" => self.extended_thinking = parse(key, value)?,
            _ => return Err(Error::UnknownKey(key.to_owned())),
        }

        Ok(())
    }

    /// Clamp deserialized values to their documented bounds.
    ///
    /// Serde fills the fields verbatim, so values from a configuration file
    /// go through the same range clamps as `set` assignments. Non-finite
    /// floats are rejected.
    pub(crate) fn validate(&mut self) -> Result<()> {
        for (key, value) in [
            ("temperature", &mut self.temperature),
            ("top_p", &mut self.top_p),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidValue {
                    key: key.to_owned(),
                    value: value.to_string(),
                });
            }

            *value = clamp(key, *value, 0.0, 1.0);
        }

        self.max_tokens = clamp("max_tokens", self.max_tokens, 1, 4096);
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| Error::InvalidValue {
        key: key.to_owned(),
        value: value.to_owned(),
    })
}

/// NaN and the infinities parse as valid `f32`s but make no sense as
/// sampling parameters, and NaN would also slip through the clamp.
fn parse_f32(key: &str, value: &str) -> Result<f32> {
    let parsed: f32 = parse(key, value)?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(Error::InvalidValue {
            key: key.to_owned(),
            value: value.to_owned(),
        })
    }
}

fn clamp<T: PartialOrd + Copy + std::fmt::Display>(key: &str, value: T, min: T, max: T) -> T {
    let clamped = if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    };

    if clamped != value {
        warn!(key, %value, "Value out of range, clamped to {clamped}.");
    }

    clamped
}

#[cfg(test)]
#[path = "assistant_tests.rs"]
mod tests;
