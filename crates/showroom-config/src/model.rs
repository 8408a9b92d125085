use serde::{Deserialize, Serialize};
use showroom_domain::AmountPolicy;
use std::path::PathBuf;

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    /// Overrides the currency's minor units when rendering amounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_precision: Option<u8>,
    #[serde(default)]
    pub amount_policy: AmountPolicy,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Dataset used when a command is not given `--data`.
    pub default_dataset: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-IN".into(),
            currency: "INR".into(),
            currency_precision: None,
            amount_policy: AmountPolicy::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            default_dataset: None,
        }
    }
}

impl Config {
    pub fn default_ui_color_enabled() -> bool {
        true
    }
}
