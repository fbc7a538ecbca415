//! Component Configuration

use serde::Deserialize;
use soda_dom::{ShadowRootInit, ShadowRootMode};

/// Options applied to every class a factory generates
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mode of shadow roots attached for `use_shadow` components
    pub shadow_mode: ShadowRootMode,

    /// `delegatesFocus` flag for attached shadow roots
    pub delegates_focus: bool,
}

impl Config {
    /// Shadow root options derived from this configuration
    pub fn shadow_init(&self) -> ShadowRootInit {
        ShadowRootInit {
            mode: self.shadow_mode,
            delegates_focus: self.delegates_focus,
        }
    }
}
