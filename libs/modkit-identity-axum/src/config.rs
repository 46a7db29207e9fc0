use modkit_identity::ANONYMOUS_PRINCIPAL;
use serde::{Deserialize, Serialize};

fn default_anonymous_principal() -> String {
    ANONYMOUS_PRINCIPAL.to_owned()
}

/// What to do with a request that reaches the identity layer without a
/// `SecurityContext` in its extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingContextMode {
    /// Insert an anonymous context.
    #[default]
    Anonymous,
    /// Insert a context with no authentication.
    Empty,
    /// Reply `401 Unauthorized` without calling the handler.
    Reject,
}

/// Identity layer configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentityLayerConfig {
    /// Behaviour for requests without a context.
    pub missing_context: MissingContextMode,

    /// Principal id used for contexts synthesized in `anonymous` mode.
    pub anonymous_principal: String,
}

impl Default for IdentityLayerConfig {
    fn default() -> Self {
        Self {
            missing_context: MissingContextMode::default(),
            anonymous_principal: default_anonymous_principal(),
        }
    }
}
