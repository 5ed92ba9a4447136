//! Per-run generation configuration.
//!
//! Threaded as an explicit parameter through every stage — never ambient
//! state — so two runs with the same inputs and config are reproducible.

use crate::InvocationKind;

/// Global configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Extra header lines (e.g. a license header) emitted at the top of
    /// every generated file, after the generated-code marker.
    pub custom_file_header: Option<String>,
    /// Which invocation styles to emit for every operation.
    pub invocation_kinds: Vec<InvocationKind>,
    /// Embed validation code derived from advisory field constraints.
    pub add_validation_code: bool,
    /// Target/module name of the generated model package, imported by the
    /// client package. Defaults to `<Base>Model`.
    pub model_target_name: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            custom_file_header: None,
            invocation_kinds: vec![InvocationKind::Callback, InvocationKind::Async],
            add_validation_code: true,
            model_target_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_emits_both_invocation_kinds() {
        let config = GenerationConfig::default();
        assert_eq!(
            config.invocation_kinds,
            vec![InvocationKind::Callback, InvocationKind::Async]
        );
        assert!(config.add_validation_code);
    }
}
