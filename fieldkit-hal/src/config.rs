use crate::error::{FieldError, FieldResult};

/// Default working-memory budget of a field instance (32 MiB).
pub const DEFAULT_INITIAL_MEMORY: usize = 32 << 20;

/// Smallest accepted working-memory budget (one 64 KiB page).
pub const MIN_INITIAL_MEMORY: usize = 64 << 10;

/// Largest accepted working-memory budget (4 GiB).
pub const MAX_INITIAL_MEMORY: usize = 4 << 30;

/// Which implementation backs a field instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Fixed-width backend when the modulus fits, reference backend otherwise.
    #[default]
    Auto,
    /// Arbitrary-precision reference backend.
    Reference,
    /// Fixed-width backend; moduli it cannot represent are rejected.
    Optimized,
}

/// Construction options for a field instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    pub backend: BackendKind,
    /// Working-memory budget in bytes. Scratch requests above the budget are
    /// still served, but logged.
    pub initial_memory: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Auto,
            initial_memory: DEFAULT_INITIAL_MEMORY,
        }
    }
}

impl FieldConfig {
    pub fn reference() -> Self {
        Self::default().with_backend(BackendKind::Reference)
    }

    pub fn optimized() -> Self {
        Self::default().with_backend(BackendKind::Optimized)
    }

    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_initial_memory(mut self, bytes: usize) -> Self {
        self.initial_memory = bytes;
        self
    }

    pub fn validate(&self) -> FieldResult<()> {
        if !(MIN_INITIAL_MEMORY..=MAX_INITIAL_MEMORY).contains(&self.initial_memory) {
            tracing::warn!(initial_memory = self.initial_memory, "rejected field configuration");
            return Err(FieldError::InvalidConfig(format!(
                "initial_memory must be within [{MIN_INITIAL_MEMORY}, {MAX_INITIAL_MEMORY}] bytes, got {}",
                self.initial_memory
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config: FieldConfig = FieldConfig::default();
        assert_eq!(config.backend, BackendKind::Auto);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn memory_budget_bounds() {
        assert!(matches!(
            FieldConfig::default().with_initial_memory(1024).validate(),
            Err(FieldError::InvalidConfig(_))
        ));
        assert!(FieldConfig::optimized().with_initial_memory(MIN_INITIAL_MEMORY).validate().is_ok());
    }
}
