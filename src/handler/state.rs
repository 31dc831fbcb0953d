//! Per-derivation snapshot of the group path and pre-rendered attributes.

/// Both fields are already styled text. A derivation builds a new state and
/// never touches the one it came from, so siblings forked from a common
/// ancestor can't see each other's attachments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerState {
    group_prefix: String,
    preformatted: String,
}

impl HandlerState {
    /// Concatenated `name.` segments of every group entered so far.
    #[must_use]
    pub fn group_prefix(&self) -> &str {
        &self.group_prefix
    }

    /// Attributes attached through derivation, separators included.
    #[must_use]
    pub fn preformatted(&self) -> &str {
        &self.preformatted
    }

    #[must_use]
    pub(crate) fn with_group_prefix(&self, group_prefix: String) -> Self {
        Self {
            group_prefix,
            preformatted: self.preformatted.clone(),
        }
    }

    #[must_use]
    pub(crate) fn with_preformatted(&self, preformatted: &str) -> Self {
        Self {
            group_prefix: self.group_prefix.clone(),
            preformatted: preformatted.to_string(),
        }
    }
}
