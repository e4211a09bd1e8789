use serde::Serialize;

/// Why a lookup degraded to a neighbouring entry instead of the one requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    UnknownModel,
    ExtendedUnavailable,
    MissingFinancing,
}

impl FallbackReason {
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnknownModel => "unknown model, showing default model",
            Self::ExtendedUnavailable => "extended variant unavailable, showing regular",
            Self::MissingFinancing => "no financing terms, showing default model",
        }
    }
}

/// Outcome of a fallback chain. Callers must branch on whether the value is
/// the one they asked for.
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub enum Resolved<T> {
    Exact(T),
    Fallback { value: T, reason: FallbackReason },
}

impl<T> Resolved<T> {
    pub fn value(&self) -> &T {
        match self {
            Resolved::Exact(value) | Resolved::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Resolved::Exact(value) | Resolved::Fallback { value, .. } => value,
        }
    }

    pub fn reason(&self) -> Option<FallbackReason> {
        match self {
            Resolved::Exact(_) => None,
            Resolved::Fallback { reason, .. } => Some(*reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolved::Fallback { .. })
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        match self {
            Resolved::Exact(value) => Resolved::Exact(f(value)),
            Resolved::Fallback { value, reason } => Resolved::Fallback {
                value: f(value),
                reason,
            },
        }
    }

    /// Keeps the earliest fallback reason when chaining another step.
    pub(crate) fn degrade(self, reason: FallbackReason) -> Resolved<T> {
        match self {
            Resolved::Exact(value) => Resolved::Fallback { value, reason },
            fallback => fallback,
        }
    }
}
