//! Configuration enums and effect size interpretation

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Strategy for handling NaN (missing) values in input arrays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NanPolicy {
    /// NaN inputs yield NaN outputs
    #[default]
    Propagate,
    /// Presence of any NaN is a usage error
    Raise,
    /// NaN entries (or pairs containing NaN) are excluded before computation
    Omit,
}

impl NanPolicy {
    /// Get the canonical string spelling of the policy
    pub fn name(&self) -> &'static str {
        match self {
            Self::Propagate => "propagate",
            Self::Raise => "raise",
            Self::Omit => "omit",
        }
    }
}

impl fmt::Display for NanPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for NanPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "propagate" => Ok(Self::Propagate),
            "raise" => Ok(Self::Raise),
            "omit" => Ok(Self::Omit),
            other => Err(Error::InvalidParameter(format!(
                "nan_policy must be 'propagate', 'raise', or 'omit', got '{other}'"
            ))),
        }
    }
}

/// Alternative hypothesis direction
///
/// Accepted and validated for interface compatibility with hypothesis-testing
/// extensions, but currently has no effect on the computed statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alternative {
    /// The effect size is non-zero
    #[default]
    TwoSided,
    /// The effect size is less than zero
    Less,
    /// The effect size is greater than zero
    Greater,
}

impl Alternative {
    /// Get the canonical string spelling of the alternative
    pub fn name(&self) -> &'static str {
        match self {
            Self::TwoSided => "two-sided",
            Self::Less => "less",
            Self::Greater => "greater",
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Alternative {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "two-sided" => Ok(Self::TwoSided),
            "less" => Ok(Self::Less),
            "greater" => Ok(Self::Greater),
            other => Err(Error::InvalidParameter(format!(
                "alternative must be 'two-sided', 'less', or 'greater', got '{other}'"
            ))),
        }
    }
}

/// Interpretation of a standardized mean difference following Cohen's conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSizeInterpretation {
    /// Negligible effect (|d| < 0.2)
    Negligible,
    /// Small effect (0.2 <= |d| < 0.5)
    Small,
    /// Medium effect (0.5 <= |d| < 0.8)
    Medium,
    /// Large effect (|d| >= 0.8)
    Large,
}

impl EffectSizeInterpretation {
    /// Interpret a Cohen's d (or Hedges' g) magnitude
    pub fn from_d(d: f64) -> Self {
        let abs_d = d.abs();
        if abs_d < 0.2 {
            Self::Negligible
        } else if abs_d < 0.5 {
            Self::Small
        } else if abs_d < 0.8 {
            Self::Medium
        } else {
            Self::Large
        }
    }
}

impl fmt::Display for EffectSizeInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        write!(f, "{}", s)
    }
}
