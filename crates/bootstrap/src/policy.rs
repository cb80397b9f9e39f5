/// What a run does after one table's routine fails.
///
/// Applies uniformly to every table of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Policy {
    /// Log the failure and keep bootstrapping the remaining tables.
    #[default]
    Continue,
    /// Stop at the first failure; later tables are not started.
    Abort,
}

/// Unrecognized policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown bootstrap policy ({0}), expected `continue` or `abort`")]
pub struct UnknownPolicy(String);

impl std::str::FromStr for Policy {
    type Err = UnknownPolicy;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continue" => Ok(Self::Continue),
            "abort" => Ok(Self::Abort),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Continue => write!(f, "continue"),
            Self::Abort => write!(f, "abort"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("continue".parse::<Policy>(), Ok(Policy::Continue));
        assert_eq!("ABORT".parse::<Policy>(), Ok(Policy::Abort));
        assert_eq!(" Abort ".parse::<Policy>(), Ok(Policy::Abort));
    }

    #[test]
    fn rejects_unknown() {
        assert!("retry".parse::<Policy>().is_err());
        assert!("".parse::<Policy>().is_err());
    }

    #[test]
    fn display_parses_back() {
        for policy in [Policy::Continue, Policy::Abort] {
            assert_eq!(policy.to_string().parse::<Policy>(), Ok(policy));
        }
    }

    #[test]
    fn continues_by_default() {
        assert_eq!(Policy::default(), Policy::Continue);
    }
}
