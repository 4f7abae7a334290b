use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Solution method served by one of the problem pages
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    /// Plain simplex, all constraints `<=`
    Simplex,
    /// Big-M penalty method
    #[cfg_attr(feature = "serde", serde(rename = "granm"))]
    BigM,
    /// Two-phase method
    #[cfg_attr(feature = "serde", serde(rename = "dosfases"))]
    TwoPhase,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown method: {0}")]
pub struct UnknownMethod(pub String);

impl Method {
    pub const ALL: [Method; 3] = [Method::Simplex, Method::BigM, Method::TwoPhase];

    /// Identifier used in page paths and storage keys
    pub fn id(self) -> &'static str {
        match self {
            Method::Simplex => "simplex",
            Method::BigM => "granm",
            Method::TwoPhase => "dosfases",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Method::Simplex => "Simplex",
            Method::BigM => "Big-M",
            Method::TwoPhase => "Two-Phase",
        }
    }

    /// Whether the page for this method carries a penalty (`M`) field
    pub fn uses_penalty(self) -> bool {
        matches!(self, Method::BigM)
    }

    /// Detect the method from a page path such as `/granm` or `/resolver/simplex`.
    ///
    /// Identifiers are tried in a fixed order and matched as substrings.
    pub fn detect(path: &str) -> Option<Method> {
        Method::ALL.into_iter().find(|m| path.contains(m.id()))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.id() == s.trim())
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_from_path() {
        assert_eq!(Method::detect("/simplex"), Some(Method::Simplex));
        assert_eq!(Method::detect("/granm"), Some(Method::BigM));
        assert_eq!(Method::detect("/resolver/dosfases"), Some(Method::TwoPhase));
        assert_eq!(Method::detect("/"), None);
        assert_eq!(Method::detect("/about"), None);
    }

    #[test]
    fn test_parse_identifier() {
        assert_eq!("granm".parse::<Method>(), Ok(Method::BigM));
        assert_eq!(" simplex ".parse::<Method>(), Ok(Method::Simplex));
        assert_eq!(
            "bigm".parse::<Method>(),
            Err(UnknownMethod("bigm".to_string()))
        );
    }

    #[test]
    fn test_only_big_m_uses_penalty() {
        assert!(Method::BigM.uses_penalty());
        assert!(!Method::Simplex.uses_penalty());
        assert!(!Method::TwoPhase.uses_penalty());
    }
}
