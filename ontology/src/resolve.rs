//! Name resolution: mapping a user-supplied name to an ontology entity.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;
use crate::model::Entity;

/// How a query string is matched against entity IRIs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// First entity whose IRI ends with the query. An entity whose local
    /// name equals the query wins over earlier suffix matches.
    #[default]
    Suffix,
    /// The local name or the full IRI must equal the query.
    Exact,
}

impl Resolution {
    /// Returns the configuration name of this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Resolution::Suffix => "suffix",
            Resolution::Exact => "exact",
        }
    }

    /// Resolves `query` against `candidates`. Empty queries never resolve.
    #[must_use]
    pub fn resolve<'a>(self, candidates: &'a [Entity], query: &str) -> Option<&'a Entity> {
        if query.is_empty() {
            return None;
        }
        let exact = candidates
            .iter()
            .find(|entity| entity.name == query || entity.iri == query);
        if exact.is_some() || self == Resolution::Exact {
            return exact;
        }

        let mut matches = candidates
            .iter()
            .filter(|entity| entity.iri.ends_with(query));
        let first = matches.next()?;
        let others = matches.count();
        if others > 0 {
            tracing::warn!(
                query,
                chosen = %first.iri,
                others,
                "ambiguous suffix match; using the first"
            );
        }
        Some(first)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "suffix" => Ok(Resolution::Suffix),
            "exact" => Ok(Resolution::Exact),
            _ => Err(Error::UnsupportedResolution(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(names: &[&str]) -> Vec<Entity> {
        names
            .iter()
            .map(|n| Entity::from_iri(format!("http://example.org/geometry#{n}")))
            .collect()
    }

    #[test]
    fn exact_name_beats_earlier_suffix() {
        let all = entities(&["EquilateralTriangle", "IsoscelesTriangle", "Triangle"]);
        let hit = Resolution::Suffix.resolve(&all, "Triangle");
        assert_eq!(hit.map(|e| e.name.as_str()), Some("Triangle"));
    }

    #[test]
    fn suffix_takes_first_match() {
        let all = entities(&["EquilateralTriangle", "IsoscelesTriangle"]);
        let hit = Resolution::Suffix.resolve(&all, "Triangle");
        assert_eq!(hit.map(|e| e.name.as_str()), Some("EquilateralTriangle"));
    }

    #[test]
    fn exact_mode_rejects_partial_names() {
        let all = entities(&["EquilateralTriangle"]);
        assert!(Resolution::Exact.resolve(&all, "Triangle").is_none());
        assert!(Resolution::Exact
            .resolve(&all, "http://example.org/geometry#EquilateralTriangle")
            .is_some());
    }

    #[test]
    fn empty_query_never_resolves() {
        let all = entities(&["Circle"]);
        assert!(Resolution::Suffix.resolve(&all, "").is_none());
    }

    #[test]
    fn parses_mode_names_case_insensitively() {
        assert!(matches!("exact".parse::<Resolution>(), Ok(Resolution::Exact)));
        assert!(matches!(" Suffix ".parse::<Resolution>(), Ok(Resolution::Suffix)));
        assert!(matches!(
            "fuzzy".parse::<Resolution>(),
            Err(Error::UnsupportedResolution(name)) if name == "fuzzy"
        ));
    }
}
