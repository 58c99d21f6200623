use std::collections::HashSet;

use navprice_types::NavError;
use url::Url;

use crate::instrument::InstrumentDescriptor;

const VANGUARD_FUNDS_API: &str = "https://www.vanguardinvestor.co.uk/api/funds/";

/// `(id, display name, fund slug)` for the LifeStrategy range, in catalog order.
const LIFESTRATEGY_FUNDS: &[(&str, &str, &str)] = &[
    (
        "ls20",
        "LifeStrategy 20% Equity",
        "vanguard-lifestrategy-20-equity-fund-gbp-gross-accumulation-shares",
    ),
    (
        "ls40",
        "LifeStrategy 40% Equity",
        "vanguard-lifestrategy-40-equity-fund-accumulation-shares",
    ),
    (
        "ls60",
        "LifeStrategy 60% Equity",
        "vanguard-lifestrategy-60-equity-fund-accumulation-shares",
    ),
    (
        "ls80",
        "LifeStrategy 80% Equity",
        "vanguard-lifestrategy-80-equity-fund-accumulation-shares",
    ),
    (
        "ls100",
        "LifeStrategy 100% Equity",
        "vanguard-lifestrategy-100-equity-fund-accumulation-shares",
    ),
];

/// Immutable table of the funds that can be priced.
///
/// Built once at startup and passed explicitly to whoever needs to resolve
/// identifiers; there is no global catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<InstrumentDescriptor>,
}

/// Builder for a [`Catalog`] that validates ids and endpoints.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    pending: Vec<(String, String, String)>,
}

impl CatalogBuilder {
    /// Start an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fund. Entries keep their registration order.
    #[must_use]
    pub fn fund(
        mut self,
        id: impl Into<String>,
        display_name: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        self.pending
            .push((id.into(), display_name.into(), endpoint.into()));
        self
    }

    /// Build the catalog.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an empty or duplicated id, or an endpoint that
    /// is not an absolute URL.
    pub fn build(self) -> Result<Catalog, NavError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut entries = Vec::with_capacity(self.pending.len());
        for (id, name, endpoint) in self.pending {
            if id.trim().is_empty() {
                return Err(NavError::invalid_arg("fund id must not be empty"));
            }
            if !seen.insert(id.clone()) {
                return Err(NavError::invalid_arg(format!("duplicate fund id: {id}")));
            }
            let url = Url::parse(&endpoint).map_err(|e| {
                NavError::invalid_arg(format!("invalid endpoint for {id}: {endpoint} ({e})"))
            })?;
            entries.push(InstrumentDescriptor::new(id, name, url));
        }
        Ok(Catalog { entries })
    }
}

/// Result of resolving requested identifiers against a catalog.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Descriptors to fetch, in request order.
    pub worklist: Worklist,
    /// Requested identifiers that the catalog does not know, in request order.
    pub unrecognised: Vec<String>,
}

/// Ordered list of instruments to fetch in one run. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worklist(Vec<InstrumentDescriptor>);

impl Worklist {
    /// Number of fetches this worklist will fan out to.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate descriptors in worklist order.
    pub fn iter(&self) -> std::slice::Iter<'_, InstrumentDescriptor> {
        self.0.iter()
    }

    /// Borrow the descriptors as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[InstrumentDescriptor] {
        &self.0
    }
}

impl From<Vec<InstrumentDescriptor>> for Worklist {
    fn from(v: Vec<InstrumentDescriptor>) -> Self {
        Self(v)
    }
}

impl<'a> IntoIterator for &'a Worklist {
    type Item = &'a InstrumentDescriptor;
    type IntoIter = std::slice::Iter<'a, InstrumentDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Catalog {
    /// Start building a custom catalog.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// The Vanguard LifeStrategy accumulation funds priced by the CLI.
    ///
    /// # Errors
    /// Only fails if the static table itself is malformed.
    pub fn vanguard_lifestrategy() -> Result<Self, NavError> {
        LIFESTRATEGY_FUNDS
            .iter()
            .fold(Self::builder(), |b, (id, name, slug)| {
                b.fund(*id, *name, format!("{VANGUARD_FUNDS_API}{slug}"))
            })
            .build()
    }

    /// Look up a fund by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&InstrumentDescriptor> {
        self.entries.iter().find(|d| d.id() == id)
    }

    /// Iterate all funds in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, InstrumentDescriptor> {
        self.entries.iter()
    }

    /// Number of funds in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for a catalog with no funds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve requested identifiers into a worklist.
    ///
    /// - An empty request selects every fund in catalog order.
    /// - Otherwise known ids are appended in request order (duplicates kept)
    ///   and unknown ids are collected in [`Selection::unrecognised`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "navprice::catalog::resolve", skip(self, requested))
    )]
    pub fn resolve<S: AsRef<str>>(&self, requested: &[S]) -> Selection {
        if requested.is_empty() {
            return Selection {
                worklist: Worklist(self.entries.clone()),
                unrecognised: Vec::new(),
            };
        }

        let mut worklist = Vec::with_capacity(requested.len());
        let mut unrecognised = Vec::new();
        for raw in requested {
            let id = raw.as_ref().trim();
            if let Some(d) = self.get(id) {
                worklist.push(d.clone());
            } else {
                #[cfg(feature = "tracing")]
                tracing::warn!(id = %id, "fund id not recognised");
                unrecognised.push(id.to_string());
            }
        }

        Selection {
            worklist: Worklist(worklist),
            unrecognised,
        }
    }
}

/// Split a comma-separated fund list as given on the command line.
///
/// Blank input yields no ids (which selects the whole catalog). Fragments are
/// trimmed and empty fragments from stray commas are dropped.
#[must_use]
pub fn split_fund_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_ordered() {
        let c = Catalog::vanguard_lifestrategy().unwrap();
        let ids: Vec<&str> = c.iter().map(InstrumentDescriptor::id).collect();
        assert_eq!(ids, ["ls20", "ls40", "ls60", "ls80", "ls100"]);
        assert_eq!(
            c.get("ls20").unwrap().endpoint().as_str(),
            "https://www.vanguardinvestor.co.uk/api/funds/vanguard-lifestrategy-20-equity-fund-gbp-gross-accumulation-shares"
        );
    }

    #[test]
    fn builder_rejects_duplicates() {
        let err = Catalog::builder()
            .fund("a", "A", "http://localhost/a")
            .fund("a", "A again", "http://localhost/a2")
            .build()
            .unwrap_err();
        assert!(matches!(err, NavError::InvalidArg(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn builder_rejects_relative_endpoint() {
        let err = Catalog::builder()
            .fund("a", "A", "/relative/path")
            .build()
            .unwrap_err();
        assert!(matches!(err, NavError::InvalidArg(_)));
    }

    #[test]
    fn split_handles_blank_and_stray_commas() {
        assert!(split_fund_list("").is_empty());
        assert!(split_fund_list("  ").is_empty());
        assert_eq!(split_fund_list("ls20,,ls40,"), ["ls20", "ls40"]);
        assert_eq!(split_fund_list(" ls60 , ls80"), ["ls60", "ls80"]);
    }
}
