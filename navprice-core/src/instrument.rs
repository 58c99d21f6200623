use std::fmt;
use std::sync::Arc;

use url::Url;

/// A fund the catalog knows how to price.
///
/// Descriptors are built once from the catalog and never mutated. Cloning is
/// cheap: the fields live behind a shared `Arc`, so every concurrent fetch can
/// own its own handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentDescriptor {
    inner: Arc<Inner>,
}

#[derive(Debug, PartialEq, Eq)]
struct Inner {
    id: String,
    display_name: String,
    endpoint: Url,
}

impl InstrumentDescriptor {
    /// Construct a descriptor from its parts.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, endpoint: Url) -> Self {
        Self {
            inner: Arc::new(Inner {
                id: id.into(),
                display_name: display_name.into(),
                endpoint,
            }),
        }
    }

    /// Short identifier used on the command line, e.g. `ls60`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Human-readable fund name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.inner.display_name
    }

    /// Price endpoint for this fund.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }
}

impl fmt::Display for InstrumentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.id())
    }
}
