//! a11ycheck-standards - accessibility standards catalog
//!
//! Standards are named checks a runner can apply to a live page. This crate
//! treats them as opaque, pattern-matchable identities: a [`Catalog`] holds
//! them in a fixed order, and selection happens by matching configuration
//! patterns against their names. Running a standard against page markup
//! belongs to the check runner, not here.
//!
//! ```
//! use a11ycheck_config::parse_str;
//! use a11ycheck_standards::Catalog;
//!
//! let settings = parse_str(
//!     "page(\"/home\") {\n  skip_standard(/heading/)\n}\n",
//! ).unwrap();
//!
//! let catalog = Catalog::with_defaults();
//! let selected = catalog.for_page(&settings.pages()[0]);
//! let names: Vec<&str> = selected.iter().map(|s| s.name()).collect();
//! assert_eq!(names, ["exactly_one_main_landmark", "tab_index"]);
//! ```

use a11ycheck_config::{PageSettings, Pattern};

pub mod checks;

pub use checks::{
    ContentFollowsHeadings, ExactlyOneMainHeading, ExactlyOneMainLandmark, HeadingHierarchy,
    TabIndex,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A named accessibility standard.
pub trait Standard: Send + Sync {
    /// Stable name that `skip_standard` patterns match against.
    fn name(&self) -> &'static str;

    /// One-line description for catalog listings.
    fn description(&self) -> &'static str;
}

/// An ordered collection of standards with name-based selection.
pub struct Catalog {
    standards: Vec<Box<dyn Standard>>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Catalog {
            standards: Vec::new(),
        }
    }

    /// The built-in catalog, in its published order.
    pub fn with_defaults() -> Self {
        let mut catalog = Catalog::new();
        catalog.add_standard(Box::new(ContentFollowsHeadings));
        catalog.add_standard(Box::new(HeadingHierarchy));
        catalog.add_standard(Box::new(ExactlyOneMainHeading));
        catalog.add_standard(Box::new(ExactlyOneMainLandmark));
        catalog.add_standard(Box::new(TabIndex));
        catalog
    }

    /// Appends a standard to the catalog.
    pub fn add_standard(&mut self, standard: Box<dyn Standard>) {
        self.standards.push(standard);
    }

    pub fn len(&self) -> usize {
        self.standards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standards.is_empty()
    }

    /// Names of all standards, in catalog order.
    pub fn names(&self) -> Vec<&'static str> {
        self.standards.iter().map(|s| s.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Standard> {
        self.standards.iter().map(|s| s.as_ref())
    }

    /// The standards that should run for `page`: everything its settings do
    /// not skip, in catalog order.
    pub fn for_page(&self, page: &PageSettings) -> Vec<&dyn Standard> {
        self.iter().filter(|s| !page.skips(s.name())).collect()
    }

    /// The standards whose name matches `pattern`.
    pub fn matching(&self, pattern: &Pattern) -> Vec<&dyn Standard> {
        self.iter().filter(|s| pattern.matches(s.name())).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new()
    }
}
