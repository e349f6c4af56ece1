//! The built-in standards.
//!
//! Each standard is a unit struct carrying its stable name and a one-line
//! description. Names are what `skip_standard` patterns match against, so
//! they never change once published.

use crate::Standard;

/// Text content belongs under a heading that describes it.
pub struct ContentFollowsHeadings;

impl Standard for ContentFollowsHeadings {
    fn name(&self) -> &'static str {
        "content_follows_headings"
    }

    fn description(&self) -> &'static str {
        "Text content must follow a heading that describes it"
    }
}

/// Heading levels descend one step at a time.
pub struct HeadingHierarchy;

impl Standard for HeadingHierarchy {
    fn name(&self) -> &'static str {
        "heading_hierarchy"
    }

    fn description(&self) -> &'static str {
        "Heading levels must descend without skipping"
    }
}

/// A page has exactly one `h1`.
pub struct ExactlyOneMainHeading;

impl Standard for ExactlyOneMainHeading {
    fn name(&self) -> &'static str {
        "exactly_one_main_heading"
    }

    fn description(&self) -> &'static str {
        "Each page must have exactly one top-level heading"
    }
}

/// A page has exactly one `main` landmark.
pub struct ExactlyOneMainLandmark;

impl Standard for ExactlyOneMainLandmark {
    fn name(&self) -> &'static str {
        "exactly_one_main_landmark"
    }

    fn description(&self) -> &'static str {
        "Each page must have exactly one main landmark"
    }
}

/// Positive `tabindex` values break the natural focus order.
pub struct TabIndex;

impl Standard for TabIndex {
    fn name(&self) -> &'static str {
        "tab_index"
    }

    fn description(&self) -> &'static str {
        "Tab index values must not disturb the natural focus order"
    }
}
