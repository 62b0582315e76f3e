//! Fixed vocabulary of the intentions annotations
//!
//! Names the test author writes in Python source. These are not
//! configurable: a report is only meaningful if every project spells the
//! markers the same way.

/// Marker context managers placed inside a test body
pub mod markers {
    /// Precondition marker
    pub const WHEN: &str = "when";

    /// Action marker
    pub const CASE: &str = "case";

    /// Expectation marker
    pub const EXPECT: &str = "expect";
}

/// Classification decorator
pub mod describe {
    /// Decorator call name
    pub const NAME: &str = "describe";

    /// Keyword arguments, in the order they must appear
    pub const DOMAIN: &str = "domain";
    pub const COMPONENT: &str = "component";
    pub const LAYER: &str = "layer";

    pub const ARGUMENT_ORDER: [&str; 3] = [DOMAIN, COMPONENT, LAYER];
}

/// Defaults for discovery and output
pub mod defaults {
    /// Prefix marking a function as a test
    pub const TEST_PREFIX: &str = "test_";

    /// Prefix of test module file names
    pub const FILE_PREFIX: &str = "test_";

    /// Extension of test module files (without dot)
    pub const FILE_EXTENSION: &str = "py";

    /// Directories never entered during discovery
    pub const EXCLUDE_DIRS: &[&str] = &["__pycache__", "node_modules", "venv"];

    /// Output directory, relative to the working directory
    pub const OUTPUT_DIR: &str = ".intentions";

    /// Output file name inside `OUTPUT_DIR`
    pub const OUTPUT_FILE: &str = "intentions.json";
}

/// JSON rendering
pub mod report {
    /// Indentation of the pretty-printed report
    pub const INDENT: &[u8] = b"    ";
}
