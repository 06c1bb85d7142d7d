//! Format constants and header keywords for the SGrid format

/// File name suffix marking a raw binary property file
pub const BINARY_SUFFIX: &str = "@@";

/// Leading character of a header comment line
pub const COMMENT_MARKER: char = '#';

/// Number of preamble lines skipped in text property files
pub const TEXT_PREAMBLE_LINES: usize = 3;

/// Quote character stripped from names and file references
pub const QUOTE: char = '"';

/// Header keywords recognised by the parser
pub mod keywords {
    /// Cell counts along the three axes
    pub const AXIS_N: &str = "AXIS_N";
    /// Grid origin
    pub const AXIS_O: &str = "AXIS_O";
    /// First axis vector
    pub const AXIS_U: &str = "AXIS_U";
    /// Second axis vector
    pub const AXIS_V: &str = "AXIS_V";
    /// Third axis vector
    pub const AXIS_W: &str = "AXIS_W";
    /// Lower axis extrema
    pub const AXIS_MIN: &str = "AXIS_MIN";
    /// Upper axis extrema
    pub const AXIS_MAX: &str = "AXIS_MAX";
    /// Property declaration
    pub const PROPERTY: &str = "PROPERTY";
    /// Backing file of the current property
    pub const PROP_FILE: &str = "PROP_FILE";
    /// No-data sentinel of the current property
    pub const PROP_NO_DATA_VALUE: &str = "PROP_NO_DATA_VALUE";
    /// Object type line, e.g. `GOCAD SGrid 1`
    pub const GOCAD: &str = "GOCAD";
    /// Object name line
    pub const NAME: &str = "NAME";
}
