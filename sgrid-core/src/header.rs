//! SGrid header parsing
//!
//! The header is a line-oriented keyword format. Parsing is best-effort:
//! unknown keywords are skipped and malformed records are dropped without
//! failing the parse. Property lines are order dependent, so the scan keeps a
//! cursor on the most recently declared property and folds every line into
//! a [`HeaderScan`] accumulator.

use crate::format::constants::keywords;
use crate::format::{
    grid_spacing, Dimensions, GridGeometry, HeaderMetadata, PropertyDescriptor, PropertyRegistry,
    Vec3,
};
use crate::validation::parsing::{is_ignorable, parse_counts, parse_vec3, rest_of_line, strip_quotes};
use hashbrown::HashMap;

/// Result of parsing an SGrid header
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SgHeader {
    pub metadata: HeaderMetadata,
    pub geometry: GridGeometry,
    pub properties: PropertyRegistry,
    /// 1-indexed numbers of recognised lines whose record was malformed
    pub malformed_lines: Vec<usize>,
}

/// Parse header text into geometry and a property registry
pub fn parse_header(text: &str) -> SgHeader {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !is_ignorable(line))
        .fold(HeaderScan::default(), |scan, (number, line)| {
            scan.apply(number, line)
        })
        .finish()
}

/// Three-component axis records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum AxisRecord {
    Origin,
    U,
    V,
    W,
    Min,
    Max,
}

impl AxisRecord {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            keywords::AXIS_O => Some(AxisRecord::Origin),
            keywords::AXIS_U => Some(AxisRecord::U),
            keywords::AXIS_V => Some(AxisRecord::V),
            keywords::AXIS_W => Some(AxisRecord::W),
            keywords::AXIS_MIN => Some(AxisRecord::Min),
            keywords::AXIS_MAX => Some(AxisRecord::Max),
            _ => None,
        }
    }
}

/// Accumulator threaded through the line scan
#[derive(Debug, Default)]
struct HeaderScan {
    counts: Option<[u32; 3]>,
    axes: HashMap<AxisRecord, Vec3>,
    properties: PropertyRegistry,
    cursor: Option<String>,
    metadata: HeaderMetadata,
    malformed_lines: Vec<usize>,
}

impl HeaderScan {
    fn apply(mut self, number: usize, line: &str) -> Self {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&keyword) = tokens.first() else {
            return self;
        };

        let accepted = match keyword {
            keywords::AXIS_N => parse_counts(&tokens).map(|counts| self.counts = Some(counts)),
            keywords::PROPERTY => self.declare_property(&tokens),
            // Property records only apply once a property is declared
            keywords::PROP_FILE => match self.current() {
                Some(prop) => tokens
                    .get(2)
                    .map(|file| prop.file = Some(strip_quotes(file).to_string())),
                None => Some(()),
            },
            keywords::PROP_NO_DATA_VALUE => match self.current() {
                Some(prop) => tokens
                    .get(2)
                    .and_then(|token| token.parse::<f64>().ok())
                    .map(|value| prop.no_data = Some(value)),
                None => Some(()),
            },
            keywords::GOCAD => {
                self.metadata.object_type = Some(rest_of_line(&tokens));
                Some(())
            }
            keywords::NAME => {
                self.metadata.name = Some(strip_quotes(&rest_of_line(&tokens)).to_string());
                Some(())
            }
            other => match AxisRecord::from_keyword(other) {
                Some(record) => parse_vec3(&tokens).map(|v| {
                    self.axes.insert(record, v);
                }),
                None => return self,
            },
        };

        if accepted.is_none() {
            self.malformed_lines.push(number);
        }
        self
    }

    /// Insert a fresh descriptor and move the cursor onto it
    ///
    /// A repeated id replaces the earlier descriptor, dropping its file and
    /// sentinel.
    fn declare_property(&mut self, tokens: &[&str]) -> Option<()> {
        let id = *tokens.get(1)?;
        let display_name = tokens.get(2).map_or(id, |name| strip_quotes(name));
        self.properties
            .insert(id.to_string(), PropertyDescriptor::new(id, display_name));
        self.cursor = Some(id.to_string());
        Some(())
    }

    fn current(&mut self) -> Option<&mut PropertyDescriptor> {
        let id = self.cursor.as_ref()?;
        self.properties.get_mut(id)
    }

    fn finish(self) -> SgHeader {
        let dimensions = self
            .counts
            .and_then(|[nu, nv, nw]| Dimensions::new(nu, nv, nw));
        let axis = |record: AxisRecord| self.axes.get(&record).copied();

        let spacing = match (dimensions, axis(AxisRecord::U)) {
            (Some(dims), Some(u)) => Some(grid_spacing(
                u,
                axis(AxisRecord::V).unwrap_or(Vec3::ZERO),
                axis(AxisRecord::W).unwrap_or(Vec3::ZERO),
                dims,
            )),
            _ => None,
        };

        let geometry = GridGeometry {
            dimensions,
            origin: axis(AxisRecord::Origin),
            u: axis(AxisRecord::U),
            v: axis(AxisRecord::V),
            w: axis(AxisRecord::W),
            spacing,
            min_bound: axis(AxisRecord::Min),
            max_bound: axis(AxisRecord::Max),
        };

        SgHeader {
            metadata: self.metadata,
            geometry,
            properties: self.properties,
            malformed_lines: self.malformed_lines,
        }
    }
}
