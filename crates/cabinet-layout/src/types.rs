use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid target: {0} mm (must be positive)")]
    InvalidTarget(i64),
    #[error("No sizes to combine")]
    EmptyDenominationSet,
    #[error("Target too large: {target_mm} mm is {units} units, above the solver limit")]
    TargetTooLarge { target_mm: u64, units: u64 },
    #[error("Invalid size: {0}")]
    InvalidSize(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// How the cabinet run is assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssemblyMode {
    /// Every (module, row) pair is an autonomous box with its own sides,
    /// top and bottom
    #[default]
    Independent,
    /// Adjacent modules share a partition and stacked rows share a shelf
    Shared,
}

/// Physical part of a cabinet carcass
///
/// Parts sort by their label, which is also their serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    /// Side of an independent box
    Side,
    /// Top of an independent box
    Top,
    /// Bottom of an independent box
    Bottom,
    /// Outer face of a shared run
    EndSide,
    /// Shared wall between two adjacent modules
    Partition,
    /// Base of a shared stack
    BaseBottom,
    /// Cap of a shared stack
    CapTop,
    /// Shared shelf between two stacked rows
    Shelf,
    /// Back panel (both modes)
    Back,
}

impl PartKind {
    pub const ALL: [PartKind; 9] = [
        PartKind::Side,
        PartKind::Top,
        PartKind::Bottom,
        PartKind::EndSide,
        PartKind::Partition,
        PartKind::BaseBottom,
        PartKind::CapTop,
        PartKind::Shelf,
        PartKind::Back,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PartKind::Side => "Side",
            PartKind::Top => "Top",
            PartKind::Bottom => "Bottom",
            PartKind::EndSide => "End side",
            PartKind::Partition => "Intermediate partition",
            PartKind::BaseBottom => "Bottom (base)",
            PartKind::CapTop => "Top (cap)",
            PartKind::Shelf => "Intermediate shelf",
            PartKind::Back => "Back",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|part| part.label() == label)
    }
}

impl std::fmt::Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl PartialOrd for PartKind {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PartKind {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.label().cmp(other.label())
    }
}

/// Whether the horizontal gap is acceptable for the requested tolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceVerdict {
    /// Gap is at most the tolerance
    Within { tolerance_mm: u32 },
    /// Gap is larger than the tolerance
    Exceeds { tolerance_mm: u32 },
}

impl ToleranceVerdict {
    pub fn is_within(self) -> bool {
        matches!(self, ToleranceVerdict::Within { .. })
    }
}

/// Statistics about a solved plan
#[derive(Debug, Clone, PartialEq)]
pub struct PlanStatistics {
    /// Wall length that was targeted
    pub wall_length_mm: i64,
    /// Sum of all module widths in the layout
    pub total_length_mm: u64,
    /// Unused wall length
    pub gap_mm: u64,
    /// Number of modules along the wall
    pub module_count: usize,
    /// Modules per width, every width of the set included
    pub modules_per_width: BTreeMap<u32, usize>,
    /// Gap checked against the requested (or general) tolerance
    pub tolerance: ToleranceVerdict,
    /// Body height budget the rows were stacked into
    pub body_target_mm: i64,
    /// Height actually reached by the stacked rows
    pub body_real_mm: u64,
    /// Number of stacked rows
    pub row_count: usize,
    /// Distinct panel rows in the cut list
    pub panel_rows: usize,
    /// Total number of panels to cut
    pub panel_count: u64,
}
