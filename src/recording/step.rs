// src/recording/step.rs
//! Step records: one observable event during a sort
//!
//! Each event kind carries exactly its own payload. The serialized form is
//! the flat record a renderer replays frame by frame:
//!
//! ```json
//! {"type": "compare", "indices": [0, 1], "array": [5, 3, 8],
//!  "description": "Comparing 5 and 3 at positions 0 and 1", "pass_number": 1}
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// Discriminant of a [`StepEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Compare,
    Swap,
    Placed,
    PivotChosen,
    Done,
}

impl StepKind {
    /// Tag used in the serialized trace
    pub fn wire_name(&self) -> &'static str {
        match self {
            StepKind::Compare => "compare",
            StepKind::Swap => "swapping",
            StepKind::Placed => "sorted",
            StepKind::PivotChosen => "pivot",
            StepKind::Done => "done",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// What a compare-kind record inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Two elements checked against each other
    Pair(usize, usize),

    /// Start of a scan or insertion from this position
    ScanStart(usize),

    /// Boundary of a merge of `[left..=mid]` and `[mid+1..=right]`
    MergeRange { left: usize, mid: usize, right: usize },
}

/// One observable event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    Compare(Comparison),
    Swap { first: usize, second: usize },
    Placed { index: usize },
    PivotChosen { index: usize },
    Done { total_comparisons: usize, total_swaps: usize },
}

impl StepEvent {
    /// Kind discriminant of this event
    pub fn kind(&self) -> StepKind {
        match self {
            StepEvent::Compare(_) => StepKind::Compare,
            StepEvent::Swap { .. } => StepKind::Swap,
            StepEvent::Placed { .. } => StepKind::Placed,
            StepEvent::PivotChosen { .. } => StepKind::PivotChosen,
            StepEvent::Done { .. } => StepKind::Done,
        }
    }

    /// Ordered array indices the event concerns
    pub fn positions(&self) -> Vec<usize> {
        match *self {
            StepEvent::Compare(Comparison::Pair(a, b)) => vec![a, b],
            StepEvent::Compare(Comparison::ScanStart(i)) => vec![i],
            StepEvent::Compare(Comparison::MergeRange { left, right, .. }) => {
                (left..=right).collect()
            }
            StepEvent::Swap { first, second } => vec![first, second],
            StepEvent::Placed { index } | StepEvent::PivotChosen { index } => vec![index],
            StepEvent::Done { .. } => Vec::new(),
        }
    }
}

/// Algorithm-specific auxiliary metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepContext {
    /// 1-based outer pass of an iterative algorithm
    PassNumber(usize),

    /// Recursion depth of a divide-and-conquer algorithm
    Depth(usize),
}

/// One immutable record in a trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub event: StepEvent,

    /// Full copy of the array at the moment of the event
    pub snapshot: Vec<i64>,

    /// Display text, not authoritative
    pub narrative: String,

    pub context: Option<StepContext>,
}

impl Step {
    /// Kind of the underlying event
    pub fn kind(&self) -> StepKind {
        self.event.kind()
    }

    /// Ordered array indices this step concerns
    pub fn positions(&self) -> Vec<usize> {
        self.event.positions()
    }
}

#[derive(Serialize)]
struct WireStep<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    indices: Option<Vec<usize>>,
    array: &'a [i64],
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pass_number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    depth: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_comparisons: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_swaps: Option<usize>,
}

impl Serialize for Step {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (total_comparisons, total_swaps, indices) = match self.event {
            StepEvent::Done {
                total_comparisons,
                total_swaps,
            } => (Some(total_comparisons), Some(total_swaps), None),
            _ => (None, None, Some(self.positions())),
        };

        WireStep {
            kind: self.kind().wire_name(),
            indices,
            array: &self.snapshot,
            description: &self.narrative,
            pass_number: match self.context {
                Some(StepContext::PassNumber(n)) => Some(n),
                _ => None,
            },
            depth: match self.context {
                Some(StepContext::Depth(d)) => Some(d),
                _ => None,
            },
            total_comparisons,
            total_swaps,
        }
        .serialize(serializer)
    }
}
