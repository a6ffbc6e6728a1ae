use crate::error::PartitionError;
use crate::geometry::Edge;
use crate::math::Point2;

/// Role of a polygon vertex during partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tag {
    Start,
    End,
    Corner,
    Chain,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Vertex {
    pub point: Point2,
    pub tag: Tag,
}

impl Vertex {
    pub fn new(point: Point2, tag: Tag) -> Self {
        Self { point, tag }
    }
}

/// How the boundary chain joins the region's perimeter vertices.
///
/// After sorting `{p1, p2} ∪ corners` by centroid angle the ring is convex
/// and `p1`, `p2` are ring neighbours joined by the chord. The chain
/// replaces that chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceCase {
    /// Both endpoints lie on the same square edge; the region is the chain
    /// plus a walk around the perimeter (no angular sort).
    StraightEdge(Edge),
    /// Endpoints are neighbours in the sorted list: the chain goes between
    /// them, reversed when `p2` comes first.
    Insert { after: usize, reversed: bool },
    /// Endpoints are the first and last entries: the chain closes the ring
    /// after the last entry, reversed when `p1` comes first.
    CornerWrap { reversed: bool },
}

/// Decides the splice case for a sorted ring holding exactly one `Start`
/// and one `End` vertex.
///
/// # Errors
///
/// [`PartitionError::EndpointMissing`] if a tagged endpoint is absent, or
/// [`PartitionError::SpliceFailed`] if the endpoints are not ring neighbours.
pub(crate) fn classify(sorted: &[Vertex]) -> Result<SpliceCase, PartitionError> {
    let start = sorted
        .iter()
        .position(|v| v.tag == Tag::Start)
        .ok_or(PartitionError::EndpointMissing)?;
    let end = sorted
        .iter()
        .position(|v| v.tag == Tag::End)
        .ok_or(PartitionError::EndpointMissing)?;
    let last = sorted.len() - 1;

    match (start, end) {
        (s, e) if s + 1 == e => Ok(SpliceCase::Insert {
            after: s,
            reversed: false,
        }),
        (s, e) if e + 1 == s => Ok(SpliceCase::Insert {
            after: e,
            reversed: true,
        }),
        (0, e) if e == last => Ok(SpliceCase::CornerWrap { reversed: true }),
        (s, 0) if s == last => Ok(SpliceCase::CornerWrap { reversed: false }),
        (start, end) => Err(PartitionError::SpliceFailed {
            start,
            end,
            len: sorted.len(),
        }),
    }
}

/// Applies an `Insert` or `CornerWrap` case. `chain` holds the curve's
/// interior points in drawing order (`p1 → p2`). `StraightEdge` regions
/// come from the perimeter walk, so the ring is returned as is.
pub(crate) fn apply(sorted: &[Vertex], chain: &[Point2], case: SpliceCase) -> Vec<Vertex> {
    let forward = chain.iter().map(|p| Vertex::new(*p, Tag::Chain));
    let backward = chain.iter().rev().map(|p| Vertex::new(*p, Tag::Chain));

    let mut out = Vec::with_capacity(sorted.len() + chain.len());
    match case {
        SpliceCase::Insert { after, reversed } => {
            out.extend_from_slice(&sorted[..=after]);
            if reversed {
                out.extend(backward);
            } else {
                out.extend(forward);
            }
            out.extend_from_slice(&sorted[after + 1..]);
        }
        SpliceCase::CornerWrap { reversed } => {
            out.extend_from_slice(sorted);
            if reversed {
                out.extend(backward);
            } else {
                out.extend(forward);
            }
        }
        SpliceCase::StraightEdge(_) => out.extend_from_slice(sorted),
    }
    out
}
