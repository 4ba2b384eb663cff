//! Chain assembly: ordering unordered outline segments into polylines.
//!
//! The extractor emits segments in boundary-edge enumeration order, not
//! connected end to end. Downstream stages that need a continuous
//! profile run this explicit post-processing step.

use crate::PathSegment;

/// A connected run of path segments.
#[derive(Debug, Clone)]
pub struct SegmentChain {
    /// Segments chained end to end.
    pub segments: Vec<PathSegment>,
    /// True when the chain's ends meet within tolerance.
    pub closed: bool,
}

/// Assemble unordered segments into connected chains by matching
/// endpoints within `tol`. Segments are reversed as needed (which
/// negates their bulge); every input segment ends up in exactly one
/// chain.
pub fn chain_segments(segments: &[PathSegment], tol: f64) -> Vec<SegmentChain> {
    let mut used = vec![false; segments.len()];
    let mut chains = Vec::new();

    for seed in 0..segments.len() {
        if used[seed] {
            continue;
        }
        used[seed] = true;
        let mut chain = vec![segments[seed].clone()];

        // Grow forward from the chain tail.
        loop {
            let Some(tail) = chain.last().map(|s| s.end) else {
                break;
            };
            let mut found = false;
            for (i, candidate) in segments.iter().enumerate() {
                if used[i] {
                    continue;
                }
                if (candidate.start - tail).norm() <= tol {
                    chain.push(candidate.clone());
                } else if (candidate.end - tail).norm() <= tol {
                    chain.push(candidate.reversed());
                } else {
                    continue;
                }
                used[i] = true;
                found = true;
                break;
            }
            if !found {
                break;
            }
        }

        // Grow backward from the chain head.
        loop {
            let Some(head) = chain.first().map(|s| s.start) else {
                break;
            };
            let mut found = false;
            for (i, candidate) in segments.iter().enumerate() {
                if used[i] {
                    continue;
                }
                if (candidate.end - head).norm() <= tol {
                    chain.insert(0, candidate.clone());
                } else if (candidate.start - head).norm() <= tol {
                    chain.insert(0, candidate.reversed());
                } else {
                    continue;
                }
                used[i] = true;
                found = true;
                break;
            }
            if !found {
                break;
            }
        }

        let closed = match (chain.first(), chain.last()) {
            (Some(first), Some(last)) => (last.end - first.start).norm() <= tol,
            _ => false,
        };
        chains.push(SegmentChain {
            segments: chain,
            closed,
        });
    }

    chains
}
