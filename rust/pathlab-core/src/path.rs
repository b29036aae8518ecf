use crate::graph::NodeId;

/// Walks parent links from `terminal` back to the root (a `None` parent) and
/// returns the root-to-terminal path.
///
/// `parents` is indexed by [`NodeId::index`]. The walk stops after
/// `parents.len()` steps so a corrupt map cannot loop forever.
pub fn reconstruct(parents: &[Option<NodeId>], terminal: NodeId) -> Vec<NodeId> {
    let mut path = vec![terminal];
    let mut cur = terminal;
    for _ in 0..parents.len() {
        match parents.get(cur.index()).copied().flatten() {
            Some(p) => {
                path.push(p);
                cur = p;
            }
            None => break,
        }
    }
    debug_assert!(parents.get(cur.index()).copied().flatten().is_none(), "parent chain has a cycle");
    path.reverse();
    path
}

/// Joins a forward chain (start..=meeting) with a backward chain
/// (meeting..=goal), keeping the meeting node once.
pub fn stitch(forward: &[Option<NodeId>], backward: &[Option<NodeId>], meeting: NodeId) -> Vec<NodeId> {
    let mut path = reconstruct(forward, meeting);
    let mut tail = reconstruct(backward, meeting);
    tail.reverse();
    path.extend(tail.into_iter().skip(1));
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(i: u32) -> NodeId {
        NodeId(i)
    }

    #[test]
    fn reconstructs_root_to_terminal() {
        // 0 <- 1 <- 3, 2 unreached
        let parents = vec![None, Some(n(0)), None, Some(n(1))];
        assert_eq!(reconstruct(&parents, n(3)), vec![n(0), n(1), n(3)]);
        assert_eq!(reconstruct(&parents, n(0)), vec![n(0)]);
    }

    #[test]
    fn stitch_drops_duplicate_meeting_node() {
        // forward: 0 -> 1 -> 2 ; backward from goal 4: 4 -> 3 -> 2
        let mut fwd = vec![None; 5];
        fwd[1] = Some(n(0));
        fwd[2] = Some(n(1));
        let mut bwd = vec![None; 5];
        bwd[3] = Some(n(4));
        bwd[2] = Some(n(3));
        assert_eq!(stitch(&fwd, &bwd, n(2)), vec![n(0), n(1), n(2), n(3), n(4)]);
    }

    #[test]
    fn stitch_at_endpoints() {
        let fwd = vec![None, Some(NodeId(0))];
        let bwd = vec![None, None];
        assert_eq!(stitch(&fwd, &bwd, n(1)), vec![n(0), n(1)]);
        assert_eq!(stitch(&[None], &[None], n(0)), vec![n(0)]);
    }
}
