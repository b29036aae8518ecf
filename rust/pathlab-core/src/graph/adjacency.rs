use super::NodeId;

/// Compressed adjacency rows.
///
/// Arcs keep the order in which they were handed to [`Adjacency::build`]
/// within each source row, so expansion order is reproducible.
#[derive(Clone, Debug)]
pub struct Adjacency {
    pub nodes: usize,
    pub offsets: Vec<usize>,
    pub dst: Vec<NodeId>,
    pub w: Vec<f64>,
}

impl Adjacency {
    pub fn build(nodes: usize, src: &[NodeId], dst: &[NodeId], w: &[f64]) -> Self {
        let mut counts = vec![0usize; nodes];
        for s in src { counts[s.index()] += 1; }
        let mut offsets = vec![0usize; nodes + 1];
        for i in 0..nodes { offsets[i + 1] = offsets[i] + counts[i]; }
        let mut cur = offsets[..nodes].to_vec();
        let mut adst = vec![NodeId(0); dst.len()];
        let mut aw = vec![0f64; w.len()];
        for i in 0..src.len() {
            let s = src[i].index();
            let p = cur[s];
            adst[p] = dst[i];
            aw[p] = w[i];
            cur[s] += 1;
        }
        Adjacency { nodes, offsets, dst: adst, w: aw }
    }

    pub fn row(&self, u: NodeId) -> (&[NodeId], &[f64]) {
        let u = u.index();
        if u >= self.nodes {
            return (&[], &[]);
        }
        let s = self.offsets[u];
        let e = self.offsets[u + 1];
        (&self.dst[s..e], &self.w[s..e])
    }

    pub fn arcs(&self, u: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        let (d, w) = self.row(u);
        d.iter().copied().zip(w.iter().copied())
    }

    pub fn arc_count(&self) -> usize {
        self.dst.len()
    }
}
