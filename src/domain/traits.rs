use crate::domain::error::RouteError;
use crate::domain::graph::{Graph, SccResult};

pub trait SccDetector {
    fn compute_scc(&self, graph: &Graph) -> Result<SccResult, RouteError>;
}
