use crate::usecase::connectivity::RouteReport;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    NetworkLoaded {
        airports: usize,
        routes: usize,
    },

    SccComputed {
        nodes: usize,
        edges: usize,
        components: usize,
        cyclic_components: usize,
    },

    GraphCondensed {
        components: usize,
        edges: usize,
    },

    OrphanComponent {
        component: usize,
        airports: Vec<String>,
    },

    Finished {
        report: RouteReport,
    },
}
