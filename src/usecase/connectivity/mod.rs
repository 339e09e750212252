mod analyze;
mod condense;

pub use analyze::{count_routes_needed, orphan_components};
pub use condense::build_condensed_graph;

use crate::domain::error::RouteError;
use crate::domain::graph::SccResult;
use crate::domain::network::RouteNetwork;
use crate::domain::traits::SccDetector;
use crate::usecase::event::AppEvent;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteReport {
    pub start: String,
    pub airports: usize,
    pub routes: usize,
    pub components: Vec<Vec<String>>,
    pub orphan_components: Vec<Vec<String>>,
    pub suggested_routes: Vec<(String, String)>,
    pub additional_routes_needed: usize,
}

/// Minimum number of new directed routes so that every airport is reachable
/// from `start_airport`.
pub fn find_minimum_additional_routes(
    network: &RouteNetwork,
    start_airport: &str,
    scc: &dyn SccDetector,
) -> Result<usize, RouteError> {
    let start = network.vertex(start_airport)?;
    let scc_res = scc.compute_scc(network.graph())?;
    let condensed = build_condensed_graph(network.graph(), &scc_res);
    let start_component = find_start_component(network, &scc_res, start)?;
    Ok(count_routes_needed(&condensed, start_component))
}

/// Same computation as [`find_minimum_additional_routes`], reporting progress
/// to `sink` and returning the full breakdown.
pub async fn analyze_routes(
    network: &RouteNetwork,
    start_airport: &str,
    scc: &dyn SccDetector,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<RouteReport> {
    let start = network.vertex(start_airport)?;
    emit(
        &sink,
        AppEvent::NetworkLoaded {
            airports: network.airport_count(),
            routes: network.route_count(),
        },
    )
    .await;

    emit(&sink, AppEvent::PhaseStarted { name: "scc".into() }).await;
    let graph = network.graph();
    let scc_res = scc.compute_scc(graph)?;
    emit(
        &sink,
        AppEvent::SccComputed {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            components: scc_res.component_count(),
            cyclic_components: scc_res.cyclic_component.iter().filter(|&&b| b).count(),
        },
    )
    .await;
    emit(&sink, AppEvent::PhaseFinished { name: "scc".into() }).await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "condense".into(),
        },
    )
    .await;
    let condensed = build_condensed_graph(graph, &scc_res);
    emit(
        &sink,
        AppEvent::GraphCondensed {
            components: condensed.component_count,
            edges: condensed.edge_count(),
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "condense".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "in_degree".into(),
        },
    )
    .await;
    let start_component = find_start_component(network, &scc_res, start)?;
    let orphans = orphan_components(&condensed, start_component);
    let report = build_report(network, start_airport, &scc_res, &orphans);
    for (&component, airports) in orphans.iter().zip(report.orphan_components.iter()) {
        emit(
            &sink,
            AppEvent::OrphanComponent {
                component,
                airports: airports.clone(),
            },
        )
        .await;
    }
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "in_degree".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::Finished {
            report: report.clone(),
        },
    )
    .await;
    Ok(report)
}

fn find_start_component(
    network: &RouteNetwork,
    scc_res: &SccResult,
    start: usize,
) -> Result<usize, RouteError> {
    scc_res
        .component_containing(start)
        .ok_or(RouteError::OutOfRange {
            vertex: start,
            vertex_count: network.airport_count(),
        })
}

fn build_report(
    network: &RouteNetwork,
    start_airport: &str,
    scc_res: &SccResult,
    orphans: &[usize],
) -> RouteReport {
    let label = |v: usize| {
        network
            .label(v)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{v}"))
    };

    let components: Vec<Vec<String>> = scc_res
        .components
        .iter()
        .map(|comp| comp.iter().map(|&v| label(v)).collect())
        .collect();

    let orphan_components: Vec<Vec<String>> =
        orphans.iter().map(|&c| components[c].clone()).collect();

    // Any airport already reachable works as the source; the start always is.
    let suggested_routes = orphans
        .iter()
        .map(|&c| (start_airport.to_string(), label(scc_res.components[c][0])))
        .collect();

    RouteReport {
        start: start_airport.to_string(),
        airports: network.airport_count(),
        routes: network.route_count(),
        components,
        orphan_components,
        suggested_routes,
        additional_routes_needed: orphans.len(),
    }
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
