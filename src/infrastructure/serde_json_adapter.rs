use crate::domain::error::RouteError;
use crate::domain::network::RouteNetwork;
use crate::usecase::connectivity::RouteReport;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tokio::fs;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NetworkFileDto {
    #[serde(default)]
    pub airports: BTreeMap<String, usize>,

    #[serde(default)]
    pub routes: Vec<(String, String)>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl NetworkFileDto {
    pub fn to_network(&self) -> Result<RouteNetwork, RouteError> {
        let airports = self
            .airports
            .iter()
            .map(|(code, &id)| (code.clone(), id))
            .collect();
        let mut network = RouteNetwork::new(airports);
        network.add_routes(
            self.routes
                .iter()
                .map(|(from, to)| (from.as_str(), to.as_str())),
        )?;
        Ok(network)
    }
}

pub async fn read_network_file(path: &str) -> Result<NetworkFileDto> {
    let raw = fs::read_to_string(path).await?;
    let dto: NetworkFileDto = serde_json::from_str(&raw)?;
    Ok(dto)
}

pub async fn write_report_file(path: &str, report: &RouteReport) -> Result<()> {
    let pretty = serde_json::to_string_pretty(report)?;
    fs::write(path, pretty).await?;
    Ok(())
}
