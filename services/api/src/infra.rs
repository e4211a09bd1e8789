use async_trait::async_trait;
use ev_landing::config::LeadConfig;
use ev_landing::leads::{LeadGateway, LeadGatewayError, LeadGatewayResponse, LeadRecord};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Writes each lead to the log. Used outside production when no spreadsheet
/// endpoint is configured, so leads survive in the log output.
#[derive(Default, Clone, Copy)]
pub(crate) struct LoggingLeadGateway;

#[async_trait]
impl LeadGateway for LoggingLeadGateway {
    async fn forward(&self, lead: &LeadRecord) -> Result<(), LeadGatewayError> {
        info!(
            target: "leads",
            visitor = %lead.name,
            phone = %lead.phone,
            location = %lead.location,
            program = %lead.program,
            model = %lead.model,
            submitted_at = %lead.submitted_at.to_rfc3339(),
            "lead captured without endpoint"
        );
        Ok(())
    }
}

#[cfg(test)]
#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadGateway {
    records: Arc<std::sync::Mutex<Vec<LeadRecord>>>,
}

#[cfg(test)]
#[async_trait]
impl LeadGateway for InMemoryLeadGateway {
    async fn forward(&self, lead: &LeadRecord) -> Result<(), LeadGatewayError> {
        self.records
            .lock()
            .expect("lead mutex poisoned")
            .push(lead.clone());
        Ok(())
    }
}

#[cfg(test)]
impl InMemoryLeadGateway {
    pub(crate) fn records(&self) -> Vec<LeadRecord> {
        self.records.lock().expect("lead mutex poisoned").clone()
    }
}

/// Posts leads to the spreadsheet web-app endpoint.
pub(crate) struct HttpLeadGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpLeadGateway {
    pub(crate) fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, LeadGatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LeadGatewayError::Transport(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl LeadGateway for HttpLeadGateway {
    async fn forward(&self, lead: &LeadRecord) -> Result<(), LeadGatewayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&lead.payload())
            .send()
            .await
            .map_err(|e| LeadGatewayError::Transport(format!("failed to reach lead endpoint: {e}")))?;

        let status = response.status();
        let reply: LeadGatewayResponse = response.json().await.map_err(|e| {
            LeadGatewayError::Protocol(format!("status {status}, failed to parse reply: {e}"))
        })?;

        reply.into_result()
    }
}

/// Gateway picked from configuration: HTTP when an endpoint is set.
pub(crate) enum ConfiguredLeadGateway {
    Http(HttpLeadGateway),
    Logging(LoggingLeadGateway),
}

impl ConfiguredLeadGateway {
    pub(crate) fn from_config(config: &LeadConfig) -> Result<Self, LeadGatewayError> {
        match &config.endpoint {
            Some(endpoint) => Ok(Self::Http(HttpLeadGateway::new(endpoint, config.timeout)?)),
            None => {
                warn!("APP_LEAD_ENDPOINT is not set; leads will only be written to the log");
                Ok(Self::Logging(LoggingLeadGateway))
            }
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Http(_) => "http",
            Self::Logging(_) => "log",
        }
    }
}

#[async_trait]
impl LeadGateway for ConfiguredLeadGateway {
    async fn forward(&self, lead: &LeadRecord) -> Result<(), LeadGatewayError> {
        match self {
            Self::Http(gateway) => gateway.forward(lead).await,
            Self::Logging(gateway) => gateway.forward(lead).await,
        }
    }
}
