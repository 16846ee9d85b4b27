use crate::config::ConnectionConfig;
use crate::protocol::{
    AttributesResponse, BlinkResponse, ResetResponse, ResultsResponse, StandardResponse,
};
use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// A request for the devotion backend; stars are addressed by catalog key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Unlock { star: String },
    Lock { star: String },
    Blink { star: String },
    Attributes { star: String },
    Results,
    Reset,
}

impl ApiRequest {
    pub fn path(&self) -> &'static str {
        match self {
            ApiRequest::Unlock { .. } => "/main/standard",
            ApiRequest::Lock { .. } => "/main/standard_lock",
            ApiRequest::Blink { .. } => "/main/blink_mode",
            ApiRequest::Attributes { .. } => "/main/display_attributes",
            ApiRequest::Results => "/main/display_results",
            ApiRequest::Reset => "/main/reset",
        }
    }

    /// Form fields posted with the request (`None` means a plain GET)
    pub fn form(&self) -> Option<Vec<(&'static str, String)>> {
        match self {
            ApiRequest::Unlock { star }
            | ApiRequest::Lock { star }
            | ApiRequest::Attributes { star } => Some(vec![("data", star.clone())]),
            ApiRequest::Blink { star } => Some(vec![("clickedItem", star.clone())]),
            ApiRequest::Reset => Some(Vec::new()),
            ApiRequest::Results => None,
        }
    }
}

impl std::fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiRequest::Unlock { star } => write!(f, "unlock {}", star),
            ApiRequest::Lock { star } => write!(f, "lock {}", star),
            ApiRequest::Blink { star } => write!(f, "blink {}", star),
            ApiRequest::Attributes { star } => write!(f, "attributes of {}", star),
            ApiRequest::Results => write!(f, "results"),
            ApiRequest::Reset => write!(f, "reset"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ServerMessage {
    Connected,
    Disconnected,
    Unlocked {
        star: String,
        response: StandardResponse,
    },
    Locked {
        star: String,
        response: StandardResponse,
    },
    Blink(BlinkResponse),
    Attributes {
        star: String,
        response: AttributesResponse,
    },
    Results(Vec<String>),
    Reset(ResetResponse),
    RequestFailed {
        request: ApiRequest,
        error: String,
    },
}

pub struct BackendConnection;

impl BackendConnection {
    pub async fn start(
        connection: ConnectionConfig,
        server_tx: mpsc::UnboundedSender<ServerMessage>,
        mut request_rx: mpsc::UnboundedReceiver<ApiRequest>,
    ) -> Result<()> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(connection.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;
        let base_url = connection.base_url.trim_end_matches('/').to_string();

        info!("Probing devotion backend at {}...", base_url);
        match client.get(format!("{}/main/", base_url)).send().await {
            Ok(response) if response.status().is_success() => {
                info!("Backend reachable");
                let _ = server_tx.send(ServerMessage::Connected);
            }
            Ok(response) => {
                warn!("Backend probe returned HTTP {}", response.status());
                let _ = server_tx.send(ServerMessage::Disconnected);
            }
            Err(e) => {
                warn!("Backend unreachable: {}", e);
                let _ = server_tx.send(ServerMessage::Disconnected);
            }
        }

        // One request at a time so answers arrive in request order
        while let Some(request) = request_rx.recv().await {
            debug!("Sending request: {}", request);
            let message = match Self::dispatch(&client, &base_url, &request).await {
                Ok(message) => message,
                Err(e) => {
                    error!("Request '{}' failed: {:#}", request, e);
                    ServerMessage::RequestFailed {
                        request,
                        error: format!("{:#}", e),
                    }
                }
            };
            if server_tx.send(message).is_err() {
                debug!("Receiver dropped, stopping backend task");
                break;
            }
        }

        info!("Backend task finished");
        Ok(())
    }

    async fn dispatch(
        client: &reqwest::Client,
        base_url: &str,
        request: &ApiRequest,
    ) -> Result<ServerMessage> {
        let message = match request {
            ApiRequest::Unlock { star } => ServerMessage::Unlocked {
                star: star.clone(),
                response: Self::fetch(client, base_url, request).await?,
            },
            ApiRequest::Lock { star } => ServerMessage::Locked {
                star: star.clone(),
                response: Self::fetch(client, base_url, request).await?,
            },
            ApiRequest::Blink { .. } => {
                ServerMessage::Blink(Self::fetch(client, base_url, request).await?)
            }
            ApiRequest::Attributes { star } => ServerMessage::Attributes {
                star: star.clone(),
                response: Self::fetch(client, base_url, request).await?,
            },
            ApiRequest::Results => {
                let response: ResultsResponse = Self::fetch(client, base_url, request).await?;
                ServerMessage::Results(response.result)
            }
            ApiRequest::Reset => ServerMessage::Reset(Self::fetch(client, base_url, request).await?),
        };
        Ok(message)
    }

    async fn fetch<T: DeserializeOwned>(
        client: &reqwest::Client,
        base_url: &str,
        request: &ApiRequest,
    ) -> Result<T> {
        let url = format!("{}{}", base_url, request.path());
        let builder = match request.form() {
            Some(fields) => client.post(&url).form(&fields),
            None => client.get(&url),
        };

        let response = builder
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;
        if !response.status().is_success() {
            bail!("{} returned HTTP {}", url, response.status());
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Invalid response from {}", url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_paths() {
        let star = "tortof".to_string();
        assert_eq!(ApiRequest::Unlock { star: star.clone() }.path(), "/main/standard");
        assert_eq!(ApiRequest::Lock { star: star.clone() }.path(), "/main/standard_lock");
        assert_eq!(ApiRequest::Blink { star: star.clone() }.path(), "/main/blink_mode");
        assert_eq!(
            ApiRequest::Attributes { star }.path(),
            "/main/display_attributes"
        );
        assert_eq!(ApiRequest::Results.path(), "/main/display_results");
        assert_eq!(ApiRequest::Reset.path(), "/main/reset");
    }

    #[test]
    fn test_form_fields() {
        let unlock = ApiRequest::Unlock {
            star: "tortof".into(),
        };
        assert_eq!(unlock.form(), Some(vec![("data", "tortof".to_string())]));

        let blink = ApiRequest::Blink {
            star: "turtle_shell".into(),
        };
        assert_eq!(
            blink.form(),
            Some(vec![("clickedItem", "turtle_shell".to_string())])
        );

        assert_eq!(ApiRequest::Reset.form(), Some(Vec::new()));
        assert_eq!(ApiRequest::Results.form(), None);
    }

    #[test]
    fn test_display() {
        let request = ApiRequest::Lock {
            star: "csord".into(),
        };
        assert_eq!(request.to_string(), "lock csord");
    }

    #[tokio::test]
    async fn test_unreachable_backend_reports_disconnect() {
        let (server_tx, mut server_rx) = mpsc::unbounded_channel();
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        drop(request_tx);

        let connection = ConnectionConfig {
            // Reserved port, nothing listens here
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
        };
        BackendConnection::start(connection, server_tx, request_rx)
            .await
            .unwrap();

        assert!(matches!(
            server_rx.recv().await,
            Some(ServerMessage::Disconnected)
        ));
    }
}
