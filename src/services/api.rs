use tokio::sync::mpsc;
use tracing::debug;

use crate::api::{QuickplayClient, ServerListResponse};

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Fetch the server list, tagged with the fetch generation it belongs to
    FetchServers { generation: u64, force_refresh: bool },
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    ServersResult {
        generation: u64,
        result: Result<ServerListResponse, anyhow::Error>,
    },
}

/// Execute an API request and return the response
async fn execute_request(client: &QuickplayClient, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::FetchServers {
            generation,
            force_refresh,
        } => {
            debug!(
                generation,
                force_refresh,
                base_url = client.base_url(),
                "API service: fetching servers"
            );
            let result = client.get_servers(force_refresh).await;

            debug!(generation, success = result.is_ok(), "API service: fetch finished");
            ApiResponse::ServersResult { generation, result }
        }
    }
}

/// Spawn the API service worker
///
/// Requests run concurrently; ordering between overlapping fetches is
/// resolved by the receiver through the generation tag.
pub fn spawn_api_service(
    client: QuickplayClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let client = client.clone();
            let response_tx = response_tx.clone();

            // No per-request retries - the user retries with 'r'
            tokio::spawn(async move {
                let response = execute_request(&client, request).await;
                let _ = response_tx.send(response);
            });
        }
    });

    (request_tx, response_rx)
}
