//! Server list fetching
//!
//! Issues fetches to the background API service. Each fetch gets a new
//! generation so responses from superseded fetches are dropped on arrival.

use tracing::{info, warn};

use crate::services::api::ApiRequest;
use crate::App;

impl App {
    /// Request the server list, bypassing the backend cache when `force_refresh`
    pub(crate) fn fetch_servers(&mut self, force_refresh: bool) {
        let generation = self.model.begin_fetch(force_refresh);
        info!(generation, force_refresh, "Requesting server list");

        let request = ApiRequest::FetchServers {
            generation,
            force_refresh,
        };

        if self.api_tx.send(request).is_err() {
            // Worker gone: report it like any other failed fetch
            warn!(generation, "API service is not running");
            self.model.finish_fetch(
                generation,
                Err(anyhow::anyhow!("API service is not running")),
            );
        }
    }
}
