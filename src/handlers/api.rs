//! API Response Handler
//!
//! Handles responses from the backend API background service.

use crate::model::FetchOutcome;
use crate::services::api::ApiResponse;
use crate::App;

/// Handle API response from background service
///
/// Response types:
/// - ServersResult: Server list (or error) for one fetch generation
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::ServersResult { generation, result } => {
            let had_data = app.model.servers.has_data();

            match app.model.finish_fetch(generation, result) {
                FetchOutcome::Loaded { count, .. } => {
                    if had_data {
                        app.model.show_toast(format!("Refreshed: {} servers", count));
                    }
                }
                FetchOutcome::Failed => {
                    // With a list on screen the error would be easy to miss
                    if had_data {
                        if let Some(error) = &app.model.servers.error {
                            let message = format!("Error: {}", error.message);
                            app.model.show_toast(message);
                        }
                    }
                }
                FetchOutcome::Stale => {}
            }
        }
    }
}
