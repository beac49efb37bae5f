//! Network messages - communication between App and Network layers

use std::sync::Arc;

use crate::models::Country;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the full dataset
    LoadAll { id: u64 },
    /// Resolve the border codes of the country shown on a detail page
    ResolveBorders { id: u64, codes: Vec<String> },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Full dataset, sorted by name
    CountriesLoaded {
        id: u64,
        countries: Vec<Arc<Country>>,
    },
    /// Full dataset could not be fetched or decoded
    LoadFailed { id: u64, message: String },
    /// Border countries that resolved, in border-code order
    BordersResolved {
        id: u64,
        countries: Vec<Arc<Country>>,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::CountriesLoaded { id, .. } => *id,
            NetworkResponse::LoadFailed { id, .. } => *id,
            NetworkResponse::BordersResolved { id, .. } => *id,
        }
    }
}
