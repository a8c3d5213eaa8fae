use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::PhysicianResponseData;
use crate::config::PaginationConfig;
use crate::domain::pagination::Page;
use crate::domain::pagination::PageRequest;
use crate::domain::physician::models::Physician;
use crate::domain::physician::ports::PhysicianServicePort;
use crate::inbound::http::router::AppState;
use crate::physician::errors::PhysicianError;

/// List active physicians, ordered by name.
pub async fn list_physicians(
    State(state): State<AppState>,
    Query(query): Query<ListPhysiciansQuery>,
) -> Result<ApiSuccess<PageResponseData<PhysicianResponseData>>, ApiError> {
    let request = query.page_request(&state.pagination)?;

    state
        .physician_service
        .list_physicians(request)
        .await
        .map_err(ApiError::from)
        .map(|page| ApiSuccess::new(StatusCode::OK, page.into()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListPhysiciansQuery {
    page: Option<u32>,
    size: Option<u32>,
}

impl ListPhysiciansQuery {
    /// Missing or zero size falls back to the configured default; larger
    /// sizes are clamped to the configured maximum.
    fn page_request(&self, config: &PaginationConfig) -> Result<PageRequest, PhysicianError> {
        let size = match self.size {
            None | Some(0) => config.default_page_size,
            Some(size) => size.min(config.max_page_size),
        };

        Ok(PageRequest::new(self.page.unwrap_or(0), size)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageResponseData<T: Serialize + PartialEq> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl From<Page<Physician>> for PageResponseData<PhysicianResponseData> {
    fn from(page: Page<Physician>) -> Self {
        let total_pages = page.total_pages();
        let page = page.map(|physician| PhysicianResponseData::from(&physician));

        Self {
            content: page.items,
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages,
        }
    }
}
