#![allow(dead_code)]

use std::sync::{Arc, Once};

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    routing::{get, patch},
};
use pantry_contracts::api::dto::{PagedRequest, PagedResponse, UpdateSiteInfoRequest};
use pantry_contracts::application::services::SiteInfoService;
use pantry_contracts::config::Config;
use pantry_contracts::domain::entities::SiteInfo;
use pantry_contracts::error::AppError;
use pantry_contracts::infrastructure::InMemorySiteInfoRepository;
use pantry_contracts::telemetry;
use serde_json::{Value, json};

pub const TOTAL_ITEMS: i64 = 237;

pub type Service = SiteInfoService<InMemorySiteInfoRepository>;

static TRACING: Once = Once::new();

/// Installs the crate's subscriber once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let config = Config {
            log_level: "pantry_contracts=debug".to_string(),
            ..Config::default()
        };
        telemetry::init_tracing(&config).expect("tracing subscriber installs once");
        config.print_summary();
    });
}

pub fn seeded_site_info() -> SiteInfo {
    SiteInfo {
        about_text: "Neighbours helping neighbours".to_string(),
        programs_overview: "Weekly groceries, utility assistance".to_string(),
        hours_text: "Tue & Thu 10:00-14:00".to_string(),
        location_text: "12 Main St, rear entrance".to_string(),
        contact_text: "pantry@example.org".to_string(),
        what_to_bring_text: "Photo ID and proof of address".to_string(),
    }
}

pub fn site_info_json(info: &SiteInfo) -> Value {
    json!({
        "aboutText": info.about_text,
        "programsOverview": info.programs_overview,
        "hoursText": info.hours_text,
        "locationText": info.location_text,
        "contactText": info.contact_text,
        "whatToBringText": info.what_to_bring_text,
    })
}

/// Lists the integers `0..TOTAL_ITEMS` one page at a time.
async fn list_numbers(
    State(config): State<Arc<Config>>,
    params: Result<Query<PagedRequest>, QueryRejection>,
) -> Result<Json<PagedResponse<i64>>, AppError> {
    let Query(params) = params?;
    let (offset, limit) = params.validate_and_get_offset_limit(config.max_page_size)?;
    let items = (offset..TOTAL_ITEMS).take(limit as usize).collect();
    Ok(Json(PagedResponse::new(items, &params, TOTAL_ITEMS)))
}

async fn get_site_info(State(service): State<Arc<Service>>) -> Result<Json<Value>, AppError> {
    let info = service.get_site_info().await?;
    Ok(Json(site_info_json(&info)))
}

async fn update_site_info(
    State(service): State<Arc<Service>>,
    payload: Result<Json<UpdateSiteInfoRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(payload) = payload?;
    let info = service.update_site_info(payload).await?;
    Ok(Json(site_info_json(&info)))
}

pub fn list_router(config: Config) -> Router {
    init_tracing();
    Router::new()
        .route("/items", get(list_numbers))
        .with_state(Arc::new(config))
}

pub fn site_info_router(repository: InMemorySiteInfoRepository) -> Router {
    init_tracing();
    let service = Arc::new(SiteInfoService::new(Arc::new(repository)));
    Router::new()
        .route("/api/site-info", patch(update_site_info).get(get_site_info))
        .with_state(service)
}
