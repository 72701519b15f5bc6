// API layer - HTTP endpoints
pub mod health;
pub mod items;

pub use health::HealthApi;
pub use items::ItemsApi;

use poem::Route;
use poem_openapi::OpenApiService;

use crate::app_data::AppData;

pub type CatalogApis = (HealthApi, ItemsApi);

/// Build the OpenAPI service for every catalog endpoint
pub fn api_service(app_data: &AppData, server_url: &str) -> OpenApiService<CatalogApis, ()> {
    let apis = (HealthApi, ItemsApi::new(app_data.items_repository.clone()));

    OpenApiService::new(apis, "Catalog API", env!("CARGO_PKG_VERSION")).server(server_url)
}

/// Compose the HTTP routes: the API at the root, Swagger UI under
/// `/swagger` and the raw document at `/openapi.json`
pub fn build_routes(app_data: &AppData, server_url: &str) -> Route {
    let api_service = api_service(app_data, server_url);
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/swagger", ui)
        .at("/openapi.json", spec)
        .nest("/", api_service)
}
