use crate::api::api_service;
use crate::app_data::AppData;
use crate::config::BootstrapSettings;

/// Render the OpenAPI document as JSON or YAML
pub fn render_spec(settings: &BootstrapSettings, app_data: &AppData, yaml: bool) -> String {
    let service = api_service(app_data, &settings.public_url());

    if yaml {
        service.spec_yaml()
    } else {
        service.spec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;
    use std::sync::Arc;

    fn settings() -> BootstrapSettings {
        BootstrapSettings::from_env_provider(Arc::new(MockEnvironment::empty()))
            .expect("settings should load")
    }

    #[test]
    fn test_json_spec_lists_item_paths() {
        let settings = settings();
        let app_data = AppData::init(&settings);

        let spec = render_spec(&settings, &app_data, false);
        let document: serde_json::Value = serde_json::from_str(&spec).expect("spec should be JSON");

        let paths = document["paths"].as_object().expect("paths object");
        assert!(paths.contains_key("/items"));
        assert!(paths.contains_key("/items/{id}"));
        assert!(paths.contains_key("/health"));
        assert_eq!(document["info"]["title"], "Catalog API");
    }

    #[test]
    fn test_yaml_spec_mentions_items() {
        let settings = settings();
        let app_data = AppData::init(&settings);

        let spec = render_spec(&settings, &app_data, true);

        assert!(spec.contains("/items"));
        assert!(spec.contains("openapi"));
    }
}
