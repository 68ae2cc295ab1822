use utoipa::OpenApi;

use crate::core::models::{CurrentTime, ErrorBody};
use crate::server::__path_get_current_time;

#[derive(OpenApi)]
#[openapi(
    paths(get_current_time),
    components(schemas(CurrentTime, ErrorBody)),
    tags(
        (name = "time", description = "Current time in several textual representations")
    ),
    info(
        title = "Time API",
        version = "v1",
        description = "Reports the current instant as RFC 1123, UNIX epoch seconds and universal sortable/full strings",
    ),
    servers(
        (url = "/", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_json() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[cfg(test)]
mod tests {
    use super::get_openapi_json;

    #[test]
    fn test_document_describes_time_route() {
        let doc = get_openapi_json();

        assert!(doc.paths.paths.contains_key("/api/time"));

        let schemas = doc.components.expect("components").schemas;
        assert!(schemas.contains_key("CurrentTime"));
        assert!(schemas.contains_key("ErrorBody"));
    }

    #[test]
    fn test_schema_uses_camel_case() {
        let json = serde_json::to_value(get_openapi_json()).unwrap();
        let properties = &json["components"]["schemas"]["CurrentTime"]["properties"];

        for field in [
            "timestamp",
            "rfc1123",
            "unixSeconds",
            "universalSortable",
            "universalFull",
        ] {
            assert!(properties.get(field).is_some(), "missing {field}");
        }
    }
}
