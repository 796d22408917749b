//! Geolocation API fixtures.

use mockito::Mock;

use crate::TestContext;

impl TestContext {
    pub fn geo<'a>(&'a mut self) -> GeoFixtures<'a> {
        GeoFixtures { setup: self }
    }
}

pub struct GeoFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> GeoFixtures<'a> {
    /// Create a mock `GET /{ip}/json/` endpoint returning the provided location.
    ///
    /// # Arguments
    /// - `ip` - Address the lookup is made for
    /// - `country` - Value for `country_name`, omitted from the body when `None`
    /// - `region` - Value for `region`, omitted from the body when `None`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_geo_endpoint(
        &mut self,
        ip: &str,
        country: Option<&str>,
        region: Option<&str>,
        expected_requests: usize,
    ) -> Mock {
        let body = factory::mock_geo_body(ip, country, region);

        self.setup
            .server
            .mock("GET", format!("/{}/json/", ip).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}

pub mod factory {
    use serde_json::{json, Map, Value};

    /// Create a geolocation response body in the shape the lookup API returns.
    pub fn mock_geo_body(ip: &str, country: Option<&str>, region: Option<&str>) -> Value {
        let mut body = Map::new();
        body.insert("ip".to_string(), json!(ip));

        if let Some(country) = country {
            body.insert("country_name".to_string(), json!(country));
        }
        if let Some(region) = region {
            body.insert("region".to_string(), json!(region));
        }

        Value::Object(body)
    }
}
