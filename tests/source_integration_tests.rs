// Record Source Integration Tests
//
// Purpose: Supabase source against a mock PostgREST endpoint
// Run with: cargo test --test source_integration_tests

#[cfg(feature = "api")]
mod supabase_tests {
    use plant_encyclopedia::{
        filter_plants, FilterState, RecordSource, Season, SourceError, SupabaseSource,
    };
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_table(body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/plants"))
            .and(query_param("select", "*"))
            .and(header("apikey", "anon-key"))
            .and(header("authorization", "Bearer anon-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_fetches_and_normalizes_rows() {
        let server = mock_table(json!([
            {"id": 1, "name": "Wild Garlic", "latinName": "Allium ursinum",
             "description": "", "img": "https://cdn.example.org/garlic.jpg",
             "season": ["Spring"], "landscape": "Forest"},
            {"id": 2, "name": "Nettle", "img": "/nettle.jpg",
             "season": "Spring", "landscape": "Grassland"},
            {"id": 2, "name": "Nettle (copy)", "img": "/nettle.jpg",
             "season": "Spring", "landscape": "Grassland"},
            {"id": 3, "name": "Broken", "img": "x.jpg",
             "season": null, "landscape": "Forest"}
        ]))
        .await;

        let source = SupabaseSource::new(&server.uri(), "anon-key", "plants");
        let records = source.fetch_all().await;

        // The null season row is kept; it only shows under "All"
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(records[0].description, None);
        assert_eq!(records[1].season, Season::Single("Spring".to_string()));
        assert!(records[2].season.values().is_empty());

        let spring = filter_plants(&records, &FilterState::new("Spring", "All"));
        assert_eq!(spring.len(), 2);
    }

    #[tokio::test]
    async fn test_error_status_yields_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/plants"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
            .mount(&server)
            .await;

        let source = SupabaseSource::new(&server.uri(), "wrong", "plants");

        match source.try_fetch().await {
            Err(SourceError::Status { status, body }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "Invalid API key");
            }
            other => panic!("expected status error, got {:?}", other),
        }
        assert!(source.fetch_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_non_array_body_yields_empty() {
        let server = mock_table(json!({"message": "not a list"})).await;
        let source = SupabaseSource::new(&server.uri(), "anon-key", "plants");
        assert!(source.fetch_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_service_yields_empty() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let source = SupabaseSource::new(&uri, "anon-key", "plants");
        assert!(source.fetch_all().await.is_empty());
    }
}
