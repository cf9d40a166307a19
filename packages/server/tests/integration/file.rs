use serde_json::json;

use crate::common::{TestApp, routes};

mod file_creation {
    use super::*;

    #[tokio::test]
    async fn create_echoes_timestamp_in_canonical_format() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::FILES,
                &json!({
                    "path": "/neodc/sst/20200101.nc",
                    "product_id": 1,
                    "dateTime": "2020-01-01 06:30:00",
                    "level": "L4",
                }),
            )
            .await;

        assert_eq!(res.status, 201);
        let file = &res.body["file"];
        assert_eq!(file["path"], "/neodc/sst/20200101.nc");
        assert_eq!(file["dateTime"], "2020-01-01 06:30:00");
        assert_eq!(file["level"], "L4");
        assert_eq!(file["product_id"], 1);
    }

    #[tokio::test]
    async fn omitted_fields_take_defaults() {
        let app = TestApp::spawn().await;

        let res = app
            .post(routes::FILES, &json!({ "path": "/a.nc", "product_id": 2 }))
            .await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["file"]["dateTime"], "1900-01-01 00:00:00");
        assert_eq!(res.body["file"]["level"], "");
    }

    #[tokio::test]
    async fn malformed_timestamp_creates_nothing() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::FILES,
                &json!({ "path": "/a.nc", "product_id": 1, "dateTime": "2020-01-01" }),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");

        let list = app.get(routes::FILES).await;
        assert_eq!(list.body, json!({ "files": [] }));
    }

    #[tokio::test]
    async fn missing_path_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.post(routes::FILES, &json!({ "product_id": 1 })).await;

        assert_eq!(res.status, 400);
    }

    #[tokio::test]
    async fn overlong_level_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::FILES,
                &json!({ "path": "/a.nc", "product_id": 1, "level": "LEVEL-0000A" }),
            )
            .await;

        assert_eq!(res.status, 400);
    }
}

mod file_updates {
    use super::*;

    #[tokio::test]
    async fn timestamp_update_round_trips() {
        let app = TestApp::spawn().await;
        let id = app.create_file("/a.nc", 1, "2020-01-01 00:00:00").await;

        let res = app
            .put(&routes::file(id), &json!({ "dateTime": "2021-06-01 12:00:00" }))
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["file"]["dateTime"], "2021-06-01 12:00:00");
        assert_eq!(res.body["file"]["path"], "/a.nc");
        assert_eq!(res.body["file"]["level"], "L3");
    }

    #[tokio::test]
    async fn malformed_timestamp_rejects_whole_update() {
        let app = TestApp::spawn().await;
        let id = app.create_file("/a.nc", 1, "2020-01-01 00:00:00").await;

        let res = app
            .put(
                &routes::file(id),
                &json!({ "path": "/b.nc", "dateTime": "01/06/2021" }),
            )
            .await;
        assert_eq!(res.status, 400);

        let res = app.get(&routes::file(id)).await;
        assert_eq!(res.body["file"]["path"], "/a.nc");
        assert_eq!(res.body["file"]["dateTime"], "2020-01-01 00:00:00");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.put(&routes::file(9), &json!({ "level": "L2" })).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }
}

mod file_deletion {
    use super::*;

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let app = TestApp::spawn().await;
        let id = app.create_file("/a.nc", 1, "2020-01-01 00:00:00").await;

        let res = app.delete(&routes::file(id)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!({ "result": true }));

        assert_eq!(app.get(&routes::file(id)).await.status, 404);
        assert_eq!(app.delete(&routes::file(id)).await.status, 404);
    }
}

mod api_docs {
    use super::*;

    #[tokio::test]
    async fn openapi_document_lists_catalog_paths() {
        let app = TestApp::spawn().await;

        let res = app.get("/api-docs/openapi.json").await;

        assert_eq!(res.status, 200);
        let paths = &res.body["paths"];
        for path in [
            "/experiments/",
            "/experiments/{id}",
            "/products/",
            "/products/{id}",
            "/files/",
            "/files/{id}",
        ] {
            assert!(paths.get(path).is_some(), "missing path {path}");
        }

        assert_eq!(paths["/products/{id}"]["get"]["summary"], "Get a product by ID");
        assert_eq!(paths["/products/"]["post"]["summary"], "Create a product");
    }
}
