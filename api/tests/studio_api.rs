mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use std::future::IntoFuture;

use common::{FAILING_DISH, FAILING_MENU, FakeGemini, SLOW_MENU, id_of, parse, studio};
use serde_json::{Value, json};

#[tokio::test]
async fn health_and_catalogs_are_served() {
    let server = studio(&FakeGemini::default()).await;

    server.get("/health").await.assert_json(&json!({ "status": "ok" }));

    let aesthetics = server.get("/aesthetics").await.json::<Value>();
    let ids: Vec<&str> = aesthetics["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["RUSTIC", "MODERN", "SOCIAL"]);

    let ratios = server.get("/aspect-ratios").await.json::<Value>();
    assert_eq!(ratios["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn settings_can_be_changed_partially() {
    let server = studio(&FakeGemini::default()).await;

    let initial = server.get("/settings").await.json::<Value>();
    assert_eq!(initial["data"]["selected_style"], "RUSTIC");
    assert_eq!(initial["data"]["default_aspect_ratio"], "4:3");

    let updated = server
        .put("/settings")
        .json(&json!({ "selected_style": "SOCIAL" }))
        .await;
    updated.assert_status_ok();
    let updated = updated.json::<Value>();
    assert_eq!(updated["data"]["selected_style"], "SOCIAL");
    assert_eq!(updated["data"]["default_aspect_ratio"], "4:3");

    server
        .put("/settings")
        .json(&json!({ "default_aspect_ratio": "2:1" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn parsed_menu_becomes_the_dish_list() {
    let fake = FakeGemini::with_menu(&[("Dish X", "tasty")]);
    let server = studio(&fake).await;

    let dishes = parse(&server, "Dish X: tasty").await;

    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0]["name"], "Dish X");
    assert_eq!(dishes[0]["description"], "tasty");
    assert_eq!(dishes[0]["image_url"], Value::Null);
    assert_eq!(dishes[0]["is_generating"], false);

    let listed = server.get("/dishes").await.json::<Value>();
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn blank_menu_is_rejected() {
    let fake = FakeGemini::default();
    let server = studio(&fake).await;

    let response = server.post("/menu/parse").json(&json!({ "text": "" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "E_BAD_REQUEST");
    assert_eq!(fake.calls_to(":generateContent"), 0);
}

#[tokio::test]
async fn failed_parse_keeps_dishes_and_notifies() {
    let fake = FakeGemini::with_menu(&[("Soup", "hot")]);
    let server = studio(&fake).await;
    let before = parse(&server, "Soup").await;

    let response = server
        .post("/menu/parse")
        .json(&json!({ "text": FAILING_MENU }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let after = server.get("/dishes").await.json::<Value>();
    assert_eq!(after["data"].as_array().unwrap(), &before);

    let notifications = server.get("/notifications").await.json::<Value>();
    assert_eq!(
        notifications["data"][0]["message"],
        "Could not understand the menu. Please try again with clearer text."
    );
}

#[tokio::test]
async fn second_parse_is_refused_while_one_is_running() {
    let fake = FakeGemini::with_menu(&[("Soup", "hot")]);
    let server = studio(&fake).await;

    let first = server
        .post("/menu/parse")
        .json(&json!({ "text": SLOW_MENU }))
        .into_future();

    let overlap = async {
        fake.parse_started().await;
        let second = server
            .post("/menu/parse")
            .json(&json!({ "text": "Soup" }))
            .await;
        fake.release_parse();
        second
    };

    let (first, second) = tokio::join!(first, overlap);

    second.assert_status(StatusCode::CONFLICT);
    assert_eq!(second.json::<Value>()["code"], "E_CONFLICT");
    first.assert_status_ok();
    assert_eq!(fake.calls_to(":generateContent"), 1);

    // the flag is released once the first parse settles
    parse(&server, "Soup").await;
}

#[tokio::test]
async fn sample_menu_can_be_parsed() {
    let fake = FakeGemini::with_menu(&[("Truffle Arancini", "crispy")]);
    let server = studio(&fake).await;

    let sample = server.get("/menu/sample").await.json::<Value>();
    let text = sample["data"]["text"].as_str().unwrap();
    assert!(text.contains("Truffle Arancini"));

    let dishes = parse(&server, text).await;
    assert_eq!(dishes.len(), 1);
}

#[tokio::test]
async fn generate_accepts_a_request_without_body() {
    let fake = FakeGemini::with_menu(&[("Risotto", "creamy")]);
    let server = studio(&fake).await;
    let dish_id = id_of(&parse(&server, "Risotto").await[0]);

    let response = server.post(&format!("/dishes/{dish_id}/generate")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["status"], "generated");

    server
        .post("/dishes/generate-all")
        .add_query_param("wait", "true")
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn upload_with_content_type_parameters_downloads_cleanly() {
    let fake = FakeGemini::with_menu(&[("Pie", "apple")]);
    let server = studio(&fake).await;
    let dish_id = id_of(&parse(&server, "Pie").await[0]);

    server
        .post(&format!("/dishes/{dish_id}/image"))
        .multipart(
            MultipartForm::new().add_part(
                "file",
                Part::bytes(b"png".as_slice())
                    .file_name("pie.png")
                    .mime_type("image/png; charset=binary"),
            ),
        )
        .await
        .assert_status_ok();

    let response = server.get(&format!("/dishes/{dish_id}/image")).await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/png");
    assert_eq!(response.as_bytes().to_vec(), b"png".to_vec());
}

#[tokio::test]
async fn generate_stores_a_data_uri() {
    let fake = FakeGemini::with_menu(&[("Risotto", "creamy")]);
    let server = studio(&fake).await;
    let dish_id = id_of(&parse(&server, "Risotto").await[0]);

    let response = server
        .post(&format!("/dishes/{dish_id}/generate"))
        .json(&json!({ "aspect_ratio": "1:1" }))
        .await;

    response.assert_status_ok();
    let outcome = response.json::<Value>();
    assert_eq!(outcome["data"]["status"], "generated");
    assert_eq!(
        outcome["data"]["dish"]["image_url"],
        format!("data:image/jpeg;base64,{}", common::PHOTO_B64)
    );
    assert_eq!(outcome["data"]["dish"]["is_generating"], false);
    assert_eq!(fake.calls_to(":predict"), 1);
}

#[tokio::test]
async fn unknown_dish_is_skipped_without_a_request() {
    let fake = FakeGemini::with_menu(&[("Risotto", "creamy")]);
    let server = studio(&fake).await;
    parse(&server, "Risotto").await;

    let response = server
        .post(&format!("/dishes/{}/generate", uuid::Uuid::new_v4()))
        .json(&json!({}))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["data"],
        json!({ "status": "skipped", "reason": "not_found" })
    );
    assert_eq!(fake.calls_to(":predict"), 0);
}

#[tokio::test]
async fn failed_generation_is_reported_and_dish_stays_idle() {
    let fake = FakeGemini::with_menu(&[(FAILING_DISH, "charred")]);
    let server = studio(&fake).await;
    let dish_id = id_of(&parse(&server, "Burnt").await[0]);

    server
        .post(&format!("/dishes/{dish_id}/generate"))
        .json(&json!({}))
        .await
        .assert_status(StatusCode::BAD_GATEWAY);

    let dish = server.get(&format!("/dishes/{dish_id}")).await.json::<Value>();
    assert_eq!(dish["data"]["image_url"], Value::Null);
    assert_eq!(dish["data"]["is_generating"], false);

    let notifications = server.get("/notifications?limit=5").await.json::<Value>();
    assert_eq!(
        notifications["data"][0]["message"],
        format!("Failed to generate image for {FAILING_DISH}")
    );
    assert_eq!(notifications["data"][0]["dish_id"], dish_id);
}

#[tokio::test]
async fn generate_all_requests_only_missing_images() {
    let fake = FakeGemini::with_menu(&[("A", "has photo"), ("B", "needs photo")]);
    let server = studio(&fake).await;
    let dishes = parse(&server, "A\nB").await;

    server
        .post(&format!("/dishes/{}/image", id_of(&dishes[0])))
        .multipart(
            MultipartForm::new().add_part(
                "file",
                Part::bytes(b"png".as_slice())
                    .file_name("a.png")
                    .mime_type("image/png"),
            ),
        )
        .await
        .assert_status_ok();

    let response = server
        .post("/dishes/generate-all")
        .add_query_param("wait", "true")
        .json(&json!({}))
        .await;

    response.assert_status_ok();
    let report = response.json::<Value>();
    assert_eq!(report["data"]["results"].as_array().unwrap().len(), 1);
    assert_eq!(report["data"]["results"][0]["dish_id"], id_of(&dishes[1]));
    assert_eq!(report["data"]["results"][0]["status"], "generated");
    assert_eq!(fake.calls_to(":predict"), 1);

    let first = server
        .get(&format!("/dishes/{}", id_of(&dishes[0])))
        .await
        .json::<Value>();
    assert_eq!(first["data"]["image_url"], "data:image/png;base64,cG5n");
}

#[tokio::test]
async fn generate_all_is_accepted_and_settles_in_background() {
    let fake = FakeGemini::with_menu(&[("A", "a"), ("B", "b")]);
    let server = studio(&fake).await;
    parse(&server, "A\nB").await;

    let response = server.post("/dishes/generate-all").json(&json!({})).await;

    response.assert_status(StatusCode::ACCEPTED);
    assert_eq!(
        response.json::<Value>()["data"]["dish_ids"]
            .as_array()
            .unwrap()
            .len(),
        2
    );

    let mut settled = false;
    for _ in 0..100 {
        let dishes = server.get("/dishes").await.json::<Value>();
        if dishes["data"]
            .as_array()
            .unwrap()
            .iter()
            .all(|d| d["image_url"].is_string() && d["is_generating"] == false)
        {
            settled = true;
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }
    assert!(settled);
}

#[tokio::test]
async fn upload_rejects_non_images() {
    let fake = FakeGemini::with_menu(&[("Pie", "apple")]);
    let server = studio(&fake).await;
    let dish_id = id_of(&parse(&server, "Pie").await[0]);

    server
        .post(&format!("/dishes/{dish_id}/image"))
        .multipart(
            MultipartForm::new().add_part(
                "file",
                Part::bytes(b"hello".as_slice())
                    .file_name("notes.txt")
                    .mime_type("text/plain"),
            ),
        )
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .post(&format!("/dishes/{}/image", uuid::Uuid::new_v4()))
        .multipart(
            MultipartForm::new().add_part(
                "file",
                Part::bytes(b"png".as_slice())
                    .file_name("a.png")
                    .mime_type("image/png"),
            ),
        )
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn download_names_file_after_dish() {
    let fake = FakeGemini::with_menu(&[("Wild Mushroom Risotto", "earthy")]);
    let server = studio(&fake).await;
    let dish_id = id_of(&parse(&server, "Wild Mushroom Risotto").await[0]);

    server
        .get(&format!("/dishes/{dish_id}/image"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    server
        .post(&format!("/dishes/{dish_id}/generate"))
        .json(&json!({}))
        .await
        .assert_status_ok();

    let response = server.get(&format!("/dishes/{dish_id}/image")).await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/jpeg");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"lumina-feast-wild-mushroom-risotto.jpg\""
    );
    assert_eq!(response.as_bytes().to_vec(), b"photo".to_vec());
}

#[tokio::test]
async fn aspect_ratio_override_is_stored_and_cleared() {
    let fake = FakeGemini::with_menu(&[("Tart", "lemon")]);
    let server = studio(&fake).await;
    let dish_id = id_of(&parse(&server, "Tart").await[0]);

    let set = server
        .put(&format!("/dishes/{dish_id}/aspect-ratio"))
        .json(&json!({ "aspect_ratio": "9:16" }))
        .await
        .json::<Value>();
    assert_eq!(set["data"]["aspect_ratio"], "9:16");

    let cleared = server
        .put(&format!("/dishes/{dish_id}/aspect-ratio"))
        .json(&json!({ "aspect_ratio": null }))
        .await
        .json::<Value>();
    assert_eq!(cleared["data"]["aspect_ratio"], Value::Null);
}

#[tokio::test]
async fn clearing_removes_every_dish() {
    let fake = FakeGemini::with_menu(&[("A", "a"), ("B", "b")]);
    let server = studio(&fake).await;
    parse(&server, "A\nB").await;

    server.delete("/dishes").await.assert_status(StatusCode::NO_CONTENT);

    let listed = server.get("/dishes").await.json::<Value>();
    assert_eq!(listed["data"], json!([]));
}
