use flavorcast::api::handler::handle_request;
use flavorcast::core::config::AppConfig;
use flavorcast::core::models::RequestEnvelope;
use flavorcast::flavors::fetch_seasonal_flavors;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Page body shaped like the real flavors page: one flavor per
/// `.product > strong`, with the pretty-printing newlines the scrape
/// pipeline has to filter out.
const FLAVORS_FIXTURE: &str = "<html><body>\
    <div class=\"product\"><strong>\n melted chocolate \n </strong></div>\
    <div class=\"product\"><strong>\n honey lavender \n </strong></div>\
    <div class=\"sidebar\"><strong>\n cart \n </strong></div>\
    </body></html>";

fn oneshot_envelope() -> RequestEnvelope {
    serde_json::from_str(
        r#"{
            "version": "1.0",
            "session": {
                "new": true,
                "sessionId": "amzn1.echo-api.session.test",
                "application": {"applicationId": "amzn1.echo-sdk-ams.app.test"},
                "user": {"userId": "amzn1.account.test"}
            },
            "request": {
                "type": "IntentRequest",
                "requestId": "amzn1.echo-api.request.test",
                "intent": {"name": "OneshotFlavorsIntent"}
            }
        }"#,
    )
    .expect("fixture envelope parses")
}

async fn mock_flavors_server(template: ResponseTemplate) -> (MockServer, AppConfig) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flavors/seasonal"))
        .respond_with(template)
        .mount(&server)
        .await;

    let config = AppConfig {
        flavors_url: format!("{}/flavors/seasonal", server.uri()),
        application_id: None,
    };
    (server, config)
}

#[tokio::test]
async fn scrapes_and_speaks_the_flavor_list() {
    let (_server, config) =
        mock_flavors_server(ResponseTemplate::new(200).set_body_string(FLAVORS_FIXTURE)).await;
    let client = reqwest::Client::new();

    let response = handle_request(&config, &client, &oneshot_envelope())
        .await
        .expect("handler succeeds")
        .expect("a response is produced");

    assert_eq!(
        response.output_speech.text,
        "melted chocolate honey lavender"
    );

    let card = response.card.expect("response carries a card");
    assert_eq!(card.title, "MollyMoon");
    assert_eq!(card.content, "melted chocolate honey lavender");
    assert!(response.should_end_session);
}

#[tokio::test]
async fn card_content_matches_spoken_text() {
    let (_server, config) = mock_flavors_server(
        ResponseTemplate::new(200)
            .set_body_string("<div class=\"product\"><strong>\n vegan coconut \n </strong></div>"),
    )
    .await;
    let client = reqwest::Client::new();

    let response = handle_request(&config, &client, &oneshot_envelope())
        .await
        .unwrap()
        .unwrap();

    let card = response.card.unwrap();
    assert_eq!(response.output_speech.text, card.content);
    assert_eq!(response.output_speech.text, "vegan coconut");
}

#[tokio::test]
async fn non_success_status_produces_no_response() {
    let (_server, config) =
        mock_flavors_server(ResponseTemplate::new(503).set_body_string("maintenance")).await;
    let client = reqwest::Client::new();

    let result = handle_request(&config, &client, &oneshot_envelope())
        .await
        .expect("the invocation itself does not fail");

    assert!(result.is_none(), "no response method may be invoked");
}

#[tokio::test]
async fn transport_error_produces_no_response() {
    // Port 1 is never listening; the connection is refused immediately.
    let config = AppConfig {
        flavors_url: "http://127.0.0.1:1/flavors/seasonal".to_string(),
        application_id: None,
    };
    let client = reqwest::Client::new();

    let result = handle_request(&config, &client, &oneshot_envelope())
        .await
        .expect("the invocation itself does not fail");

    assert!(result.is_none(), "no response method may be invoked");
}

#[tokio::test]
async fn fetch_reports_bad_status_to_its_caller() {
    let (_server, config) = mock_flavors_server(ResponseTemplate::new(404)).await;
    let client = reqwest::Client::new();

    let err = fetch_seasonal_flavors(&client, &config)
        .await
        .expect_err("404 must surface as an error");

    assert_eq!(format!("{err}"), "Flavors page returned status 404");
}

#[tokio::test]
async fn empty_page_speaks_an_empty_string() {
    // Matches the shipped behavior: a page with no products still answers.
    let (_server, config) =
        mock_flavors_server(ResponseTemplate::new(200).set_body_string("<html></html>")).await;
    let client = reqwest::Client::new();

    let response = handle_request(&config, &client, &oneshot_envelope())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(response.output_speech.text, "");
}
