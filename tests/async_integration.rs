//! The async facade against a local mock API

use ghstats::{AsyncStatsClient, CardConfig, Error};
use tiny_http::{Header, Response, Server};

fn start_server() -> String {
    let server = Server::http("127.0.0.1:0").unwrap();
    let base = format!("http://{}", server.server_addr());

    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let path = request.url().split('?').next().unwrap_or("").to_string();
            let json = "Content-Type: application/json".parse::<Header>().unwrap();
            let response = match path.as_str() {
                "/users/mona" => Response::from_string(
                    r#"{"login":"mona","name":"Mona Lisa","public_repos":120,"followers":3}"#,
                )
                .with_header(json),
                "/users/mona/repos" => {
                    // Slow listing so the profile usually answers first
                    std::thread::sleep(std::time::Duration::from_millis(50));
                    Response::from_string(r#"[{"stargazers_count":1000},{"stargazers_count":1}]"#)
                        .with_header(json)
                }
                _ => Response::from_string("{}").with_status_code(404),
            };
            let _ = request.respond(response);
        }
    });

    base
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_async_generate_card() {
    let base = start_server();
    let client = AsyncStatsClient::new(Some(CardConfig {
        api_base: base,
        timeout_ms: 5000,
        ..Default::default()
    }))
    .await
    .expect("client");

    let card = client.generate_card("mona").await.expect("card");
    assert!(card.svg().contains("Mona LisaのGitHub統計"));
    assert!(card.svg().contains(">1,001</text>"));
    assert!(card.svg().contains(">120</text>"));
}

#[tokio::test]
async fn test_async_not_found() {
    let base = start_server();
    let client = AsyncStatsClient::new(Some(CardConfig {
        api_base: base,
        timeout_ms: 5000,
        ..Default::default()
    }))
    .await
    .expect("client");

    let err = client.collect_stats("nobody").await.unwrap_err();
    assert!(matches!(err, Error::UserNotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_async_rejects_bad_api_base() {
    let res = AsyncStatsClient::new(Some(CardConfig {
        api_base: "::not-a-url::".to_string(),
        ..Default::default()
    }))
    .await;
    assert!(matches!(res, Err(Error::ConfigError(_))));
}
