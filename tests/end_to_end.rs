//! Full scan against a mocked GitHub API, rendered to Markdown.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use repolens::report::{self, OutputFormat};
use repolens::{GitHubClient, PipelineConfig, PrimaryLanguagePolicy, ScanPipeline, TaggingEngine};

fn repo_json(name: &str, stars: u32, language: &str) -> serde_json::Value {
    serde_json::json!({
        "id": stars,
        "name": name,
        "full_name": format!("octo/{}", name),
        "owner": {"login": "octo"},
        "html_url": format!("https://github.com/octo/{}", name),
        "fork": false,
        "stargazers_count": stars,
        "language": language,
        "created_at": format!("2021-0{}-01T00:00:00Z", stars % 9 + 1),
        "updated_at": "2024-04-01T00:00:00Z"
    })
}

fn file(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "encoding": "base64",
        "content": STANDARD.encode(text)
    }))
}

async fn mount_get(server: &MockServer, url_path: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn mock_account() -> MockServer {
    let server = MockServer::start().await;

    mount_get(
        &server,
        "/users/octo/repos",
        ResponseTemplate::new(200).set_body_json(serde_json::json!([
            repo_json("web", 3, "TypeScript"),
            repo_json("api", 10, "Python"),
            repo_json("notes", 1, "Markdown"),
        ])),
    )
    .await;

    // web: node project with a Dockerfile, no CI
    mount_get(
        &server,
        "/repos/octo/web/languages",
        ResponseTemplate::new(200).set_body_string(r#"{"TypeScript": 900, "CSS": 100}"#),
    )
    .await;
    mount_get(
        &server,
        "/repos/octo/web/contents/package.json",
        file(r#"{"dependencies": {"react": "^18.0"}, "devDependencies": {"typescript": "^5.0"}}"#),
    )
    .await;
    mount_get(&server, "/repos/octo/web/contents/Dockerfile", file("FROM node:20")).await;

    // api: python project with CI
    mount_get(
        &server,
        "/repos/octo/api/languages",
        ResponseTemplate::new(200).set_body_string(r#"{"Python": 5000}"#),
    )
    .await;
    mount_get(
        &server,
        "/repos/octo/api/contents/requirements.txt",
        file("Django==4.2\nrequests"),
    )
    .await;
    mount_get(
        &server,
        "/repos/octo/api/contents/.github/workflows",
        ResponseTemplate::new(200).set_body_json(serde_json::json!([{"name": "test.yml"}])),
    )
    .await;

    // notes: languages endpoint fails, nothing else present
    mount_get(
        &server,
        "/repos/octo/notes/languages",
        ResponseTemplate::new(500),
    )
    .await;

    server
}

fn pipeline(server: &MockServer) -> ScanPipeline {
    let client = GitHubClient::new("test-token")
        .unwrap()
        .with_base_url(server.uri());
    ScanPipeline::new(client, TaggingEngine::new(), PipelineConfig::default())
}

#[tokio::test]
async fn test_scan_tags_each_repository() {
    let server = mock_account().await;
    let scan = pipeline(&server).scan("octo").await.unwrap();

    let web = &scan.analyses["web"];
    assert!(web.has_package_json && web.has_dockerfile && !web.has_ci);
    assert_eq!(web.frameworks.iter().collect::<Vec<_>>(), vec!["react"]);
    assert_eq!(web.tools.iter().collect::<Vec<_>>(), vec!["typescript", "docker"]);

    let api = &scan.analyses["api"];
    assert!(api.has_python_requirements && api.has_ci && !api.has_package_json);
    assert_eq!(api.frameworks.iter().collect::<Vec<_>>(), vec!["django"]);
    assert_eq!(api.tools.iter().collect::<Vec<_>>(), vec!["github-actions"]);

    let notes = &scan.analyses["notes"];
    assert!(notes.frameworks.is_empty() && notes.tools.is_empty());
    assert!(!scan.languages.contains_key("notes"));
}

#[tokio::test]
async fn test_dashboard_from_scan() {
    let server = mock_account().await;
    let scan = pipeline(&server).scan("octo").await.unwrap();

    let md = report::render(&scan, OutputFormat::Dashboard, PrimaryLanguagePolicy::FirstListed)
        .unwrap();

    assert!(md.starts_with("# octo's GitHub Profile Report"));
    assert!(md.contains("- **Total Repositories:** 3\n"));
    assert!(md.contains("- **Total Stars:** ⭐ 14\n"));

    let rows: Vec<_> = md.lines().filter(|l| l.starts_with("| [")).collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].starts_with("| [api]("));
    assert!(rows[1].starts_with("| [web]("));
    assert!(rows[2].starts_with("| [notes]("));
    assert!(rows[1].contains("| react | typescript, docker |"));
    // notes falls back to the language reported by the listing
    assert!(rows[2].contains("| 1 | Markdown | - | - |"));

    assert!(md.contains("## Frameworks"));
    assert!(md.contains("## Tools & Technologies"));
    assert!(md.contains("`django` • `docker` • `github-actions` • `react` • `typescript`"));
}

#[tokio::test]
async fn test_listing_failure_is_fatal() {
    let server = MockServer::start().await;
    mount_get(&server, "/users/octo/repos", ResponseTemplate::new(401)).await;

    assert!(pipeline(&server).scan("octo").await.is_err());
}
