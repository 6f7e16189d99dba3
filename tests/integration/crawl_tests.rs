//! Integration tests for the walk
//!
//! These tests use wiremock to serve small fake articles and run the full
//! fetch-select-stop loop end-to-end, with the link origin pointed at the mock
//! server.

use chrono::Utc;
use philosophy_walk::config::{Config, CrawlConfig};
use philosophy_walk::crawler::{walk, Crawler};
use philosophy_walk::output::{verdict_lines, OutputHandler, StdoutReport};
use philosophy_walk::{CrawlState, FetchError};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds an article page with the heading outside the content node
fn article(heading: &str, content: &str) -> String {
    format!(
        r#"<html><head><title>{heading} - Wikipedia</title></head><body>
        <div id="mw-navigation"><a href="/wiki/Main_Page">Main page</a></div>
        <h1 id="firstHeading"><span class="mw-page-title-main">{heading}</span></h1>
        <div id="mw-content-text"><div class="mw-parser-output">{content}</div></div>
        </body></html>"#
    )
}

/// Mounts an HTML article at `/wiki/{name}`
async fn mount_article(server: &MockServer, name: &str, heading: &str, content: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/wiki/{}", name)))
        .respond_with(ResponseTemplate::new(200).set_body_raw(article(heading, content), "text/html"))
        .mount(server)
        .await;
}

/// Creates a test configuration starting at `/wiki/{start}` on the mock server
fn create_test_config(base_url: &str, start: &str, max_pages: u32) -> Config {
    Config {
        crawl: CrawlConfig {
            start_url: format!("{}/wiki/{}", base_url, start),
            max_pages,
            origin: base_url.to_string(),
            request_timeout_secs: 5,
            ..CrawlConfig::default()
        },
        ..Config::default()
    }
}

#[tokio::test]
async fn test_chain_reaches_philosophy() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_article(
        &mock_server,
        "A",
        "A",
        r#"<p>Alpha is the <a href="/wiki/B">first letter</a>.</p>"#,
    )
    .await;
    mount_article(
        &mock_server,
        "B",
        "B",
        r#"<p>Beta follows <a href="/wiki/Philosophy">philosophy</a>.</p>"#,
    )
    .await;
    mount_article(
        &mock_server,
        "Philosophy",
        "Philosophy",
        r#"<p>Philosophy is the study of <a href="/wiki/Knowledge">knowledge</a>.</p>"#,
    )
    .await;

    let config = create_test_config(&base_url, "A", 10);
    let crawler = Crawler::new(&config).expect("client");

    let mut out: Vec<u8> = Vec::new();
    let report = crawler.run_with(&mut out).await;

    assert!(
        matches!(report.state, CrawlState::FoundPhilosophy { iterations: 2 }),
        "unexpected state {:?}",
        report.state
    );
    assert_eq!(report.pages_visited(), 3);
    assert_eq!(report.visited.len(), 3);

    StdoutReport::with_writer(&mut out)
        .write_report(&report)
        .unwrap();
    let printed = String::from_utf8(out).unwrap();
    assert_eq!(
        printed.lines().collect::<Vec<_>>(),
        vec![
            "A",
            "B",
            "Philosophy",
            "The Wiki phenomenon exist! Got to \"Philosophy\" page in 2 iterations",
            "The ten of the mostly used words in Wiki during our experiment are: \
             [('is', 2), ('philosophy', 2), ('the', 2), ('alpha', 1), ('beta', 1), \
             ('first', 1), ('follows', 1), ('knowledge', 1), ('letter', 1), ('of', 1)]",
            // 14 words over 3 pages
            "Average number of words into Wiki articles are: 4",
        ]
    );
}

#[tokio::test]
async fn test_walk_entry_point_reaches_philosophy() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_article(&mock_server, "A", "A", r#"<p><a href="/wiki/Philosophy">p</a></p>"#).await;
    mount_article(&mock_server, "Philosophy", "Philosophy", "<p>Done</p>").await;

    let config = create_test_config(&base_url, "A", 10);
    let report = walk(&config).await.expect("walk could not start");

    assert_eq!(
        report.steps.iter().map(|s| s.heading.as_str()).collect::<Vec<_>>(),
        vec!["A", "Philosophy"]
    );
    assert_eq!(
        verdict_lines(&report.state, &report.target_heading),
        vec!["The Wiki phenomenon exist! Got to \"Philosophy\" page in 1 iterations"]
    );
}

#[tokio::test]
async fn test_report_times_the_run_not_construction() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_article(&mock_server, "Philosophy", "Philosophy", "<p>Done</p>").await;

    let config = create_test_config(&base_url, "Philosophy", 10);
    let crawler = Crawler::new(&config).expect("client");

    tokio::time::sleep(Duration::from_millis(50)).await;
    let before_run = Utc::now();
    let report = crawler.run_with(&mut std::io::sink()).await;

    assert!(report.started_at >= before_run);
    assert!(report.finished_at >= report.started_at);
}

#[tokio::test]
async fn test_two_page_cycle_is_a_dead_end() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_article(&mock_server, "A", "A", r#"<p>See <a href="/wiki/B">B</a></p>"#).await;
    mount_article(&mock_server, "B", "B", r#"<p>See <a href="/wiki/A">A</a></p>"#).await;

    let config = create_test_config(&base_url, "A", 10);
    let report = walk(&config).await.expect("walk could not start");

    match &report.state {
        CrawlState::DeadEnd { url } => assert_eq!(url, &format!("{}/wiki/B", base_url)),
        other => panic!("expected dead end, got {:?}", other),
    }
    assert_eq!(report.visited.len(), 2);
    assert_eq!(report.pages_visited(), 2);
}

#[tokio::test]
async fn test_redirect_tracked_by_final_url() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let location = format!("{}/wiki/A", base_url);
    Mock::given(method("GET"))
        .and(path("/wiki/Special:Random"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", location.as_str()))
        .mount(&mock_server)
        .await;

    // The self link must be skipped because the redirect target was recorded
    mount_article(
        &mock_server,
        "A",
        "A",
        r#"<p><a href="/wiki/A">A</a> then <a href="/wiki/Philosophy">B</a></p>"#,
    )
    .await;
    mount_article(&mock_server, "Philosophy", "Philosophy", "<p>Done</p>").await;

    let config = create_test_config(&base_url, "Special:Random", 10);
    let report = walk(&config).await.expect("walk could not start");

    assert!(matches!(
        report.state,
        CrawlState::FoundPhilosophy { iterations: 1 }
    ));
    assert_eq!(
        report.steps[0].url,
        format!("{}/wiki/Special:Random", base_url)
    );
    assert_eq!(report.steps[0].final_url, format!("{}/wiki/A", base_url));
    assert!(report.visited.contains(&format!("{}/wiki/A", base_url)));
    assert!(!report
        .visited
        .contains(&format!("{}/wiki/Special:Random", base_url)));
}

#[tokio::test]
async fn test_namespaced_and_external_links_ignored() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_article(
        &mock_server,
        "A",
        "A",
        r#"<p><a href="/wiki/File:A.jpg">image</a>
        <a href="https://example.com/wiki/Elsewhere">external</a>
        <a href="/w/index.php?title=A">edit</a>
        <a href="/wiki/Category:Letters">category</a>
        <a href="/wiki/Philosophy">the article</a></p>"#,
    )
    .await;
    mount_article(&mock_server, "Philosophy", "Philosophy", "<p>Done</p>").await;

    let config = create_test_config(&base_url, "A", 10);
    let report = walk(&config).await.expect("walk could not start");

    assert!(matches!(
        report.state,
        CrawlState::FoundPhilosophy { iterations: 1 }
    ));
}

#[tokio::test]
async fn test_budget_exhausted() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_article(&mock_server, "A", "A", r#"<p>one two <a href="/wiki/B">three</a></p>"#).await;
    mount_article(&mock_server, "B", "B", r#"<p>four <a href="/wiki/C">five</a></p>"#).await;
    mount_article(&mock_server, "C", "C", r#"<p><a href="/wiki/D">six</a></p>"#).await;

    let config = create_test_config(&base_url, "A", 2);
    let report = walk(&config).await.expect("walk could not start");

    assert!(matches!(report.state, CrawlState::Exhausted { pages: 2 }));
    assert_eq!(report.pages_visited(), 2);
    assert_eq!(report.statistics.total_words(), 5);
    assert_eq!(report.statistics.average_words_per_page(2), Some(2));
}

#[tokio::test]
async fn test_words_counted_from_content_only() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_article(
        &mock_server,
        "A",
        "Heading Words",
        r#"<p>The cat, the HAT. (The) end!</p><script>var the = 1;</script>
        <p><a href="/wiki/Philosophy">[the]</a></p>"#,
    )
    .await;
    mount_article(&mock_server, "Philosophy", "Philosophy", "<p>the</p>").await;

    let config = create_test_config(&base_url, "A", 10);
    let report = walk(&config).await.expect("walk could not start");

    let stats = &report.statistics;
    assert_eq!(stats.count("the"), 5);
    assert_eq!(stats.count("cat"), 1);
    assert_eq!(stats.count("hat"), 1);
    assert_eq!(stats.count("heading"), 0);
    assert_eq!(stats.count("var"), 0);
    assert_eq!(stats.top_words(1), vec![("the".to_string(), 5)]);
    assert_eq!(stats.total_words(), 8);
}

#[tokio::test]
async fn test_http_error_fails_walk() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_article(&mock_server, "A", "A", r#"<p><a href="/wiki/Gone">gone</a></p>"#).await;
    Mock::given(method("GET"))
        .and(path("/wiki/Gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&base_url, "A", 10);
    let report = walk(&config).await.expect("walk could not start");

    match &report.state {
        CrawlState::Failed { url, error } => {
            assert_eq!(url, &format!("{}/wiki/Gone", base_url));
            assert!(matches!(error, FetchError::Status { status: 404, .. }));
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(report.state.is_error());
    assert_eq!(report.pages_visited(), 1);
}

#[tokio::test]
async fn test_non_html_response_fails_walk() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/wiki/A"))
        .respond_with(ResponseTemplate::new(200).set_body_string("plain text"))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&base_url, "A", 10);
    let report = walk(&config).await.expect("walk could not start");

    assert!(matches!(
        report.state,
        CrawlState::Failed {
            error: FetchError::ContentMismatch { .. },
            ..
        }
    ));
    assert!(report.visited.is_empty());
}

#[tokio::test]
async fn test_uppercase_html_content_type_accepted() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/wiki/Philosophy"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(article("Philosophy", "<p>Done</p>"), "TEXT/HTML; charset=UTF-8"),
        )
        .mount(&mock_server)
        .await;

    let config = create_test_config(&base_url, "Philosophy", 10);
    let report = walk(&config).await.expect("walk could not start");

    assert!(matches!(
        report.state,
        CrawlState::FoundPhilosophy { iterations: 0 }
    ));
}

#[tokio::test]
async fn test_page_without_content_node_fails_walk() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/wiki/A"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"<html><body><h1 id="firstHeading">A</h1></body></html>"#,
            "text/html",
        ))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&base_url, "A", 10);
    let report = walk(&config).await.expect("walk could not start");

    assert!(matches!(
        report.state,
        CrawlState::Failed {
            error: FetchError::MissingNode { .. },
            ..
        }
    ));
}

#[tokio::test]
async fn test_unreachable_host_fails_walk() {
    let mut config = Config::default();
    config.crawl.start_url = "http://127.0.0.1:1/wiki/A".to_string();
    config.crawl.request_timeout_secs = 5;

    let report = walk(&config).await.expect("walk could not start");

    assert!(matches!(
        report.state,
        CrawlState::Failed {
            error: FetchError::Network { .. },
            ..
        }
    ));
}

#[tokio::test]
async fn test_step_by_step() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_article(&mock_server, "A", "A", r#"<a href="/wiki/Philosophy">p</a>"#).await;
    mount_article(&mock_server, "Philosophy", "Philosophy", "").await;

    let config = create_test_config(&base_url, "A", 10);
    let mut crawler = Crawler::new(&config).expect("client");

    assert!(matches!(crawler.step().await, CrawlState::Running));
    assert_eq!(crawler.current_url(), format!("{}/wiki/Philosophy", base_url));

    assert!(crawler.step().await.is_success());
    assert_eq!(crawler.iterations(), 2);

    // Terminal states are sticky
    assert!(crawler.step().await.is_success());
    assert_eq!(crawler.iterations(), 2);
    assert_eq!(crawler.visited().len(), 2);
}
