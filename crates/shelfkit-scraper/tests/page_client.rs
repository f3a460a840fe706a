//! Integration tests for page fetching and product extraction.

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shelfkit_scraper::{scrape_product_page, PageClient, ScraperError};

const TEST_UA: &str = "Mozilla/5.0 (shelfkit-test)";

fn keywords() -> Vec<String> {
    ["image", "mpn", "name", "description", "availability", "price"]
        .iter()
        .map(|k| (*k).to_string())
        .collect()
}

const PRODUCT_PAGE: &str = r#"<!doctype html>
<html><head>
<script type="application/ld+json">{"@type": "BreadcrumbList", "itemListElement": []}</script>
<script type="application/ld+json">
{
  "@context": "https://schema.org",
  "@type": "Product",
  "name": "Fish &amp; Chips Fryer",
  "mpn": "FR-200",
  "sku": "123",
  "image": ["https://cdn.example/a.jpg"],
  "offers": {
    "@type": "Offer",
    "price": "49.99",
    "priceCurrency": "USD",
    "availability": "https://schema.org/InStock"
  }
}
</script>
</head><body></body></html>"#;

#[tokio::test]
async fn scrapes_product_fields_with_spoofed_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fryer"))
        .and(header("user-agent", TEST_UA))
        .respond_with(ResponseTemplate::new(200).set_body_string(PRODUCT_PAGE))
        .mount(&server)
        .await;

    let client = PageClient::new(TEST_UA).unwrap();
    let record = scrape_product_page(
        &client,
        &format!("{}/fryer", server.uri()),
        "Product",
        &keywords(),
    )
    .await
    .expect("page should be fetched");

    assert_eq!(record["name"], "Fish & Chips Fryer");
    assert_eq!(record["mpn"], "FR-200");
    assert_eq!(record["offers_price"], "49.99");
    assert_eq!(record["offers_priceCurrency"], "USD");
    assert_eq!(record["offers_availability"], "https://schema.org/InStock");
    assert!(!record.contains_key("sku"));
    // A list of plain URLs does not survive flattening.
    assert!(!record.contains_key("image"));
}

#[tokio::test]
async fn page_without_product_yields_empty_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blog"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>hi</body></html>"))
        .mount(&server)
        .await;

    let client = PageClient::new(TEST_UA).unwrap();
    let record = scrape_product_page(&client, &format!("{}/blog", server.uri()), "Product", &keywords())
        .await
        .unwrap();
    assert!(record.is_empty());
}

#[tokio::test]
async fn error_status_body_is_still_searched() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string(PRODUCT_PAGE))
        .mount(&server)
        .await;

    let client = PageClient::new(TEST_UA).unwrap();
    let record = scrape_product_page(&client, &format!("{}/gone", server.uri()), "Product", &keywords())
        .await
        .unwrap();
    assert_eq!(record["mpn"], "FR-200");
}

#[tokio::test]
async fn connection_failure_is_an_http_error() {
    let server = MockServer::start().await;
    let url = format!("{}/closed", server.uri());
    drop(server);

    let client = PageClient::new(TEST_UA).unwrap();
    let err = scrape_product_page(&client, &url, "Product", &keywords())
        .await
        .unwrap_err();
    assert!(matches!(err, ScraperError::Http(_)), "got: {err:?}");
}
