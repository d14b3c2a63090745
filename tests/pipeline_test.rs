use product_query::{
    open_all, plan_from_name, plan_search, plan_search_with_options, OpenTarget, QueryOptions,
    SearchPlan, TitleSource,
};

const PRODUCT_PAGE: &str = r#"
<!DOCTYPE html>
<html>
  <head>
    <title>Shop Cameras | Amazon</title>
    <meta property="og:title" content="Panoramic Camera" />
  </head>
  <body>
    <nav><a href="/">Home</a></nav>
    <h1>
      New Waterproof Action Camera 4K
      - Free Shipping
    </h1>
    <p class="price">$59.00</p>
  </body>
</html>
"#;

#[test]
fn plan_uses_heading_and_main_query() {
    let plan = plan_search(PRODUCT_PAGE);

    assert_eq!(plan.title.as_deref(), Some("New Waterproof Action Camera 4K"));
    assert_eq!(plan.source, Some(TitleSource::Heading));
    assert_eq!(plan.queries.main, "waterproof action camera 4k");
    assert_eq!(plan.queries.core, "waterproof camera");
    assert_eq!(plan.queries.simple, "camera");
    assert_eq!(
        plan.urls.amazon,
        "https://www.amazon.com/s?k=waterproof%20action%20camera%204k"
    );
}

#[test]
fn page_without_title_gives_empty_plan() {
    let plan = plan_search("<html><body><p>Out of stock</p></body></html>");
    assert_eq!(plan, SearchPlan::default());
    assert!(plan.urls.is_empty());
}

#[test]
fn urls_fall_back_to_next_query_when_main_is_empty() {
    // every word is a marketing adjective, so only core and simple survive
    let plan = plan_from_name("Premium Deluxe Edition", &QueryOptions::default());
    assert_eq!(plan.queries.main, "");
    assert_eq!(plan.queries.core, "premium deluxe edition");
    assert_eq!(plan.urls.ebay, "https://www.ebay.com/sch/i.html?_nkw=premium%20deluxe%20edition");
}

#[test]
fn options_flow_through_pipeline() {
    let options = QueryOptions {
        max_main_words: 2,
        ..QueryOptions::default()
    };
    let plan = plan_search_with_options(PRODUCT_PAGE, &options);
    assert_eq!(plan.queries.main, "waterproof action");
}

#[test]
fn plan_serializes_to_json() {
    let plan = plan_search(PRODUCT_PAGE);
    let json = serde_json::to_value(&plan).unwrap_or_default();

    assert_eq!(json["source"], "heading");
    assert_eq!(json["queries"]["simple"], "camera");
    assert_eq!(
        json["urls"]["aliexpress"],
        "https://www.aliexpress.com/wholesale?SearchText=waterproof%20action%20camera%204k"
    );
}

#[test]
fn extract_optimize_open_at_call_site() {
    let plan = plan_search(PRODUCT_PAGE);
    let mut opened = Vec::new();
    let mut opener = |url: &str, _target: OpenTarget| opened.push(url.to_string());

    let count = open_all(&mut opener, &plan.queries.simple);

    assert_eq!(count, 3);
    assert_eq!(opened[1], "https://www.ebay.com/sch/i.html?_nkw=camera");
}
