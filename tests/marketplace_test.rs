use product_query::{
    build_search_urls, open_all, open_one, Error, Marketplace, OpenTarget, SearchUrls, UrlOpener,
};
use url::Url;

#[derive(Default)]
struct RecordingOpener {
    opened: Vec<String>,
}

impl UrlOpener for RecordingOpener {
    fn open(&mut self, url: &str, target: OpenTarget) {
        assert_eq!(target, OpenTarget::NewTab);
        self.opened.push(url.to_string());
    }
}

fn query_param(url: &str, name: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

#[test]
fn urls_use_marketplace_templates() {
    let urls = build_search_urls("wireless bluetooth headphones");
    assert_eq!(
        urls,
        SearchUrls {
            amazon: "https://www.amazon.com/s?k=wireless%20bluetooth%20headphones".to_string(),
            ebay: "https://www.ebay.com/sch/i.html?_nkw=wireless%20bluetooth%20headphones".to_string(),
            aliexpress: "https://www.aliexpress.com/wholesale?SearchText=wireless%20bluetooth%20headphones"
                .to_string(),
        }
    );
}

#[test]
fn urls_parse_and_decode_back_to_query() {
    let query = "women's summer dress & sandals (size 8)";
    let urls = build_search_urls(query);

    let expected = [
        (Marketplace::Amazon, "www.amazon.com", "k"),
        (Marketplace::Ebay, "www.ebay.com", "_nkw"),
        (Marketplace::AliExpress, "www.aliexpress.com", "SearchText"),
    ];
    for (marketplace, host, param) in expected {
        let url = urls.get(marketplace);
        let parsed = Url::parse(url).ok();
        assert_eq!(parsed.as_ref().and_then(Url::host_str), Some(host));
        assert_eq!(query_param(url, param).as_deref(), Some(query));
    }
}

#[test]
fn reserved_characters_are_escaped() {
    let urls = build_search_urls("usb-c 100% cable #1");
    assert_eq!(urls.amazon, "https://www.amazon.com/s?k=usb-c%20100%25%20cable%20%231");
}

#[test]
fn empty_query_gives_empty_urls() {
    let urls = build_search_urls("");
    assert_eq!(urls.amazon, "");
    assert_eq!(urls.ebay, "");
    assert_eq!(urls.aliexpress, "");
}

#[test]
fn open_all_dispatches_every_marketplace() {
    let mut opener = RecordingOpener::default();
    let opened = open_all(&mut opener, "running shoes men");

    assert_eq!(opened, 3);
    assert_eq!(opener.opened.len(), 3);
    assert!(opener.opened[0].starts_with("https://www.amazon.com/"));
    assert!(opener.opened[1].starts_with("https://www.ebay.com/"));
    assert!(opener.opened[2].starts_with("https://www.aliexpress.com/"));
}

#[test]
fn open_one_dispatches_matching_marketplace() {
    let mut opener = RecordingOpener::default();
    let result = open_one(&mut opener, "Amazon", "gaming laptop");

    assert!(result.is_ok());
    assert_eq!(opener.opened, ["https://www.amazon.com/s?k=gaming%20laptop"]);
}

#[test]
fn open_one_reports_unknown_marketplace() {
    let mut opener = RecordingOpener::default();
    match open_one(&mut opener, "notasite", "gaming laptop") {
        Err(Error::UnknownMarketplace(key)) => assert_eq!(key, "notasite"),
        other => panic!("expected UnknownMarketplace, got {other:?}"),
    }
    assert!(opener.opened.is_empty());
}

#[test]
fn unknown_marketplace_error_message() {
    let err = Error::UnknownMarketplace("etsy".to_string());
    assert_eq!(err.to_string(), "Invalid marketplace: etsy");
}
