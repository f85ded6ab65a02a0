use std::path::PathBuf;

use listmatch_core::PatternMode;
use listmatch_feeds::{
    create_matches, load_listings, load_products, open_listings, open_products, write_matches,
};
use listmatch_matching::reconcile;

const PRODUCTS: &str = r#"{"product_name":"Canon_PowerShot_A20","manufacturer":"Canon","model":"A20","family":"PowerShot","announced-date":"2001-02-26T19:00:00.000-05:00"}
{"product_name":"Sony_Cyber-shot_DSC-W310","manufacturer":"Sony","model":"DSC-W310","family":"Cyber-shot","announced-date":"2010-01-06T19:00:00.000-05:00"}
this line is not json
{"product_name":"SonyEricsson_W800","manufacturer":"SonyEricsson","model":"W800","announced-date":"2005-03-01T19:00:00.000-05:00"}
"#;

const LISTINGS: &str = r#"{"title":"Canon PowerShot A20 2MP Digital Camera","manufacturer":"Canon Canada","currency":"CAD","price":"89.99"}
{"title":"Sony Cyber-shot DSC-W310 12.1MP","manufacturer":"Sony","currency":"USD","price":139.99}
{"title":"SonyEricsson W800i Walkman phone","manufacturer":"Sony Ericsson","currency":"EUR","price":"60.00"}
{"title":"Tripod for Canon cameras","manufacturer":"Generic","currency":"USD","price":"12.00"}
"#;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("listmatch-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn loads_reconciles_and_writes() {
    let products = load_products(PRODUCTS.as_bytes()).unwrap();
    let listings = load_listings(LISTINGS.as_bytes()).unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(listings.len(), 4);

    let report = reconcile(products, &listings, PatternMode::Raw);

    let mut out = Vec::new();
    write_matches(&mut out, &report.matches).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 2);
    assert_eq!(
        object["Canon PowerShot A20 2MP Digital Camera"]["family"],
        "PowerShot"
    );
    assert_eq!(
        object["Sony Cyber-shot DSC-W310 12.1MP"]["model"],
        "DSC-W310"
    );
}

#[test]
fn file_pipeline_round_trips() {
    let dir = scratch_dir("pipeline");
    let products_path = dir.join("products.txt");
    let listings_path = dir.join("listings.txt");
    let matches_path = dir.join("matches.txt");
    std::fs::write(&products_path, PRODUCTS).unwrap();
    std::fs::write(&listings_path, LISTINGS).unwrap();

    let report = reconcile(
        open_products(&products_path).unwrap(),
        &open_listings(&listings_path).unwrap(),
        PatternMode::Raw,
    );
    create_matches(&matches_path, &report.matches).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&matches_path).unwrap()).unwrap();
    assert_eq!(written.as_object().map(|o| o.len()), Some(2));

    std::fs::remove_dir_all(&dir).unwrap();
}
