use listmatch_catalog::{CatalogIndex, Listing, Product};
use listmatch_core::PatternMode;
use listmatch_matching::{find_best, reconcile, resolve, ListingOutcome, Reconciler};

fn camera(manufacturer: &str, model: &str, name: &str, family: Option<&str>) -> Product {
    Product::new(
        manufacturer,
        model,
        name,
        "2010-01-05T19:00:00.000-05:00",
        family.map(str::to_string),
    )
}

fn offer(title: &str, manufacturer: &str) -> Listing {
    Listing::new(title, manufacturer, "CAD", "199.99")
}

fn catalog() -> Vec<Product> {
    vec![
        camera("Canon", "A20", "Canon_PowerShot_A20", Some("PowerShot")),
        camera("Canon", "IXUS 300 HS", "Canon_IXUS_300_HS", Some("IXUS")),
        camera("Sony", "A", "Sony_A", None),
        camera("Sony", "A Pro", "Sony_A_Pro", None),
        camera("SonyEricsson", "W800", "SonyEricsson_W800", None),
        camera("Nikon", "D300", "Nikon_D300", None),
    ]
}

fn feed() -> Vec<Listing> {
    vec![
        offer("Canon PowerShot A20 Digital Camera", "Canon Canada"),
        offer("Sony A Pro with 18-55mm lens", "Sony"),
        offer("SonyEricsson W800", "Sony Ericsson"),
        offer("Nikon Coolpix S3000", "Nikon"),
        offer("Replacement battery for Nikon D300", "Generic"),
        offer("canon ixus 300 hs silver", "Canon"),
    ]
}

#[test]
fn worked_example_canon_powershot() {
    let products = vec![camera("Canon", "A20", "Canon_PowerShot_A20", None)];
    let listing = offer("Canon PowerShot A20 Digital Camera", "Canon");
    let index: CatalogIndex = products.clone().into_iter().collect();

    let manufacturer = resolve(index.manufacturers(), listing.title(), PatternMode::Raw);
    assert_eq!(manufacturer.as_deref(), Some("Canon"));

    let best = find_best(index.candidates_for("Canon"), &listing, PatternMode::Raw);
    assert_eq!(best, Some(&products[0]));
}

#[test]
fn later_sorting_name_wins() {
    let products = vec![
        camera("Sony", "A Pro", "Sony_A_Pro", None),
        camera("Sony", "A", "Sony_A", None),
    ];
    let listing = offer("Sony A Pro", "Sony");

    let best = find_best(&products, &listing, PatternMode::Raw).map(Product::product_name);
    assert_eq!(best, Some("Sony_A_Pro"));
}

#[test]
fn full_pass_matches_only_unambiguous_listings() {
    let report = reconcile(catalog(), &feed(), PatternMode::Raw);

    let titles: Vec<&str> = report.matches.keys().map(String::as_str).collect();
    assert_eq!(
        titles,
        vec![
            "Canon PowerShot A20 Digital Camera",
            "Sony A Pro with 18-55mm lens",
            "canon ixus 300 hs silver",
        ]
    );

    let powershot = &report.matches["Canon PowerShot A20 Digital Camera"];
    assert_eq!(powershot.manufacturer, "Canon");
    assert_eq!(powershot.model, "A20");
    assert_eq!(powershot.family.as_deref(), Some("PowerShot"));

    assert_eq!(report.stats.listings, 6);
    assert_eq!(report.stats.matched, 3);
    // "SonyEricsson W800" is ambiguous; the battery title does not open with a manufacturer.
    assert_eq!(report.stats.unresolved_manufacturer, 2);
    assert_eq!(report.stats.no_keyword_match, 1);
}

#[test]
fn ambiguous_manufacturer_produces_no_entry() {
    let index: CatalogIndex = catalog().into_iter().collect();
    let reconciler = Reconciler::new(&index, PatternMode::Raw);
    let listing = offer("SonyEricsson W800", "Sony Ericsson");

    assert_eq!(reconciler.match_listing(&listing), ListingOutcome::UnresolvedManufacturer);
    assert!(!reconciler.reconcile([&listing]).matches.contains_key("SonyEricsson W800"));
}

#[test]
fn self_reported_manufacturer_is_ignored() {
    let index: CatalogIndex = catalog().into_iter().collect();
    let reconciler = Reconciler::new(&index, PatternMode::Raw);

    let mislabeled = offer("Nikon D300 body only", "Canon");
    match reconciler.match_listing(&mislabeled) {
        ListingOutcome::Matched(product) => assert_eq!(product.manufacturer(), "Nikon"),
        other => panic!("Expected Nikon match, got {other:?}"),
    }
}

#[test]
fn reconciliation_is_idempotent() {
    let products = catalog();
    let listings = feed();

    let first = reconcile(products.clone(), &listings, PatternMode::Raw);
    let second = reconcile(products, &listings, PatternMode::Raw);
    assert_eq!(first, second);

    let index: CatalogIndex = catalog().into_iter().collect();
    let reconciler = Reconciler::new(&index, PatternMode::Raw);
    assert_eq!(reconciler.reconcile(&listings), reconciler.reconcile(&listings));
}

#[test]
fn output_does_not_depend_on_listing_order() {
    let mut listings = feed();
    let forward = reconcile(catalog(), &listings, PatternMode::Raw);
    listings.reverse();
    let backward = reconcile(catalog(), &listings, PatternMode::Raw);

    assert_eq!(forward.matches, backward.matches);
}

#[test]
fn literal_mode_matches_names_with_metacharacters() {
    let products = vec![camera("C+ Optics", "Z1(b)", "C+ Optics_Z1(b)", None)];
    let listings = vec![offer("C+ Optics Z1(b) compact", "C+")];

    let raw = reconcile(products.clone(), &listings, PatternMode::Raw);
    assert!(raw.matches.is_empty());

    let literal = reconcile(products, &listings, PatternMode::Literal);
    assert_eq!(literal.matches.len(), 1);
}

#[test]
fn report_serializes_to_flat_records() {
    let report = reconcile(
        vec![camera("Canon", "A20", "Canon_PowerShot_A20", None)],
        &[offer("Canon PowerShot A20", "Canon")],
        PatternMode::Raw,
    );

    let value = serde_json::to_value(&report.matches).unwrap();
    assert_eq!(value["Canon PowerShot A20"]["product_name"], "Canon_PowerShot_A20");
    assert_eq!(value["Canon PowerShot A20"]["announced_date"], "2010-01-05T19:00:00.000-05:00");
    assert!(value["Canon PowerShot A20"]["family"].is_null());
}
