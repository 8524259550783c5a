mod common;

use common::{local_source, snapshot_dir, suburb, write_snapshot};
use serde_json::json;
use suburb_insights::domain::ports::suburb_source::SuburbSource;
use suburb_insights::domain::values::domain_query::DomainQuery;

#[tokio::test]
async fn test_exact_key_is_served() {
    let dir = snapshot_dir();
    write_snapshot(
        dir.path(),
        "schools.json",
        &json!({
            "sydney-2000": {"schools": [{"name": "Sydney School"}]},
            "melbourne-3000": {"schools": [{"name": "Melbourne School"}]}
        }),
    );
    let source = local_source(dir.path(), true);

    let got = source
        .fetch(&suburb("melbourne-3000"), &DomainQuery::Schools)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(got["schools"][0]["name"], "Melbourne School");
}

#[tokio::test]
async fn test_missing_suburb_gets_first_entry_when_substituting() {
    let dir = snapshot_dir();
    write_snapshot(
        dir.path(),
        "amenities.json",
        &json!({
            "sydney-2000": {"categories": [], "total": 1},
            "melbourne-3000": {"categories": [], "total": 2}
        }),
    );
    let source = local_source(dir.path(), true);

    let got = source
        .fetch(&suburb("hobart-7000"), &DomainQuery::Amenities)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(got["total"], 1);
}

#[tokio::test]
async fn test_missing_suburb_is_absent_without_substitution() {
    let dir = snapshot_dir();
    write_snapshot(dir.path(), "amenities.json", &json!({"sydney-2000": {"total": 1}}));
    let source = local_source(dir.path(), false);

    let got = source
        .fetch(&suburb("hobart-7000"), &DomainQuery::Amenities)
        .await
        .unwrap();

    assert!(got.is_none());
}

#[tokio::test]
async fn test_missing_file_is_no_data() {
    let dir = snapshot_dir();
    let source = local_source(dir.path(), true);

    let got = source
        .fetch(&suburb("hobart-7000"), &DomainQuery::Zoning { geojson: true })
        .await
        .unwrap();

    assert!(got.is_none());
}

#[tokio::test]
async fn test_malformed_file_is_no_data() {
    let dir = snapshot_dir();
    std::fs::write(dir.path().join("zoning.json"), "{not json").unwrap();
    let source = local_source(dir.path(), true);

    let got = source
        .fetch(&suburb("hobart-7000"), &DomainQuery::Zoning { geojson: true })
        .await
        .unwrap();

    assert!(got.is_none());
}

#[tokio::test]
async fn test_non_object_snapshot_is_no_data() {
    let dir = snapshot_dir();
    write_snapshot(dir.path(), "risk_factors.json", &json!([{"flood": "low"}]));
    let source = local_source(dir.path(), true);

    let got = source
        .fetch(&suburb("hobart-7000"), &DomainQuery::Risk { geojson: false })
        .await
        .unwrap();

    assert!(got.is_none());
}

#[tokio::test]
async fn test_empty_snapshot_is_no_data_even_when_substituting() {
    let dir = snapshot_dir();
    write_snapshot(dir.path(), "demographics.json", &json!({}));
    let source = local_source(dir.path(), true);

    let got = source
        .fetch(&suburb("hobart-7000"), &DomainQuery::Demographics)
        .await
        .unwrap();

    assert!(got.is_none());
}

#[tokio::test]
async fn test_search_filters_by_name() {
    let dir = snapshot_dir();
    write_snapshot(
        dir.path(),
        "suburbs.json",
        &json!({"suburbs": [
            {"id": "melbourne-3000", "name": "Melbourne"},
            {"id": "north-melbourne-3051", "name": "North Melbourne"},
            {"id": "sydney-2000", "name": "Sydney"}
        ]}),
    );
    let source = local_source(dir.path(), true);

    let hits = source.search("MELB").await.unwrap();
    assert_eq!(hits.len(), 2);

    let all = source.search("").await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_search_caps_at_ten() {
    let dir = snapshot_dir();
    let suburbs: Vec<_> = (0..15)
        .map(|i| json!({"id": format!("town-{i}"), "name": format!("Town {i}")}))
        .collect();
    write_snapshot(dir.path(), "suburbs.json", &json!({ "suburbs": suburbs }));
    let source = local_source(dir.path(), true);

    assert_eq!(source.search("town").await.unwrap().len(), 10);
}

#[tokio::test]
async fn test_injected_span_is_accepted() {
    use suburb_insights::config::SnapshotConfig;
    use suburb_insights::infrastructure::sources::local::LocalSource;

    let dir = snapshot_dir();
    write_snapshot(dir.path(), "zoning.json", &json!({"hobart-7000": {"zone": "R1"}}));
    let config = SnapshotConfig {
        data_dir: dir.path().to_path_buf(),
        substitute_missing: false,
    };
    let source = LocalSource::with_span(&config, tracing::info_span!("test-local"));

    let got = source
        .fetch(&suburb("hobart-7000"), &DomainQuery::Zoning { geojson: false })
        .await
        .unwrap();

    assert_eq!(got, Some(json!({"zone": "R1"})));
}

#[tokio::test]
async fn test_passthrough_domains_never_substitute() {
    let dir = snapshot_dir();
    write_snapshot(dir.path(), "suburb_info.json", &json!({"melbourne-3000": {"information": {"poa": "3000"}}}));
    write_snapshot(dir.path(), "zoning.json", &json!({"melbourne-3000": {"zone": "CBD"}}));
    let source = local_source(dir.path(), true);
    let id = suburb("belmont-north-2280");

    let info = source.fetch(&id, &DomainQuery::Info { geojson: false }).await.unwrap();
    let zoning = source.fetch(&id, &DomainQuery::Zoning { geojson: true }).await.unwrap();

    assert!(info.is_none());
    assert!(zoning.is_none());
}
