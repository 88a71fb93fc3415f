use planset_job::*;

fn sample_params() -> JobParams {
    JobParams {
        project_name: "Harbor Tower".to_string(),
        project_number: "23-104".to_string(),
        report_type: ReportType::Full,
        view_types: vec!["FloorPlan".to_string()],
        filters: Vec::new(),
        max_views: Some(20),
        output_file: "harbor-tower.pdf".to_string(),
        environment: "staging".to_string(),
        credentials: Credentials {
            username: "reporter".to_string(),
            password: "hunter2".to_string(),
        },
        assets: vec![AssetRecord {
            asset_id: "a-1".to_string(),
            project: "23-104".to_string(),
            asset_type: "AHU".to_string(),
            image_subtype: Some("nameplate".to_string()),
            asset_name: "AHU-1".to_string(),
            asset_url: "https://assets.example.com/a-1.jpg".to_string(),
            url_override: None,
        }],
    }
}

#[tokio::test]
async fn test_params_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.json");

    let params = sample_params();
    params.save(&path).await.unwrap();
    let loaded = JobParams::load(&path).await.unwrap();

    assert_eq!(loaded.project_name, params.project_name);
    assert_eq!(loaded.report_type, params.report_type);
    assert_eq!(loaded.max_views, Some(20));
    assert_eq!(loaded.assets.len(), 1);
    assert_eq!(loaded.assets[0].image_subtype.as_deref(), Some("nameplate"));
}

#[tokio::test]
async fn test_params_on_wire_are_camel_case() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.json");

    sample_params().save(&path).await.unwrap();
    let text = std::fs::read_to_string(&path).unwrap();

    assert!(text.contains("\"projectName\""));
    assert!(text.contains("\"reportType\""));
    assert!(text.contains("\"assetUrl\""));
    assert!(!text.contains("\"project_name\""));
}

#[tokio::test]
async fn test_load_missing_params_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = JobParams::load(dir.path().join("absent.json")).await;
    assert!(matches!(result, Err(JobError::Io(_))));
}

#[tokio::test]
async fn test_load_malformed_params_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.json");
    std::fs::write(&path, "{not json").unwrap();

    let result = JobParams::load(&path).await;
    assert!(matches!(result, Err(JobError::Config(_))));
}

#[tokio::test]
async fn test_load_views_and_convert() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("views.json");
    std::fs::write(
        &path,
        r#"[
            {
                "id": "v-100",
                "name": "Level 1 - Scale 96",
                "viewType": "FloorPlan",
                "scale": 96,
                "cropWidth": 120.0,
                "cropHeight": 80.0,
                "placeable": true
            },
            {
                "id": "v-101",
                "name": "Roof",
                "viewType": "FloorPlan",
                "scale": 48,
                "cropWidth": 60.0,
                "cropHeight": 40.0
            }
        ]"#,
    )
    .unwrap();

    let views = load_views(&path).await.unwrap();
    assert_eq!(views.len(), 2);
    // placeable defaults to true when absent
    assert!(views[1].placeable);

    let item = views[0].to_layout_item();
    assert_eq!(item.group_key, "Level 1");
    assert_eq!(item.priority_rank, 96);

    let roof = views[1].to_layout_item();
    assert_eq!(roof.group_key, "Roof");
    assert!((roof.width - 1.25).abs() < 1e-6);
}
