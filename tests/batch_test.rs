mod common;

use common::{orchestrator, toc_value, FakeClient};
use primer_lib::batch::{BatchDriver, BatchError, BatchSummary};
use primer_lib::config::BatchConfig;
use primer_lib::engine::types::{CachedSectionFile, TableOfContents};
use std::sync::Arc;

fn config(dir: &tempfile::TempDir) -> BatchConfig {
    BatchConfig {
        cache_dir: dir.path().join("cache"),
        ..Default::default()
    }
}

#[tokio::test]
async fn writes_the_cache_layout() {
    let dir = tempfile::tempdir().unwrap();
    let client = Arc::new(FakeClient::with_toc(toc_value(3, 2, 3)));
    let driver = BatchDriver::new(Arc::new(orchestrator(client.clone())), config(&dir));

    let summary = driver.run().await.unwrap();
    assert_eq!(
        summary,
        BatchSummary {
            chapters: 3,
            sections_written: 6,
            subsections_generated: 18,
        }
    );
    assert_eq!(client.calls(), 1 + 18);

    let cache = dir.path().join("cache");
    let toc_text = std::fs::read_to_string(cache.join("python_toc.json")).unwrap();
    assert!(toc_text.contains("\n  \"title\""));
    let toc: TableOfContents = serde_json::from_str(&toc_text).unwrap();
    assert_eq!(toc.chapters.len(), 3);

    let section_path = cache.join("chapter_2").join("2.1_section_2_1.json");
    let file: CachedSectionFile =
        serde_json::from_str(&std::fs::read_to_string(section_path).unwrap()).unwrap();
    assert_eq!(file.section_info.section_number, "2.1");
    assert_eq!(file.subsections.len(), 3);
    assert_eq!(file.subsections[2].subsection_info.subsection_number, "2.1.3");
    assert!(file.subsections[0].content.starts_with("# Topic 2.1.1\n\n"));

    for chapter in 1..=3 {
        let entries = std::fs::read_dir(cache.join(format!("chapter_{}", chapter)))
            .unwrap()
            .count();
        assert_eq!(entries, 2);
    }
}

#[tokio::test]
async fn subsection_prompts_carry_the_hierarchy() {
    let dir = tempfile::tempdir().unwrap();
    let client = Arc::new(FakeClient::new());
    BatchDriver::new(Arc::new(orchestrator(client.clone())), config(&dir))
        .run()
        .await
        .unwrap();

    let requests = client.requests.lock().unwrap();
    let user = &requests[1].messages[1].content;
    assert!(user.contains("Python Programming"));
    assert!(user.contains("Chapter 1"));
    assert!(user.contains("Section 1 1"));
    assert!(user.contains("Topic 1.1.1"));
}

#[tokio::test]
async fn generation_failure_stops_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let client = Arc::new(FakeClient::failing(500));
    let err = BatchDriver::new(Arc::new(orchestrator(client.clone())), config(&dir))
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, BatchError::Generation(_)));
    assert_eq!(client.calls(), 1);
    assert!(!dir.path().join("cache").join("python_toc.json").exists());
}
