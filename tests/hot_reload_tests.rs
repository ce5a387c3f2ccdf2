#![allow(clippy::unwrap_used, clippy::expect_used)]

use nestgen::hot_reload::{run_batch, run_watch_loop, watch_schema, ChangeQueue};
use std::time::Duration;
use tokio::sync::mpsc;

mod common;
use common::{generator, temp_files};

const TWO_MODELS: &str = r#"
model Author {
  id   Int    @id
  name String
}

model Book {
  id       Int    @id
  title    String
  authorId Int
  author   Author @relation(fields: [authorId], references: [id])
}
"#;

#[tokio::test]
async fn test_batch_runs_in_source_order() {
    let dir = tempfile::tempdir().unwrap();
    let schema = temp_files::write_schema(dir.path(), TWO_MODELS);
    let out = dir.path().join("src");

    let report = run_batch(&generator::for_schema(&schema), TWO_MODELS, &out).await;
    assert_eq!(report.models(), vec!["Author", "Book"]);
    assert_eq!(report.succeeded(), 2);
    assert!(out.join("author/author.controller.ts").is_file());
    assert!(out.join("book/dto/create-book.dto.ts").is_file());
}

#[tokio::test]
async fn test_batch_continues_after_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let schema = temp_files::write_schema(dir.path(), TWO_MODELS);
    let out = dir.path().join("src");
    std::fs::create_dir_all(&out).unwrap();
    // Block the first model's folder with a plain file
    std::fs::write(out.join("author"), "").unwrap();

    let report = run_batch(&generator::for_schema(&schema), TWO_MODELS, &out).await;
    assert_eq!(report.models(), vec!["Author", "Book"]);
    assert!(report.outcomes[0].result.is_err());
    assert!(report.outcomes[1].result.is_ok());
    assert_eq!(report.failed(), 1);
    assert!(out.join("book/book.service.ts").is_file());
}

#[tokio::test]
async fn test_change_queue_coalesces_mid_batch_events() {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut queue = ChangeQueue::new(rx, Duration::ZERO);

    tx.send(()).unwrap();
    assert!(queue.next_trigger().await);

    // Two saves while the batch is running
    tx.send(()).unwrap();
    tx.send(()).unwrap();
    assert!(queue.finish_batch());
    assert!(queue.rescan_requested());

    // The pending re-scan fires once without a new event
    assert!(queue.next_trigger().await);
    assert!(!queue.finish_batch());

    drop(tx);
    assert!(!queue.next_trigger().await);
}

#[tokio::test]
async fn test_watch_loop_collapses_burst_into_one_batch() {
    let dir = tempfile::tempdir().unwrap();
    let schema = temp_files::write_schema(dir.path(), TWO_MODELS);
    let out = dir.path().join("src");
    let gen = generator::for_schema(&schema);

    let (tx, rx) = mpsc::unbounded_channel();
    for _ in 0..3 {
        tx.send(()).unwrap();
    }
    drop(tx);

    let queue = ChangeQueue::new(rx, gen.config().debounce);
    let batches = run_watch_loop(&gen, &schema, &out, queue).await;
    assert_eq!(batches, 1);
    assert!(out.join("author/author.module.ts").is_file());
    assert!(out.join("book/book.module.ts").is_file());
}

#[tokio::test]
async fn test_watch_loop_runs_one_rescan_for_mid_batch_saves() {
    let dir = tempfile::tempdir().unwrap();
    let schema = temp_files::write_schema(dir.path(), TWO_MODELS);
    let out = dir.path().join("src");
    let gen = generator::for_schema(&schema);

    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(()).unwrap();

    // Fire a burst of saves once the first model is on disk, while Book is
    // still being generated
    let first_artifact = out.join("author/author.controller.ts");
    let saver = tokio::spawn(async move {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        while !first_artifact.exists() && tokio::time::Instant::now() < deadline {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        for _ in 0..3 {
            tx.send(()).unwrap();
        }
    });

    let queue = ChangeQueue::new(rx, gen.config().debounce);
    let batches = run_watch_loop(&gen, &schema, &out, queue).await;
    saver.await.unwrap();

    assert_eq!(batches, 2);
    assert!(out.join("book/book.controller.ts").is_file());
}

#[tokio::test]
async fn test_watch_loop_survives_unreadable_schema() {
    let dir = tempfile::tempdir().unwrap();
    let schema = dir.path().join("missing.prisma");
    let out = dir.path().join("src");
    let gen = generator::for_schema(&schema);

    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(()).unwrap();
    drop(tx);

    let batches = run_watch_loop(&gen, &schema, &out, ChangeQueue::new(rx, Duration::ZERO)).await;
    assert_eq!(batches, 1);
    assert!(!out.exists());
}

#[tokio::test]
async fn test_watch_schema_reports_changes() {
    let dir = tempfile::tempdir().unwrap();
    let schema = temp_files::write_schema(dir.path(), "model A { id Int }");
    let (tx, mut rx) = mpsc::unbounded_channel();

    let watcher = watch_schema(&schema, tx).expect("watch_schema");

    // allow watcher thread to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    // unrelated files in the same directory are ignored
    std::fs::write(dir.path().join("other.txt"), "x").unwrap();
    std::fs::write(&schema, TWO_MODELS).unwrap();

    let got = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
    assert!(matches!(got, Ok(Some(()))));

    drop(watcher);
}
