use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use colltools::defer::{defer, defer_with};
use tokio::sync::{mpsc, oneshot};

#[tokio::test]
async fn test_deferred_callback_runs_after_current_code() {
    let ran = Arc::new(AtomicBool::new(false));
    let (tx, rx) = oneshot::channel();

    let flag = Arc::clone(&ran);
    defer(move || {
        flag.store(true, Ordering::SeqCst);
        let _ = tx.send(());
    })
    .unwrap();

    // Still inside the same synchronous stretch
    assert!(!ran.load(Ordering::SeqCst));

    rx.await.unwrap();
    assert!(ran.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_defer_with_binds_arguments() {
    let (tx, rx) = oneshot::channel();
    defer_with(
        move |(a, b): (i64, &'static str)| {
            let _ = tx.send(format!("{a}-{b}"));
        },
        (7, "seven"),
    )
    .unwrap();

    assert_eq!(rx.await.unwrap(), "7-seven");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_every_deferred_callback_runs() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    for i in 0..10 {
        let tx = tx.clone();
        defer(move || {
            let _ = tx.send(i);
        })
        .unwrap();
    }
    drop(tx);

    let mut received = Vec::new();
    while let Some(i) = rx.recv().await {
        received.push(i);
    }
    received.sort_unstable();
    assert_eq!(received, (0..10).collect::<Vec<_>>());
}

#[test]
fn test_defer_outside_runtime_is_an_error() {
    let err = defer(|| {}).unwrap_err();
    assert_eq!(err.module(), "defer");
}
