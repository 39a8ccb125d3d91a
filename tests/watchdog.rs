//! Watchdog behavior tests: threshold, cooldown, health artifact, and the
//! scheduling loop, driven through the capability seams.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use connwatch::action::ProcessInvoker;
use connwatch::config::WatchdogConfig;
use connwatch::lifecycle::Shutdown;
use connwatch::status::FileStatusPublisher;
use connwatch::Watchdog;

mod common;

use common::{RecordingInvoker, SwitchProber};

fn test_config(health_file: &std::path::Path) -> WatchdogConfig {
    WatchdogConfig {
        targets: vec!["primary".into()],
        check_interval_secs: 1,
        failure_threshold: 3,
        cooldown_secs: 300,
        probe_timeout_secs: 1,
        health_file: health_file.to_path_buf(),
        ..WatchdogConfig::default()
    }
}

fn read_status(path: &std::path::Path) -> String {
    std::fs::read_to_string(path).expect("health file should exist")
}

#[tokio::test]
async fn test_action_fires_once_per_outage_episode() {
    let dir = tempfile::tempdir().unwrap();
    let health_file = dir.path().join("health_status");
    let config = test_config(&health_file);

    let reachable = Arc::new(AtomicBool::new(false));
    let invoker = RecordingInvoker::new();
    let invocations = invoker.invocation_count();

    let mut watchdog = Watchdog::new(
        &config,
        Box::new(SwitchProber::new(reachable.clone())),
        Box::new(invoker),
        Box::new(FileStatusPublisher::new(&health_file)),
    );

    // Threshold is 3: two failing cycles stay silent, the third fires.
    watchdog.run_cycle().await;
    watchdog.run_cycle().await;
    assert_eq!(invocations.load(Ordering::SeqCst), 0);
    watchdog.run_cycle().await;
    assert_eq!(invocations.load(Ordering::SeqCst), 1);

    // Failures keep coming within the cooldown window: no refire.
    for _ in 0..5 {
        watchdog.run_cycle().await;
    }
    assert_eq!(invocations.load(Ordering::SeqCst), 1);

    // Recovery resets the counter, but the cooldown still suppresses the
    // next episode's crossing.
    reachable.store(true, Ordering::SeqCst);
    watchdog.run_cycle().await;
    reachable.store(false, Ordering::SeqCst);
    for _ in 0..3 {
        watchdog.run_cycle().await;
    }
    assert_eq!(invocations.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_zero_cooldown_refires_each_episode() {
    let dir = tempfile::tempdir().unwrap();
    let health_file = dir.path().join("health_status");
    let config = WatchdogConfig {
        failure_threshold: 2,
        cooldown_secs: 0,
        ..test_config(&health_file)
    };

    let reachable = Arc::new(AtomicBool::new(false));
    let invoker = RecordingInvoker::new();
    let invocations = invoker.invocation_count();

    let mut watchdog = Watchdog::new(
        &config,
        Box::new(SwitchProber::new(reachable.clone())),
        Box::new(invoker),
        Box::new(FileStatusPublisher::new(&health_file)),
    );

    watchdog.run_cycle().await;
    watchdog.run_cycle().await;
    assert_eq!(invocations.load(Ordering::SeqCst), 1);

    reachable.store(true, Ordering::SeqCst);
    watchdog.run_cycle().await;

    reachable.store(false, Ordering::SeqCst);
    watchdog.run_cycle().await;
    watchdog.run_cycle().await;
    assert_eq!(invocations.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_health_file_tracks_latest_cycle_only() {
    let dir = tempfile::tempdir().unwrap();
    let health_file = dir.path().join("health_status");
    let config = test_config(&health_file);

    let reachable = Arc::new(AtomicBool::new(true));
    let mut watchdog = Watchdog::new(
        &config,
        Box::new(SwitchProber::new(reachable.clone())),
        Box::new(RecordingInvoker::new()),
        Box::new(FileStatusPublisher::new(&health_file)),
    );

    watchdog.run_cycle().await;
    assert_eq!(read_status(&health_file), "healthy");

    // One bad cycle flips the verdict even though the action threshold is
    // nowhere near.
    reachable.store(false, Ordering::SeqCst);
    watchdog.run_cycle().await;
    assert_eq!(read_status(&health_file), "unhealthy");

    reachable.store(true, Ordering::SeqCst);
    watchdog.run_cycle().await;
    assert_eq!(read_status(&health_file), "healthy");
}

#[tokio::test]
async fn test_missing_action_executable_does_not_stop_the_loop() {
    let dir = tempfile::tempdir().unwrap();
    let health_file = dir.path().join("health_status");
    let config = WatchdogConfig {
        failure_threshold: 1,
        cooldown_secs: 0,
        action_path: "/nonexistent/remediation-hook".into(),
        ..test_config(&health_file)
    };

    let reachable = Arc::new(AtomicBool::new(false));
    let mut watchdog = Watchdog::new(
        &config,
        Box::new(SwitchProber::new(reachable.clone())),
        Box::new(ProcessInvoker::new(&config.action_path)),
        Box::new(FileStatusPublisher::new(&health_file)),
    );

    // Every cycle fires the (missing) action; the loop must keep cycling
    // and keep publishing.
    watchdog.run_cycle().await;
    watchdog.run_cycle().await;
    assert_eq!(read_status(&health_file), "unhealthy");

    reachable.store(true, Ordering::SeqCst);
    watchdog.run_cycle().await;
    assert_eq!(read_status(&health_file), "healthy");
}

#[tokio::test]
async fn test_loop_runs_first_cycle_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let health_file = dir.path().join("health_status");
    let config = test_config(&health_file);

    let reachable = Arc::new(AtomicBool::new(true));
    let prober = SwitchProber::new(reachable);
    let probes = prober.probe_count();

    let watchdog = Watchdog::new(
        &config,
        Box::new(prober),
        Box::new(RecordingInvoker::new()),
        Box::new(FileStatusPublisher::new(&health_file)),
    );

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(watchdog.run(shutdown.subscribe()));

    // Well inside the first 1s interval: the startup cycle already ran.
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(probes.load(Ordering::SeqCst), 1);
    assert_eq!(read_status(&health_file), "healthy");

    // And the loop keeps ticking afterwards.
    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(probes.load(Ordering::SeqCst) >= 2);

    shutdown.trigger();
    handle.await.unwrap();
}
