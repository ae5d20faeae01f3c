mod support;

use outbox_static_file::OutboxStaticFile;
use relay_router::{OutboxDirectory, RoutingSession};
use std::io::Write;
use support::{author_filter, relays, shard, R1};
use tempfile::NamedTempFile;

const STATIC_OUTBOX: &str = "../utils/outbox-static-file/static-configs/outbox.json";
const JB55: &str = "3bf0c63fcb93463407af97a5e5ee64fa883d107ef9e558472c4eb9aaaefa459d";

#[test]
fn static_file_drives_sharding() {
    let directory = OutboxDirectory::empty();
    let health = directory.refresh(&OutboxStaticFile::new(STATIC_OUTBOX.to_string()));
    assert_eq!(health.last_attempt_succeeded, Some(true));
    assert_eq!(health.author_count, 2);

    let explicit = relays(&[R1]);
    let session = RoutingSession::new()
        .with_outbox(&directory)
        .with_explicit_relays(&explicit);

    let shards = session.calculate_relay_sets_for_filters(&[author_filter(&[JB55, "unknown"])]);

    assert_eq!(shards.len(), 3);
    assert_eq!(shard(&shards, "wss://relay.damus.io"), &vec![author_filter(&[JB55])]);
    assert_eq!(shard(&shards, "wss://nos.lol"), &vec![author_filter(&[JB55])]);
    assert_eq!(shard(&shards, R1), &vec![author_filter(&["unknown"])]);
}

#[test]
fn failed_refresh_keeps_serving_previous_snapshot() {
    let mut file = NamedTempFile::new().expect("temp file should be created");
    file.write_all(br#"{ "a1": ["wss://w1.example"] }"#)
        .expect("temp file should be writable");
    let provider = OutboxStaticFile::new(file.path().display().to_string());
    let directory = OutboxDirectory::empty();

    assert_eq!(directory.refresh(&provider).last_attempt_succeeded, Some(true));

    file.as_file()
        .set_len(0)
        .expect("temp file should truncate");
    let failed = directory.refresh(&provider);

    assert_eq!(failed.last_attempt_succeeded, Some(false));
    assert_eq!(failed.snapshot_version, 1);

    let session = RoutingSession::new().with_outbox(&directory);
    let shards = session.calculate_relay_sets_for_filters(&[author_filter(&["a1"])]);
    assert_eq!(shard(&shards, "wss://w1.example"), &vec![author_filter(&["a1"])]);
}
