mod support;

use relay_router::{Event, Filter, RelayUrl, RoutingSession};
use support::{author_filter, relays, shard, tracker, R1, R2, RW};

#[test]
fn empty_tracker_sends_whole_filter_to_every_explicit_relay() {
    let explicit = relays(&[R1, R2]);
    let tracked = tracker(vec![]);
    let session = RoutingSession::new()
        .with_explicit_relays(&explicit)
        .with_outbox(&tracked);

    let shards = session.calculate_relay_sets_for_filters(&[author_filter(&["A", "B"])]);

    assert_eq!(shards.len(), 2);
    assert_eq!(shard(&shards, R1), &vec![author_filter(&["A", "B"])]);
    assert_eq!(shard(&shards, R2), &vec![author_filter(&["A", "B"])]);
}

#[test]
fn tracked_author_is_split_from_fallback_author() {
    let explicit = relays(&[R1]);
    let tracked = tracker(vec![("A", vec![RW])]);
    let session = RoutingSession::new()
        .with_explicit_relays(&explicit)
        .with_outbox(&tracked);

    let shards = session.calculate_relay_sets_for_filters(&[author_filter(&["A", "B"])]);

    assert_eq!(shards.len(), 2);
    assert_eq!(shard(&shards, RW), &vec![author_filter(&["A"])]);
    assert_eq!(shard(&shards, R1), &vec![author_filter(&["B"])]);
}

#[test]
fn kinds_only_filter_is_broadcast_to_explicit_relays() {
    let explicit = relays(&[R1, R2]);
    let session = RoutingSession::new().with_explicit_relays(&explicit);

    let shards = session.calculate_relay_sets_for_filters(&[Filter::new().kinds([1])]);

    assert_eq!(shards.len(), 2);
    assert_eq!(shard(&shards, R1), &vec![Filter::new().kinds([1])]);
    assert_eq!(shard(&shards, R2), &vec![Filter::new().kinds([1])]);
}

#[test]
fn empty_pool_routes_event_nowhere() {
    let pool: Vec<RelayUrl> = Vec::new();
    let session = RoutingSession::new().with_pool(&pool);

    assert!(session.calculate_relay_set_for_event(&Event::default()).is_empty());
}

#[test]
fn batch_entry_point_matches_single_call() {
    let explicit = relays(&[R1]);
    let tracked = tracker(vec![("A", vec![RW]), ("C", vec![R2, RW])]);
    let session = RoutingSession::new()
        .with_explicit_relays(&explicit)
        .with_outbox(&tracked);
    let filters = vec![
        author_filter(&["A", "B"]).kinds([1]),
        Filter::new().kinds([7]),
        author_filter(&["C"]).since(1_700_000_000),
    ];

    assert_eq!(
        session.calculate_relay_sets_for_filter_batches(&filters),
        session.calculate_relay_sets_for_filters(&filters)
    );
}

#[test]
fn session_without_anything_yields_empty_plans() {
    let session = RoutingSession::new();

    assert!(session
        .calculate_relay_sets_for_filters(&[Filter::new().kinds([1])])
        .is_empty());
    assert!(session
        .calculate_relay_sets_for_filters(&[author_filter(&["A"])])
        .is_empty());
    assert!(session.calculate_relay_sets_for_filters(&[]).is_empty());
}
