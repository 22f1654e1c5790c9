//! Listener behaviour across several poll cycles.

mod support;

use salesboard::application::{Listener, PollSettings};
use salesboard::testkit::domain::{at, date, message};
use salesboard::testkit::group::FakeGroup;
use support::context::Harness;

fn small_pages() -> PollSettings {
    PollSettings {
        poll_window: 5,
        page_size: 2,
        ..PollSettings::default()
    }
}

#[tokio::test]
async fn answers_commands_posted_after_start() {
    let group = FakeGroup::with_messages(vec![
        message("3", "Bo", "$25", at(2024, 6, 3, 9, 0)),
        message("2", "Ana", "$10", at(2024, 6, 3, 8, 30)),
        message("1", "Ana", "!leaderboard", at(2024, 6, 3, 8, 0)),
    ]);
    let h = Harness::new(group, small_pages());
    let today = date(2024, 6, 3);

    let mut listener = Listener::start(h.ctx.clone()).await.unwrap();
    assert!(listener.poll_once_on(today).await.unwrap().is_idle());

    h.group.push(message("4", "Ana", "$5", at(2024, 6, 3, 10, 0)));
    h.group
        .push(message("5", "Ana", "  !MySales ", at(2024, 6, 3, 10, 1)));
    h.group
        .push(message("6", "Cy", "!leaderboard", at(2024, 6, 3, 10, 2)));

    let report = listener.poll_once_on(today).await.unwrap();

    assert_eq!(report.new_messages, 3);
    assert_eq!(report.sales, Some(3));
    assert_eq!(report.dispatch.commands, 2);
    // Newest first: Cy's leaderboard, then Ana's total.
    assert_eq!(
        h.poster.posts(),
        vec![
            "Today's Sales Leaderboard:\n🥇 1. Bo: $25.00\n🥈 2. Ana: $15.00".to_string(),
            "Ana, your total sales today: $15.00".to_string(),
        ]
    );

    // Nothing new: nothing posted again.
    assert!(listener.poll_once_on(today).await.unwrap().is_idle());
    assert_eq!(h.poster.len(), 2);
}

#[tokio::test]
async fn history_walk_stops_at_previous_day() {
    let group = FakeGroup::with_messages(vec![
        message("4", "Ana", "$40", at(2024, 6, 3, 0, 10)),
        message("3", "Ana", "$30", at(2024, 6, 2, 23, 50)),
        message("2", "Ana", "$20", at(2024, 6, 2, 12, 0)),
        message("1", "Ana", "$10", at(2024, 6, 1, 12, 0)),
    ]);
    let h = Harness::new(group, small_pages());
    let mut listener = Listener::start(h.ctx.clone()).await.unwrap();

    h.group
        .push(message("5", "Ana", "!mysales", at(2024, 6, 3, 1, 0)));
    h.group.clear_calls();
    listener.poll_once_on(date(2024, 6, 3)).await.unwrap();

    assert_eq!(
        h.poster.posts(),
        vec!["Ana, your total sales today: $40.00".to_string()]
    );
    // Window fetch, then two history pages: [5, 4] and [3, 2].
    let calls = h.group.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[2].before, Some("4".into()));
}

#[tokio::test]
async fn failed_reply_does_not_block_later_replies() {
    let h = Harness::new(FakeGroup::new(), small_pages());
    let today = date(2024, 6, 3);
    let mut listener = Listener::start(h.ctx.clone()).await.unwrap();

    h.group
        .push(message("1", "Ana", "!mysales", at(2024, 6, 3, 9, 0)));
    h.poster.set_failing(true);
    let report = listener.poll_once_on(today).await.unwrap();
    assert_eq!(report.dispatch.replies_failed, 1);

    // The failed reply is not retried once the watermark has moved on.
    h.poster.set_failing(false);
    h.group
        .push(message("2", "Bo", "!mysales", at(2024, 6, 3, 9, 5)));
    listener.poll_once_on(today).await.unwrap();

    assert_eq!(
        h.poster.posts(),
        vec!["Bo, you have no sales submitted today.".to_string()]
    );
}

#[tokio::test]
async fn transport_failure_then_recovery() {
    let h = Harness::new(FakeGroup::new(), small_pages());
    let today = date(2024, 6, 3);
    let mut listener = Listener::start(h.ctx.clone()).await.unwrap();

    h.group
        .push(message("1", "Ana", "!leaderboard", at(2024, 6, 3, 9, 0)));
    h.group.fail_next(2);

    assert!(listener.poll_once_on(today).await.is_err());
    assert!(listener.poll_once_on(today).await.is_err());
    assert_eq!(listener.watermark().last_seen(), None);

    listener.poll_once_on(today).await.unwrap();

    assert_eq!(h.poster.posts(), vec!["No sales submitted today.".to_string()]);
    assert_eq!(listener.watermark().last_seen(), Some(&"1".into()));
}

#[tokio::test]
async fn oversized_sales_do_not_stop_the_listener() {
    let h = Harness::new(FakeGroup::new(), small_pages());
    let today = date(2024, 6, 3);
    let mut listener = Listener::start(h.ctx.clone()).await.unwrap();

    let max = "79228162514264337593543950335";
    h.group.push(message("1", "Ana", max, at(2024, 6, 3, 9, 0)));
    h.group.push(message("2", "Ana", max, at(2024, 6, 3, 9, 1)));
    h.group
        .push(message("3", "Ana", "!mysales", at(2024, 6, 3, 9, 2)));
    h.group
        .push(message("4", "Bo", "!leaderboard", at(2024, 6, 3, 9, 3)));

    let report = listener.poll_once_on(today).await.unwrap();

    assert_eq!(report.dispatch.replies_sent, 2);
    let posts = h.poster.posts();
    assert!(posts[0].starts_with("Today's Sales Leaderboard:\n🥇 1. Ana: $79,228,162,514"));
    assert!(posts[1].starts_with("Ana, your total sales today: $79,228,162,514"));
}
