use std::sync::Arc;

use bingo_domain::attendance::AttendanceOutcome;
use bingo_domain::board::BoardSize;
use bingo_domain::shared::{Clock, FixedClock, UserId};
use bingo_domain::task::PRAISE_TASK_ID;
use chrono::NaiveDate;


fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2025, 10, 6).unwrap()))
}

#[tokio::test]
async fn offline_day_of_play_integration() {
    let dir = tempfile::tempdir().expect("temp dir");
    let clock = clock();
    let state = test_helpers::setup_offline_state(dir.path(), clock.clone()).await;
    state.sign_in(UserId::from_string("offline-user"), None).await;

    let snapshot = state
        .services
        .lifecycle
        .on_launch()
        .await
        .expect("launch");
    assert_eq!(snapshot.board.size(), BoardSize::THREE);
    assert_eq!(snapshot.board.cells().len(), 9);
    assert_eq!(snapshot.board.center().id, PRAISE_TASK_ID);
    assert_eq!(snapshot.score.total_score, 0);

    // Complete the top row, whatever order today's shuffle produced
    let top_row: Vec<i64> = snapshot.board.cells()[..3].iter().map(|c| c.id).collect();
    let mut last = None;
    for id in top_row {
        last = Some(
            state
                .services
                .tasks
                .toggle_completion(BoardSize::THREE, id)
                .await
                .expect("toggle"),
        );
    }
    let outcome = last.expect("three toggles").bingo;

    assert_eq!(outcome.lines, 1);
    assert!(matches!(
        outcome.attendance,
        Some(AttendanceOutcome::Recorded { streak: 1, bonus: 50, .. })
    ));
    assert_eq!(outcome.score.total_score, 150);

    // Remote is unreachable; backgrounding must not fail
    assert!(!state
        .services
        .lifecycle
        .on_background()
        .await
        .expect("background"));

    // Next morning: progress cleared, score kept
    clock.advance_days(1);
    let next_day = state
        .services
        .lifecycle
        .on_foreground()
        .await
        .expect("foreground");
    assert_eq!(next_day.score.total_score, 150);
    assert_eq!(next_day.score.bingo_count, 0);
    assert!(next_day.board.cells().iter().all(|cell| !cell.completed));
    assert_eq!(
        state.stores.cache.last_randomize_date().await.expect("read date"),
        Some(clock.today())
    );
}

#[tokio::test]
async fn rankings_offline_are_empty_integration() {
    let dir = tempfile::tempdir().expect("temp dir");
    let state = test_helpers::setup_offline_state(dir.path(), clock()).await;

    assert!(state.queries.rankings.top_rankings(None).await.is_empty());
    assert!(state
        .queries
        .rankings
        .my_ranking(&UserId::from_string("anyone"))
        .await
        .is_none());
    assert!(state
        .services
        .profile
        .register_user(UserId::from_string("anyone"), "Ari", None)
        .await
        .is_err());
}

#[tokio::test]
async fn board_size_switch_keeps_each_size_separate_integration() {
    let dir = tempfile::tempdir().expect("temp dir");
    let state = test_helpers::setup_offline_state(dir.path(), clock()).await;
    let tasks = &state.services.tasks;

    state.services.lifecycle.on_launch().await.expect("launch");
    tasks
        .update_task_title(BoardSize::THREE, 1, "drink water")
        .await
        .expect("rename");

    let five = tasks.change_board_size(5).await.expect("switch to 5");
    assert_eq!(five.cells().len(), 25);
    assert!(five.cells().iter().all(|cell| cell.title != "drink water"));

    let three = tasks.change_board_size(3).await.expect("switch back");
    assert!(three.cells().iter().any(|cell| cell.title == "drink water"));
    assert_eq!(state.services.config.board_size(), BoardSize::THREE);
}
