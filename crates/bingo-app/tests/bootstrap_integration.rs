use bingo_app::build_app_state;
use bingo_domain::board::BoardSize;

#[tokio::test]
async fn build_app_state_creates_files_integration() {
    let dir = tempfile::tempdir().expect("temp dir");

    let state = build_app_state(dir.path()).await.expect("bootstrap");

    assert!(dir.path().join("daily-bingo.db").exists());
    assert!(dir.path().join("logs").exists());
    assert!(state.runtime.firestore.is_none());

    let snapshot = state
        .services
        .lifecycle
        .on_launch()
        .await
        .expect("launch");
    assert_eq!(snapshot.board.size(), BoardSize::THREE);

    state
        .services
        .config
        .set_board_size(BoardSize::FIVE)
        .expect("save config");
    assert!(dir.path().join("app_config.json").exists());
}
