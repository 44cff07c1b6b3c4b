use jiff::civil::Date;
use sprout_core::{FixedClock, TrackerBuilder};
use tempfile::TempDir;

/// Helper function to create a test tracker whose clock is fixed at `today`
pub async fn create_test_tracker(today: Date) -> (TempDir, sprout_core::Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(&db_path)
        .with_clock(FixedClock(today))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}
