mod common;

use common::create_test_tracker;
use jiff::civil::date;
use sprout_core::{display::CreateResult, AddPlant, Id, PlantStatus};

#[tokio::test]
async fn test_create_then_list_with_status() {
    let (_temp_dir, tracker) = create_test_tracker(date(2024, 1, 1)).await;

    let plant = tracker
        .add_plant(&AddPlant {
            name: "Peace Lily".to_string(),
            frequency: 2,
        })
        .await
        .expect("Failed to add plant");

    let output = CreateResult::new(plant.clone()).to_string();
    assert!(output.contains("Added plant with ID: 1"));
    assert!(output.contains("# 1. Peace Lily"));

    let dashboard = tracker.dashboard().await.expect("Failed to build dashboard");
    assert_eq!(dashboard.plants.len(), 1);
    assert_eq!(dashboard.plants[0].status, PlantStatus::DueSoon);
    assert_eq!(dashboard.plants[0].status_text, "Due in 2 days");
    assert!(dashboard.plants[0].watered_today);
}

#[tokio::test]
async fn test_water_and_history_roundtrip() {
    let (_temp_dir, tracker) = create_test_tracker(date(2024, 5, 1)).await;

    let plant = tracker
        .add_plant(&AddPlant {
            name: "Snake Plant".to_string(),
            frequency: 14,
        })
        .await
        .unwrap();

    let id = Id { id: plant.id };
    tracker.water_plant(&id).await.unwrap();

    let history = tracker.plant_history(&id).await.unwrap();
    assert_eq!(history.events.len(), 1);
    assert_eq!(history.due_date, date(2024, 5, 15));

    let rendered = history.to_string();
    assert!(rendered.contains("## Watering History"));
    assert!(rendered.contains("- May 01, 2024"));

    let stats = tracker.stats().await.unwrap();
    assert_eq!(stats.total_plants, 1);
    assert_eq!(stats.total_waterings, 1);
}
