//! Watering operations for the Tracker.

use log::debug;

use super::Tracker;
use crate::{
    error::Result,
    models::{Plant, WateringEvent},
    params::{Id, RecordWatering},
};

impl Tracker {
    /// Waters a plant today: updates its last watered day and appends a
    /// history event atomically.
    pub async fn water_plant(&self, params: &Id) -> Result<(Plant, WateringEvent)> {
        let plant_id = params.id;
        let today = self.today();
        debug!("water_plant: {plant_id} on {today}");

        self.with_database(move |db| db.water_plant(plant_id, today))
            .await
    }

    /// Appends a watering event without changing the plant's last watered
    /// day. The date defaults to today and may not lie in the future.
    pub async fn record_watering(&self, params: &RecordWatering) -> Result<WateringEvent> {
        let date = params.validate(self.today())?;
        let plant_id = params.plant_id;
        debug!("record_watering: {plant_id} on {date}");

        self.with_database(move |db| db.record_watering(plant_id, date))
            .await
    }

    /// A plant's watering events, most recent first.
    pub async fn watering_events(&self, params: &Id) -> Result<Vec<WateringEvent>> {
        let plant_id = params.id;
        self.with_database(move |db| db.list_watering_events(plant_id))
            .await
    }

    /// Number of watering events across all plants.
    pub async fn count_watering_events(&self) -> Result<u64> {
        self.with_database(|db| db.count_watering_events()).await
    }
}
