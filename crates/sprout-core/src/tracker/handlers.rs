//! User-facing views assembled from the stores.

use super::Tracker;
use crate::{
    display::WaterResult,
    error::Result,
    models::{Dashboard, PlantHistory, PlantOverview, Stats},
    params::Id,
};

impl Tracker {
    /// Every plant with its status as of today, plus the alert list.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use sprout_core::TrackerBuilder;
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let dashboard = tracker.dashboard().await?;
    /// for name in &dashboard.alerts {
    ///     println!("{name} needs water");
    /// }
    /// # Result::<(), sprout_core::TrackerError>::Ok(())
    /// # };
    /// ```
    pub async fn dashboard(&self) -> Result<Dashboard> {
        let today = self.today();
        let plants = self.list_plants().await?;
        Ok(Dashboard::new(plants, today))
    }

    /// The status of a single plant as of today.
    pub async fn plant_status(&self, params: &Id) -> Result<PlantOverview> {
        let plant = self.get_plant(params).await?;
        Ok(PlantOverview::new(plant, self.today()))
    }

    /// A plant, its next due date and its watering log.
    ///
    /// Plant and events are read over the same connection.
    pub async fn plant_history(&self, params: &Id) -> Result<PlantHistory> {
        let plant_id = params.id;

        self.with_database(move |db| {
            let plant = db.require_plant(plant_id)?;
            let events = db.list_watering_events(plant_id)?;
            Ok(PlantHistory::new(plant, events))
        })
        .await
    }

    /// Plant and watering counts.
    pub async fn stats(&self) -> Result<Stats> {
        self.with_database(|db| {
            Ok(Stats {
                total_plants: db.count_plants()?,
                total_waterings: db.count_watering_events()?,
            })
        })
        .await
    }

    /// Waters a plant and returns its new status together with the event.
    ///
    /// The status is computed for the same day the event is stamped with.
    pub async fn water_plant_result(&self, params: &Id) -> Result<WaterResult> {
        let plant_id = params.id;
        let today = self.today();

        let (plant, event) = self
            .with_database(move |db| db.water_plant(plant_id, today))
            .await?;
        Ok(WaterResult::new(PlantOverview::new(plant, today), event))
    }
}
