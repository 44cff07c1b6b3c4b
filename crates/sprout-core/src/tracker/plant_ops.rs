//! Plant operations for the Tracker.

use log::debug;

use super::Tracker;
use crate::{
    error::Result,
    models::Plant,
    params::{AddPlant, Id},
};

impl Tracker {
    /// Adds a plant last watered today.
    ///
    /// The request is validated before the database is touched, so a rejected
    /// request leaves the store unchanged.
    pub async fn add_plant(&self, params: &AddPlant) -> Result<Plant> {
        let (name, frequency) = params.validate()?;
        let today = self.today();
        debug!("add_plant: {name} every {frequency} days");

        self.with_database(move |db| db.create_plant(&name, frequency, today))
            .await
    }

    /// Retrieves a plant by its ID.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::PlantNotFound` for unknown IDs.
    pub async fn get_plant(&self, params: &Id) -> Result<Plant> {
        let plant_id = params.id;
        self.with_database(move |db| db.require_plant(plant_id))
            .await
    }

    /// Lists every plant in creation order.
    pub async fn list_plants(&self) -> Result<Vec<Plant>> {
        self.with_database(|db| db.list_plants()).await
    }

    /// Sets a plant's last watered day to today without adding a history
    /// event. Use [`Tracker::water_plant`] for the full watering action.
    pub async fn mark_watered(&self, params: &Id) -> Result<Plant> {
        let plant_id = params.id;
        let today = self.today();

        self.with_database(move |db| db.mark_watered(plant_id, today))
            .await
    }

    /// Number of plants in the store.
    pub async fn count_plants(&self) -> Result<u64> {
        self.with_database(|db| db.count_plants()).await
    }
}
