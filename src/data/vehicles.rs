//! Queries over the `vehicles` collection.

use crate::data::rest::{Order, Query};

pub fn by_owner_query(owner_id: &str) -> Query {
    Query::from("vehicles")
        .select("*")
        .eq("owner_id", owner_id)
        .order("year", Order::Desc)
}

#[cfg(feature = "web")]
pub use web::{create, delete, fetch_by_owner, update};

#[cfg(feature = "web")]
mod web {
    use crate::data::rest::{self, OnConflict, Query};
    use crate::data::{auth::Session, Config, DataError};
    use crate::model::vehicle::NewVehicle;
    use crate::model::Vehicle;

    pub async fn fetch_by_owner(
        config: &Config,
        session: Option<&Session>,
        owner_id: &str,
    ) -> Result<Vec<Vehicle>, DataError> {
        rest::fetch_rows(config, session, &super::by_owner_query(owner_id)).await
    }

    pub async fn create(
        config: &Config,
        session: &Session,
        vehicle: &NewVehicle,
    ) -> Result<(), DataError> {
        rest::insert_row(config, session, "vehicles", vehicle, OnConflict::Error).await
    }

    pub async fn update(
        config: &Config,
        session: &Session,
        vehicle_id: i64,
        vehicle: &NewVehicle,
    ) -> Result<(), DataError> {
        let query = Query::from("vehicles").eq("id", vehicle_id);
        rest::update_rows(config, session, &query, vehicle).await
    }

    pub async fn delete(
        config: &Config,
        session: &Session,
        vehicle_id: i64,
    ) -> Result<(), DataError> {
        let query = Query::from("vehicles").eq("id", vehicle_id);
        rest::delete_rows(config, session, &query).await
    }
}
