use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
    Lpg,
}

impl FuelType {
    pub const ALL: [FuelType; 5] = [
        FuelType::Petrol,
        FuelType::Diesel,
        FuelType::Electric,
        FuelType::Hybrid,
        FuelType::Lpg,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
            FuelType::Lpg => "LPG",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
            FuelType::Electric => "electric",
            FuelType::Hybrid => "hybrid",
            FuelType::Lpg => "lpg",
        }
    }

    pub fn from_str(value: &str) -> Option<FuelType> {
        FuelType::ALL.iter().copied().find(|f| f.as_str() == value)
    }
}

/// A vehicle in a member's garage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub power_hp: i32,
    pub year: i32,
    pub fuel: FuelType,
    pub owner_id: String,
}

/// Fields accepted by the backend when creating or updating a vehicle.
#[derive(Clone, Debug, Serialize)]
pub struct NewVehicle {
    pub make: String,
    pub model: String,
    pub power_hp: i32,
    pub year: i32,
    pub fuel: FuelType,
    pub owner_id: String,
}
