/*
 * Copyright (c):
 * 2026 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of car-garage.
 *
 * car-garage is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * car-garage is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with car-garage. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::{debug, warn};
use utils::numeric::is_in_range;
use crate::error::{Result, ValidationError};


#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct HorsePower {
    value: i32
}

impl HorsePower {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 200;

    pub fn new(value: i32) -> Result<HorsePower> {
        if !is_in_range(value, HorsePower::MIN, HorsePower::MAX) {
            warn!("Rejected horsepower value {}", value);
            return Err(ValidationError::HorsePowerOutOfRange(value));
        }
        Ok(HorsePower { value })
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

impl TryFrom<i32> for HorsePower {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self> {
        HorsePower::new(value)
    }
}

impl Display for HorsePower {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FuelTypes {
    Petrol,
    Diesel,
    Electro
}

impl FuelTypes {
    pub const PETROL_VALUE: &'static str = "Бензин";
    pub const DIESEL_VALUE: &'static str = "Дизель";
    pub const ELECTRO_VALUE: &'static str = "Электричество";

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelTypes::Petrol => { FuelTypes::PETROL_VALUE }
            FuelTypes::Diesel => { FuelTypes::DIESEL_VALUE }
            FuelTypes::Electro => { FuelTypes::ELECTRO_VALUE }
        }
    }
}

/// Accepts either the display label or the variant name (case-insensitive) so that
/// settings files can use `"PETROL"` as well as `"Бензин"`
impl FromStr for FuelTypes {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            FuelTypes::PETROL_VALUE => return Ok(FuelTypes::Petrol),
            FuelTypes::DIESEL_VALUE => return Ok(FuelTypes::Diesel),
            FuelTypes::ELECTRO_VALUE => return Ok(FuelTypes::Electro),
            _ => {}
        }
        match s.to_ascii_uppercase().as_str() {
            "PETROL" => Ok(FuelTypes::Petrol),
            "DIESEL" => Ok(FuelTypes::Diesel),
            "ELECTRO" => Ok(FuelTypes::Electro),
            _ => Err(ValidationError::UnknownFuelType(s.to_string()))
        }
    }
}

impl Display for FuelTypes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Engine {
    horsepower: HorsePower,
    fuel_type: FuelTypes
}

impl Engine {
    pub fn new(horsepower: HorsePower, fuel_type: FuelTypes) -> Engine {
        Engine { horsepower, fuel_type }
    }

    pub fn horsepower(&self) -> HorsePower {
        self.horsepower
    }

    pub fn fuel_type(&self) -> FuelTypes {
        self.fuel_type
    }

    pub fn describe(&self) -> String {
        format!("Мощность: {} л/с | Тип топлива: {}", self.horsepower, self.fuel_type)
    }

    /// Switches the engine to `new_fuel_type` and returns the fuel type now in use.
    ///
    /// Electric engines are a terminal category: changing to or from
    /// [FuelTypes::Electro] is rejected and the engine is left untouched.
    pub fn change_fuel_type(&mut self, new_fuel_type: FuelTypes) -> Result<FuelTypes> {
        if self.fuel_type == FuelTypes::Electro || new_fuel_type == FuelTypes::Electro {
            warn!("Rejected fuel type change from {} to {}", self.fuel_type, new_fuel_type);
            return Err(ValidationError::ElectroFuelChange);
        }
        debug!("Changing fuel type from {} to {}", self.fuel_type, new_fuel_type);
        self.fuel_type = new_fuel_type;
        Ok(self.fuel_type)
    }
}

impl Display for Engine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use crate::engine::{Engine, FuelTypes, HorsePower};
    use crate::error::ValidationError;

    #[test]
    fn horsepower_in_range() -> Result<(), String> {
        for v in HorsePower::MIN..=HorsePower::MAX {
            let hp = HorsePower::new(v).map_err(|e| e.to_string())?;
            assert_eq!(hp.value(), v);
        }
        Ok(())
    }

    #[test]
    fn horsepower_out_of_range() {
        for v in [0, -1, -200, 201, 1000, i32::MIN, i32::MAX] {
            assert_eq!(HorsePower::new(v), Err(ValidationError::HorsePowerOutOfRange(v)));
        }
        assert!(HorsePower::try_from(250).is_err());
    }

    #[test]
    fn fuel_type_labels() {
        assert_eq!(FuelTypes::Petrol.to_string(), "Бензин");
        assert_eq!(FuelTypes::Diesel.to_string(), "Дизель");
        assert_eq!(FuelTypes::Electro.to_string(), "Электричество");
    }

    #[test]
    fn parse_fuel_types() {
        assert_eq!(FuelTypes::from_str("Дизель"), Ok(FuelTypes::Diesel));
        assert_eq!(FuelTypes::from_str("petrol"), Ok(FuelTypes::Petrol));
        assert_eq!(FuelTypes::from_str("ELECTRO"), Ok(FuelTypes::Electro));
        assert_eq!(FuelTypes::from_str("hydrogen"),
                   Err(ValidationError::UnknownFuelType("hydrogen".to_string())));
    }

    #[test]
    fn describe_engine() -> Result<(), String> {
        let engine = Engine::new(HorsePower::new(150).map_err(|e| e.to_string())?, FuelTypes::Petrol);
        assert_eq!(engine.describe(), "Мощность: 150 л/с | Тип топлива: Бензин");
        assert_eq!(engine.to_string(), engine.describe());
        Ok(())
    }

    #[test]
    fn change_petrol_to_diesel() -> Result<(), String> {
        let mut engine = Engine::new(HorsePower::new(150).map_err(|e| e.to_string())?, FuelTypes::Petrol);
        assert_eq!(engine.change_fuel_type(FuelTypes::Diesel), Ok(FuelTypes::Diesel));
        assert_eq!(engine.fuel_type(), FuelTypes::Diesel);
        assert_eq!(engine.horsepower().value(), 150);
        Ok(())
    }

    #[test]
    fn change_to_electro_fails() -> Result<(), String> {
        let mut engine = Engine::new(HorsePower::new(150).map_err(|e| e.to_string())?, FuelTypes::Petrol);
        assert_eq!(engine.change_fuel_type(FuelTypes::Electro), Err(ValidationError::ElectroFuelChange));
        assert_eq!(engine.fuel_type(), FuelTypes::Petrol);
        Ok(())
    }

    #[test]
    fn change_from_electro_fails() -> Result<(), String> {
        let mut engine = Engine::new(HorsePower::new(80).map_err(|e| e.to_string())?, FuelTypes::Electro);
        for fuel in [FuelTypes::Petrol, FuelTypes::Diesel, FuelTypes::Electro] {
            assert_eq!(engine.change_fuel_type(fuel), Err(ValidationError::ElectroFuelChange));
        }
        assert_eq!(engine.fuel_type(), FuelTypes::Electro);
        Ok(())
    }
}
