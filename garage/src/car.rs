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

use tracing::{debug, warn};
use utils::display::{format_as_quoted_set, format_as_set};
use crate::body::CarBody;
use crate::engine::{Engine, FuelTypes, HorsePower};
use crate::error::{Result, ValidationError};
use crate::wheel::Wheel;


/// A car assembled from one [Engine], one [CarBody] and its [Wheel]s.
///
/// Wheels can be added without limit but [Car::display_wheel_info] only reports on a car
/// that has exactly [Car::REQUIRED_WHEEL_COUNT] of them.
#[derive(Clone, Debug)]
pub struct Car {
    engine: Engine,
    body: CarBody,
    wheels: Vec<Wheel>
}

impl Car {
    pub const REQUIRED_WHEEL_COUNT: usize = 4;

    pub fn new(horsepower: HorsePower,
               fuel_type: FuelTypes,
               body_style: &str,
               door_count: i32) -> Car {
        debug!("Building {} car with {} hp {} engine", body_style, horsepower, fuel_type);
        Car {
            engine: Engine::new(horsepower, fuel_type),
            body: CarBody::new(body_style, door_count),
            wheels: Vec::new()
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn body(&self) -> &CarBody {
        &self.body
    }

    pub fn wheels(&self) -> &[Wheel] {
        &self.wheels
    }

    pub fn wheel_count(&self) -> usize {
        self.wheels.len()
    }

    pub fn add_wheel(&mut self, diameter: i32, rubber_type: &str) {
        self.wheels.push(Wheel::new(diameter, rubber_type));
        if self.wheels.len() > Car::REQUIRED_WHEEL_COUNT {
            debug!("Car now has {} wheels", self.wheels.len());
        }
    }

    pub fn display_engine_info(&self) -> String {
        format!("максимальная мощность (в л/с): {}\nтип топлива: {}",
                self.engine.horsepower(),
                self.engine.fuel_type())
    }

    pub fn display_car_body_info(&self) -> String {
        self.body.to_string()
    }

    pub fn display_wheel_info(&self) -> Result<String> {
        if self.wheels.len() != Car::REQUIRED_WHEEL_COUNT {
            warn!("Can't display wheel info for a car with {} wheels", self.wheels.len());
            return Err(ValidationError::WheelCount(self.wheels.len()));
        }
        let diameters = format_as_set(self.wheels.iter().map(|w| w.diameter()));
        let rubber_types = format_as_quoted_set(self.wheels.iter().map(|w| w.rubber_type()));
        Ok(format!("диаметр колес: {}\nтип резины: {}\n", diameters, rubber_types))
    }
}
