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

use std::io;
use std::io::Write;
use std::str::FromStr;
use tracing::{error, info};
use garage::{Car, FuelTypes, HorsePower, ValidationError};
use crate::settings::CarDefinition;


#[derive(thiserror::Error, Debug)]
pub enum ShowroomError {
    #[error("io error. `{0}`")]
    IoError(#[from] io::Error),
    #[error("car validation error. `{0}`")]
    Validation(#[from] ValidationError),
    #[error("failed to build `{0}`. `{1}`")]
    FailedToBuild(String, ValidationError)
}

pub fn build_car(definition: &CarDefinition) -> Result<Car, ShowroomError> {
    let to_build_error = |e: ValidationError| ShowroomError::FailedToBuild(definition.name.clone(), e);
    let horsepower = HorsePower::new(definition.horsepower).map_err(to_build_error)?;
    let fuel_type = FuelTypes::from_str(&definition.fuel_type).map_err(to_build_error)?;
    let mut car = Car::new(horsepower, fuel_type, &definition.body_style, definition.doors);
    for wheel in &definition.wheels {
        car.add_wheel(wheel.diameter, &wheel.rubber_type);
    }
    Ok(car)
}

/// Engine, body and wheel reports for `car`, one per line as they'd be printed
pub fn car_report(car: &Car) -> Result<String, ShowroomError> {
    Ok(format!("{}\n{}\n{}\n",
               car.display_engine_info(),
               car.display_car_body_info(),
               car.display_wheel_info()?))
}

/// Builds every car in `definitions` and writes its report to `out`.
///
/// A car that fails to build or report is logged and skipped. Returns the number of cars
/// that were skipped.
pub fn present<W: Write>(definitions: &[CarDefinition], out: &mut W) -> Result<usize, ShowroomError> {
    let mut failures = 0;
    for definition in definitions {
        match build_car(definition).and_then(|car| car_report(&car)) {
            Ok(report) => {
                info!("Presenting {}", definition.name);
                write!(out, "{}", report)?;
            }
            Err(e) => {
                error!("Skipping {}. {}", definition.name, e.to_string());
                eprintln!("{}: {}", definition.name, e.to_string());
                failures += 1;
            }
        }
    }
    Ok(failures)
}
