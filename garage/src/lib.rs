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

mod error;
mod engine;
mod body;
mod wheel;
mod car;

pub use error::{Result, ValidationError};
pub use engine::{Engine, FuelTypes, HorsePower};
pub use body::CarBody;
pub use wheel::Wheel;
pub use car::Car;
