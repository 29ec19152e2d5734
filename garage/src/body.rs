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

/// Body style (sedan, hatchback, SUV...) and door count of a car.
///
/// Neither value is validated, a zero or negative door count is stored as given.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CarBody {
    body_style: String,
    door_count: i32
}

impl CarBody {
    pub fn new(body_style: &str, door_count: i32) -> CarBody {
        CarBody { body_style: body_style.to_string(), door_count }
    }

    pub fn body_style(&self) -> &str {
        &self.body_style
    }

    pub fn door_count(&self) -> i32 {
        self.door_count
    }
}

impl Display for CarBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "тип кузова: {}\nколичество дверей: {}", self.body_style, self.door_count)
    }
}
