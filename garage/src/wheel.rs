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

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Wheel {
    diameter: i32,
    rubber_type: String
}

impl Wheel {
    pub fn new(diameter: i32, rubber_type: &str) -> Wheel {
        Wheel { diameter, rubber_type: rubber_type.to_string() }
    }

    pub fn diameter(&self) -> i32 {
        self.diameter
    }

    pub fn rubber_type(&self) -> &str {
        &self.rubber_type
    }
}

#[cfg(test)]
mod tests {
    use crate::wheel::Wheel;

    #[test]
    fn keeps_constructor_values() {
        let wheel = Wheel::new(18, "летняя");
        assert_eq!(wheel.diameter(), 18);
        assert_eq!(wheel.rubber_type(), "летняя");
    }

    #[test]
    fn unchecked_diameters() {
        assert_eq!(Wheel::new(0, "зимняя").diameter(), 0);
        assert_eq!(Wheel::new(-15, "зимняя").diameter(), -15);
    }
}
