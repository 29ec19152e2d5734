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

pub fn is_in_range(val: i32, min: i32, max: i32) -> bool {
    if val >= min && val <= max {
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::numeric::is_in_range;

    #[test]
    fn range_tests()  {
        assert_eq!(is_in_range(0, 1, 200), false);
        assert_eq!(is_in_range(1, 1, 200), true);
        assert_eq!(is_in_range(100, 1, 200), true);
        assert_eq!(is_in_range(200, 1, 200), true);
        assert_eq!(is_in_range(201, 1, 200), false);
        assert_eq!(is_in_range(-1, 1, 200), false);
        assert_eq!(is_in_range(i32::MAX, 1, 200), false);
        assert_eq!(is_in_range(i32::MIN, 1, 200), false);
        assert_eq!(is_in_range(5, 5, 5), true);
    }
}
