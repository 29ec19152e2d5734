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

use std::fmt::Display;
use std::hash::Hash;
use itertools::Itertools;

/// Formats the distinct values of `items` as a set, i.e. `{18, 20}`.
///
/// Duplicates are collapsed and the remaining values keep the order in which
/// they were first seen.
pub fn format_as_set<I, T>(items: I) -> String
    where I: IntoIterator<Item=T>,
          T: Display + Eq + Hash + Clone
{
    format!("{{{}}}", items.into_iter().unique().join(", "))
}

/// Same as [format_as_set] but each value is wrapped in single quotes, i.e. `{'a', 'b'}`
pub fn format_as_quoted_set<I, T>(items: I) -> String
    where I: IntoIterator<Item=T>,
          T: Display + Eq + Hash + Clone
{
    format!("{{{}}}", items.into_iter().unique().map(|item| format!("'{}'", item)).join(", "))
}
