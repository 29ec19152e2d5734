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

mod settings;
mod showroom;

use std::env;
use std::io;
use tracing_subscriber;
use tracing_appender;
use tracing::{error, info, warn};

use crate::settings::GlobalSettings;


fn init_logging(log_filename: &str) {
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, log_filename);
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }
}

fn main() -> Result<(), showroom::ShowroomError> {
    let (settings, load_error) = match GlobalSettings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (GlobalSettings::default(), Some(e))
    };
    init_logging(settings.log_filename());

    if let Some(e) = load_error {
        warn!("Failed to load settings, using defaults. {}", e.to_string());
        eprintln!("Failed to load settings, using defaults. {}", e.to_string());
    } else if !GlobalSettings::config_path().exists() {
        info!("Writing default settings to {}", GlobalSettings::config_path().display());
        settings.write().unwrap_or_else(|e| { error!("Failed to write settings. {}", e.to_string())});
    }

    info!("Presenting {} cars", settings.showroom().len());
    let failures = showroom::present(settings.showroom(), &mut io::stdout().lock())?;
    if failures > 0 {
        error!("{} of {} cars could not be presented", failures, settings.showroom().len());
    }
    Ok(())
}
