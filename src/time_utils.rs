// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local-time defaults for risk queries.

use chrono::{Datelike, Local, Timelike};

/// Current local hour, 0-23.
pub fn current_hour() -> u32 {
    Local::now().hour()
}

/// Current local day of week, 0 = Sunday through 6 = Saturday
/// (the convention the risk service expects for `dia_semana`).
pub fn current_weekday() -> u32 {
    Local::now().weekday().num_days_from_sunday()
}

/// Current local month, 1-12.
pub fn current_month() -> u32 {
    Local::now().month()
}
