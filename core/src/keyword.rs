// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords of the recurrence token string.

// Tags, token 0
pub const KW_EVERY_WEEKDAY: &str = "EveryWeekday";
pub const KW_WEEKLY_ON: &str = "WeeklyOn";
pub const KW_DAY_N_OF_MONTH: &str = "DayNOfMonth";
pub const KW_NTH_DAY_NAME_OF_MONTH: &str = "NthDayNameOfMonth";
pub const KW_LAST_DAY_NAME_OF_MONTH: &str = "LastDayNameOfMonth";
pub const KW_EVERY_MONTH_NAME_N: &str = "EveryMonthNameN";
pub const KW_NTH_DAY_NAME_OF_MONTH_NAME: &str = "NthDayNameOfMonthName";
pub const KW_LAST_DAY_NAME_OF_MONTH_NAME: &str = "LastDayNameOfMonthName";

// Time block, tokens 1 to 3
pub const KW_SECONDS: &str = "00";

// Separators
pub const SEP_TOKEN: char = ' ';
pub const SEP_DAY_LIST: char = ',';
