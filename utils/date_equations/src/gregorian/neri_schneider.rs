// The computational calendar starts the year on March 1st, which
// places the leap day at the end of the year. Computational day 0
// of a 400 year cycle is March 1st of year 0 (mod 400).
//
// Rata Die values below are computational Rata Die as referenced
// in the paper.

/// The computational Rata Die of 1970-01-01.
pub const EPOCH_COMPUTATIONAL_RATA_DIE: i64 = 719_468;
/// Days in a complete 400 year Gregorian cycle.
pub const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;

const TWO_POWER_THIRTY_NINE: u64 = 549_755_813_888; // 2^39 constant
const TWO_POWER_SIXTEEN: u32 = 65_536; // 2^16 constant

// Calculate epoch days from a gregorian date

/// Returns the number of days since 1970-01-01 for a proleptic Gregorian date.
///
/// The month must be 1-12 and the day must be at least 1. Days past
/// the end of the month carry into the following month.
pub const fn epoch_days_from_gregorian_date(year: i32, month: u8, day: u8) -> i64 {
    let (comp_year, comp_month, comp_day) = rata_die_first_equations(year, month, day);
    let cycle = comp_year.div_euclid(400);
    let year_of_cycle = comp_year.rem_euclid(400);
    let century = year_of_cycle / 100;
    let y_star = 1461 * year_of_cycle / 4 - century + century / 4;
    let m_star = (979 * comp_month - 2919) / 32;
    cycle * DAYS_IN_A_400Y_CYCLE + y_star + m_star + comp_day - EPOCH_COMPUTATIONAL_RATA_DIE
}

// Returns Y, M, D
const fn rata_die_first_equations(year: i32, month: u8, day: u8) -> (i64, i64, i64) {
    let j = (month <= 2) as i64;
    let computational_year = year as i64 - j;
    let computational_month = month as i64 + 12 * j;
    let computational_day = day as i64 - 1;
    (computational_year, computational_month, computational_day)
}

// Computational day of cycle to gregorian YMD

// Returns C, N_c
const fn first_equations(day_of_cycle: u32) -> (u32, u32) {
    let n_one = 4 * day_of_cycle + 3;
    let century_num = n_one / DAYS_IN_A_400Y_CYCLE as u32;
    let century_rem = n_one % DAYS_IN_A_400Y_CYCLE as u32;
    (century_num, century_rem)
}

// Returns Y, N_y
const fn second_equations(day_of_cycle: u32) -> (u32, u32) {
    let (century, rem) = first_equations(day_of_cycle);
    let n_two = rem | 3;
    let year_of_century = ((376_287_347 * n_two as u64) / TWO_POWER_THIRTY_NINE) as u32;
    let day_of_year = (n_two - 1461 * year_of_century) / 4;
    (100 * century + year_of_century, day_of_year)
}

// Returns Y, M, D, N_y
const fn third_equations(day_of_cycle: u32) -> (u32, u32, u32, u32) {
    let (year, day_of_year) = second_equations(day_of_cycle);
    let n_three = 2141 * day_of_year + 197_913;
    let month = n_three / TWO_POWER_SIXTEEN;
    let day = (n_three % TWO_POWER_SIXTEEN) / 2141;
    (year, month, day, day_of_year)
}

/// Converts a computational day of a 400 year cycle into the year of
/// cycle, month, and day.
pub const fn gregorian_ymd_of_cycle(day_of_cycle: u32) -> (u32, u8, u8) {
    let (year, month, day, day_of_year) = third_equations(day_of_cycle);
    let j = (day_of_year >= 306) as u32;
    (year + j, (month - 12 * j) as u8, (day + 1) as u8)
}

/// Returns the proleptic Gregorian year, month, and day of the epoch day.
pub const fn gregorian_ymd_from_epoch_days(epoch_days: i64) -> (i32, u8, u8) {
    let rata_die = epoch_days + EPOCH_COMPUTATIONAL_RATA_DIE;
    let cycle = rata_die.div_euclid(DAYS_IN_A_400Y_CYCLE);
    let day_of_cycle = rata_die.rem_euclid(DAYS_IN_A_400Y_CYCLE) as u32;
    let (year_of_cycle, month, day) = gregorian_ymd_of_cycle(day_of_cycle);
    ((cycle * 400 + year_of_cycle as i64) as i32, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_ymd() {
        assert_eq!(gregorian_ymd_from_epoch_days(0), (1970, 1, 1));
        assert_eq!(epoch_days_from_gregorian_date(1970, 1, 1), 0);
    }

    #[test]
    fn cycle_start() {
        // Computational day 0 of a cycle is March 1st.
        assert_eq!(gregorian_ymd_of_cycle(0), (0, 3, 1));
        assert_eq!(gregorian_ymd_of_cycle(305), (0, 12, 31));
        assert_eq!(gregorian_ymd_of_cycle(306), (1, 1, 1));
    }

    #[test]
    fn known_dates() {
        assert_eq!(epoch_days_from_gregorian_date(2000, 3, 1), 11_017);
        assert_eq!(gregorian_ymd_from_epoch_days(11_017), (2000, 3, 1));
        assert_eq!(epoch_days_from_gregorian_date(2024, 2, 29), 19_782);
        assert_eq!(gregorian_ymd_from_epoch_days(19_782), (2024, 2, 29));
        assert_eq!(epoch_days_from_gregorian_date(1969, 12, 31), -1);
        assert_eq!(gregorian_ymd_from_epoch_days(-1), (1969, 12, 31));
        assert_eq!(epoch_days_from_gregorian_date(0, 1, 1), -719_528);
        assert_eq!(gregorian_ymd_from_epoch_days(-719_528), (0, 1, 1));
    }

    #[test]
    fn day_overflow_carries() {
        assert_eq!(
            epoch_days_from_gregorian_date(2000, 2, 31),
            epoch_days_from_gregorian_date(2000, 3, 2)
        );
    }

    #[test]
    fn round_trip_over_cycle() {
        let start = epoch_days_from_gregorian_date(1599, 1, 1);
        for epoch_days in start..start + DAYS_IN_A_400Y_CYCLE + 800 {
            let (y, m, d) = gregorian_ymd_from_epoch_days(epoch_days);
            assert_eq!(epoch_days_from_gregorian_date(y, m, d), epoch_days);
        }
    }

    #[test]
    fn far_range() {
        let min_days = i64::MIN.div_euclid(86_400_000);
        let (y, m, d) = gregorian_ymd_from_epoch_days(min_days);
        assert_eq!(epoch_days_from_gregorian_date(y, m, d), min_days);
        let max_days = i64::MAX.div_euclid(86_400_000);
        let (y, m, d) = gregorian_ymd_from_epoch_days(max_days);
        assert_eq!(epoch_days_from_gregorian_date(y, m, d), max_days);
    }
}
