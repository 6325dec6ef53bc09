//! Coin totals for the triangular round schedule.
//!
//! Round `i` lasts `i` days and pays `i` coins on each of its days,
//! so a full round adds `i` to the day count and `i * i` to the total.

/// Counts coins earned over the first `k` days.
///
/// Rounds are taken whole until the day count reaches `k`,
/// then the days of the last round past `k` are paid back.
pub fn calculate_coins(k: u32) -> u64 {
    let k = u64::from(k);
    let mut days = 0_u64;
    let mut coins = 0_u64;
    let mut i = 1_u64;

    while days < k {
        days += i;
        coins += i * i;
        i += 1;
    }

    // The last round was worth `i - 1` per day.
    let overshoot = days - k;
    trace!("k={} rounds={} overshoot={}", k, i - 1, overshoot);

    coins - overshoot * (i - 1)
}
