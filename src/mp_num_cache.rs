use lazy_static::*;

use crate::mp_num_constants::*;

lazy_static! {
    pub static ref LOG_CACHE: [f64; MAX_BASE as usize + 1] = {
        let mut log_cache = [0_f64; MAX_BASE as usize + 1];
        for i in MIN_BASE as usize..=MAX_BASE as usize {
            log_cache[i] = (i as f64).ln();
        }
        log_cache
    };
}

/// Upper bound on the number of digits needed to write `bits` bits in `base`.
pub fn digits_for_bits(bits: usize, base: u32) -> usize {
    ((bits as f64 * LOG_CACHE[2]) / LOG_CACHE[base as usize]) as usize + 1
}

/// Upper bound on the number of words needed to hold `digits` digits of `base`.
pub fn words_for_digits(digits: usize, base: u32) -> usize {
    let bits = (digits as f64 * LOG_CACHE[base as usize] / LOG_CACHE[2]) as usize + 1;
    (bits + WORD_BITS - 1) / WORD_BITS
}

#[test]
fn test_capacity_estimates() {
    assert_eq!(digits_for_bits(0, 10), 1);
    // 2^64 - 1 has 20 decimal digits
    assert!(digits_for_bits(64, 10) >= 20);
    assert!(digits_for_bits(64, 16) >= 16);
    assert!(words_for_digits(20, 10) >= 2);
    assert!(words_for_digits(8, 16) >= 1);
}
