// 🏦 Routing Number - ABA routing-transit-number checksum
// checksum = (3(d0+d3+d6) + 7(d1+d4+d7) + (d2+d5+d8)) mod 10

/// Weight applied to each digit position, cycling every three digits.
const CHECKSUM_MULTIPLIERS: [u32; 3] = [3, 7, 1];

/// Check the ABA routing-transit-number checksum.
///
/// Returns true only for a string of exactly 9 decimal digits whose weighted
/// digit sum is divisible by 10. Any other length, or any non-digit
/// character, fails the check rather than panicking.
pub fn checksum_valid(routing_number: &str) -> bool {
    if routing_number.chars().count() != 9 {
        return false;
    }

    let mut checksum = 0;
    for (i, c) in routing_number.chars().enumerate() {
        match c.to_digit(10) {
            Some(digit) => checksum += CHECKSUM_MULTIPLIERS[i % 3] * digit,
            None => return false,
        }
    }

    checksum % 10 == 0
}

// ============================================================================
// TESTS
// ============================================================================
