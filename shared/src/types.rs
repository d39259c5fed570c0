//! Common numeric helpers used across the brewing models

use rust_decimal::Decimal;

/// Round to the nearest whole number, halves rounding up.
///
/// `2.5` becomes `3` and `-2.5` becomes `-2`, the same way a browser's
/// `Math.round` behaves, so volumes shown by the frontend and the CLI agree.
pub fn round_half_up(value: Decimal) -> Decimal {
    value
        .checked_add(Decimal::new(5, 1))
        .map(|v| v.floor())
        // Only reachable at the very top of the range, where values are whole already
        .unwrap_or_else(|| value.floor())
}

fn bound(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

/// `value * factor`, clamped to `Decimal::MIN..=Decimal::MAX` instead of overflowing
pub fn saturating_mul(value: Decimal, factor: Decimal) -> Decimal {
    value
        .checked_mul(factor)
        .unwrap_or_else(|| bound(value.is_sign_negative() != factor.is_sign_negative()))
}

/// `value / divisor`, clamped the same way. Callers rule out a zero divisor.
pub fn saturating_div(value: Decimal, divisor: Decimal) -> Decimal {
    value
        .checked_div(divisor)
        .unwrap_or_else(|| bound(value.is_sign_negative() != divisor.is_sign_negative()))
}

/// `value - other`, clamped the same way
pub fn saturating_sub(value: Decimal, other: Decimal) -> Decimal {
    value
        .checked_sub(other)
        .unwrap_or_else(|| bound(other.is_sign_positive()))
}

/// Render a quantity without trailing zeros (`84.0` -> `84`, `14.50` -> `14.5`)
pub fn display_quantity(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Render a brew ratio as `1:X`
pub fn display_ratio(ratio: Decimal) -> String {
    format!("1:{}", display_quantity(ratio))
}
