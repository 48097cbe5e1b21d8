//! pt-BR number formatting for terminal output.

/// Formats an amount as Brazilian reais, e.g. `R$ 1.250,00`.
pub fn format_brl(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = sign_of(value, cents);
    format!(
        "{}R$ {},{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Formats a number with up to two decimals, dropping trailing zeros.
pub fn format_number(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = sign_of(value, cents);
    let integer = group_thousands(cents / 100);
    let fraction = cents % 100;

    if fraction == 0 {
        format!("{}{}", sign, integer)
    } else if fraction % 10 == 0 {
        format!("{}{},{}", sign, integer, fraction / 10)
    } else {
        format!("{}{},{:02}", sign, integer, fraction)
    }
}

// No sign when the amount rounds to zero.
fn sign_of(value: f64, cents: u64) -> &'static str {
    if cents > 0 && value < 0.0 {
        "-"
    } else {
        ""
    }
}

fn group_thousands(mut value: u64) -> String {
    let mut groups = Vec::new();
    while value >= 1000 {
        groups.push(format!("{:03}", value % 1000));
        value /= 1000;
    }
    groups.push(value.to_string());
    groups.reverse();
    groups.join(".")
}
