/// Renders an amount the way `toLocaleString('en-US')` does with two fixed
/// decimals: `1234.5` becomes `1,234.50`.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// Whole amounts without decimals, used in the plan dropdown.
pub fn format_whole(amount: f64) -> String {
    let units = amount.round() as i64;
    let sign = if units < 0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(units.unsigned_abs()))
}

pub fn format_usd(amount: f64) -> String {
    format!("$ {} USD", format_amount(amount))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
