use chrono::NaiveDate;

const RUPEE: &str = "₹";

// Last three digits, then pairs.
fn group_indian_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

pub fn format_currency_inr(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" {
        "-"
    } else {
        ""
    };

    format!(
        "{RUPEE}{sign}{}.{frac_part}",
        group_indian_digits(int_part)
    )
}

pub fn format_label_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

pub fn format_month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_uses_indian_grouping() {
        assert_eq!(format_currency_inr(0.0), "₹0.00");
        assert_eq!(format_currency_inr(400.0), "₹400.00");
        assert_eq!(format_currency_inr(1234.5), "₹1,234.50");
        assert_eq!(format_currency_inr(123456.0), "₹1,23,456.00");
        assert_eq!(format_currency_inr(12345678.9), "₹1,23,45,678.90");
        assert_eq!(format_currency_inr(1000000000.0), "₹1,00,00,00,000.00");
    }

    #[test]
    fn currency_rounds_to_two_places() {
        assert_eq!(format_currency_inr(99.999), "₹100.00");
        assert_eq!(format_currency_inr(10.004), "₹10.00");
    }

    #[test]
    fn currency_handles_sign_and_non_finite() {
        assert_eq!(format_currency_inr(-1234.5), "₹-1,234.50");
        assert_eq!(format_currency_inr(-0.001), "₹0.00");
        assert_eq!(format_currency_inr(f64::NAN), "₹0.00");
        assert_eq!(format_currency_inr(f64::INFINITY), "₹0.00");
    }

    #[test]
    fn label_dates_use_two_digit_day_and_short_month() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).expect("valid date");

        assert_eq!(format_label_date(date), "05 Jan 2025");
        assert_eq!(format_month_label(date), "Jan 2025");
    }
}
