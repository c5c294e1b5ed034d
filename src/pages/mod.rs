//! Pages
//!
//! The authentication screen and the six resource screens.

pub mod auth;
pub mod bookings;
pub mod contracts;
pub mod offices;
pub mod payments;
pub mod requests;
pub mod tenants;

pub use auth::AuthPage;
pub use bookings::BookingsPage;
pub use contracts::ContractsPage;
pub use offices::OfficesPage;
pub use payments::PaymentsPage;
pub use requests::RequestsPage;
pub use tenants::TenantsPage;

/// Short date form used across tables and cards.
pub(crate) fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Presence-and-shape check for a numeric form field; the message becomes
/// the inline modal error.
pub(crate) fn parse_field<T: std::str::FromStr>(
    value: &str,
    message: &'static str,
) -> Result<T, String> {
    value.trim().parse().map_err(|_| message.to_string())
}

/// Same for a date input's `YYYY-MM-DD` value.
pub(crate) fn parse_date_field(
    value: &str,
    message: &'static str,
) -> Result<chrono::NaiveDate, String> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_date(date), "Mar 07, 2025");
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field::<u32>(" 50 ", "bad"), Ok(50));
        assert_eq!(
            parse_field::<u32>("fifty", "Area must be a whole number"),
            Err("Area must be a whole number".to_string())
        );
    }

    #[test]
    fn test_parse_date_field() {
        assert_eq!(
            parse_date_field("2025-03-07", "bad"),
            Ok(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap())
        );
        assert!(parse_date_field("07.03.2025", "bad").is_err());
    }
}
