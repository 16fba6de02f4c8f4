pub mod generate;
pub mod pantry;
pub mod plan;
pub mod profile;
pub mod recipes;
pub mod shopping;

use time::Date;

/// Clap value parser for `YYYY-MM-DD` (a trailing time part is ignored).
pub fn parse_date_arg(value: &str) -> Result<Date, String> {
    chefbuddy_shared::parse_date(value).ok_or_else(|| format!("invalid date {value:?}, expected YYYY-MM-DD"))
}

/// Split comma separated values, dropping blanks.
pub fn split_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn dates_accept_plain_and_timestamped_input() {
        assert_eq!(parse_date_arg("2025-06-10"), Ok(date!(2025 - 06 - 10)));
        assert_eq!(parse_date_arg("2025-06-10T08:00:00Z"), Ok(date!(2025 - 06 - 10)));
        assert!(parse_date_arg("10/06/2025").is_err());
    }

    #[test]
    fn lists_split_on_commas() {
        let values = vec!["Vegan, Halal".to_owned(), " ".to_owned(), "Nuts".to_owned()];

        assert_eq!(split_list(&values), vec!["Vegan", "Halal", "Nuts"]);
    }
}
