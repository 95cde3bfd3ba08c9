use anyhow::{anyhow, Result};
use odla_core::error::CoreError;
use odla_core::models::{UserContext, UserId};
use odla_core::month::Month;
use odla_core::repository::Repository;

use crate::config::Config;

/// Picks the acting user: the configured id, else the oldest local profile,
/// else a freshly created one.
pub async fn resolve_user_context(repo: &impl Repository, config: &Config) -> Result<UserContext> {
    let profile = match config.user_id {
        Some(user) => repo.ensure_profile(user).await?,
        None => match repo.find_first_profile().await? {
            Some(profile) => profile,
            None => {
                let profile = repo.ensure_profile(UserId::new()).await?;
                tracing::info!(user = %profile.id, "created local profile");
                profile
            }
        },
    };
    Ok(UserContext::new(profile.id))
}

/// Parses a month given as a number or a Swedish name into its number.
///
/// Out-of-range numbers are passed through so task validation can report them.
pub fn parse_month_arg(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    if let Ok(number) = trimmed.parse::<u32>() {
        return Ok(number);
    }
    trimmed
        .parse::<Month>()
        .map(Month::number)
        .map_err(|_| {
            anyhow!(CoreError::InvalidInput(format!(
                "'{input}' is not a month. Use a name like 'mars' or a number 1-12."
            )))
        })
}

/// Converts a one-based page number from the command line to a page index.
pub fn page_index(page: usize) -> usize {
    page.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3", 3)]
    #[case("mars", 3)]
    #[case(" December ", 12)]
    #[case("13", 13)]
    fn test_parse_month_arg(#[case] input: &str, #[case] expected: u32) {
        assert_eq!(parse_month_arg(input).unwrap(), expected);
    }

    #[test]
    fn test_parse_month_arg_rejects_unknown_names() {
        let err = parse_month_arg("marsipan").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::InvalidInput(_))
        ));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(3, 2)]
    fn test_page_index(#[case] page: usize, #[case] expected: usize) {
        assert_eq!(page_index(page), expected);
    }
}
