//! Shared validation rules for bot credentials and endpoints.

use botdeck_core::AppResult;
use botdeck_core::error::AppError;

/// Minimum length of the secret half of a bot token.
const TOKEN_SECRET_MIN_LEN: usize = 30;

/// Validate the shape of a BotFather token: `<numeric id>:<secret>` where
/// the secret is at least 30 characters of `[A-Za-z0-9_-]`.
///
/// Shape only; whether the token is actually valid is for the Telegram
/// API collaborator to decide.
pub fn validate_token(token: &str) -> AppResult<()> {
    let Some((bot_id, secret)) = token.split_once(':') else {
        return Err(AppError::validation(
            "Bot token must have the form <id>:<secret>",
        ));
    };

    if bot_id.is_empty() || !bot_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::validation("Bot token id part must be numeric"));
    }

    if secret.len() < TOKEN_SECRET_MIN_LEN
        || !secret
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AppError::validation("Bot token secret part is malformed"));
    }

    Ok(())
}

/// Validate a webhook endpoint URL. Telegram only delivers updates over
/// HTTPS.
pub fn validate_webhook_url(url: &str) -> AppResult<()> {
    if !url.starts_with("https://") {
        return Err(AppError::validation("Webhook URL must use https"));
    }
    if url.len() <= "https://".len() {
        return Err(AppError::validation("Webhook URL is missing a host"));
    }
    Ok(())
}

/// Validate a bot username: at least 3 characters (an optional leading
/// `@` is ignored), limited to `[A-Za-z0-9_]`.
pub fn validate_username(username: &str) -> AppResult<()> {
    let handle = username.strip_prefix('@').unwrap_or(username);
    if handle.len() < 3 {
        return Err(AppError::validation(
            "Username must be at least 3 characters",
        ));
    }
    if !handle
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(AppError::validation(
            "Username may only contain letters, digits, and underscores",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shape() {
        assert!(validate_token("1234567890:ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijk").is_ok());
        assert!(validate_token("no-colon").is_err());
        assert!(validate_token("abc:ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijk").is_err());
        assert!(validate_token("1234567890:short").is_err());
        assert!(validate_token("1234567890:ABCDEFGHIJKLMNOPQRSTUVWXYZ abcdefghij").is_err());
    }

    #[test]
    fn test_webhook_url() {
        assert!(validate_webhook_url("https://bots.example.com/webhook").is_ok());
        assert!(validate_webhook_url("http://bots.example.com/webhook").is_err());
        assert!(validate_webhook_url("https://").is_err());
    }

    #[test]
    fn test_username() {
        assert!(validate_username("@support_bot").is_ok());
        assert!(validate_username("support_bot").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("bad handle").is_err());
    }
}
