//! Authorization store: the set of trip tokens allowed to run privileged commands.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Reasons the admin set refused a change
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminError {
    /// Token does not look like a trip code
    #[error("Invalid trip token: '{0}'")]
    InvalidToken(String),

    /// Token is already in the admin set
    #[error("Trip '{0}' is already an admin")]
    AlreadyAdmin(String),

    /// The super admin can never be removed
    #[error("Trip '{0}' is the super admin and cannot be removed")]
    SuperAdmin(String),

    /// Token is not in the admin set
    #[error("Trip '{0}' is not an admin")]
    NotFound(String),
}

/// Check whether `token` has the shape of a trip code (six base64 characters).
pub fn is_valid_token(token: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9+/]{6}$").expect("Invalid trip pattern"))
        .is_match(token)
}

/// Insertion-ordered admin trip set with a permanent super admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminTokens {
    super_admin: String,
    tokens: Vec<String>,
}

impl AdminTokens {
    /// Create the set seeded with the super admin token.
    pub fn new(super_admin: impl Into<String>) -> Result<Self, AdminError> {
        let super_admin = super_admin.into();
        if !is_valid_token(&super_admin) {
            return Err(AdminError::InvalidToken(super_admin));
        }
        Ok(Self {
            tokens: vec![super_admin.clone()],
            super_admin,
        })
    }

    /// The token that can never be removed
    pub fn super_admin(&self) -> &str {
        &self.super_admin
    }

    /// Membership test. A missing token (e.g. whispers) is never an admin.
    pub fn is_admin(&self, token: Option<&str>) -> bool {
        token.is_some_and(|token| self.tokens.iter().any(|t| t == token))
    }

    pub fn add(&mut self, token: &str) -> Result<(), AdminError> {
        if !is_valid_token(token) {
            return Err(AdminError::InvalidToken(token.to_string()));
        }
        if self.is_admin(Some(token)) {
            return Err(AdminError::AlreadyAdmin(token.to_string()));
        }
        self.tokens.push(token.to_string());
        Ok(())
    }

    pub fn remove(&mut self, token: &str) -> Result<(), AdminError> {
        if token == self.super_admin {
            return Err(AdminError::SuperAdmin(token.to_string()));
        }
        let index = self
            .tokens
            .iter()
            .position(|t| t == token)
            .ok_or_else(|| AdminError::NotFound(token.to_string()))?;
        self.tokens.remove(index);
        Ok(())
    }

    /// Tokens in insertion order, super admin first
    pub fn list(&self) -> &[String] {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_admins() -> AdminTokens {
        AdminTokens::new("123456").unwrap()
    }

    #[test]
    fn test_new_rejects_malformed_seed() {
        // テスト項目: trip 形式でないシードトークンは拒否される
        // given (前提条件):
        let seed = "short";

        // when (操作):
        let result = AdminTokens::new(seed);

        // then (期待する結果):
        assert_eq!(result, Err(AdminError::InvalidToken("short".to_string())));
    }

    #[test]
    fn test_super_admin_is_member_from_start() {
        // テスト項目: 作成直後からスーパー管理者は管理者である
        // given (前提条件):
        let admins = create_admins();

        // when (操作):
        let result = admins.is_admin(Some("123456"));

        // then (期待する結果):
        assert!(result);
        assert_eq!(admins.list(), ["123456".to_string()]);
    }

    #[test]
    fn test_missing_token_is_never_admin() {
        // テスト項目: トークンなし（私信など）は管理者として扱われない
        // given (前提条件):
        let admins = create_admins();

        // when (操作):
        let result = admins.is_admin(None);

        // then (期待する結果):
        assert!(!result);
    }

    #[test]
    fn test_add_then_is_admin() {
        // テスト項目: 追加したトークンは直後に管理者と判定される
        // given (前提条件):
        let mut admins = create_admins();

        // when (操作):
        let result = admins.add("ab+/9Z");

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(admins.is_admin(Some("ab+/9Z")));
    }

    #[test]
    fn test_add_rejects_invalid_format() {
        // テスト項目: 形式が不正なトークンは追加できない
        // given (前提条件):
        let mut admins = create_admins();

        // when (操作):
        let too_long = admins.add("abcdefg");
        let bad_char = admins.add("abc-ef");

        // then (期待する結果):
        assert_eq!(too_long, Err(AdminError::InvalidToken("abcdefg".to_string())));
        assert_eq!(bad_char, Err(AdminError::InvalidToken("abc-ef".to_string())));
        assert_eq!(admins.list().len(), 1);
    }

    #[test]
    fn test_add_rejects_duplicate() {
        // テスト項目: 既に管理者のトークンは重複して追加されない
        // given (前提条件):
        let mut admins = create_admins();
        admins.add("xyz123").unwrap();

        // when (操作):
        let result = admins.add("xyz123");

        // then (期待する結果):
        assert_eq!(result, Err(AdminError::AlreadyAdmin("xyz123".to_string())));
        assert_eq!(admins.list().len(), 2);
    }

    #[test]
    fn test_remove_super_admin_always_fails() {
        // テスト項目: スーパー管理者は削除できない
        // given (前提条件):
        let mut admins = create_admins();

        // when (操作):
        let result = admins.remove("123456");

        // then (期待する結果):
        assert_eq!(result, Err(AdminError::SuperAdmin("123456".to_string())));
        assert!(admins.is_admin(Some("123456")));
    }

    #[test]
    fn test_remove_then_not_admin() {
        // テスト項目: 削除したトークンは管理者でなくなる
        // given (前提条件):
        let mut admins = create_admins();
        admins.add("xyz123").unwrap();

        // when (操作):
        let result = admins.remove("xyz123");

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(!admins.is_admin(Some("xyz123")));
    }

    #[test]
    fn test_remove_unknown_token() {
        // テスト項目: 存在しないトークンの削除は NotFound になる
        // given (前提条件):
        let mut admins = create_admins();

        // when (操作):
        let result = admins.remove("nobody");

        // then (期待する結果):
        assert_eq!(result, Err(AdminError::NotFound("nobody".to_string())));
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        // テスト項目: 管理者リストは追加順を保持する
        // given (前提条件):
        let mut admins = create_admins();
        admins.add("zzzzzz").unwrap();
        admins.add("aaaaaa").unwrap();
        admins.add("mmmmmm").unwrap();
        admins.remove("aaaaaa").unwrap();

        // when (操作):
        let list = admins.list();

        // then (期待する結果):
        assert_eq!(list, ["123456", "zzzzzz", "mmmmmm"]);
    }
}
