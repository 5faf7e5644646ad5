//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that classifies gate decisions.

use serde::Serialize;

/// エラー種別の列挙体
///
/// ポリシーゲートが返す拒否・失敗の分類を定義します。
/// 各バリアントは「違反カウントに加算されるか」「終端状態か」を知っています。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::RateLimited;
/// assert!(kind.counts_as_violation());
/// assert_eq!(kind.as_str(), "Rate Limited");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 入力が空 — ユーザーの操作ミス。違反には数えない
    EmptyInput,
    /// 入力が長すぎる — 違反として加算される
    TooLong,
    /// レート制限超過 — 違反として加算される
    RateLimited,
    /// アカウントロック中 — 明示的なリセットまで解除されない終端状態
    Locked,
    /// 権限不足 — モデレーター以上が必要な操作
    Forbidden,
    /// 対象が見つからない
    NotFound,
    /// 内部エラー
    Internal,
}

impl ErrorKind {
    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Locked.as_str(), "Locked");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "Empty Input",
            ErrorKind::TooLong => "Too Long",
            ErrorKind::RateLimited => "Rate Limited",
            ErrorKind::Locked => "Locked",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Internal => "Internal Error",
        }
    }

    /// セキュリティ違反として加算されるかどうかを判定
    ///
    /// レート制限超過と長すぎる入力のみが違反として扱われます。
    /// 空入力は操作ミスであり、罰しません。
    #[inline]
    pub const fn counts_as_violation(&self) -> bool {
        matches!(self, ErrorKind::TooLong | ErrorKind::RateLimited)
    }

    /// 終端状態かどうかを判定
    ///
    /// `Locked` のみが終端状態です。再認証による明示的なリセットまで
    /// すべてのゲート操作がこの種別で拒否され続けます。
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, ErrorKind::Locked)
    }

    /// 内部エラーかどうかを判定
    ///
    /// これらのエラーはログに記録すべきです。
    #[inline]
    pub const fn is_internal(&self) -> bool {
        matches!(self, ErrorKind::Internal)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(ErrorKind::EmptyInput.as_str(), "Empty Input");
        assert_eq!(ErrorKind::TooLong.as_str(), "Too Long");
        assert_eq!(ErrorKind::RateLimited.as_str(), "Rate Limited");
        assert_eq!(ErrorKind::Locked.as_str(), "Locked");
        assert_eq!(ErrorKind::Forbidden.as_str(), "Forbidden");
        assert_eq!(ErrorKind::NotFound.as_str(), "Not Found");
        assert_eq!(ErrorKind::Internal.as_str(), "Internal Error");
    }

    #[test]
    fn test_counts_as_violation() {
        assert!(ErrorKind::TooLong.counts_as_violation());
        assert!(ErrorKind::RateLimited.counts_as_violation());
        assert!(!ErrorKind::EmptyInput.counts_as_violation());
        assert!(!ErrorKind::Locked.counts_as_violation());
        assert!(!ErrorKind::Forbidden.counts_as_violation());
        assert!(!ErrorKind::NotFound.counts_as_violation());
        assert!(!ErrorKind::Internal.counts_as_violation());
    }

    #[test]
    fn test_is_terminal() {
        assert!(ErrorKind::Locked.is_terminal());
        assert!(!ErrorKind::RateLimited.is_terminal());
        assert!(!ErrorKind::TooLong.is_terminal());
        assert!(!ErrorKind::EmptyInput.is_terminal());
    }

    #[test]
    fn test_is_internal() {
        assert!(ErrorKind::Internal.is_internal());
        assert!(!ErrorKind::NotFound.is_internal());
        assert!(!ErrorKind::Locked.is_internal());
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorKind::RateLimited).unwrap();
        assert_eq!(json, "\"RATE_LIMITED\"");
        let json = serde_json::to_string(&ErrorKind::EmptyInput).unwrap();
        assert_eq!(json, "\"EMPTY_INPUT\"");
    }
}
