//! 表达式校验
//!
//! 在任何词法分析之前拒绝含有非法字符或负数字面量的表达式。

use crate::error::{ExprResult, invalid_expression};

/// 允许出现的字符：ASCII 字母、数字、四则运算符、括号与空格
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | ' ')
}

/// 纯谓词版本
pub fn validate(expression: &str) -> bool {
    check(expression).is_ok()
}

/// 返回第一个违规位置
///
/// `-` 紧跟数字即视为负数字面量，不论 `-` 前面是什么（`a-1` 同样被拒绝）。
pub fn check(expression: &str) -> ExprResult<()> {
    let mut prev: Option<char> = None;

    for (i, c) in expression.chars().enumerate() {
        let column = i + 1;
        if !is_allowed_char(c) {
            return Err(invalid_expression(column, format!("disallowed character {:?}", c)));
        }
        if c.is_ascii_digit() && prev == Some('-') {
            return Err(invalid_expression(column - 1, "negative number literals are not supported"));
        }
        prev = Some(c);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExprError;

    #[test]
    fn accepts_plain_expressions() {
        assert!(validate("a+b*c"));
        assert!(validate("(x + 12) / Y"));
        assert!(validate("a - 5"));
        assert!(validate(""));
    }

    #[test]
    fn rejects_disallowed_characters() {
        assert!(!validate("a+b;"));
        assert!(!validate("a^2"));
        assert!(!validate("a\tb"));
        assert!(!validate("ä+b"));
        assert_eq!(
            check("ab%c").unwrap_err(),
            ExprError::InvalidExpression {
                column: 3,
                reason: "disallowed character '%'".to_string(),
            }
        );
    }

    #[test]
    fn rejects_negative_literals() {
        assert!(!validate("-3+a"));
        assert!(!validate("a*(-2)"));
        assert!(!validate("a-1"));
        assert_eq!(check("b * -7").unwrap_err().column(), Some(5));
    }

    #[test]
    fn minus_before_letter_is_fine() {
        assert!(validate("a-b"));
        assert!(validate("-a"));
    }
}
