//! 错误定义与诊断输出
//!
//! 编译流水线的每一个阶段都返回 [`ExprResult`]。任何错误都会立即终止本次编译，
//! 不返回部分结果。

use std::fmt;
use thiserror::Error;

pub type ExprResult<T> = Result<T, ExprError>;

/// 括号不匹配的两种情形
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenMismatch {
    /// 遇到 `)` 时栈中没有对应的 `(`
    UnexpectedClose,
    /// 输入结束时仍有未闭合的 `(`
    UnclosedOpen,
}

impl fmt::Display for ParenMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParenMismatch::UnexpectedClose => write!(f, "')' has no matching '('"),
            ParenMismatch::UnclosedOpen => write!(f, "'(' is never closed"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// 非法字符或负数字面量，`column` 从 1 开始计数
    #[error("Invalid expression at column {column}: {reason}")]
    InvalidExpression { column: usize, reason: String },

    #[error("No expression to parse")]
    EmptyExpression,

    #[error("Malformed postfix sequence: {reason}")]
    MalformedPostfix { reason: String },

    /// `index` 为出错括号在 token 序列中的下标
    #[error("Unbalanced parentheses: {kind} (token #{index})")]
    UnbalancedParentheses { kind: ParenMismatch, index: usize },
}

impl ExprError {
    /// 出错位置所在的列（仅校验错误可定位到源码列）
    pub fn column(&self) -> Option<usize> {
        match self {
            ExprError::InvalidExpression { column, .. } => Some(*column),
            _ => None,
        }
    }

    /// 出错的流水线阶段名称
    pub fn stage(&self) -> &'static str {
        match self {
            ExprError::InvalidExpression { .. } => "validation",
            ExprError::EmptyExpression => "tokenization",
            ExprError::UnbalancedParentheses { .. } => "conversion",
            ExprError::MalformedPostfix { .. } => "tree construction",
        }
    }
}

pub fn invalid_expression(column: usize, reason: impl Into<String>) -> ExprError {
    ExprError::InvalidExpression { column, reason: reason.into() }
}

pub fn malformed_postfix(reason: impl Into<String>) -> ExprError {
    ExprError::MalformedPostfix { reason: reason.into() }
}

pub fn unbalanced(kind: ParenMismatch, index: usize) -> ExprError {
    ExprError::UnbalancedParentheses { kind, index }
}

/// 渲染带上下文的错误信息：错误描述、表达式原文，以及可定位时指向出错列的 `^`
pub fn render_error_with_context(error: &ExprError, source: &str, origin: &str) -> String {
    let mut out = format!("error[{}]: {}\n", error.stage(), error);
    match error.column() {
        Some(column) => out.push_str(&format!("  --> {}:{}\n", origin, column)),
        None => out.push_str(&format!("  --> {}\n", origin)),
    }
    out.push_str("   |\n");
    out.push_str(&format!("   | {}\n", source));
    if let Some(column) = error.column() {
        out.push_str(&format!("   | {}^\n", " ".repeat(column.saturating_sub(1))));
    }
    out
}

pub fn print_error_with_context(error: &ExprError, source: &str, origin: &str) {
    eprint!("{}", render_error_with_context(error, source, origin));
}
