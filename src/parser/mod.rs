//! 语法分析
//!
//! 中缀 token 序列先经调度场算法转为后缀序列，再由后缀序列组装表达式树。

mod shunting_yard;
mod tree_builder;

pub use shunting_yard::*;
pub use tree_builder::*;

use crate::ast::Expr;
use crate::error::ExprResult;
use crate::lexer::Token;

/// 中缀 token 序列 → 表达式树
pub fn parse(tokens: &[Token]) -> ExprResult<Expr> {
    let postfix = to_postfix(tokens)?;
    build_tree(&postfix)
}
