//! 由后缀序列构建表达式树

use tracing::trace;

use crate::ast::Expr;
use crate::error::{ExprResult, malformed_postfix};
use crate::lexer::Token;

/// 消费后缀序列，返回唯一的根节点
///
/// 遇到运算符时先弹出的是右子树、后弹出的是左子树。
/// 结束时栈中必须恰好剩一个节点，空序列（例如只有括号的输入）同样视为畸形。
pub fn build_tree(postfix: &[Token]) -> ExprResult<Expr> {
    let mut stack: Vec<Expr> = Vec::new();

    for (index, token) in postfix.iter().enumerate() {
        match token {
            Token::Operand(value) => stack.push(Expr::operand(value.clone())),
            Token::Operator(op) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(malformed_postfix(format!(
                        "operator '{}' at position {} lacks two operands",
                        op, index
                    )));
                };
                stack.push(Expr::binary(*op, left, right));
            }
            Token::Paren(_) => {
                return Err(malformed_postfix(format!(
                    "unexpected parenthesis at position {}",
                    index
                )));
            }
        }
    }

    let root = stack.pop().ok_or_else(|| malformed_postfix("no operands remain"))?;
    if !stack.is_empty() {
        return Err(malformed_postfix(format!(
            "{} disconnected subtrees remain",
            stack.len() + 1
        )));
    }

    trace!(nodes = root.node_count(), "built expression tree");
    Ok(root)
}
