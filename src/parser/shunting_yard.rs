//! 调度场算法：中缀 → 后缀

use tracing::trace;

use crate::error::{ExprResult, ParenMismatch, unbalanced};
use crate::lexer::{Operator, Paren, Token};

/// 运算符栈中的元素
///
/// 左括号记录自己在输入中的下标，用于报告未闭合的括号。
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator),
    Open(usize),
}

/// 将中缀 token 序列转换为后缀序列
///
/// - 操作数直接进入输出队列
/// - 运算符入栈前，先把栈顶优先级不低于它的运算符依次弹出到输出队列（左结合）
/// - `(` 入栈；`)` 弹出运算符直到遇到 `(`，并丢弃这对括号
/// - 输入结束后把剩余运算符全部弹出
///
/// 括号不匹配时返回 `UnbalancedParentheses`，输出中永远不会出现括号。
pub fn to_postfix(tokens: &[Token]) -> ExprResult<Vec<Token>> {
    // 只追加的输出队列
    let mut output_queue: Vec<Token> = Vec::with_capacity(tokens.len());
    // 后进先出：push 压栈，pop 取栈顶
    let mut operator_stack: Vec<Pending> = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Operand(_) => output_queue.push(token.clone()),
            Token::Operator(op) => {
                while let Some(&Pending::Operator(top)) = operator_stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    operator_stack.pop();
                    output_queue.push(Token::Operator(top));
                }
                operator_stack.push(Pending::Operator(*op));
            }
            Token::Paren(Paren::Open) => operator_stack.push(Pending::Open(index)),
            Token::Paren(Paren::Close) => loop {
                match operator_stack.pop() {
                    Some(Pending::Operator(top)) => output_queue.push(Token::Operator(top)),
                    Some(Pending::Open(_)) => break,
                    None => return Err(unbalanced(ParenMismatch::UnexpectedClose, index)),
                }
            },
        }
    }

    while let Some(pending) = operator_stack.pop() {
        match pending {
            Pending::Operator(op) => output_queue.push(Token::Operator(op)),
            Pending::Open(index) => return Err(unbalanced(ParenMismatch::UnclosedOpen, index)),
        }
    }

    trace!(input = tokens.len(), output = output_queue.len(), "converted to postfix");
    Ok(output_queue)
}
