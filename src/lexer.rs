//! 词法分析
//!
//! 把已通过校验的表达式切分为 [`Token`] 序列。token 的种类在这里一次性确定，
//! 后续阶段只做模式匹配，不再根据字符串内容重新推断。

use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::error::{ExprResult, invalid_expression};

/// 二元运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// `+ -` 为 1，`* /` 为 2；全部左结合
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paren {
    Open,
    Close,
}

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// 变量名（连续字母）或数字字面量（连续数字）
    #[regex("[a-zA-Z]+", |lex| lex.slice().to_owned())]
    #[regex("[0-9]+", |lex| lex.slice().to_owned())]
    Operand(String),

    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),

    #[token("(", |_| Paren::Open)]
    #[token(")", |_| Paren::Close)]
    Paren(Paren),
}

impl Token {
    pub fn operand(value: impl Into<String>) -> Self {
        Token::Operand(value.into())
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Operand(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(value) => f.write_str(value),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Paren(Paren::Open) => f.write_str("("),
            Token::Paren(Paren::Close) => f.write_str(")"),
        }
    }
}

/// 从左到右扫描表达式
///
/// 空白只作分隔符。空输入得到空序列，由调用方决定是否视为 `EmptyExpression`。
/// 正常情况下输入已经过校验；若仍遇到无法识别的字符则报告其所在列。
pub fn tokenize(expression: &str) -> ExprResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expression);

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => {
                let span = lexer.span();
                let column = expression[..span.start].chars().count() + 1;
                return Err(invalid_expression(
                    column,
                    format!("unrecognized input {:?}", lexer.slice()),
                ));
            }
        }
    }

    trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

/// 以空格连接 token，便于日志与命令行输出
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(Token::to_string).collect::<Vec<_>>().join(" ")
}
