//! 算术表达式 → 二叉表达式树
//!
//! 流水线：校验 → 词法分析 → 调度场转换 → 建树 → {遍历, 坐标分配}

pub mod ast;
pub mod error;
pub mod layout;
pub mod lexer;
pub mod logging;
pub mod parser;
pub mod traversal;
pub mod validator;

use tracing::debug;

use crate::ast::Expr;
use crate::error::{ExprError, ExprResult};
use crate::layout::{Layout, LayoutOptions};
use crate::lexer::Token;
use crate::traversal::Traversals;

/// 一次编译的全部产物
#[derive(Debug, Clone)]
pub struct Compilation {
    pub tree: Expr,
    pub postfix: Vec<Token>,
    pub traversals: Traversals,
    pub layout: Layout,
}

/// 校验 + 词法分析；得不到任何 token 时返回 `EmptyExpression`
pub fn lex(source: &str) -> ExprResult<Vec<Token>> {
    validator::check(source)?;

    let tokens = lexer::tokenize(source)?;
    if tokens.is_empty() {
        return Err(ExprError::EmptyExpression);
    }
    debug!(tokens = tokens.len(), "lexed expression");
    Ok(tokens)
}

/// 中缀 token → (后缀序列, 表达式树)
pub fn build(tokens: &[Token]) -> ExprResult<(Vec<Token>, Expr)> {
    let postfix = parser::to_postfix(tokens)?;
    debug!(postfix = %lexer::join_tokens(&postfix), "converted to postfix");

    let tree = parser::build_tree(&postfix)?;
    debug!(nodes = tree.node_count(), depth = tree.depth(), "built tree");

    Ok((postfix, tree))
}

#[derive(Debug, Clone, Default)]
pub struct Compiler {
    layout: LayoutOptions,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: LayoutOptions) -> Self {
        Self { layout }
    }

    /// 校验、词法分析并建树，不计算遍历与布局
    pub fn parse(&self, source: &str) -> ExprResult<(Vec<Token>, Expr)> {
        let tokens = lex(source)?;
        build(&tokens)
    }

    pub fn compile(&self, source: &str) -> ExprResult<Compilation> {
        let (postfix, tree) = self.parse(source)?;
        let traversals = Traversals::of(&tree);
        let layout = Layout::assign(&tree, &self.layout);

        Ok(Compilation {
            tree,
            postfix,
            traversals,
            layout,
        })
    }
}
