//! 基于 proptest 的性质测试
//!
//! 1. 任意良构表达式都能建树，叶子数等于操作数个数，内部节点数等于运算符个数
//! 2. 全括号中缀形式与最少括号、无空格的中缀形式重新解析后都得到同构的树
//! 3. 遍历是纯函数
//! 4. 含非法字符或负数字面量的字符串一定被校验器拒绝
//! 5. 任意输入都不会导致 panic

use proptest::prelude::*;

use exprtree::Compiler;
use exprtree::ast::Expr;
use exprtree::lexer::{Operator, Token, tokenize};
use exprtree::traversal::{Traversals, to_infix};
use exprtree::validator::{is_allowed_char, validate};

// ============================================================================
// Generators
// ============================================================================

fn operand() -> impl Strategy<Value = Expr> {
    prop_oneof!["[a-zA-Z]{1,4}", "[0-9]{1,3}"].prop_map(Expr::operand)
}

fn operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn expr_tree() -> impl Strategy<Value = Expr> {
    operand().prop_recursive(5, 48, 2, |inner| {
        (inner.clone(), operator(), inner).prop_map(|(left, op, right)| Expr::binary(op, left, right))
    })
}

/// 只含字母操作数，避免 `-` 紧跟数字触发负数字面量规则
fn letter_tree() -> impl Strategy<Value = Expr> {
    "[a-zA-Z]{1,3}".prop_map(Expr::operand).prop_recursive(6, 64, 2, |inner| {
        (inner.clone(), operator(), inner).prop_map(|(left, op, right)| Expr::binary(op, left, right))
    })
}

/// 最少括号、无空格的中缀形式
///
/// 子节点优先级低于父节点时加括号；右子节点优先级相等时也要加（左结合）。
fn to_minimal_infix(expr: &Expr) -> String {
    match expr {
        Expr::Operand(value) => value.clone(),
        Expr::Binary(b) => {
            let prec = b.op.precedence();
            let left = wrap(&b.left, |p| p < prec);
            let right = wrap(&b.right, |p| p <= prec);
            format!("{}{}{}", left, b.op, right)
        }
    }
}

fn wrap(child: &Expr, needs_parens: impl Fn(u8) -> bool) -> String {
    let text = to_minimal_infix(child);
    match child {
        Expr::Binary(b) if needs_parens(b.op.precedence()) => format!("({})", text),
        _ => text,
    }
}

#[test]
fn minimal_infix_rendering() {
    let a = || Expr::operand("a");
    let b = || Expr::operand("b");
    let c = || Expr::operand("c");

    // a+b*c
    let tree = Expr::binary(Operator::Add, a(), Expr::binary(Operator::Mul, b(), c()));
    assert_eq!(to_minimal_infix(&tree), "a+b*c");

    // (a-b)-c 与 a-(b-c)
    let left = Expr::binary(Operator::Sub, Expr::binary(Operator::Sub, a(), b()), c());
    let right = Expr::binary(Operator::Sub, a(), Expr::binary(Operator::Sub, b(), c()));
    assert_eq!(to_minimal_infix(&left), "a-b-c");
    assert_eq!(to_minimal_infix(&right), "a-(b-c)");

    // (a+b)*c
    let tree = Expr::binary(Operator::Mul, Expr::binary(Operator::Add, a(), b()), c());
    assert_eq!(to_minimal_infix(&tree), "(a+b)*c");

    let compiled = Compiler::new().compile("a+b*c-d/e").unwrap();
    assert_eq!(to_minimal_infix(&compiled.tree), "a+b*c-d/e");
    assert_eq!(compiled.tree.operand_count(), 5);
    assert_eq!(compiled.tree.operator_count(), 4);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn counts_match_tokens(tree in expr_tree()) {
        let source = to_infix(&tree);
        let tokens = tokenize(&source).unwrap();
        let operands = tokens.iter().filter(|t| t.is_operand()).count();
        let operators = tokens.iter().filter(|t| matches!(t, Token::Operator(_))).count();

        let compiled = Compiler::new().compile(&source).unwrap();
        prop_assert_eq!(compiled.tree.operand_count(), operands);
        prop_assert_eq!(compiled.tree.operator_count(), operators);
    }

    #[test]
    fn infix_round_trip(tree in expr_tree()) {
        let source = to_infix(&tree);
        let reparsed = Compiler::new().compile(&source).unwrap().tree;
        prop_assert_eq!(reparsed, tree);
    }

    #[test]
    fn minimal_infix_round_trip(tree in letter_tree()) {
        let source = to_minimal_infix(&tree);
        prop_assert!(!source.contains(' '));

        let compiled = Compiler::new().compile(&source).unwrap();
        let tokens = tokenize(&source).unwrap();
        let operands = tokens.iter().filter(|t| t.is_operand()).count();
        let operators = tokens.iter().filter(|t| matches!(t, Token::Operator(_))).count();

        prop_assert_eq!(compiled.tree.operand_count(), operands);
        prop_assert_eq!(compiled.tree.operator_count(), operators);
        prop_assert_eq!(compiled.tree, tree);
    }

    #[test]
    fn traversals_are_pure(tree in expr_tree()) {
        prop_assert_eq!(Traversals::of(&tree), Traversals::of(&tree));
    }

    #[test]
    fn layout_matches_tree(tree in expr_tree()) {
        let compiled = Compiler::new().compile(&to_infix(&tree)).unwrap();
        let layout = compiled.layout;
        prop_assert_eq!(layout.nodes.len(), tree.node_count());
        prop_assert_eq!(layout.edges.len(), tree.node_count() - 1);
        prop_assert_eq!(layout.root().map(|n| n.id), Some(1));
    }

    #[test]
    fn disallowed_characters_are_rejected(
        prefix in "[a-z+*/() ]{0,6}",
        bad in any::<char>().prop_filter("disallowed", |c| !is_allowed_char(*c)),
        suffix in "[a-z+*/() ]{0,6}",
    ) {
        let source = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(!validate(&source));
        prop_assert!(Compiler::new().compile(&source).is_err());
    }

    #[test]
    fn negative_literals_are_rejected(prefix in "[a-z+*/( ]{0,6}", digits in "[0-9]{1,3}") {
        let source = format!("{}-{}", prefix, digits);
        prop_assert!(!validate(&source));
    }

    #[test]
    fn never_panics(source in "[a-zA-Z0-9+*/() -]{0,24}") {
        let _ = Compiler::new().compile(&source);
    }
}
