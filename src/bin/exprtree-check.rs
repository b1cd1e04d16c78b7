use std::env;
use std::fs;
use std::process;
use std::time::Instant;

use exprtree::error::{ExprResult, print_error_with_context};
use exprtree::{lexer, logging, traversal, validator};
use exprtree::layout::{Layout, LayoutOptions};

const VERSION: &str = env!("EXPRTREE_CHECK_VERSION");

fn print_usage() {
    println!("exprtree-check v{}", VERSION);
    println!("Usage: exprtree-check [options] <expression>");
    println!("       exprtree-check [options] --file <expressions.txt>");
    println!("");
    println!("Options:");
    println!("  --validate-only       只进行字符校验");
    println!("  --lex-only            进行校验和词法分析");
    println!("  --parse-only          进行校验、词法分析和建树（不计算遍历与布局）");
    println!("  --file, -f <path>     逐行检查文件中的表达式（忽略空行）");
    println!("  --verbose             输出调试日志");
    println!("  --version, -v         显示版本号");
    println!("  --help, -h            显示帮助信息");
    println!("");
    println!("Examples:");
    println!("  exprtree-check \"a+b*c\"");
    println!("  exprtree-check --lex-only \"(a+b\"");
    println!("  exprtree-check -f expressions.txt");
}

#[derive(Debug, Clone, Copy, Default)]
enum CheckLevel {
    ValidateOnly,
    LexOnly,
    ParseOnly,
    #[default]
    Full,
}

impl CheckLevel {
    fn describe(self) -> &'static str {
        match self {
            CheckLevel::ValidateOnly => "字符校验",
            CheckLevel::LexOnly => "词法分析",
            CheckLevel::ParseOnly => "语法分析",
            CheckLevel::Full => "完整检查（校验+词法+语法+遍历+布局）",
        }
    }
}

#[derive(Debug)]
enum Input {
    Expression(String),
    File(String),
}

#[derive(Debug, Default)]
struct CheckOptions {
    level: CheckLevel,
    verbose: bool,
}

fn parse_args(args: &[String]) -> Result<(CheckOptions, Input), String> {
    let mut options = CheckOptions::default();
    let mut input: Option<Input> = None;
    let mut i = 1;

    while i < args.len() {
        let arg = &args[i];

        match arg.as_str() {
            "--version" | "-v" => {
                println!("exprtree-check v{}", VERSION);
                process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            "--validate-only" => options.level = CheckLevel::ValidateOnly,
            "--lex-only" => options.level = CheckLevel::LexOnly,
            "--parse-only" => options.level = CheckLevel::ParseOnly,
            "--verbose" => options.verbose = true,
            "--file" | "-f" => {
                i += 1;
                let path = args.get(i).ok_or("--file 需要一个路径")?;
                if input.is_some() {
                    return Err(format!("多余参数: {}", path));
                }
                input = Some(Input::File(path.clone()));
            }
            _ => {
                if arg.starts_with("--") {
                    return Err(format!("未知选项: {}", arg));
                }
                if input.is_some() {
                    return Err(format!("多余参数: {}", arg));
                }
                input = Some(Input::Expression(arg.clone()));
            }
        }
        i += 1;
    }

    let input = input.ok_or("需要指定表达式或 --file")?;

    Ok((options, input))
}

/// 按级别运行流水线的前若干阶段，每通过一个阶段打印一行
fn check_expression(source: &str, level: CheckLevel) -> ExprResult<()> {
    println!("  [1] 字符校验...");
    validator::check(source)?;
    println!("      [+] 通过");
    if let CheckLevel::ValidateOnly = level {
        return Ok(());
    }

    println!("  [2] 词法分析...");
    let tokens = exprtree::lex(source)?;
    println!("      [+] 通过，发现 {} 个 token", tokens.len());
    if let CheckLevel::LexOnly = level {
        return Ok(());
    }

    println!("  [3] 语法分析...");
    let (postfix, tree) = exprtree::build(&tokens)?;
    println!("      [+] 通过，后缀式: {}", lexer::join_tokens(&postfix));
    println!(
        "          {} 个操作数，{} 个运算符，深度 {}",
        tree.operand_count(),
        tree.operator_count(),
        tree.depth()
    );
    if let CheckLevel::ParseOnly = level {
        return Ok(());
    }

    println!("  [4] 遍历与布局...");
    let traversals = traversal::Traversals::of(&tree);
    let layout = Layout::assign(&tree, &LayoutOptions::default());
    println!("      [+] 前序: {}", traversals.preorder);
    println!("          中序: {}", traversals.inorder);
    println!("          后序: {}", traversals.postorder);
    println!("          {} 个节点，{} 条边", layout.nodes.len(), layout.edges.len());

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let (options, input) = match parse_args(&args) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("错误: {}", e);
            print_usage();
            process::exit(2);
        }
    };

    logging::init(options.verbose);

    println!("exprtree-check v{}", VERSION);
    println!("检查级别: {}", options.level.describe());
    println!("");

    let expressions: Vec<(String, String)> = match &input {
        Input::Expression(expression) => vec![("<args>".to_string(), expression.clone())],
        Input::File(path) => match fs::read_to_string(path) {
            Ok(content) => content
                .lines()
                .enumerate()
                .filter(|(_, line)| !line.trim().is_empty())
                .map(|(n, line)| (format!("{}:{}", path, n + 1), line.to_string()))
                .collect(),
            Err(e) => {
                eprintln!("错误读取文件 '{}': {}", path, e);
                process::exit(1);
            }
        },
    };

    let start_time = Instant::now();
    let mut failures = 0;

    for (origin, source) in &expressions {
        println!("{}: {}", origin, source);
        if let Err(e) = check_expression(source, options.level) {
            print_error_with_context(&e, source, origin);
            failures += 1;
        }
        println!("");
    }

    let elapsed = start_time.elapsed();
    if failures == 0 {
        println!("[+] 检查完成! {} 个表达式全部通过 (耗时: {:?})", expressions.len(), elapsed);
    } else {
        println!(
            "[-] 检查完成: {}/{} 个表达式未通过 (耗时: {:?})",
            failures,
            expressions.len(),
            elapsed
        );
        process::exit(1);
    }
}
