use std::env;
use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use serde::Serialize;

use exprtree::Compiler;
use exprtree::error::print_error_with_context;
use exprtree::layout::{Layout, LayoutOptions};
use exprtree::logging;
use exprtree::traversal::Traversals;

const VERSION: &str = env!("EXPRTREE_VERSION");

fn print_usage() {
    println!("exprtree v{}", VERSION);
    println!("Usage: exprtree [options] [expression...]");
    println!("");
    println!("未给出表达式时从标准输入读取。");
    println!("");
    println!("Options:");
    println!("  --json                输出 JSON（遍历结果 + 渲染用的节点/边列表）");
    println!("  --origin X,Y          根节点坐标 (默认: 300,50)");
    println!("  --offset N            根节点到子节点的水平偏移 (默认: 150)");
    println!("  --level-step N        每层的垂直间距 (默认: 150)");
    println!("  --verbose             输出调试日志");
    println!("  --version, -v         显示版本号");
    println!("  --help, -h            显示帮助信息");
    println!("");
    println!("Examples:");
    println!("  exprtree \"a+b*c\"");
    println!("  exprtree --json \"(a+b)*c\"");
    println!("  echo \"x/(y - 2)\" | exprtree");
}

#[derive(Debug, Default)]
struct CliOptions {
    json: bool,
    verbose: bool,
    layout: LayoutOptions,
}

fn parse_number(flag: &str, value: Option<&str>) -> Result<f64, String> {
    let value = value.ok_or_else(|| format!("{} 需要一个参数", flag))?;
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("{} 的参数不是数字: {}", flag, value))
}

fn parse_args(args: &[String]) -> Result<(CliOptions, Option<String>), String> {
    let mut options = CliOptions::default();
    let mut words: Vec<String> = Vec::new();
    let mut i = 1;

    while i < args.len() {
        let arg = &args[i];

        match arg.as_str() {
            "--version" | "-v" => {
                println!("exprtree v{}", VERSION);
                process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            "--json" => options.json = true,
            "--verbose" => options.verbose = true,
            "--origin" => {
                i += 1;
                let value = args.get(i).ok_or("--origin 需要一个参数")?;
                let (x, y) = value
                    .split_once(',')
                    .ok_or_else(|| format!("--origin 的格式应为 X,Y: {}", value))?;
                options.layout.origin_x = parse_number("--origin", Some(x))?;
                options.layout.origin_y = parse_number("--origin", Some(y))?;
            }
            "--offset" => {
                i += 1;
                options.layout.offset = parse_number("--offset", args.get(i).map(String::as_str))?;
            }
            "--level-step" => {
                i += 1;
                options.layout.level_step = parse_number("--level-step", args.get(i).map(String::as_str))?;
            }
            "--" => {
                words.extend(args[i + 1..].iter().cloned());
                break;
            }
            _ => {
                // 单独的 "-" 或 "-a" 之类可能是表达式的一部分，只拒绝长选项
                if arg.starts_with("--") {
                    return Err(format!("未知选项: {}", arg));
                }
                words.push(arg.clone());
            }
        }
        i += 1;
    }

    let expression = if words.is_empty() { None } else { Some(words.join(" ")) };
    Ok((options, expression))
}

#[derive(Serialize)]
struct Report<'a> {
    expression: &'a str,
    postfix: Vec<String>,
    #[serde(flatten)]
    traversals: &'a Traversals,
    #[serde(flatten)]
    layout: &'a Layout,
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read expression from stdin")?;
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

fn run(options: CliOptions, expression: Option<String>) -> Result<i32> {
    let (source, origin) = match expression {
        Some(expression) => (expression, "<args>"),
        None => (read_stdin()?, "<stdin>"),
    };

    let compiler = Compiler::with_layout(options.layout);
    let compilation = match compiler.compile(&source) {
        Ok(compilation) => compilation,
        Err(e) => {
            print_error_with_context(&e, &source, origin);
            return Ok(1);
        }
    };

    if options.json {
        let report = Report {
            expression: &source,
            postfix: compilation.postfix.iter().map(ToString::to_string).collect(),
            traversals: &compilation.traversals,
            layout: &compilation.layout,
        };
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        println!("Preorder:  {}", compilation.traversals.preorder);
        println!("Inorder:   {}", compilation.traversals.inorder);
        println!("Postorder: {}", compilation.traversals.postorder);
    }

    Ok(0)
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let (options, expression) = match parse_args(&args) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("错误: {}", e);
            print_usage();
            process::exit(2);
        }
    };

    logging::init(options.verbose);

    match run(options, expression) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("错误: {:#}", e);
            process::exit(1);
        }
    }
}
