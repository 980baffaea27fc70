use std::fs;
use std::path::PathBuf;
use std::process;

use ariadne::{Color, Label, Report, ReportKind, Source};
use clap::Parser;

use parsekit::arith::{evaluate, ArithmeticLexer, ExprParser, Node};
use parsekit_common::{EvalError, Position};

/// Arithmetic expression evaluator.
///
/// Lexes, parses, and evaluates an infix arithmetic expression using the
/// parsekit toolkit.
#[derive(Parser)]
#[command(
    name = "parsekit-calc",
    version,
    about,
    long_about = "Arithmetic expression evaluator.\n\nRuns an expression through the parsekit pipeline (lexer, recursive-descent\nparser, tree evaluator) and prints the integer result.\n\nExamples:\n  parsekit-calc '2+3*4'             Evaluate an expression\n  parsekit-calc --file expr.txt     Read the expression from a file\n  parsekit-calc '1+2' --emit-tokens Print the token stream\n  parsekit-calc '1+2' --emit-ast    Print the parsed tree"
)]
struct Cli {
    /// Expression to evaluate.
    expression: Option<String>,

    /// Read the expression from a file instead.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Emit the token stream to stdout and stop (debug).
    #[arg(long = "emit-tokens")]
    emit_tokens: bool,

    /// Emit the parsed expression tree to stdout and stop (debug).
    #[arg(long = "emit-ast")]
    emit_ast: bool,
}

fn main() {
    let cli = Cli::parse();

    let (source, source_name) = match (&cli.file, &cli.expression) {
        (Some(path), _) => match fs::read_to_string(path) {
            Ok(s) => (s, path.display().to_string()),
            Err(e) => {
                eprintln!("error: could not read '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        (None, Some(expr)) => (expr.clone(), "<expr>".to_string()),
        (None, None) => {
            eprintln!("error: no expression given (pass one as an argument or use --file)");
            process::exit(2);
        }
    };

    // === Lexer ===
    let tokens = match ArithmeticLexer::new(&source).lex() {
        Ok(tokens) => tokens,
        Err(e) => {
            // The lexer's offset is one past the rejected character.
            let start = e.position.offset.saturating_sub(1);
            print_error(&e.to_string(), start..start + 1, &source, &source_name);
            process::exit(1);
        }
    };

    if cli.emit_tokens {
        for token in &tokens {
            println!(
                "{:>4}:{:<3} {:?} {:?}",
                token.line, token.column, token.kind, token.content,
            );
        }
        return;
    }

    // === Parser ===
    let tree = match ExprParser::new(&tokens).parse() {
        Ok(tree) => tree,
        Err(e) => {
            let range = match e.position {
                Some(pos) => pos.offset..pos.offset + 1,
                None => source.len()..source.len() + 1,
            };
            print_error(&e.to_string(), range, &source, &source_name);
            process::exit(1);
        }
    };

    if cli.emit_ast {
        print_node(&tree, 0);
        return;
    }

    // === Evaluator ===
    match evaluate(&tree) {
        Ok(value) => println!("{}", value),
        Err(e) => {
            let pos = match &e {
                EvalError::DivisionByZero(pos) => *pos,
                EvalError::Overflow(pos) => *pos,
                EvalError::InvalidNumber { position, .. } => *position,
                EvalError::MalformedTree(pos) => *pos,
            };
            print_error(&e.to_string(), span_of(pos), &source, &source_name);
            process::exit(1);
        }
    }
}

fn span_of(pos: Position) -> std::ops::Range<usize> {
    pos.offset..pos.offset + 1
}

fn print_error(message: &str, range: std::ops::Range<usize>, source: &str, name: &str) {
    let start = range.start.min(source.len());
    let end = range.end.max(start + 1);
    Report::build(ReportKind::Error, name, start)
        .with_message(message)
        .with_label(
            Label::new((name, start..end))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((name, Source::from(source)))
        .unwrap();
}

fn print_node(node: &Node<'_>, depth: usize) {
    println!(
        "{:indent$}{:?} {:?}",
        "",
        node.token.kind,
        node.token.content,
        indent = depth * 2
    );
    if let Some(left) = &node.left {
        print_node(left, depth + 1);
    }
    if let Some(right) = &node.right {
        print_node(right, depth + 1);
    }
}
