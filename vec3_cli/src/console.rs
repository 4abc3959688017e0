//! Vector console.
//!
//! Provides:
//! - Command registration and execution over `Vec3<f64>` values
//! - Live formatting options (`set precision 3`)
//! - Command history
//! - Input parsing that keeps `( 1, 2, 3 )` together as one argument
//!
//! # Usage
//! ```
//! use vec3_cli::Console;
//!
//! let mut console = Console::new();
//! let out = console.exec("add (1,2,3) ( 4, 5, 6 )").unwrap();
//! assert_eq!(out, vec!["(5,7,9)".to_string()]);
//! ```

use std::collections::HashMap;

use anyhow::{bail, Context};
use tracing::debug;
use vec3::{dot, FormatOptions, Notation, Vec3};

/// Command handler function type.
pub type CommandHandler =
    Box<dyn Fn(&[&str], &mut ConsoleContext<'_>) -> anyhow::Result<()> + Send + Sync>;

/// Context passed to command handlers.
pub struct ConsoleContext<'a> {
    /// Output buffer for command responses.
    pub output: Vec<String>,
    /// Formatting applied to every printed number.
    pub options: &'a mut FormatOptions,
}

impl ConsoleContext<'_> {
    pub fn print(&mut self, msg: impl Into<String>) {
        self.output.push(msg.into());
    }

    pub fn print_vector(&mut self, v: &Vec3<f64>) {
        let text = self.options.render(v);
        self.print(text);
    }

    pub fn print_scalar(&mut self, value: f64) {
        let text = self.options.render_scalar(value);
        self.print(text);
    }
}

/// The console.
pub struct Console {
    commands: HashMap<String, CommandHandler>,
    options: FormatOptions,
    history: Vec<String>,
    max_history: usize,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        Self::with_options(FormatOptions::default())
    }

    pub fn with_options(options: FormatOptions) -> Self {
        let mut console = Self {
            commands: HashMap::new(),
            options,
            history: Vec::new(),
            max_history: 100,
        };

        console.register_builtin_commands();
        console
    }

    fn register_builtin_commands(&mut self) {
        // echo <text>
        self.register_command("echo", |args, ctx| {
            ctx.print(args.join(" "));
            Ok(())
        });

        // help
        self.register_command("help", |_args, ctx| {
            ctx.print(
                "Available commands: add, div, dot, echo, eq, help, narrow, neg, norm, \
                 options, scale, set, sqnorm, sub, quit",
            );
            Ok(())
        });

        // norm <v>
        self.register_command("norm", |args, ctx| {
            expect_args(args, 1, "norm <vector>")?;
            let v = vector_arg(args, 0)?;
            ctx.print_scalar(v.norm());
            Ok(())
        });

        // sqnorm <v>
        self.register_command("sqnorm", |args, ctx| {
            expect_args(args, 1, "sqnorm <vector>")?;
            let v = vector_arg(args, 0)?;
            ctx.print_scalar(v.squared_norm());
            Ok(())
        });

        // neg <v>
        self.register_command("neg", |args, ctx| {
            expect_args(args, 1, "neg <vector>")?;
            let v = vector_arg(args, 0)?;
            ctx.print_vector(&-v);
            Ok(())
        });

        // add <a> <b>
        self.register_command("add", |args, ctx| {
            expect_args(args, 2, "add <vector> <vector>")?;
            let sum = vector_arg(args, 0)? + vector_arg(args, 1)?;
            ctx.print_vector(&sum);
            Ok(())
        });

        // sub <a> <b>
        self.register_command("sub", |args, ctx| {
            expect_args(args, 2, "sub <vector> <vector>")?;
            let diff = vector_arg(args, 0)? - vector_arg(args, 1)?;
            ctx.print_vector(&diff);
            Ok(())
        });

        // scale <v> <s>
        self.register_command("scale", |args, ctx| {
            expect_args(args, 2, "scale <vector> <scalar>")?;
            let scaled = vector_arg(args, 0)? * scalar_arg(args, 1)?;
            ctx.print_vector(&scaled);
            Ok(())
        });

        // div <v> <s>
        self.register_command("div", |args, ctx| {
            expect_args(args, 2, "div <vector> <scalar>")?;
            let quotient = vector_arg(args, 0)? / scalar_arg(args, 1)?;
            ctx.print_vector(&quotient);
            Ok(())
        });

        // dot <a> <b>
        self.register_command("dot", |args, ctx| {
            expect_args(args, 2, "dot <vector> <vector>")?;
            let d = dot(&vector_arg(args, 0)?, &vector_arg(args, 1)?);
            ctx.print_scalar(d);
            Ok(())
        });

        // eq <a> <b>
        self.register_command("eq", |args, ctx| {
            expect_args(args, 2, "eq <vector> <vector>")?;
            let equal = vector_arg(args, 0)? == vector_arg(args, 1)?;
            ctx.print(equal.to_string());
            Ok(())
        });

        // narrow <v>: round-trips the components through f32.
        self.register_command("narrow", |args, ctx| {
            expect_args(args, 1, "narrow <vector>")?;
            let narrowed = vector_arg(args, 0)?.cast::<f32>();
            ctx.print_vector(&Vec3::<f64>::convert_from(narrowed));
            Ok(())
        });

        // options
        self.register_command("options", |_args, ctx| {
            let json = serde_json::to_string(&*ctx.options).context("encode options")?;
            ctx.print(json);
            Ok(())
        });

        // set <option> <value>
        self.register_command("set", |args, ctx| {
            if args.len() != 2 {
                bail!("usage: set <precision|notation|sign_plus|uppercase_exponent> <value>");
            }
            let (name, value) = (args[0], args[1]);
            match name {
                "precision" => {
                    ctx.options.precision = match value {
                        "none" => None,
                        digits => Some(
                            digits
                                .parse()
                                .with_context(|| format!("invalid precision: {}", digits))?,
                        ),
                    };
                }
                "notation" => {
                    ctx.options.notation = Notation::from_name(value)
                        .with_context(|| format!("unknown notation: {}", value))?;
                }
                "sign_plus" => ctx.options.sign_plus = parse_bool(value)?,
                "uppercase_exponent" => ctx.options.uppercase_exponent = parse_bool(value)?,
                _ => bail!("unknown option: {}", name),
            }
            ctx.print(format!("{} = {}", name, value));
            Ok(())
        });
    }

    /// Registers a command.
    pub fn register_command<F>(&mut self, name: &str, handler: F)
    where
        F: Fn(&[&str], &mut ConsoleContext<'_>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.commands.insert(name.to_string(), Box::new(handler));
    }

    /// Executes a console command line.
    pub fn exec(&mut self, line: &str) -> anyhow::Result<Vec<String>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            return Ok(Vec::new());
        }

        self.history.push(line.to_string());
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        let tokens = parse_command_line(line);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let cmd_name = &tokens[0];
        let args: Vec<&str> = tokens[1..].iter().map(|s| s.as_str()).collect();
        debug!(command = %cmd_name, ?args, "exec");

        let mut ctx = ConsoleContext {
            output: Vec::new(),
            options: &mut self.options,
        };

        if let Some(handler) = self.commands.get(cmd_name.as_str()) {
            handler(&args, &mut ctx).with_context(|| format!("command '{}'", cmd_name))?;
        } else {
            ctx.print(format!("Unknown command: {}", cmd_name));
        }

        Ok(ctx.output)
    }

    /// Current formatting options.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Gets command history.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

fn expect_args(args: &[&str], count: usize, usage: &str) -> anyhow::Result<()> {
    if args.len() != count {
        bail!("usage: {}", usage);
    }
    Ok(())
}

fn vector_arg(args: &[&str], index: usize) -> anyhow::Result<Vec3<f64>> {
    let raw = args
        .get(index)
        .with_context(|| format!("missing argument {}", index + 1))?;
    raw.parse()
        .with_context(|| format!("argument {} is not a vector: {}", index + 1, raw))
}

fn scalar_arg(args: &[&str], index: usize) -> anyhow::Result<f64> {
    let raw = args
        .get(index)
        .with_context(|| format!("missing argument {}", index + 1))?;
    raw.parse()
        .with_context(|| format!("argument {} is not a number: {}", index + 1, raw))
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value {
        "true" | "1" | "on" => Ok(true),
        "false" | "0" | "off" => Ok(false),
        other => bail!("expected a boolean, got {}", other),
    }
}

/// Parses a command line into tokens, respecting quotes and parentheses.
fn parse_command_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut depth = 0usize;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
            }
            '(' if !in_quotes => {
                depth += 1;
                current.push(c);
            }
            ')' if !in_quotes => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            c if c.is_whitespace() && !in_quotes && depth == 0 => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => {
                current.push(c);
            }
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(console: &mut Console, line: &str) -> Vec<String> {
        console.exec(line).unwrap()
    }

    #[test]
    fn parse_parenthesized_args() {
        let tokens = parse_command_line("dot ( 1, 2, 3 )  (4,5,6)");
        assert_eq!(tokens, vec!["dot", "( 1, 2, 3 )", "(4,5,6)"]);
    }

    #[test]
    fn parse_quoted_args() {
        let tokens = parse_command_line(r#"echo "hello world" test"#);
        assert_eq!(tokens, vec!["echo", "hello world", "test"]);
    }

    #[test]
    fn arithmetic_commands() {
        let mut console = Console::new();
        assert_eq!(run(&mut console, "add (1,2,3) (4,5,6)"), vec!["(5,7,9)"]);
        assert_eq!(run(&mut console, "sub (0,2,4) (1,2,3)"), vec!["(-1,0,1)"]);
        assert_eq!(run(&mut console, "neg (1,-2,0.5)"), vec!["(-1,2,-0.5)"]);
        assert_eq!(run(&mut console, "scale (1,2,3) 2"), vec!["(2,4,6)"]);
        assert_eq!(run(&mut console, "div (2,4,6) 2"), vec!["(1,2,3)"]);
    }

    #[test]
    fn norm_and_dot() {
        let mut console = Console::new();
        assert_eq!(run(&mut console, "norm (3,4,0)"), vec!["5"]);
        assert_eq!(run(&mut console, "sqnorm (3,4,0)"), vec!["25"]);
        assert_eq!(run(&mut console, "dot (-1,0,1) ( 1, 2, 3 )"), vec!["2"]);
    }

    #[test]
    fn equality_command() {
        let mut console = Console::new();
        assert_eq!(run(&mut console, "eq (1,2,3) ( 1, 2, 3 )"), vec!["true"]);
        assert_eq!(run(&mut console, "eq (1,2,3) (1,2,3.5)"), vec!["false"]);
    }

    #[test]
    fn narrow_shows_f32_rounding() {
        let mut console = Console::new();
        assert_eq!(
            run(&mut console, "narrow (0.1,0.5,2)"),
            vec!["(0.10000000149011612,0.5,2)"]
        );
    }

    #[test]
    fn set_changes_later_output() {
        let mut console = Console::new();
        assert_eq!(run(&mut console, "set precision 1"), vec!["precision = 1"]);
        assert_eq!(run(&mut console, "add (1,2,3) (0,0,0)"), vec!["(1.0,2.0,3.0)"]);

        run(&mut console, "set notation scientific");
        run(&mut console, "set sign_plus on");
        assert_eq!(run(&mut console, "norm (3,4,0)"), vec!["+5.0e0"]);

        run(&mut console, "set precision none");
        assert_eq!(console.options().precision, None);
    }

    #[test]
    fn options_prints_json() {
        let mut console = Console::new();
        let out = run(&mut console, "options");
        let parsed = FormatOptions::from_json_str(&out[0]).unwrap();
        assert_eq!(&parsed, console.options());
    }

    #[test]
    fn bad_input_is_an_error() {
        let mut console = Console::new();
        assert!(console.exec("norm (1,2)").is_err());
        assert!(console.exec("add (1,2,3)").is_err());
        assert!(console.exec("scale (1,2,3) x").is_err());
        assert!(console.exec("set notation hex").is_err());
        assert!(console.exec("set colour red").is_err());
    }

    #[test]
    fn unknown_command_is_reported() {
        let mut console = Console::new();
        assert_eq!(run(&mut console, "cross (1,0,0) (0,1,0)"), vec!["Unknown command: cross"]);
    }

    #[test]
    fn history_is_bounded() {
        let mut console = Console::new();
        for i in 0..150 {
            console.exec(&format!("echo {}", i)).unwrap();
        }
        assert_eq!(console.history().len(), 100);
        assert_eq!(console.history()[0], "echo 50");

        run(&mut console, "");
        run(&mut console, "// comment");
        assert_eq!(console.history().len(), 100);
    }
}
