//! The executor: alias expansion, parsing, chain/pipeline execution.

use crate::alias::{substitute_positionals, MAX_EXPANSION_DEPTH};
use crate::commands::registry::CommandRegistry;
use crate::commands::types::CommandContext;
use crate::fs::FsState;
use crate::parser::{parse, ChainElement, ChainOp, ParsedCommand, ParsedLine, PipedCommand};
use crate::profile::Profile;
use crate::{alias::AliasTable, env::EnvTable};

use super::types::{CommandResult, Output};
use crate::tokenizer::{render, tokenize, Token};

/// Expand a leading alias in `input`, re-parsing the result as a full
/// command line if the alias body contains chain/pipe operators. Bounded
/// by [`MAX_EXPANSION_DEPTH`]; exceeding it surfaces as command-not-found.
fn expand_aliases(input: &str, aliases: &AliasTable) -> Result<String, ()> {
    let mut current = input.to_string();
    for _ in 0..MAX_EXPANSION_DEPTH {
        let tokens = match tokenize(&current) {
            Ok(t) => t,
            Err(_) => return Ok(current),
        };
        let command_name = match tokens.first() {
            Some(Token::Word { text, .. }) => text.clone(),
            _ => return Ok(current),
        };
        let Some(template) = aliases.get(&command_name) else {
            return Ok(current);
        };
        let remaining_surface: Vec<String> = tokens[1..].iter().map(render).collect();
        current = substitute_positionals(template, &remaining_surface);
    }
    Err(())
}

/// Execute one line of shell input: alias expansion, parsing, then chain or
/// pipeline execution. Mirrors spec.md's `execute(session, input)` contract.
pub fn execute_line(
    registry: &CommandRegistry,
    fs: &mut FsState,
    env: &mut EnvTable,
    aliases: &mut AliasTable,
    profile: Profile,
    input: &str,
) -> CommandResult {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return CommandResult::ok_text("");
    }

    let expanded = match expand_aliases(trimmed, aliases) {
        Ok(text) => text,
        Err(()) => {
            let name = trimmed.split_whitespace().next().unwrap_or(trimmed);
            let result = CommandResult::command_not_found(name);
            env.set_last_exit_code(result.exit_code);
            return result;
        }
    };

    let line = match parse(&expanded, env) {
        Ok(line) => line,
        Err(err) => {
            let result = CommandResult::usage_error(err.to_string());
            env.set_last_exit_code(result.exit_code);
            return result;
        }
    };

    let result = execute_parsed(registry, fs, env, aliases, profile, line);
    env.set_last_exit_code(result.exit_code);
    result
}

fn execute_parsed(
    registry: &CommandRegistry,
    fs: &mut FsState,
    env: &mut EnvTable,
    aliases: &mut AliasTable,
    profile: Profile,
    line: ParsedLine,
) -> CommandResult {
    match line {
        ParsedLine::Single(cmd) => execute_single(registry, fs, env, aliases, profile, &cmd, ""),
        ParsedLine::Piped(piped) => execute_pipeline(registry, fs, env, aliases, profile, &piped),
        ParsedLine::Chained(chain) => execute_chain(registry, fs, env, aliases, profile, &chain),
    }
}

fn execute_chain(
    registry: &CommandRegistry,
    fs: &mut FsState,
    env: &mut EnvTable,
    aliases: &mut AliasTable,
    profile: Profile,
    chain: &crate::parser::ChainedCommand,
) -> CommandResult {
    let mut last = CommandResult::ok_text("");
    let mut iter = chain.commands.iter();
    let first = iter.next().expect("chain has at least one element");
    last = execute_element(registry, fs, env, aliases, profile, first);

    for (op, element) in chain.operators.iter().zip(iter) {
        let should_run = match op {
            ChainOp::Semicolon => true,
            ChainOp::And => last.success,
            ChainOp::Or => !last.success,
        };
        if !should_run {
            continue;
        }
        last = execute_element(registry, fs, env, aliases, profile, element);
    }
    last
}

fn execute_element(
    registry: &CommandRegistry,
    fs: &mut FsState,
    env: &mut EnvTable,
    aliases: &mut AliasTable,
    profile: Profile,
    element: &ChainElement,
) -> CommandResult {
    match element {
        ChainElement::Single(cmd) => execute_single(registry, fs, env, aliases, profile, cmd, ""),
        ChainElement::Piped(piped) => execute_pipeline(registry, fs, env, aliases, profile, piped),
    }
}

/// Run a pipeline left-to-right, feeding each step's flattened stdout as
/// the next step's stdin. A failing step aborts the pipeline immediately.
fn execute_pipeline(
    registry: &CommandRegistry,
    fs: &mut FsState,
    env: &mut EnvTable,
    aliases: &mut AliasTable,
    profile: Profile,
    piped: &PipedCommand,
) -> CommandResult {
    let mut stdin = String::new();
    let mut last = CommandResult::ok_text("");
    for (i, cmd) in piped.commands.iter().enumerate() {
        last = execute_single(registry, fs, env, aliases, profile, cmd, &stdin);
        if !last.success {
            return last;
        }
        if i + 1 < piped.commands.len() {
            stdin = last.output.flatten();
        }
    }
    last
}

fn execute_single(
    registry: &CommandRegistry,
    fs: &mut FsState,
    env: &mut EnvTable,
    aliases: &mut AliasTable,
    profile: Profile,
    cmd: &ParsedCommand,
    piped_stdin: &str,
) -> CommandResult {
    let Some(command) = registry.get(&cmd.command) else {
        return CommandResult::command_not_found(&cmd.command);
    };

    if let Some(redirect) = &cmd.redirect_input {
        if matches!(redirect.mode, crate::parser::RedirectInMode::File) {
            let path = fs.resolve_path(&redirect.source);
            if fs.get_node(&path).and_then(|n| n.content()).is_none() {
                return CommandResult::failure(format!("{}: No such file or directory", redirect.source));
            }
        }
    }

    let root_before = fs.root().clone();

    let stdin = resolve_stdin(fs, cmd, piped_stdin);
    let args = wc_redirect_as_filename(cmd);
    let mut ctx = CommandContext::new(args, stdin, fs, env, aliases, profile);
    let mut result = command.execute(&mut ctx);
    ctx.env.set_pwd(&ctx.fs.pwd());

    if let Some(redirect) = &cmd.redirect_output {
        let text = result.output.flatten();
        let path = ctx_fs_resolve(ctx.fs, &redirect.filename);
        let append = matches!(redirect.mode, crate::parser::RedirectOutMode::Append);
        match ctx.fs.write_file(&path, &text, append) {
            Ok(()) => result.output = Output::Text(String::new()),
            Err(err) => {
                return CommandResult::failure(format!("{}: {}", redirect.filename, err));
            }
        }
    }

    result.mutated = fs.root() != &root_before;
    result
}

/// `wc` with no positional filename and an active `<` file redirection
/// receives that filename as its sole positional argument (so it can print
/// it), rather than only the silently-piped stdin text.
fn wc_redirect_as_filename(cmd: &ParsedCommand) -> Vec<String> {
    if cmd.command == "wc" && cmd.args.is_empty() {
        if let Some(redirect) = &cmd.redirect_input {
            if matches!(redirect.mode, crate::parser::RedirectInMode::File) {
                return vec![redirect.source.clone()];
            }
        }
    }
    cmd.args.clone()
}

fn ctx_fs_resolve(fs: &FsState, raw: &str) -> Vec<String> {
    fs.resolve_path(raw)
}

/// Resolve a command's stdin: an explicit `<` file redirection, piped
/// input from the previous stage, or empty.
fn resolve_stdin(fs: &FsState, cmd: &ParsedCommand, piped_stdin: &str) -> String {
    match &cmd.redirect_input {
        Some(redirect) => match redirect.mode {
            crate::parser::RedirectInMode::Heredoc => redirect.source.clone(),
            crate::parser::RedirectInMode::File => {
                let path = fs.resolve_path(&redirect.source);
                fs.get_node(&path).and_then(|n| n.content()).map(|s| s.to_string()).unwrap_or_default()
            }
        },
        None => piped_stdin.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::registry::CommandRegistry;

    fn harness() -> (CommandRegistry, FsState, EnvTable, AliasTable) {
        let registry = crate::commands::default_registry();
        let fs = FsState::new(Profile::Default);
        let env = EnvTable::new("/home/user");
        let aliases = AliasTable::new();
        (registry, fs, env, aliases)
    }

    #[test]
    fn semicolon_runs_both_regardless_of_success() {
        let (registry, mut fs, mut env, mut aliases) = harness();
        let result = execute_line(&registry, &mut fs, &mut env, &mut aliases, Profile::Default, "nope ; echo hi");
        assert!(result.success);
        assert_eq!(result.output.flatten(), "hi\n");
    }

    #[test]
    fn and_short_circuits_on_failure() {
        let (registry, mut fs, mut env, mut aliases) = harness();
        let result = execute_line(&registry, &mut fs, &mut env, &mut aliases, Profile::Default, "nope && echo hi");
        assert!(!result.success);
        assert_eq!(result.exit_code, 127);
    }

    #[test]
    fn or_runs_fallback_after_failure() {
        let (registry, mut fs, mut env, mut aliases) = harness();
        let result = execute_line(&registry, &mut fs, &mut env, &mut aliases, Profile::Default, "nope || echo fallback");
        assert!(result.success);
        assert_eq!(result.output.flatten(), "fallback\n");
    }

    #[test]
    fn alias_expansion_with_operators_reparses_as_full_line() {
        let (registry, mut fs, mut env, mut aliases) = harness();
        aliases.set("greet", "echo hi && echo bye").unwrap();
        let result = execute_line(&registry, &mut fs, &mut env, &mut aliases, Profile::Default, "greet");
        assert!(result.success);
        assert_eq!(result.output.flatten(), "bye\n");
    }

    #[test]
    fn mutating_commands_set_the_mutated_flag() {
        let (registry, mut fs, mut env, mut aliases) = harness();
        let result = execute_line(&registry, &mut fs, &mut env, &mut aliases, Profile::Default, "touch new.txt");
        assert!(result.mutated);
    }

    #[test]
    fn read_only_commands_leave_the_mutated_flag_clear() {
        let (registry, mut fs, mut env, mut aliases) = harness();
        let result = execute_line(&registry, &mut fs, &mut env, &mut aliases, Profile::Default, "echo hi");
        assert!(!result.mutated);
    }

    #[test]
    fn missing_redirect_input_file_fails_with_exit_code_one() {
        let (registry, mut fs, mut env, mut aliases) = harness();
        let result = execute_line(&registry, &mut fs, &mut env, &mut aliases, Profile::Default, "cat < missing.txt");
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn alias_cycle_beyond_depth_bound_is_command_not_found() {
        let (registry, mut fs, mut env, mut aliases) = harness();
        aliases.set("a", "b").unwrap();
        aliases.set("b", "a").unwrap();
        let result = execute_line(&registry, &mut fs, &mut env, &mut aliases, Profile::Default, "a");
        assert_eq!(result.exit_code, 127);
    }
}
