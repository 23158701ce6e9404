//! `man`: print a one-line synopsis for a built-in command.

use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;

pub struct ManCommand;

fn synopsis(name: &str) -> Option<&'static str> {
    Some(match name {
        "cd" => "cd [dir] - change the working directory",
        "pwd" => "pwd - print the working directory",
        "ls" => "ls [-a] [-l] [path] - list directory contents",
        "cat" => "cat [file...] - print file contents",
        "touch" => "touch file - create an empty file or update its timestamp",
        "mkdir" => "mkdir [-p] dir - create a directory",
        "rm" => "rm [-r] path... - remove files or directories",
        "rmdir" => "rmdir dir - remove an empty directory",
        "cp" => "cp src dest - copy a file or directory",
        "mv" => "mv src dest - move or rename a file or directory",
        "echo" => "echo [args...] - print arguments",
        "wc" => "wc [file] - count lines, words, and bytes",
        "grep" => "grep [-i] [-v] [-n] [-c] pattern [file] - filter lines by pattern",
        "head" => "head [-n N] [file] - print the first N lines",
        "tail" => "tail [-n N] [file] - print the last N lines",
        "sort" => "sort [-n] [-r] [file...] - sort lines",
        "uniq" => "uniq [file] - collapse consecutive duplicate lines",
        "alias" => "alias [name=command] - define or list aliases",
        "unalias" => "unalias [-a] name - remove an alias",
        "export" => "export [name=value] - set or list environment variables",
        "env" => "env - list environment variables",
        "unset" => "unset name - remove an environment variable",
        "source" => "source file - apply alias and export lines from a file",
        "history" => "history - print command history",
        "date" => "date [+FORMAT] - print the current date and time",
        "clear" => "clear - clear the screen",
        "help" => "help - list available commands",
        "man" => "man name - print a command's synopsis",
        "reset-fs" => "reset-fs [profile] - reseed the filesystem",
        "storage-info" => "storage-info - report filesystem usage",
        "vi" => "vi file - open the modal text editor",
        _ => return None,
    })
}

impl Command for ManCommand {
    fn name(&self) -> &'static str {
        "man"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let Some(name) = ctx.args.first() else {
            return CommandResult::usage_error("man: missing command name");
        };

        match synopsis(name) {
            Some(text) => CommandResult::ok_text(format!("{text}\n")),
            None => CommandResult::failure(format!("man: no entry for {name}")),
        }
    }
}
