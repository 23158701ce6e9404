//! `date`: print the current time, optionally with a restricted `+FORMAT`.

use chrono::Utc;

use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;

pub struct DateCommand;

const DEFAULT_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

fn translate_format(fmt: &str) -> Result<String, String> {
    let mut out = String::new();
    let mut chars = fmt.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(d @ ('Y' | 'm' | 'd' | 'H' | 'M' | 'S')) => {
                out.push('%');
                out.push(d);
            }
            Some(other) => return Err(format!("date: unsupported format directive '%{other}'")),
            None => return Err("date: trailing '%' in format".to_string()),
        }
    }
    Ok(out)
}

impl Command for DateCommand {
    fn name(&self) -> &'static str {
        "date"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let format_arg = ctx.args.iter().find(|a| a.starts_with('+'));

        let pattern = match format_arg {
            Some(arg) => match translate_format(&arg[1..]) {
                Ok(p) => p,
                Err(err) => return CommandResult::usage_error(err),
            },
            None => DEFAULT_FORMAT.to_string(),
        };

        CommandResult::ok_text(format!("{}\n", Utc::now().format(&pattern)))
    }
}
