// src/commands/mod.rs
pub mod alias;
pub mod cat;
pub mod cd;
pub mod clear;
pub mod cp;
pub mod date;
pub mod echo;
pub mod env_cmd;
pub mod export;
pub mod grep;
pub mod head;
pub mod help;
pub mod history;
pub mod ls;
pub mod man;
pub mod mkdir;
pub mod mv;
pub mod pwd;
pub mod registry;
pub mod reset_fs;
pub mod rm;
pub mod rmdir_cmd;
pub mod sort;
pub mod source;
pub mod storage_info;
pub mod support;
pub mod tail;
pub mod touch;
pub mod types;
pub mod unalias;
pub mod uniq;
pub mod unset;
pub mod utils;
pub mod vi;
pub mod wc;

pub use registry::CommandRegistry;
pub use types::{Command, CommandContext, CommandResult};

/// Every built-in, registered under its invocation name. Constructed fresh
/// per session — commands are stateless, all mutable state lives in
/// `CommandContext`.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Box::new(cd::CdCommand));
    registry.register(Box::new(pwd::PwdCommand));
    registry.register(Box::new(ls::LsCommand));
    registry.register(Box::new(cat::CatCommand));
    registry.register(Box::new(touch::TouchCommand));
    registry.register(Box::new(mkdir::MkdirCommand));
    registry.register(Box::new(rm::RmCommand));
    registry.register(Box::new(rmdir_cmd::RmdirCommand));
    registry.register(Box::new(cp::CpCommand));
    registry.register(Box::new(mv::MvCommand));
    registry.register(Box::new(echo::EchoCommand));
    registry.register(Box::new(wc::WcCommand));
    registry.register(Box::new(grep::GrepCommand));
    registry.register(Box::new(head::HeadCommand));
    registry.register(Box::new(tail::TailCommand));
    registry.register(Box::new(sort::SortCommand));
    registry.register(Box::new(uniq::UniqCommand));
    registry.register(Box::new(date::DateCommand));
    registry.register(Box::new(alias::AliasCommand));
    registry.register(Box::new(unalias::UnaliasCommand));
    registry.register(Box::new(export::ExportCommand));
    registry.register(Box::new(env_cmd::EnvCommand));
    registry.register(Box::new(unset::UnsetCommand));
    registry.register(Box::new(source::SourceCommand));
    registry.register(Box::new(history::HistoryCommand));
    registry.register(Box::new(clear::ClearCommand));
    registry.register(Box::new(help::HelpCommand));
    registry.register(Box::new(man::ManCommand));
    registry.register(Box::new(reset_fs::ResetFsCommand));
    registry.register(Box::new(storage_info::StorageInfoCommand));
    registry.register(Box::new(vi::ViCommand));
    registry
}
