//! Command parser: tokens → a single command, a pipeline, or a chain.

use crate::env::EnvTable;
use crate::tokenizer::{tokenize, Operator, Token};

use super::types::{
    ChainElement, ChainOp, ChainedCommand, ParseError, ParsedCommand, ParsedLine, PipedCommand,
    RedirectInMode, RedirectInput, RedirectOutMode, RedirectOutput,
};

/// Tokenise and parse `input`, applying variable substitution to
/// substitutable words as they're consumed (per spec.md §4.D: substitution
/// is applied to already-tokenised arguments, never reintroducing word
/// boundaries).
pub fn parse(input: &str, env: &EnvTable) -> Result<ParsedLine, ParseError> {
    let tokens = tokenize(input)?;
    parse_tokens(&tokens, env)
}

/// Parse an already-tokenised stream. Used directly when re-entering the
/// parser on alias-expansion text that itself needs no further tokenising
/// surprises beyond a fresh tokenize call — exposed for clarity/testing.
pub fn parse_tokens(tokens: &[Token], env: &EnvTable) -> Result<ParsedLine, ParseError> {
    let top_segments = split_top_level(tokens);
    if top_segments.is_empty() {
        return Err(ParseError::EmptyCommand);
    }

    let mut elements = Vec::with_capacity(top_segments.len());
    let mut operators = Vec::with_capacity(top_segments.len().saturating_sub(1));

    for (i, (segment, op_before)) in top_segments.into_iter().enumerate() {
        if i > 0 {
            operators.push(op_before.expect("operator between segments"));
        }
        elements.push(parse_chain_element(segment, env)?);
    }

    if elements.len() == 1 {
        return Ok(match elements.into_iter().next().unwrap() {
            ChainElement::Single(cmd) => ParsedLine::Single(cmd),
            ChainElement::Piped(piped) => ParsedLine::Piped(piped),
        });
    }

    Ok(ParsedLine::Chained(ChainedCommand { commands: elements, operators }))
}

/// Split at the outermost `;`, `&&`, `||`, returning each segment's tokens
/// alongside the operator that preceded it (`None` for the first segment).
fn split_top_level(tokens: &[Token]) -> Vec<(Vec<Token>, Option<ChainOp>)> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    let mut pending_op: Option<ChainOp> = None;

    for token in tokens {
        match token {
            Token::Operator(Operator::Semicolon) => {
                segments.push((std::mem::take(&mut current), pending_op.take()));
                pending_op = Some(ChainOp::Semicolon);
            }
            Token::Operator(Operator::And) => {
                segments.push((std::mem::take(&mut current), pending_op.take()));
                pending_op = Some(ChainOp::And);
            }
            Token::Operator(Operator::Or) => {
                segments.push((std::mem::take(&mut current), pending_op.take()));
                pending_op = Some(ChainOp::Or);
            }
            other => current.push(other.clone()),
        }
    }
    segments.push((current, pending_op.take()));
    segments.into_iter().filter(|(seg, op)| !seg.is_empty() || op.is_some()).collect()
}

fn parse_chain_element(tokens: Vec<Token>, env: &EnvTable) -> Result<ChainElement, ParseError> {
    let pipe_segments = split_on_pipe(&tokens);
    let mut commands = Vec::with_capacity(pipe_segments.len());
    for segment in pipe_segments {
        commands.push(parse_single_command(segment, env)?);
    }
    if commands.len() == 1 {
        Ok(ChainElement::Single(commands.into_iter().next().unwrap()))
    } else {
        Ok(ChainElement::Piped(PipedCommand { commands }))
    }
}

fn split_on_pipe(tokens: &[Token]) -> Vec<&[Token]> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (i, token) in tokens.iter().enumerate() {
        if matches!(token, Token::Operator(Operator::Pipe)) {
            segments.push(&tokens[start..i]);
            start = i + 1;
        }
    }
    segments.push(&tokens[start..]);
    segments
}

fn word_text(token: &Token, env: &EnvTable) -> Option<String> {
    match token {
        Token::Word { text, substitutable } => {
            Some(if *substitutable { env.substitute(text) } else { text.clone() })
        }
        Token::Operator(_) => None,
    }
}

fn parse_single_command(tokens: &[Token], env: &EnvTable) -> Result<ParsedCommand, ParseError> {
    let mut words = Vec::new();
    let mut redirect_output = None;
    let mut redirect_input = None;

    let mut i = 0;
    while i < tokens.len() {
        match &tokens[i] {
            Token::Word { .. } => {
                words.push(word_text(&tokens[i], env).unwrap());
                i += 1;
            }
            Token::Operator(op @ (Operator::RedirectOut | Operator::AppendOut)) => {
                let filename = tokens
                    .get(i + 1)
                    .and_then(|t| word_text(t, env))
                    .ok_or(ParseError::MissingRedirectTarget)?;
                if redirect_output.is_some() {
                    return Err(ParseError::DuplicateOutputRedirect);
                }
                redirect_output = Some(RedirectOutput {
                    mode: if matches!(op, Operator::AppendOut) {
                        RedirectOutMode::Append
                    } else {
                        RedirectOutMode::Overwrite
                    },
                    filename,
                });
                i += 2;
            }
            Token::Operator(Operator::RedirectIn) => {
                let source = tokens
                    .get(i + 1)
                    .and_then(|t| word_text(t, env))
                    .ok_or(ParseError::MissingRedirectTarget)?;
                if redirect_input.is_some() {
                    return Err(ParseError::DuplicateInputRedirect);
                }
                redirect_input = Some(RedirectInput { mode: RedirectInMode::File, source });
                i += 2;
            }
            Token::Operator(Operator::Heredoc) => {
                // `<<` is reserved for internal pipeline plumbing; a shell
                // line typed by a user cannot attach one directly.
                return Err(ParseError::UnsupportedRedirection);
            }
            Token::Operator(_) => return Err(ParseError::UnsupportedRedirection),
        }
    }

    if words.is_empty() {
        return Err(ParseError::EmptyCommand);
    }
    let command = words.remove(0);
    let mut parsed = ParsedCommand::new(command, words);
    parsed.redirect_output = redirect_output;
    parsed.redirect_input = redirect_input;
    Ok(parsed)
}

/// Attach a synthetic heredoc input (pipeline plumbing only — never
/// produced by the public parser).
pub fn attach_heredoc(cmd: &mut ParsedCommand, content: String) {
    if cmd.redirect_input.is_none() {
        cmd.redirect_input = Some(RedirectInput { mode: RedirectInMode::Heredoc, source: content });
    }
}
