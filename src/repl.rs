use crate::config::{Config, OutputFormat};
use crate::error::MyLangError;
use crate::lexer::{check_tokens, Lexer};
use crate::token::Token;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

/// Line-at-a-time token printer. Every line is scanned by a fresh lexer, so
/// nothing carries over between lines.
pub struct Repl<'a> {
    config: &'a Config,
}

impl<'a> Repl<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn banner<W: Write>(&self, output: &mut W) -> Result<(), MyLangError> {
        writeln!(output, "Welcome to MyLang programming language!")?;
        writeln!(output, "Feel free to type in commands")?;
        writeln!(
            output,
            "Type {} to exit",
            self.config
                .exit_commands
                .iter()
                .map(|command| format!("'{}'", command))
                .collect::<Vec<_>>()
                .join(" or ")
        )?;
        writeln!(output, "Type '{}<code>' to see tokens", self.config.debug_prefix)?;
        Ok(())
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        output: &mut W,
    ) -> Result<(), MyLangError> {
        self.banner(output)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(());
            }
            // Invalid UTF-8 is replaced and later scans as ILLEGAL.
            let text = String::from_utf8_lossy(&buf);
            let line = text.trim_end_matches(['\n', '\r']);

            if self.config.is_exit_command(line) {
                writeln!(output, "Goodbye!")?;
                return Ok(());
            }

            match line.strip_prefix(self.config.debug_prefix.as_str()) {
                Some(source) => {
                    tracing::debug!(source, "debug line");
                    self.print_tokens(source, output)?;
                }
                None => self.print_tokens(line, output)?,
            }
        }
    }

    fn print_tokens<W: Write>(&self, source: &str, output: &mut W) -> Result<(), MyLangError> {
        for token in Lexer::new(source) {
            write_token(&token, self.config.output, output)?;
        }
        Ok(())
    }
}

pub fn write_token<W: Write>(
    token: &Token,
    format: OutputFormat,
    output: &mut W,
) -> Result<(), MyLangError> {
    match format {
        OutputFormat::Text => writeln!(
            output,
            "Type: {}, Literal: {}, Line: {}, Column: {}",
            token.kind, token.literal, token.line, token.column
        )?,
        OutputFormat::Json => writeln!(output, "{}", serde_json::to_string(token)?)?,
    }
    Ok(())
}

/// Scans a whole file and writes every token, end-of-input included. With
/// `strict` set, an illegal character fails before anything is written.
pub fn lex_file<W: Write>(
    path: &Path,
    format: OutputFormat,
    strict: bool,
    output: &mut W,
) -> Result<(), MyLangError> {
    if !path.is_file() {
        return Err(MyLangError::FileNotFound(format!(
            "Source file not found: {}",
            path.display()
        )));
    }

    let source_code = fs::read_to_string(path)?;
    let tokens = Lexer::new(&source_code).tokenize();
    tracing::info!(path = %path.display(), count = tokens.len(), "tokenized file");

    if strict {
        check_tokens(path, &tokens)?;
    }

    for token in &tokens {
        write_token(token, format, output)?;
    }
    output.flush()?;
    Ok(())
}
