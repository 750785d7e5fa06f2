//! Tokens command implementation

use anyhow::Result;
use clap::Args;
use dinsort_core::{CaseMode, Token, Tokenizer};

/// Arguments for the tokens command
#[derive(Debug, Args)]
pub struct TokensArgs {
    /// String to tokenize
    pub text: String,

    /// Fold letters to upper case, as the first comparison level does
    #[arg(long)]
    pub insensitive: bool,
}

impl TokensArgs {
    /// Execute the tokens command
    pub fn execute(&self) -> Result<()> {
        for line in self.render() {
            println!("{line}");
        }
        Ok(())
    }

    /// One line per token, ending with `END`
    pub fn render(&self) -> Vec<String> {
        let case_mode = if self.insensitive {
            CaseMode::Insensitive
        } else {
            CaseMode::Sensitive
        };

        let mut tokenizer = Tokenizer::new(&self.text, case_mode);
        let mut lines = Vec::new();
        loop {
            let token = tokenizer.next_token();
            lines.push(token.to_string());
            if token == Token::End {
                return lines;
            }
        }
    }
}
