use std::io;
use std::path::Path;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

use crate::error::{Error, Result};

const INVALID_CHOICE: &str = "Invalid choice. Please enter 'o', 'a', or 'c'.\n";

/// What to do with a `.gitignore` that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Overwrite,
    Append,
    Cancel,
}

impl Choice {
    /// Matches a trimmed, lower-cased answer.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "o" | "overwrite" => Some(Self::Overwrite),
            "a" | "append" => Some(Self::Append),
            "c" | "cancel" => Some(Self::Cancel),
            _ => None,
        }
    }
}

/// Asks the user how to reconcile an existing file.
#[async_trait]
pub trait Prompt: Send {
    async fn choose(&mut self, path: &Path) -> Result<Choice>;
}

/// Asks until a valid answer is read. Running out of input is an error.
pub async fn prompt_for_choice<R, W>(input: &mut R, output: &mut W, path: &Path) -> Result<Choice>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    let mut line = String::new();
    loop {
        let question = format!(
            "A '{}' file already exists. What would you like to do? \
             (o)verwrite / (a)ppend / (c)ancel: ",
            path.display()
        );
        output
            .write_all(question.as_bytes())
            .await
            .map_err(Error::PromptWrite)?;
        output.flush().await.map_err(Error::PromptWrite)?;

        line.clear();
        let read = input.read_line(&mut line).await.map_err(Error::PromptRead)?;
        if read == 0 {
            return Err(Error::PromptRead(io::ErrorKind::UnexpectedEof.into()));
        }

        match Choice::parse(&line) {
            Some(choice) => return Ok(choice),
            None => {
                output
                    .write_all(INVALID_CHOICE.as_bytes())
                    .await
                    .map_err(Error::PromptWrite)?;
            }
        }
    }
}

/// Prompt bound to an input/output pair, stdin/stdout for the real tool.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

#[async_trait]
impl<R, W> Prompt for ConsolePrompt<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn choose(&mut self, path: &Path) -> Result<Choice> {
        prompt_for_choice(&mut self.input, &mut self.output, path).await
    }
}
