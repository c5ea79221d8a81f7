use std::collections::VecDeque;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, trace};

/// Reads whitespace separated integers, one token at a time, from line based input.
#[derive(Debug)]
pub struct ConsoleInput<R> {
    reader: R,
    tokens: VecDeque<Vec<u8>>,
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        ConsoleInput {
            reader,
            tokens: VecDeque::new(),
        }
    }

    pub fn next_int(&mut self) -> Result<i32, InputError> {
        let token = self.next_token()?;
        match std::str::from_utf8(&token).ok().and_then(|text| text.parse::<i32>().ok()) {
            Some(value) => Ok(value),
            None => {
                let token = String::from_utf8_lossy(&token).into_owned();
                debug!(token, "⚠️ Discarding non-integer token");
                Err(InputError::NotAnInteger(token))
            }
        }
    }

    // Lines that are not UTF-8 yield bad tokens, not read errors
    fn next_token(&mut self) -> Result<Vec<u8>, InputError> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(token);
            }

            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Err(InputError::EndOfInput);
            }

            trace!(line = %String::from_utf8_lossy(&line).trim_end(), "Read line");
            self.tokens.extend(
                line.split(|byte| byte.is_ascii_whitespace())
                    .filter(|token| !token.is_empty())
                    .map(<[u8]>::to_vec),
            );
        }
    }
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("'{0}' is not a whole number")]
    NotAnInteger(String),
    #[error("input ended before the exit option was chosen")]
    EndOfInput,
    #[error("unable to read input: {0}")]
    Io(#[from] io::Error),
}
