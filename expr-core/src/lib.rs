pub mod eval;
pub mod lexer;
pub mod parser;
pub mod utils;

pub mod prelude {
    pub use crate::eval::value::Value;
    pub use crate::utils::prelude::*;
}

use std::path::PathBuf;

use utf8_chars::BufReadCharsExt;

use crate::eval::value::Value;
use crate::lexer::prelude::{scan, Token};
use crate::parser::prelude::{Expr, Parser};
use crate::utils::prelude::Error;

/// Scans the source to completion. Any accumulated lexical diagnostics are
/// returned together as a static error; the token sequence is released only
/// when scanning was clean.
pub fn scan_source(path: PathBuf, src: &str) -> Result<Vec<Token>, Error> {
    let (tokens, errors) = scan(src);

    if !errors.is_empty() {
        return Err(Error::Lex { path, src: src.into(), errors });
    }

    Ok(tokens)
}

/// Scans and parses, producing the expression tree or a static error.
pub fn parse_source(path: PathBuf, src: &str) -> Result<Expr, Error> {
    let tokens = scan_source(path.clone(), src)?;

    Parser::new(tokens)
        .parse()
        .map_err(|error| Error::Parse { path, src: src.into(), error })
}

/// Runs the whole pipeline on one source text. Static errors suppress
/// evaluation; runtime failures surface as their own error tier.
pub fn run(path: PathBuf, src: &str) -> Result<Value, Error> {
    let expr = parse_source(path.clone(), src)?;

    eval::eval(&expr).map_err(|error| Error::Runtime { path, src: src.into(), error })
}

/// Reads the file as a UTF-8 char stream and feeds it through the pipeline.
pub fn run_file(path: PathBuf) -> Result<Value, Error> {
    let src = read_source(&path)?;

    run(path, &src)
}

pub fn read_source(path: &PathBuf) -> Result<String, Error> {
    let file = std::fs::File::open(path)
        .map_err(|err| Error::StdIo { err: err.kind() })?;

    let file_size = file.metadata()
        .map_err(|err| Error::StdIo { err: err.kind() })?.len() as usize;

    let mut src = String::with_capacity(file_size);
    let mut reader = std::io::BufReader::new(file);

    for ch in reader.chars() {
        let ch = ch.map_err(|err| Error::StdIo { err: err.kind() })?;
        src.push(ch);
    }

    Ok(src)
}
