use astarsa::AstarSaParams;
use clap::{value_parser, Parser};
use itertools::Itertools;
use sa_types::Document;
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    ops::ControlFlow,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use crate::preprocess;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("{}: unknown file extension, expected .txt", .0.display())]
    UnknownExtension(PathBuf),
    #[error("{}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> CliError + '_ {
    move |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Find suspiciously similar sentences between pairs of documents.
#[derive(Parser)]
#[clap(author, about)]
pub struct Cli {
    #[clap(flatten)]
    pub input: Input,

    /// Write all alignment results as JSON.
    #[arg(short, long, value_parser = value_parser!(PathBuf))]
    pub output: Option<PathBuf>,

    /// Read the alignment parameters from a JSON file instead of the flags below.
    #[arg(long, value_parser = value_parser!(PathBuf))]
    pub params: Option<PathBuf>,

    #[clap(flatten)]
    pub alignment: AstarSaParams,

    /// Print less. Pass twice for summary line only.
    ///
    /// Do not print the path and candidates of each pair, only the flagged
    /// sentences and stats. Pass twice to only print a summary line.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub silent: u8,

    /// Stop aligning new pairs after this timeout.
    #[arg(long, value_parser = parse_duration::parse, hide_short_help = true)]
    pub timeout: Option<Duration>,
}

impl Cli {
    /// The parameters from `--params` if given, otherwise from the flags.
    pub fn params(&self) -> Result<AstarSaParams, CliError> {
        let Some(path) = &self.params else {
            return Ok(self.alignment);
        };
        let file = File::open(path).map_err(io_error(path))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::Json {
            path: path.clone(),
            source,
        })
    }
}

#[derive(Parser)]
#[clap(next_help_heading = "Input")]
pub struct Input {
    /// A .txt file, or directory of .txt files, where each two consecutive
    /// non-empty lines are a pair of documents.
    #[clap(short, long, value_parser = value_parser!(PathBuf), display_order = 1, conflicts_with = "docs")]
    pub input: Option<PathBuf>,

    /// Two files containing one document each.
    #[clap(long, num_args = 2, value_names = ["A", "B"], value_parser = value_parser!(PathBuf), display_order = 1)]
    pub docs: Option<Vec<PathBuf>>,
}

impl Input {
    /// Call the given function for each pair in the input, with a label
    /// describing where the pair comes from.
    ///
    /// Without `--input` or `--docs`, two documents are read from stdin.
    pub fn process_input_pairs(
        &self,
        mut run_pair: impl FnMut(String, Document, Document) -> ControlFlow<()>,
    ) -> Result<(), CliError> {
        if let Some(docs) = &self.docs {
            let [a, b] = &docs[..] else {
                unreachable!("clap guarantees exactly two documents");
            };
            let text_a = std::fs::read_to_string(a).map_err(io_error(a))?;
            let text_b = std::fs::read_to_string(b).map_err(io_error(b))?;
            let label = format!("{} {}", a.display(), b.display());
            let _ = run_pair(label, preprocess(&text_a), preprocess(&text_b));
            return Ok(());
        }

        let Some(input) = &self.input else {
            let (a, b) = read_stdin_pair().map_err(io_error(Path::new("<stdin>")))?;
            let _ = run_pair("stdin".into(), a, b);
            return Ok(());
        };

        let files = if input.is_file() {
            vec![input.clone()]
        } else {
            input
                .read_dir()
                .map_err(io_error(input))?
                .map(|entry| entry.map(|e| e.path()))
                .collect::<Result<Vec<_>, _>>()
                .map_err(io_error(input))?
                .into_iter()
                .sorted()
                .collect_vec()
        };

        for f in files {
            if f.extension().map_or(true, |ext| ext != "txt") {
                return Err(CliError::UnknownExtension(f));
            }
            let reader = BufReader::new(File::open(&f).map_err(io_error(&f))?);
            let lines = reader
                .lines()
                .collect::<Result<Vec<_>, _>>()
                .map_err(io_error(&f))?;
            for (idx, (a, b)) in lines
                .iter()
                .filter(|l| !l.trim().is_empty())
                .tuples()
                .enumerate()
            {
                let label = format!("{}:{idx}", f.display());
                if let ControlFlow::Break(()) = run_pair(label, preprocess(a), preprocess(b)) {
                    return Ok(());
                }
            }
        }
        Ok(())
    }
}

/// Read one document from stdin, ending at an empty line or end of input.
fn read_document(lines: &mut impl Iterator<Item = io::Result<String>>) -> io::Result<Document> {
    let mut text = String::new();
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        text.push_str(&line);
        text.push('\n');
    }
    Ok(preprocess(&text))
}

fn read_stdin_pair() -> io::Result<(Document, Document)> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let prompt = |doc: &str| -> io::Result<()> {
        eprintln!("Enter document {doc}, followed by an empty line:");
        io::stderr().flush()
    };
    prompt("A")?;
    let a = read_document(&mut lines)?;
    prompt("B")?;
    let b = read_document(&mut lines)?;
    Ok((a, b))
}
