//! Command-line tool parsing an RDF file and dumping it as N-Triples.
//!
//! ```bash
//! relbase --base app://example/nested/ doc.ttl
//! relbase --syntax rdfxml --expect '<app://example/a> <app://example/p> <app://example/b>' doc.xml
//! ```
//!
//! Exit codes:
//! * 0: success,
//! * 1: the file could not be parsed,
//! * 2: the triple given with `--expect` is not in the graph,
//! * 3: I/O or usage error.

use clap::Parser;
use relbase::api::graph::Graph;
use relbase::api::serializer::TripleSerializer;
use relbase::turtle::serializer::nt::NtSerializer;
use relbase::{parse, parse_str, LightGraph, Syntax};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Parse an RDF file, resolving relative IRIs against a base of any scheme,
/// and print the resulting graph as N-Triples.
#[derive(Parser, Debug)]
#[command(name = "relbase", version)]
struct Args {
    /// Syntax of the file (ntriples, turtle, rdfxml, or a media type);
    /// guessed from the file extension if omitted
    #[arg(short, long)]
    syntax: Option<Syntax>,

    /// Base IRI used to resolve relative IRIs, unless the document sets its own
    #[arg(short, long)]
    base: Option<String>,

    /// Check that the graph contains the given triple, written as '<s> <p> <o>'
    #[arg(short, long, value_name = "TRIPLE")]
    expect: Option<String>,

    /// The file to parse
    file: PathBuf,
}

const PARSE_ERROR: u8 = 1;
const NOT_FOUND: u8 = 2;
const USAGE_ERROR: u8 = 3;

fn main() -> ExitCode {
    env_logger::init();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(USAGE_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err((code, msg)) => {
            eprintln!("{msg}");
            ExitCode::from(code)
        }
    }
}

fn run(args: &Args) -> Result<(), (u8, String)> {
    let Some(syntax) = args.syntax.or_else(|| Syntax::from_path(&args.file)) else {
        return Err((
            USAGE_ERROR,
            format!(
                "Can not guess the syntax of {}, use --syntax",
                args.file.display()
            ),
        ));
    };
    let expected = args.expect.as_deref().map(expected_graph).transpose()?;

    let data = std::fs::read(&args.file)
        .map_err(|err| (USAGE_ERROR, format!("{}: {err}", args.file.display())))?;
    let graph = parse(&data, syntax, args.base.as_deref())
        .map_err(|err| (PARSE_ERROR, err.in_context(&args.file.display().to_string())))?;
    log::info!(
        "{} triples read from {} ({syntax})",
        graph.len(),
        args.file.display()
    );

    dump(&graph).map_err(|err| (USAGE_ERROR, format!("Can not write output: {err}")))?;

    if let Some(expected) = expected {
        for [s, p, o] in expected.triples() {
            if !graph.contains(&s, &p, &o) {
                return Err((NOT_FOUND, format!("Expected triple not found: <{s}> <{p}> <{o}>")));
            }
        }
    }
    Ok(())
}

/// Parse the argument of `--expect` as a single N-Triples statement.
fn expected_graph(txt: &str) -> Result<LightGraph, (u8, String)> {
    let txt = txt.trim();
    let stmt = if txt.ends_with('.') {
        txt.to_string()
    } else {
        format!("{txt} .")
    };
    match parse_str(&stmt, Syntax::NTriples, None) {
        Ok(g) if g.len() == 1 => Ok(g),
        Ok(_) => Err((USAGE_ERROR, format!("--expect requires exactly one triple, got {txt:?}"))),
        Err(err) => Err((USAGE_ERROR, format!("Invalid --expect {txt:?}: {err}"))),
    }
}

fn dump(graph: &LightGraph) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    NtSerializer::new(&mut out).serialize_graph(graph)?;
    out.flush()
}
