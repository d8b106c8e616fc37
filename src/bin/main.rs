extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate fzsel;
extern crate shlex;

use std::env;
use std::io::{self, BufWriter, ErrorKind, Write};

use clap::Parser;
use color_eyre::eyre::Result;
use fzsel::prelude::*;

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // if downstream pipe is closed, exit silently
            if is_broken_pipe(&err) {
                std::process::exit(0)
            }
            if let Some(Error::NoCandidates) = err.downcast_ref::<Error>() {
                warn!("{err}");
                std::process::exit(1)
            }
            eprintln!("fzsel: {err:?}");
            std::process::exit(2)
        }
    }
}

fn is_broken_pipe(err: &color_eyre::Report) -> bool {
    let io_err = match err.downcast_ref::<Error>() {
        Some(Error::Io(io_err)) => Some(io_err),
        _ => err.downcast_ref::<io::Error>(),
    };
    io_err.is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
}

fn parse_args() -> FzselOptions {
    let mut args = Vec::new();

    args.push(
        env::args()
            .next()
            .expect("there should be at least one arg: the application name"),
    );
    args.extend(
        env::var("FZSEL_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    for arg in env::args().skip(1) {
        args.push(arg);
    }

    FzselOptions::parse_from(args)
}

fn format_score(score: Score) -> String {
    if score.is_infinite() {
        score.to_string()
    } else {
        format!("{score:.3}")
    }
}

fn real_main() -> Result<i32> {
    color_eyre::install()?;
    let opts = parse_args();
    debug!("options: {opts:?}");

    //------------------------------------------------------------------------------
    // read candidates
    let items = ItemReader::default()
        .line_ending(opts.line_ending())
        .of_read(io::stdin().lock())?;
    if items.is_empty() {
        return Err(Error::NoCandidates.into());
    }
    let lines = items.lines();

    //------------------------------------------------------------------------------
    // match
    let query = opts.query();
    let mut matcher = Matcher::new();
    let matches = matcher.filter(query.as_bytes(), &lines);
    debug!("matched {}/{}", matches.len(), lines.len());

    //------------------------------------------------------------------------------
    // output
    let ending = opts.output_ending();
    let mut stdout = BufWriter::new(io::stdout().lock());

    if opts.print_query {
        write!(stdout, "{query}{ending}")?;
    }

    let selection = Selection::new(opts.height);
    for m in selection.visible(matches.len()).filter_map(|rank| matches.get(rank)) {
        if opts.show_scores {
            write!(stdout, "{}\t", format_score(m.score))?;
        }
        if opts.show_matches {
            stdout.write_all(&wrap_matches(m.item, m.positions))?;
        } else {
            stdout.write_all(m.item)?;
        }
        stdout.write_all(ending.as_bytes())?;
    }
    stdout.flush()?;

    Ok(if matches.is_empty() && !opts.exit_0 { 1 } else { 0 })
}
