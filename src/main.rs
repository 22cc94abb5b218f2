use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Compute DocIDs for URLs, one per input line.
///
/// Each output line is `<docid>\t<input>`; a line that cannot be read is
/// reported as `E\t`. Lines that are already DocIDs in either hex form are
/// decoded instead of hashed.
#[derive(Parser, Debug)]
#[command(name = "docid", version, about)]
struct Cli {
    /// Comma separated file list (default: stdin)
    #[arg(short = 'f', long = "files", value_delimiter = ',')]
    files: Vec<PathBuf>,

    /// Show verbose build info and exit
    #[arg(long = "build-info")]
    build_info: bool,
}

fn build_info() -> String {
    format!(
        "Name:      {}\nVersion:   {}\nProfile:   {}\nTarget:    {}-{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        if cfg!(debug_assertions) { "debug" } else { "release" },
        std::env::consts::ARCH,
        std::env::consts::OS,
    )
}

/// Fingerprint every line of `input` and write the results to `out`.
fn process<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<usize> {
    let mut count = 0;
    for line in input.split(b'\n') {
        let mut line = match line {
            Ok(line) => line,
            Err(e) => {
                out.write_all(b"E\t\n")?;
                return Err(e);
            }
        };
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        let id = docid::from_bytes(&line);
        out.write_all(id.to_readable_hex().as_bytes())?;
        out.write_all(b"\t")?;
        out.write_all(&line)?;
        out.write_all(b"\n")?;
        count += 1;
    }
    Ok(count)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.build_info {
        eprintln!("{}", build_info());
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.files.is_empty() {
        let count = process(io::stdin().lock(), &mut out)?;
        debug!(count, "processed stdin");
    } else {
        for path in &cli.files {
            let file = match File::open(path) {
                Ok(file) => file,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable file");
                    continue;
                }
            };
            match process(BufReader::new(file), &mut out) {
                Ok(count) => debug!(path = %path.display(), count, "processed file"),
                Err(e) => warn!(path = %path.display(), error = %e, "read failed"),
            }
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_lines() {
        let input = b"http://www.google.com/\r\n1\n";
        let mut out = Vec::new();
        let count = process(&input[..], &mut out).unwrap();

        assert_eq!(count, 2);
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("1d5920f4b44b27a8-ed646a3334ca891f-ff90821feeb2b02a33a6f9fc8e5f3fcd\thttp://www.google.com/")
        );
        assert!(lines.next().unwrap().ends_with("\t1"));
    }

    #[test]
    fn test_cli_parses_file_list() {
        let cli = Cli::parse_from(["docid", "-f", "a.txt,b.txt"]);
        assert_eq!(cli.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert!(!cli.build_info);
    }

    #[test]
    fn test_build_info_names_package() {
        assert!(build_info().contains(env!("CARGO_PKG_VERSION")));
    }
}
