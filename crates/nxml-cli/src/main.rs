use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use nxml::{Config, Document, Lookup};

#[derive(Debug, Parser)]
#[command(
    name = "nxml",
    version,
    about = "Parse an XML-like document and print it back in canonical form"
)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Reject malformed input instead of absorbing it
    #[arg(long)]
    strict: bool,
    /// Print only the element at PATH, e.g. `catalog/book[id=bk103]`
    #[arg(short, long, value_name = "PATH")]
    select: Option<String>,
    /// Print root element names and child counts instead of the document
    #[arg(long, conflicts_with = "select")]
    summary: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let input = read_input(&args.input)?;
    let config = if args.strict {
        Config::strict()
    } else {
        Config::default()
    };
    let doc = nxml::from_str_with_config(&input, config).context("failed to parse input")?;
    info!(roots = doc.roots.len(), "document parsed");

    let output = if args.summary {
        summarize(&doc)
    } else if let Some(path) = &args.select {
        let found = select(&doc, path)?;
        if found.is_invalid() {
            bail!("no element matches {path}");
        }
        found.to_xml()
    } else {
        doc.to_xml()
    };

    write_output(&args.output, &output)
}

/// Segment of a selection path: `name` or `name[key=value]`
#[derive(Debug, PartialEq, Eq)]
struct Step<'a> {
    name: &'a str,
    attribute: Option<(&'a str, &'a str)>,
}

fn parse_step(segment: &str) -> Result<Step<'_>> {
    let Some((name, rest)) = segment.split_once('[') else {
        return Ok(Step {
            name: segment,
            attribute: None,
        });
    };
    let Some(predicate) = rest.strip_suffix(']') else {
        bail!("unterminated predicate in {segment:?}");
    };
    let Some((key, value)) = predicate.split_once('=') else {
        bail!("predicate must look like [key=value] in {segment:?}");
    };
    Ok(Step {
        name,
        attribute: Some((key, value.trim_matches('"'))),
    })
}

fn select<'a>(doc: &'a Document, path: &str) -> Result<Lookup<'a>> {
    let mut steps = path.split('/').filter(|s| !s.is_empty()).map(parse_step);
    let Some(first) = steps.next().transpose()? else {
        bail!("empty selection path");
    };

    let mut current = Lookup::new(match first.attribute {
        Some((key, value)) => doc.root_with_attribute(first.name, key, value),
        None => doc.root(first.name),
    });
    for step in steps {
        let step = step?;
        current = match step.attribute {
            Some((key, value)) => current.child_with_attribute(step.name, key, value),
            None => current.child(step.name),
        };
    }
    Ok(current)
}

fn summarize(doc: &Document) -> String {
    let mut out = String::new();
    for root in &doc.roots {
        out.push_str(&format!(
            "{} ({:?}, {} children, {} attributes)\n",
            root.name(),
            root.kind(),
            root.children().len(),
            root.attributes().len()
        ));
    }
    out
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => nxml::load_file_as_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: &Option<PathBuf>, data: &str) -> Result<()> {
    match path {
        Some(path) => nxml::save_string_to_file(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout
                .write_all(data.as_bytes())
                .context("failed to write stdout")?;
            if !data.ends_with('\n') {
                stdout.write_all(b"\n").context("failed to write stdout")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_step() -> Result<()> {
        assert_eq!(
            parse_step("book")?,
            Step {
                name: "book",
                attribute: None
            }
        );
        assert_eq!(
            parse_step("book[id=bk103]")?,
            Step {
                name: "book",
                attribute: Some(("id", "bk103"))
            }
        );
        assert_eq!(
            parse_step("book[id=\"bk103\"]")?.attribute,
            Some(("id", "bk103"))
        );
        assert!(parse_step("book[id=bk103").is_err());
        assert!(parse_step("book[id]").is_err());
        Ok(())
    }

    #[test]
    fn test_select_path() -> Result<()> {
        let doc = nxml::from_str(
            r#"<?xml version="1.0"?><catalog><book id="a">A</book><book id="b">B</book></catalog>"#,
        )?;
        assert_eq!(select(&doc, "catalog/book[id=b]")?.text(), Some("B"));
        assert_eq!(select(&doc, "/catalog/book")?.text(), Some("A"));
        assert!(select(&doc, "catalog/magazine")?.is_invalid());
        assert!(select(&doc, "").is_err());
        Ok(())
    }
}
