//! `placemark extract` - read coordinates out of map links.
//!
//! URLs come from the command line, or one per line from stdin when none
//! are given. A link without coordinates is reported, not treated as an
//! error, unless `--strict` is set.

use clap::Args;
use serde_json::json;
use std::io::{self, BufRead, Write};

use placemark::extract::{CoordinateExtractor, Extraction};

use super::common::{Context, OutputFormat, PolicyArg};
use crate::error::CliError;

/// Arguments for the extract command.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Map URLs to read (reads stdin, one per line, when omitted)
    pub urls: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Override the configured match policy
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Exit with status 2 if any URL has no coordinates
    #[arg(long)]
    pub strict: bool,
}

/// Run the extract command.
pub fn run(args: ExtractArgs, ctx: &Context) -> Result<(), CliError> {
    let config = ctx.load_config()?;
    let extractor = ctx.extractor(&config, args.policy);

    let urls = if args.urls.is_empty() {
        read_urls(io::stdin().lock())?
    } else {
        args.urls
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let unmatched = extract_all(&extractor, &urls, args.format, &mut out)?;
    out.flush().map_err(CliError::Output)?;

    tracing::debug!(total = urls.len(), unmatched, "extraction finished");

    if args.strict && unmatched > 0 {
        return Err(CliError::Unmatched {
            unmatched,
            total: urls.len(),
        });
    }
    Ok(())
}

/// Read non-blank lines as URLs.
fn read_urls<R: BufRead>(reader: R) -> Result<Vec<String>, CliError> {
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(CliError::Input)?;
        let url = line.trim();
        if !url.is_empty() {
            urls.push(url.to_string());
        }
    }
    Ok(urls)
}

/// Extract every URL, writing one line each. Returns the number of misses.
fn extract_all<W: Write>(
    extractor: &CoordinateExtractor,
    urls: &[String],
    format: OutputFormat,
    out: &mut W,
) -> Result<usize, CliError> {
    let mut unmatched = 0;
    for url in urls {
        let result = extractor.extract(url);
        if !result.is_match() {
            unmatched += 1;
        }
        write_result(out, url, &result, format).map_err(CliError::Output)?;
    }
    Ok(unmatched)
}

fn write_result<W: Write>(
    out: &mut W,
    url: &str,
    result: &Extraction,
    format: OutputFormat,
) -> io::Result<()> {
    match (format, result) {
        (OutputFormat::Text, Extraction::Match { coordinate, .. }) => {
            writeln!(out, "{}", coordinate)
        }
        (OutputFormat::Text, Extraction::NoMatch) => writeln!(out, "no match"),
        (
            OutputFormat::Json,
            Extraction::Match {
                coordinate,
                dialect,
            },
        ) => {
            let value = json!({
                "url": url,
                "lat": coordinate.lat(),
                "lng": coordinate.lng(),
                "dialect": dialect.name(),
            });
            writeln!(out, "{}", value)
        }
        (OutputFormat::Json, Extraction::NoMatch) => {
            writeln!(out, "{}", json!({ "url": url, "match": null }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placemark::extract::MatchPolicy;

    fn run_text(extractor: &CoordinateExtractor, urls: &[&str]) -> (String, usize) {
        let urls: Vec<String> = urls.iter().map(|u| u.to_string()).collect();
        let mut out = Vec::new();
        let unmatched = extract_all(extractor, &urls, OutputFormat::Text, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), unmatched)
    }

    #[test]
    fn test_text_output() {
        let (out, unmatched) = run_text(
            &CoordinateExtractor::new(),
            &["https://mapy.cz/?x=14.4378&y=50.0755", "https://example.com"],
        );

        assert_eq!(out, "50.0755,14.4378\nno match\n");
        assert_eq!(unmatched, 1);
    }

    #[test]
    fn test_json_output() {
        let urls = vec![
            "https://maps.google.com/@50.1,14.4,15z".to_string(),
            "nothing".to_string(),
        ];
        let mut out = Vec::new();
        extract_all(&CoordinateExtractor::new(), &urls, OutputFormat::Json, &mut out).unwrap();

        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines[0]["lat"], 50.1);
        assert_eq!(lines[0]["lng"], 14.4);
        assert_eq!(lines[0]["dialect"], "google-maps");
        assert_eq!(lines[1]["url"], "nothing");
        assert!(lines[1]["match"].is_null());
    }

    #[test]
    fn test_policy_changes_output() {
        let url = ["?x=200&y=50&ll=50,14"];

        let (strict, _) = run_text(&CoordinateExtractor::new(), &url);
        assert_eq!(strict, "no match\n");

        let lenient = CoordinateExtractor::new().with_policy(MatchPolicy::FirstValid);
        let (out, _) = run_text(&lenient, &url);
        assert_eq!(out, "50,14\n");
    }

    #[test]
    fn test_read_urls_skips_blank_lines() {
        let input = "https://a.test/?ll=1,2\n\n   \n  https://b.test  \n";
        let urls = read_urls(input.as_bytes()).unwrap();
        assert_eq!(urls, vec!["https://a.test/?ll=1,2", "https://b.test"]);
    }
}
