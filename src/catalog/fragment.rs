//! Structural checks for embedded markup fragments.
//!
//! Notation and example visuals are forwarded verbatim to whatever renders
//! them, so the catalog only guarantees that each fragment stands on its own:
//! one `<svg>` root, balanced tags, nothing but whitespace around it.

use anyhow::{Result, bail};
use svg::node::element::tag::Type;
use svg::parser::Event;

const ROOT_ELEMENT: &str = "svg";

/// Verify that `markup` is a standalone, well-formed SVG fragment.
pub fn check_fragment(markup: &str) -> Result<()> {
    if markup.trim().is_empty() {
        bail!("fragment is empty");
    }

    let parser = svg::read(markup).map_err(|err| anyhow::anyhow!("reading fragment: {err}"))?;
    let mut open: Vec<String> = Vec::new();
    let mut roots = 0usize;

    for event in parser {
        match event {
            Event::Error(err) => bail!("malformed fragment: {err}"),
            Event::Tag(name, kind, _) => match kind {
                Type::Start => {
                    if open.is_empty() {
                        open_root(name, &mut roots)?;
                    }
                    open.push(name.to_string());
                }
                Type::Empty => {
                    if open.is_empty() {
                        open_root(name, &mut roots)?;
                    }
                }
                Type::End => match open.pop() {
                    Some(expected) if expected == name => {}
                    Some(expected) => {
                        bail!("closing tag </{name}> does not match open <{expected}>")
                    }
                    None => bail!("closing tag </{name}> has no matching open tag"),
                },
            },
            Event::Text(text) => {
                if open.is_empty() && !text.trim().is_empty() {
                    bail!("text outside the root element");
                }
            }
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        bail!("unclosed tag <{unclosed}>");
    }
    if roots == 0 {
        bail!("fragment has no root element");
    }
    Ok(())
}

fn open_root(name: &str, roots: &mut usize) -> Result<()> {
    *roots += 1;
    if *roots > 1 {
        bail!("fragment has more than one root element");
    }
    if name != ROOT_ELEMENT {
        bail!("fragment root must be <{ROOT_ELEMENT}>, found <{name}>");
    }
    Ok(())
}
