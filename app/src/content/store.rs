use std::path::PathBuf;

use crate::content::hydrate::RemoteContent;
use crate::content::{Error, Result};

const OVERRIDES_FILE: &str = "content.json";
const ABOUT_FILE: &str = "about.md";

/// Server-side source for everything the site serves beyond the compiled-in
/// defaults: the hydration overrides and the about document.
#[derive(Clone, Debug)]
pub struct ContentStore {
    path: PathBuf,
}

impl ContentStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the override payload. The file is optional: a store without
    /// `content.json` serves an empty payload and the site renders its
    /// compiled-in content. A file that exists but cannot be read or parsed
    /// is an error.
    pub fn overrides(&self) -> Result<RemoteContent> {
        let path = self.path.join(OVERRIDES_FILE);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no `{}' in the content store, serving no overrides", path.display());
                return Ok(RemoteContent::default());
            }
            Err(error) => return Err(Error::IO { error, path }),
        };
        serde_json::from_str(&raw).map_err(|error| Error::Deserialize {
            error: error.to_string(),
            path,
        })
    }

    /// Renders the about document to HTML.
    pub fn about_html(&self) -> Result<String> {
        let path = self.path.join(ABOUT_FILE);
        let raw = std::fs::read_to_string(&path).map_err(|error| Error::IO {
            error,
            path: path.clone(),
        })?;

        let parser = pulldown_cmark::Parser::new_ext(&raw, pulldown_cmark::Options::all());
        let mut html = String::with_capacity(raw.len() * 3 / 2);
        pulldown_cmark::html::push_html(&mut html, parser);
        Ok(html)
    }
}
