//! Input resolution
//!
//! Turns a [`SelectionRequest`] into exactly one image path. Strategies are
//! tried in a fixed order and the first one that applies decides the outcome:
//!
//! 1. stdin: read candidate paths line by line
//! 2. explicit path: a file, or a directory optionally narrowed by the glob
//! 3. glob: expand against the working directory
//! 4. default: scan the working directory
//!
//! Whenever a strategy ends up with several candidates, the interactive flag
//! decides between taking the first one and asking the user.

use crate::candidates::{
    expand_glob, filter_by_glob, images_in_dir, is_dir, is_file, is_image_file, is_image_path,
    path_from_line,
};
use crate::error::{Error, Result};
use crate::picker::pick;
use log::{debug, trace};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Everything the user said about which image to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest {
    /// Explicit file or directory
    pub path: Option<PathBuf>,
    /// Glob pattern; narrows a directory's candidates when `path` is a directory
    pub glob: Option<String>,
    /// Read candidate paths from the input stream
    pub from_stdin: bool,
    /// Prompt when choosing among candidates instead of taking the first
    pub interactive: bool,
}

impl Default for SelectionRequest {
    fn default() -> Self {
        Self {
            path: None,
            glob: None,
            from_stdin: false,
            interactive: true,
        }
    }
}

/// Streams and working directory shared by every strategy
pub struct Context<'a> {
    pub input: &'a mut dyn BufRead,
    pub prompt: &'a mut dyn Write,
    pub working_dir: &'a Path,
    pub interactive: bool,
}

impl Context<'_> {
    /// Take the first candidate or ask the user, per the interactive flag
    fn choose(&mut self, mut candidates: Vec<PathBuf>) -> Result<PathBuf> {
        debug_assert!(!candidates.is_empty());
        if self.interactive {
            pick(&candidates, &mut *self.input, &mut *self.prompt)
        } else {
            if candidates.len() > 1 {
                debug!(
                    "{} candidates, taking {} without prompting",
                    candidates.len(),
                    candidates[0].display()
                );
            }
            Ok(candidates.swap_remove(0))
        }
    }
}

/// One way of turning a request into a path
pub trait Strategy {
    fn name(&self) -> &'static str;

    /// Attempt resolution
    ///
    /// # Returns
    /// `None` when the strategy does not apply to the request, otherwise its
    /// final answer
    fn attempt(&self, request: &SelectionRequest, cx: &mut Context<'_>)
    -> Option<Result<PathBuf>>;
}

/// Read paths from the input stream until one is usable
pub struct StdinStrategy;

impl Strategy for StdinStrategy {
    fn name(&self) -> &'static str {
        "stdin"
    }

    fn attempt(
        &self,
        request: &SelectionRequest,
        cx: &mut Context<'_>,
    ) -> Option<Result<PathBuf>> {
        if !request.from_stdin {
            return None;
        }

        let mut line = Vec::new();
        loop {
            line.clear();
            match cx.input.read_until(b'\n', &mut line) {
                Ok(0) => return Some(Err(Error::NoUsableInput)),
                Ok(_) => {}
                Err(e) => return Some(Err(Error::StdinRead(e))),
            }

            // Raw bytes: a line that is not UTF-8 is just another unusable path
            let Some(candidate) = path_from_line(line.trim_ascii()) else {
                continue;
            };
            let path = candidate.as_path();

            if is_image_file(path) {
                return Some(Ok(path.to_path_buf()));
            }
            if is_dir(path) {
                let found = images_in_dir(path);
                if !found.is_empty() {
                    return Some(cx.choose(found));
                }
            }
            trace!("skipping unusable stdin line {}", path.display());
        }
    }
}

/// Use the explicit path: an image file, or a directory of candidates
pub struct ExplicitPathStrategy;

impl Strategy for ExplicitPathStrategy {
    fn name(&self) -> &'static str {
        "explicit path"
    }

    fn attempt(
        &self,
        request: &SelectionRequest,
        cx: &mut Context<'_>,
    ) -> Option<Result<PathBuf>> {
        let path = request.path.as_deref()?;

        if is_dir(path) {
            let mut found = images_in_dir(path);
            if let Some(pattern) = &request.glob {
                found = filter_by_glob(found, pattern);
            }
            if found.is_empty() {
                return Some(Err(Error::EmptyDirectory(path.to_path_buf())));
            }
            return Some(cx.choose(found));
        }

        if is_file(path) {
            if is_image_path(path) {
                return Some(Ok(path.to_path_buf()));
            }
            return Some(Err(Error::NotAnImage(path.to_path_buf())));
        }

        Some(Err(Error::PathNotFound(path.to_path_buf())))
    }
}

/// Expand the glob in the working directory
pub struct GlobStrategy;

impl Strategy for GlobStrategy {
    fn name(&self) -> &'static str {
        "glob"
    }

    fn attempt(
        &self,
        request: &SelectionRequest,
        cx: &mut Context<'_>,
    ) -> Option<Result<PathBuf>> {
        let pattern = request.glob.as_deref()?;

        let found = expand_glob(cx.working_dir, pattern);
        if found.is_empty() {
            return Some(Err(Error::NoGlobMatch(pattern.to_string())));
        }
        Some(cx.choose(found))
    }
}

/// Scan the working directory
pub struct DefaultStrategy;

impl Strategy for DefaultStrategy {
    fn name(&self) -> &'static str {
        "working directory"
    }

    fn attempt(
        &self,
        _request: &SelectionRequest,
        cx: &mut Context<'_>,
    ) -> Option<Result<PathBuf>> {
        let found = images_in_dir(cx.working_dir);
        if found.is_empty() {
            return Some(Err(Error::NoImagesFound));
        }
        Some(cx.choose(found))
    }
}

/// Resolves a [`SelectionRequest`] against injected streams
///
/// # Example
/// ```no_run
/// use ascii_term::{Resolver, SelectionRequest};
/// use std::io;
///
/// let stdin = io::stdin();
/// let mut input = stdin.lock();
/// let mut prompt = io::stderr();
/// let request = SelectionRequest { interactive: false, ..Default::default() };
/// let path = Resolver::new(&mut input, &mut prompt).resolve(&request).unwrap();
/// println!("{}", path.display());
/// ```
pub struct Resolver<'a> {
    input: &'a mut dyn BufRead,
    prompt: &'a mut dyn Write,
    working_dir: PathBuf,
    strategies: Vec<Box<dyn Strategy>>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver reading from `input` and prompting on `prompt`,
    /// scanning the process's current directory
    pub fn new(input: &'a mut dyn BufRead, prompt: &'a mut dyn Write) -> Self {
        Self {
            input,
            prompt,
            working_dir: PathBuf::from("."),
            strategies: vec![
                Box::new(StdinStrategy),
                Box::new(ExplicitPathStrategy),
                Box::new(GlobStrategy),
                Box::new(DefaultStrategy),
            ],
        }
    }

    /// Scan `dir` instead of the current directory for the glob and default strategies
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    /// Resolve the request to a single path
    pub fn resolve(&mut self, request: &SelectionRequest) -> Result<PathBuf> {
        let mut cx = Context {
            input: &mut *self.input,
            prompt: &mut *self.prompt,
            working_dir: &self.working_dir,
            interactive: request.interactive,
        };

        for strategy in &self.strategies {
            if let Some(outcome) = strategy.attempt(request, &mut cx) {
                debug!("input resolved by {} strategy", strategy.name());
                if let Ok(path) = &outcome {
                    debug!("selected {}", path.display());
                }
                return outcome;
            }
        }

        // DefaultStrategy always applies
        unreachable!("no input strategy applied")
    }
}
