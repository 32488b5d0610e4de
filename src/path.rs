//! Container bookkeeping and JSON path rendering.
//!
//! The tokenizer tracks nesting as a stack of [`Frame`]s, one per object or
//! array the cursor is currently inside. [`PathStack`] owns that stack and
//! renders it as a `$`-rooted path string, memoizing the result behind a
//! dirty flag so that runs of tokens at the same location share one
//! rendering.
//!
//! A frame is *anonymous* until it has produced something to point at: an
//! object frame whose key has not been assigned yet, or an array frame in
//! which no element has started. Anonymous frames are omitted from the
//! rendered path, which is why `{` at the root renders `$` and the first
//! element of `[1,2]` renders `$[0]` while the `[` itself still renders the
//! parent path.

use alloc::{string::String, vec::Vec};
use core::fmt::Write;

/// One level of object or array nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Frame {
    /// An object; `key` is the member currently being read, `None` until
    /// the key's closing quote assigns it.
    Object { key: Option<String> },
    /// An array; `index` is the element currently being read, `None` until
    /// the first element begins.
    Array { index: Option<usize> },
}

impl Frame {
    fn is_anonymous(&self) -> bool {
        matches!(
            self,
            Frame::Object { key: None } | Frame::Array { index: None }
        )
    }
}

/// The container stack plus its memoized path rendering.
#[derive(Debug)]
pub(crate) struct PathStack {
    frames: Vec<Frame>,
    cache: String,
    dirty: bool,
}

impl PathStack {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            cache: String::from("$"),
            dirty: false,
        }
    }

    pub fn push_object(&mut self) {
        self.frames.push(Frame::Object { key: None });
        self.dirty = true;
    }

    pub fn push_array(&mut self) {
        self.frames.push(Frame::Array { index: None });
        self.dirty = true;
    }

    /// Pops the innermost frame. Popping an empty stack is a no-op.
    pub fn pop(&mut self) {
        if self.frames.pop().is_some() {
            self.dirty = true;
        }
    }

    /// True when the innermost frame is an object still waiting for the
    /// member key, which is what distinguishes `"` opening a key from `"`
    /// opening a value.
    pub fn awaiting_key(&self) -> bool {
        matches!(self.frames.last(), Some(Frame::Object { key: None }))
    }

    /// Assigns the member key of the innermost frame, if it is an object.
    pub fn set_key(&mut self, key: String) {
        if let Some(Frame::Object { key: slot }) = self.frames.last_mut() {
            *slot = Some(key);
            self.dirty = true;
        }
    }

    /// Records that a new value is starting. An untouched array frame on
    /// top is promoted to its first element so the value renders `[0]`.
    pub fn begin_element(&mut self) {
        if let Some(Frame::Array { index: index @ None }) = self.frames.last_mut() {
            *index = Some(0);
            self.dirty = true;
        }
    }

    /// Advances past a `,`: the next array element, or the next object
    /// member (whose key is not known yet).
    pub fn next_sibling(&mut self) {
        match self.frames.last_mut() {
            Some(Frame::Array { index }) => {
                *index = Some(index.map_or(0, |i| i + 1));
                self.dirty = true;
            }
            Some(Frame::Object { key }) => {
                *key = None;
                self.dirty = true;
            }
            None => {}
        }
    }

    /// Renders the current nesting as a path string, rebuilding the cached
    /// rendering only when the stack changed since the last call.
    pub fn render(&mut self) -> String {
        if self.dirty {
            self.cache = self.rebuild();
            self.dirty = false;
        }
        self.cache.clone()
    }

    fn rebuild(&self) -> String {
        let mut path = String::from("$");
        for frame in &self.frames {
            if frame.is_anonymous() {
                continue;
            }
            match frame {
                Frame::Object { key: Some(key) } => {
                    path.push('.');
                    path.push_str(key);
                }
                Frame::Array { index: Some(index) } => {
                    let _ = write!(path, "[{index}]");
                }
                Frame::Object { key: None } | Frame::Array { index: None } => {}
            }
        }
        path
    }
}
