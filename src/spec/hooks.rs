//! Extension points of the spec document.
//!
//! Each part of the document (header, contents, footer) is built, then handed
//! to every callback registered for it, in registration order. Callbacks see
//! the collected items and may change the part freely.

use std::{error::Error, fmt};

use log::trace;

use crate::spec::{CollectedItem, OutlineBlock, SpecError};

/// Error a callback may fail with.
pub type HookError = Box<dyn Error + Send + Sync>;

type Callback<'h, P> = Box<dyn FnMut(&mut P, &[CollectedItem<'_>]) -> Result<(), HookError> + 'h>;

/// A named event with an ordered list of callbacks on a payload `P`.
pub struct ExtensionPoint<'h, P> {
    name: &'static str,
    callbacks: Vec<Callback<'h, P>>,
}

impl<'h, P> ExtensionPoint<'h, P> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            callbacks: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    pub fn register<F>(&mut self, callback: F)
    where
        F: FnMut(&mut P, &[CollectedItem<'_>]) -> Result<(), HookError> + 'h,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Run every callback in order, stopping at the first error.
    pub fn dispatch(
        &mut self,
        payload: &mut P,
        items: &[CollectedItem<'_>],
    ) -> Result<(), SpecError> {
        for (index, callback) in self.callbacks.iter_mut().enumerate() {
            trace!("dispatching {} callback #{index}", self.name);
            callback(&mut *payload, items).map_err(|source| SpecError::Hook {
                hook: self.name,
                source,
            })?;
        }
        Ok(())
    }
}

impl<P> fmt::Debug for ExtensionPoint<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionPoint")
            .field("name", &self.name)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

/// The extension points of one spec document.
#[derive(Debug)]
pub struct SpecHooks<'h> {
    pub header: ExtensionPoint<'h, Vec<String>>,
    pub contents: ExtensionPoint<'h, Vec<OutlineBlock>>,
    pub footer: ExtensionPoint<'h, Vec<String>>,
}

impl Default for SpecHooks<'_> {
    fn default() -> Self {
        Self {
            header: ExtensionPoint::new("spec_header"),
            contents: ExtensionPoint::new("spec_contents"),
            footer: ExtensionPoint::new("spec_footer"),
        }
    }
}
