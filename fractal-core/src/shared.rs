//! Parameter state shared between the render loop, the animator and the UI.

use std::{cell::RefCell, rc::Rc};

use tracing::warn;

use crate::{config::FractalParameters, error::ParameterError, types::Depth};

/// Cheap-to-clone handle to one mutable [`FractalParameters`] record.
///
/// Every clone refers to the same record. The handle is single-threaded
/// (`Rc` + `RefCell`, so it is neither `Send` nor `Sync`): the render loop,
/// the animator and input handlers must all run on the same event loop and
/// each access runs to completion before the next one starts, so a reader
/// never sees a partially written record.
#[derive(Clone, Debug, Default)]
pub struct ParameterSource {
    inner: Rc<RefCell<FractalParameters>>,
}

impl ParameterSource {
    /// Creates a new handle owning `params`.
    ///
    /// ### Parameters
    /// - `params` - Initial record. It is stored as-is, without validation.
    ///
    /// ### Returns
    /// The first handle; further ones are obtained with `clone`.
    pub fn new(params: FractalParameters) -> Self {
        Self {
            inner: Rc::new(RefCell::new(params)),
        }
    }

    /// Returns a copy of the current parameters.
    pub fn get(&self) -> FractalParameters {
        *self.inner.borrow()
    }

    /// Replaces the whole record after validating it.
    ///
    /// An invalid record is refused and the current state is left untouched.
    pub fn set(&self, params: FractalParameters) -> Result<(), ParameterError> {
        if let Err(e) = params.validate() {
            warn!(error = %e, "rejected parameter update");
            return Err(e);
        }
        *self.inner.borrow_mut() = params;
        Ok(())
    }

    /// Mutates the record in place and returns the closure's result.
    ///
    /// ### Panics
    /// Panics if `f` re-enters this handle (e.g. calls [`Self::get`] on a
    /// clone of it).
    pub fn update<R>(&self, f: impl FnOnce(&mut FractalParameters) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    /// Current recursion depth.
    ///
    /// ### Returns
    /// The `depth` field of the shared record.
    pub fn depth(&self) -> Depth {
        self.inner.borrow().depth
    }

    /// Overwrites only the recursion depth.
    ///
    /// Any integer is accepted; the generator treats `depth <= 0` as an
    /// empty tree.
    ///
    /// ### Parameters
    /// - `depth` - New depth seen by every clone of this handle.
    pub fn set_depth(&self, depth: Depth) {
        self.inner.borrow_mut().depth = depth;
    }
}
