//! Adapters that let shape types plug into model-fitting frameworks.
//!
//! A fitting loop needs to create blank models, copy the best candidate into
//! a kept instance, and for non-linear refinement flatten a model into a
//! fixed-length parameter vector and back.

mod cylinder;

use std::marker::PhantomData;

pub use cylinder::CodecCylinder3;

use crate::error::Result;
use crate::geometry::{Cylinder3, Sphere3};
use crate::transform::{Se2, Se3};

/// Creates and copies model instances for a fitting algorithm.
pub trait ModelManager<M> {
    /// A new zero-initialized model.
    fn create_model_instance(&self) -> M;

    /// Overwrites every field of `dst` with the values in `src`.
    fn copy_model(&self, src: &M, dst: &mut M);
}

/// Converts a model to and from a flat parameter vector.
pub trait ModelCodec<M, T> {
    /// Number of parameters a model is encoded into.
    fn param_length(&self) -> usize;

    /// Writes the parameters of `model` into `params`.
    ///
    /// # Errors
    ///
    /// Returns [`FittingError::ParamLength`](crate::error::FittingError::ParamLength)
    /// if `params` is not exactly [`param_length`](Self::param_length) long.
    fn encode(&self, model: &M, params: &mut [T]) -> Result<()>;

    /// Reads `params` into `model`.
    ///
    /// # Errors
    ///
    /// Returns [`FittingError::ParamLength`](crate::error::FittingError::ParamLength)
    /// if `params` is not exactly [`param_length`](Self::param_length) long.
    fn decode(&self, params: &[T], model: &mut M) -> Result<()>;
}

/// [`ModelManager`] for any shape whose default value is its zero model.
#[derive(Debug, Clone, Copy)]
pub struct ShapeManager<M>(PhantomData<M>);

impl<M> ShapeManager<M> {
    #[must_use]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<M> Default for ShapeManager<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Default + Clone> ModelManager<M> for ShapeManager<M> {
    fn create_model_instance(&self) -> M {
        M::default()
    }

    fn copy_model(&self, src: &M, dst: &mut M) {
        dst.clone_from(src);
    }
}

pub type ModelManagerCylinder3<T> = ShapeManager<Cylinder3<T>>;
pub type ModelManagerSphere3<T> = ShapeManager<Sphere3<T>>;
pub type ModelManagerSe2<T> = ShapeManager<Se2<T>>;
pub type ModelManagerSe3<T> = ShapeManager<Se3<T>>;
