use std::marker::PhantomData;

use super::ModelCodec;
use crate::error::{FittingError, Result};
use crate::geometry::Cylinder3;
use crate::math::Real;

const PARAM_LENGTH: usize = 7;

/// Encodes a [`Cylinder3`] as seven parameters.
///
/// Layout: axis point `x, y, z`, axis slope `x, y, z`, radius.
#[derive(Debug, Clone, Copy)]
pub struct CodecCylinder3<T>(PhantomData<T>);

impl<T> CodecCylinder3<T> {
    #[must_use]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for CodecCylinder3<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_length(found: usize) -> Result<()> {
    if found == PARAM_LENGTH {
        Ok(())
    } else {
        Err(FittingError::ParamLength {
            expected: PARAM_LENGTH,
            found,
        }
        .into())
    }
}

impl<T: Real> ModelCodec<Cylinder3<T>, T> for CodecCylinder3<T> {
    fn param_length(&self) -> usize {
        PARAM_LENGTH
    }

    fn encode(&self, model: &Cylinder3<T>, params: &mut [T]) -> Result<()> {
        check_length(params.len())?;
        let line = &model.line;
        params[..3].copy_from_slice(line.p.coords.as_slice());
        params[3..6].copy_from_slice(line.slope.as_slice());
        params[6] = model.radius;
        Ok(())
    }

    fn decode(&self, params: &[T], model: &mut Cylinder3<T>) -> Result<()> {
        check_length(params.len())?;
        *model = Cylinder3::from_values(
            params[0], params[1], params[2], params[3], params[4], params[5], params[6],
        );
        Ok(())
    }
}
