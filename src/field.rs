//! A dense, row-major two-dimensional buffer.  Every stage of the
//! pipeline takes one of these by value and hands back another of the
//! same shape.

use crate::camera::Dims;

/// Row-major samples; the sample for column `x`, row `y` lives at
/// `y * dims.x + x`.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<T> {
    dims: Dims,
    data: Vec<T>,
}

impl<T> Field<T> {
    /// Wraps an existing buffer.  Returns `None` if the buffer does not
    /// hold exactly one sample per pixel.
    pub fn from_vec(dims: Dims, data: Vec<T>) -> Option<Field<T>> {
        if data.len() == dims.area() {
            Some(Field { dims, data })
        } else {
            None
        }
    }

    /// Width and height.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for a field with no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The linear offset of column `x`, row `y`.
    pub fn offset(&self, x: usize, y: usize) -> usize {
        y * self.dims.x + x
    }

    /// The sample at column `x`, row `y`, if it is inside the field.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.dims.x && y < self.dims.y {
            self.data.get(self.offset(x, y))
        } else {
            None
        }
    }

    /// All samples in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable view of all samples in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Gives up the buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Applies `f` to every sample, keeping the shape.
    pub fn map<U, F>(self, f: F) -> Field<U>
    where
        F: FnMut(T) -> U,
    {
        Field {
            dims: self.dims,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}

impl<T: Clone> Field<T> {
    /// A field of `dims` with every sample set to `value`.
    pub fn filled(dims: Dims, value: T) -> Field<T> {
        Field {
            dims,
            data: vec![value; dims.area()],
        }
    }
}
