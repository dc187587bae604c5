//! Building matrices from nested primitive arrays.
//!
//! [`Matrix::wrap`] copies any list of row-like values element by element.
//! The `wrap_*` functions pin the element type for the primitive widths so
//! callers holding plain arrays don't need a turbofish.

use super::Matrix;

impl<E: Clone> Matrix<E> {
    /// Copy `rows` into a new matrix. Row lengths are kept as given.
    ///
    /// ```
    /// use algebra_kit::Matrix;
    ///
    /// let m = Matrix::<i64>::wrap(&[[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m.shape(), (2, 3));
    /// ```
    pub fn wrap<R: AsRef<[E]>>(rows: &[R]) -> Self {
        Matrix::from_rows(rows.iter().map(|row| row.as_ref().to_vec()).collect())
    }
}

macro_rules! wrap_primitive {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Wrap rows of `", stringify!($ty), "` into a matrix.")]
            pub fn $name<R: AsRef<[$ty]>>(rows: &[R]) -> Matrix<$ty> {
                Matrix::wrap(rows)
            }
        )*
    };
}

wrap_primitive! {
    wrap_i8 => i8,
    wrap_i16 => i16,
    wrap_i32 => i32,
    wrap_i64 => i64,
    wrap_f32 => f32,
    wrap_f64 => f64,
    wrap_char => char,
    wrap_bool => bool,
}
