//! PyO3 bindings for selected `graham` functions.
//!
//! Notes
//! - Keep bindings thin and predictable; points cross the boundary as lists of
//!   `(x, y)` tuples.
//! - Invalid coordinates and unknown turn rules raise `ValueError`.

use pyo3::prelude::*;

mod hull;

#[pymodule]
fn graham_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", graham::VERSION)?;
    hull::register(m)?;
    Ok(())
}
