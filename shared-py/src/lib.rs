use deployment_shared::error::SummationError;
use deployment_shared::logging::init_logging as init_logging_impl;
use deployment_shared::systems::greeting::message as message_impl;
use deployment_shared::systems::summation::try_sum_with_offset;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

fn to_py_err(err: SummationError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Returns "Hello, " followed by `name`.
#[pyfunction]
fn message(name: &str) -> PyResult<String> {
    Ok(message_impl(name))
}

/// Sums the first `n` values and adds 100.
#[pyfunction]
fn sum_with_offset(n: usize, values: Vec<i32>) -> PyResult<i64> {
    try_sum_with_offset(n, &values).map_err(to_py_err)
}

/// Installs an env_logger backend so summation diagnostics reach stderr.
#[pyfunction]
#[pyo3(signature = (level=None))]
fn init_logging(level: Option<&str>) -> PyResult<()> {
    init_logging_impl(level).map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

/// A Python module implemented in Rust.
#[pymodule]
fn hello(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(message, m)?)?;
    m.add_function(wrap_pyfunction!(sum_with_offset, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    Ok(())
}

