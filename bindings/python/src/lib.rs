use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

/// Convert a `DecodeError` into a Python `ValueError`.
fn to_py_err(e: blurhash_decode::DecodeError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Decode a BlurHash string into raw RGBA pixel data.
///
/// Args:
///     blurhash: The BlurHash string to decode.
///     width: Desired output width in pixels (0 selects the 32x32 default).
///     height: Desired output height in pixels (0 selects the 32x32 default).
///     punch: Contrast adjustment factor (default 1.0).
///     strict: Reject characters outside the base83 alphabet (default False).
///
/// Returns:
///     A bytes object of length width * height * 4, row-major RGBA.
#[pyfunction]
#[pyo3(signature = (blurhash, width = 32, height = 32, punch = 1.0, strict = false))]
fn decode(
    py: Python<'_>,
    blurhash: &str,
    width: u32,
    height: u32,
    punch: f64,
    strict: bool,
) -> PyResult<Py<PyBytes>> {
    let options = blurhash_decode::DecodeOptions::new(width, height)
        .with_punch(punch)
        .strict(strict);
    let image = py
        .allow_threads(|| blurhash_decode::decode_with_options(blurhash, &options))
        .map_err(to_py_err)?;
    Ok(PyBytes::new(py, image.as_bytes()).into())
}

/// Decode an image-provider request id such as ``"<blurhash>?punch=1.5"``.
///
/// Args:
///     id: The request id.
///     width: Desired output width (default 0, meaning 32).
///     height: Desired output height (default 0, meaning 32).
///
/// Returns:
///     A tuple (width, height, bytes) with row-major RGBA pixel data.
#[pyfunction]
#[pyo3(signature = (id, width = 0, height = 0))]
fn decode_request(
    py: Python<'_>,
    id: &str,
    width: u32,
    height: u32,
) -> PyResult<(u32, u32, Py<PyBytes>)> {
    let image = py
        .allow_threads(|| blurhash_decode::decode_request(id, width, height))
        .map_err(to_py_err)?;
    Ok((
        image.width(),
        image.height(),
        PyBytes::new(py, image.as_bytes()).into(),
    ))
}

/// Extract the number of X and Y components from a BlurHash string.
///
/// Args:
///     blurhash: The BlurHash string.
///
/// Returns:
///     A tuple (components_x, components_y).
#[pyfunction]
fn components(blurhash: &str) -> PyResult<(u32, u32)> {
    blurhash_decode::components(blurhash).map_err(to_py_err)
}

/// Convert an sRGB byte value (0-255) to linear RGB (0.0-1.0).
#[pyfunction]
fn srgb_to_linear(value: u8) -> f64 {
    blurhash_decode::srgb_to_linear(value)
}

/// Convert a linear RGB value (0.0-1.0) to an sRGB byte value (0-255).
#[pyfunction]
fn linear_to_srgb(value: f64) -> u8 {
    blurhash_decode::linear_to_srgb(value)
}

/// BlurHash placeholder decoding (Rust-powered).
#[pymodule]
fn blurhash(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(decode, m)?)?;
    m.add_function(wrap_pyfunction!(decode_request, m)?)?;
    m.add_function(wrap_pyfunction!(components, m)?)?;
    m.add_function(wrap_pyfunction!(srgb_to_linear, m)?)?;
    m.add_function(wrap_pyfunction!(linear_to_srgb, m)?)?;
    Ok(())
}
