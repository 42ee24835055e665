use napi::bindgen_prelude::*;
use napi::Task;
use napi_derive::napi;

fn to_js_err(e: blurhash_decode::DecodeError) -> Error {
    Error::from_reason(e.to_string())
}

fn options(width: Option<u32>, height: Option<u32>, punch: Option<f64>) -> blurhash_decode::DecodeOptions {
    blurhash_decode::DecodeOptions::new(width.unwrap_or(0), height.unwrap_or(0))
        .with_punch(punch.unwrap_or(blurhash_decode::DEFAULT_PUNCH))
}

/// Decode a BlurHash string into raw RGBA pixel data.
///
/// @param blurhash - The BlurHash string to decode.
/// @param width - Desired output width in pixels (omitted or 0 selects 32x32).
/// @param height - Desired output height in pixels (omitted or 0 selects 32x32).
/// @param punch - Contrast adjustment factor (default 1.0).
/// @returns A Buffer of length width * height * 4 containing RGBA pixel data.
#[napi]
pub fn decode(
    blurhash: String,
    width: Option<u32>,
    height: Option<u32>,
    punch: Option<f64>,
) -> Result<Buffer> {
    let image = blurhash_decode::decode_with_options(&blurhash, &options(width, height, punch))
        .map_err(to_js_err)?;
    Ok(Buffer::from(image.into_raw()))
}

/// Decode a BlurHash string into a Uint8Array (for browser/Deno compatibility).
///
/// @param blurhash - The BlurHash string to decode.
/// @param width - Desired output width in pixels.
/// @param height - Desired output height in pixels.
/// @param punch - Contrast adjustment factor (default 1.0).
/// @returns A Uint8Array of RGBA pixel data, suitable for `ImageData`.
#[napi]
pub fn decode_to_uint8_array(
    blurhash: String,
    width: Option<u32>,
    height: Option<u32>,
    punch: Option<f64>,
) -> Result<Uint8Array> {
    let image = blurhash_decode::decode_with_options(&blurhash, &options(width, height, punch))
        .map_err(to_js_err)?;
    Ok(Uint8Array::from(image.into_raw()))
}

/// A decoded image with its effective dimensions.
#[napi(object)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub data: Buffer,
}

impl From<blurhash_decode::PixelBuffer> for DecodedImage {
    fn from(image: blurhash_decode::PixelBuffer) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            data: Buffer::from(image.into_raw()),
        }
    }
}

/// Decode an image-provider request id such as `"<blurhash>?punch=1.5"`.
///
/// @param id - The request id.
/// @param width - Desired output width (omitted or 0 selects 32x32).
/// @param height - Desired output height (omitted or 0 selects 32x32).
/// @returns The decoded RGBA image and its dimensions.
#[napi]
pub fn decode_request(id: String, width: Option<u32>, height: Option<u32>) -> Result<DecodedImage> {
    blurhash_decode::decode_request(&id, width.unwrap_or(0), height.unwrap_or(0))
        .map(DecodedImage::from)
        .map_err(to_js_err)
}

/// Component counts of a BlurHash.
#[napi(object)]
pub struct Components {
    pub components_x: u32,
    pub components_y: u32,
}

/// Extract the number of X and Y components from a BlurHash string.
///
/// @param blurhash - The BlurHash string.
/// @returns An object with componentsX and componentsY fields.
#[napi]
pub fn get_components(blurhash: String) -> Result<Components> {
    let (cx, cy) = blurhash_decode::components(&blurhash).map_err(to_js_err)?;
    Ok(Components {
        components_x: cx,
        components_y: cy,
    })
}

/// Convert an sRGB byte value (0-255) to linear RGB (0.0-1.0).
#[napi]
pub fn srgb_to_linear(value: u8) -> f64 {
    blurhash_decode::srgb_to_linear(value)
}

/// Convert a linear RGB value (0.0-1.0) to an sRGB byte value (0-255).
#[napi]
pub fn linear_to_srgb(value: f64) -> u8 {
    blurhash_decode::linear_to_srgb(value)
}

// --- Async versions (run on libuv thread pool) ---

pub struct DecodeTask {
    blurhash: String,
    options: blurhash_decode::DecodeOptions,
}

impl Task for DecodeTask {
    type Output = Vec<u8>;
    type JsValue = Buffer;

    fn compute(&mut self) -> Result<Self::Output> {
        blurhash_decode::decode_with_options(&self.blurhash, &self.options)
            .map(blurhash_decode::PixelBuffer::into_raw)
            .map_err(to_js_err)
    }

    fn resolve(&mut self, _env: Env, output: Self::Output) -> Result<Self::JsValue> {
        Ok(Buffer::from(output))
    }
}

/// Async version of decode that runs on the libuv thread pool.
/// Returns a Promise<Buffer>.
///
/// @param blurhash - The BlurHash string to decode.
/// @param width - Desired output width in pixels.
/// @param height - Desired output height in pixels.
/// @param punch - Contrast adjustment factor (default 1.0).
/// @returns A Promise resolving to a Buffer of RGBA pixel data.
#[napi]
pub fn decode_async(
    blurhash: String,
    width: Option<u32>,
    height: Option<u32>,
    punch: Option<f64>,
) -> AsyncTask<DecodeTask> {
    AsyncTask::new(DecodeTask {
        blurhash,
        options: options(width, height, punch),
    })
}

pub struct DecodeRequestTask {
    id: String,
    width: u32,
    height: u32,
}

impl Task for DecodeRequestTask {
    type Output = blurhash_decode::PixelBuffer;
    type JsValue = DecodedImage;

    fn compute(&mut self) -> Result<Self::Output> {
        blurhash_decode::decode_request(&self.id, self.width, self.height).map_err(to_js_err)
    }

    fn resolve(&mut self, _env: Env, output: Self::Output) -> Result<Self::JsValue> {
        Ok(DecodedImage::from(output))
    }
}

/// Async version of decodeRequest that runs on the libuv thread pool.
/// Returns a Promise<DecodedImage>.
///
/// @param id - The request id, e.g. `"<blurhash>?punch=1.5"`.
/// @param width - Desired output width (omitted or 0 selects 32x32).
/// @param height - Desired output height (omitted or 0 selects 32x32).
#[napi]
pub fn decode_request_async(
    id: String,
    width: Option<u32>,
    height: Option<u32>,
) -> AsyncTask<DecodeRequestTask> {
    AsyncTask::new(DecodeRequestTask {
        id,
        width: width.unwrap_or(0),
        height: height.unwrap_or(0),
    })
}
