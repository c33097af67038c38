//! Cutout marshaling for API v0.7.
//!
//! Cutout bodies travel as blosc-compressed raw bytes in (time)ZYX
//! C-order; uint8 channels can additionally be fetched as a JPEG
//! filmstrip, where each z slice is concatenated in the y dimension.

use crate::error::{BossError, Result};
use crate::resource::ChannelResource;
use crate::service::volume::VolumeBackend;
use crate::service::{BossSession, Extents};
use ndarray::{Array, ArrayD, IxDyn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};

const BLOSC_MIME: &str = "application/blosc";
const JPEG_MIME: &str = "image/jpeg";

pub struct VolumeService0_7;

impl VolumeService0_7 {
    pub fn new() -> VolumeService0_7 {
        VolumeService0_7
    }
}

/// Build the `cutout/...` endpoint suffix with colon-delimited extents,
/// e.g. `cutout/kasthuri/ac4/em/0/0:512/0:512/0:16`.
fn cutout_suffix(
    resource: &ChannelResource,
    resolution: u8,
    x_range: Extents,
    y_range: Extents,
    z_range: Extents,
    time_range: Option<Extents>,
) -> String {
    let mut suffix = format!(
        "cutout/{route}/{res}/{x0}:{x1}/{y0}:{y1}/{z0}:{z1}",
        route = resource.route(),
        res = resolution,
        x0 = x_range.0,
        x1 = x_range.1,
        y0 = y_range.0,
        y1 = y_range.1,
        z0 = z_range.0,
        z1 = z_range.1,
    );
    if let Some(t_range) = time_range {
        suffix.push_str(&format!("/{}:{}", t_range.0, t_range.1));
    }
    suffix
}

/// Array shape implied by the requested extents: ZYX, with time as the
/// leading axis when a time range was asked for.
fn cutout_shape(
    x_range: Extents,
    y_range: Extents,
    z_range: Extents,
    time_range: Option<Extents>,
) -> Vec<usize> {
    let mut shape = Vec::with_capacity(4);
    if let Some(t_range) = time_range {
        shape.push((t_range.1 - t_range.0) as usize);
    }
    shape.push((z_range.1 - z_range.0) as usize);
    shape.push((y_range.1 - y_range.0) as usize);
    shape.push((x_range.1 - x_range.0) as usize);
    shape
}

/// Rewrap a flat response body in an ndarray of the requested shape.
fn to_array(raw: Vec<u8>, shape: Vec<usize>) -> Result<ArrayD<u8>> {
    Array::from_shape_vec(IxDyn(&shape), raw).map_err(|err| BossError::Decode(err.to_string()))
}

/// A filmstrip is `x` pixels wide and `z * y` pixels tall; its row-major
/// pixel order is exactly the C-order of the (z, y, x) cutout, so after a
/// dimension check this is a straight reshape.
fn unstack_filmstrip(
    raw: Vec<u8>,
    width: u32,
    height: u32,
    x_range: Extents,
    y_range: Extents,
    z_range: Extents,
) -> Result<ArrayD<u8>> {
    let shape = cutout_shape(x_range, y_range, z_range, None);
    if width as usize != shape[2] || height as usize != shape[0] * shape[1] {
        return Err(BossError::Decode(format!(
            "filmstrip is {}x{} but extents imply {}x{}",
            width,
            height,
            shape[2],
            shape[0] * shape[1]
        )));
    }
    to_array(raw, shape)
}

impl VolumeBackend for VolumeService0_7 {
    fn cutout_create(
        &self,
        session: &BossSession,
        resource: &ChannelResource,
        resolution: u8,
        x_range: Extents,
        y_range: Extents,
        z_range: Extents,
        time_range: Option<Extents>,
        volume: &ArrayD<u8>,
    ) -> Result<()> {
        let url = session.build_url(
            super::VERSION,
            &cutout_suffix(resource, resolution, x_range, y_range, z_range, time_range),
        );

        let raw: Vec<u8> = volume.iter().cloned().collect();
        let ctx = blosc::Context::new();
        let compressed: blosc::Buffer<u8> = ctx.compress(&raw[..]);
        let body: Vec<u8> = compressed.into();

        session.send(
            session
                .post(&url)
                .header(CONTENT_TYPE, BLOSC_MIME)
                .body(body),
        )?;
        Ok(())
    }

    fn cutout_get(
        &self,
        session: &BossSession,
        resource: &ChannelResource,
        resolution: u8,
        x_range: Extents,
        y_range: Extents,
        z_range: Extents,
        time_range: Option<Extents>,
    ) -> Result<ArrayD<u8>> {
        let url = session.build_url(
            super::VERSION,
            &cutout_suffix(resource, resolution, x_range, y_range, z_range, time_range),
        );

        let response = session.send(session.get(&url).header(ACCEPT, BLOSC_MIME))?;
        let body = response.bytes()?;

        // This is unsafe because the bytes are coming directly over the wire.
        let raw: Vec<u8> = unsafe { blosc::decompress_bytes(&body[..]) }
            .map_err(|_| BossError::Decode("blosc decompression failed".to_string()))?;

        to_array(raw, cutout_shape(x_range, y_range, z_range, time_range))
    }

    fn cutout_get_jpeg(
        &self,
        session: &BossSession,
        resource: &ChannelResource,
        resolution: u8,
        x_range: Extents,
        y_range: Extents,
        z_range: Extents,
    ) -> Result<ArrayD<u8>> {
        let url = session.build_url(
            super::VERSION,
            &cutout_suffix(resource, resolution, x_range, y_range, z_range, None),
        );

        let response = session.send(session.get(&url).header(ACCEPT, JPEG_MIME))?;
        let body = response.bytes()?;

        let image = image::load_from_memory_with_format(&body, image::ImageFormat::Jpeg)
            .map_err(|err| BossError::Decode(err.to_string()))?;
        let strip = image.to_luma();
        let (width, height) = strip.dimensions();
        unstack_filmstrip(strip.into_raw(), width, height, x_range, y_range, z_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource() -> ChannelResource {
        ChannelResource::new("kasthuri", "ac4", "em")
    }

    #[test]
    fn suffix_without_time() {
        assert_eq!(
            cutout_suffix(&resource(), 0, (0, 512), (0, 512), (0, 16), None),
            "cutout/kasthuri/ac4/em/0/0:512/0:512/0:16"
        );
    }

    #[test]
    fn suffix_with_time() {
        assert_eq!(
            cutout_suffix(&resource(), 2, (10, 20), (30, 40), (5, 6), Some((30, 40))),
            "cutout/kasthuri/ac4/em/2/10:20/30:40/5:6/30:40"
        );
    }

    #[test]
    fn shape_is_zyx() {
        assert_eq!(cutout_shape((0, 512), (0, 256), (0, 16), None), [16, 256, 512]);
    }

    #[test]
    fn shape_with_time_is_tzyx() {
        assert_eq!(
            cutout_shape((0, 512), (0, 256), (0, 16), Some((30, 40))),
            [10, 16, 256, 512]
        );
    }

    #[test]
    fn reshape_checks_length() {
        let err = to_array(vec![0; 10], vec![2, 2, 2]);
        assert!(err.is_err());
    }

    #[test]
    fn filmstrip_unstacks_to_zyx() {
        // 2 z slices of 3x4, stacked along y into a 4x6 strip.
        let raw: Vec<u8> = (0..24).collect();
        let array = unstack_filmstrip(raw, 4, 6, (0, 4), (0, 3), (0, 2)).unwrap();
        assert_eq!(array.shape(), [2, 3, 4]);
        assert_eq!(array[[0, 0, 0]], 0);
        assert_eq!(array[[0, 2, 3]], 11);
        assert_eq!(array[[1, 0, 0]], 12);
        assert_eq!(array[[1, 2, 3]], 23);
    }

    #[test]
    fn filmstrip_dimension_mismatch() {
        let result = unstack_filmstrip(vec![0; 24], 4, 6, (0, 4), (0, 3), (0, 3));
        match result {
            Err(BossError::Decode(_)) => (),
            _ => panic!("expected a decode error"),
        }
    }
}
