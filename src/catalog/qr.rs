//! Printable QR codes for checkpoint tokens.
//!
//! The parks department posts a printed QR code at each checkpoint; this
//! renders the code that the mobile scanner later decodes back into the
//! checkpoint's token.

use qrcode::render::unicode;
use qrcode::QrCode;
use thiserror::Error;

use super::types::Checkpoint;

/// Render a checkpoint's QR token as a terminal-printable block string.
pub fn printable_code(checkpoint: &Checkpoint) -> Result<String, QrRenderError> {
    let code = QrCode::new(checkpoint.qr_token.as_bytes())?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .quiet_zone(true)
        .build())
}

/// Render a checkpoint's QR token as an SVG document for print layout.
pub fn svg_code(checkpoint: &Checkpoint) -> Result<String, QrRenderError> {
    let code = QrCode::new(checkpoint.qr_token.as_bytes())?;
    Ok(code.render::<qrcode::render::svg::Color>().build())
}

/// QR rendering errors.
#[derive(Debug, Error)]
pub enum QrRenderError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CheckpointCatalog;

    #[test]
    fn test_every_builtin_checkpoint_renders() {
        let catalog = CheckpointCatalog::builtin();
        for cp in catalog.list() {
            let rendered = printable_code(cp).expect("render failed");
            assert!(!rendered.is_empty());
        }
    }

    #[test]
    fn test_svg_output_is_svg() {
        let catalog = CheckpointCatalog::builtin();
        let svg = svg_code(&catalog.list()[0]).expect("render failed");
        assert!(svg.contains("<svg"));
    }
}
