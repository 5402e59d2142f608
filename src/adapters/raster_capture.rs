//! Block-outline PNG rendering of the snippet card.
//!
//! Without a font rasterizer each word is drawn as a filled bar exactly as
//! wide as the measured word, wrapped to the card width. The result shows
//! line breaks and truncation risk the way the live card would.

use std::io::Cursor;

use async_trait::async_trait;
use image::{ImageFormat, Rgba, RgbaImage};

use crate::export::{SnippetRegion, Theme};
use crate::metrics::{DisplayMode, TextMetrics};
use crate::traits::{CaptureError, CapturedImage, FontSpec, RegionCapture};

const TITLE_FONT: FontSpec = FontSpec::arial(20.0).bold();
const TITLE_LINE_HEIGHT: u32 = 28;
const BODY_LINE_HEIGHT: u32 = 24;
const GAP_AFTER_TITLE: u32 = 8;
const GAP_AFTER_URL: u32 = 16;

/// Estimate used for a word when measurement is unavailable.
const FALLBACK_EM_PER_CHAR: f32 = 0.55;

struct Palette {
    background: Rgba<u8>,
    title: Rgba<u8>,
    url: Rgba<u8>,
    description: Rgba<u8>,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Rgba([255, 255, 255, 255]),
                title: Rgba([26, 13, 171, 255]),
                url: Rgba([44, 156, 122, 255]),
                description: Rgba([60, 64, 67, 255]),
            },
            Theme::Dark => Self {
                background: Rgba([17, 24, 39, 255]),
                title: Rgba([138, 180, 248, 255]),
                url: Rgba([44, 156, 122, 255]),
                description: Rgba([229, 231, 235, 255]),
            },
        }
    }
}

/// Card geometry for a display mode, in pixels.
fn card_geometry(mode: DisplayMode) -> (u32, u32) {
    match mode {
        // max-w-2xl with p-8
        DisplayMode::Desktop => (672, 32),
        // 375px phone viewport with p-6
        DisplayMode::Mobile => (375, 24),
    }
}

/// A word bar positioned within one wrapped line.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bar {
    line: u32,
    x: f32,
    width: f32,
}

/// Production [`RegionCapture`] producing a PNG with the `image` crate.
#[derive(Debug, Clone)]
pub struct RasterCapture {
    metrics: TextMetrics,
}

impl RasterCapture {
    pub fn new(metrics: TextMetrics) -> Self {
        Self { metrics }
    }

    fn word_width(&self, word: &str, font: &FontSpec) -> f32 {
        self.metrics
            .measure_with(word, font)
            .unwrap_or_else(|_| word.chars().count() as f32 * FALLBACK_EM_PER_CHAR * font.size_px)
    }

    /// Greedy word wrap into bars. Returns the bars and the line count.
    fn layout(&self, text: &str, font: &FontSpec, max_width: f32) -> (Vec<Bar>, u32) {
        let space = self.word_width(" ", font);
        let mut bars = Vec::new();
        let mut line = 0;
        let mut x = 0.0_f32;

        for word in text.split_whitespace() {
            let width = self.word_width(word, font).min(max_width);
            if x > 0.0 && x + space + width > max_width {
                line += 1;
                x = 0.0;
            }
            if x > 0.0 {
                x += space;
            }
            bars.push(Bar { line, x, width });
            x += width;
        }

        let lines = if bars.is_empty() { 0 } else { line + 1 };
        (bars, lines)
    }

    fn render(&self, region: &SnippetRegion) -> RgbaImage {
        let (card_width, padding) = card_geometry(region.mode);
        let content_width = (card_width - 2 * padding) as f32;
        let body_font = region.mode.font();
        let palette = Palette::for_theme(region.theme);

        let (title_bars, title_lines) = self.layout(&region.title, &TITLE_FONT, content_width);
        let (url_bars, url_lines) = self.layout(&region.url, &body_font, content_width);
        let (desc_bars, desc_lines) = self.layout(&region.description, &body_font, content_width);

        let title_top = padding;
        let url_top = title_top + title_lines * TITLE_LINE_HEIGHT + GAP_AFTER_TITLE;
        let desc_top = url_top + url_lines * BODY_LINE_HEIGHT + GAP_AFTER_URL;
        let height = desc_top + desc_lines * BODY_LINE_HEIGHT + padding;

        let mut canvas = RgbaImage::from_pixel(card_width, height, palette.background);
        let sections = [
            (&title_bars, title_top, TITLE_LINE_HEIGHT, palette.title),
            (&url_bars, url_top, BODY_LINE_HEIGHT, palette.url),
            (&desc_bars, desc_top, BODY_LINE_HEIGHT, palette.description),
        ];
        for (bars, top, line_height, color) in sections {
            for bar in bars.iter() {
                let y = top + bar.line * line_height + line_height / 4;
                let x = padding + bar.x.round() as u32;
                let width = (bar.width.round() as u32).max(1);
                fill_rect(&mut canvas, x, y, width, line_height / 2, color);
            }
        }
        canvas
    }
}

fn fill_rect(canvas: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    let x_end = (x + width).min(canvas.width());
    let y_end = (y + height).min(canvas.height());
    for py in y..y_end {
        for px in x..x_end {
            canvas.put_pixel(px, py, color);
        }
    }
}

#[async_trait]
impl RegionCapture for RasterCapture {
    async fn capture(&self, region: &SnippetRegion) -> Result<CapturedImage, CaptureError> {
        let canvas = self.render(region);
        let (width, height) = canvas.dimensions();

        let mut png = Vec::new();
        canvas
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| CaptureError::EncodeFailed(e.to_string()))?;

        Ok(CapturedImage { png, width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::FixedWidthMetrics;
    use std::sync::Arc;

    fn capture() -> RasterCapture {
        RasterCapture::new(TextMetrics::new(Arc::new(FixedWidthMetrics::new(0.5))))
    }

    fn region(mode: DisplayMode) -> SnippetRegion {
        SnippetRegion {
            title: "Buy Shoes Online".to_string(),
            url: "example.com/shoes".to_string(),
            description: "Great deals on shoes.".to_string(),
            mode,
            theme: Theme::Light,
        }
    }

    #[test]
    fn test_layout_wraps_at_max_width() {
        // Each 4-char word is 32px at 16px/0.5em, a space is 8px.
        let (bars, lines) = capture().layout("aaaa bbbb cccc", &FontSpec::arial(16.0), 75.0);
        assert_eq!(lines, 2);
        assert_eq!(bars[0], Bar { line: 0, x: 0.0, width: 32.0 });
        assert_eq!(bars[1], Bar { line: 0, x: 40.0, width: 32.0 });
        assert_eq!(bars[2], Bar { line: 1, x: 0.0, width: 32.0 });
    }

    #[test]
    fn test_layout_empty_text_has_no_lines() {
        let (bars, lines) = capture().layout("   ", &FontSpec::arial(16.0), 100.0);
        assert!(bars.is_empty());
        assert_eq!(lines, 0);
    }

    #[tokio::test]
    async fn test_capture_produces_png_of_card_width() {
        let image = capture().capture(&region(DisplayMode::Desktop)).await.unwrap();
        assert_eq!(&image.png[..4], b"\x89PNG");
        assert_eq!(image.width, 672);
        assert_eq!(image.height, 32 + 28 + 8 + 24 + 16 + 24 + 32);

        let decoded = image::load_from_memory(&image.png).unwrap();
        assert_eq!(decoded.width(), 672);
    }

    #[tokio::test]
    async fn test_mobile_card_is_narrower() {
        let image = capture().capture(&region(DisplayMode::Mobile)).await.unwrap();
        assert_eq!(image.width, 375);
    }

    #[tokio::test]
    async fn test_dark_theme_background() {
        let mut dark = region(DisplayMode::Desktop);
        dark.theme = Theme::Dark;
        let image = capture().capture(&dark).await.unwrap();
        let decoded = image::load_from_memory(&image.png).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(0, 0), &Rgba([17, 24, 39, 255]));
    }

    #[tokio::test]
    async fn test_capture_survives_unavailable_metrics() {
        let capture = RasterCapture::new(TextMetrics::new(Arc::new(FixedWidthMetrics::unavailable())));
        let image = capture.capture(&region(DisplayMode::Desktop)).await.unwrap();
        assert!(image.byte_size() > 0);
    }
}
