//! Captions for raster output.
//!
//! Text is shaped with `parley` from the bytes of one font file and drawn as `vello_cpu` glyph
//! runs. Captions do not change between frames, so each laid-out caption is cached.

use std::borrow::Cow;
use std::collections::HashMap;
use std::f64::consts::FRAC_PI_2;
use std::path::Path;
use std::sync::Arc;

use vello_cpu::kurbo::Affine;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{LissajousError, LissajousResult};
use crate::plot::figure::Panel;
use crate::plot::theme::Theme;

/// TrueType or OpenType font used for raster captions.
#[derive(Clone)]
pub struct CaptionFont {
    bytes: Arc<Vec<u8>>,
}

impl CaptionFont {
    /// Read a font file. The data is parsed when a backend registers it.
    pub fn from_path(path: &Path) -> LissajousResult<Self> {
        use anyhow::Context as _;
        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        Ok(Self::from_bytes(bytes))
    }

    /// Wrap font data already in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Arc::new(bytes),
        }
    }
}

impl std::fmt::Debug for CaptionFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptionFont")
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
struct CaptionKey {
    text: String,
    size_bits: u32,
    color: Rgba8,
}

/// Layout state for one registered font.
pub(crate) struct Captions {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
    family: String,
    font: vello_cpu::peniko::FontData,
    layouts: HashMap<CaptionKey, Arc<parley::Layout<Rgba8>>>,
}

impl Captions {
    /// Register `font`; fails when the data holds no usable font family.
    pub(crate) fn new(font: &CaptionFont) -> LissajousResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| LissajousError::invalid("font data contains no usable font family"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| LissajousError::invalid("registered font family has no name"))?
            .to_owned();
        tracing::debug!(family = %family, "caption font registered");

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
            font: vello_cpu::peniko::FontData::new(
                vello_cpu::peniko::Blob::from(font.bytes.to_vec()),
                0,
            ),
            layouts: HashMap::new(),
        })
    }

    fn layout(&mut self, text: &str, size_px: f32, color: Rgba8) -> Arc<parley::Layout<Rgba8>> {
        let key = CaptionKey {
            text: text.to_owned(),
            size_bits: size_px.to_bits(),
            color,
        };
        if let Some(layout) = self.layouts.get(&key) {
            return Arc::clone(layout);
        }

        let family = self.family.clone();
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(color));
        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);

        let layout = Arc::new(layout);
        self.layouts.insert(key, Arc::clone(&layout));
        layout
    }

    /// Title centred above the panel, x label centred below it, and the y label along its left
    /// edge reading bottom to top.
    pub(crate) fn draw_panel(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        panel: &Panel,
        theme: &Theme,
    ) {
        let r = panel.rect;
        let size = theme.caption_size as f32;
        let gap = theme.caption_size * 0.4;
        let mid_x = (r.x0 + r.x1) / 2.0;
        let mid_y = (r.y0 + r.y1) / 2.0;

        if let Some(title) = &panel.title {
            let layout = self.layout(title, size, theme.text);
            let (w, h) = extent(&layout);
            self.fill(ctx, &layout, Affine::translate((mid_x - w / 2.0, r.y0 - gap - h)));
        }
        if let Some(label) = &panel.x_label {
            let layout = self.layout(label, size, theme.text);
            let (w, _) = extent(&layout);
            self.fill(ctx, &layout, Affine::translate((mid_x - w / 2.0, r.y1 + gap)));
        }
        if let Some(label) = &panel.y_label {
            let layout = self.layout(label, size, theme.text);
            let (w, h) = extent(&layout);
            let transform = Affine::translate((r.x0 - gap - h / 2.0, mid_y))
                * Affine::rotate(-FRAC_PI_2)
                * Affine::translate((-w / 2.0, -h / 2.0));
            self.fill(ctx, &layout, transform);
        }
        ctx.reset_transform();
    }

    fn fill(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        layout: &parley::Layout<Rgba8>,
        transform: Affine,
    ) {
        ctx.set_transform(transform);
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let c = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }
}

fn extent(layout: &parley::Layout<Rgba8>) -> (f64, f64) {
    (f64::from(layout.width()), f64::from(layout.height()))
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
