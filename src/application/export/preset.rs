//! Resize and border presets for the raster tool

use std::path::Path;

use crate::domain::ports::ToolInvocation;
use crate::domain::value_objects::ExportSize;

pub const BORDER_COLOR: &str = "icc-color(gray, 0.96)";
pub const SEPARATOR_LIGHT: &str = "icc-color(gray, 0.8)";
pub const SEPARATOR_DARK: &str = "icc-color(gray, 0.6)";

/// Thin rule drawn between the image and the border
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separator {
    pub color: &'static str,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderSpec {
    pub color: &'static str,
    pub size: u32,
    /// Extra canvas below the image (for a "polaroid" bottom edge)
    pub bottom_padding: u32,
    /// Innermost first
    pub separators: Vec<Separator>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizePreset {
    pub size: ExportSize,
    pub width: u32,
    pub height: u32,
    pub quality: u32,
    pub border: Option<BorderSpec>,
}

impl ResizePreset {
    pub fn new(size: ExportSize, border: bool) -> Self {
        let (width, height, quality, border_size, bottom_padding, dark) = match size {
            ExportSize::Large => (4000, 3500, 99, 100, 20, 2),
            ExportSize::Medium => (2000, 1500, 97, 40, 10, 1),
            ExportSize::Small => (900, 800, 95, 20, 5, 1),
        };

        let border = border.then(|| BorderSpec {
            color: BORDER_COLOR,
            size: border_size,
            bottom_padding,
            separators: vec![
                Separator {
                    color: SEPARATOR_LIGHT,
                    size: 1,
                },
                Separator {
                    color: SEPARATOR_DARK,
                    size: dark,
                },
                Separator {
                    color: SEPARATOR_LIGHT,
                    size: 1,
                },
            ],
        });

        Self {
            size,
            width,
            height,
            quality,
            border,
        }
    }

    /// `WxH>`: shrink to fit, never enlarge
    pub fn geometry(&self) -> String {
        format!("{}x{}>", self.width, self.height)
    }

    fn border_args(&self) -> Vec<String> {
        let Some(border) = &self.border else {
            return Vec::new();
        };

        let mut args = Vec::new();
        for sep in &border.separators {
            args.extend([
                "-bordercolor".to_string(),
                sep.color.to_string(),
                "-border".to_string(),
                sep.size.to_string(),
            ]);
        }
        args.extend([
            "-bordercolor".to_string(),
            border.color.to_string(),
            "-border".to_string(),
            border.size.to_string(),
            "-background".to_string(),
            border.color.to_string(),
            "-extent".to_string(),
            format!("0x%[fx:h+{}]", border.bottom_padding),
        ]);
        args
    }

    /// `magick -quiet <src> -filter LanczosSharp -resize <geometry> [border] -quality <q> <dst>`
    pub fn raster_invocation(&self, program: &str, source: &Path, target: &Path) -> ToolInvocation {
        ToolInvocation::new(program)
            .arg("-quiet")
            .arg(source)
            .args(["-filter", "LanczosSharp", "-resize"])
            .arg(self.geometry())
            .args(self.border_args())
            .arg("-quality")
            .arg(self.quality.to_string())
            .arg(target)
    }
}
