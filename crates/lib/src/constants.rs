//! # Shared Constants
//!
//! The image-style and aspect-ratio catalogue offered to callers. The pipeline
//! treats style and ratio as opaque strings; these lists only supply defaults and
//! something for a picker to show.

use serde::Serialize;

/// A named option: a Korean display label and the value sent to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogueEntry {
    pub name: &'static str,
    pub value: &'static str,
}

pub const IMAGE_STYLES: &[CatalogueEntry] = &[
    CatalogueEntry {
        name: "미니어처 디오라마 스타일",
        value: "macro photography of a miniature diorama. The scene includes tiny, realistic-looking plastic models representing the people.",
    },
    CatalogueEntry {
        name: "한국 수묵화 스타일",
        value: "traditional Korean ink wash painting style, serene and artistic",
    },
    CatalogueEntry {
        name: "애니메이션 스타일",
        value: "anime style",
    },
    CatalogueEntry {
        name: "픽셀 아트 스타일",
        value: "pixel art style",
    },
    CatalogueEntry {
        name: "수채화 스타일",
        value: "watercolor painting style",
    },
];

pub const ASPECT_RATIOS: &[CatalogueEntry] = &[
    CatalogueEntry {
        name: "정사각형 (1:1)",
        value: "1:1",
    },
    CatalogueEntry {
        name: "와이드스크린 (16:9)",
        value: "16:9",
    },
    CatalogueEntry {
        name: "세로 (9:16)",
        value: "9:16",
    },
    CatalogueEntry {
        name: "표준 (4:3)",
        value: "4:3",
    },
    CatalogueEntry {
        name: "사진 (3:2)",
        value: "3:2",
    },
];

/// Used when a request does not name a style.
pub const DEFAULT_IMAGE_STYLE: &str = IMAGE_STYLES[0].value;

/// Used when a request does not name an aspect ratio.
pub const DEFAULT_ASPECT_RATIO: &str = ASPECT_RATIOS[0].value;
