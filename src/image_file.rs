//! 画像ファイルの読み込み

use crate::error::{DefectError, Result};
use std::path::Path;

/// 送信する画像（ブラウザの `File` に相当）
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePayload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

const IMAGE_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("bmp", "image/bmp"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
];

/// 拡張子からMIMEタイプを推定（大文字小文字を区別しない）
pub fn mime_for_path(path: &Path) -> &'static str {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .and_then(|ext| {
            IMAGE_TYPES
                .iter()
                .find(|(e, _)| *e == ext)
                .map(|(_, mime)| *mime)
        })
        .unwrap_or("application/octet-stream")
}

/// 画像を読み込む
///
/// 形式の判定は予測サーバに任せるので、拡張子では弾かない。
pub fn load_image(path: &Path) -> Result<ImagePayload> {
    if !path.is_file() {
        return Err(DefectError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    if bytes.is_empty() {
        return Err(DefectError::EmptyImage(path.display().to_string()));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(ImagePayload {
        file_name,
        mime_type: mime_for_path(path).to_string(),
        bytes,
    })
}
