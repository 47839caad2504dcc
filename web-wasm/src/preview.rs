//! プレビュー用のData URL読み込み

use wasm_bindgen::prelude::*;
use web_sys::{File, FileList, FileReader};

/// 入力イベントのファイル一覧から先頭だけ取る（空ならNone）
pub fn first_file(files: Option<FileList>) -> Option<File> {
    files.and_then(|f| f.get(0))
}

/// ファイルを非同期にData URLへ変換し、完了時に `on_ready` を呼ぶ
pub fn read_as_data_url<F>(file: &File, on_ready: F)
where
    F: FnOnce(String) + 'static,
{
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            gloo::console::error!("FileReader unavailable:", e);
            return;
        }
    };

    let reader_clone = reader.clone();
    let closure = Closure::once(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_ready(data_url);
            }
        }
    });

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    if let Err(e) = reader.read_as_data_url(file) {
        gloo::console::error!("Preview read failed:", e);
    }
}
