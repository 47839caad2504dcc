//! 予測API呼び出し
//!
//! 画像を multipart/form-data の `file` フィールドに載せて
//! `POST http://localhost:8000/predict` する。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, File, FormData, Request, RequestInit, RequestMode, Response};
use steel_defect_common::{parse_predict_response, Error, Prediction, PREDICT_URL, UPLOAD_FIELD};

/// JS側の失敗を通信エラーに変換
fn js_error(value: JsValue) -> Error {
    Error::Transport(format!("{:?}", value))
}

/// 送信用フォームを作成
///
/// Content-Typeはブラウザがboundary付きで設定するので触らない。
pub fn build_form(file: &File) -> Result<FormData, Error> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(js_error)?;
    Ok(form)
}

/// 画像を送信して予測結果を受け取る
///
/// `signal` がabortされると fetch は失敗として返る。
pub async fn submit(file: &File, signal: Option<&AbortSignal>) -> Result<Vec<Prediction>, Error> {
    let form = build_form(file)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);
    opts.set_signal(signal);

    let request = Request::new_with_str_and_init(PREDICT_URL, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Transport("window is unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Status(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text
        .as_string()
        .ok_or_else(|| Error::Transport("response body is not text".into()))?;

    parse_predict_response(&body)
}
