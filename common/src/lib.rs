//! Steel Defect Detector Common Library
//!
//! ブラウザ(WASM)と端末版で共有される型・状態・表示ロジック

pub mod types;
pub mod defects;
pub mod error;
pub mod render;
pub mod session;

pub use types::{Prediction, PredictResponse, parse_predict_response, PREDICT_URL, UPLOAD_FIELD};
pub use defects::{DefectClass, describe};
pub use error::{Error, Result};
pub use render::{ResultCard, bar_width_percent, confidence_label, result_cards};
pub use session::{Completion, ImageId, Phase, SelectedImage, SessionState, SubmissionTicket};
