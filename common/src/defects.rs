//! 欠陥クラスと説明文テーブル
//!
//! 鋼材表面の6種類の欠陥クラス。説明文は静的・読み取り専用。

use serde::{Deserialize, Serialize};

/// 予測サーバが返す表記
const SERVER_ROLLED_IN_SCALE: &str = "rolled-in_scale";

/// 欠陥クラス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefectClass {
    Crazing,
    Inclusion,
    Patches,
    PittedSurface,
    RolledInScale,
    Scratches,
}

impl DefectClass {
    /// テーブル順の全クラス
    pub const ALL: [DefectClass; 6] = [
        DefectClass::Crazing,
        DefectClass::Inclusion,
        DefectClass::Patches,
        DefectClass::PittedSurface,
        DefectClass::RolledInScale,
        DefectClass::Scratches,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DefectClass::Crazing => "crazing",
            DefectClass::Inclusion => "inclusion",
            DefectClass::Patches => "patches",
            DefectClass::PittedSurface => "pitted_surface",
            DefectClass::RolledInScale => "rolled_in_scale",
            DefectClass::Scratches => "scratches",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DefectClass::Crazing => {
                "Network-type cracks caused by tensile stress on the steel surface."
            }
            DefectClass::Inclusion => "Foreign particles trapped inside the metal during formation.",
            DefectClass::Patches => "Dark cloudy areas from oxidation or corrosion reactions.",
            DefectClass::PittedSurface => "Circular pits formed due to chemical surface erosion.",
            DefectClass::RolledInScale => {
                "Metal flakes pressed into surface during rolling process."
            }
            DefectClass::Scratches => "Linear grooves formed due to abrasion and friction.",
        }
    }

    /// APIのクラス名から引く
    ///
    /// 予測サーバは `rolled-in_scale` を返すため、このキーだけ別名として受け付ける。
    /// 大文字小文字は区別する。
    pub fn from_key(key: &str) -> Option<Self> {
        if key == SERVER_ROLLED_IN_SCALE {
            return Some(DefectClass::RolledInScale);
        }
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// クラス名から説明文を引く（未知のクラスはNone）
pub fn describe(class_key: &str) -> Option<&'static str> {
    DefectClass::from_key(class_key).map(|c| c.description())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_known_keys_have_descriptions() {
        for key in [
            "crazing",
            "inclusion",
            "patches",
            "pitted_surface",
            "rolled_in_scale",
            "scratches",
        ] {
            assert!(describe(key).is_some(), "{} に説明文がない", key);
        }
    }

    #[test]
    fn test_describe_scratches() {
        assert_eq!(
            describe("scratches"),
            Some("Linear grooves formed due to abrasion and friction.")
        );
    }

    #[test]
    fn test_hyphenated_server_key() {
        assert_eq!(DefectClass::from_key("rolled-in_scale"), Some(DefectClass::RolledInScale));
    }

    #[test]
    fn test_other_hyphenated_keys_are_unknown() {
        assert_eq!(describe("pitted-surface"), None);
        assert_eq!(describe("rolled-in-scale"), None);
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(describe("rust_stain"), None);
        assert_eq!(describe(""), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(describe("SCRATCHES"), None);
    }

    #[test]
    fn test_key_round_trip() {
        for class in DefectClass::ALL {
            assert_eq!(DefectClass::from_key(class.key()), Some(class));
        }
    }

    #[test]
    fn test_serde_uses_snake_case_key() {
        let json = serde_json::to_string(&DefectClass::PittedSurface).expect("シリアライズ失敗");
        assert_eq!(json, "\"pitted_surface\"");
    }
}
