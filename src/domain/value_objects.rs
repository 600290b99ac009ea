use serde::{Deserialize, Serialize};
use std::fmt;

/// 会員ID - 会員集約の識別子
///
/// リポジトリが保存時に採番する連番。1から始まり、再利用されない。
/// 採番順に並ぶため、IDの順序は登録順と一致する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(u64);

impl MemberId {
    pub fn from_u64(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
