//! 误码模型
//!
//! 按单位（包级）独立判定的随机丢弃策略，附着在链路的某个方向上。
//! 判定之间互不相关，也不受其他流状态影响。

use crate::err::ConfigurationError;
use rand::Rng;

/// 丢弃判定的单位。目前只有包级。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorUnit {
    Packet,
}

/// 随机丢包描述符。附着后不可变；重新附着即整体替换。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorModel {
    loss_probability: f64,
    unit: ErrorUnit,
}

impl ErrorModel {
    /// 创建包级丢包模型。概率必须落在 [0, 1]。
    pub fn packet_loss(loss_probability: f64) -> Result<ErrorModel, ConfigurationError> {
        if !(0.0..=1.0).contains(&loss_probability) {
            return Err(ConfigurationError::LossProbabilityOutOfRange(
                loss_probability,
            ));
        }
        Ok(ErrorModel {
            loss_probability,
            unit: ErrorUnit::Packet,
        })
    }

    pub fn loss_probability(&self) -> f64 {
        self.loss_probability
    }

    pub fn unit(&self) -> ErrorUnit {
        self.unit
    }

    /// 在交付时刻做一次独立判定：true 表示该包被丢弃。
    pub fn should_drop<R: Rng>(&self, rng: &mut R) -> bool {
        if self.loss_probability <= 0.0 {
            return false;
        }
        if self.loss_probability >= 1.0 {
            return true;
        }
        rng.r#gen::<f64>() < self.loss_probability
    }
}
