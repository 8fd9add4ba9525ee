//! # Mock GIO 端口
//!
//! 模拟 GIO 端口，用于主机端测试和演示。
//!
//! ## 功能特性
//!
//! - 实现 [`GioPort`] trait
//! - 克隆共享同一份端口状态（与硬件的寄存器别名语义一致）
//! - 记录方向掩码和每一次 `(pin, level)` 写入，供断言使用
//! - 在方向配置之前拒绝输出写入
//!
//! ## 使用示例
//!
//! ```rust
//! use hercules_blink::gio::{GioPort, mock::MockGioPort};
//!
//! let mut port = MockGioPort::new("gioPORTB");
//! port.set_direction(0xFF).unwrap();
//!
//! let mut alias = port.clone();
//! alias.set_bit(6, true).unwrap();
//!
//! // 克隆写入的状态在原句柄上可见
//! assert!(port.level(6));
//! assert_eq!(port.writes(), [(6, true)]);
//! ```

use super::{GioError, GioPort};
use crate::compat::{Arc, Vec};
use spin::Mutex;

/// 端口共享状态
struct PortState {
    /// 方向掩码，`None` 表示尚未配置
    direction: Option<u8>,
    /// 当前各引脚输出电平
    levels: u8,
    /// 全部输出写入记录，按发生顺序
    writes: Vec<(u8, bool)>,
}

/// Mock GIO 端口
///
/// 克隆出的句柄与原句柄共享同一份底层状态，模拟多个任务
/// 各自持有同一物理端口句柄的场景。
#[derive(Clone)]
pub struct MockGioPort {
    name: &'static str,
    state: Arc<Mutex<PortState>>,
}

impl MockGioPort {
    /// 创建新的 Mock 端口，方向未配置
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Arc::new(Mutex::new(PortState {
                direction: None,
                levels: 0,
                writes: Vec::new(),
            })),
        }
    }

    /// 获取当前方向掩码（测试用）
    pub fn direction(&self) -> Option<u8> {
        self.state.lock().direction
    }

    /// 获取指定引脚的当前输出电平（测试用）
    pub fn level(&self, pin: u8) -> bool {
        (self.state.lock().levels >> pin) & 1 == 1
    }

    /// 获取全部写入记录（测试用）
    pub fn writes(&self) -> Vec<(u8, bool)> {
        self.state.lock().writes.clone()
    }

    /// 获取只落在指定引脚上的电平写入序列（测试用）
    pub fn writes_for(&self, pin: u8) -> Vec<bool> {
        self.state
            .lock()
            .writes
            .iter()
            .filter(|(p, _)| *p == pin)
            .map(|(_, level)| *level)
            .collect()
    }

    /// 写入总次数
    pub fn write_count(&self) -> usize {
        self.state.lock().writes.len()
    }
}

impl GioPort for MockGioPort {
    type Error = GioError;

    fn set_direction(&mut self, mask: u8) -> Result<(), Self::Error> {
        self.state.lock().direction = Some(mask);
        Ok(())
    }

    fn set_bit(&mut self, pin: u8, level: bool) -> Result<(), Self::Error> {
        if pin >= crate::config::PORT_PINS {
            return Err(GioError::PinOutOfRange);
        }
        let mut state = self.state.lock();
        let direction = state.direction.ok_or(GioError::NotInitialized)?;
        if (direction >> pin) & 1 == 0 {
            return Err(GioError::PinNotOutput);
        }
        if level {
            state.levels |= 1 << pin;
        } else {
            state.levels &= !(1 << pin);
        }
        state.writes.push((pin, level));
        Ok(())
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_port_new() {
        let port = MockGioPort::new("gioPORTB");
        assert_eq!(port.name(), "gioPORTB");
        assert_eq!(port.direction(), None);
        assert_eq!(port.write_count(), 0);
    }

    #[test]
    fn test_mock_port_direction_required() {
        let mut port = MockGioPort::new("gioPORTB");
        assert_eq!(port.set_bit(6, true), Err(GioError::NotInitialized));
    }

    #[test]
    fn test_mock_port_writes_recorded() {
        let mut port = MockGioPort::new("gioPORTB");
        port.set_direction(0xFF).unwrap();

        port.set_bit(6, true).unwrap();
        port.set_bit(6, false).unwrap();
        port.set_bit(7, true).unwrap();

        assert_eq!(port.writes(), [(6, true), (6, false), (7, true)]);
        assert_eq!(port.writes_for(6), [true, false]);
        assert!(!port.level(6));
        assert!(port.level(7));
    }

    #[test]
    fn test_mock_port_input_pin_rejected() {
        let mut port = MockGioPort::new("gioPORTB");
        // 只有低 4 位是输出
        port.set_direction(0x0F).unwrap();
        assert_eq!(port.set_bit(6, true), Err(GioError::PinNotOutput));
        assert!(port.set_bit(3, true).is_ok());
    }

    #[test]
    fn test_mock_port_pin_out_of_range() {
        let mut port = MockGioPort::new("gioPORTB");
        port.set_direction(0xFF).unwrap();
        assert_eq!(port.set_bit(8, true), Err(GioError::PinOutOfRange));
    }

    #[test]
    fn test_mock_port_clone_aliases_state() {
        let mut port = MockGioPort::new("gioPORTB");
        port.set_direction(0xFF).unwrap();

        let mut alias = port.clone();
        alias.set_bit(2, true).unwrap();

        assert!(port.level(2));
        assert_eq!(port.write_count(), 1);
    }
}
